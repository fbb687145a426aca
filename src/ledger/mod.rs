//! Records, their validation rules, and the shared daily/weekly aggregation.

pub mod calculator;
pub mod record;
pub mod validation;

pub use calculator::{Calculator, StatsSummary, WEEK_WINDOW_DAYS};
pub use record::Record;
pub use validation::{
    emit, validate_amount, validate_date, validate_limit, Diagnostic, RawValue, Validated,
    DATE_FORMAT,
};
