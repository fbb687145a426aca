#![doc(test(attr(deny(warnings))))]

//! Limit Tracker records dated calorie or cash entries and reports how much of
//! a daily limit remains, with self-correcting validation of loose input.

pub mod clock;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::TrackerError;
pub use ledger::{Calculator, Diagnostic, RawValue, Record, StatsSummary, Validated};
pub use report::{CaloriesCalculator, CashCalculator, Locale, Tracker};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Limit Tracker tracing initialized.");
    });
}
