//! Report calculators: a shared [`Calculator`] composed with a message formatter.

pub mod calories;
pub mod cash;

pub use crate::currency::Locale;
pub use calories::{calories_message, CaloriesCalculator};
pub use cash::{cash_message, CashCalculator};

use crate::ledger::{Calculator, Record, StatsSummary};

/// Aggregation surface shared by every report calculator.
pub trait Tracker {
    fn calculator(&self) -> &Calculator;

    fn calculator_mut(&mut self) -> &mut Calculator;

    fn limit(&self) -> i64 {
        self.calculator().limit()
    }

    fn add_record(&mut self, record: Record) {
        self.calculator_mut().add_record(record);
    }

    fn get_today_stats(&self) -> i64 {
        self.calculator().get_today_stats()
    }

    fn get_week_stats(&self) -> i64 {
        self.calculator().get_week_stats()
    }

    fn get_limit_remaining_today(&self) -> i64 {
        self.calculator().get_limit_remaining_today()
    }

    fn summary(&self) -> StatsSummary {
        self.calculator().summary()
    }
}
