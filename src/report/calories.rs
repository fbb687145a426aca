use std::sync::Arc;

use super::Tracker;
use crate::{
    clock::{Clock, SystemClock},
    config::Config,
    currency::Locale,
    ledger::{Calculator, RawValue},
};

/// Renders the remaining-calories message for a remaining daily allowance.
pub fn calories_message(remaining: i64, locale: Locale) -> String {
    match (remaining > 0, locale) {
        (true, Locale::Ru) => format!(
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {} кКал",
            remaining
        ),
        (true, Locale::En) => format!(
            "You can eat something else today, but with a total of no more than {} kcal",
            remaining
        ),
        (false, Locale::Ru) => "Хватит есть!".into(),
        (false, Locale::En) => "Stop eating!".into(),
    }
}

/// Daily calorie intake against a limit.
#[derive(Debug, Clone)]
pub struct CaloriesCalculator {
    calculator: Calculator,
}

impl CaloriesCalculator {
    pub fn new(limit: impl Into<RawValue>) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: impl Into<RawValue>, clock: Arc<dyn Clock>) -> Self {
        Self::with_options(limit, clock, Locale::default())
    }

    pub fn with_options(limit: impl Into<RawValue>, clock: Arc<dyn Clock>, locale: Locale) -> Self {
        Self {
            calculator: Calculator::with_options(limit, clock, locale),
        }
    }

    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self::with_options(&config.calories_limit, clock, config.locale)
    }

    pub fn get_calories_remained(&self) -> String {
        calories_message(
            self.calculator.get_limit_remaining_today(),
            self.calculator.locale(),
        )
    }
}

impl Tracker for CaloriesCalculator {
    fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }
}
