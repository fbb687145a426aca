use std::sync::Arc;

use super::Tracker;
use crate::{
    clock::{Clock, SystemClock},
    config::Config,
    currency::{CurrencyEntry, CurrencyTable, Locale, BASE_CURRENCY},
    ledger::{Calculator, RawValue},
};

/// Renders the remaining-cash message for a remaining allowance in base currency units.
///
/// The zero case is decided on the unconverted amount, so it is exact for every rate.
pub fn cash_message(remaining: i64, currency: &CurrencyEntry, locale: Locale) -> String {
    if remaining == 0 {
        return match locale {
            Locale::Ru => "Денег нет, держись".into(),
            Locale::En => "No money, hold on".into(),
        };
    }
    let converted = currency.convert(remaining);
    let name = currency.display_name(locale);
    if converted > 0.0 {
        match locale {
            Locale::Ru => format!("На сегодня осталось {:.2} {}", converted, name),
            Locale::En => format!("Left for today: {:.2} {}", converted, name),
        }
    } else {
        match locale {
            Locale::Ru => format!(
                "Денег нет, держись: твой долг - {:.2} {}",
                converted.abs(),
                name
            ),
            Locale::En => format!(
                "No money, hold on: your debt is {:.2} {}",
                converted.abs(),
                name
            ),
        }
    }
}

/// Daily spending against a limit, reported in a chosen currency.
#[derive(Debug, Clone)]
pub struct CashCalculator {
    calculator: Calculator,
    currencies: CurrencyTable,
    default_currency: String,
}

impl CashCalculator {
    pub fn new(limit: impl Into<RawValue>) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: impl Into<RawValue>, clock: Arc<dyn Clock>) -> Self {
        Self::with_options(limit, clock, Locale::default())
    }

    pub fn with_options(limit: impl Into<RawValue>, clock: Arc<dyn Clock>, locale: Locale) -> Self {
        Self {
            calculator: Calculator::with_options(limit, clock, locale),
            currencies: CurrencyTable::default(),
            default_currency: BASE_CURRENCY.to_string(),
        }
    }

    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self::with_options(&config.cash_limit, clock, config.locale)
            .with_default_currency(config.default_currency.clone())
    }

    pub fn with_currencies(mut self, currencies: CurrencyTable) -> Self {
        self.currencies = currencies;
        self
    }

    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = code.into();
        self
    }

    pub fn currencies(&self) -> &CurrencyTable {
        &self.currencies
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// Remaining allowance for today in `currency`. Unknown codes fall back to rubles.
    pub fn get_today_cash_remained(&self, currency: &str) -> String {
        let locale = self.calculator.locale();
        let entry = self.currencies.resolve(currency);
        if !entry.is_clean() {
            tracing::debug!(requested = currency, "falling back to base currency");
        }
        let entry = entry.into_logged(locale);
        cash_message(self.calculator.get_limit_remaining_today(), entry, locale)
    }

    pub fn get_default_cash_remained(&self) -> String {
        self.get_today_cash_remained(&self.default_currency)
    }
}

impl Tracker for CashCalculator {
    fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CurrencyTable {
        CurrencyTable::default()
    }

    #[test]
    fn zero_remaining_has_no_amount() {
        let usd = table().get("usd").cloned().unwrap();
        assert_eq!(cash_message(0, &usd, Locale::Ru), "Денег нет, держись");
    }

    #[test]
    fn positive_remaining_is_converted_and_rounded() {
        let table = table();
        assert_eq!(
            cash_message(1000, table.get("usd").unwrap(), Locale::Ru),
            "На сегодня осталось 16.67 USD"
        );
        assert_eq!(
            cash_message(700, table.get("eur").unwrap(), Locale::Ru),
            "На сегодня осталось 10.00 Euro"
        );
        assert_eq!(
            cash_message(5, table.get("rub").unwrap(), Locale::En),
            "Left for today: 5.00 RUB"
        );
    }

    #[test]
    fn negative_remaining_reports_debt() {
        let table = table();
        assert_eq!(
            cash_message(-120, table.get("usd").unwrap(), Locale::Ru),
            "Денег нет, держись: твой долг - 2.00 USD"
        );
        assert_eq!(
            cash_message(-1, table.get("rub").unwrap(), Locale::Ru),
            "Денег нет, держись: твой долг - 1.00 руб"
        );
    }
}
