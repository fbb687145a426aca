use serde::{Deserialize, Serialize};

use crate::{
    errors::TrackerError,
    ledger::{Diagnostic, Validated},
};

pub const USD_RATE: f64 = 60.0;
pub const EURO_RATE: f64 = 70.0;
pub const RUB_RATE: f64 = 1.0;

/// Code of the currency every rate is expressed against.
pub const BASE_CURRENCY: &str = "rub";

/// Language used for report and diagnostic messages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "ru-RU", alias = "ru_RU")]
    Ru,
    #[serde(alias = "en-US", alias = "en_US")]
    En,
}

/// One row of the currency table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyEntry {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    /// Units of the base currency per one unit of this currency.
    pub rate: f64,
}

impl CurrencyEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>, rate: f64) -> Self {
        Self {
            code: normalize_code(&code.into()),
            name: name.into(),
            name_en: None,
            rate,
        }
    }

    pub fn with_english_name(mut self, name: impl Into<String>) -> Self {
        self.name_en = Some(name.into());
        self
    }

    pub fn display_name(&self, locale: Locale) -> &str {
        match (locale, &self.name_en) {
            (Locale::En, Some(name)) => name,
            _ => &self.name,
        }
    }

    /// Expresses a base-currency amount in this currency.
    pub fn convert(&self, base_amount: i64) -> f64 {
        base_amount as f64 / self.rate
    }
}

/// Currency lookup keyed by lowercase code.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurrencyTable {
    entries: Vec<CurrencyEntry>,
}

impl CurrencyTable {
    /// Builds a custom table. It must contain the base currency and only positive, finite rates.
    pub fn new(entries: Vec<CurrencyEntry>) -> Result<Self, TrackerError> {
        if let Some(bad) = entries
            .iter()
            .find(|entry| !entry.rate.is_finite() || entry.rate <= 0.0)
        {
            return Err(TrackerError::InvalidConfig(format!(
                "currency `{}` has non-positive rate {}",
                bad.code, bad.rate
            )));
        }
        let table = Self { entries };
        if table.get(BASE_CURRENCY).is_none() {
            return Err(TrackerError::InvalidConfig(format!(
                "currency table must contain `{}`",
                BASE_CURRENCY
            )));
        }
        Ok(table)
    }

    pub fn entries(&self) -> &[CurrencyEntry] {
        &self.entries
    }

    pub fn get(&self, code: &str) -> Option<&CurrencyEntry> {
        let code = normalize_code(code);
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Looks up `code`, substituting the base currency when it is unknown.
    pub fn resolve(&self, code: &str) -> Validated<&CurrencyEntry> {
        if let Some(entry) = self.get(code) {
            return Validated::clean(entry);
        }
        let diagnostic = Diagnostic::UnknownCurrency {
            requested: code.to_string(),
        };
        Validated::corrected(self.base(), diagnostic)
    }

    fn base(&self) -> &CurrencyEntry {
        // `new` and `default` both guarantee the base row exists.
        match self.get(BASE_CURRENCY) {
            Some(entry) => entry,
            None => &self.entries[0],
        }
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self {
            entries: vec![
                CurrencyEntry::new("usd", "USD", USD_RATE),
                CurrencyEntry::new("eur", "Euro", EURO_RATE),
                CurrencyEntry::new("rub", "руб", RUB_RATE).with_english_name("RUB"),
            ],
        }
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}
