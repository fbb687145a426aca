use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{clock::Clock, currency::Locale};

/// Textual date layout accepted for records: day.month.year.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Loosely typed caller input, before validation decides what to keep.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Absent,
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
    /// Anything else, kept only for diagnostics.
    Other(String),
}

macro_rules! raw_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    RawValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

raw_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for RawValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(RawValue::Integer)
            .unwrap_or_else(|_| RawValue::Other(value.to_string()))
    }
}

impl From<usize> for RawValue {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(RawValue::Integer)
            .unwrap_or_else(|_| RawValue::Other(value.to_string()))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Float(f64::from(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(value: NaiveDate) -> Self {
        RawValue::Date(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Absent)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => RawValue::Absent,
            Value::Bool(flag) => RawValue::Bool(flag),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    RawValue::Integer(int)
                } else if number.is_u64() {
                    RawValue::Other(number.to_string())
                } else {
                    number
                        .as_f64()
                        .map(RawValue::Float)
                        .unwrap_or_else(|| RawValue::Other(number.to_string()))
                }
            }
            Value::String(text) => RawValue::Text(text),
            other => RawValue::Other(other.to_string()),
        }
    }
}

impl From<&serde_json::Value> for RawValue {
    fn from(value: &serde_json::Value) -> Self {
        RawValue::from(value.clone())
    }
}

/// A correction applied while sanitizing input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// The date was unparsable or of the wrong kind; `substituted` was used instead.
    InvalidDate { substituted: NaiveDate },
    /// The amount was not an integer; zero was used instead.
    InvalidAmount,
    /// The limit was negative or non-numeric; zero was used instead.
    InvalidLimit,
    /// The currency code is not in the table; the base currency was used instead.
    UnknownCurrency { requested: String },
}

impl Diagnostic {
    /// Short machine-friendly tag, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::InvalidDate { .. } => "invalid_date",
            Diagnostic::InvalidAmount => "invalid_amount",
            Diagnostic::InvalidLimit => "invalid_limit",
            Diagnostic::UnknownCurrency { .. } => "unknown_currency",
        }
    }

    pub fn render(&self, locale: Locale) -> String {
        match (locale, self) {
            (Locale::Ru, Diagnostic::InvalidDate { substituted }) => format!(
                "Введен некорректный формат даты. Установлено date = {}",
                substituted.format("%Y-%m-%d")
            ),
            (Locale::Ru, Diagnostic::InvalidAmount) => {
                "Введено некорректное значение калорий(денег). Установлено amount = 0".into()
            }
            (Locale::Ru, Diagnostic::InvalidLimit) => {
                "Введено некорректное значение лимита. Установлено limit = 0".into()
            }
            (Locale::Ru, Diagnostic::UnknownCurrency { .. }) => {
                "Валюта задана некорректна. Утановлена валюта руб".into()
            }
            (Locale::En, Diagnostic::InvalidDate { substituted }) => format!(
                "Invalid date format. Using date = {}",
                substituted.format("%Y-%m-%d")
            ),
            (Locale::En, Diagnostic::InvalidAmount) => {
                "Invalid calories (money) value. Using amount = 0".into()
            }
            (Locale::En, Diagnostic::InvalidLimit) => "Invalid limit value. Using limit = 0".into(),
            (Locale::En, Diagnostic::UnknownCurrency { requested }) => {
                format!("Unknown currency `{}`. Using rub", requested)
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::default()))
    }
}

/// A sanitized value together with the corrections made to obtain it.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Validated<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn corrected(value: T, diagnostic: Diagnostic) -> Self {
        Self {
            value,
            diagnostics: vec![diagnostic],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Moves this value's diagnostics into `sink` and returns the bare value.
    pub fn drain_into(self, sink: &mut Vec<Diagnostic>) -> T {
        sink.extend(self.diagnostics);
        self.value
    }

    /// Logs every diagnostic at WARN level and returns the bare value.
    pub fn into_logged(self, locale: Locale) -> T {
        emit(&self.diagnostics, locale);
        self.value
    }
}

/// Writes diagnostics to the tracing pipeline.
pub fn emit(diagnostics: &[Diagnostic], locale: Locale) {
    for diagnostic in diagnostics {
        tracing::warn!(kind = diagnostic.kind(), "{}", diagnostic.render(locale));
    }
}

/// Resolves a record date. Absent input means "today" and is not a correction.
pub fn validate_date(raw: &RawValue, clock: &dyn Clock) -> Validated<NaiveDate> {
    match raw {
        RawValue::Absent => Validated::clean(clock.today()),
        RawValue::Date(date) => Validated::clean(*date),
        RawValue::Text(text) => match parse_record_date(text.trim()) {
            Some(date) => Validated::clean(date),
            None => substitute_today(clock),
        },
        // Numbers, booleans and the like are corrected and reported too.
        _ => substitute_today(clock),
    }
}

/// Parses `%d.%m.%Y`, requiring exactly four unsigned digits for the year.
fn parse_record_date(text: &str) -> Option<NaiveDate> {
    let year = text.rsplit('.').next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

fn substitute_today(clock: &dyn Clock) -> Validated<NaiveDate> {
    let today = clock.today();
    Validated::corrected(today, Diagnostic::InvalidDate { substituted: today })
}

/// Only true integers are accepted as amounts.
pub fn validate_amount(raw: &RawValue) -> Validated<i64> {
    match raw {
        RawValue::Integer(amount) => Validated::clean(*amount),
        _ => Validated::corrected(0, Diagnostic::InvalidAmount),
    }
}

/// Limits must be non-negative; finite floats are truncated toward zero.
pub fn validate_limit(raw: &RawValue) -> Validated<i64> {
    match raw {
        RawValue::Integer(limit) if *limit >= 0 => Validated::clean(*limit),
        RawValue::Float(limit) if limit.is_finite() && *limit >= 0.0 => {
            // `as` saturates for floats beyond i64::MAX.
            Validated::clean(limit.trunc() as i64)
        }
        _ => Validated::corrected(0, Diagnostic::InvalidLimit),
    }
}
