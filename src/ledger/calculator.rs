use std::{fmt, sync::Arc};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{
    record::Record,
    validation::{validate_limit, RawValue},
};
use crate::{
    clock::{Clock, SystemClock},
    currency::Locale,
};

/// Length of the trailing window used by [`Calculator::get_week_stats`], in days.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Daily limit plus the ordered list of records counted against it.
#[derive(Clone)]
pub struct Calculator {
    limit: i64,
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
    locale: Locale,
}

impl Calculator {
    pub fn new(limit: impl Into<RawValue>) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: impl Into<RawValue>, clock: Arc<dyn Clock>) -> Self {
        Self::with_options(limit, clock, Locale::default())
    }

    /// Corrections to `limit` are logged in `locale`.
    pub fn with_options(limit: impl Into<RawValue>, clock: Arc<dyn Clock>, locale: Locale) -> Self {
        let limit = validate_limit(&limit.into()).into_logged(locale);
        Self {
            limit,
            records: Vec::new(),
            clock,
            locale,
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(
            amount = record.amount(),
            date = %record.date(),
            "record added"
        );
        self.records.push(record);
    }

    /// Builds a record with this calculator's clock and locale, then appends it.
    pub fn record(
        &mut self,
        amount: impl Into<RawValue>,
        comment: impl Into<String>,
        date: impl Into<RawValue>,
    ) -> &Record {
        let record =
            Record::validated(amount, comment, date, self.clock.as_ref()).into_logged(self.locale);
        self.add_record(record);
        &self.records[self.records.len() - 1]
    }

    /// Sum of amounts dated exactly today, where "today" is read on every call.
    pub fn get_today_stats(&self) -> i64 {
        let today = self.clock.today();
        self.sum_where(|date| date == today)
    }

    /// Sum of amounts dated within `[today - 7 days, today]`.
    pub fn get_week_stats(&self) -> i64 {
        let today = self.clock.today();
        let window_start = today
            .checked_sub_signed(Duration::days(WEEK_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN);
        self.sum_where(|date| date >= window_start && date <= today)
    }

    pub fn get_limit_remaining_today(&self) -> i64 {
        self.limit.saturating_sub(self.get_today_stats())
    }

    pub fn summary(&self) -> StatsSummary {
        let today = self.get_today_stats();
        StatsSummary {
            date: self.clock.today(),
            limit: self.limit,
            today,
            week: self.get_week_stats(),
            remaining: self.limit.saturating_sub(today),
            record_count: self.records.len(),
        }
    }

    fn sum_where(&self, mut keep: impl FnMut(NaiveDate) -> bool) -> i64 {
        self.records
            .iter()
            .filter(|record| keep(record.date()))
            .fold(0i64, |acc, record| acc.saturating_add(record.amount()))
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

/// Point-in-time totals for a calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsSummary {
    pub date: NaiveDate,
    pub limit: i64,
    pub today: i64,
    pub week: i64,
    pub remaining: i64,
    pub record_count: usize,
}
