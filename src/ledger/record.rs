use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_amount, validate_date, RawValue, Validated};
use crate::{
    clock::{Clock, SystemClock},
    currency::Locale,
};

/// One dated entry: calories eaten or money spent.
///
/// Fields are fixed once construction has sanitized them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    id: Uuid,
    amount: i64,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Builds a record against the system clock, logging any corrections.
    pub fn new(
        amount: impl Into<RawValue>,
        comment: impl Into<String>,
        date: impl Into<RawValue>,
    ) -> Self {
        Self::with_clock(amount, comment, date, &SystemClock)
    }

    pub fn with_clock(
        amount: impl Into<RawValue>,
        comment: impl Into<String>,
        date: impl Into<RawValue>,
        clock: &dyn Clock,
    ) -> Self {
        Self::validated(amount, comment, date, clock).into_logged(Locale::default())
    }

    /// Sanitizes the inputs and returns the record with its corrections, without logging.
    pub fn validated(
        amount: impl Into<RawValue>,
        comment: impl Into<String>,
        date: impl Into<RawValue>,
        clock: &dyn Clock,
    ) -> Validated<Record> {
        let mut diagnostics = Vec::new();
        let date = validate_date(&date.into(), clock).drain_into(&mut diagnostics);
        let amount = validate_amount(&amount.into()).drain_into(&mut diagnostics);
        Validated {
            value: Record {
                id: Uuid::new_v4(),
                amount,
                comment: comment.into(),
                date,
            },
            diagnostics,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
