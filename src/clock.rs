use std::sync::RwLock;

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Clock abstracts access to the current date so aggregation stays deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real-time clock; "today" is the calendar date in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a settable date.
#[derive(Debug)]
pub struct FixedClock {
    date: RwLock<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: RwLock::new(date),
        }
    }

    /// Moves the clock to `date`; later queries observe the new day.
    pub fn set(&self, date: NaiveDate) {
        let mut guard = match self.date.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = date;
    }

    fn current(&self) -> NaiveDate {
        match self.date.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.current()
            .and_hms_opt(12, 0, 0)
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
            .unwrap_or_else(Utc::now)
    }

    fn today(&self) -> NaiveDate {
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_follows_updates() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());

        clock.set(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(clock.now().date_naive(), clock.today());
    }
}
