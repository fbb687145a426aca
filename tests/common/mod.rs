#![allow(dead_code)]

use std::{
    io,
    sync::{Arc, Mutex},
};

use chrono::NaiveDate;
use limit_tracker::FixedClock;

/// The "today" every integration test runs against.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).expect("valid date")
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - chrono::Duration::days(days)
}

/// Formats a date the way records expect textual dates.
pub fn dotted(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(today()))
}

/// In-memory sink for log output produced under `tracing::subscriber::with_default`.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8(bytes).expect("utf8 log output")
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber that writes plain-text logs into the returned buffer.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
