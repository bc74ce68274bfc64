use chrono::{DateTime, Utc};

pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    /// `now_ms` as a UTC timestamp.
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_ms()).unwrap_or_default()
    }
}
