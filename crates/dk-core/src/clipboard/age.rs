use chrono::{DateTime, Utc};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Short relative age label: `Just now`, `5m ago`, `3h ago`, `2d ago`.
///
/// Units are truncated, never rounded. A timestamp in the future (clock
/// skew) reads as `Just now`.
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - created_at).num_milliseconds().max(0);

    let minutes = elapsed / MINUTE_MS;
    let hours = elapsed / HOUR_MS;
    let days = elapsed / DAY_MS;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{days}d ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn age_after(elapsed: Duration) -> String {
        let created = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        relative_age(created, created + elapsed)
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(age_after(Duration::zero()), "Just now");
        assert_eq!(age_after(Duration::seconds(59)), "Just now");
    }

    #[test]
    fn minutes_truncate() {
        assert_eq!(age_after(Duration::seconds(60)), "1m ago");
        assert_eq!(age_after(Duration::seconds(90)), "1m ago");
        assert_eq!(age_after(Duration::seconds(59 * 60 + 59)), "59m ago");
    }

    #[test]
    fn hours_and_days() {
        assert_eq!(age_after(Duration::minutes(60)), "1h ago");
        assert_eq!(age_after(Duration::minutes(23 * 60 + 59)), "23h ago");
        assert_eq!(age_after(Duration::hours(24)), "1d ago");
        assert_eq!(age_after(Duration::hours(24 * 9 + 23)), "9d ago");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(age_after(Duration::minutes(-5)), "Just now");
    }
}
