use chrono::Utc;
use dk_core::ports::ClockPort;

/// Wall clock backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_matches_now_ms() {
        let clock = SystemClock;
        let before = clock.now_ms();
        let now = clock.now().timestamp_millis();
        let after = clock.now_ms();
        assert!(before <= now && now <= after);
    }
}
