use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Monotonically non-decreasing wall-clock milliseconds.
///
/// Successive calls to `now` never go backwards, even if the system clock
/// steps back underneath us. Ties are permitted: two calls in the same
/// millisecond return the same value.
#[derive(Debug, Default)]
pub struct Clock {
    last: Mutex<u64>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current timestamp in milliseconds since the Unix epoch.
    pub fn now(&self) -> u64 {
        let mut last = self.last.lock().unwrap();
        let physical = system_time_millis();
        if physical > *last {
            *last = physical;
        }
        *last
    }
}

fn system_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before UNIX epoch")
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_non_decreasing() {
        let clock = Clock::new();

        let mut prev = clock.now();
        for _ in 0..100 {
            let next = clock.now();
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn test_clock_tracks_wall_time() {
        let clock = Clock::new();

        let before = system_time_millis();
        let stamped = clock.now();
        let after = system_time_millis();

        assert!(stamped >= before);
        assert!(stamped <= after);
    }

    #[test]
    fn test_clock_holds_last_value_when_system_time_lags() {
        let clock = Clock::new();

        // Pin the clock ahead of the system time; it must not go back.
        *clock.last.lock().unwrap() = system_time_millis() + 10_000;
        let pinned = *clock.last.lock().unwrap();

        assert_eq!(clock.now(), pinned);
    }
}
