use crate::ports::clock::ClockPort;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, Default)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        // a clock set before 1970 reads as the epoch
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as f64)
            .unwrap_or(0.0)
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_creation() {
        let clock = Clock::new();
        assert!(
            clock.is_available(),
            "Native clock should always be available"
        );
    }

    #[test]
    fn test_clock_now_returns_valid_unix_timestamp() {
        let clock = Clock::new();
        let timestamp = clock.now();

        assert!(
            timestamp > 1_577_836_800_000.0,
            "Timestamp should be after 2020: {}",
            timestamp
        );
        assert!(
            timestamp < 4_102_444_800_000.0,
            "Timestamp should be before 2100: {}",
            timestamp
        );
    }

    #[test]
    fn test_elapsed_since_is_never_negative() {
        let clock = Clock::new();
        let future = clock.now() + 60_000.0;
        assert_eq!(clock.elapsed_since(future), 0.0);
    }

    #[test]
    fn test_elapsed_since_past() {
        let clock = Clock::new();
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(clock.elapsed_since(t1) >= 10.0);
    }
}
