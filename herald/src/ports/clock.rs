/// Port for reading wall-clock time, used to timestamp notifications.
pub trait ClockPort: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now(&self) -> f64;

    /// Checks if the clock can be read at all
    fn is_available(&self) -> bool;

    /// Milliseconds elapsed since `earlier`, never negative.
    fn elapsed_since(&self, earlier: f64) -> f64 {
        (self.now() - earlier).max(0.0)
    }
}
