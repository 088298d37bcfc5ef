/// Logger port - provides logging capabilities to the domain and facade.
///
/// Abstracts logging from the concrete sink:
/// - Native: the `log` facade, rendered by whatever logger the binary installs
/// - Tests: anything that records messages
pub trait LoggerPort: Send + Sync {
    /// Log an informational message.
    fn log(&self, message: &str);

    /// Log a diagnostic message.
    fn debug(&self, message: &str);

    /// Log an error message.
    fn error(&self, message: &str);

    /// Log a warning message.
    fn warn(&self, message: &str);

    /// Start a performance timer with the given label.
    fn time(&self, label: &str);

    /// End a performance timer and log the elapsed duration.
    fn time_end(&self, label: &str);
}
