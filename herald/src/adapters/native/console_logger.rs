use std::collections::HashMap;
use std::time::Instant;

use parking_lot::Mutex;

use crate::ports::LoggerPort;

const TARGET: &str = "herald";

/// Native logger implementation forwarding to the `log` facade.
///
/// Nothing is printed unless the binary installs a logger such as
/// `env_logger`.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    timers: Mutex<HashMap<String, Instant>>,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            timers: Mutex::new(HashMap::new()),
        }
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log::info!(target: TARGET, "{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: TARGET, "{message}");
    }

    fn time(&self, label: &str) {
        self.timers.lock().insert(label.to_string(), Instant::now());
    }

    fn time_end(&self, label: &str) {
        match self.timers.lock().remove(label) {
            Some(started) => {
                log::debug!(target: TARGET, "{label}: {:?}", started.elapsed());
            }
            None => log::warn!(target: TARGET, "Timer '{label}' does not exist"),
        }
    }
}
