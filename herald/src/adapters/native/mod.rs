/// Native adapters - logging and time for desktop processes.

pub mod clock;
pub mod console_logger;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
