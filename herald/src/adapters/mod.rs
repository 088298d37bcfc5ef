/// Adapters module - concrete implementations of ports.

pub mod global_clock;
pub mod global_logger;
pub mod memory;
pub mod native;

#[cfg(feature = "dbus")]
pub mod dbus;

pub use global_clock::clock;
pub use global_logger::logger;
pub use memory::MemoryServer;
pub use native::{Clock, ConsoleLogger};

#[cfg(feature = "dbus")]
pub use dbus::DbusServer;
