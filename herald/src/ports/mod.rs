/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// This module contains all the port traits that define contracts between the domain layer
/// and the infrastructure adapters. Notification delivery, logging and time are reached
/// only through these traits, so the facade runs unchanged against D-Bus or an
/// in-process server.

pub mod clock;
pub mod logger;
pub mod notification_server;

pub use clock::ClockPort;
pub use logger::LoggerPort;
pub use notification_server::{NotificationServerPort, NotifyRequest, SignalSink};
