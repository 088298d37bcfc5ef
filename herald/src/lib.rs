// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

pub mod config;

// Re-exports for applications
pub use config::ClientConfig;
pub use domain::notification::{
    Action, CloseReason, CorrelationTable, Hints, ImageData, NotificationCategory,
    NotificationContent, NotificationError, NotificationEvent, NotificationHandle,
    NotificationId, NotificationRequest, PlatformCapabilities, ServerCapabilities, Timeout,
    Urgency,
};
pub use facades::NotificationCenter;
pub use platform::Platform;
