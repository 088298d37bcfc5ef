pub mod capabilities;
pub mod category;
pub mod content;
pub mod correlation;
pub mod error;
pub mod events;
pub mod hints;
pub mod registry;
pub mod types;

pub use capabilities::{PlatformCapabilities, ServerCapabilities, ServerInformation};
pub use category::NotificationCategory;
pub use content::{indexed_title, to_wire, WireContent};
pub use correlation::CorrelationTable;
pub use error::NotificationError;
pub use events::{dispatch, NotificationEvent, ServerSignal};
pub use hints::{HintValue, Hints, ImageData};
pub use registry::NotificationRegistry;
pub use types::{
    Action, CloseReason, Notification, NotificationContent, NotificationHandle, NotificationId,
    NotificationRequest, Timeout, Urgency,
};
