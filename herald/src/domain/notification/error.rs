use std::fmt;

use super::types::{NotificationHandle, NotificationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    UnknownNotification(NotificationId),
    DuplicateId(NotificationId),
    NotDisplayed,
    UnknownHandle(NotificationHandle),
    InvalidImage(String),
    EmptyContent,
    Server(String),
    Connection(String),
}

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationError::UnknownNotification(id) => {
                write!(f, "Server reported unknown notification id {id}")
            }
            NotificationError::DuplicateId(id) => {
                write!(f, "Notification id {id} is already registered")
            }
            NotificationError::NotDisplayed => {
                write!(f, "Notification has not been displayed by a server")
            }
            NotificationError::UnknownHandle(handle) => {
                write!(f, "No live notification for handle {handle}")
            }
            NotificationError::InvalidImage(msg) => write!(f, "Invalid image: {msg}"),
            NotificationError::EmptyContent => write!(f, "Notification has no content"),
            NotificationError::Server(msg) => write!(f, "Notification server error: {msg}"),
            NotificationError::Connection(msg) => write!(f, "Connection error: {msg}"),
        }
    }
}

impl std::error::Error for NotificationError {}

impl NotificationError {
    pub fn server_error(message: impl Into<String>) -> Self {
        NotificationError::Server(message.into())
    }

    pub fn connection_error(message: impl Into<String>) -> Self {
        NotificationError::Connection(message.into())
    }

    pub fn invalid_image(message: impl Into<String>) -> Self {
        NotificationError::InvalidImage(message.into())
    }
}

#[cfg(feature = "dbus")]
impl From<zbus::Error> for NotificationError {
    fn from(error: zbus::Error) -> Self {
        match error {
            zbus::Error::Address(msg) => NotificationError::Connection(msg),
            zbus::Error::InputOutput(err) => NotificationError::Connection(err.to_string()),
            other => NotificationError::Server(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_notification() {
        let id = NotificationId::new(7).unwrap();
        let err = NotificationError::UnknownNotification(id);
        assert_eq!(err.to_string(), "Server reported unknown notification id 7");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            NotificationError::server_error("boom"),
            NotificationError::Server("boom".to_string())
        );
        assert_eq!(
            NotificationError::connection_error("no bus"),
            NotificationError::Connection("no bus".to_string())
        );
        assert!(NotificationError::invalid_image("short buffer")
            .to_string()
            .contains("short buffer"));
    }
}
