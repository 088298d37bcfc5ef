use std::env;

use crate::domain::notification::{Timeout, Urgency};

/// Per-application settings sent with every notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub app_name: String,
    /// Icon theme name or `file://` URI.
    pub app_icon: String,
    /// Basename of the application's `.desktop` file, sent as the `desktop-entry` hint.
    pub desktop_entry: Option<String>,
    pub default_timeout: Timeout,
    pub default_urgency: Urgency,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app_name: env::var("HERALD_APP_NAME").unwrap_or_else(|_| "herald".to_string()),
            app_icon: env::var("HERALD_APP_ICON").unwrap_or_default(),
            desktop_entry: env::var("HERALD_DESKTOP_ENTRY")
                .ok()
                .filter(|entry| !entry.trim().is_empty()),
            default_timeout: env::var("HERALD_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.trim().parse::<i64>().ok())
                .map(Timeout::from_millis)
                .unwrap_or_default(),
            default_urgency: Urgency::Normal,
        }
    }
}

impl ClientConfig {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.app_icon = icon.into();
        self
    }

    pub fn with_desktop_entry(mut self, entry: impl Into<String>) -> Self {
        self.desktop_entry = Some(entry.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Timeout) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.default_urgency = urgency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("chat")
            .with_icon("mail-unread")
            .with_desktop_entry("org.example.Chat")
            .with_timeout(Timeout::After(Duration::from_secs(3)))
            .with_urgency(Urgency::Low);

        assert_eq!(config.app_name, "chat");
        assert_eq!(config.app_icon, "mail-unread");
        assert_eq!(config.desktop_entry.as_deref(), Some("org.example.Chat"));
        assert_eq!(config.default_timeout.as_millis(), 3000);
        assert_eq!(config.default_urgency, Urgency::Low);
    }
}
