use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::hints::Hints;

/// Identifier assigned by the notification server when a notification is displayed.
///
/// Zero is reserved by the freedesktop protocol to mean "no notification",
/// so a live identifier is always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(u32);

impl NotificationId {
    pub fn new(raw: u32) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Local, application-owned reference to a notification.
///
/// Handles are issued by the notification center and stay stable across
/// edits, even when the server hands out a new identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationHandle(u64);

impl NotificationHandle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low = 0,
    #[default]
    Normal = 1,
    Critical = 2,
}

impl Urgency {
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" | "0" => Some(Urgency::Low),
            "normal" | "1" => Some(Urgency::Normal),
            "critical" | "2" => Some(Urgency::Critical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseReason {
    Expired = 1,
    Dismissed = 2,
    Closed = 3,
    Undefined = 4,
}

impl CloseReason {
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => CloseReason::Expired,
            2 => CloseReason::Dismissed,
            3 => CloseReason::Closed,
            _ => CloseReason::Undefined,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Expiration policy sent as `expire_timeout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timeout {
    #[default]
    ServerDefault,
    Never,
    After(Duration),
}

impl Timeout {
    pub fn from_millis(millis: i64) -> Self {
        match millis {
            m if m < 0 => Timeout::ServerDefault,
            0 => Timeout::Never,
            m => Timeout::After(Duration::from_millis(m as u64)),
        }
    }

    pub fn as_millis(self) -> i32 {
        match self {
            Timeout::ServerDefault => -1,
            Timeout::Never => 0,
            Timeout::After(duration) => {
                i32::try_from(duration.as_millis()).unwrap_or(i32::MAX).max(1)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub key: String,
    pub label: String,
}

impl Action {
    pub const DEFAULT_KEY: &'static str = "default";

    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// The action invoked when the notification body itself is clicked.
    pub fn default_action(label: impl Into<String>) -> Self {
        Self::new(Self::DEFAULT_KEY, label)
    }
}

/// Text content as offered by the richest platform: title, summary and body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
}

impl NotificationContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Fields that carry visible text, in title, summary, body order.
    pub fn present_fields(&self) -> Vec<&str> {
        [&self.title, &self.summary, &self.body]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .filter(|text| !text.trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }
}

/// What the application asks to display.
#[derive(Debug, Clone, Default)]
pub struct NotificationRequest {
    pub content: NotificationContent,
    pub urgency: Option<Urgency>,
    pub timeout: Option<Timeout>,
    pub hints: Hints,
    pub actions: Vec<Action>,
    pub category: Option<String>,
}

impl NotificationRequest {
    pub fn new(content: NotificationContent) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    pub fn timeout(mut self, timeout: Timeout) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn hints(mut self, hints: Hints) -> Self {
        self.hints = hints;
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }
}

/// Locally owned record of an in-flight notification.
#[derive(Debug, Clone)]
pub struct Notification {
    handle: NotificationHandle,
    id: Option<NotificationId>,
    pub request: NotificationRequest,
    activation_token: Option<String>,
    created_at: f64,
}

impl Notification {
    pub fn new(handle: NotificationHandle, request: NotificationRequest, created_at: f64) -> Self {
        Self {
            handle,
            id: None,
            request,
            activation_token: None,
            created_at,
        }
    }

    #[inline]
    pub fn handle(&self) -> NotificationHandle {
        self.handle
    }

    #[inline]
    pub fn id(&self) -> Option<NotificationId> {
        self.id
    }

    pub fn mark_displayed(&mut self, id: NotificationId) {
        self.id = Some(id);
    }

    pub fn created_at(&self) -> f64 {
        self.created_at
    }

    pub fn set_activation_token(&mut self, token: String) {
        self.activation_token = Some(token);
    }

    pub fn take_activation_token(&mut self) -> Option<String> {
        self.activation_token.take()
    }
}
