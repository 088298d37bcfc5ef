use async_trait::async_trait;
use futures_channel::mpsc::UnboundedSender;

use crate::domain::notification::{
    HintValue, NotificationError, NotificationId, PlatformCapabilities, ServerCapabilities,
    ServerInformation, ServerSignal,
};

/// Where a server adapter delivers the signals it receives.
pub type SignalSink = UnboundedSender<ServerSignal>;

/// Wire-neutral arguments of a `Notify` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotifyRequest {
    pub app_name: String,
    /// Zero posts a new notification, anything else asks the server to replace it.
    pub replaces_id: u32,
    pub app_icon: String,
    pub summary: String,
    pub body: String,
    /// Flattened `[key, label, ...]` pairs.
    pub actions: Vec<String>,
    pub hints: Vec<(&'static str, HintValue)>,
    /// Milliseconds; -1 for the server default, 0 for never.
    pub expire_timeout: i32,
}

/// Port for a desktop notification server.
#[async_trait]
pub trait NotificationServerPort: Send + Sync {
    async fn capabilities(&self) -> Result<ServerCapabilities, NotificationError>;

    async fn server_information(&self) -> Result<ServerInformation, NotificationError>;

    /// Display a notification and return the id the server assigned to it.
    async fn notify(&self, request: &NotifyRequest) -> Result<NotificationId, NotificationError>;

    /// Ask the server to close a notification. The server answers with a
    /// `NotificationClosed` signal.
    async fn close(&self, id: NotificationId) -> Result<(), NotificationError>;

    /// Start forwarding server signals into `sink`.
    async fn listen(&self, sink: SignalSink) -> Result<(), NotificationError>;

    fn platform_capabilities(&self) -> PlatformCapabilities;
}
