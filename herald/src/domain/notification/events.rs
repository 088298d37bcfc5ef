use serde::Serialize;

use super::error::NotificationError;
use super::registry::NotificationRegistry;
use super::types::{CloseReason, NotificationHandle, NotificationId};

pub const NOTIFICATION_CLOSED: &str = "NotificationClosed";
pub const ACTION_INVOKED: &str = "ActionInvoked";
pub const ACTIVATION_TOKEN: &str = "ActivationToken";

/// A signal emitted by the notification server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerSignal {
    NotificationClosed {
        id: NotificationId,
        reason: CloseReason,
    },
    ActionInvoked {
        id: NotificationId,
        action_key: String,
    },
    /// Always emitted before the matching `ActionInvoked`.
    ActivationToken {
        id: NotificationId,
        token: String,
    },
}

impl ServerSignal {
    pub fn name(&self) -> &'static str {
        match self {
            ServerSignal::NotificationClosed { .. } => NOTIFICATION_CLOSED,
            ServerSignal::ActionInvoked { .. } => ACTION_INVOKED,
            ServerSignal::ActivationToken { .. } => ACTIVATION_TOKEN,
        }
    }

    pub fn id(&self) -> NotificationId {
        match self {
            ServerSignal::NotificationClosed { id, .. }
            | ServerSignal::ActionInvoked { id, .. }
            | ServerSignal::ActivationToken { id, .. } => *id,
        }
    }

    /// Build a signal from a raw member name and its arguments.
    ///
    /// `argument` is the close reason code for `NotificationClosed` and the
    /// string payload for the other two. Returns `None` for unrelated
    /// members, a zero id, or a malformed reason code.
    pub fn parse(member: &str, raw_id: u32, argument: &str) -> Option<Self> {
        let id = NotificationId::new(raw_id)?;
        match member {
            NOTIFICATION_CLOSED => {
                let code = argument.trim().parse::<u32>().ok()?;
                Some(ServerSignal::NotificationClosed {
                    id,
                    reason: CloseReason::from_code(code),
                })
            }
            ACTION_INVOKED => Some(ServerSignal::ActionInvoked {
                id,
                action_key: argument.to_string(),
            }),
            ACTIVATION_TOKEN => Some(ServerSignal::ActivationToken {
                id,
                token: argument.to_string(),
            }),
            _ => None,
        }
    }
}

/// What the application sees once a server signal is resolved to its notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NotificationEvent {
    Closed {
        handle: NotificationHandle,
        reason: CloseReason,
    },
    ActionInvoked {
        handle: NotificationHandle,
        action_key: String,
        activation_token: Option<String>,
    },
}

impl NotificationEvent {
    pub fn handle(&self) -> NotificationHandle {
        match self {
            NotificationEvent::Closed { handle, .. }
            | NotificationEvent::ActionInvoked { handle, .. } => *handle,
        }
    }
}

/// Resolve a server signal against the registry.
///
/// A faulty or foreign server can send any id, so an unknown id is an error
/// for the caller to handle rather than an invariant violation.
pub fn dispatch(
    registry: &mut NotificationRegistry,
    signal: ServerSignal,
) -> Result<Option<NotificationEvent>, NotificationError> {
    match signal {
        ServerSignal::NotificationClosed { id, reason } => {
            let notification = registry
                .remove(id)
                .ok_or(NotificationError::UnknownNotification(id))?;
            Ok(Some(NotificationEvent::Closed {
                handle: notification.handle(),
                reason,
            }))
        }
        ServerSignal::ActivationToken { id, token } => {
            let notification = registry
                .find_mut(id)
                .ok_or(NotificationError::UnknownNotification(id))?;
            notification.set_activation_token(token);
            Ok(None)
        }
        ServerSignal::ActionInvoked { id, action_key } => {
            let notification = registry
                .find_mut(id)
                .ok_or(NotificationError::UnknownNotification(id))?;
            Ok(Some(NotificationEvent::ActionInvoked {
                handle: notification.handle(),
                action_key,
                activation_token: notification.take_activation_token(),
            }))
        }
    }
}
