use std::collections::HashMap;

use async_trait::async_trait;
use futures_util::future;
use futures_util::stream::{self, StreamExt};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use zbus::zvariant::{Structure, Value};
use zbus::Connection;

use super::proxy::{ActionInvoked, ActivationToken, NotificationClosed, NotificationsProxy};
use crate::domain::notification::{
    CloseReason, HintValue, ImageData, NotificationError, NotificationId, PlatformCapabilities,
    ServerCapabilities, ServerInformation, ServerSignal,
};
use crate::ports::{NotificationServerPort, NotifyRequest, SignalSink};

/// Notification server reached over the D-Bus session bus.
///
/// Signal forwarding runs on tokio tasks, so [`listen`] must be called from
/// within a tokio runtime.
///
/// [`listen`]: NotificationServerPort::listen
pub struct DbusServer {
    proxy: NotificationsProxy<'static>,
    forwarders: Mutex<Vec<JoinHandle<()>>>,
}

impl DbusServer {
    pub async fn session() -> Result<Self, NotificationError> {
        let connection = Connection::session().await?;
        Self::with_connection(&connection).await
    }

    pub async fn with_connection(connection: &Connection) -> Result<Self, NotificationError> {
        let proxy = NotificationsProxy::new(connection).await?;
        Ok(Self {
            proxy,
            forwarders: Mutex::new(Vec::new()),
        })
    }
}

impl Drop for DbusServer {
    fn drop(&mut self) {
        for task in self.forwarders.lock().drain(..) {
            task.abort();
        }
    }
}

#[async_trait]
impl NotificationServerPort for DbusServer {
    async fn capabilities(&self) -> Result<ServerCapabilities, NotificationError> {
        let names = self.proxy.get_capabilities().await?;
        Ok(ServerCapabilities::parse(names))
    }

    async fn server_information(&self) -> Result<ServerInformation, NotificationError> {
        let (name, vendor, version, spec_version) = self.proxy.get_server_information().await?;
        Ok(ServerInformation {
            name,
            vendor,
            version,
            spec_version,
        })
    }

    async fn notify(&self, request: &NotifyRequest) -> Result<NotificationId, NotificationError> {
        let actions: Vec<&str> = request.actions.iter().map(String::as_str).collect();
        let hints: HashMap<&str, Value<'_>> = request
            .hints
            .iter()
            .map(|(name, value)| (*name, encode_hint(value)))
            .collect();

        let raw = self
            .proxy
            .notify(
                &request.app_name,
                request.replaces_id,
                &request.app_icon,
                &request.summary,
                &request.body,
                &actions,
                hints,
                request.expire_timeout,
            )
            .await?;

        NotificationId::new(raw)
            .ok_or_else(|| NotificationError::server_error("server returned notification id 0"))
    }

    async fn close(&self, id: NotificationId) -> Result<(), NotificationError> {
        self.proxy.close_notification(id.get()).await?;
        Ok(())
    }

    async fn listen(&self, sink: SignalSink) -> Result<(), NotificationError> {
        let closed = self
            .proxy
            .receive_notification_closed()
            .await?
            .filter_map(|signal| future::ready(closed_signal(&signal)));
        let invoked = self
            .proxy
            .receive_action_invoked()
            .await?
            .filter_map(|signal| future::ready(invoked_signal(&signal)));
        let tokens = self
            .proxy
            .receive_activation_token()
            .await?
            .filter_map(|signal| future::ready(token_signal(&signal)));

        let mut signals = stream::select_all([closed.boxed(), invoked.boxed(), tokens.boxed()]);
        let task = tokio::spawn(async move {
            while let Some(signal) = signals.next().await {
                if sink.unbounded_send(signal).is_err() {
                    break;
                }
            }
        });
        self.forwarders.lock().push(task);
        Ok(())
    }

    fn platform_capabilities(&self) -> PlatformCapabilities {
        // the freedesktop protocol forgets everything about a notification
        // once the sending process exits
        PlatformCapabilities {
            persists_correlation_data: false,
        }
    }
}

fn closed_signal(signal: &NotificationClosed) -> Option<ServerSignal> {
    let args = signal.args().ok()?;
    Some(ServerSignal::NotificationClosed {
        id: NotificationId::new(*args.id())?,
        reason: CloseReason::from_code(*args.reason()),
    })
}

fn invoked_signal(signal: &ActionInvoked) -> Option<ServerSignal> {
    let args = signal.args().ok()?;
    Some(ServerSignal::ActionInvoked {
        id: NotificationId::new(*args.id())?,
        action_key: args.action_key().clone(),
    })
}

fn token_signal(signal: &ActivationToken) -> Option<ServerSignal> {
    let args = signal.args().ok()?;
    Some(ServerSignal::ActivationToken {
        id: NotificationId::new(*args.id())?,
        token: args.token().clone(),
    })
}

fn encode_hint(value: &HintValue) -> Value<'_> {
    match value {
        HintValue::Byte(byte) => Value::U8(*byte),
        HintValue::Bool(flag) => Value::Bool(*flag),
        HintValue::Str(text) => Value::from(text.as_str()),
        HintValue::Image(image) => Value::from(image_structure(image)),
    }
}

/// `image-data` is a `(iiibiiay)` structure.
fn image_structure(image: &ImageData) -> Structure<'static> {
    Structure::from((
        image.width,
        image.height,
        image.rowstride,
        image.has_alpha,
        image.bits_per_sample,
        image.channels,
        image.data.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Urgency;

    #[test]
    fn test_encode_scalar_hints() {
        assert_eq!(
            encode_hint(&HintValue::Byte(Urgency::Critical.as_byte())),
            Value::U8(2)
        );
        assert_eq!(encode_hint(&HintValue::Bool(true)), Value::Bool(true));
        assert_eq!(
            encode_hint(&HintValue::Str("im.received".into())),
            Value::from("im.received")
        );
    }

    #[test]
    fn test_image_hint_signature() {
        let image = ImageData::from_rgba(1, 1, vec![255, 0, 0, 255]).unwrap();
        let hint = HintValue::Image(image);
        let value = encode_hint(&hint);
        assert_eq!(value.value_signature().as_str(), "(iiibiiay)");
    }
}
