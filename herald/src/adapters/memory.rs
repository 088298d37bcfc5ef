use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::notification::{
    CloseReason, NotificationError, NotificationId, PlatformCapabilities, ServerCapabilities,
    ServerInformation, ServerSignal,
};
use crate::ports::{NotificationServerPort, NotifyRequest, SignalSink};

#[derive(Debug, Default)]
struct MemoryState {
    next_id: u32,
    shown: Vec<(NotificationId, NotifyRequest)>,
    closed: Vec<NotificationId>,
    sinks: Vec<SignalSink>,
}

/// In-process notification server.
///
/// Behaves like a well-mannered desktop server: ids start at 1, replaced
/// notifications keep their id, and closing emits `NotificationClosed`.
/// Tests and the offline harness drive the remaining signals with [`emit`].
///
/// [`emit`]: MemoryServer::emit
#[derive(Debug)]
pub struct MemoryServer {
    capabilities: ServerCapabilities,
    information: ServerInformation,
    state: Mutex<MemoryState>,
    fail_notify: Mutex<Option<String>>,
}

impl Default for MemoryServer {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryServer {
    pub fn new() -> Self {
        Self::with_capabilities(ServerCapabilities::parse([
            "actions",
            "body",
            "body-markup",
            "icon-static",
            "sound",
        ]))
    }

    pub fn with_capabilities(capabilities: ServerCapabilities) -> Self {
        Self {
            capabilities,
            information: ServerInformation {
                name: "herald-memory".to_string(),
                vendor: "herald".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                spec_version: "1.2".to_string(),
            },
            state: Mutex::new(MemoryState::default()),
            fail_notify: Mutex::new(None),
        }
    }

    /// Make the next `notify` call fail with `message`.
    pub fn fail_next_notify(&self, message: impl Into<String>) {
        *self.fail_notify.lock() = Some(message.into());
    }

    /// Deliver a signal to every listener. Returns how many received it.
    pub fn emit(&self, signal: ServerSignal) -> usize {
        let mut state = self.state.lock();
        state.sinks.retain(|sink| !sink.is_closed());
        state
            .sinks
            .iter()
            .filter(|sink| sink.unbounded_send(signal.clone()).is_ok())
            .count()
    }

    /// Simulate the user dismissing a notification.
    pub fn dismiss(&self, id: NotificationId) -> usize {
        self.emit(ServerSignal::NotificationClosed {
            id,
            reason: CloseReason::Dismissed,
        })
    }

    /// Simulate the user clicking an action, with an optional activation token.
    pub fn invoke_action(&self, id: NotificationId, action_key: &str, token: Option<&str>) {
        if let Some(token) = token {
            self.emit(ServerSignal::ActivationToken {
                id,
                token: token.to_string(),
            });
        }
        self.emit(ServerSignal::ActionInvoked {
            id,
            action_key: action_key.to_string(),
        });
    }

    /// Every `Notify` call received so far, in order.
    pub fn shown(&self) -> Vec<(NotificationId, NotifyRequest)> {
        self.state.lock().shown.clone()
    }

    pub fn last_shown(&self) -> Option<(NotificationId, NotifyRequest)> {
        self.state.lock().shown.last().cloned()
    }

    pub fn closed(&self) -> Vec<NotificationId> {
        self.state.lock().closed.clone()
    }

    pub fn listener_count(&self) -> usize {
        let mut state = self.state.lock();
        state.sinks.retain(|sink| !sink.is_closed());
        state.sinks.len()
    }
}

#[async_trait]
impl NotificationServerPort for MemoryServer {
    async fn capabilities(&self) -> Result<ServerCapabilities, NotificationError> {
        Ok(self.capabilities.clone())
    }

    async fn server_information(&self) -> Result<ServerInformation, NotificationError> {
        Ok(self.information.clone())
    }

    async fn notify(&self, request: &NotifyRequest) -> Result<NotificationId, NotificationError> {
        if let Some(message) = self.fail_notify.lock().take() {
            return Err(NotificationError::server_error(message));
        }

        let mut state = self.state.lock();
        let id = match NotificationId::new(request.replaces_id) {
            Some(existing) => existing,
            None => {
                state.next_id = state.next_id.wrapping_add(1).max(1);
                NotificationId::new(state.next_id)
                    .ok_or_else(|| NotificationError::server_error("id space exhausted"))?
            }
        };
        state.shown.push((id, request.clone()));
        Ok(id)
    }

    async fn close(&self, id: NotificationId) -> Result<(), NotificationError> {
        self.state.lock().closed.push(id);
        self.emit(ServerSignal::NotificationClosed {
            id,
            reason: CloseReason::Closed,
        });
        Ok(())
    }

    async fn listen(&self, sink: SignalSink) -> Result<(), NotificationError> {
        self.state.lock().sinks.push(sink);
        Ok(())
    }

    fn platform_capabilities(&self) -> PlatformCapabilities {
        PlatformCapabilities {
            persists_correlation_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures_channel::mpsc;

    fn request(summary: &str) -> NotifyRequest {
        NotifyRequest {
            app_name: "test".into(),
            summary: summary.into(),
            expire_timeout: -1,
            ..NotifyRequest::default()
        }
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let server = MemoryServer::new();
        let first = block_on(server.notify(&request("a"))).unwrap();
        let second = block_on(server.notify(&request("b"))).unwrap();
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
        assert_eq!(server.shown().len(), 2);
    }

    #[test]
    fn test_replaces_id_is_kept() {
        let server = MemoryServer::new();
        let id = block_on(server.notify(&request("a"))).unwrap();
        let replaced = block_on(server.notify(&NotifyRequest {
            replaces_id: id.get(),
            ..request("b")
        }))
        .unwrap();
        assert_eq!(replaced, id);
        assert_eq!(server.last_shown().unwrap().1.summary, "b");
    }

    #[test]
    fn test_close_emits_signal() {
        let server = MemoryServer::new();
        let (tx, mut rx) = mpsc::unbounded();
        block_on(server.listen(tx)).unwrap();

        let id = block_on(server.notify(&request("a"))).unwrap();
        block_on(server.close(id)).unwrap();

        assert_eq!(server.closed(), vec![id]);
        assert_eq!(
            rx.try_next().unwrap(),
            Some(ServerSignal::NotificationClosed {
                id,
                reason: CloseReason::Closed
            })
        );
    }

    #[test]
    fn test_invoke_action_sends_token_first() {
        let server = MemoryServer::new();
        let (tx, mut rx) = mpsc::unbounded();
        block_on(server.listen(tx)).unwrap();
        let id = NotificationId::new(3).unwrap();

        server.invoke_action(id, "default", Some("tok"));

        assert_eq!(
            rx.try_next().unwrap().map(|s| s.name()),
            Some("ActivationToken")
        );
        assert_eq!(
            rx.try_next().unwrap().map(|s| s.name()),
            Some("ActionInvoked")
        );
    }

    #[test]
    fn test_dropped_listener_is_pruned() {
        let server = MemoryServer::new();
        let (tx, rx) = mpsc::unbounded();
        block_on(server.listen(tx)).unwrap();
        assert_eq!(server.listener_count(), 1);

        drop(rx);
        assert_eq!(server.dismiss(NotificationId::new(1).unwrap()), 0);
        assert_eq!(server.listener_count(), 0);
    }

    #[test]
    fn test_fail_next_notify() {
        let server = MemoryServer::new();
        server.fail_next_notify("server went away");
        assert!(matches!(
            block_on(server.notify(&request("a"))),
            Err(NotificationError::Server(_))
        ));
        assert!(block_on(server.notify(&request("a"))).is_ok());
    }
}
