//! Native Rust facade for notification delivery
//! Owns the registry of in-flight notifications and delegates to domain logic
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use futures_channel::mpsc::{self, UnboundedReceiver};
use futures_util::stream::FusedStream;
use parking_lot::Mutex;

use crate::config::ClientConfig;
use crate::domain::notification::category::actions_wire;
use crate::domain::notification::{
    dispatch, to_wire, CloseReason, CorrelationTable, Notification, NotificationCategory,
    NotificationContent, NotificationError, NotificationEvent, NotificationHandle, NotificationId,
    NotificationRegistry, NotificationRequest, PlatformCapabilities, ServerCapabilities,
    ServerInformation, ServerSignal,
};
use crate::platform::Platform;
use crate::ports::NotifyRequest;

/// Application entry point for desktop notifications.
///
/// A center is created explicitly and lives as long as the application wants
/// to track its notifications; nothing is kept in process-wide state.
/// `T` is the application's correlation data attached to notifications.
///
/// Server signals are queued as they arrive and only resolved when the
/// application calls [`poll_events`](Self::poll_events), so events are
/// always delivered on the polling thread.
pub struct NotificationCenter<T = ()> {
    platform: Platform,
    config: ClientConfig,
    capabilities: ServerCapabilities,
    registry: Mutex<NotificationRegistry>,
    correlation: Mutex<CorrelationTable<T>>,
    categories: Mutex<HashMap<String, NotificationCategory>>,
    signals: Mutex<UnboundedReceiver<ServerSignal>>,
    signals_ended: AtomicBool,
    /// Closes the server never reported, delivered on the next poll.
    evicted: Mutex<Vec<NotificationEvent>>,
    next_handle: AtomicU64,
}

impl<T> NotificationCenter<T> {
    /// Query the server and start listening for its signals.
    pub async fn new(platform: Platform, config: ClientConfig) -> Result<Self, NotificationError> {
        let capabilities = platform.server().capabilities().await?;
        platform.logger().debug(&format!(
            "Notification server capabilities: {}",
            capabilities.names().join(", ")
        ));

        let (sink, signals) = mpsc::unbounded();
        platform.server().listen(sink).await?;

        Ok(Self {
            platform,
            config,
            capabilities,
            registry: Mutex::new(NotificationRegistry::new()),
            correlation: Mutex::new(CorrelationTable::new()),
            categories: Mutex::new(HashMap::new()),
            signals: Mutex::new(signals),
            signals_ended: AtomicBool::new(false),
            evicted: Mutex::new(Vec::new()),
            next_handle: AtomicU64::new(1),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn server_capabilities(&self) -> &ServerCapabilities {
        &self.capabilities
    }

    pub fn platform_capabilities(&self) -> PlatformCapabilities {
        self.platform.server().platform_capabilities()
    }

    pub async fn server_information(&self) -> Result<ServerInformation, NotificationError> {
        self.platform.server().server_information().await
    }

    /// Make a category's actions available to requests naming it.
    pub fn register_category(&self, category: NotificationCategory) {
        self.categories
            .lock()
            .insert(category.name().to_string(), category);
    }

    /// Display a notification.
    pub async fn send(
        &self,
        request: NotificationRequest,
    ) -> Result<NotificationHandle, NotificationError> {
        let wire = self.build_request(&request, None)?;

        let logger = self.platform.logger();
        logger.time("notify");
        let result = self.platform.server().notify(&wire).await;
        logger.time_end("notify");
        let id = result?;

        let handle = NotificationHandle::from_raw(self.next_handle.fetch_add(1, Ordering::Relaxed));
        let mut notification = Notification::new(handle, request, self.platform.clock().now());
        notification.mark_displayed(id);

        let mut registry = self.registry.lock();
        self.evict_stale(&mut registry, id);
        registry.add(notification)?;
        logger.debug(&format!("Displayed notification {handle} as id {id}"));

        Ok(handle)
    }

    /// Replace the content of a displayed notification.
    pub async fn edit(
        &self,
        handle: NotificationHandle,
        content: NotificationContent,
    ) -> Result<(), NotificationError> {
        let (old_id, mut notification) = {
            let registry = self.registry.lock();
            let notification = registry
                .find_by_handle(handle)
                .ok_or(NotificationError::UnknownHandle(handle))?;
            let id = notification.id().ok_or(NotificationError::NotDisplayed)?;
            (id, notification.clone())
        };
        notification.request.content = content;

        let wire = self.build_request(&notification.request, Some(old_id))?;
        let new_id = self.platform.server().notify(&wire).await?;
        notification.mark_displayed(new_id);

        {
            let mut registry = self.registry.lock();
            if new_id != old_id {
                self.evict_stale(&mut registry, new_id);
            }
            registry.replace(old_id, notification)?;
        }
        if new_id != old_id {
            self.platform
                .logger()
                .debug(&format!("Notification {handle} moved from id {old_id} to {new_id}"));
        }
        Ok(())
    }

    /// Ask the server to withdraw a notification.
    ///
    /// The notification stays registered until the server confirms with
    /// `NotificationClosed`, which surfaces as a [`NotificationEvent::Closed`].
    pub async fn retract(&self, handle: NotificationHandle) -> Result<(), NotificationError> {
        let id = self
            .registry
            .lock()
            .id_of(handle)
            .ok_or(NotificationError::UnknownHandle(handle))?;
        self.platform.server().close(id).await
    }

    /// Withdraw every live notification. Keeps going past failures and
    /// reports the first one.
    pub async fn retract_all(&self) -> Result<(), NotificationError> {
        let ids = self.registry.lock().ids();
        let mut first_error = None;

        for id in ids {
            if let Err(err) = self.platform.server().close(id).await {
                self.platform
                    .logger()
                    .warn(&format!("Failed to close notification {id}: {err}"));
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Resolve queued server signals and hand each event to `on_event`
    /// together with the notification's correlation data.
    ///
    /// Correlation data of closed notifications is released after the
    /// callback returns. `on_event` must not call back into this center's
    /// correlation methods. Returns the number of events delivered.
    pub fn poll_events_with<F>(&self, mut on_event: F) -> usize
    where
        F: FnMut(&NotificationEvent, Option<&T>),
    {
        let events = self.resolve_pending();

        for event in &events {
            match event {
                NotificationEvent::Closed { handle, .. } => {
                    let data = self.correlation.lock().remove(*handle);
                    on_event(event, data.as_ref());
                }
                NotificationEvent::ActionInvoked { handle, .. } => {
                    let correlation = self.correlation.lock();
                    on_event(event, correlation.get(*handle));
                }
            }
        }

        events.len()
    }

    pub fn poll_events(&self) -> Vec<NotificationEvent> {
        let mut events = Vec::new();
        self.poll_events_with(|event, _| events.push(event.clone()));
        events
    }

    /// Attach application data to a live notification.
    pub fn set_correlation(
        &self,
        handle: NotificationHandle,
        data: T,
    ) -> Result<Option<T>, NotificationError> {
        if self.registry.lock().id_of(handle).is_none() {
            return Err(NotificationError::UnknownHandle(handle));
        }
        Ok(self.correlation.lock().insert(handle, data))
    }

    pub fn with_correlation<R>(
        &self,
        handle: NotificationHandle,
        read: impl FnOnce(Option<&T>) -> R,
    ) -> R {
        read(self.correlation.lock().get(handle))
    }

    pub fn take_correlation(&self, handle: NotificationHandle) -> Option<T> {
        self.correlation.lock().remove(handle)
    }

    pub fn is_live(&self, handle: NotificationHandle) -> bool {
        self.registry.lock().id_of(handle).is_some()
    }

    pub fn id_of(&self, handle: NotificationHandle) -> Option<NotificationId> {
        self.registry.lock().id_of(handle)
    }

    pub fn live_count(&self) -> usize {
        self.registry.lock().len()
    }

    /// Tear the center down, optionally withdrawing everything still shown.
    pub async fn shutdown(self, retract: bool) -> Result<(), NotificationError> {
        let result = if retract {
            self.retract_all().await
        } else {
            Ok(())
        };

        let forgotten = self.registry.lock().drain().len();
        self.correlation.lock().clear();
        self.platform
            .logger()
            .log(&format!("Notification center shut down, {forgotten} notification(s) released"));
        result
    }

    /// Drop the entry still holding `id` after the server handed that id
    /// out again. Its close signal never reached us, so an `Undefined` close
    /// is queued in its place.
    fn evict_stale(&self, registry: &mut NotificationRegistry, id: NotificationId) {
        if let Some(stale) = registry.remove(id) {
            self.platform.logger().warn(&format!(
                "Notification id {id} reused by server, dropping stale entry {}",
                stale.handle()
            ));
            self.evicted.lock().push(NotificationEvent::Closed {
                handle: stale.handle(),
                reason: CloseReason::Undefined,
            });
        }
    }

    fn resolve_pending(&self) -> Vec<NotificationEvent> {
        let pending = self.drain_signals();
        let logger = self.platform.logger();
        let mut registry = self.registry.lock();
        let mut events = std::mem::take(&mut *self.evicted.lock());
        events.reserve(pending.len());

        for signal in pending {
            let name = signal.name();
            match dispatch(&mut registry, signal) {
                Ok(Some(event)) => events.push(event),
                Ok(None) => {}
                Err(err) => logger.warn(&format!("Ignoring {name} signal: {err}")),
            }
        }

        events
    }

    fn drain_signals(&self) -> Vec<ServerSignal> {
        let mut signals = self.signals.lock();
        let mut pending = Vec::new();
        while let Ok(signal) = signals.try_recv() {
            pending.push(signal);
        }
        if signals.is_terminated() && !self.signals_ended.swap(true, Ordering::Relaxed) {
            self.platform
                .logger()
                .warn("Notification server stopped delivering signals");
        }
        pending
    }

    fn build_request(
        &self,
        request: &NotificationRequest,
        replaces: Option<NotificationId>,
    ) -> Result<NotifyRequest, NotificationError> {
        if request.content.is_empty() {
            return Err(NotificationError::EmptyContent);
        }

        let logger = self.platform.logger();
        let wire = to_wire(&request.content, &self.capabilities);
        if wire.dropped_body {
            logger.warn("Notification server cannot display a body, only the summary is sent");
        }

        let mut actions = request.actions.clone();
        if let Some(name) = &request.category {
            match self.categories.lock().get(name) {
                Some(category) => actions.extend(category.actions().iter().cloned()),
                None => logger.warn(&format!("Unknown notification category '{name}'")),
            }
        }
        if !actions.is_empty() && !self.capabilities.actions {
            logger.warn("Notification server does not support actions, dropping them");
            actions.clear();
        }

        let mut hints = request.hints.clone();
        hints.urgency = request
            .urgency
            .or(hints.urgency)
            .or(Some(self.config.default_urgency));
        if hints.desktop_entry.is_none() {
            hints.desktop_entry = self.config.desktop_entry.clone();
        }

        Ok(NotifyRequest {
            app_name: self.config.app_name.clone(),
            replaces_id: replaces.map(NotificationId::get).unwrap_or(0),
            app_icon: self.config.app_icon.clone(),
            summary: wire.summary,
            body: wire.body,
            actions: actions_wire(&actions),
            hints: hints.entries(),
            expire_timeout: request
                .timeout
                .unwrap_or(self.config.default_timeout)
                .as_millis(),
        })
    }
}
