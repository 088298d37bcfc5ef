//! Platform - Dependency injection container for all ports.
//!
//! Hybrid approach:
//! - Stateless ports: `&'static` references (zero-cost)
//! - Stateful ports: `Arc<dyn Trait>` (ref-counted, shared with the caller)
use std::sync::Arc;

use crate::adapters::MemoryServer;
use crate::ports::{ClockPort, LoggerPort, NotificationServerPort};

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
    server: Arc<dyn NotificationServerPort>,
}

impl Platform {
    /// Creates a Platform around `server` with the default native adapters.
    pub fn with_server(server: Arc<dyn NotificationServerPort>) -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
            server,
        }
    }

    /// Connects to the notification server on the D-Bus session bus.
    #[cfg(feature = "dbus")]
    pub async fn session() -> Result<Self, crate::domain::notification::NotificationError> {
        let server = crate::adapters::DbusServer::session().await?;
        Ok(Self::with_server(Arc::new(server)))
    }

    /// A platform backed by an in-process server, returned alongside it so
    /// the caller can drive server-side behaviour.
    pub fn in_memory() -> (Self, Arc<MemoryServer>) {
        let server = Arc::new(MemoryServer::new());
        (Self::with_server(server.clone()), server)
    }

    pub fn with_logger(mut self, logger: &'static dyn LoggerPort) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_clock(mut self, clock: &'static dyn ClockPort) -> Self {
        self.clock = clock;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }

    #[inline]
    pub fn server(&self) -> &dyn NotificationServerPort {
        self.server.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    struct FrozenClock;

    impl ClockPort for FrozenClock {
        fn now(&self) -> f64 {
            1_000.0
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    static FROZEN: FrozenClock = FrozenClock;

    #[test]
    fn test_platform_in_memory_shares_server() {
        let (platform, server) = Platform::in_memory();
        let caps = block_on(platform.server().capabilities()).unwrap();
        assert!(caps.actions);
        assert_eq!(server.shown().len(), 0);
    }

    #[test]
    fn test_platform_clone() {
        let (platform, _server) = Platform::in_memory();
        let cloned = platform.clone();
        cloned.logger().log("test clone");
    }

    #[test]
    fn test_platform_clock_override() {
        let (platform, _server) = Platform::in_memory();
        let platform = platform.with_clock(&FROZEN);
        assert_eq!(platform.clock().now(), 1_000.0);
    }
}
