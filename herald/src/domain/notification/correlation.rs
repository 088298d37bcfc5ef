use std::collections::HashMap;

use super::types::NotificationHandle;

/// Application data attached to notifications, keyed by local handle.
///
/// Lives only as long as the process. Whether the platform itself would
/// return this data after a restart is reported separately by
/// [`PlatformCapabilities`](super::capabilities::PlatformCapabilities).
#[derive(Debug)]
pub struct CorrelationTable<T> {
    entries: HashMap<NotificationHandle, T>,
}

impl<T> Default for CorrelationTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CorrelationTable<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the previous value for the handle, if any.
    pub fn insert(&mut self, handle: NotificationHandle, data: T) -> Option<T> {
        self.entries.insert(handle, data)
    }

    pub fn get(&self, handle: NotificationHandle) -> Option<&T> {
        self.entries.get(&handle)
    }

    pub fn remove(&mut self, handle: NotificationHandle) -> Option<T> {
        self.entries.remove(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
