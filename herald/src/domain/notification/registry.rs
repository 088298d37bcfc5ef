use std::collections::HashMap;

use super::error::NotificationError;
use super::types::{Notification, NotificationHandle, NotificationId};

/// In-flight notifications keyed by their server-assigned identifier.
///
/// Used to resolve ids carried by server signals back to the locally owned
/// notification. Not synchronized; owners that share it across threads wrap
/// it in a lock.
#[derive(Debug, Default)]
pub struct NotificationRegistry {
    by_id: HashMap<NotificationId, Notification>,
    by_handle: HashMap<NotificationHandle, NotificationId>,
}

impl NotificationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a displayed notification.
    pub fn add(&mut self, notification: Notification) -> Result<NotificationId, NotificationError> {
        let id = notification.id().ok_or(NotificationError::NotDisplayed)?;
        if self.by_id.contains_key(&id) {
            return Err(NotificationError::DuplicateId(id));
        }
        if let Some(stale) = self.by_handle.insert(notification.handle(), id) {
            // a handle lives under exactly one id
            self.by_id.remove(&stale);
        }
        self.by_id.insert(id, notification);
        Ok(id)
    }

    pub fn find(&self, id: NotificationId) -> Option<&Notification> {
        self.by_id.get(&id)
    }

    pub fn find_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.by_id.get_mut(&id)
    }

    pub fn find_by_handle(&self, handle: NotificationHandle) -> Option<&Notification> {
        self.by_handle
            .get(&handle)
            .and_then(|id| self.by_id.get(id))
    }

    pub fn id_of(&self, handle: NotificationHandle) -> Option<NotificationId> {
        self.by_handle.get(&handle).copied()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        let notification = self.by_id.remove(&id)?;
        self.by_handle.remove(&notification.handle());
        Some(notification)
    }

    /// Re-key a notification after the server answered an edit.
    ///
    /// The server may keep `old_id` or assign a new one. Fails without
    /// touching the registry if the new id already belongs to a different
    /// notification.
    pub fn replace(
        &mut self,
        old_id: NotificationId,
        notification: Notification,
    ) -> Result<NotificationId, NotificationError> {
        let new_id = notification.id().ok_or(NotificationError::NotDisplayed)?;
        if new_id != old_id && self.by_id.contains_key(&new_id) {
            return Err(NotificationError::DuplicateId(new_id));
        }
        self.remove(old_id);
        self.add(notification)
    }

    pub fn ids(&self) -> Vec<NotificationId> {
        let mut ids: Vec<_> = self.by_id.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        self.by_handle.clear();
        self.by_id.drain().map(|(_, notification)| notification).collect()
    }

    pub fn clear(&mut self) {
        self.by_handle.clear();
        self.by_id.clear();
    }
}
