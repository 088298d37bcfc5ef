use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::Action;

static GENERATED_CATEGORIES: AtomicUsize = AtomicUsize::new(0);

/// A named group of actions shared by notifications of the same kind.
///
/// Only some platforms need the name, so it is generated when the
/// application does not care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCategory {
    name: String,
    actions: Vec<Action>,
}

impl NotificationCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: Vec::new(),
        }
    }

    pub fn anonymous() -> Self {
        let n = GENERATED_CATEGORIES.fetch_add(1, Ordering::Relaxed);
        Self::new(format!("herald.category.{n}"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an action whose key is derived from the category name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let key = format!("{}.{}", self.name, self.actions.len());
        self.actions.push(Action::new(key, label));
        self
    }

    pub fn action_for_key(&self, key: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.key == key)
    }
}

/// Flatten actions into the `[key, label, key, label, ...]` wire array.
pub fn actions_wire(actions: &[Action]) -> Vec<String> {
    actions
        .iter()
        .flat_map(|action| [action.key.clone(), action.label.clone()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_keys() {
        let category = NotificationCategory::new("chat")
            .with_label("Reply")
            .with_label("Mute");
        let keys: Vec<_> = category.actions().iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["chat.0", "chat.1"]);
        assert_eq!(category.action_for_key("chat.1").map(|a| a.label.as_str()), Some("Mute"));
        assert!(category.action_for_key("chat.2").is_none());
    }

    #[test]
    fn test_anonymous_names_are_unique() {
        let a = NotificationCategory::anonymous();
        let b = NotificationCategory::anonymous();
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn test_actions_wire_layout() {
        let actions = vec![Action::default_action("Open"), Action::new("dismiss", "Dismiss")];
        assert_eq!(
            actions_wire(&actions),
            vec!["default", "Open", "dismiss", "Dismiss"]
        );
    }
}
