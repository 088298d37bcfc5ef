use herald::domain::notification::content::{indexed_title, truncate_to};
use herald::{NotificationContent, NotificationHandle, NotificationRequest, Urgency};

use crate::config::{BODY_CAPACITY, SUMMARY_CAPACITY, TITLE_CAPACITY};

/// The editable fields of the harness and what has been sent from them.
#[derive(Debug, Default)]
pub struct Form {
    pub title: String,
    pub body: String,
    pub summary: String,
    pub use_index: bool,
    pub urgency: Urgency,
    pub sent: usize,
    pub last: Option<NotificationHandle>,
}

impl Form {
    pub fn new(use_index: bool) -> Self {
        Self {
            use_index,
            ..Self::default()
        }
    }

    pub fn set_title(&mut self, text: &str) {
        self.title = bounded(text, TITLE_CAPACITY);
    }

    pub fn set_body(&mut self, text: &str) {
        self.body = bounded(text, BODY_CAPACITY);
    }

    pub fn set_summary(&mut self, text: &str) {
        self.summary = bounded(text, SUMMARY_CAPACITY);
    }

    pub fn content(&self) -> NotificationContent {
        let title = if self.use_index {
            indexed_title(self.sent, &self.title, TITLE_CAPACITY - 1)
        } else {
            self.title.clone()
        };

        NotificationContent {
            title: non_empty(title),
            summary: non_empty(self.summary.clone()),
            body: non_empty(self.body.clone()),
        }
    }

    pub fn request(&self) -> NotificationRequest {
        NotificationRequest::new(self.content()).urgency(self.urgency)
    }

    /// Count a send attempt, remembering the handle when it succeeded.
    pub fn record_sent(&mut self, handle: Option<NotificationHandle>) {
        self.sent += 1;
        if handle.is_some() {
            self.last = handle;
        }
    }
}

fn bounded(text: &str, capacity: usize) -> String {
    let mut text = text.to_string();
    truncate_to(&mut text, capacity - 1);
    text
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_bounded() {
        let mut form = Form::new(false);
        form.set_title(&"t".repeat(200));
        form.set_body(&"b".repeat(200));
        form.set_summary(&"s".repeat(300));
        assert_eq!(form.title.len(), TITLE_CAPACITY - 1);
        assert_eq!(form.body.len(), BODY_CAPACITY - 1);
        assert_eq!(form.summary.len(), SUMMARY_CAPACITY - 1);
    }

    #[test]
    fn test_indexed_titles_follow_send_count() {
        let mut form = Form::new(true);
        assert_eq!(form.content().title.as_deref(), Some("0"));

        form.set_title("Deploy");
        form.record_sent(None);
        assert_eq!(form.content().title.as_deref(), Some("1: Deploy"));
        assert!(form.last.is_none());
    }

    #[test]
    fn test_empty_fields_are_absent() {
        let mut form = Form::new(false);
        form.set_body("only body");
        let content = form.content();
        assert!(content.title.is_none());
        assert!(content.summary.is_none());
        assert_eq!(content.body.as_deref(), Some("only body"));
    }

    #[test]
    fn test_record_sent_keeps_last_handle() {
        let mut form = Form::new(false);
        let handle = NotificationHandle::from_raw(3);
        form.record_sent(Some(handle));
        form.record_sent(None);
        assert_eq!(form.last, Some(handle));
        assert_eq!(form.sent, 2);
    }
}
