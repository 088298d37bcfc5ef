use super::capabilities::ServerCapabilities;
use super::types::NotificationContent;

const BODY_SEPARATOR: &str = "\n\n";

/// Content in the two-field shape the freedesktop protocol expects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WireContent {
    pub summary: String,
    pub body: String,
    /// Set when text had to be dropped because the server cannot show a body.
    pub dropped_body: bool,
}

/// Collapse title, summary and body onto the server's summary and body.
///
/// The first present field becomes the summary. Every later field is merged
/// into the body, separated by a blank line. Servers without the `body`
/// capability only get the summary.
pub fn to_wire(content: &NotificationContent, caps: &ServerCapabilities) -> WireContent {
    let fields = content.present_fields();
    let Some((summary, rest)) = fields.split_first() else {
        return WireContent::default();
    };

    let body = rest.join(BODY_SEPARATOR);
    if !caps.body && !body.is_empty() {
        return WireContent {
            summary: summary.to_string(),
            body: String::new(),
            dropped_body: true,
        };
    }

    WireContent {
        summary: summary.to_string(),
        body,
        dropped_body: false,
    }
}

/// Prefix a title with a running index, as in `"3"` or `"3: Title"`.
///
/// The result never exceeds `limit` bytes and is cut on a char boundary.
pub fn indexed_title(index: usize, title: &str, limit: usize) -> String {
    let mut result = index.to_string();
    let title = title.trim();
    if !title.is_empty() {
        result.push_str(": ");
        result.push_str(title);
    }
    truncate_to(&mut result, limit);
    result
}

pub fn truncate_to(text: &mut String, limit: usize) {
    if text.len() <= limit {
        return;
    }
    let mut cut = limit;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps() -> ServerCapabilities {
        ServerCapabilities::basic()
    }

    #[test]
    fn test_title_only_becomes_summary() {
        let content = NotificationContent::new().with_title("Hello");
        let wire = to_wire(&content, &caps());
        assert_eq!(wire.summary, "Hello");
        assert_eq!(wire.body, "");
    }

    #[test]
    fn test_title_and_body() {
        let content = NotificationContent::new()
            .with_title("Title")
            .with_body("Body");
        let wire = to_wire(&content, &caps());
        assert_eq!(wire.summary, "Title");
        assert_eq!(wire.body, "Body");
    }

    #[test]
    fn test_summary_and_body() {
        let content = NotificationContent::new()
            .with_summary("Summary")
            .with_body("Body");
        let wire = to_wire(&content, &caps());
        assert_eq!(wire.summary, "Summary");
        assert_eq!(wire.body, "Body");
    }

    #[test]
    fn test_all_three_fields_merge_into_body() {
        let content = NotificationContent::new()
            .with_title("Title")
            .with_summary("Summary")
            .with_body("Body");
        let wire = to_wire(&content, &caps());
        assert_eq!(wire.summary, "Title");
        assert_eq!(wire.body, "Summary\n\nBody");
    }

    #[test]
    fn test_body_dropped_without_capability() {
        let content = NotificationContent::new()
            .with_title("Title")
            .with_body("Body");
        let wire = to_wire(&content, &ServerCapabilities::default());
        assert_eq!(wire.summary, "Title");
        assert!(wire.body.is_empty());
        assert!(wire.dropped_body);
    }

    #[test]
    fn test_empty_content() {
        let wire = to_wire(&NotificationContent::new(), &caps());
        assert_eq!(wire, WireContent::default());
    }

    #[test]
    fn test_indexed_title() {
        assert_eq!(indexed_title(3, "", 63), "3");
        assert_eq!(indexed_title(3, "Build done", 63), "3: Build done");
        assert_eq!(indexed_title(12, "abcdef", 6), "12: ab");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        let mut text = "héllo".to_string();
        truncate_to(&mut text, 2);
        assert_eq!(text, "h");
    }
}
