//! Chat message types and text extraction.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    #[default]
    User,
    Assistant,
    Tool,
}

/// A structured content part, e.g. `{"type": "text", "text": "..."}`.
///
/// Only `text` is interpreted; other fields are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            extra: Map::new(),
        }
    }

    fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// One element of a multi-part message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    Text(String),
    Part(ContentPart),
}

/// Message content in any of its three wire shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Part(ContentPart),
    Parts(Vec<ContentItem>),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

impl From<Vec<ContentItem>> for MessageContent {
    fn from(items: Vec<ContentItem>) -> Self {
        MessageContent::Parts(items)
    }
}

/// A chat message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: MessageRole,
    #[serde(default)]
    pub content: MessageContent,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<MessageContent>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<MessageContent>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Flatten the content into plain text. See [`get_message_text`].
    pub fn text(&self) -> String {
        get_message_text(self)
    }
}

/// Get the text content of a message.
///
/// - Plain string content is returned unchanged.
/// - A single part yields its `text`, or `""` when it has none.
/// - A list is joined with no separator (strings as-is, parts by `text`)
///   and the joined result is trimmed once.
pub fn get_message_text(message: &Message) -> String {
    match &message.content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Part(part) => part.text_or_empty().to_string(),
        MessageContent::Parts(items) => {
            let joined: String = items
                .iter()
                .map(|item| match item {
                    ContentItem::Text(text) => text.as_str(),
                    ContentItem::Part(part) => part.text_or_empty(),
                })
                .collect();
            joined.trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_of(value: Value) -> String {
        let message: Message = serde_json::from_value(value).unwrap();
        get_message_text(&message)
    }

    #[test]
    fn test_string_content_unchanged() {
        assert_eq!(text_of(json!({"content": "hello"})), "hello");
        // No trimming for plain strings
        assert_eq!(text_of(json!({"content": "  padded "})), "  padded ");
    }

    #[test]
    fn test_single_part() {
        assert_eq!(text_of(json!({"content": {"text": "hi"}})), "hi");
        assert_eq!(text_of(json!({"content": {}})), "");
        assert_eq!(
            text_of(json!({"content": {"type": "image_url", "image_url": {"url": "x"}}})),
            ""
        );
    }

    #[test]
    fn test_list_joined_without_separator() {
        assert_eq!(text_of(json!({"content": ["a", {"text": "b"}, {}]})), "ab");
        assert_eq!(
            text_of(json!({"content": [{"type": "text", "text": "x"}, {"text": null}, "y"]})),
            "xy"
        );
    }

    #[test]
    fn test_list_trimmed_once_after_join() {
        assert_eq!(text_of(json!({"content": [" a ", {"text": "b "}]})), "a b");
        assert_eq!(text_of(json!({"content": []})), "");
    }

    #[test]
    fn test_shapes_deserialize_to_variants() {
        let message: Message = serde_json::from_value(json!({"content": {"text": "hi"}})).unwrap();
        assert_eq!(message.content, MessageContent::Part(ContentPart::text("hi")));

        let message: Message =
            serde_json::from_value(json!({"role": "assistant", "content": ["a"]})).unwrap();
        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(
            message.content,
            MessageContent::Parts(vec![ContentItem::Text("a".to_string())])
        );
    }

    #[test]
    fn test_extra_fields_survive_round_trip() {
        let value = json!({"role": "user", "content": [{"type": "text", "text": "hi"}]});
        let message: Message = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&message).unwrap(), value);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Message::user("hello").text(), "hello");
        assert_eq!(Message::system("rules").role, MessageRole::System);
        let message = Message::assistant(vec![
            ContentItem::Part(ContentPart::text("one ")),
            ContentItem::Text("two ".to_string()),
        ]);
        assert_eq!(message.text(), "one two");
    }
}
