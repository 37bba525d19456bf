//! Notice records and message-text assembly.

use serde::{Deserialize, Serialize};

/// Display state for one identifier in one of the store's mappings.
///
/// Consumers (typically a UI layer) read these reactively and render
/// `display`/`close`/`icon`/`text` per identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Whether the notice should be shown.
    pub display: bool,
    /// Whether the notice can be dismissed. Always `None` for loading
    /// notices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<bool>,
    /// Icon hint for the consumer, e.g. `"success"` or `"error"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Assembled display text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One element of a multi-part message body, e.g. a field-level
/// validation error returned by a server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePart {
    /// The message fragment. Parts without one contribute nothing to the
    /// assembled text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// Message text accepted by the toggle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageText {
    /// A single message string.
    Plain(String),
    /// A sequence of message fragments, each decorated independently.
    Parts(Vec<MessagePart>),
}

impl MessageText {
    /// Assemble the display text, wrapping each usable fragment with the
    /// given decoration.
    ///
    /// Parts whose `msg` is absent or empty contribute nothing, not even
    /// the decoration.
    pub fn render(&self, prefix: &str, suffix: &str) -> String {
        match self {
            Self::Plain(text) => format!("{prefix}{text}{suffix}"),
            Self::Parts(parts) => parts
                .iter()
                .filter_map(|part| part.msg.as_deref())
                .filter(|msg| !msg.is_empty())
                .map(|msg| format!("{prefix}{msg}{suffix}"))
                .collect(),
        }
    }
}

impl From<&str> for MessageText {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for MessageText {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<Vec<MessagePart>> for MessageText {
    fn from(value: Vec<MessagePart>) -> Self {
        Self::Parts(value)
    }
}

/// Options accepted by the toggle operations on the store.
///
/// `display` defaults to `true`; everything else is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeOptions {
    pub display: bool,
    pub close: Option<bool>,
    pub icon: Option<String>,
    pub text: Option<MessageText>,
    pub prefix: String,
    pub suffix: String,
}

impl NoticeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the notice should be shown.
    pub fn display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// Set whether the notice can be dismissed.
    pub fn close(mut self, close: bool) -> Self {
        self.close = Some(close);
        self
    }

    /// Set the icon hint.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the message text.
    pub fn text(mut self, text: impl Into<MessageText>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the decoration wrapped around each message fragment.
    pub fn decorate(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Assemble the final display text, or `None` when no text was set.
    pub fn rendered_text(&self) -> Option<String> {
        self.text
            .as_ref()
            .map(|text| text.render(&self.prefix, &self.suffix))
    }
}

impl Default for NoticeOptions {
    fn default() -> Self {
        Self {
            display: true,
            close: None,
            icon: None,
            text: None,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}
