//! Text runs and their inline formatting.

use serde::{Deserialize, Serialize};

/// Inline formatting flags of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Italic text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,

    /// Underlined text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub underline: bool,

    /// Strikethrough text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strikethrough: bool,

    /// Inline code
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub code: bool,
}

impl TextStyle {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bold style.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    /// Create an italic style.
    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    /// Create a strikethrough style.
    pub fn strikethrough() -> Self {
        Self {
            strikethrough: true,
            ..Default::default()
        }
    }

    /// Create an inline code style.
    pub fn code() -> Self {
        Self {
            code: true,
            ..Default::default()
        }
    }

    /// Union of both flag sets.
    pub fn merge(self, other: TextStyle) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            strikethrough: self.strikethrough || other.strikethrough,
            code: self.code || other.code,
        }
    }

    /// Check if style has any formatting.
    pub fn has_formatting(&self) -> bool {
        self.bold || self.italic || self.underline || self.strikethrough || self.code
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: TextStyle,

    /// Link destination (if this run is a link)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

fn is_default_style(style: &TextStyle) -> bool {
    !style.has_formatting()
}

impl TextRun {
    /// Create a plain text run with no styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            link: None,
        }
    }

    /// Create a styled text run.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
        }
    }

    /// Create an inline code run.
    pub fn code(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::code())
    }

    /// Create a link text run.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            link: Some(url.into()),
        }
    }

    /// Set the link destination.
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// Add formatting flags to this run.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = self.style.merge(style);
        self
    }

    /// The link destination, if present and non-empty.
    pub fn link_url(&self) -> Option<&str> {
        self.link.as_deref().filter(|url| !url.is_empty())
    }

    /// Check if this run is a link.
    pub fn is_link(&self) -> bool {
        self.link_url().is_some()
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Concatenated text of a run sequence.
pub fn plain_text(runs: &[TextRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_run() {
        let plain = TextRun::plain("Hello");
        assert_eq!(plain.text, "Hello");
        assert!(!plain.is_link());

        let link = TextRun::link("Click here", "https://example.com");
        assert!(link.is_link());
        assert_eq!(link.link_url(), Some("https://example.com"));

        let code = TextRun::code("x + 1");
        assert!(code.style.code);
    }

    #[test]
    fn test_empty_link_is_not_a_link() {
        let run = TextRun::plain("text").with_link("");
        assert!(!run.is_link());
        assert_eq!(run.link_url(), None);
    }

    #[test]
    fn test_style_merge() {
        let style = TextStyle::bold().merge(TextStyle::italic());
        assert!(style.bold && style.italic);
        assert!(!style.strikethrough);

        let run = TextRun::styled("x", TextStyle::italic()).with_style(TextStyle::strikethrough());
        assert!(run.style.italic && run.style.strikethrough);
    }

    #[test]
    fn test_plain_text() {
        let runs = vec![
            TextRun::plain("Hello, "),
            TextRun::styled("World", TextStyle::bold()),
        ];
        assert_eq!(plain_text(&runs), "Hello, World");
    }

    #[test]
    fn test_run_serialization() {
        let json = serde_json::to_string(&TextRun::plain("Test")).unwrap();
        assert_eq!(json, r#"{"text":"Test"}"#);

        let json = serde_json::to_string(&TextRun::styled("B", TextStyle::bold())).unwrap();
        assert!(json.contains(r#""bold":true"#));
        assert!(!json.contains("italic"));
    }
}
