//! Block-level document elements.

use serde::{Deserialize, Serialize};

use super::run::plain_text;
use super::{TableRow, TextRun};

/// One block of the translated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocxElement {
    /// Heading of level 1-6; inline formatting is flattened to plain text.
    Heading { level: u8, text: String },

    Paragraph { runs: Vec<TextRun> },

    /// Each item is one flat run sequence.
    BulletList { items: Vec<Vec<TextRun>> },

    NumberedList { items: Vec<Vec<TextRun>> },

    /// The language tag is kept but not used for highlighting.
    CodeBlock {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        code: String,
    },

    /// Runs of every quoted paragraph, concatenated.
    Blockquote { runs: Vec<TextRun> },

    /// Header row first, then body rows.
    Table { rows: Vec<TableRow> },

    HorizontalRule,

    /// Placeholder for an image; the source is never fetched.
    Image { alt_text: String, source: String },
}

impl DocxElement {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        DocxElement::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(runs: Vec<TextRun>) -> Self {
        DocxElement::Paragraph { runs }
    }

    pub fn code_block(language: Option<String>, code: impl Into<String>) -> Self {
        DocxElement::CodeBlock {
            language,
            code: code.into(),
        }
    }

    pub fn image(alt_text: impl Into<String>, source: impl Into<String>) -> Self {
        DocxElement::Image {
            alt_text: alt_text.into(),
            source: source.into(),
        }
    }

    /// Short kind name, as used in the JSON `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            DocxElement::Heading { .. } => "heading",
            DocxElement::Paragraph { .. } => "paragraph",
            DocxElement::BulletList { .. } => "bullet_list",
            DocxElement::NumberedList { .. } => "numbered_list",
            DocxElement::CodeBlock { .. } => "code_block",
            DocxElement::Blockquote { .. } => "blockquote",
            DocxElement::Table { .. } => "table",
            DocxElement::HorizontalRule => "horizontal_rule",
            DocxElement::Image { .. } => "image",
        }
    }

    /// Visible text without formatting. List items and table cells are
    /// separated by newlines.
    pub fn plain_text(&self) -> String {
        match self {
            DocxElement::Heading { text, .. } => text.clone(),
            DocxElement::Paragraph { runs } | DocxElement::Blockquote { runs } => plain_text(runs),
            DocxElement::BulletList { items } | DocxElement::NumberedList { items } => items
                .iter()
                .map(|item| plain_text(item))
                .collect::<Vec<_>>()
                .join("\n"),
            DocxElement::CodeBlock { code, .. } => code.clone(),
            DocxElement::Table { rows } => rows
                .iter()
                .flat_map(|row| row.cells.iter().map(|cell| cell.plain_text()))
                .collect::<Vec<_>>()
                .join("\n"),
            DocxElement::HorizontalRule => String::new(),
            DocxElement::Image { alt_text, .. } => alt_text.clone(),
        }
    }
}
