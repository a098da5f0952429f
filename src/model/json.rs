//! JSON dump of a translated document.

use crate::error::Result;

use super::DocxElement;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Serialize the document model to JSON.
pub fn to_json(elements: &[DocxElement], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(elements)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(elements)?,
    };
    Ok(json)
}

/// Parse a document model previously written by [`to_json`].
pub fn from_json(json: &str) -> Result<Vec<DocxElement>> {
    Ok(serde_json::from_str(json)?)
}
