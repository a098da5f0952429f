//! Table model structures.

use serde::{Deserialize, Serialize};

use super::{DocxElement, TextRun};

/// A cell in a table.
///
/// Cells translated from Markdown always hold exactly one paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    #[serde(default)]
    pub content: Vec<DocxElement>,
}

impl TableCell {
    /// Create a new empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell holding one paragraph of runs.
    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        Self {
            content: vec![DocxElement::Paragraph { runs }],
        }
    }

    /// Create a cell with plain text content.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::from_runs(vec![TextRun::plain(text)])
    }

    /// Get the plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(DocxElement::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if this cell is empty.
    pub fn is_empty(&self) -> bool {
        self.content.iter().all(|e| e.plain_text().is_empty())
    }
}

/// A row in a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in this row
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row of plain-text cells.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: texts.into_iter().map(TableCell::with_text).collect(),
        }
    }

    /// Add a cell to this row.
    pub fn add_cell(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
