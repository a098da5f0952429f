//! # markdocx
//!
//! Markdown to Office Open XML (DOCX) conversion with configurable styling.
//!
//! Markdown is parsed into a small document model, which is rendered to the
//! WordprocessingML parts of a minimal `.docx` package and zipped in memory.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Default styling
//! let bytes = markdocx::convert("# Title\n\nSome **bold** text.")?;
//! std::fs::write("output.docx", bytes)?;
//!
//! // Convert a file
//! let bytes = markdocx::convert_file("README.md")?;
//! # Ok::<(), markdocx::Error>(())
//! ```
//!
//! ## Styling
//!
//! ```no_run
//! use markdocx::style::{LinkStyle, PageSize, StylingConfig};
//! use markdocx::Converter;
//!
//! let config = StylingConfig::default()
//!     .with_page_size(PageSize::A4)
//!     .with_link_style(LinkStyle::Hyperlink);
//!
//! let converter = Converter::new(config);
//! let bytes = converter.convert("See [the docs](https://example.com).")?;
//! # Ok::<(), markdocx::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async`: Async file conversion with Tokio

pub mod docx;
pub mod error;
pub mod links;
pub mod markdown;
pub mod model;
pub mod package;
pub mod style;
pub mod units;

// Re-exports
pub use docx::DocxGenerator;
pub use error::{Error, Result};
pub use links::{extract_links, unique_links};
pub use markdown::parse_markdown;
pub use model::{DocxElement, TableCell, TableRow, TextRun, TextStyle};
pub use package::OoxmlPackage;
pub use style::{FriendlyStylingConfig, StylingConfig};
pub use units::{to_twips, Measurement, Unit};

use std::path::Path;

use log::debug;

/// Converts Markdown to DOCX bytes under one styling configuration.
///
/// The configuration is fixed at construction and never mutated, so a
/// converter can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: StylingConfig,
}

impl Converter {
    pub fn new(config: StylingConfig) -> Self {
        Self { config }
    }

    /// Create a converter from a measurement-based configuration.
    pub fn from_friendly(config: &FriendlyStylingConfig) -> Self {
        Self::new(config.to_styling_config())
    }

    pub fn config(&self) -> &StylingConfig {
        &self.config
    }

    /// Translate Markdown into the document model without rendering it.
    pub fn parse(&self, markdown: &str) -> Vec<DocxElement> {
        parse_markdown(markdown)
    }

    /// Convert a Markdown string to the bytes of a `.docx` package.
    pub fn convert(&self, markdown: &str) -> Result<Vec<u8>> {
        let elements = self.parse(markdown);
        let bytes = DocxGenerator::new(&self.config).generate(&elements)?;
        debug!(
            "converted {} bytes of markdown into {} bytes of docx",
            markdown.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Read a UTF-8 Markdown file in full, then convert it.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let markdown = std::fs::read_to_string(path)?;
        self.convert(&markdown)
    }

    /// Async variant of [`Converter::convert_file`]. Only the file read is
    /// asynchronous.
    #[cfg(feature = "async")]
    pub async fn convert_file_async(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let markdown = tokio::fs::read_to_string(path).await?;
        self.convert(&markdown)
    }
}

/// Convert Markdown with the default styling.
///
/// # Example
///
/// ```
/// let bytes = markdocx::convert("Hello, *world*!")?;
/// assert_eq!(&bytes[..4], b"PK\x03\x04");
/// # Ok::<(), markdocx::Error>(())
/// ```
pub fn convert(markdown: &str) -> Result<Vec<u8>> {
    Converter::default().convert(markdown)
}

/// Convert Markdown with the given styling.
pub fn convert_with_config(markdown: &str, config: &StylingConfig) -> Result<Vec<u8>> {
    let elements = parse_markdown(markdown);
    DocxGenerator::new(config).generate(&elements)
}

/// Convert a Markdown file with the default styling.
///
/// # Example
///
/// ```no_run
/// let bytes = markdocx::convert_file("notes.md")?;
/// std::fs::write("notes.docx", bytes)?;
/// # Ok::<(), markdocx::Error>(())
/// ```
pub fn convert_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Converter::default().convert_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PageSize;

    #[test]
    fn test_convert_starts_with_zip_magic() {
        for input in ["", "# Title", "plain"] {
            let bytes = convert(input).unwrap();
            assert_eq!(&bytes[..4], &[0x50, 0x4B, 0x03, 0x04]);
        }
    }

    #[test]
    fn test_converter_keeps_config() {
        let config = StylingConfig::default().with_page_size(PageSize::A5);
        let converter = Converter::new(config.clone());
        assert_eq!(converter.config(), &config);
        assert_eq!(
            converter.convert("x").unwrap(),
            convert_with_config("x", &config).unwrap()
        );
    }

    #[test]
    fn test_from_friendly_defaults() {
        let converter = Converter::from_friendly(&FriendlyStylingConfig::default());
        assert_eq!(converter.config().page_size, PageSize::Letter);
    }

    #[test]
    fn test_convert_missing_file() {
        assert!(matches!(
            convert_file("/definitely/not/here.md"),
            Err(Error::Io(_))
        ));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_convert_file_async() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "# Async").unwrap();
        let converter = Converter::default();
        assert_eq!(
            converter.convert_file_async(&path).await.unwrap(),
            converter.convert_file(&path).unwrap()
        );
    }
}
