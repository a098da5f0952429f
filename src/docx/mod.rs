//! DOCX (Word) package generator.
//!
//! Renders the document model to the seven WordprocessingML parts of a
//! minimal package and zips them.
//!
//! # Example
//!
//! ```
//! use markdocx::docx::DocxGenerator;
//! use markdocx::model::DocxElement;
//! use markdocx::style::StylingConfig;
//!
//! let config = StylingConfig::default();
//! let bytes = DocxGenerator::new(&config).generate(&[DocxElement::heading(1, "Title")])?;
//! assert_eq!(&bytes[..4], b"PK\x03\x04");
//! # Ok::<(), markdocx::Error>(())
//! ```

mod document;
mod parts;
mod props;
mod run;
mod styles;
pub mod xml;

use log::debug;

use crate::error::{Error, Result};
use crate::links::unique_links;
use crate::model::DocxElement;
use crate::package::PackageWriter;
use crate::style::{LinkStyle, StylingConfig};

use document::BodyWriter;

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const PACKAGE_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const STYLES_PART: &str = "word/styles.xml";
pub const SETTINGS_PART: &str = "word/settings.xml";
pub const SETTINGS_RELS_PART: &str = "word/_rels/settings.xml.rels";

/// One generated package part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: &'static str,
    pub content: String,
}

/// Generates DOCX packages under one styling configuration.
///
/// The configuration is only read; one generator can serve any number of
/// conversions.
#[derive(Debug, Clone, Copy)]
pub struct DocxGenerator<'a> {
    config: &'a StylingConfig,
}

impl<'a> DocxGenerator<'a> {
    pub fn new(config: &'a StylingConfig) -> Self {
        Self { config }
    }

    /// Render every part, in archive order.
    pub fn generate_parts(&self, elements: &[DocxElement]) -> Vec<Part> {
        let hyperlinks = match self.config.link_style {
            LinkStyle::Hyperlink => unique_links(elements),
            LinkStyle::Colored | LinkStyle::InlineUrl => Vec::new(),
        };
        let (document_rels, ids) = parts::document_relationships(&hyperlinks);
        let body = BodyWriter::new(self.config, &ids).write_document(elements);

        debug!(
            "generated {} elements with {} hyperlink relationships",
            elements.len(),
            ids.len()
        );

        vec![
            Part {
                name: CONTENT_TYPES_PART,
                content: parts::content_types(),
            },
            Part {
                name: PACKAGE_RELS_PART,
                content: parts::package_relationships(),
            },
            Part {
                name: DOCUMENT_RELS_PART,
                content: document_rels,
            },
            Part {
                name: DOCUMENT_PART,
                content: body,
            },
            Part {
                name: STYLES_PART,
                content: styles::write_styles(self.config),
            },
            Part {
                name: SETTINGS_PART,
                content: parts::settings(),
            },
            Part {
                name: SETTINGS_RELS_PART,
                content: parts::settings_relationships(),
            },
        ]
    }

    /// Render and zip the package.
    ///
    /// Text that XML cannot carry is dropped while escaping, so a rendered
    /// part only fails the [`Error::Encoding`] check if a writer emitted
    /// unescaped content. Fails with [`Error::ZipArchive`] if the archive
    /// cannot be written. No bytes are returned on failure.
    pub fn generate(&self, elements: &[DocxElement]) -> Result<Vec<u8>> {
        let mut writer = PackageWriter::new();
        for part in self.generate_parts(elements) {
            let bytes = encode_part(&part)?;
            writer.add_part(part.name, bytes)?;
        }
        writer.finish()
    }
}

/// UTF-8 bytes of a part, after checking every character is legal XML.
fn encode_part(part: &Part) -> Result<&[u8]> {
    if let Some(c) = part.content.chars().find(|&c| !xml::is_xml_char(c)) {
        return Err(Error::Encoding(format!(
            "{}: character U+{:04X} cannot be encoded in XML",
            part.name, c as u32
        )));
    }
    Ok(part.content.as_bytes())
}
