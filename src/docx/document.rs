//! `word/document.xml` generation.

use std::collections::HashMap;
use std::fmt::Write;

use super::props::{ParagraphProperties, RunProperties};
use super::run::{text_run, RunWriter};
use super::xml::{escape_xml, NS_A, NS_PIC, NS_R, NS_W, NS_WP, XML_DECLARATION};
use crate::model::{DocxElement, TableRow, TextRun};
use crate::style::StylingConfig;

/// Numbering definition referenced by bullet list items.
pub(crate) const BULLET_NUM_ID: u32 = 1;
/// Numbering definition referenced by numbered list items.
pub(crate) const ORDERED_NUM_ID: u32 = 2;

// Fixed placeholder extent in EMUs (6in x 3.375in).
const IMAGE_CX: i64 = 5_486_400;
const IMAGE_CY: i64 = 3_086_400;

/// Writes the document body for one conversion.
pub(crate) struct BodyWriter<'a> {
    config: &'a StylingConfig,
    runs: RunWriter<'a>,
    next_image_id: u32,
}

impl<'a> BodyWriter<'a> {
    pub fn new(config: &'a StylingConfig, hyperlinks: &'a HashMap<String, String>) -> Self {
        Self {
            config,
            runs: RunWriter::new(config, hyperlinks),
            next_image_id: 1,
        }
    }

    /// The complete document part.
    pub fn write_document(&mut self, elements: &[DocxElement]) -> String {
        let mut xml = String::with_capacity(1024 + elements.len() * 128);
        xml.push_str(XML_DECLARATION);
        let _ = write!(
            xml,
            r#"<w:document xmlns:w="{NS_W}" xmlns:r="{NS_R}" xmlns:wp="{NS_WP}" xmlns:a="{NS_A}" xmlns:pic="{NS_PIC}"><w:body>"#
        );
        for element in elements {
            xml.push_str(&self.write_element(element));
        }
        xml.push_str(&self.section_properties());
        xml.push_str("</w:body></w:document>");
        xml
    }

    pub fn write_element(&mut self, element: &DocxElement) -> String {
        match element {
            DocxElement::Heading { level, text } => self.heading(*level, text),
            DocxElement::Paragraph { runs } => self.paragraph(None, runs),
            DocxElement::BulletList { items } => self.list(items, "ListBullet", BULLET_NUM_ID),
            DocxElement::NumberedList { items } => {
                self.list(items, "ListNumber", ORDERED_NUM_ID)
            }
            DocxElement::CodeBlock { code, .. } => self.code_block(code),
            DocxElement::Blockquote { runs } => {
                self.paragraph(Some(ParagraphProperties::styled("Quote")), runs)
            }
            DocxElement::Table { rows } => self.table(rows),
            DocxElement::HorizontalRule => horizontal_rule(),
            DocxElement::Image { alt_text, .. } => self.image(alt_text),
        }
    }

    fn heading(&self, level: u8, text: &str) -> String {
        let level = if (1..=6).contains(&level) { level } else { 1 };
        let props = ParagraphProperties::styled(format!("Heading{level}"));
        format!(
            "<w:p>{}{}</w:p>",
            props.to_xml(),
            text_run(&RunProperties::new(), text)
        )
    }

    fn paragraph(&self, props: Option<ParagraphProperties>, runs: &[TextRun]) -> String {
        let props = props.map(|p| p.to_xml()).unwrap_or_default();
        format!("<w:p>{props}{}</w:p>", self.runs.write_runs(runs))
    }

    fn list(&self, items: &[Vec<TextRun>], style: &str, num_id: u32) -> String {
        items
            .iter()
            .map(|item| {
                let props = ParagraphProperties {
                    num_id: Some(num_id),
                    ..ParagraphProperties::styled(style)
                };
                self.paragraph(Some(props), item)
            })
            .collect()
    }

    fn code_block(&self, code: &str) -> String {
        let run = RunProperties {
            style: Some("Code".to_string()),
            ..Default::default()
        };
        format!(
            "<w:p>{}{}</w:p>",
            ParagraphProperties::styled("CodeBlock").to_xml(),
            text_run(&run, code)
        )
    }

    fn table(&mut self, rows: &[TableRow]) -> String {
        let width = self.config.tables.column_width;
        let columns = rows.first().map_or(0, |row| row.cells.len());

        let mut xml = String::from(concat!(
            "<w:tbl><w:tblPr>",
            r#"<w:tblStyle w:val="TableGrid"/><w:tblW w:w="0" w:type="auto"/>"#,
            r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#,
            "</w:tblPr><w:tblGrid>"
        ));
        for _ in 0..columns {
            let _ = write!(xml, r#"<w:gridCol w:w="{width}"/>"#);
        }
        xml.push_str("</w:tblGrid>");

        for (index, row) in rows.iter().enumerate() {
            xml.push_str("<w:tr>");
            if index == 0 {
                xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
            }
            for cell in &row.cells {
                let _ = write!(xml, r#"<w:tc><w:tcPr><w:tcW w:w="{width}" w:type="dxa"/></w:tcPr>"#);
                if cell.content.is_empty() {
                    xml.push_str("<w:p/>");
                }
                for element in &cell.content {
                    xml.push_str(&self.write_element(element));
                }
                xml.push_str("</w:tc>");
            }
            xml.push_str("</w:tr>");
        }
        xml.push_str("</w:tbl>");
        xml
    }

    /// Inline drawing placeholder. No media part is written.
    ///
    /// The blip's `rId1` resolves to the styles relationship; the package
    /// has no image relationship. Word renders an empty frame with the alt
    /// text.
    fn image(&mut self, alt_text: &str) -> String {
        let id = self.next_image_id;
        self.next_image_id += 1;
        let alt = escape_xml(alt_text);
        format!(
            concat!(
                "<w:p><w:r><w:drawing>",
                r#"<wp:inline distT="0" distB="0" distL="0" distR="0">"#,
                r#"<wp:extent cx="{cx}" cy="{cy}"/>"#,
                r#"<wp:docPr id="{id}" name="Picture {id}" descr="{alt}"/>"#,
                r#"<a:graphic><a:graphicData uri="{ns_pic}">"#,
                r#"<pic:pic><pic:nvPicPr><pic:cNvPr id="0" name="{alt}"/><pic:cNvPicPr/></pic:nvPicPr>"#,
                r#"<pic:blipFill><a:blip r:embed="rId1"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>"#,
                r#"<pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>"#,
                r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic>"#,
                "</a:graphicData></a:graphic></wp:inline>",
                "</w:drawing></w:r></w:p>"
            ),
            cx = IMAGE_CX,
            cy = IMAGE_CY,
            id = id,
            alt = alt,
            ns_pic = NS_PIC,
        )
    }

    fn section_properties(&self) -> String {
        let (width, height) = self.config.page_size.twips();
        let m = &self.config.page_margins;
        format!(
            concat!(
                r#"<w:sectPr><w:pgSz w:w="{}" w:h="{}"/>"#,
                r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="{}"/>"#,
                "</w:sectPr>"
            ),
            width, height, m.top, m.right, m.bottom, m.left, m.header, m.footer, m.gutter
        )
    }
}

fn horizontal_rule() -> String {
    String::from(
        r#"<w:p><w:pPr><w:pBdr><w:bottom w:val="single" w:sz="6" w:space="1" w:color="auto"/></w:pBdr></w:pPr></w:p>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableCell;
    use crate::style::{PageMargins, PageSize};

    fn body(config: &StylingConfig, elements: &[DocxElement]) -> String {
        let ids = HashMap::new();
        BodyWriter::new(config, &ids).write_document(elements)
    }

    #[test]
    fn test_empty_document() {
        let xml = body(&StylingConfig::default(), &[]);
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("<w:body><w:sectPr>"));
        assert!(xml.contains(r#"xmlns:r=""#));
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }

    #[test]
    fn test_heading_levels() {
        let xml = body(
            &StylingConfig::default(),
            &[DocxElement::heading(1, "Title"), DocxElement::heading(9, "Deep")],
        );
        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t xml:space="preserve">Title</w:t>"#));
        assert!(!xml.contains("Heading9"));
        assert_eq!(xml.matches(r#"w:val="Heading1""#).count(), 2);
    }

    #[test]
    fn test_lists_use_numbering() {
        let xml = body(
            &StylingConfig::default(),
            &[
                DocxElement::BulletList {
                    items: vec![vec![TextRun::plain("a")], vec![TextRun::plain("b")]],
                },
                DocxElement::NumberedList {
                    items: vec![vec![TextRun::plain("c")]],
                },
            ],
        );
        assert_eq!(
            xml.matches(r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr>"#).count(),
            2
        );
        assert_eq!(xml.matches(r#"<w:numId w:val="2"/>"#).count(), 1);
        assert!(xml.contains(r#"<w:pStyle w:val="ListBullet"/>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="ListNumber"/>"#));
    }

    #[test]
    fn test_code_block_keeps_newlines() {
        let xml = body(
            &StylingConfig::default(),
            &[DocxElement::code_block(Some("rust".into()), "if a < b {\n    x();\n}\n")],
        );
        assert!(xml.contains(r#"<w:pStyle w:val="CodeBlock"/>"#));
        assert!(xml.contains(r#"<w:rStyle w:val="Code"/>"#));
        assert!(xml.contains(">if a &lt; b {\n    x();\n}\n</w:t>"));
        assert_eq!(xml.matches("<w:r>").count(), 1);
    }

    #[test]
    fn test_blockquote_and_rule() {
        let xml = body(
            &StylingConfig::default(),
            &[
                DocxElement::Blockquote {
                    runs: vec![TextRun::plain("quoted")],
                },
                DocxElement::HorizontalRule,
            ],
        );
        assert!(xml.contains(r#"<w:pStyle w:val="Quote"/>"#));
        assert!(xml.contains(r#"<w:bottom w:val="single" w:sz="6" w:space="1" w:color="auto"/>"#));
    }

    #[test]
    fn test_table_grid_and_cells() {
        let rows = vec![
            TableRow::from_texts(["A", "B", "C"]),
            TableRow::from_texts(["1", "2"]),
            TableRow {
                cells: vec![TableCell::new()],
            },
        ];
        let xml = body(&StylingConfig::default(), &[DocxElement::Table { rows }]);
        assert_eq!(xml.matches(r#"<w:gridCol w:w="2000"/>"#).count(), 3);
        assert_eq!(xml.matches("<w:tr>").count(), 3);
        assert_eq!(xml.matches("<w:tc>").count(), 6);
        assert_eq!(xml.matches("<w:tblHeader/>").count(), 1);
        assert!(xml.contains("<w:p/></w:tc>"));

        let a = xml.find(">A<").unwrap();
        let b = xml.find(">B<").unwrap();
        let one = xml.find(">1<").unwrap();
        assert!(a < b && b < one);
    }

    #[test]
    fn test_images_get_distinct_ids() {
        let xml = body(
            &StylingConfig::default(),
            &[
                DocxElement::image("first \"pic\"", "a.png"),
                DocxElement::image("second", "b.png"),
            ],
        );
        assert!(xml.contains(r#"<wp:docPr id="1" name="Picture 1" descr="first &quot;pic&quot;"/>"#));
        assert!(xml.contains(r#"<wp:docPr id="2" name="Picture 2" descr="second"/>"#));
        assert!(xml.contains(r#"<a:blip r:embed="rId1"/>"#));
        assert!(!xml.contains("a.png"));
    }

    #[test]
    fn test_section_properties() {
        let config = StylingConfig::default()
            .with_page_size(PageSize::A4)
            .with_page_margins(PageMargins::uniform(1000));
        let xml = body(&config, &[]);
        assert!(xml.contains(r#"<w:pgSz w:w="11900" w:h="16840"/>"#));
        assert!(xml.contains(
            r#"<w:pgMar w:top="1000" w:right="1000" w:bottom="1000" w:left="1000" w:header="720" w:footer="720" w:gutter="0"/>"#
        ));
    }
}
