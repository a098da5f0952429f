//! `word/styles.xml` generation.

use std::fmt::Write;

use super::props::{
    border_xml, indentation_xml, spacing_xml, table_border_xml, ParagraphProperties, RunProperties,
};
use super::xml::{escape_xml, NS_W, XML_DECLARATION};
use crate::style::{Alignment, FontConfig, StylingConfig};

/// Style type (paragraph, character or table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StyleType {
    Paragraph,
    Character,
    Table,
}

impl StyleType {
    fn as_str(self) -> &'static str {
        match self {
            StyleType::Paragraph => "paragraph",
            StyleType::Character => "character",
            StyleType::Table => "table",
        }
    }
}

/// One `w:style` definition.
#[derive(Debug, Clone)]
pub(crate) struct Style {
    /// Style ID (e.g., "Heading1")
    pub id: String,
    /// Style name (e.g., "heading 1")
    pub name: String,
    pub style_type: StyleType,
    pub based_on: Option<&'static str>,
    pub next: Option<&'static str>,
    pub ui_priority: Option<u32>,
    pub q_format: bool,
    pub paragraph: ParagraphProperties,
    pub run: RunProperties,
    /// Raw `w:tblPr` and `w:tblStylePr` content for table styles.
    pub table: String,
}

impl Style {
    fn new(style_type: StyleType, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            style_type,
            based_on: None,
            next: None,
            ui_priority: None,
            q_format: false,
            paragraph: ParagraphProperties::new(),
            run: RunProperties::new(),
            table: String::new(),
        }
    }

    fn based_on_normal(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            based_on: Some("Normal"),
            next: Some("Normal"),
            q_format: true,
            ..Self::new(StyleType::Paragraph, id, name)
        }
    }

    fn to_xml(&self) -> String {
        let mut xml = format!(
            r#"<w:style w:type="{}" w:styleId="{}"><w:name w:val="{}"/>"#,
            self.style_type.as_str(),
            escape_xml(&self.id),
            escape_xml(&self.name)
        );
        if let Some(based_on) = self.based_on {
            let _ = write!(xml, r#"<w:basedOn w:val="{based_on}"/>"#);
        }
        if let Some(next) = self.next {
            let _ = write!(xml, r#"<w:next w:val="{next}"/>"#);
        }
        if let Some(priority) = self.ui_priority {
            let _ = write!(xml, r#"<w:uiPriority w:val="{priority}"/>"#);
        }
        if self.q_format {
            xml.push_str("<w:qFormat/>");
        }
        xml.push_str(&self.paragraph.to_xml());
        xml.push_str(&self.run.to_xml());
        xml.push_str(&self.table);
        xml.push_str("</w:style>");
        xml
    }
}

fn font_run(font: Option<&FontConfig>) -> RunProperties {
    font.map(RunProperties::from_font).unwrap_or_default()
}

fn normal_style(config: &StylingConfig) -> Style {
    let para = &config.paragraphs;
    let mut style = Style::new(StyleType::Paragraph, "Normal", "Normal");
    style.q_format = true;
    style.paragraph.borders = border_xml(&para.border);
    style.paragraph.spacing = spacing_xml(&para.spacing, Some(&config.line_spacing));
    style.paragraph.indentation = indentation_xml(&para.indentation);
    if para.alignment != Alignment::Left {
        style.paragraph.alignment = Some(para.alignment.as_str());
    }
    style.run = font_run(para.font.as_ref());
    style
}

fn heading_style(config: &StylingConfig, level: u8) -> Style {
    let heading = config.headings.style_for(level);
    let mut style = Style::based_on_normal(format!("Heading{level}"), format!("heading {level}"));
    style.ui_priority = Some(9);
    style.paragraph.keep_next = heading.keep_with_next;
    style.paragraph.keep_lines = heading.keep_lines;
    style.paragraph.borders = border_xml(&heading.border);
    style.paragraph.spacing = spacing_xml(&heading.spacing, None);
    style.paragraph.indentation = indentation_xml(&heading.indentation);
    style.paragraph.outline_level = Some(level - 1);
    style.run = RunProperties {
        bold: true,
        complex_script: true,
        kern: Some(32),
        ..RunProperties::from_font(&heading.font)
    };
    style
}

fn code_block_style(config: &StylingConfig) -> Style {
    let code = &config.code_blocks;
    let mut style = Style::based_on_normal("CodeBlock", "Code Block");
    style.paragraph.borders = border_xml(&code.border);
    style.paragraph.shading = Some(code.background.clone());
    style.paragraph.spacing = spacing_xml(&code.spacing, None);
    style.paragraph.indentation = indentation_xml(&code.indentation);
    style.run = RunProperties::from_font(&code.font);
    style
}

fn quote_style(config: &StylingConfig) -> Style {
    let quote = &config.blockquotes;
    let mut style = Style::based_on_normal("Quote", "Quote");
    style.ui_priority = Some(29);
    style.paragraph.borders = border_xml(&quote.border);
    style.paragraph.spacing = spacing_xml(&quote.spacing, None);
    style.paragraph.indentation = indentation_xml(&quote.indentation);
    style.run = RunProperties {
        italic: quote.italic,
        complex_script: true,
        ..font_run(quote.font.as_ref())
    };
    style
}

fn list_style(config: &StylingConfig, id: &str, name: &str, font: Option<&FontConfig>) -> Style {
    let lists = &config.lists;
    let mut style = Style::based_on_normal(id, name);
    style.ui_priority = Some(99);
    style.paragraph.borders = border_xml(&lists.border);
    style.paragraph.spacing = spacing_xml(&lists.spacing, None);
    style.paragraph.indentation = indentation_xml(&lists.indentation);
    style.run = font_run(font);
    style
}

fn table_style(config: &StylingConfig) -> Style {
    let table = &config.tables;
    let mut style = Style::new(StyleType::Table, "TableGrid", "Table Grid");
    style.ui_priority = Some(39);
    style.paragraph.spacing = spacing_xml(&table.spacing, None);
    style.run = font_run(table.font.as_ref());

    let mut tbl = String::from("<w:tblPr>");
    if table.indentation.left != 0 {
        let _ = write!(tbl, r#"<w:tblInd w:w="{}" w:type="dxa"/>"#, table.indentation.left);
    }
    tbl.push_str(&table_border_xml(&table.border));
    let _ = write!(
        tbl,
        r#"<w:tblCellMar><w:left w:w="{pad}" w:type="dxa"/><w:right w:w="{pad}" w:type="dxa"/></w:tblCellMar>"#,
        pad = table.cell_padding
    );
    tbl.push_str("</w:tblPr>");

    let header = RunProperties {
        bold: true,
        ..font_run(table.header_font.as_ref())
    };
    let _ = write!(tbl, r#"<w:tblStylePr w:type="firstRow">{}</w:tblStylePr>"#, header.to_xml());
    style.table = tbl;
    style
}

fn code_char_style(config: &StylingConfig) -> Style {
    let code = &config.code_blocks;
    let mut style = Style::new(StyleType::Character, "Code", "Code");
    style.ui_priority = Some(99);
    style.run = RunProperties {
        shading: Some(code.inline_background.clone()),
        ..RunProperties::from_font(&code.font)
    };
    style
}

fn doc_defaults(font: &FontConfig) -> String {
    let run = RunProperties {
        lang: Some("en-US".to_string()),
        ..RunProperties::from_font(font)
    };
    format!(
        "<w:docDefaults><w:rPrDefault>{}</w:rPrDefault><w:pPrDefault/></w:docDefaults>",
        run.to_xml()
    )
}

fn latent_styles() -> String {
    let mut xml = String::from(concat!(
        r#"<w:latentStyles w:defLockedState="0" w:defUIPriority="99" w:defSemiHidden="0" "#,
        r#"w:defUnhideWhenUsed="0" w:defQFormat="0" w:count="371">"#,
        r#"<w:lsdException w:name="Normal" w:uiPriority="0" w:qFormat="1"/>"#
    ));
    for level in 1..=6 {
        let _ = write!(
            xml,
            r#"<w:lsdException w:name="heading {level}" w:uiPriority="9" w:qFormat="1"/>"#
        );
    }
    xml.push_str("</w:latentStyles>");
    xml
}

/// All styles the document body references.
pub(crate) fn build_styles(config: &StylingConfig) -> Vec<Style> {
    let mut styles = vec![normal_style(config)];
    styles.extend((1..=6).map(|level| heading_style(config, level)));
    styles.push(code_block_style(config));
    styles.push(quote_style(config));
    styles.push(list_style(
        config,
        "ListBullet",
        "List Bullet",
        config.lists.bullet_font.as_ref(),
    ));
    styles.push(list_style(
        config,
        "ListNumber",
        "List Number",
        config.lists.numbered_font.as_ref(),
    ));
    styles.push(table_style(config));
    styles.push(code_char_style(config));
    styles
}

/// The complete styles part.
pub(crate) fn write_styles(config: &StylingConfig) -> String {
    let mut xml = String::from(XML_DECLARATION);
    let _ = write!(xml, r#"<w:styles xmlns:w="{NS_W}">"#);
    xml.push_str(&doc_defaults(&config.default_font));
    xml.push_str(&latent_styles());
    for style in build_styles(config) {
        xml.push_str(&style.to_xml());
    }
    xml.push_str("</w:styles>");
    xml
}
