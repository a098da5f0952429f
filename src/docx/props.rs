//! Run and paragraph property builders.
//!
//! Both builders emit their children in the order the WordprocessingML
//! schema requires, so callers can set fields in any order.

use std::fmt::Write;

use super::xml::escape_xml;
use crate::style::{Border, BorderSide, FontConfig, Indentation, LineSpacing, Spacing};

/// Properties of a run (`w:rPr`).
#[derive(Debug, Clone, Default)]
pub(crate) struct RunProperties {
    pub style: Option<String>,
    pub font: Option<String>,
    pub bold: bool,
    pub italic: bool,
    /// Also emit the complex-script toggles `w:bCs`/`w:iCs`.
    pub complex_script: bool,
    pub strike: bool,
    pub color: Option<String>,
    pub kern: Option<i32>,
    pub size: Option<i32>,
    pub underline: bool,
    pub shading: Option<String>,
    pub lang: Option<String>,
}

impl RunProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Face, size and color from a font configuration.
    pub fn from_font(font: &FontConfig) -> Self {
        Self {
            font: Some(font.name.clone()),
            color: Some(font.color.clone()),
            size: Some(font.size),
            ..Default::default()
        }
    }

    /// Render as `<w:rPr>..</w:rPr>`, or an empty string when nothing is set.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        if let Some(style) = &self.style {
            let _ = write!(xml, r#"<w:rStyle w:val="{}"/>"#, escape_xml(style));
        }
        if let Some(font) = &self.font {
            let font = escape_xml(font);
            let _ = write!(
                xml,
                r#"<w:rFonts w:ascii="{font}" w:eastAsia="{font}" w:hAnsi="{font}" w:cs="{font}"/>"#
            );
        }
        if self.bold {
            xml.push_str("<w:b/>");
            if self.complex_script {
                xml.push_str("<w:bCs/>");
            }
        }
        if self.italic {
            xml.push_str("<w:i/>");
            if self.complex_script {
                xml.push_str("<w:iCs/>");
            }
        }
        if self.strike {
            xml.push_str("<w:strike/>");
        }
        if let Some(color) = &self.color {
            let _ = write!(xml, r#"<w:color w:val="{}"/>"#, escape_xml(color));
        }
        if let Some(kern) = self.kern {
            let _ = write!(xml, r#"<w:kern w:val="{kern}"/>"#);
        }
        if let Some(size) = self.size {
            let _ = write!(xml, r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#);
        }
        if self.underline {
            xml.push_str(r#"<w:u w:val="single"/>"#);
        }
        if let Some(fill) = &self.shading {
            let _ = write!(
                xml,
                r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                escape_xml(fill)
            );
        }
        if let Some(lang) = &self.lang {
            let _ = write!(xml, r#"<w:lang w:val="{}"/>"#, escape_xml(lang));
        }

        if xml.is_empty() {
            xml
        } else {
            format!("<w:rPr>{xml}</w:rPr>")
        }
    }
}

/// Properties of a paragraph (`w:pPr`).
///
/// Spacing, indentation and borders are pre-rendered fragments from the
/// helpers below.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParagraphProperties {
    pub style: Option<String>,
    pub keep_next: bool,
    pub keep_lines: bool,
    pub num_id: Option<u32>,
    pub borders: String,
    pub shading: Option<String>,
    pub spacing: String,
    pub indentation: String,
    pub alignment: Option<&'static str>,
    pub outline_level: Option<u8>,
}

impl ParagraphProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styled(style: impl Into<String>) -> Self {
        Self {
            style: Some(style.into()),
            ..Default::default()
        }
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        if let Some(style) = &self.style {
            let _ = write!(xml, r#"<w:pStyle w:val="{}"/>"#, escape_xml(style));
        }
        if self.keep_next {
            xml.push_str("<w:keepNext/>");
        }
        if self.keep_lines {
            xml.push_str("<w:keepLines/>");
        }
        if let Some(num_id) = self.num_id {
            let _ = write!(
                xml,
                r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="{num_id}"/></w:numPr>"#
            );
        }
        xml.push_str(&self.borders);
        if let Some(fill) = &self.shading {
            let _ = write!(
                xml,
                r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                escape_xml(fill)
            );
        }
        xml.push_str(&self.spacing);
        xml.push_str(&self.indentation);
        if let Some(jc) = self.alignment {
            let _ = write!(xml, r#"<w:jc w:val="{jc}"/>"#);
        }
        if let Some(level) = self.outline_level {
            let _ = write!(xml, r#"<w:outlineLvl w:val="{level}"/>"#);
        }

        if xml.is_empty() {
            xml
        } else {
            format!("<w:pPr>{xml}</w:pPr>")
        }
    }
}

/// `w:spacing` for a style, merging body line spacing when the style has
/// no exact line height of its own.
///
/// Before/after are only written when positive.
pub(crate) fn spacing_xml(spacing: &Spacing, line_spacing: Option<&LineSpacing>) -> String {
    let mut attrs = String::new();
    if spacing.before > 0 {
        let _ = write!(attrs, r#" w:before="{}""#, spacing.before);
    }
    if spacing.after > 0 {
        let _ = write!(attrs, r#" w:after="{}""#, spacing.after);
    }
    if let Some(line) = spacing.line {
        let _ = write!(attrs, r#" w:line="{line}" w:lineRule="exactly""#);
    } else if let Some(line_spacing) = line_spacing {
        if let (Some(rule), Some(value)) = (line_spacing.rule.line_rule(), line_spacing.value) {
            let _ = write!(attrs, r#" w:line="{value}" w:lineRule="{rule}""#);
        }
    }

    if attrs.is_empty() {
        attrs
    } else {
        format!("<w:spacing{attrs}/>")
    }
}

/// `w:ind`, with zero left/right omitted.
pub(crate) fn indentation_xml(indentation: &Indentation) -> String {
    let mut attrs = String::new();
    if indentation.left != 0 {
        let _ = write!(attrs, r#" w:left="{}""#, indentation.left);
    }
    if indentation.right != 0 {
        let _ = write!(attrs, r#" w:right="{}""#, indentation.right);
    }
    if let Some(first_line) = indentation.first_line {
        let _ = write!(attrs, r#" w:firstLine="{first_line}""#);
    }
    if let Some(hanging) = indentation.hanging {
        let _ = write!(attrs, r#" w:hanging="{hanging}""#);
    }

    if attrs.is_empty() {
        attrs
    } else {
        format!("<w:ind{attrs}/>")
    }
}

fn border_side_xml(name: &str, side: &BorderSide, space: bool) -> String {
    let space = if space { r#" w:space="1""# } else { "" };
    format!(
        r#"<w:{name} w:val="{}" w:sz="{}"{space} w:color="{}"/>"#,
        side.style.as_str(),
        side.width,
        escape_xml(&side.color)
    )
}

/// Paragraph borders (`w:pBdr`), edges in schema order.
pub(crate) fn border_xml(border: &Border) -> String {
    if border.is_empty() {
        return String::new();
    }
    let mut xml = String::from("<w:pBdr>");
    for (name, side) in [
        ("top", &border.top),
        ("left", &border.left),
        ("bottom", &border.bottom),
        ("right", &border.right),
    ] {
        if let Some(side) = side {
            xml.push_str(&border_side_xml(name, side, true));
        }
    }
    xml.push_str("</w:pBdr>");
    xml
}

/// Table borders (`w:tblBorders`). Inside rules reuse the top and left edges.
pub(crate) fn table_border_xml(border: &Border) -> String {
    if border.is_empty() {
        return String::new();
    }
    let mut xml = String::from("<w:tblBorders>");
    for (name, side) in [
        ("top", &border.top),
        ("left", &border.left),
        ("bottom", &border.bottom),
        ("right", &border.right),
        ("insideH", &border.top),
        ("insideV", &border.left),
    ] {
        if let Some(side) = side {
            xml.push_str(&border_side_xml(name, side, false));
        }
    }
    xml.push_str("</w:tblBorders>");
    xml
}
