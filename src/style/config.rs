//! Native styling configuration, in Word's integer units.
//!
//! Every type here is fully defaulted and deserializes with `#[serde(default)]`,
//! so a partial JSON document overrides only the fields it names. Lengths are
//! twips, font sizes half-points, border widths eighths of a point and colors
//! six-digit hex without a leading `#`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::presets::PageSize;
use crate::error::Result;

/// Complete styling for one conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    pub page_size: PageSize,
    pub page_margins: PageMargins,
    pub default_font: FontConfig,
    pub line_spacing: LineSpacing,
    pub link_color: String,
    pub link_style: LinkStyle,
    pub headings: HeadingStyles,
    pub paragraphs: ParagraphStyle,
    pub code_blocks: CodeBlockStyle,
    pub blockquotes: BlockquoteStyle,
    pub tables: TableStyle,
    pub lists: ListStyle,
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            page_margins: PageMargins::default(),
            default_font: FontConfig::default(),
            line_spacing: LineSpacing::default(),
            link_color: "0066cc".to_string(),
            link_style: LinkStyle::default(),
            headings: HeadingStyles::default(),
            paragraphs: ParagraphStyle::default(),
            code_blocks: CodeBlockStyle::default(),
            blockquotes: BlockquoteStyle::default(),
            tables: TableStyle::default(),
            lists: ListStyle::default(),
        }
    }
}

impl StylingConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a (possibly partial) JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the full configuration as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the page margins.
    pub fn with_page_margins(mut self, margins: PageMargins) -> Self {
        self.page_margins = margins;
        self
    }

    /// Set the document-wide run font.
    pub fn with_default_font(mut self, font: FontConfig) -> Self {
        self.default_font = font;
        self
    }

    /// Set line spacing for body paragraphs.
    pub fn with_line_spacing(mut self, line_spacing: LineSpacing) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// Set the link text color.
    pub fn with_link_color(mut self, color: impl Into<String>) -> Self {
        self.link_color = color.into();
        self
    }

    /// Set how links are rendered.
    pub fn with_link_style(mut self, link_style: LinkStyle) -> Self {
        self.link_style = link_style;
        self
    }

    pub fn with_headings(mut self, headings: HeadingStyles) -> Self {
        self.headings = headings;
        self
    }

    pub fn with_paragraphs(mut self, paragraphs: ParagraphStyle) -> Self {
        self.paragraphs = paragraphs;
        self
    }

    pub fn with_code_blocks(mut self, code_blocks: CodeBlockStyle) -> Self {
        self.code_blocks = code_blocks;
        self
    }

    pub fn with_blockquotes(mut self, blockquotes: BlockquoteStyle) -> Self {
        self.blockquotes = blockquotes;
        self
    }

    pub fn with_tables(mut self, tables: TableStyle) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_lists(mut self, lists: ListStyle) -> Self {
        self.lists = lists;
        self
    }
}

/// How a run carrying a link is rendered. Exactly one policy applies per conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkStyle {
    /// Link color only; visible text unchanged.
    #[default]
    Colored,
    /// Link color and underline, with the URL appended in parentheses.
    InlineUrl,
    /// A real hyperlink backed by an external relationship.
    Hyperlink,
}

/// Section margins in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMargins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
    pub header: i32,
    pub footer: i32,
    pub gutter: i32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top: 1440,
            right: 1440,
            bottom: 1440,
            left: 1440,
            header: 720,
            footer: 720,
            gutter: 0,
        }
    }
}

impl PageMargins {
    /// Same margin on all four sides, default header/footer distance.
    pub fn uniform(twips: i32) -> Self {
        Self {
            top: twips,
            right: twips,
            bottom: twips,
            left: twips,
            ..Default::default()
        }
    }
}

/// Font face, size (half-points) and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub name: String,
    pub size: i32,
    pub color: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 24,
            color: "000000".to_string(),
        }
    }
}

impl FontConfig {
    pub fn new(name: impl Into<String>, size: i32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineSpacingRule {
    #[default]
    Auto,
    AtLeast,
    Exactly,
    Multiple,
}

impl LineSpacingRule {
    /// The `w:lineRule` value, or `None` when no line spacing is emitted.
    pub fn line_rule(self) -> Option<&'static str> {
        match self {
            LineSpacingRule::Auto => None,
            LineSpacingRule::AtLeast => Some("atLeast"),
            LineSpacingRule::Exactly => Some("exactly"),
            LineSpacingRule::Multiple => Some("auto"),
        }
    }
}

/// Body line spacing. `value` is twips for `atLeast`/`exactly` and
/// 240ths of a line for `multiple`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSpacing {
    pub rule: LineSpacingRule,
    pub value: Option<i32>,
}

impl LineSpacing {
    pub fn auto() -> Self {
        Self::default()
    }

    pub fn at_least(twips: i32) -> Self {
        Self {
            rule: LineSpacingRule::AtLeast,
            value: Some(twips),
        }
    }

    pub fn exactly(twips: i32) -> Self {
        Self {
            rule: LineSpacingRule::Exactly,
            value: Some(twips),
        }
    }

    /// `240` is single spacing, `360` one and a half.
    pub fn multiple(value: i32) -> Self {
        Self {
            rule: LineSpacingRule::Multiple,
            value: Some(value),
        }
    }
}

/// Space before/after a paragraph and an optional exact line height, in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub before: i32,
    pub after: i32,
    pub line: Option<i32>,
}

impl Spacing {
    pub fn new(before: i32, after: i32) -> Self {
        Self {
            before,
            after,
            line: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indentation {
    pub left: i32,
    pub right: i32,
    pub first_line: Option<i32>,
    pub hanging: Option<i32>,
}

impl Indentation {
    pub fn new(left: i32, right: i32) -> Self {
        Self {
            left,
            right,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

/// One border edge; `width` is in eighths of a point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSide {
    pub width: i32,
    pub color: String,
    pub style: BorderStyle,
}

impl Default for BorderSide {
    fn default() -> Self {
        Self {
            width: 4,
            color: "000000".to_string(),
            style: BorderStyle::Single,
        }
    }
}

impl BorderSide {
    pub fn new(width: i32, color: impl Into<String>, style: BorderStyle) -> Self {
        Self {
            width,
            color: color.into(),
            style,
        }
    }
}

/// Up to four border edges. An absent edge is not drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderSide>,
}

impl Border {
    pub fn none() -> Self {
        Self::default()
    }

    /// The same edge on all four sides.
    pub fn all(side: BorderSide) -> Self {
        Self {
            top: Some(side.clone()),
            right: Some(side.clone()),
            bottom: Some(side.clone()),
            left: Some(side),
        }
    }

    pub fn left_only(side: BorderSide) -> Self {
        Self {
            left: Some(side),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// The `w:jc` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingStyle {
    pub font: FontConfig,
    pub spacing: Spacing,
    pub indentation: Indentation,
    pub border: Border,
    pub keep_with_next: bool,
    pub keep_lines: bool,
}

impl HeadingStyle {
    /// Default style for a heading level: 16pt for level 1, shrinking by 2pt
    /// per level down to 8pt.
    pub fn for_level(level: u8) -> Self {
        let size = (32 - (i32::from(level.max(1)) - 1) * 4).max(16);
        Self {
            font: FontConfig::new("Calibri", size, "000000"),
            spacing: Spacing::default(),
            indentation: Indentation::default(),
            border: Border::none(),
            keep_with_next: true,
            keep_lines: true,
        }
    }
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self::for_level(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingStyles {
    pub h1: HeadingStyle,
    pub h2: HeadingStyle,
    pub h3: HeadingStyle,
    pub h4: HeadingStyle,
    pub h5: HeadingStyle,
    pub h6: HeadingStyle,
}

impl Default for HeadingStyles {
    fn default() -> Self {
        Self {
            h1: HeadingStyle::for_level(1),
            h2: HeadingStyle::for_level(2),
            h3: HeadingStyle::for_level(3),
            h4: HeadingStyle::for_level(4),
            h5: HeadingStyle::for_level(5),
            h6: HeadingStyle::for_level(6),
        }
    }
}

impl HeadingStyles {
    /// Style for a heading level. Levels outside 1-6 use the level 1 style.
    pub fn style_for(&self, level: u8) -> &HeadingStyle {
        match level {
            2 => &self.h2,
            3 => &self.h3,
            4 => &self.h4,
            5 => &self.h5,
            6 => &self.h6,
            _ => &self.h1,
        }
    }

    pub fn style_for_mut(&mut self, level: u8) -> &mut HeadingStyle {
        match level {
            2 => &mut self.h2,
            3 => &mut self.h3,
            4 => &mut self.h4,
            5 => &mut self.h5,
            6 => &mut self.h6,
            _ => &mut self.h1,
        }
    }
}

/// Style of the `Normal` paragraph. `font: None` inherits the default font.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontConfig>,
    pub alignment: Alignment,
    pub spacing: Spacing,
    pub indentation: Indentation,
    pub border: Border,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeBlockStyle {
    pub font: FontConfig,
    /// Shading behind code blocks.
    pub background: String,
    /// Shading behind inline code spans.
    pub inline_background: String,
    pub spacing: Spacing,
    pub indentation: Indentation,
    pub border: Border,
}

impl Default for CodeBlockStyle {
    fn default() -> Self {
        Self {
            font: FontConfig::new("Consolas", 20, "C7254E"),
            background: "F5F5F5".to_string(),
            inline_background: "F9F2F4".to_string(),
            spacing: Spacing::new(120, 120),
            indentation: Indentation::new(720, 720),
            border: Border::none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockquoteStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontConfig>,
    pub italic: bool,
    pub spacing: Spacing,
    pub indentation: Indentation,
    pub border: Border,
}

impl Default for BlockquoteStyle {
    fn default() -> Self {
        Self {
            font: None,
            italic: true,
            spacing: Spacing::new(120, 120),
            indentation: Indentation::new(720, 720),
            border: Border::left_only(BorderSide::new(8, "CCCCCC", BorderStyle::Single)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Run font for body cells; `None` inherits the default font.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontConfig>,
    /// Run font for the first row; `None` leaves it like the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_font: Option<FontConfig>,
    pub spacing: Spacing,
    pub indentation: Indentation,
    pub border: Border,
    /// Left and right cell margin.
    pub cell_padding: i32,
    pub column_width: i32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font: None,
            header_font: None,
            spacing: Spacing::default(),
            indentation: Indentation::default(),
            border: Border::none(),
            cell_padding: 120,
            column_width: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_font: Option<FontConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbered_font: Option<FontConfig>,
    pub spacing: Spacing,
    pub indentation: Indentation,
    pub border: Border,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            bullet_font: None,
            numbered_font: None,
            spacing: Spacing::default(),
            indentation: Indentation {
                left: 720,
                right: 0,
                first_line: None,
                hanging: Some(360),
            },
            border: Border::none(),
        }
    }
}
