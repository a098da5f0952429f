//! Styling configuration expressed in natural units.
//!
//! Mirrors [`StylingConfig`] field for field, but every length is a
//! [`Measurement`]. Call [`FriendlyStylingConfig::to_styling_config`] to lower
//! it before conversion; the native form is what the generator consumes.
//!
//! ```
//! use markdocx::style::{FriendlyStylingConfig, FriendlyPageMargins};
//! use markdocx::units::Measurement;
//!
//! let friendly = FriendlyStylingConfig {
//!     page_margins: FriendlyPageMargins::uniform(Measurement::centimeters(2.0)),
//!     ..Default::default()
//! };
//! let config = friendly.to_styling_config();
//! assert_eq!(config.page_margins.left, 1133);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::config::*;
use super::presets::{PageSize, SystemFont};
use crate::error::Result;
use crate::units::Measurement;

fn lower_opt(m: &Option<Measurement>) -> Option<i32> {
    m.as_ref().map(Measurement::to_twips)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyStylingConfig {
    pub page_size: FriendlyPageSize,
    pub page_margins: FriendlyPageMargins,
    pub default_font: FriendlyFontConfig,
    pub line_spacing: FriendlyLineSpacing,
    pub link_color: String,
    pub link_style: LinkStyle,
    pub headings: FriendlyHeadingStyles,
    pub paragraphs: FriendlyParagraphStyle,
    pub code_blocks: FriendlyCodeBlockStyle,
    pub blockquotes: FriendlyBlockquoteStyle,
    pub tables: FriendlyTableStyle,
    pub lists: FriendlyListStyle,
}

impl Default for FriendlyStylingConfig {
    fn default() -> Self {
        Self {
            page_size: FriendlyPageSize::default(),
            page_margins: FriendlyPageMargins::default(),
            default_font: FriendlyFontConfig::default(),
            line_spacing: FriendlyLineSpacing::default(),
            link_color: "0066cc".to_string(),
            link_style: LinkStyle::default(),
            headings: FriendlyHeadingStyles::default(),
            paragraphs: FriendlyParagraphStyle::default(),
            code_blocks: FriendlyCodeBlockStyle::default(),
            blockquotes: FriendlyBlockquoteStyle::default(),
            tables: FriendlyTableStyle::default(),
            lists: FriendlyListStyle::default(),
        }
    }
}

impl FriendlyStylingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Lower every measurement to Word's integer units.
    pub fn to_styling_config(&self) -> StylingConfig {
        StylingConfig {
            page_size: (&self.page_size).into(),
            page_margins: (&self.page_margins).into(),
            default_font: (&self.default_font).into(),
            line_spacing: (&self.line_spacing).into(),
            link_color: self.link_color.clone(),
            link_style: self.link_style,
            headings: (&self.headings).into(),
            paragraphs: (&self.paragraphs).into(),
            code_blocks: (&self.code_blocks).into(),
            blockquotes: (&self.blockquotes).into(),
            tables: (&self.tables).into(),
            lists: (&self.lists).into(),
        }
    }
}

impl From<&FriendlyStylingConfig> for StylingConfig {
    fn from(friendly: &FriendlyStylingConfig) -> Self {
        friendly.to_styling_config()
    }
}

/// Explicit page dimensions. Defaults to Letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FriendlyPageSize {
    pub width: Measurement,
    pub height: Measurement,
}

impl Default for FriendlyPageSize {
    fn default() -> Self {
        PageSize::Letter.into()
    }
}

impl From<PageSize> for FriendlyPageSize {
    fn from(size: PageSize) -> Self {
        let (width, height) = size.dimensions();
        Self { width, height }
    }
}

impl From<&FriendlyPageSize> for PageSize {
    /// Dimensions matching a preset lower to that preset.
    fn from(size: &FriendlyPageSize) -> Self {
        let twips = (size.width.to_twips(), size.height.to_twips());
        PageSize::PRESETS
            .into_iter()
            .find(|preset| preset.twips() == twips)
            .unwrap_or(PageSize::Custom {
                width: twips.0,
                height: twips.1,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyPageMargins {
    pub top: Measurement,
    pub right: Measurement,
    pub bottom: Measurement,
    pub left: Measurement,
    pub header: Measurement,
    pub footer: Measurement,
    pub gutter: Measurement,
}

impl Default for FriendlyPageMargins {
    fn default() -> Self {
        Self::uniform(Measurement::inches(1.0))
    }
}

impl FriendlyPageMargins {
    /// Same margin on all four sides, half-inch header/footer distance.
    pub fn uniform(margin: Measurement) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
            header: Measurement::inches(0.5),
            footer: Measurement::inches(0.5),
            gutter: Measurement::inches(0.0),
        }
    }
}

impl From<&FriendlyPageMargins> for PageMargins {
    fn from(m: &FriendlyPageMargins) -> Self {
        Self {
            top: m.top.to_twips(),
            right: m.right.to_twips(),
            bottom: m.bottom.to_twips(),
            left: m.left.to_twips(),
            header: m.header.to_twips(),
            footer: m.footer.to_twips(),
            gutter: m.gutter.to_twips(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyFontConfig {
    pub name: String,
    pub size: Measurement,
    pub color: String,
}

impl Default for FriendlyFontConfig {
    fn default() -> Self {
        Self::new("Calibri", Measurement::points(12.0), "000000")
    }
}

impl FriendlyFontConfig {
    pub fn new(name: impl Into<String>, size: Measurement, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            color: color.into(),
        }
    }

    /// Black text in a system font stack.
    pub fn system(font: SystemFont, size: Measurement) -> Self {
        Self::new(font.full_font_name(), size, "000000")
    }
}

impl From<&FriendlyFontConfig> for FontConfig {
    fn from(f: &FriendlyFontConfig) -> Self {
        FontConfig::new(f.name.clone(), f.size.to_half_points(), f.color.clone())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyLineSpacing {
    pub rule: LineSpacingRule,
    pub value: Option<Measurement>,
}

impl From<&FriendlyLineSpacing> for LineSpacing {
    fn from(l: &FriendlyLineSpacing) -> Self {
        LineSpacing {
            rule: l.rule,
            value: lower_opt(&l.value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlySpacing {
    pub before: Measurement,
    pub after: Measurement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Measurement>,
}

impl Default for FriendlySpacing {
    fn default() -> Self {
        Self::new(Measurement::points(0.0), Measurement::points(0.0))
    }
}

impl FriendlySpacing {
    pub fn new(before: Measurement, after: Measurement) -> Self {
        Self {
            before,
            after,
            line: None,
        }
    }
}

impl From<&FriendlySpacing> for Spacing {
    fn from(s: &FriendlySpacing) -> Self {
        Spacing {
            before: s.before.to_twips(),
            after: s.after.to_twips(),
            line: lower_opt(&s.line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyIndentation {
    pub left: Measurement,
    pub right: Measurement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line: Option<Measurement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hanging: Option<Measurement>,
}

impl Default for FriendlyIndentation {
    fn default() -> Self {
        Self::new(Measurement::inches(0.0), Measurement::inches(0.0))
    }
}

impl FriendlyIndentation {
    pub fn new(left: Measurement, right: Measurement) -> Self {
        Self {
            left,
            right,
            first_line: None,
            hanging: None,
        }
    }
}

impl From<&FriendlyIndentation> for Indentation {
    fn from(i: &FriendlyIndentation) -> Self {
        Indentation {
            left: i.left.to_twips(),
            right: i.right.to_twips(),
            first_line: lower_opt(&i.first_line),
            hanging: lower_opt(&i.hanging),
        }
    }
}

/// One border edge with its width as a measurement (2pt lowers to 4 eighths).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyBorderSide {
    pub width: Measurement,
    pub color: String,
    pub style: BorderStyle,
}

impl Default for FriendlyBorderSide {
    fn default() -> Self {
        Self::new(Measurement::points(2.0), "000000", BorderStyle::Single)
    }
}

impl FriendlyBorderSide {
    pub fn new(width: Measurement, color: impl Into<String>, style: BorderStyle) -> Self {
        Self {
            width,
            color: color.into(),
            style,
        }
    }
}

impl From<&FriendlyBorderSide> for BorderSide {
    fn from(b: &FriendlyBorderSide) -> Self {
        BorderSide::new(b.width.to_eighth_points(), b.color.clone(), b.style)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyBorder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<FriendlyBorderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<FriendlyBorderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<FriendlyBorderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<FriendlyBorderSide>,
}

impl From<&FriendlyBorder> for Border {
    fn from(b: &FriendlyBorder) -> Self {
        Border {
            top: b.top.as_ref().map(Into::into),
            right: b.right.as_ref().map(Into::into),
            bottom: b.bottom.as_ref().map(Into::into),
            left: b.left.as_ref().map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyHeadingStyle {
    pub font: FriendlyFontConfig,
    pub spacing: FriendlySpacing,
    pub indentation: FriendlyIndentation,
    pub border: FriendlyBorder,
    pub keep_with_next: bool,
    pub keep_lines: bool,
}

impl FriendlyHeadingStyle {
    /// 16pt for level 1, two points smaller per level, never under 8pt.
    pub fn for_level(level: u8) -> Self {
        let points = (16.0 - (f64::from(level.max(1)) - 1.0) * 2.0).max(8.0);
        Self {
            font: FriendlyFontConfig::new("Calibri", Measurement::points(points), "000000"),
            spacing: FriendlySpacing::default(),
            indentation: FriendlyIndentation::default(),
            border: FriendlyBorder::default(),
            keep_with_next: true,
            keep_lines: true,
        }
    }
}

impl Default for FriendlyHeadingStyle {
    fn default() -> Self {
        Self::for_level(1)
    }
}

impl From<&FriendlyHeadingStyle> for HeadingStyle {
    fn from(h: &FriendlyHeadingStyle) -> Self {
        HeadingStyle {
            font: (&h.font).into(),
            spacing: (&h.spacing).into(),
            indentation: (&h.indentation).into(),
            border: (&h.border).into(),
            keep_with_next: h.keep_with_next,
            keep_lines: h.keep_lines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyHeadingStyles {
    pub h1: FriendlyHeadingStyle,
    pub h2: FriendlyHeadingStyle,
    pub h3: FriendlyHeadingStyle,
    pub h4: FriendlyHeadingStyle,
    pub h5: FriendlyHeadingStyle,
    pub h6: FriendlyHeadingStyle,
}

impl Default for FriendlyHeadingStyles {
    fn default() -> Self {
        Self {
            h1: FriendlyHeadingStyle::for_level(1),
            h2: FriendlyHeadingStyle::for_level(2),
            h3: FriendlyHeadingStyle::for_level(3),
            h4: FriendlyHeadingStyle::for_level(4),
            h5: FriendlyHeadingStyle::for_level(5),
            h6: FriendlyHeadingStyle::for_level(6),
        }
    }
}

impl From<&FriendlyHeadingStyles> for HeadingStyles {
    fn from(h: &FriendlyHeadingStyles) -> Self {
        HeadingStyles {
            h1: (&h.h1).into(),
            h2: (&h.h2).into(),
            h3: (&h.h3).into(),
            h4: (&h.h4).into(),
            h5: (&h.h5).into(),
            h6: (&h.h6).into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FriendlyFontConfig>,
    pub alignment: Alignment,
    pub spacing: FriendlySpacing,
    pub indentation: FriendlyIndentation,
    pub border: FriendlyBorder,
}

impl From<&FriendlyParagraphStyle> for ParagraphStyle {
    fn from(p: &FriendlyParagraphStyle) -> Self {
        ParagraphStyle {
            font: p.font.as_ref().map(Into::into),
            alignment: p.alignment,
            spacing: (&p.spacing).into(),
            indentation: (&p.indentation).into(),
            border: (&p.border).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyCodeBlockStyle {
    pub font: FriendlyFontConfig,
    pub background: String,
    pub inline_background: String,
    pub spacing: FriendlySpacing,
    pub indentation: FriendlyIndentation,
    pub border: FriendlyBorder,
}

impl Default for FriendlyCodeBlockStyle {
    fn default() -> Self {
        Self {
            font: FriendlyFontConfig::new("Consolas", Measurement::points(10.0), "C7254E"),
            background: "F5F5F5".to_string(),
            inline_background: "F9F2F4".to_string(),
            spacing: FriendlySpacing::new(Measurement::points(6.0), Measurement::points(6.0)),
            indentation: FriendlyIndentation::new(Measurement::inches(0.5), Measurement::inches(0.5)),
            border: FriendlyBorder::default(),
        }
    }
}

impl From<&FriendlyCodeBlockStyle> for CodeBlockStyle {
    fn from(c: &FriendlyCodeBlockStyle) -> Self {
        CodeBlockStyle {
            font: (&c.font).into(),
            background: c.background.clone(),
            inline_background: c.inline_background.clone(),
            spacing: (&c.spacing).into(),
            indentation: (&c.indentation).into(),
            border: (&c.border).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyBlockquoteStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FriendlyFontConfig>,
    pub italic: bool,
    pub spacing: FriendlySpacing,
    pub indentation: FriendlyIndentation,
    pub border: FriendlyBorder,
}

impl Default for FriendlyBlockquoteStyle {
    fn default() -> Self {
        Self {
            font: None,
            italic: true,
            spacing: FriendlySpacing::new(Measurement::points(6.0), Measurement::points(6.0)),
            indentation: FriendlyIndentation::new(Measurement::inches(0.5), Measurement::inches(0.5)),
            border: FriendlyBorder {
                left: Some(FriendlyBorderSide::new(
                    Measurement::points(4.0),
                    "CCCCCC",
                    BorderStyle::Single,
                )),
                ..Default::default()
            },
        }
    }
}

impl From<&FriendlyBlockquoteStyle> for BlockquoteStyle {
    fn from(b: &FriendlyBlockquoteStyle) -> Self {
        BlockquoteStyle {
            font: b.font.as_ref().map(Into::into),
            italic: b.italic,
            spacing: (&b.spacing).into(),
            indentation: (&b.indentation).into(),
            border: (&b.border).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyTableStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FriendlyFontConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_font: Option<FriendlyFontConfig>,
    pub spacing: FriendlySpacing,
    pub indentation: FriendlyIndentation,
    pub border: FriendlyBorder,
    pub cell_padding: Measurement,
    pub column_width: Measurement,
}

impl Default for FriendlyTableStyle {
    fn default() -> Self {
        Self {
            font: None,
            header_font: None,
            spacing: FriendlySpacing::default(),
            indentation: FriendlyIndentation::default(),
            border: FriendlyBorder::default(),
            cell_padding: Measurement::points(6.0),
            column_width: Measurement::points(100.0),
        }
    }
}

impl From<&FriendlyTableStyle> for TableStyle {
    fn from(t: &FriendlyTableStyle) -> Self {
        TableStyle {
            font: t.font.as_ref().map(Into::into),
            header_font: t.header_font.as_ref().map(Into::into),
            spacing: (&t.spacing).into(),
            indentation: (&t.indentation).into(),
            border: (&t.border).into(),
            cell_padding: t.cell_padding.to_twips(),
            column_width: t.column_width.to_twips(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendlyListStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_font: Option<FriendlyFontConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbered_font: Option<FriendlyFontConfig>,
    pub spacing: FriendlySpacing,
    pub indentation: FriendlyIndentation,
    pub border: FriendlyBorder,
}

impl Default for FriendlyListStyle {
    fn default() -> Self {
        Self {
            bullet_font: None,
            numbered_font: None,
            spacing: FriendlySpacing::default(),
            indentation: FriendlyIndentation {
                hanging: Some(Measurement::inches(0.25)),
                ..FriendlyIndentation::new(Measurement::inches(0.5), Measurement::inches(0.0))
            },
            border: FriendlyBorder::default(),
        }
    }
}

impl From<&FriendlyListStyle> for ListStyle {
    fn from(l: &FriendlyListStyle) -> Self {
        ListStyle {
            bullet_font: l.bullet_font.as_ref().map(Into::into),
            numbered_font: l.numbered_font.as_ref().map(Into::into),
            spacing: (&l.spacing).into(),
            indentation: (&l.indentation).into(),
            border: (&l.border).into(),
        }
    }
}
