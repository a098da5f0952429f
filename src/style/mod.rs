//! Styling configuration: page geometry, fonts, spacing, borders and
//! per-element styles.

mod config;
mod friendly;
mod presets;

pub use config::{
    Alignment, BlockquoteStyle, Border, BorderSide, BorderStyle, CodeBlockStyle, FontConfig,
    HeadingStyle, HeadingStyles, Indentation, LineSpacing, LineSpacingRule, LinkStyle, ListStyle,
    PageMargins, ParagraphStyle, Spacing, StylingConfig, TableStyle,
};
pub use friendly::{
    FriendlyBlockquoteStyle, FriendlyBorder, FriendlyBorderSide, FriendlyCodeBlockStyle,
    FriendlyFontConfig, FriendlyHeadingStyle, FriendlyHeadingStyles, FriendlyIndentation,
    FriendlyLineSpacing, FriendlyListStyle, FriendlyPageMargins, FriendlyPageSize,
    FriendlyParagraphStyle, FriendlySpacing, FriendlyStylingConfig, FriendlyTableStyle,
};
pub use presets::{PageSize, SystemFont};
