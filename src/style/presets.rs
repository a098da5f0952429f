//! Named page sizes and font stacks.

use serde::{Deserialize, Serialize};

use crate::units::Measurement;

/// Paper size of every page in the section.
///
/// Serialized as the lowercase preset name, or `{"custom": {"width": .., "height": ..}}`
/// with twip dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    Letter,
    Legal,
    A4,
    A3,
    A5,
    Executive,
    Tabloid,
    Custom { width: i32, height: i32 },
}

impl PageSize {
    pub const PRESETS: [PageSize; 7] = [
        PageSize::Letter,
        PageSize::Legal,
        PageSize::A4,
        PageSize::A3,
        PageSize::A5,
        PageSize::Executive,
        PageSize::Tabloid,
    ];

    /// (width, height) in twips.
    pub fn twips(self) -> (i32, i32) {
        match self {
            PageSize::Letter => (12240, 15840),
            PageSize::Legal => (12240, 20160),
            PageSize::A4 => (11900, 16840),
            PageSize::A3 => (16840, 23820),
            PageSize::A5 => (8400, 11900),
            PageSize::Executive => (10440, 15120),
            PageSize::Tabloid => (15840, 24480),
            PageSize::Custom { width, height } => (width, height),
        }
    }

    pub fn width_twips(self) -> i32 {
        self.twips().0
    }

    pub fn height_twips(self) -> i32 {
        self.twips().1
    }

    /// Width and height as point measurements.
    pub fn dimensions(self) -> (Measurement, Measurement) {
        let (w, h) = self.twips();
        (
            Measurement::points(w as f64 / 20.0),
            Measurement::points(h as f64 / 20.0),
        )
    }

    /// Same paper rotated a quarter turn.
    pub fn landscape(self) -> Self {
        let (w, h) = self.twips();
        PageSize::Custom {
            width: h,
            height: w,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::Letter => "letter",
            PageSize::Legal => "legal",
            PageSize::A4 => "a4",
            PageSize::A3 => "a3",
            PageSize::A5 => "a5",
            PageSize::Executive => "executive",
            PageSize::Tabloid => "tabloid",
            PageSize::Custom { .. } => "custom",
        }
    }

    /// Look up a preset by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::PRESETS.into_iter().find(|p| p.name() == name)
    }
}

/// Font stacks that map to the platform's common faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemFont {
    System,
    SystemMono,
    Serif,
    SansSerif,
}

impl SystemFont {
    /// The face Word resolves first.
    pub fn primary(self) -> &'static str {
        match self {
            SystemFont::System => "Calibri",
            SystemFont::SystemMono => "Consolas",
            SystemFont::Serif => "Times New Roman",
            SystemFont::SansSerif => "Arial",
        }
    }

    /// Comma-separated fallback stack, primary face first.
    pub fn full_font_name(self) -> &'static str {
        match self {
            SystemFont::System => {
                "Calibri, -apple-system, BlinkMacSystemFont, Segoe UI, Roboto, Helvetica Neue, Arial, sans-serif"
            }
            SystemFont::SystemMono => "Consolas, SF Mono, Monaco, Menlo, Courier New, monospace",
            SystemFont::Serif => "Times New Roman, Georgia, serif",
            SystemFont::SansSerif => "Arial, Helvetica, sans-serif",
        }
    }
}
