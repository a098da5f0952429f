//! Length units and their conversion to twips.
//!
//! WordprocessingML measures page geometry, spacing and indentation in twips
//! (1/20 of a point, 1/1440 inch). Font sizes are half-points and border
//! widths eighths of a point; both are derived from twips by dividing by ten.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Twips per inch, the base measuring unit in Word.
pub const TWIPS_PER_INCH: i32 = 1440;

/// A unit of length accepted by [`Measurement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Inch,
    Point,
    Centimeter,
    Millimeter,
    Twip,
}

impl Unit {
    /// Number of twips in one of this unit.
    pub fn twips_per_unit(self) -> f64 {
        match self {
            Unit::Inch => TWIPS_PER_INCH as f64,
            Unit::Point => 20.0,
            Unit::Centimeter => 566.93,
            Unit::Millimeter => 56.69,
            Unit::Twip => 1.0,
        }
    }

    /// Short suffix used in the textual form (`"1in"`, `"12pt"`).
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Inch => "in",
            Unit::Point => "pt",
            Unit::Centimeter => "cm",
            Unit::Millimeter => "mm",
            Unit::Twip => "tw",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Some(Unit::Inch),
            "pt" | "point" | "points" => Some(Unit::Point),
            "cm" | "centimeter" | "centimeters" => Some(Unit::Centimeter),
            "mm" | "millimeter" | "millimeters" => Some(Unit::Millimeter),
            "tw" | "twip" | "twips" | "dxa" => Some(Unit::Twip),
            _ => None,
        }
    }
}

/// Convert a value in the given unit to twips, truncating toward zero.
///
/// Negative and zero values pass through; magnitudes below one twip become 0.
///
/// ```
/// use markdocx::units::{to_twips, Unit};
///
/// assert_eq!(to_twips(1.0, Unit::Inch), 1440);
/// assert_eq!(to_twips(12.0, Unit::Point), 240);
/// assert_eq!(to_twips(1.0, Unit::Centimeter), 566);
/// ```
pub fn to_twips(value: f64, unit: Unit) -> i32 {
    (value * unit.twips_per_unit()) as i32
}

/// A length in a human unit, lowered to twips on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeasurementRepr")]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::Inch)
    }

    pub fn points(value: f64) -> Self {
        Self::new(value, Unit::Point)
    }

    pub fn centimeters(value: f64) -> Self {
        Self::new(value, Unit::Centimeter)
    }

    pub fn millimeters(value: f64) -> Self {
        Self::new(value, Unit::Millimeter)
    }

    pub fn twips(value: i32) -> Self {
        Self::new(value as f64, Unit::Twip)
    }

    /// The length in twips.
    pub fn to_twips(&self) -> i32 {
        to_twips(self.value, self.unit)
    }

    /// The length as a font size in half-points (twips / 10).
    pub fn to_half_points(&self) -> i32 {
        self.to_twips() / 10
    }

    /// The length as a border width in eighths of a point (twips / 10).
    pub fn to_eighth_points(&self) -> i32 {
        self.to_twips() / 10
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Measurement {
    type Err = Error;

    /// Parse the shorthand form, e.g. `"1in"`, `"12pt"`, `"2.5 cm"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| Error::Config(format!("missing unit in measurement '{}'", s)))?;
        let (number, suffix) = s.split_at(split);
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("invalid number in measurement '{}'", s)))?;
        let unit = Unit::from_suffix(suffix)
            .ok_or_else(|| Error::Config(format!("unknown unit '{}' in measurement", suffix)))?;
        Ok(Self::new(value, unit))
    }
}

/// Accepted JSON forms for a measurement.
#[derive(Deserialize)]
#[serde(untagged)]
enum MeasurementRepr {
    Full { value: f64, unit: Unit },
    Shorthand(String),
}

impl TryFrom<MeasurementRepr> for Measurement {
    type Error = String;

    fn try_from(repr: MeasurementRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            MeasurementRepr::Full { value, unit } => Ok(Measurement::new(value, unit)),
            MeasurementRepr::Shorthand(s) => s.parse().map_err(|e: Error| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, Unit::Inch, 1440)]
    #[case(12.0, Unit::Point, 240)]
    #[case(1.0, Unit::Centimeter, 566)]
    #[case(2.0, Unit::Centimeter, 1133)]
    #[case(1.0, Unit::Millimeter, 56)]
    #[case(25.4, Unit::Millimeter, 1439)]
    #[case(0.5, Unit::Inch, 720)]
    #[case(0.125, Unit::Inch, 180)]
    #[case(0.001, Unit::Inch, 1)]
    #[case(0.499, Unit::Point, 9)]
    #[case(0.501, Unit::Point, 10)]
    #[case(0.999, Unit::Point, 19)]
    #[case(0.1, Unit::Point, 2)]
    #[case(1440.0, Unit::Point, 28800)]
    #[case(720.0, Unit::Twip, 720)]
    fn test_to_twips(#[case] value: f64, #[case] unit: Unit, #[case] expected: i32) {
        assert_eq!(to_twips(value, unit), expected);
        assert_eq!(Measurement::new(value, unit).to_twips(), expected);
    }

    #[test]
    fn test_negative_and_zero_pass_through() {
        assert_eq!(Measurement::inches(-1.0).to_twips(), -1440);
        assert_eq!(Measurement::points(-12.0).to_twips(), -240);
        assert_eq!(Measurement::inches(0.0).to_twips(), 0);
        // truncation is toward zero, not floor
        assert_eq!(Measurement::points(-0.499).to_twips(), -9);
    }

    #[test]
    fn test_tiny_values_truncate_to_zero() {
        assert_eq!(Measurement::inches(0.0001).to_twips(), 0);
        assert_eq!(Measurement::points(0.01).to_twips(), 0);
        assert_eq!(Measurement::centimeters(0.001).to_twips(), 0);
        assert_eq!(Measurement::inches(0.000001).to_twips(), 0);
    }

    #[test]
    fn test_large_values() {
        assert_eq!(Measurement::inches(100.0).to_twips(), 144_000);
        assert_eq!(Measurement::inches(1_000_000.0).to_twips(), 1_440_000_000);
    }

    #[test]
    fn test_half_and_eighth_points() {
        assert_eq!(Measurement::points(12.0).to_half_points(), 24);
        assert_eq!(Measurement::points(12.5).to_half_points(), 25);
        assert_eq!(Measurement::points(0.1).to_half_points(), 0);
        assert_eq!(Measurement::points(1.0).to_eighth_points(), 2);
        assert_eq!(Measurement::points(0.25).to_eighth_points(), 0);
        assert_eq!(Measurement::points(10.0).to_eighth_points(), 20);
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!("1in".parse::<Measurement>().unwrap(), Measurement::inches(1.0));
        assert_eq!("12 pt".parse::<Measurement>().unwrap(), Measurement::points(12.0));
        assert_eq!("2.5cm".parse::<Measurement>().unwrap(), Measurement::centimeters(2.5));
        assert_eq!("-3mm".parse::<Measurement>().unwrap(), Measurement::millimeters(-3.0));
        assert_eq!("720tw".parse::<Measurement>().unwrap(), Measurement::twips(720));
        assert!("12".parse::<Measurement>().is_err());
        assert!("12furlongs".parse::<Measurement>().is_err());
    }

    #[test]
    fn test_deserialize_both_forms() {
        let full: Measurement = serde_json::from_str(r#"{"value": 0.5, "unit": "inch"}"#).unwrap();
        assert_eq!(full.to_twips(), 720);

        let short: Measurement = serde_json::from_str(r#""6pt""#).unwrap();
        assert_eq!(short.to_twips(), 120);

        assert!(serde_json::from_str::<Measurement>(r#""six points""#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Measurement::points(12.0).to_string(), "12pt");
        assert_eq!(Measurement::inches(0.5).to_string(), "0.5in");
    }
}
