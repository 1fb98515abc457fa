//! Color representation for terminal rendering.
//!
//! Colors are plain `[u8; 3]` RGB triples throughout the crate. [`Color`] adds
//! the notion of a transparent sample, and [`BackgroundColor`] is the validated,
//! caller supplied color that transparent samples are replaced with.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A resolved sample from a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// A fully transparent sample. It is drawn with the background color.
    Transparent,
    /// An opaque RGB color.
    Rgb([u8; 3]),
}

impl Color {
    /// Builds a color from a 16-bit RGBA sample.
    ///
    /// Alpha is treated as binary: only an alpha of exactly zero is transparent,
    /// every other alpha value is drawn fully opaque without any blending.
    pub fn from_rgba16([r, g, b, a]: [u16; 4]) -> Self {
        if a == 0 {
            return Color::Transparent;
        }
        Color::Rgb([(r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8])
    }

    /// Unwraps the color, returning the RGB value if it is an RGB color, otherwise the passed color.
    pub fn unwrap_or(self, other: [u8; 3]) -> [u8; 3] {
        match self {
            Color::Transparent => other,
            Color::Rgb(c) => c,
        }
    }
}

/// Formats an RGB triple as a lowercase `#rrggbb` literal.
pub fn format_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parses a `#rrggbb` literal into an RGB triple.
///
/// Exactly seven characters are accepted: a leading `#` followed by six hex
/// digits. Upper and lower case digits are both fine.
pub fn parse_hex(input: &str) -> Result<[u8; 3], ConfigError> {
    if input.len() != 7 {
        return Err(ConfigError::BackgroundLength {
            input: input.to_string(),
        });
    }
    let Some(digits) = input.strip_prefix('#') else {
        return Err(ConfigError::BackgroundPrefix {
            input: input.to_string(),
        });
    };
    // from_str_radix accepts a leading '+', so check the digits up front
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConfigError::BackgroundDigits {
            input: input.to_string(),
        });
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ConfigError::BackgroundDigits {
            input: input.to_string(),
        })
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// The color transparent pixels are replaced with, and the lower half of the
/// last cell row when the image has an odd height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BackgroundColor(pub [u8; 3]);

impl BackgroundColor {
    pub fn rgb(self) -> [u8; 3] {
        self.0
    }
}

impl FromStr for BackgroundColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(BackgroundColor)
    }
}

impl TryFrom<String> for BackgroundColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BackgroundColor> for String {
    fn from(color: BackgroundColor) -> Self {
        format_hex(color.0)
    }
}

impl From<[u8; 3]> for BackgroundColor {
    fn from(rgb: [u8; 3]) -> Self {
        BackgroundColor(rgb)
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hex(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#000000").unwrap(), [0, 0, 0]);
        assert_eq!(parse_hex("#ff8000").unwrap(), [255, 128, 0]);
        assert_eq!(parse_hex("#0A0b0C").unwrap(), [10, 11, 12]);
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert!(matches!(
            parse_hex("#zz0000"),
            Err(ConfigError::BackgroundDigits { .. })
        ));
        assert!(matches!(
            parse_hex("#fff"),
            Err(ConfigError::BackgroundLength { .. })
        ));
        assert!(matches!(
            parse_hex("ff00000"),
            Err(ConfigError::BackgroundPrefix { .. })
        ));
        assert!(matches!(
            parse_hex("#+f0000"),
            Err(ConfigError::BackgroundDigits { .. })
        ));
        // multi-byte characters must not cause a slicing panic
        assert!(parse_hex("#ééé").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex([255, 0, 0]), "#ff0000");
        assert_eq!(format_hex([1, 2, 3]), "#010203");
    }

    #[test]
    fn test_from_rgba16() {
        assert_eq!(Color::from_rgba16([0xffff, 0, 0, 0]), Color::Transparent);
        assert_eq!(
            Color::from_rgba16([0xffff, 0x80ff, 0x00ff, 1]),
            Color::Rgb([0xff, 0x80, 0x00])
        );
        assert_eq!(Color::Transparent.unwrap_or([1, 2, 3]), [1, 2, 3]);
        assert_eq!(Color::Rgb([4, 5, 6]).unwrap_or([1, 2, 3]), [4, 5, 6]);
    }

    #[test]
    fn test_background_color_display() {
        let bg: BackgroundColor = "#1E2030".parse().unwrap();
        assert_eq!(bg.rgb(), [0x1e, 0x20, 0x30]);
        assert_eq!(bg.to_string(), "#1e2030");
    }
}
