//! Hex color strings
//!
//! Palettes store colors as the text the user typed or the picker produced.
//! `HexColor` is the parsed form used for drawing swatches and seeding the
//! picker; the stored text itself is never rewritten beyond uppercasing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while reading a hex color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Text is not `#RGB`, `#RRGGBB` or `#RRGGBBAA`
    #[error("'{0}' is not a hex color")]
    InvalidHex(String),
}

/// An sRGB color with straight (unmultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Default for HexColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl HexColor {
    /// Opaque white
    pub const WHITE: HexColor = HexColor::rgb(255, 255, 255);
    /// Opaque black
    pub const BLACK: HexColor = HexColor::rgb(0, 0, 0);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, case is ignored)
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(text.to_string());
        let digits = text.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.is_ascii() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                let short = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(invalid()),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Uppercase a color string as typed; no validation is applied
pub fn normalize_hex(text: &str) -> String {
    text.to_uppercase()
}
