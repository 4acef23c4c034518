//! Palette colors for burst particles.
//! Stored as 8-bit RGB, written in config files as CSS hex strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::rng::RandomSource;

/// Errors produced while parsing a hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex body was not exactly six digits.
    #[error("expected 6 hex digits, got {0:?}")]
    BadLength(String),

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// An opaque RGB color. Opacity is per-particle, not per-color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if body.len() != 6 {
            return Err(ColorError::BadLength(hex.to_string()));
        }
        // from_str_radix alone would let a leading '+' through.
        if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&body[i..i + 2], 16)
                .map_err(|_| ColorError::BadDigit(hex.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// CSS `#rrggbb` form, as canvas `fillStyle` expects.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels normalized to [0, 1] for GPU-style consumers.
    pub fn to_unit(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// The pinks of the original celebration.
pub const DEFAULT_PALETTE: [Color; 5] = [
    Color::rgb(0xff, 0x69, 0xb4),
    Color::rgb(0xff, 0x14, 0x93),
    Color::rgb(0xff, 0x85, 0xc1),
    Color::rgb(0xff, 0xc0, 0xcb),
    Color::rgb(0xff, 0x6b, 0x9d),
];

/// Pick uniformly from a non-empty palette.
pub fn pick(palette: &[Color], rng: &mut impl RandomSource) -> Color {
    palette[rng.next_index(palette.len())]
}
