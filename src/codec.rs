//! RGB / hex conversions and the luminance-based contrast heuristic.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// An sRGB color with 8-bit channels.
///
/// Serializes as `{"r": .., "g": .., "b": ..}`, the shape the branding
/// service and document renderer expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`.
    pub fn hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    pub fn luminance(self) -> f32 {
        luminance(self.r, self.g, self.b)
    }

    pub fn contrast_label(self) -> ContrastLabel {
        ContrastLabel::from_luminance(self.luminance())
    }
}

impl fmt::Display for Rgb {
    /// CSS functional notation, e.g. `rgb(120, 80, 200)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(c: Srgb<u8>) -> Self {
        Rgb::new(c.red, c.green, c.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(c: Rgb) -> Self {
        Srgb::new(c.r, c.g, c.b)
    }
}

/// `#` followed by six lowercase, zero-padded hex digits.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Uppercase variant of [`rgb_to_hex`], as shown by the picker magnifier.
pub fn rgb_to_hex_upper(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Parse `#rrggbb` (either case).
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let invalid = || SwatchError::InvalidFormat(hex.to_string());

    // Byte length check first so the slicing below stays on char boundaries.
    if hex.len() != 7 || !hex.is_ascii() {
        return Err(invalid());
    }
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Perceived brightness in `[0, 1]` using the Rec. 601 weights.
///
/// Not gamma-correct and not a WCAG contrast ratio.
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
}

/// Whether a background color reads as dark or light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastLabel {
    /// Dark background; put light (white) text on it.
    Dark,
    /// Light background; put dark (black) text on it.
    Light,
}

impl ContrastLabel {
    pub fn from_luminance(luminance: f32) -> Self {
        if luminance < 0.5 {
            ContrastLabel::Dark
        } else {
            ContrastLabel::Light
        }
    }

    /// Suggested foreground color for text drawn on this background.
    pub fn foreground(self) -> Rgb {
        match self {
            ContrastLabel::Dark => Rgb::WHITE,
            ContrastLabel::Light => Rgb::BLACK,
        }
    }
}

pub fn contrast_label(hex: &str) -> Result<ContrastLabel> {
    Ok(hex_to_rgb(hex)?.contrast_label())
}
