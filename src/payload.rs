//! Request body for the branding service.
//!
//! Only the wire shape and the service's acceptance rules live here; the HTTP
//! call and the prompt it builds are handled elsewhere.

use serde::{Deserialize, Serialize};

use crate::codec::{Rgb, hex_to_rgb};
use crate::error::{Result, SwatchError};
use crate::extract::PaletteEntry;
use crate::picker::PickedColor;

/// A palette color as the service expects it: `{"hex": .., "rgb": {r, g, b}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub hex: String,
    pub rgb: Rgb,
}

impl From<&PaletteEntry> for PaletteColor {
    fn from(entry: &PaletteEntry) -> Self {
        Self {
            hex: entry.hex.clone(),
            rgb: entry.rgb,
        }
    }
}

impl From<&PickedColor> for PaletteColor {
    fn from(picked: &PickedColor) -> Self {
        Self {
            hex: picked.hex.clone(),
            rgb: picked.rgb,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingRequest {
    pub colors: Vec<PaletteColor>,
    pub company_type: String,
    pub brand_vibe: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

impl BrandingRequest {
    pub fn new(
        palette: &[PaletteEntry],
        company_type: impl Into<String>,
        brand_vibe: impl Into<String>,
    ) -> Self {
        Self {
            colors: palette.iter().map(PaletteColor::from).collect(),
            company_type: company_type.into(),
            brand_vibe: brand_vibe.into(),
            company_name: None,
            additional_notes: None,
        }
    }

    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    pub fn additional_notes(mut self, notes: impl Into<String>) -> Self {
        self.additional_notes = Some(notes.into());
        self
    }

    /// Apply the rules the service uses to reject a request before
    /// prompting the model.
    pub fn validate(&self) -> Result<()> {
        if self.colors.is_empty() {
            return Err(SwatchError::InvalidParameters(
                "at least one color is required".into(),
            ));
        }
        if self.company_type.trim().is_empty() {
            return Err(SwatchError::InvalidParameters("companyType is required".into()));
        }
        if self.brand_vibe.trim().is_empty() {
            return Err(SwatchError::InvalidParameters("brandVibe is required".into()));
        }
        for color in &self.colors {
            if hex_to_rgb(&color.hex)? != color.rgb {
                return Err(SwatchError::InvalidParameters(format!(
                    "{} does not match {}",
                    color.hex, color.rgb
                )));
            }
        }
        Ok(())
    }

    /// One `Color {i}: HEX: .., RGB: r,g,b` line per color, 1-based.
    pub fn color_summary(&self) -> String {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    "Color {}: HEX: {}, RGB: {},{},{}",
                    i + 1,
                    c.hex,
                    c.rgb.r,
                    c.rgb.g,
                    c.rgb.b
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
