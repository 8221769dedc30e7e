//! Frequency-bucket palette extraction.
//!
//! Each sampled pixel is snapped to a coarse grid (channels rounded to the
//! nearest multiple of 10) and the most populated cells are reported. This is
//! a cheap heuristic, not a perceptual clustering.
//!
//! A bucket's reported color is the raw value of the *last* pixel that fell
//! into it, not an average. Ties in population keep the order in which the
//! buckets were first seen.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::codec::Rgb;
use crate::error::{Result, SwatchError};
use crate::sampler::{self, SamplerConfig};

pub const DEFAULT_TOP_N: usize = 8;

/// Width of a quantization cell along each channel.
const BUCKET_STEP: u16 = 10;
/// Quantized levels per channel: 0, 10, ..., 260 (255 rounds up to 260).
const LEVELS: usize = 27;

/// One ranked output color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub rgb: Rgb,
    pub hex: String,
    pub count: u32,
}

/// Extraction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Maximum number of palette entries.
    pub top_n: usize,
    pub sampler: SamplerConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            sampler: SamplerConfig::default(),
        }
    }
}

impl ExtractConfig {
    pub fn with_top_n(top_n: usize) -> Self {
        Self {
            top_n,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(SwatchError::InvalidParameters(
                "top_n must be at least 1".into(),
            ));
        }
        if self.sampler.target_samples == 0 {
            return Err(SwatchError::InvalidParameters(
                "target_samples must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Round a channel to the nearest multiple of 10, halves rounding up.
#[inline(always)]
fn quantize(c: u8) -> u16 {
    (c as u16 + BUCKET_STEP / 2) / BUCKET_STEP * BUCKET_STEP
}

/// Flattened index of a pixel's quantization cell.
#[inline(always)]
fn bucket_key(px: Rgb) -> usize {
    let level = |c: u8| (quantize(c) / BUCKET_STEP) as usize;
    (level(px.r) * LEVELS + level(px.g)) * LEVELS + level(px.b)
}

#[derive(Debug, Clone, Copy)]
struct Bucket {
    count: u32,
    representative: Rgb,
}

/// Array-backed bucket table. `slots` maps a cell to its position in
/// `buckets`, which is kept in first-seen order.
struct BucketTable {
    slots: Vec<Option<u32>>,
    buckets: Vec<Bucket>,
}

impl BucketTable {
    fn new() -> Self {
        Self {
            slots: vec![None; LEVELS * LEVELS * LEVELS],
            buckets: Vec::new(),
        }
    }

    fn insert(&mut self, px: Rgb) {
        let slot = &mut self.slots[bucket_key(px)];
        match *slot {
            Some(i) => {
                let bucket = &mut self.buckets[i as usize];
                bucket.count += 1;
                bucket.representative = px;
            }
            None => {
                *slot = Some(self.buckets.len() as u32);
                self.buckets.push(Bucket {
                    count: 1,
                    representative: px,
                });
            }
        }
    }

    /// Buckets by descending count; `sort_by` is stable so ties stay in
    /// first-seen order.
    fn into_ranked(mut self) -> Vec<Bucket> {
        self.buckets.sort_by(|a, b| b.count.cmp(&a.count));
        self.buckets
    }
}

/// Rank the quantization buckets of `pixels` and return up to `top_n`
/// entries, most populated first.
pub fn extract_palette(pixels: &[Rgb], top_n: usize) -> Vec<PaletteEntry> {
    if pixels.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let mut table = BucketTable::new();
    for &px in pixels {
        table.insert(px);
    }

    let distinct = table.buckets.len();
    let palette: Vec<PaletteEntry> = table
        .into_ranked()
        .into_iter()
        .take(top_n)
        .map(|bucket| PaletteEntry {
            rgb: bucket.representative,
            hex: bucket.representative.hex(),
            count: bucket.count,
        })
        .collect();

    log::debug!(
        "{} pixels fell into {distinct} buckets, kept {}",
        pixels.len(),
        palette.len()
    );
    palette
}

/// Sample `image` and extract its palette in one pass.
pub fn extract_from_image(image: &RgbaImage, config: &ExtractConfig) -> Result<Vec<PaletteEntry>> {
    config.validate()?;
    let pixels = sampler::sample_with(image, &config.sampler);
    Ok(extract_palette(&pixels, config.top_n))
}
