//! Strided pixel sampling with transparency filtering.
//!
//! The stride grows with resolution so that roughly `target_samples` pixels
//! are visited whatever the image size, keeping extraction cost constant.

use image::RgbaImage;

use crate::codec::Rgb;

pub const DEFAULT_TARGET_SAMPLES: u32 = 10_000;
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Sampling knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Approximate upper bound on visited pixels.
    pub target_samples: u32,
    /// Pixels with alpha strictly below this are skipped.
    pub alpha_threshold: u8,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            target_samples: DEFAULT_TARGET_SAMPLES,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

/// Pixel stride: `max(1, floor(width * height / target))`.
pub fn sample_rate(width: u32, height: u32, target: u32) -> usize {
    let area = width as u64 * height as u64;
    (area / target.max(1) as u64).max(1) as usize
}

/// Sample with the default configuration.
pub fn sample(image: &RgbaImage) -> Vec<Rgb> {
    sample_with(image, &SamplerConfig::default())
}

/// Visit every `sample_rate`-th pixel starting at the first one and keep
/// the opaque ones.
pub fn sample_with(image: &RgbaImage, config: &SamplerConfig) -> Vec<Rgb> {
    let (width, height) = image.dimensions();
    let rate = sample_rate(width, height, config.target_samples);

    let pixels: Vec<Rgb> = image
        .as_raw()
        .chunks_exact(4)
        .step_by(rate)
        .filter(|px| px[3] >= config.alpha_threshold)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect();

    log::debug!(
        "sampled {} opaque pixels from {width}x{height} (stride {rate})",
        pixels.len()
    );
    pixels
}
