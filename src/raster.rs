//! Building the `RgbaImage` raster the core reads from.

use image::RgbaImage;

use crate::error::{Result, SwatchError};

/// Wrap a raw, row-major RGBA8 buffer (e.g. canvas `ImageData.data`).
pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<RgbaImage> {
    let actual = rgba.len();
    let Some(expected) = (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(4))
    else {
        log::warn!("rejecting {width}x{height} raster: size overflows usize");
        return Err(SwatchError::BufferSize {
            expected: usize::MAX,
            actual,
        });
    };
    if actual != expected {
        log::warn!(
            "rejecting {width}x{height} raster: {actual} bytes, expected {expected}"
        );
        return Err(SwatchError::BufferSize { expected, actual });
    }
    RgbaImage::from_raw(width, height, rgba).ok_or(SwatchError::BufferSize { expected, actual })
}

/// Decode an encoded image (PNG, JPEG, ...) into RGBA8.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}
