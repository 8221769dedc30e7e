//! Error types for swatchkit.

use thiserror::Error;

/// Errors raised by the color codec, the point picker and the raster/request
/// boundaries.
///
/// Sparse or empty color distributions are never errors; extraction returns
/// a short or empty palette instead.
#[derive(Debug, Error)]
pub enum SwatchError {
    /// Hex string is not `#` followed by six hex digits.
    #[error("invalid hex color: {0:?}")]
    InvalidFormat(String),

    /// Pixel coordinate outside the image.
    #[error("pixel ({x}, {y}) is outside a {width}x{height} image")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// Configuration or request field rejected.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Raw RGBA buffer length does not match `width * height * 4`.
    #[error("buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// Encoded image bytes could not be decoded.
    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Result type for swatchkit operations.
pub type Result<T> = std::result::Result<T, SwatchError>;
