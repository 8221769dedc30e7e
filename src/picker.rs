//! Exact color lookup at a pixel coordinate.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::codec::Rgb;
use crate::error::{Result, SwatchError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedColor {
    pub rgb: Rgb,
    pub hex: String,
}

/// Read the unquantized color at `(x, y)`. Alpha is ignored.
///
/// Coordinates are signed so that pointer positions left of or above the
/// image are reported as out of bounds.
pub fn pick_color(image: &RgbaImage, x: i64, y: i64) -> Result<PickedColor> {
    let (width, height) = image.dimensions();
    let out_of_bounds = || SwatchError::OutOfBounds {
        x,
        y,
        width,
        height,
    };

    let px = u32::try_from(x).map_err(|_| out_of_bounds())?;
    let py = u32::try_from(y).map_err(|_| out_of_bounds())?;
    let [r, g, b, _] = image.get_pixel_checked(px, py).ok_or_else(out_of_bounds)?.0;

    let rgb = Rgb::new(r, g, b);
    Ok(PickedColor { rgb, hex: rgb.hex() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient() -> RgbaImage {
        RgbaImage::from_fn(4, 3, |x, y| Rgba([x as u8 * 50 + 1, y as u8 * 70 + 3, 7, 255]))
    }

    #[test]
    fn reads_exact_pixel() {
        let img = gradient();
        let picked = pick_color(&img, 0, 0).unwrap();
        assert_eq!(picked.rgb, Rgb::new(1, 3, 7));
        assert_eq!(picked.hex, "#010307");

        let picked = pick_color(&img, 3, 2).unwrap();
        assert_eq!(picked.rgb, Rgb::new(151, 143, 7));
    }

    #[test]
    fn ignores_alpha() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([9, 8, 7, 0]));
        assert_eq!(pick_color(&img, 0, 0).unwrap().rgb, Rgb::new(9, 8, 7));
    }

    #[test]
    fn rejects_outside_coordinates() {
        let img = gradient();
        for (x, y) in [(4, 0), (0, 3), (-1, 0), (0, -1), (i64::MAX, 0)] {
            assert!(
                matches!(pick_color(&img, x, y), Err(SwatchError::OutOfBounds { .. })),
                "({x}, {y})"
            );
        }
    }
}
