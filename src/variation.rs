//! Derived shades for a picked color: hue rotations, tints and shades.

use palette::{FromColor, Hsl, RgbHue, Srgb};

use crate::codec::Rgb;

/// Hue offsets (degrees) of the preview strip shown next to a picked color.
pub const PREVIEW_HUE_SHIFTS: [f32; 4] = [30.0, 60.0, 180.0, 210.0];

/// Rotate the hue of `rgb` by `degrees` in HSL space, keeping saturation
/// and lightness.
pub fn shift_hue(rgb: Rgb, degrees: f32) -> Rgb {
    if rgb.r == rgb.g && rgb.g == rgb.b {
        return rgb;
    }

    let srgb: Srgb<f32> = Srgb::<u8>::from(rgb).into_format();
    let mut hsl: Hsl = Hsl::from_color(srgb);
    hsl.hue = RgbHue::from_degrees(hsl.hue.into_positive_degrees() + degrees);

    let shifted: Srgb<f32> = Srgb::from_color(hsl);
    shifted.into_format::<u8>().into()
}

/// Mix towards white; `amount` 0 keeps the color, 1 gives white.
pub fn lighten(rgb: Rgb, amount: f32) -> Rgb {
    let t = amount.clamp(0.0, 1.0);
    map_channels(rgb, |c| c + (255.0 - c) * t)
}

/// Scale towards black; `amount` 0 keeps the color, 1 gives black.
pub fn darken(rgb: Rgb, amount: f32) -> Rgb {
    let t = amount.clamp(0.0, 1.0);
    map_channels(rgb, |c| c * (1.0 - t))
}

/// The picked color followed by its [`PREVIEW_HUE_SHIFTS`] rotations.
pub fn preview_swatches(rgb: Rgb) -> [Rgb; 5] {
    let [a, b, c, d] = PREVIEW_HUE_SHIFTS.map(|deg| shift_hue(rgb, deg));
    [rgb, a, b, c, d]
}

fn map_channels(rgb: Rgb, f: impl Fn(f32) -> f32) -> Rgb {
    let ch = |c: u8| f(c as f32).round().clamp(0.0, 255.0) as u8;
    Rgb::new(ch(rgb.r), ch(rgb.g), ch(rgb.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn rotates_primary_hues() {
        assert_eq!(shift_hue(RED, 120.0), Rgb::new(0, 255, 0));
        assert_eq!(shift_hue(RED, 180.0), Rgb::new(0, 255, 255));
        assert_eq!(shift_hue(RED, 240.0), Rgb::new(0, 0, 255));
        assert_eq!(shift_hue(RED, -120.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn grays_have_no_hue() {
        let gray = Rgb::new(90, 90, 90);
        assert_eq!(shift_hue(gray, 75.0), gray);
    }

    #[test]
    fn lighten_and_darken_bounds() {
        let c = Rgb::new(40, 120, 200);
        assert_eq!(lighten(c, 0.0), c);
        assert_eq!(lighten(c, 1.0), Rgb::WHITE);
        assert_eq!(lighten(c, 7.0), Rgb::WHITE);
        assert_eq!(darken(c, 0.0), c);
        assert_eq!(darken(c, 1.0), Rgb::BLACK);
        assert_eq!(darken(Rgb::new(200, 100, 50), 0.5), Rgb::new(100, 50, 25));
    }

    #[test]
    fn preview_strip_starts_with_original() {
        let strip = preview_swatches(RED);
        assert_eq!(strip[0], RED);
        assert_eq!(strip[3], Rgb::new(0, 255, 255));
    }
}
