//! End-to-end extraction on synthesized rasters.

use image::{Rgba, RgbaImage};
use swatchkit::{
    ExtractConfig, Rgb, SwatchError, extract_from_image, extract_palette, pick_color, sample,
};

#[test]
fn transparent_image_has_empty_palette() {
    let img = RgbaImage::from_pixel(64, 48, Rgba([255, 255, 255, 0]));
    assert!(extract_palette(&sample(&img), 8).is_empty());
}

#[test]
fn single_color_image() {
    let mut img = RgbaImage::from_pixel(120, 120, Rgba([120, 80, 200, 255]));
    // A transparent border must not contribute.
    for x in 0..120 {
        img.put_pixel(x, 0, Rgba([0, 0, 0, 0]));
    }

    let pixels = sample(&img);
    let palette = extract_palette(&pixels, 8);
    assert_eq!(palette.len(), 1);
    assert_eq!(palette[0].rgb, Rgb::new(120, 80, 200));
    assert_eq!(palette[0].hex, "#7850c8");
    assert_eq!(palette[0].count as usize, pixels.len());
}

#[test]
fn red_blue_halves() {
    let img = RgbaImage::from_fn(100, 100, |_, y| {
        if y < 50 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });

    let pixels = sample(&img);
    assert_eq!(pixels.len(), 10_000);

    let palette = extract_palette(&pixels, 8);
    assert_eq!(palette.len(), 2);
    let mut hexes: Vec<&str> = palette.iter().map(|e| e.hex.as_str()).collect();
    hexes.sort();
    assert_eq!(hexes, ["#0000ff", "#ff0000"]);
    assert!(palette.iter().all(|e| e.count == 5_000));
    // Equal counts keep first-seen order; red fills the top rows.
    assert_eq!(palette[0].hex, "#ff0000");
}

#[test]
fn counts_never_increase() {
    let img = RgbaImage::from_fn(300, 200, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8, 255])
    });
    let palette = extract_from_image(&img, &ExtractConfig::with_top_n(32)).unwrap();
    assert_eq!(palette.len(), 32);
    assert!(palette.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn repeated_extraction_is_identical() {
    let img = RgbaImage::from_fn(97, 61, |x, y| Rgba([(x * 7) as u8, (y * 3) as u8, 90, 255]));
    let pixels = sample(&img);
    assert_eq!(extract_palette(&pixels, 8), extract_palette(&pixels, 8));
}

#[test]
fn picker_sees_unquantized_color() {
    let mut img = RgbaImage::from_pixel(10, 10, Rgba([100, 100, 100, 255]));
    img.put_pixel(0, 0, Rgba([103, 97, 101, 255]));

    let picked = pick_color(&img, 0, 0).unwrap();
    assert_eq!(picked.rgb, Rgb::new(103, 97, 101));

    // The palette reports the bucket's last raw pixel instead.
    let palette = extract_palette(&sample(&img), 8);
    assert_eq!(palette.len(), 1);
    assert_eq!(palette[0].rgb, Rgb::new(100, 100, 100));
}

#[test]
fn picker_rejects_width_coordinate() {
    let img = RgbaImage::from_pixel(10, 5, Rgba([1, 1, 1, 255]));
    assert!(matches!(
        pick_color(&img, 10, 0),
        Err(SwatchError::OutOfBounds {
            x: 10,
            y: 0,
            width: 10,
            height: 5
        })
    ));
}
