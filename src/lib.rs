//! Dominant-color extraction for uploaded images.
//!
//! Pixels are sampled at a resolution-adaptive stride, snapped to a coarse
//! 10-step RGB grid and ranked by population. The crate compiles to
//! WebAssembly for in-browser use (see [`SwatchImage`]) and to a native
//! library/CLI.

use image::RgbaImage;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

pub mod codec;
pub mod error;
pub mod extract;
pub mod payload;
pub mod picker;
pub mod raster;
pub mod sampler;
pub mod variation;

pub use codec::{ContrastLabel, Rgb, contrast_label, hex_to_rgb, luminance, rgb_to_hex};
pub use error::{Result, SwatchError};
pub use extract::{DEFAULT_TOP_N, ExtractConfig, PaletteEntry, extract_from_image, extract_palette};
pub use payload::{BrandingRequest, PaletteColor};
pub use picker::{PickedColor, pick_color};
pub use sampler::{SamplerConfig, sample, sample_with};

/// Decode `input` and extract its palette.
pub fn extract_palette_bytes(input: &[u8], config: &ExtractConfig) -> Result<Vec<PaletteEntry>> {
    let img = raster::decode(input)?;
    extract_from_image(&img, config)
}

// ------------------------------------------------------------
// WebAssembly bindings
// ------------------------------------------------------------

fn js_err(err: SwatchError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn rgb_object(rgb: Rgb) -> std::result::Result<Object, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &JsValue::from_str("r"), &JsValue::from(rgb.r))?;
    Reflect::set(&obj, &JsValue::from_str("g"), &JsValue::from(rgb.g))?;
    Reflect::set(&obj, &JsValue::from_str("b"), &JsValue::from(rgb.b))?;
    Ok(obj)
}

/// `{hex, rgb: {r, g, b}}`, the shape the UI and branding request use.
fn color_object(hex: &str, rgb: Rgb) -> std::result::Result<Object, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &JsValue::from_str("hex"), &JsValue::from_str(hex))?;
    let channels = rgb_object(rgb)?;
    Reflect::set(&obj, &JsValue::from_str("rgb"), &channels)?;
    Ok(obj)
}

/// A decoded image held on the Rust side so that repeated palette and
/// pick calls do not copy the pixel buffer across the boundary.
#[wasm_bindgen]
pub struct SwatchImage {
    raster: RgbaImage,
}

#[wasm_bindgen]
impl SwatchImage {
    /// Wrap canvas `ImageData` (row-major RGBA8).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> std::result::Result<SwatchImage, JsValue> {
        let raster = raster::from_rgba(width, height, rgba).map_err(js_err)?;
        Ok(SwatchImage { raster })
    }

    /// Decode an encoded image file (PNG, JPEG, ...).
    pub fn decode(bytes: Vec<u8>) -> std::result::Result<SwatchImage, JsValue> {
        let raster = raster::decode(&bytes).map_err(js_err)?;
        Ok(SwatchImage { raster })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Ranked `{hex, rgb, count}` objects, at most `top_n` (default 8).
    pub fn palette(&self, top_n: Option<u32>) -> std::result::Result<Array, JsValue> {
        let config = ExtractConfig::with_top_n(top_n.map_or(DEFAULT_TOP_N, |n| n as usize));
        let entries = extract_from_image(&self.raster, &config).map_err(js_err)?;

        let out = Array::new();
        for entry in &entries {
            let obj = color_object(&entry.hex, entry.rgb)?;
            Reflect::set(&obj, &JsValue::from_str("count"), &JsValue::from(entry.count))?;
            out.push(&obj);
        }
        Ok(out)
    }

    /// Exact `{hex, rgb}` at a pixel coordinate.
    pub fn pick(&self, x: i32, y: i32) -> std::result::Result<Object, JsValue> {
        let picked = pick_color(&self.raster, x as i64, y as i64).map_err(js_err)?;
        color_object(&picked.hex, picked.rgb)
    }
}

/// `"#000000"` or `"#ffffff"`, whichever reads better on `hex`.
#[wasm_bindgen]
pub fn contrast_foreground(hex: &str) -> std::result::Result<String, JsValue> {
    let label = contrast_label(hex).map_err(js_err)?;
    Ok(label.foreground().hex())
}

/// Hex strings of the picked color and its hue-rotated preview shades.
#[wasm_bindgen]
pub fn preview_swatches(hex: &str) -> std::result::Result<Array, JsValue> {
    let rgb = hex_to_rgb(hex).map_err(js_err)?;
    let out = Array::new();
    for shade in variation::preview_swatches(rgb) {
        out.push(&JsValue::from_str(&shade.hex()));
    }
    Ok(out)
}
