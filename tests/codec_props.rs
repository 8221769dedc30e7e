use proptest::prelude::*;
use swatchkit::{Rgb, SwatchError, extract_palette, hex_to_rgb, rgb_to_hex};

fn any_rgb() -> impl Strategy<Value = Rgb> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn hex_round_trips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)).unwrap(), Rgb::new(r, g, b));
    }

    #[test]
    fn hex_has_fixed_shape(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = rgb_to_hex(r, g, b);
        prop_assert_eq!(hex.len(), 7);
        prop_assert!(hex.starts_with('#'));
        prop_assert!(hex[1..].bytes().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn palette_is_ranked_and_deterministic(
        pixels in prop::collection::vec(any_rgb(), 0..400),
        top_n in 1usize..16,
    ) {
        let palette = extract_palette(&pixels, top_n);
        prop_assert!(palette.len() <= top_n);
        prop_assert!(palette.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(palette.iter().map(|e| e.count as usize).sum::<usize>() <= pixels.len());
        for entry in &palette {
            prop_assert_eq!(&entry.hex, &entry.rgb.hex());
            prop_assert!(pixels.contains(&entry.rgb));
        }
        prop_assert_eq!(palette, extract_palette(&pixels, top_n));
    }
}

#[test]
fn short_string_is_invalid_format() {
    assert!(matches!(hex_to_rgb("bad"), Err(SwatchError::InvalidFormat(_))));
}
