//! Color palette and packed-color normalization for the watch face.
//!
//! # Internal Representation
//!
//! All colors are held as [`Rgb888`] once they enter the engine. User
//! colors reach us in two packed encodings:
//!
//! - Configuration pushes carry a 24-bit `0xRRGGBB` integer.
//! - The persistent store holds a single byte with two bits per channel
//!   (`aarrggbb`, alpha always opaque) — the format the original
//!   watch hardware used for its 64-color display.
//!
//! Both are normalized here so the rest of the engine never sees a
//! packed value.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Default Colors (user-configurable fields)
// =============================================================================

/// Pure black. Default background.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Default foreground (hour and label text).
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Light gray. Default secondary color (minute text).
pub const LIGHT_GRAY: Rgb888 = Rgb888::new(0xAA, 0xAA, 0xAA);

// =============================================================================
// Fixed Dial Colors (not user-configurable)
// =============================================================================

/// Dark gray for tick marks and the center dots.
pub const DARK_GRAY: Rgb888 = Rgb888::new(0x55, 0x55, 0x55);

/// Battery fill arc. Yellow.
pub const BATTERY_FILL: Rgb888 = Rgb888::new(0xFF, 0xFF, 0x00);

/// Battery track arc. Dark olive, reads as a dimmed version of the fill.
pub const BATTERY_TRACK: Rgb888 = Rgb888::new(0x55, 0x55, 0x00);

/// Steps fill arc. Melon pink.
pub const STEPS_FILL: Rgb888 = Rgb888::new(0xFF, 0xAA, 0xAA);

/// Steps track arc. Deep rose, the dimmed counterpart of the fill.
pub const STEPS_TRACK: Rgb888 = Rgb888::new(0x55, 0x00, 0x00);

// =============================================================================
// Packed-Color Normalization
// =============================================================================

/// Decode a `0xRRGGBB` integer (the configuration push encoding).
pub const fn rgb_from_hex(hex: u32) -> Rgb888 {
    Rgb888::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Decode a 2-bit-per-channel packed byte (the persisted encoding).
///
/// Each channel holds a value in `0..=3`; scaling by 85 maps the
/// extremes onto 0 and 255 exactly.
pub const fn rgb_from_argb8(packed: u8) -> Rgb888 {
    Rgb888::new(
        ((packed >> 4) & 0b11) * 85,
        ((packed >> 2) & 0b11) * 85,
        (packed & 0b11) * 85,
    )
}

/// Encode a color into the persisted 2-bit-per-channel byte.
///
/// Keeps the top two bits of each channel; alpha bits are forced opaque.
pub fn rgb_to_argb8(color: Rgb888) -> u8 {
    0b1100_0000 | ((color.r() >> 6) << 4) | ((color.g() >> 6) << 2) | (color.b() >> 6)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_decoding() {
        assert_eq!(rgb_from_hex(0x000000), BLACK);
        assert_eq!(rgb_from_hex(0xFFFFFF), WHITE);
        assert_eq!(rgb_from_hex(0xAAAAAA), LIGHT_GRAY);
        assert_eq!(rgb_from_hex(0xFF0055), Rgb888::new(0xFF, 0x00, 0x55));
    }

    #[test]
    fn test_argb8_decoding() {
        // 0b11_11_11_11 = opaque white, 0b11_00_00_00 = opaque black
        assert_eq!(rgb_from_argb8(0b1111_1111), WHITE);
        assert_eq!(rgb_from_argb8(0b1100_0000), BLACK);
        // 0b10 per channel scales to 0xAA
        assert_eq!(rgb_from_argb8(0b1110_1010), LIGHT_GRAY);
    }

    #[test]
    fn test_both_encodings_normalize_to_same_color() {
        // The palette colors are expressible in both encodings and must
        // land on the same internal value.
        assert_eq!(rgb_from_hex(0x555500), rgb_from_argb8(0b1101_0100));
        assert_eq!(rgb_from_hex(0xFFAAAA), rgb_from_argb8(0b1111_1010));
    }

    #[test]
    fn test_argb8_round_trip() {
        for packed in 0u8..=0b0011_1111 {
            let opaque = 0b1100_0000 | packed;
            assert_eq!(
                rgb_to_argb8(rgb_from_argb8(opaque)),
                opaque,
                "packed byte {opaque:#010b} should survive a round trip"
            );
        }
    }

    #[test]
    fn test_argb8_encoding_truncates_to_top_bits() {
        // 0xAB and 0xAA share the same top two bits per channel
        assert_eq!(
            rgb_to_argb8(Rgb888::new(0xAB, 0xAB, 0xAB)),
            rgb_to_argb8(LIGHT_GRAY)
        );
    }
}
