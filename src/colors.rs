//! Packed color constants used by the color buttons.
//!
//! Plain colors are `0xRRGGBB`. White tones come in pairs: a 24-bit
//! approximation for RGB strips and a 32-bit `0xWWRRGGBB` value that drives
//! the dedicated white channel on RGBW strips.

#![allow(missing_docs)]

pub const RED: u32 = 0xFF_0000;
pub const REDDISH: u32 = 0xFF_7800;
pub const ORANGE: u32 = 0xFF_A000;
pub const YELLOWISH: u32 = 0xFF_C800;
pub const YELLOW: u32 = 0xFF_FF00;
pub const GREEN: u32 = 0x00_FF00;
pub const GREENISH: u32 = 0x00_FF78;
pub const TURQUOISE: u32 = 0x00_FFA0;
pub const CYAN: u32 = 0x00_FFDC;
pub const AQUA: u32 = 0x00_C8FF;
pub const BLUE: u32 = 0x00_A0FF;
pub const DEEPBLUE: u32 = 0x00_00FF;
pub const PURPLE: u32 = 0xAA_00FF;
pub const MAGENTA: u32 = 0xFF_00DC;
pub const PINK: u32 = 0xFF_00A0;
pub const WHITE: u32 = 0xFF_FFDC;

pub const WARMWHITE2: u32 = 0xFF_AA69;
pub const WARMWHITE: u32 = 0xFF_BF8E;
pub const NEUTRALWHITE: u32 = 0xFF_D4B4;
pub const COLDWHITE: u32 = 0xFF_E9DC;
pub const COLDWHITE2: u32 = 0xFF_FFFF;

pub const WARMWHITE2_RGBW: u32 = 0x80FF_AA69;
pub const WARMWHITE_RGBW: u32 = 0x80FF_BF8E;
pub const NEUTRALWHITE_RGBW: u32 = 0xFF00_0000;
pub const COLDWHITE_RGBW: u32 = 0x7F7F_7F7F;
pub const COLDWHITE2_RGBW: u32 = 0xFFFF_FFFF;

/// Colors visited by the "rotate colors" button, in order.
pub const ROTATION: [u32; 13] = [
    RED, REDDISH, ORANGE, YELLOWISH, GREEN, GREENISH, TURQUOISE, CYAN, BLUE, DEEPBLUE, PURPLE,
    PINK, WHITE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_colors_fit_in_24_bits() {
        for color in ROTATION {
            assert_eq!(color & 0xFF00_0000, 0);
        }
    }

    #[test]
    fn rgbw_whites_keep_white_channel() {
        assert_eq!(NEUTRALWHITE_RGBW >> 24, 0xFF);
        assert_ne!(COLDWHITE_RGBW >> 24, 0);
    }
}
