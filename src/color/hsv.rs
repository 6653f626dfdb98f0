//! Division-free HSV to RGB conversion
//!
//! Hue covers the whole color wheel in 0-255. The wheel is split into six
//! sectors by multiplying the hue by 6, so the sector is the high byte and
//! the position inside the sector is the low byte. Everything else is a
//! multiply followed by a shift.

use super::{Hsv, Rgb, pack_rgb565, pack_rgb888};

/// Convert HSV to an `(r, g, b)` triplet.
///
/// Zero saturation yields pure gray `(v, v, v)` for any hue.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn hsv_to_rgb(h: u8, s: u8, v: u8) -> (u8, u8, u8) {
    if s == 0 {
        return (v, v, v);
    }

    let h6 = h as u16 * 6;
    let sector = (h6 >> 8) as u8;
    let frac = (h6 & 0xFF) as u32;

    let chroma = v as u32 * s as u32;
    let min = v.wrapping_sub((chroma >> 8) as u8);
    let desc = v.wrapping_sub(((chroma * frac) >> 16) as u8);
    let asc = v.wrapping_sub(((chroma * (255 - frac)) >> 16) as u8);

    match sector {
        0 => (v, asc, min),
        1 => (desc, v, min),
        2 => (min, v, asc),
        3 => (min, desc, v),
        4 => (asc, min, v),
        _ => (v, min, desc),
    }
}

/// Convert HSV to a packed RGB565 value
pub const fn hsv_to_rgb565(h: u8, s: u8, v: u8) -> u16 {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    pack_rgb565(r, g, b)
}

/// Convert a [`Hsv`] color to [`Rgb`]
pub const fn hsv2rgb(hsv: Hsv) -> Rgb {
    let (r, g, b) = hsv_to_rgb(hsv.hue, hsv.sat, hsv.val);
    Rgb { r, g, b }
}

/// Same as [`hsv_to_rgb565`], kept under the name host bindings expose
pub const fn pack_hsv_to_rgb565(h: u8, s: u8, v: u8) -> u16 {
    hsv_to_rgb565(h, s, v)
}

/// Convert HSV to a `0x00RRGGBB` word
pub const fn pack_hsv_to_rgb888(h: u8, s: u8, v: u8) -> u32 {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    pack_rgb888(Rgb { r, g, b })
}
