use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0x00RRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn pack_rgb888(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Pack 8-bit channels as RGB565: `RRRRRGGGGGGBBBBB`
#[allow(clippy::cast_lossless)]
pub const fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    (((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | (b >> 3) as u16
}

/// Unpack an RGB565 value back to 8-bit channels.
///
/// The empty low bits are filled by replicating the most significant bits,
/// so 0 maps to 0 and the channel maximum maps to 255.
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_rgb565(value: u16) -> Rgb {
    let r = ((value >> 8) as u8) & 0xF8;
    let g = ((value >> 3) as u8) & 0xFC;
    let b = ((value << 3) as u8) & 0xF8;

    Rgb {
        r: r | (r >> 5),
        g: g | (g >> 6),
        b: b | (b >> 5),
    }
}
