//! Constant lookup tables shared by the effect kernels
//!
//! All tables are baked in at build time and never mutated.

use crate::color::Rgb;

/// Build an `[Rgb; N]` table from `(r, g, b)` triplets
macro_rules! rgb_table {
    ($(($r:expr, $g:expr, $b:expr)),* $(,)?) => {
        [
            $(Rgb { r: $r, g: $g, b: $b }),*
        ]
    };
}

/// Highest intensity a fire cell maps to a palette color
pub const FIRE_MAX_INTENSITY: u8 = 36;

/// One full sine period: `sin(i * 2pi / 256) * 127.5 + 127.5`
pub const SIN_TABLE: [u8; 256] = [
    128, 131, 134, 137, 140, 143, 146, 149, 152, 155, 158, 162, 165, 167, 170, 173,
    176, 179, 182, 185, 188, 190, 193, 196, 198, 201, 203, 206, 208, 211, 213, 215,
    218, 220, 222, 224, 226, 228, 230, 232, 234, 235, 237, 238, 240, 241, 243, 244,
    245, 246, 248, 249, 250, 250, 251, 252, 253, 253, 254, 254, 254, 255, 255, 255,
    255, 255, 255, 255, 254, 254, 254, 253, 253, 252, 251, 250, 250, 249, 248, 246,
    245, 244, 243, 241, 240, 238, 237, 235, 234, 232, 230, 228, 226, 224, 222, 220,
    218, 215, 213, 211, 208, 206, 203, 201, 198, 196, 193, 190, 188, 185, 182, 179,
    176, 173, 170, 167, 165, 162, 158, 155, 152, 149, 146, 143, 140, 137, 134, 131,
    128, 124, 121, 118, 115, 112, 109, 106, 103, 100,  97,  93,  90,  88,  85,  82,
     79,  76,  73,  70,  67,  65,  62,  59,  57,  54,  52,  49,  47,  44,  42,  40,
     37,  35,  33,  31,  29,  27,  25,  23,  21,  20,  18,  17,  15,  14,  12,  11,
     10,   9,   7,   6,   5,   5,   4,   3,   2,   2,   1,   1,   1,   0,   0,   0,
      0,   0,   0,   0,   1,   1,   1,   2,   2,   3,   4,   5,   5,   6,   7,   9,
     10,  11,  12,  14,  15,  17,  18,  20,  21,  23,  25,  27,  29,  31,  33,  35,
     37,  40,  42,  44,  47,  49,  52,  54,  57,  59,  62,  65,  67,  70,  73,  76,
     79,  82,  85,  88,  90,  93,  97, 100, 103, 106, 109, 112, 115, 118, 121, 124,
];

/// Three-zone gradient for the Balatro swirl.
///
/// Zones are red (0-85), blue (86-170) and dark (171-255). Red and blue
/// bands meet through darkness so no purple appears between them.
#[rustfmt::skip]
pub const BALATRO_GRADIENT: [Rgb; 256] = rgb_table![
    // Red
    (  8,  20,  24), ( 24,  16,  16), ( 33,  16,  16), ( 49,  16,  16),
    ( 57,  16,  16), ( 66,  16,  16), ( 82,  16,  16), ( 90,  16,  16),
    (107,  16,   8), (115,  12,   8), (132,  12,   8), (140,  12,   8),
    (140,  12,   8), (148,  16,   8), (156,  16,   8), (165,  16,   8),
    (165,  16,   8), (173,  20,  16), (181,  20,  16), (189,  20,  16),
    (198,  20,  16), (206,  24,  16), (222,  28,  16), (222,  28,  16),
    (231,  28,  24), (231,  32,  24), (239,  32,  24), (239,  38,  30),
    (247,  50,  38), (247,  61,  49), (247,  79,  67), (255, 102,  90),
    (255, 127, 115), (255, 152, 140), (255, 169, 157), (255, 176, 164),
    (255, 169, 157), (255, 152, 140), (255, 127, 115), (255, 102,  90),
    (255,  79,  67), (247,  61,  49), (247,  50,  38), (247,  42,  30),
    (239,  32,  24), (239,  32,  24), (231,  32,  24), (231,  28,  24),
    (222,  28,  16), (222,  28,  16), (206,  24,  16), (198,  24,  16),
    (189,  20,  16), (189,  20,  16), (181,  20,  16), (181,  20,  16),
    (173,  20,  16), (173,  20,  16), (165,  16,   8), (165,  16,   8),
    (156,  16,   8), (156,  16,   8), (148,  16,   8), (148,  12,   8),
    (140,  12,   8), (140,  12,   8), (132,  12,   8), (123,  12,   8),
    (123,  12,   8), (115,  16,   8), (107,  16,   8), ( 99,  16,   8),
    ( 99,  16,  16), ( 90,  16,  16), ( 82,  16,  16), ( 74,  16,  16),
    ( 66,  16,  16), ( 66,  16,  16), ( 57,  16,  16), ( 49,  16,  16),
    ( 41,  16,  16), ( 41,  16,  16), ( 33,  16,  16), ( 24,  16,  16),
    ( 16,  16,  24), (  8,  20,  24),
    // Blue
    (  8,  20,  24), (  8,  20,  33), (  8,  24,  33), (  8,  28,  41),
    (  8,  32,  49), (  8,  36,  57), (  8,  40,  66), (  8,  44,  74),
    (  8,  48,  82), (  0,  52,  90), (  0,  56,  99), (  0,  60,  99),
    (  0,  65, 107), (  0,  65, 115), (  0,  69, 123), (  0,  73, 132),
    (  0,  77, 140), (  0,  81, 148), (  0,  85, 156), (  0,  89, 165),
    (  0,  89, 165), (  0,  93, 165), (  8, 101, 173), ( 14, 111, 181),
    ( 30, 127, 181), ( 41, 142, 189), ( 59, 164, 189), ( 90, 191, 198),
    (115, 216, 198), (140, 246, 198), (157, 255, 198), (164, 255, 198),
    (157, 255, 198), (140, 241, 198), (115, 216, 198), ( 82, 187, 189),
    ( 59, 160, 189), ( 41, 138, 181), ( 22, 119, 181), ( 14, 107, 173),
    (  0,  93, 165), (  0,  89, 165), (  0,  89, 165), (  0,  89, 156),
    (  0,  85, 156), (  0,  85, 156), (  0,  85, 156), (  0,  85, 148),
    (  0,  81, 148), (  0,  81, 148), (  0,  81, 148), (  0,  81, 148),
    (  0,  81, 148), (  0,  81, 148), (  0,  81, 148), (  0,  81, 148),
    (  0,  81, 148), (  0,  81, 148), (  0,  81, 148), (  0,  85, 148),
    (  0,  85, 156), (  0,  85, 156), (  0,  85, 156), (  0,  89, 156),
    (  0,  89, 165), (  0,  89, 165), (  0,  85, 156), (  0,  81, 148),
    (  0,  77, 140), (  0,  73, 132), (  0,  69, 123), (  0,  65, 115),
    (  0,  65, 107), (  0,  60,  99), (  0,  56,  99), (  0,  52,  90),
    (  8,  48,  82), (  8,  44,  74), (  8,  40,  66), (  8,  36,  57),
    (  8,  32,  49), (  8,  28,  41), (  8,  24,  33), (  8,  20,  33),
    (  8,  20,  24),
    // Dark
    (  8,  16,  16), (  8,  16,  16), (  8,  16,  16), (  8,  16,  16),
    (  8,  16,  16), (  8,  16,  16), (  8,  16,  16), (  8,  16,  16),
    (  8,  16,  16), (  8,  16,  16), (  8,  16,  16), (  8,  16,  16),
    (  8,  16,  24), (  8,  16,  24), (  8,  16,  24), (  8,  16,  24),
    (  8,  16,  24), (  8,  16,  24), (  8,  16,  24), (  8,  16,  24),
    (  8,  20,  24), (  8,  16,  24), (  8,  16,  24), (  8,  16,  24),
    (  8,  16,  24), (  8,  16,  24), (  8,  16,  24), (  8,  16,  24),
    (  8,  16,  24), (  8,  16,  16), (  8,  16,  16), (  8,  16,  16),
    (  8,  16,  16), (  8,  16,  16), (  8,  16,  16), (  8,  16,  16),
    (  8,  16,  16), (  8,  16,  16), (  8,  16,  16), (  8,  16,  16),
    (  8,  16,  16), (  8,  16,  16), (  8,  12,  16), (  8,  12,  16),
    (  8,  12,  16), (  8,  12,  16), (  8,  12,  16), (  8,  12,  16),
    (  8,  12,  16), (  8,  12,  16), (  8,  12,  16), (  8,  12,  16),
    (  8,  12,  16), (  8,  12,  16), (  8,  12,   8), (  8,  12,   8),
    (  8,  12,   8), (  8,  12,   8), (  8,  12,   8), (  8,  12,   8),
    (  8,  12,   8), (  8,  12,   8), (  8,  12,   8), (  8,  12,   8),
    (  8,  12,   8), (  8,  12,   8), (  8,  12,   8), (  8,  12,   8),
    (  8,  12,   8), (  8,  12,   8), (  8,  12,  16), (  8,  12,  16),
    (  8,  12,  16), (  8,  12,  16), (  8,  12,  16), (  8,  12,  16),
    (  8,  12,  16), (  8,  12,  16), (  8,  12,  16), (  8,  12,  16),
    (  8,  12,  16), (  8,  12,  16), (  8,  16,  16), (  8,  16,  16),
    (  8,  16,  16),
];

/// Fire palette: black, dark red, red, orange, yellow, white.
///
/// Index is the clamped fire intensity (0-36).
#[rustfmt::skip]
pub const FIRE_PALETTE: [Rgb; FIRE_MAX_INTENSITY as usize + 1] = rgb_table![
    (  0,   0,   0),
    (  8,   0,   0), ( 16,   0,   0), ( 24,   0,   0), ( 33,   0,   0),
    ( 41,   0,   0), ( 49,   0,   0), ( 57,   0,   0), ( 66,   0,   0),
    ( 74,   0,   0), ( 82,   0,   0), ( 90,   0,   0), ( 99,   0,   0),
    (107,   0,   0), (115,   0,   0), (123,   0,   0), (132,   0,   0),
    (132,  65,   0), (132, 130,   0), (132, 195,   0), (140,   0,   0),
    (140,  69,   0), (140, 134,   0), (140, 203,   0), (148,  12,   0),
    (148,  81,   0), (148, 150,   0), (148, 219,   0), (156,  28,   0),
    (156,  97,   0), (156, 166,   0), (156, 235,   0), (165,  44,   0),
    (198, 166,   0), (231, 231,   0), (255, 239,   0), (255, 255,   0),
];
