mod hsv;
mod utils;

pub use hsv::{hsv_to_rgb, hsv_to_rgb565, hsv2rgb, pack_hsv_to_rgb565, pack_hsv_to_rgb888};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{pack_rgb565, pack_rgb888, rgb_from_u32, unpack_rgb565};

pub type Rgb = RGB8;
pub type Hsv = HSV;
