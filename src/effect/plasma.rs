//! Plasma effect
//!
//! Four sine waves (horizontal, vertical, diagonal and radial) averaged into
//! a hue and shown at full saturation and value.

use super::{Effect, FrameContext};
use crate::{
    color::{Rgb, hsv_to_rgb},
    math8::sin8,
};

/// Render one plasma frame into a row-major `width * height` frame.
///
/// The output repeats every 256 frames.
#[allow(clippy::cast_possible_truncation)]
pub fn render_plasma(frame: &mut [Rgb], width: u16, height: u16, t: u8) {
    let width = usize::from(width);
    if width == 0 {
        return;
    }

    let rows = frame.chunks_exact_mut(width).take(usize::from(height));
    for (y, row) in rows.enumerate() {
        for (x, pixel) in row.iter_mut().enumerate() {
            let hue = plasma_hue(x as u16, y as u16, t);
            let (r, g, b) = hsv_to_rgb(hue, 255, 255);
            *pixel = Rgb { r, g, b };
        }
    }
}

/// Plasma hue of one pixel, the mean of four sine waves
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn plasma_hue(x: u16, y: u16, t: u8) -> u8 {
    let (x, y, t) = (u64::from(x), u64::from(y), u64::from(t));
    let v1 = u64::from(sin8((x + t) as u8));
    let v2 = u64::from(sin8((y + t) as u8));
    let v3 = u64::from(sin8((x + y + t) as u8));
    // (x^2 + y^2) >> 4 stands in for the distance from the corner
    let v4 = u64::from(sin8((((x * x + y * y) >> 4) + t) as u8));

    ((v1 + v2 + v3 + v4) >> 2) as u8
}

/// Plasma effect
#[derive(Debug, Clone, Copy, Default)]
pub struct PlasmaEffect;

impl PlasmaEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for PlasmaEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: &mut FrameContext<'_>, frame: &mut [Rgb]) {
        render_plasma(
            frame,
            ctx.geometry.width(),
            ctx.geometry.height(),
            ctx.time as u8,
        );
    }
}
