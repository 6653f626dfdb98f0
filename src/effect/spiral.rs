//! Rainbow spiral effect
//!
//! Hue follows the polar angle, twisted by the radius and rotated over time.

use super::{DEFAULT_SPIN_SPEED, Effect, FrameContext};
use crate::{
    color::{Rgb, hsv_to_rgb},
    polar::PolarTables,
};

/// Render one spiral frame.
///
/// `hue = angle + ((radius * tightness) >> 4) + t`, wrapping at 256.
/// Renders as many pixels as both the frame and the tables cover.
#[allow(clippy::cast_possible_truncation)]
pub fn render_spiral(polar: PolarTables<'_>, frame: &mut [Rgb], t: u8, tightness: u8) {
    let pixels = frame.iter_mut().zip(polar.angle()).zip(polar.radius());
    for ((pixel, angle), radius) in pixels {
        let twist = ((u16::from(*radius) * u16::from(tightness)) >> 4) as u8;
        let hue = angle.wrapping_add(twist).wrapping_add(t);
        let (r, g, b) = hsv_to_rgb(hue, 255, 255);
        *pixel = Rgb { r, g, b };
    }
}

/// Rainbow spiral effect
#[derive(Debug, Clone, Copy)]
pub struct SpiralEffect {
    /// How tightly the arms wind (higher = more arms)
    tightness: u8,
}

impl Default for SpiralEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl SpiralEffect {
    pub const fn new() -> Self {
        Self {
            tightness: DEFAULT_SPIN_SPEED,
        }
    }

    /// Set the spiral tightness
    #[must_use]
    pub const fn with_tightness(mut self, tightness: u8) -> Self {
        self.tightness = tightness;
        self
    }

    pub const fn tightness(&self) -> u8 {
        self.tightness
    }

    pub fn set_tightness(&mut self, tightness: u8) {
        self.tightness = tightness;
    }
}

impl Effect for SpiralEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: &mut FrameContext<'_>, frame: &mut [Rgb]) {
        render_spiral(ctx.polar, frame, ctx.time as u8, self.tightness);
    }
}
