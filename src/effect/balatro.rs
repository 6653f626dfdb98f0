//! Balatro effect
//!
//! A psychedelic swirl: a spiral band value is bent by five layers of sine
//! based domain warping and then looked up in a three-zone gradient, so the
//! red and blue bands wobble organically and are separated by darkness.
//!
//! Takes the full 16-bit frame counter. The slowest layers advance every
//! fourth frame, so the animation repeats every 1024 frames.

use super::{DEFAULT_SPIN_SPEED, DEFAULT_WARP_AMOUNT, Effect, FrameContext};
use crate::{color::Rgb, math8::sin8_centered, polar::PolarTables, tables::BALATRO_GRADIENT};

/// Low byte of a phase, wrapping negatives the two's complement way
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn phase(value: i32) -> u8 {
    (value & 0xFF) as u8
}

#[inline]
fn wave(value: i32) -> i32 {
    i32::from(sin8_centered(phase(value)))
}

/// Gradient index of one pixel.
///
/// `x` and `y` are the pixel position, `angle` and `radius` its polar table
/// entries and `t` the full frame counter.
#[allow(clippy::many_single_char_names)]
pub fn balatro_band(
    x: u16,
    y: u16,
    angle: u8,
    radius: u8,
    t: u16,
    spin_speed: u8,
    warp_amount: u8,
) -> u8 {
    let (x, y, t) = (i32::from(x), i32::from(y), i32::from(t));
    let angle = i32::from(angle);
    let radius = i32::from(radius);

    let spiral = angle + ((radius * i32::from(spin_speed)) >> 2) - (t >> 1);

    let mut warp = 0;
    // Position, low frequency
    warp += wave(x * 5 + y * 7 + (t >> 2));
    // Along the spiral bands
    warp += wave(spiral + radius + (t >> 1));
    // High frequency detail
    warp += wave(x * 11 - y * 13 + t) >> 1;
    // Angular swirl
    warp += wave(angle * 3 + (t >> 2)) >> 1;
    // Center to edge
    warp += wave(radius * 4 - t) >> 2;

    phase(spiral + ((warp * i32::from(warp_amount)) >> 6))
}

/// Render one Balatro frame into a row-major `width * height` frame
#[allow(clippy::cast_possible_truncation)]
pub fn render_balatro(
    polar: PolarTables<'_>,
    frame: &mut [Rgb],
    width: u16,
    height: u16,
    t: u16,
    spin_speed: u8,
    warp_amount: u8,
) {
    let width = usize::from(width);
    if width == 0 {
        return;
    }

    let tables = polar.angle().chunks_exact(width).zip(polar.radius().chunks_exact(width));
    let rows = frame.chunks_exact_mut(width).zip(tables).take(usize::from(height));
    for (y, (row, (angles, radii))) in rows.enumerate() {
        let pixels = row.iter_mut().zip(angles).zip(radii);
        for (x, ((pixel, angle), radius)) in pixels.enumerate() {
            let band = balatro_band(
                x as u16,
                y as u16,
                *angle,
                *radius,
                t,
                spin_speed,
                warp_amount,
            );
            *pixel = BALATRO_GRADIENT[usize::from(band)];
        }
    }
}

/// Balatro effect
#[derive(Debug, Clone, Copy)]
pub struct BalatroEffect {
    /// Spiral tightness
    spin_speed: u8,
    /// Strength of the organic distortion (1-15 looks best)
    warp_amount: u8,
}

impl Default for BalatroEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl BalatroEffect {
    pub const fn new() -> Self {
        Self {
            spin_speed: DEFAULT_SPIN_SPEED,
            warp_amount: DEFAULT_WARP_AMOUNT,
        }
    }

    /// Set the spiral tightness
    #[must_use]
    pub const fn with_spin_speed(mut self, spin_speed: u8) -> Self {
        self.spin_speed = spin_speed;
        self
    }

    /// Set the warp strength
    #[must_use]
    pub const fn with_warp_amount(mut self, warp_amount: u8) -> Self {
        self.warp_amount = warp_amount;
        self
    }

    pub const fn spin_speed(&self) -> u8 {
        self.spin_speed
    }

    pub const fn warp_amount(&self) -> u8 {
        self.warp_amount
    }

    pub fn set_spin_speed(&mut self, spin_speed: u8) {
        self.spin_speed = spin_speed;
    }

    pub fn set_warp_amount(&mut self, warp_amount: u8) {
        self.warp_amount = warp_amount;
    }
}

impl Effect for BalatroEffect {
    fn render(&mut self, ctx: &mut FrameContext<'_>, frame: &mut [Rgb]) {
        render_balatro(
            ctx.polar,
            frame,
            ctx.geometry.width(),
            ctx.geometry.height(),
            ctx.time,
            self.spin_speed,
            self.warp_amount,
        );
    }
}
