//! Fire effect
//!
//! Classic cellular fire: every frame each cell copies the cell below it,
//! drifted sideways by at most one column and cooled by up to three steps.
//! The bottom row is the heat source and is never written by the automaton.
//!
//! Intensities persist between frames in a caller-owned buffer. Rows are
//! updated top to bottom in place: a cell no drift lands on keeps its
//! previous intensity, and when two cells drift onto the same target the
//! later one in the row wins.

use super::{Effect, FrameContext};
use crate::{
    color::Rgb,
    error::FrameError,
    geometry::PanelGeometry,
    tables::{FIRE_MAX_INTENSITY, FIRE_PALETTE},
};

/// Stateless position/time hash used as the fire's random source
#[inline]
pub const fn fire_hash(x: u32, y: u32, t: u32) -> u32 {
    let h = x
        .wrapping_mul(374_761_393)
        .wrapping_add(y.wrapping_mul(668_265_263))
        .wrapping_add(t.wrapping_mul(2_654_435_761));
    let h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^ (h >> 16)
}

/// Advance the fire one step and map intensities to colors.
///
/// `heat` holds one intensity per pixel and is updated in place. Rows that
/// do not fit in `heat` or `frame` are skipped. A height below 2 leaves the
/// intensities untouched.
#[allow(clippy::cast_possible_truncation)]
pub fn render_fire(heat: &mut [u8], frame: &mut [Rgb], width: u16, height: u16, t: u8) {
    let width = usize::from(width);
    if width == 0 {
        return;
    }
    let height = usize::from(height).min(heat.len() / width);

    for y in 0..height.saturating_sub(1) {
        for x in 0..width {
            let source = heat[(y + 1) * width + x];
            let rand = fire_hash(x as u32, y as u32, u32::from(t));

            let left = (rand & 1) as usize;
            let right = ((rand >> 1) & 1) as usize;
            let target_x = (x + right).saturating_sub(left).min(width - 1);

            let decay = ((rand >> 2) & 3) as u8;
            heat[y * width + target_x] = source.saturating_sub(decay);
        }
    }

    for (pixel, intensity) in frame.iter_mut().zip(heat.iter()).take(width * height) {
        *pixel = FIRE_PALETTE[usize::from((*intensity).min(FIRE_MAX_INTENSITY))];
    }
}

/// Reset a fire buffer: everything cold except a full-heat bottom row
pub fn ignite_fire(heat: &mut [u8], width: u16, height: u16) {
    heat.fill(0);
    let width = usize::from(width);
    let start = width * usize::from(height.saturating_sub(1));
    if let Some(bottom) = heat.get_mut(start..start + width) {
        bottom.fill(FIRE_MAX_INTENSITY);
    }
}

/// Persistent fire intensities for panels of up to `N` pixels
#[derive(Debug, Clone)]
pub struct FireState<const N: usize> {
    heat: [u8; N],
}

impl<const N: usize> Default for FireState<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FireState<N> {
    /// Create a cold fire
    pub const fn new() -> Self {
        Self { heat: [0; N] }
    }

    /// Seed the heat source for a panel
    pub fn ignite(&mut self, geometry: PanelGeometry) -> Result<(), FrameError> {
        let heat = self.heat_for(geometry)?;
        ignite_fire(heat, geometry.width(), geometry.height());
        Ok(())
    }

    /// Intensities covering exactly the pixels of `geometry`
    pub fn heat_for(&mut self, geometry: PanelGeometry) -> Result<&mut [u8], FrameError> {
        let count = geometry.pixel_count();
        if count > N {
            return Err(FrameError::SizeMismatch {
                expected: count,
                actual: N,
            });
        }
        Ok(&mut self.heat[..count])
    }

    pub const fn heat(&self) -> &[u8; N] {
        &self.heat
    }
}

/// Fire effect
///
/// Ignites the intensity buffer on the first frame after a reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireEffect {
    ignited: bool,
}

impl FireEffect {
    pub const fn new() -> Self {
        Self { ignited: false }
    }
}

impl Effect for FireEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: &mut FrameContext<'_>, frame: &mut [Rgb]) {
        let width = ctx.geometry.width();
        let height = ctx.geometry.height();
        if !self.ignited {
            ignite_fire(ctx.heat, width, height);
            self.ignited = true;
        }
        render_fire(ctx.heat, frame, width, height, ctx.time as u8);
    }

    fn reset(&mut self) {
        self.ignited = false;
    }
}
