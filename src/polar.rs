//! Per-pixel polar coordinates for the spiral effects
//!
//! Tables are normally generated offline and flashed with the firmware.
//! [`fill_polar_tables`] produces the same data at runtime for targets that
//! have the spare cycles at startup.

use core::f64::consts::PI;

use libm::{atan2, sqrt};

use crate::{error::FrameError, geometry::PanelGeometry};

/// Borrowed angle and radius tables, one byte per pixel.
#[derive(Debug, Clone, Copy)]
pub struct PolarTables<'a> {
    angle: &'a [u8],
    radius: &'a [u8],
}

impl<'a> PolarTables<'a> {
    /// Wrap tables, checking both cover every pixel of the panel
    pub fn new(
        geometry: PanelGeometry,
        angle: &'a [u8],
        radius: &'a [u8],
    ) -> Result<Self, FrameError> {
        FrameError::check_len(geometry.pixel_count(), angle.len())?;
        FrameError::check_len(geometry.pixel_count(), radius.len())?;
        Ok(Self { angle, radius })
    }

    /// Wrap tables without checking them against a geometry.
    ///
    /// The shorter table bounds how many pixels the kernels render.
    pub const fn from_raw(angle: &'a [u8], radius: &'a [u8]) -> Self {
        Self { angle, radius }
    }

    pub const fn angle(&self) -> &'a [u8] {
        self.angle
    }

    pub const fn radius(&self) -> &'a [u8] {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.angle.len().min(self.radius.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fill angle and radius tables centered on `(width / 2, height / 2)`.
///
/// Angle maps `-pi..=pi` onto 0-255, radius maps the distance to the
/// farthest corner distance onto 0-255. Both are computed in double
/// precision and truncated, not rounded.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub fn fill_polar_tables(
    geometry: PanelGeometry,
    angle: &mut [u8],
    radius: &mut [u8],
) -> Result<(), FrameError> {
    FrameError::check_len(geometry.pixel_count(), angle.len())?;
    FrameError::check_len(geometry.pixel_count(), radius.len())?;

    let width = usize::from(geometry.width());
    let cx = i32::from(geometry.width() / 2);
    let cy = i32::from(geometry.height() / 2);
    let max_radius = sqrt(f64::from(cx * cx + cy * cy));

    let rows = angle
        .chunks_exact_mut(width)
        .zip(radius.chunks_exact_mut(width));
    for (y, (angle_row, radius_row)) in rows.enumerate() {
        let dy = y as i32 - cy;
        for (x, (a, r)) in angle_row.iter_mut().zip(radius_row.iter_mut()).enumerate() {
            let dx = x as i32 - cx;
            let theta = atan2(f64::from(dy), f64::from(dx));
            *a = ((theta + PI) * 255.0 / (2.0 * PI)) as u8;

            let distance = sqrt(f64::from(dx * dx + dy * dy));
            *r = if max_radius > 0.0 {
                (distance * 255.0 / max_radius) as u8
            } else {
                0
            };
        }
    }

    Ok(())
}
