//! Gamma correction lookup tables
//!
//! Tables are built once (at startup or when the gamma changes) and then
//! applied per channel by the bitplane encoder.

use libm::{powf, roundf};

/// 256-entry table mapping a stored 8-bit intensity to a corrected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaLut([u8; 256]);

impl Default for GammaLut {
    fn default() -> Self {
        Self::identity()
    }
}

impl GammaLut {
    /// Table that leaves every value unchanged
    #[allow(clippy::cast_possible_truncation)]
    pub const fn identity() -> Self {
        let mut table = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            table[i] = i as u8;
            i += 1;
        }
        Self(table)
    }

    /// Wrap a precomputed table
    pub const fn from_table(table: [u8; 256]) -> Self {
        Self(table)
    }

    /// Power-law table for 8 output bits: `round(255 * (i / 255) ^ gamma)`
    pub fn power(gamma: f32) -> Self {
        Self::power_for_depth(gamma, 8)
    }

    /// Power-law table whose output spans `0..2^bit_depth`.
    ///
    /// Negative gammas are clamped to zero. A gamma of exactly 1.0 at 8 bits
    /// is the identity.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )]
    pub fn power_for_depth(gamma: f32, bit_depth: u8) -> Self {
        let gamma = gamma.max(0.0);
        let bit_depth = bit_depth.clamp(1, 8);
        if gamma == 1.0 && bit_depth == 8 {
            return Self::identity();
        }

        let max_out = ((1u16 << bit_depth) - 1) as f32;
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let normalized = i as f32 / 255.0;
            *entry = roundf(max_out * powf(normalized, gamma)) as u8;
        }
        Self(table)
    }

    /// sRGB decoding curve, linear near black and a 2.4 power above
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn srgb() -> Self {
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let c = i as f32 / 255.0;
            let linear = if c <= 0.040_45 {
                c / 12.92
            } else {
                powf((c + 0.055) / 1.055, 2.4)
            };
            *entry = roundf(255.0 * linear) as u8;
        }
        Self(table)
    }

    /// Correct one channel value
    #[inline]
    pub const fn apply(&self, value: u8) -> u8 {
        self.0[value as usize]
    }

    pub const fn as_table(&self) -> &[u8; 256] {
        &self.0
    }
}
