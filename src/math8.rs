use crate::tables::SIN_TABLE;

/// Table sine over one 256-step period, 0-255 centered on 128
#[inline]
pub const fn sin8(theta: u8) -> u8 {
    SIN_TABLE[theta as usize]
}

/// Table sine shifted to be centered on zero (-128..=127)
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn sin8_centered(theta: u8) -> i16 {
    sin8(theta) as i16 - 128
}

/// Rescales raw samples with an arbitrary maximum to the 0-255 range.
///
/// The reciprocal `(255 << 24) / max_value` is computed once, so each sample
/// costs one multiply. The reciprocal is truncated and may undershoot by one,
/// which a single correction step fixes, giving exactly
/// `floor(v * 255 / max_value)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rescaler {
    max_value: u32,
    scale: u32,
}

impl Rescaler {
    /// Create a rescaler for samples in `0..=max_value`
    ///
    /// Returns `None` for a zero maximum.
    #[allow(clippy::cast_lossless)]
    pub const fn new(max_value: u16) -> Option<Self> {
        if max_value == 0 {
            return None;
        }
        let max_value = max_value as u32;
        Some(Self {
            max_value,
            scale: (255 << 24) / max_value,
        })
    }

    /// Sample maximum this rescaler was built for
    #[allow(clippy::cast_possible_truncation)]
    pub const fn max_value(self) -> u16 {
        self.max_value as u16
    }

    /// Rescale one sample.
    ///
    /// Samples above the declared maximum saturate at 255.
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn rescale(self, value: u16) -> u8 {
        let value = value as u64;
        let mut quotient = (value * self.scale as u64) >> 24;
        if (quotient + 1) * self.max_value as u64 <= value * 255 {
            quotient += 1;
        }
        if quotient > 255 { 255 } else { quotient as u8 }
    }
}

/// Rescale a single sample to 0-255 as `floor(value * 255 / max_value)`
///
/// Returns `None` for a zero maximum.
pub const fn scale_to_u8(value: u16, max_value: u16) -> Option<u8> {
    match Rescaler::new(max_value) {
        Some(rescaler) => Some(rescaler.rescale(value)),
        None => None,
    }
}
