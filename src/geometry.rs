use crate::error::FrameError;

/// Dimensions of a HUB75 panel (or chain of panels).
///
/// The panel scans two rows at once, one from the top half and one from the
/// bottom half, so the height must be even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    width: u16,
    height: u16,
}

impl PanelGeometry {
    /// Create a geometry, rejecting empty panels and odd heights
    pub const fn new(width: u16, height: u16) -> Result<Self, FrameError> {
        if width == 0 || height == 0 || height % 2 != 0 {
            return Err(FrameError::InvalidGeometry { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(self) -> u16 {
        self.width
    }

    pub const fn height(self) -> u16 {
        self.height
    }

    /// Total number of pixels
    pub const fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of pixel pairs, which is also the stride between bitplanes
    pub const fn half_pixel_count(self) -> usize {
        self.pixel_count() / 2
    }

    /// Byte length of an RGB888 frame
    pub const fn rgb888_len(self) -> usize {
        self.pixel_count() * 3
    }

    /// Byte length of an RGB565 frame
    pub const fn rgb565_len(self) -> usize {
        self.pixel_count() * 2
    }

    /// Byte length of a raw three-channel frame with the given sample maximum
    pub const fn ppm_len(self, max_value: u16) -> usize {
        self.pixel_count() * 3 * bytes_per_sample(max_value)
    }

    /// Byte length of a bitplane buffer with `bit_depth` planes
    pub const fn bitplane_len(self, bit_depth: usize) -> usize {
        self.half_pixel_count() * bit_depth
    }

    /// Row-major pixel index
    pub const fn index(self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Bytes used by one raw sample: one below 256, two (big-endian) otherwise
pub const fn bytes_per_sample(max_value: u16) -> usize {
    if max_value < 256 { 1 } else { 2 }
}
