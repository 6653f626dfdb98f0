//! Bitplane encoding for HUB75 panels
//!
//! A panel shifts in one pixel of the top half and one pixel of the bottom
//! half at the same time, six data lines in total. Color depth comes from
//! showing `BIT_DEPTH` sub-frames (bitplanes) with binary-weighted on times.
//!
//! The bitplane buffer holds `BIT_DEPTH` planes of `pixel_count / 2` bytes.
//! Byte `plane * stride + pair` carries bit `plane` of both pixels of pixel
//! pair `pair`, packed on the six low bits in the order set by [`PinOrder`].

use core::sync::atomic::{Ordering, compiler_fence};

use crate::{
    color::{Rgb, unpack_rgb565},
    error::FrameError,
    gamma::GammaLut,
    geometry::bytes_per_sample,
    math8::Rescaler,
};

/// Default number of bitplanes, matching the panel scanning driver
pub const COLOR_BIT_DEPTH: usize = 8;

/// Mapping of the six color lines onto bits of a packed byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinOrder {
    /// R1 on bit 0, then G1, B1, R2, G2, B2 up to bit 5.
    ///
    /// Matches wiring where R1 sits on the lowest data pin.
    #[default]
    LsbFirst,
    /// R1 on bit 5, then G1, B1, R2, G2, B2 down to bit 0
    MsbFirst,
}

impl PinOrder {
    /// Bit positions of `R1, G1, B1, R2, G2, B2`
    const fn shifts(self) -> [u8; 6] {
        match self {
            Self::LsbFirst => [0, 1, 2, 3, 4, 5],
            Self::MsbFirst => [5, 4, 3, 2, 1, 0],
        }
    }
}

/// Pack bit `bit` of a top and a bottom pixel into one output byte
#[inline]
const fn plane_byte(top: Rgb, bottom: Rgb, bit: usize, order: PinOrder) -> u8 {
    let [r1, g1, b1, r2, g2, b2] = order.shifts();
    (((top.r >> bit) & 1) << r1)
        | (((top.g >> bit) & 1) << g1)
        | (((top.b >> bit) & 1) << b1)
        | (((bottom.r >> bit) & 1) << r2)
        | (((bottom.g >> bit) & 1) << g2)
        | (((bottom.b >> bit) & 1) << b2)
}

/// Pack a pixel pair into `BIT_DEPTH` bytes, plane `i` holding source bit `i`.
///
/// With fewer than 8 planes only the low bits are emitted, so sources are
/// expected to be pre-scaled (for example by a [`GammaLut`] built for the
/// bit depth).
pub const fn pack_pixel_pair<const BIT_DEPTH: usize>(
    top: Rgb,
    bottom: Rgb,
    order: PinOrder,
) -> [u8; BIT_DEPTH] {
    let mut planes = [0u8; BIT_DEPTH];
    let mut plane = 0;
    while plane < BIT_DEPTH {
        planes[plane] = plane_byte(top, bottom, plane, order);
        plane += 1;
    }
    planes
}

/// Pack a pixel pair into `BIT_DEPTH` bytes, plane `p` holding source bit
/// `p + (8 - BIT_DEPTH)`.
///
/// Only the most significant bits of full 8-bit samples are emitted.
pub const fn pack_pixel_pair_msb<const BIT_DEPTH: usize>(
    top: Rgb,
    bottom: Rgb,
    order: PinOrder,
) -> [u8; BIT_DEPTH] {
    let mut planes = [0u8; BIT_DEPTH];
    let mut plane = 0;
    while plane < BIT_DEPTH {
        planes[plane] = plane_byte(top, bottom, plane + (8 - BIT_DEPTH), order);
        plane += 1;
    }
    planes
}

/// Zero every byte of a buffer.
///
/// Writes are volatile so the loop cannot be merged away or elided, even
/// when the buffer is only read later by DMA.
pub fn clear(buffer: &mut [u8]) {
    for byte in buffer.iter_mut() {
        // SAFETY: `byte` is a valid, aligned, exclusive reference into the slice.
        unsafe { core::ptr::write_volatile(byte, 0) };
    }
    compiler_fence(Ordering::SeqCst);
}

/// Encoder from pixel frames to bitplanes with a fixed bit depth.
///
/// Holds an optional gamma table applied to every channel of RGB888 and
/// RGB565 sources right before packing. Those sources emit their low
/// `BIT_DEPTH` bits unless [`Self::with_msb_planes`] is set.
#[derive(Debug, Clone, Copy)]
pub struct BitplaneEncoder<'a, const BIT_DEPTH: usize = COLOR_BIT_DEPTH> {
    gamma: Option<&'a GammaLut>,
    pin_order: PinOrder,
    msb_planes: bool,
}

impl<const BIT_DEPTH: usize> Default for BitplaneEncoder<'_, BIT_DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const BIT_DEPTH: usize> BitplaneEncoder<'a, BIT_DEPTH> {
    /// Create an encoder without gamma correction and with LSB-first pins
    pub const fn new() -> Self {
        const {
            assert!(BIT_DEPTH >= 1 && BIT_DEPTH <= 8, "bit depth must be 1..=8");
        }
        Self {
            gamma: None,
            pin_order: PinOrder::LsbFirst,
            msb_planes: false,
        }
    }

    /// Apply a gamma table before packing
    #[must_use]
    pub const fn with_gamma(mut self, gamma: &'a GammaLut) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Set the pin mapping of packed bytes
    #[must_use]
    pub const fn with_pin_order(mut self, pin_order: PinOrder) -> Self {
        self.pin_order = pin_order;
        self
    }

    /// Emit the most significant `BIT_DEPTH` bits of every channel.
    ///
    /// For full-range 8-bit sources shown at a lower depth without a gamma
    /// table scaled to that depth.
    #[must_use]
    pub const fn with_msb_planes(mut self) -> Self {
        self.msb_planes = true;
        self
    }

    pub const fn pin_order(&self) -> PinOrder {
        self.pin_order
    }

    pub const fn msb_planes(&self) -> bool {
        self.msb_planes
    }

    pub const fn bit_depth(&self) -> usize {
        BIT_DEPTH
    }

    /// Number of pixels an output buffer of `output_len` bytes encodes.
    ///
    /// The length must be a whole number of planes.
    pub const fn pixel_count(output_len: usize) -> Result<usize, FrameError> {
        let planes_len = output_len - output_len % BIT_DEPTH;
        if planes_len != output_len {
            return Err(FrameError::SizeMismatch {
                expected: planes_len,
                actual: output_len,
            });
        }
        Ok(output_len / BIT_DEPTH * 2)
    }

    /// Encode an RGB888 byte frame (3 bytes per pixel)
    pub fn load_rgb888(&self, input: &[u8], output: &mut [u8]) -> Result<(), FrameError> {
        let pixel_count = Self::pixel_count(output.len())?;
        FrameError::check_len(pixel_count * 3, input.len())?;

        let stride = pixel_count / 2;
        let (top, bottom) = input.split_at(stride * 3);
        for (pair, (t, b)) in top.chunks_exact(3).zip(bottom.chunks_exact(3)).enumerate() {
            let top = self.correct(Rgb::new(t[0], t[1], t[2]));
            let bottom = self.correct(Rgb::new(b[0], b[1], b[2]));
            scatter(output, pair, stride, &self.pack(top, bottom));
        }

        Ok(())
    }

    /// Encode a typed RGB frame, same layout as [`Self::load_rgb888`]
    pub fn load_rgb(&self, input: &[Rgb], output: &mut [u8]) -> Result<(), FrameError> {
        let pixel_count = Self::pixel_count(output.len())?;
        FrameError::check_len(pixel_count, input.len())?;

        let stride = pixel_count / 2;
        let (top, bottom) = input.split_at(stride);
        for (pair, (t, b)) in top.iter().zip(bottom).enumerate() {
            let planes = self.pack(self.correct(*t), self.correct(*b));
            scatter(output, pair, stride, &planes);
        }

        Ok(())
    }

    /// Encode a little-endian RGB565 frame (2 bytes per pixel)
    pub fn load_rgb565(&self, input: &[u8], output: &mut [u8]) -> Result<(), FrameError> {
        let pixel_count = Self::pixel_count(output.len())?;
        FrameError::check_len(pixel_count * 2, input.len())?;

        let stride = pixel_count / 2;
        let (top, bottom) = input.split_at(stride * 2);
        for (pair, (t, b)) in top.chunks_exact(2).zip(bottom.chunks_exact(2)).enumerate() {
            let top = unpack_rgb565(u16::from_le_bytes([t[0], t[1]]));
            let bottom = unpack_rgb565(u16::from_le_bytes([b[0], b[1]]));
            let planes = self.pack(self.correct(top), self.correct(bottom));
            scatter(output, pair, stride, &planes);
        }

        Ok(())
    }

    /// Encode a raw three-channel frame whose samples span `0..=max_value`.
    ///
    /// Samples are one byte when `max_value < 256`, otherwise two big-endian
    /// bytes. Each sample is rescaled to `floor(v * 255 / max_value)` and the
    /// most significant `BIT_DEPTH` bits are emitted. The gamma table is not
    /// applied.
    pub fn load_ppm(
        &self,
        input: &[u8],
        output: &mut [u8],
        max_value: u16,
    ) -> Result<(), FrameError> {
        let rescaler = Rescaler::new(max_value)
            .ok_or(FrameError::InvalidParameter("max_value must be positive"))?;
        let pixel_count = Self::pixel_count(output.len())?;
        let pixel_len = 3 * bytes_per_sample(max_value);
        FrameError::check_len(pixel_count * pixel_len, input.len())?;

        let read_pixel = |bytes: &[u8]| -> Rgb {
            let sample = |channel: usize| -> u16 {
                if pixel_len == 3 {
                    u16::from(bytes[channel])
                } else {
                    u16::from_be_bytes([bytes[channel * 2], bytes[channel * 2 + 1]])
                }
            };
            Rgb::new(
                rescaler.rescale(sample(0)),
                rescaler.rescale(sample(1)),
                rescaler.rescale(sample(2)),
            )
        };

        let stride = pixel_count / 2;
        let (top, bottom) = input.split_at(stride * pixel_len);
        let pairs = top.chunks_exact(pixel_len).zip(bottom.chunks_exact(pixel_len));
        for (pair, (t, b)) in pairs.enumerate() {
            let planes =
                pack_pixel_pair_msb::<BIT_DEPTH>(read_pixel(t), read_pixel(b), self.pin_order);
            scatter(output, pair, stride, &planes);
        }

        Ok(())
    }

    /// Zero a bitplane buffer, see [`clear`]
    pub fn clear(&self, output: &mut [u8]) {
        clear(output);
    }

    /// Read back the pixel pair `pair` from an encoded buffer.
    ///
    /// Inverse of the RGB888 packing before gamma: channel bit `i` comes from
    /// plane `i`, or bit `i + (8 - BIT_DEPTH)` with MSB planes. Returns `None`
    /// when `pair` is outside the buffer.
    pub fn decode_pixel_pair(&self, bitplanes: &[u8], pair: usize) -> Option<(Rgb, Rgb)> {
        let stride = bitplanes.len() / BIT_DEPTH;
        if pair >= stride {
            return None;
        }

        let [r1, g1, b1, r2, g2, b2] = self.pin_order.shifts();
        let offset = if self.msb_planes { 8 - BIT_DEPTH } else { 0 };
        let mut top = Rgb::default();
        let mut bottom = Rgb::default();
        for plane in 0..BIT_DEPTH {
            let byte = bitplanes[plane * stride + pair];
            let bit = plane + offset;
            top.r |= ((byte >> r1) & 1) << bit;
            top.g |= ((byte >> g1) & 1) << bit;
            top.b |= ((byte >> b1) & 1) << bit;
            bottom.r |= ((byte >> r2) & 1) << bit;
            bottom.g |= ((byte >> g2) & 1) << bit;
            bottom.b |= ((byte >> b2) & 1) << bit;
        }
        Some((top, bottom))
    }

    #[inline]
    fn pack(&self, top: Rgb, bottom: Rgb) -> [u8; BIT_DEPTH] {
        if self.msb_planes {
            pack_pixel_pair_msb::<BIT_DEPTH>(top, bottom, self.pin_order)
        } else {
            pack_pixel_pair::<BIT_DEPTH>(top, bottom, self.pin_order)
        }
    }

    #[inline]
    fn correct(&self, color: Rgb) -> Rgb {
        match self.gamma {
            Some(lut) => Rgb::new(lut.apply(color.r), lut.apply(color.g), lut.apply(color.b)),
            None => color,
        }
    }
}

/// Write the planes of one pixel pair at their strided positions
#[inline]
fn scatter(output: &mut [u8], pair: usize, stride: usize, planes: &[u8]) {
    for (plane, byte) in planes.iter().enumerate() {
        output[plane * stride + pair] = *byte;
    }
}

/// Front and back bitplane buffers.
///
/// The panel driver scans the front buffer while the next frame is encoded
/// into the back buffer; [`DoubleBuffer::flip`] swaps them.
#[derive(Debug, Clone)]
pub struct DoubleBuffer<const N: usize> {
    buffers: [[u8; N]; 2],
    active: usize,
}

impl<const N: usize> Default for DoubleBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DoubleBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buffers: [[0; N]; 2],
            active: 0,
        }
    }

    /// Buffer currently shown on the panel
    pub const fn front(&self) -> &[u8; N] {
        &self.buffers[self.active]
    }

    /// Buffer the next frame is written to
    pub fn back_mut(&mut self) -> &mut [u8; N] {
        &mut self.buffers[1 - self.active]
    }

    pub const fn back(&self) -> &[u8; N] {
        &self.buffers[1 - self.active]
    }

    /// Index of the front buffer (0 or 1)
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Swap front and back
    pub fn flip(&mut self) {
        self.active = 1 - self.active;
    }
}
