//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::bitplanes::{COLOR_BIT_DEPTH, DoubleBuffer};
use crate::error::FrameError;
use crate::renderer::Renderer;
use crate::OutputDriver;

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Renders into the back half of a [`DoubleBuffer`] holding `BUFFER_LEN`
/// bitplane bytes, flips it and hands the front half to the output driver.
/// Panels smaller than `BUFFER_LEN` use a prefix of each buffer.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::<_, 2048, 4, 8192>::new(renderer, driver)?;
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now))?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    const MAX_PIXELS: usize,
    const INTENT_CHANNEL_SIZE: usize,
    const BUFFER_LEN: usize,
    const BIT_DEPTH: usize = COLOR_BIT_DEPTH,
> {
    output: O,
    renderer: Renderer<'a, MAX_PIXELS, INTENT_CHANNEL_SIZE, BIT_DEPTH>,
    buffers: DoubleBuffer<BUFFER_LEN>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<
    'a,
    O: OutputDriver,
    const MAX_PIXELS: usize,
    const INTENT_CHANNEL_SIZE: usize,
    const BUFFER_LEN: usize,
    const BIT_DEPTH: usize,
> FrameScheduler<'a, O, MAX_PIXELS, INTENT_CHANNEL_SIZE, BUFFER_LEN, BIT_DEPTH>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(
        renderer: Renderer<'a, MAX_PIXELS, INTENT_CHANNEL_SIZE, BIT_DEPTH>,
        driver: O,
    ) -> Result<Self, FrameError> {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    ///
    /// Fails when the panel's bitplanes don't fit in `BUFFER_LEN` bytes.
    pub fn with_frame_duration(
        renderer: Renderer<'a, MAX_PIXELS, INTENT_CHANNEL_SIZE, BIT_DEPTH>,
        driver: O,
        frame_duration: Duration,
    ) -> Result<Self, FrameError> {
        if renderer.bitplane_len() > BUFFER_LEN {
            return Err(FrameError::SizeMismatch {
                expected: renderer.bitplane_len(),
                actual: BUFFER_LEN,
            });
        }

        Ok(Self {
            output: driver,
            renderer,
            buffers: DoubleBuffer::new(),
            next_frame: Instant::from_millis(0),
            frame_duration,
        })
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame into the back buffer
    /// 3. Flips the buffers and writes the front one to the output driver
    /// 4. Returns the deadline for the next frame
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, FrameError> {
        // Skip the backlog after long stalls instead of bursting to catch up
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let len = self.renderer.bitplane_len();
        self.renderer.render(&mut self.buffers.back_mut()[..len])?;
        self.buffers.flip();
        self.output.write(&self.buffers.front()[..len]);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_ticks(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Bitplanes most recently handed to the output driver
    pub fn front(&self) -> &[u8] {
        &self.buffers.front()[..self.renderer.bitplane_len()]
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, MAX_PIXELS, INTENT_CHANNEL_SIZE, BIT_DEPTH> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, MAX_PIXELS, INTENT_CHANNEL_SIZE, BIT_DEPTH> {
        &mut self.renderer
    }
}
