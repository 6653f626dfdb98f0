#![no_std]

pub mod bitplanes;
pub mod color;
pub mod effect;
pub mod error;
pub mod frame_scheduler;
pub mod gamma;
pub mod geometry;
pub mod intent;
pub mod math8;
pub mod polar;
pub mod renderer;
pub mod tables;

pub use bitplanes::{BitplaneEncoder, COLOR_BIT_DEPTH, DoubleBuffer, PinOrder};
pub use effect::{
    DEFAULT_SPIN_SPEED, DEFAULT_WARP_AMOUNT, Effect, EffectId, EffectParams, EffectSlot, FrameContext,
};
pub use error::FrameError;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use gamma::GammaLut;
pub use geometry::PanelGeometry;
pub use intent::{EffectIntent, IntentChannel, IntentEffects, IntentReceiver, IntentSender};
pub use polar::{PolarTables, fill_polar_tables};
pub use renderer::{RenderState, Renderer, RendererConfig};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract HUB75 panel driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Shift one frame of bitplanes out to the panel
    fn write(&mut self, bitplanes: &[u8]);
}
