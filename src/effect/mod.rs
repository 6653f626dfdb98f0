//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and renders a full RGB frame
//! from the frame counter, the panel geometry and, for the spiral effects,
//! per-pixel polar tables.

mod balatro;
mod fire;
mod plasma;
mod spiral;

pub use balatro::{BalatroEffect, balatro_band, render_balatro};
pub use fire::{FireEffect, FireState, fire_hash, ignite_fire, render_fire};
pub use plasma::{PlasmaEffect, plasma_hue, render_plasma};
pub use spiral::{SpiralEffect, render_spiral};

use crate::{color::Rgb, geometry::PanelGeometry, polar::PolarTables};

const EFFECT_NAME_PLASMA: &str = "plasma";
const EFFECT_NAME_FIRE: &str = "fire";
const EFFECT_NAME_SPIRAL: &str = "spiral";
const EFFECT_NAME_BALATRO: &str = "balatro";

const EFFECT_ID_PLASMA: u8 = 0;
const EFFECT_ID_FIRE: u8 = 1;
const EFFECT_ID_SPIRAL: u8 = 2;
const EFFECT_ID_BALATRO: u8 = 3;

/// Default spiral tightness for spiral and Balatro
pub const DEFAULT_SPIN_SPEED: u8 = 4;
/// Default Balatro warp strength
pub const DEFAULT_WARP_AMOUNT: u8 = 14;

/// Inputs shared by every effect for one frame
#[derive(Debug)]
pub struct FrameContext<'a> {
    /// Panel dimensions
    pub geometry: PanelGeometry,
    /// Frame counter, wrapping at 65536
    pub time: u16,
    /// Angle and radius per pixel
    pub polar: PolarTables<'a>,
    /// Persistent fire intensities, one per pixel
    pub heat: &'a mut [u8],
}

pub trait Effect {
    /// Render a single frame
    fn render(&mut self, ctx: &mut FrameContext<'_>, frame: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Tunable parameters shared by the spiral effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectParams {
    /// Spiral tightness for spiral and Balatro
    pub spin_speed: u8,
    /// Balatro warp strength
    pub warp_amount: u8,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            spin_speed: DEFAULT_SPIN_SPEED,
            warp_amount: DEFAULT_WARP_AMOUNT,
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, Copy)]
pub enum EffectSlot {
    /// Sine plasma
    Plasma(PlasmaEffect),
    /// Cellular fire
    Fire(FireEffect),
    /// Rainbow spiral
    Spiral(SpiralEffect),
    /// Warped two-tone swirl
    Balatro(BalatroEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Plasma = EFFECT_ID_PLASMA,
    Fire = EFFECT_ID_FIRE,
    Spiral = EFFECT_ID_SPIRAL,
    Balatro = EFFECT_ID_BALATRO,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Plasma(PlasmaEffect::new())
    }
}

impl EffectId {
    /// All effects, in id order
    pub const ALL: [Self; 4] = [Self::Plasma, Self::Fire, Self::Spiral, Self::Balatro];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_PLASMA => Self::Plasma,
            EFFECT_ID_FIRE => Self::Fire,
            EFFECT_ID_SPIRAL => Self::Spiral,
            EFFECT_ID_BALATRO => Self::Balatro,
            _ => return None,
        })
    }

    pub fn to_slot(self, params: EffectParams) -> EffectSlot {
        match self {
            Self::Plasma => EffectSlot::Plasma(PlasmaEffect::new()),
            Self::Fire => EffectSlot::Fire(FireEffect::new()),
            Self::Spiral => {
                EffectSlot::Spiral(SpiralEffect::new().with_tightness(params.spin_speed))
            }
            Self::Balatro => EffectSlot::Balatro(
                BalatroEffect::new()
                    .with_spin_speed(params.spin_speed)
                    .with_warp_amount(params.warp_amount),
            ),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plasma => EFFECT_NAME_PLASMA,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::Spiral => EFFECT_NAME_SPIRAL,
            Self::Balatro => EFFECT_NAME_BALATRO,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_PLASMA => Some(Self::Plasma),
            EFFECT_NAME_FIRE => Some(Self::Fire),
            EFFECT_NAME_SPIRAL => Some(Self::Spiral),
            EFFECT_NAME_BALATRO => Some(Self::Balatro),
            _ => None,
        }
    }

    /// Whether the effect reads the polar tables
    pub const fn uses_polar_tables(self) -> bool {
        matches!(self, Self::Spiral | Self::Balatro)
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render(&mut self, ctx: &mut FrameContext<'_>, frame: &mut [Rgb]) {
        match self {
            Self::Plasma(effect) => effect.render(ctx, frame),
            Self::Fire(effect) => effect.render(ctx, frame),
            Self::Spiral(effect) => effect.render(ctx, frame),
            Self::Balatro(effect) => effect.render(ctx, frame),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Plasma(effect) => Effect::reset(effect),
            Self::Fire(effect) => Effect::reset(effect),
            Self::Spiral(effect) => Effect::reset(effect),
            Self::Balatro(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Plasma(_) => EffectId::Plasma,
            Self::Fire(_) => EffectId::Fire,
            Self::Spiral(_) => EffectId::Spiral,
            Self::Balatro(_) => EffectId::Balatro,
        }
    }

    /// Update the spiral tightness of the spiral effects
    pub fn set_spin_speed(&mut self, spin_speed: u8) {
        match self {
            Self::Spiral(effect) => effect.set_tightness(spin_speed),
            Self::Balatro(effect) => effect.set_spin_speed(spin_speed),
            Self::Plasma(_) | Self::Fire(_) => {}
        }
    }

    /// Update the warp strength of the Balatro effect
    pub fn set_warp_amount(&mut self, warp_amount: u8) {
        if let Self::Balatro(effect) = self {
            effect.set_warp_amount(warp_amount);
        }
    }
}
