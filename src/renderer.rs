#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bitplanes::{BitplaneEncoder, COLOR_BIT_DEPTH, PinOrder};
use crate::color::Rgb;
use crate::effect::{EffectId, EffectParams, EffectSlot, FireState, FrameContext};
use crate::error::FrameError;
use crate::gamma::GammaLut;
use crate::geometry::PanelGeometry;
use crate::intent::{IntentEffects, IntentReceiver, Playback};
use crate::polar::{PolarTables, fill_polar_tables};

/// Configuration for the renderer
#[derive(Clone, Copy)]
pub struct RendererConfig<'a> {
    pub geometry: PanelGeometry,
    /// Effect to start with, or `None` to start dark
    pub effect: Option<EffectId>,
    pub params: EffectParams,
    pub pin_order: PinOrder,
    pub gamma: Option<&'a GammaLut>,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderState {
    effect: EffectSlot,
    params: EffectParams,
    running: bool,
    time: u16,
}

impl RenderState {
    pub fn effect_id(&self) -> EffectId {
        self.effect.id()
    }

    pub const fn params(&self) -> EffectParams {
        self.params
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Frame counter of the next frame
    pub const fn time(&self) -> u16 {
        self.time
    }
}

/// Effect renderer - drives one panel from effects to bitplanes
///
/// Owns every buffer an effect needs, sized for up to `MAX_PIXELS` pixels:
/// the RGB frame, the persistent fire intensities and the polar tables.
pub struct Renderer<
    'a,
    const MAX_PIXELS: usize,
    const INTENT_CHANNEL_SIZE: usize,
    const BIT_DEPTH: usize = COLOR_BIT_DEPTH,
> {
    // External dependencies and configuration
    intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
    encoder: BitplaneEncoder<'a, BIT_DEPTH>,
    geometry: PanelGeometry,

    // Internal state
    state: RenderState,
    frame_buffer: [Rgb; MAX_PIXELS],
    fire: FireState<MAX_PIXELS>,
    angle: [u8; MAX_PIXELS],
    radius: [u8; MAX_PIXELS],
    polar_ready: bool,
}

impl<'a, const MAX_PIXELS: usize, const INTENT_CHANNEL_SIZE: usize, const BIT_DEPTH: usize>
    Renderer<'a, MAX_PIXELS, INTENT_CHANNEL_SIZE, BIT_DEPTH>
{
    /// Create a new renderer listening on an intent channel
    ///
    /// Fails when the panel has more than `MAX_PIXELS` pixels.
    pub fn new(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &RendererConfig<'a>,
    ) -> Result<Self, FrameError> {
        if config.geometry.pixel_count() > MAX_PIXELS {
            return Err(FrameError::InvalidParameter("panel exceeds MAX_PIXELS"));
        }

        // Without a depth-scaled gamma table, show the top bits of each channel
        let encoder = BitplaneEncoder::new().with_pin_order(config.pin_order);
        let encoder = match config.gamma {
            Some(gamma) => encoder.with_gamma(gamma),
            None => encoder.with_msb_planes(),
        };

        let mut renderer = Self {
            intents,
            encoder,
            geometry: config.geometry,
            state: RenderState {
                effect: EffectSlot::default(),
                params: config.params,
                running: false,
                time: 0,
            },
            frame_buffer: [Rgb::default(); MAX_PIXELS],
            fire: FireState::new(),
            angle: [0; MAX_PIXELS],
            radius: [0; MAX_PIXELS],
            polar_ready: false,
        };
        if let Some(effect) = config.effect {
            renderer.start(effect)?;
        }
        Ok(renderer)
    }

    /// Use polar tables generated offline instead of computing them
    pub fn with_polar_tables(mut self, angle: &[u8], radius: &[u8]) -> Result<Self, FrameError> {
        let tables = PolarTables::new(self.geometry, angle, radius)?;
        let count = self.geometry.pixel_count();
        self.angle[..count].copy_from_slice(tables.angle());
        self.radius[..count].copy_from_slice(tables.radius());
        self.polar_ready = true;
        Ok(self)
    }

    pub const fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    pub const fn state(&self) -> &RenderState {
        &self.state
    }

    /// Bitplane buffer length [`Self::render`] expects
    pub const fn bitplane_len(&self) -> usize {
        self.geometry.bitplane_len(BIT_DEPTH)
    }

    /// Last rendered RGB frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer[..self.geometry.pixel_count()]
    }

    /// Persistent fire intensities
    pub fn fire_state(&self) -> &FireState<MAX_PIXELS> {
        &self.fire
    }

    /// Process one frame
    ///
    /// Applies pending intents, renders the current effect and encodes it
    /// into `bitplanes`. When stopped, `bitplanes` is cleared instead.
    pub fn render(&mut self, bitplanes: &mut [u8]) -> Result<(), FrameError> {
        FrameError::check_len(self.bitplane_len(), bitplanes.len())?;
        let effects = self.intents.drain();
        self.apply_effects(&effects)?;

        if !self.state.running {
            self.encoder.clear(bitplanes);
            return Ok(());
        }

        let count = self.geometry.pixel_count();
        let mut ctx = FrameContext {
            geometry: self.geometry,
            time: self.state.time,
            polar: PolarTables::from_raw(&self.angle[..count], &self.radius[..count]),
            heat: self.fire.heat_for(self.geometry)?,
        };
        let frame = &mut self.frame_buffer[..count];
        self.state.effect.render(&mut ctx, frame);
        self.encoder.load_rgb(frame, bitplanes)?;

        self.state.time = self.state.time.wrapping_add(1);
        Ok(())
    }

    /// Start an effect from frame zero
    pub fn start(&mut self, effect: EffectId) -> Result<(), FrameError> {
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.start] starting effect {}", effect.as_str());

        if effect.uses_polar_tables() && !self.polar_ready {
            let count = self.geometry.pixel_count();
            fill_polar_tables(self.geometry, &mut self.angle[..count], &mut self.radius[..count])?;
            self.polar_ready = true;
        }

        self.state.effect = effect.to_slot(self.state.params);
        self.state.effect.reset();
        self.state.time = 0;
        self.state.running = true;
        Ok(())
    }

    /// Stop rendering; following frames are blank
    pub fn stop(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.stop] stopping effect {}", self.state.effect_id().as_str());

        self.state.running = false;
    }

    pub fn set_spin_speed(&mut self, spin_speed: u8) {
        self.state.params.spin_speed = spin_speed;
        self.state.effect.set_spin_speed(spin_speed);
    }

    pub fn set_warp_amount(&mut self, warp_amount: u8) {
        self.state.params.warp_amount = warp_amount;
        self.state.effect.set_warp_amount(warp_amount);
    }

    /// Apply changes collected from the intent channel
    fn apply_effects(&mut self, effects: &IntentEffects) -> Result<(), FrameError> {
        if !effects.has_effects() {
            return Ok(());
        }

        if let Some(spin_speed) = effects.spin_speed {
            self.set_spin_speed(spin_speed);
        }
        if let Some(warp_amount) = effects.warp_amount {
            self.set_warp_amount(warp_amount);
        }
        match effects.playback {
            Some(Playback::Start(effect)) => self.start(effect)?,
            Some(Playback::Stop) => self.stop(),
            None => {}
        }
        Ok(())
    }
}
