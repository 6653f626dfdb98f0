//! Steering a running renderer from another core or interrupt
//!
//! The render loop owns every buffer and drains pending intents at the start
//! of each frame. Senders only ever touch the bounded queue, which is
//! guarded by a critical section.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::effect::EffectId;

/// A requested change to the running effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectIntent {
    /// Start (or restart) an effect from frame zero
    Start(EffectId),
    /// Stop rendering and blank the panel
    Stop,
    /// Change the spiral tightness
    SetSpinSpeed(u8),
    /// Change the Balatro warp strength
    SetWarpAmount(u8),
}

/// Whether the renderer should start an effect or go dark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Start(EffectId),
    Stop,
}

/// Net result of every intent drained in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentEffects {
    /// Last start/stop request, if any
    pub playback: Option<Playback>,
    /// Last spin speed requested
    pub spin_speed: Option<u8>,
    /// Last warp amount requested
    pub warp_amount: Option<u8>,
}

impl IntentEffects {
    /// Check if anything needs to be applied
    pub const fn has_effects(&self) -> bool {
        self.playback.is_some() || self.spin_speed.is_some() || self.warp_amount.is_some()
    }

    /// Fold one intent in; later intents override earlier ones
    pub fn merge(&mut self, intent: EffectIntent) {
        match intent {
            EffectIntent::Start(id) => self.playback = Some(Playback::Start(id)),
            EffectIntent::Stop => self.playback = Some(Playback::Stop),
            EffectIntent::SetSpinSpeed(value) => self.spin_speed = Some(value),
            EffectIntent::SetWarpAmount(value) => self.warp_amount = Some(value),
        }
    }
}

/// Bounded intent queue holding at most `SIZE` pending intents
pub struct IntentChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<EffectIntent, SIZE>>>,
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    /// Queue an intent, handing it back if the queue is full
    pub fn try_send(&self, intent: EffectIntent) -> Result<(), EffectIntent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().push_back(intent))
    }

    /// Take the oldest pending intent
    pub fn try_receive(&self) -> Option<EffectIntent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of pending intents
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sending half of an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    pub fn try_send(&self, intent: EffectIntent) -> Result<(), EffectIntent> {
        self.channel.try_send(intent)
    }

    pub fn start(&self, effect: EffectId) -> Result<(), EffectIntent> {
        self.try_send(EffectIntent::Start(effect))
    }

    pub fn stop(&self) -> Result<(), EffectIntent> {
        self.try_send(EffectIntent::Stop)
    }

    pub fn set_spin_speed(&self, spin_speed: u8) -> Result<(), EffectIntent> {
        self.try_send(EffectIntent::SetSpinSpeed(spin_speed))
    }

    pub fn set_warp_amount(&self, warp_amount: u8) -> Result<(), EffectIntent> {
        self.try_send(EffectIntent::SetWarpAmount(warp_amount))
    }
}

/// Receiving half of an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<EffectIntent> {
        self.channel.try_receive()
    }

    /// Drain every pending intent (non-blocking) into one set of changes
    pub fn drain(&self) -> IntentEffects {
        let mut effects = IntentEffects::default();
        while let Some(intent) = self.try_receive() {
            effects.merge(intent);
        }
        effects
    }
}
