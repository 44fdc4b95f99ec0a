//! Lamp orchestrator: ties driver, effects, RNG and control together.
//!
//! Two entry points model the two execution contexts of the firmware:
//! [`Lamp::frame_tick`] belongs to the fixed-rate periodic tick and ships
//! the transmit buffer; [`Lamp::poll`] belongs to the cooperative loop and
//! produces the next frame. They meet only at the [`FrameGate`].

use crate::Mbi5043Bus;
use crate::config::{BRIGHTNESS_LEVELS, DEFAULT_BRIGHTNESS_LEVEL, LONG_PRESS, PWR_PRESS};
use crate::control::{ControlEvent, Controller};
use crate::driver::Mbi5043;
use crate::effect::{CATALOG_LEN, EffectSlot, Indicator, catalog};
use crate::effect::Effect as _;
use crate::rng::Pcg32;
use crate::sync::FrameGate;

/// Outcome of one cooperative-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopStatus {
    /// Keep going.
    Running,
    /// The control machine requested power-down; the driver is stopped and
    /// the caller should tear down and enter its low-power halt.
    Standby,
}

/// What the draw buffer currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Display {
    /// The selected ambient effect.
    Effect,
    /// The menu/hold feedback indicator.
    Indicator,
}

/// The whole lamp: driver, effect catalog, control state and shared RNG.
pub struct Lamp<B: Mbi5043Bus, const N: usize> {
    driver: Mbi5043<B, N>,
    effects: [EffectSlot<N>; CATALOG_LEN],
    indicator: Indicator,
    display: Display,
    control: Controller,
    rng: Pcg32,
    gate: FrameGate,
    active: usize,
    frame: u32,
}

impl<B: Mbi5043Bus, const N: usize> Lamp<B, N> {
    /// A lamp with the deterministic default RNG stream.
    pub fn new(bus: B) -> Self {
        Self::build(bus, Pcg32::new())
    }

    /// A lamp reseeded once from `entropy` so the boot effect (and all
    /// effect randomness) varies between power-ups.
    pub fn with_entropy<F: FnMut() -> u32>(bus: B, entropy: F) -> Self {
        let mut rng = Pcg32::new();
        rng.seed(entropy);
        Self::build(bus, rng)
    }

    fn build(bus: B, mut rng: Pcg32) -> Self {
        let active = rng.next_below(CATALOG_LEN as u32) as usize;
        Self {
            driver: Mbi5043::new(bus, BRIGHTNESS_LEVELS[usize::from(DEFAULT_BRIGHTNESS_LEVEL)]),
            effects: catalog(),
            indicator: Indicator::new(0, false),
            display: Display::Effect,
            control: Controller::new(CATALOG_LEN, active, DEFAULT_BRIGHTNESS_LEVEL),
            rng,
            gate: FrameGate::new(),
            active,
            frame: 0,
        }
    }

    /// Enable the driver outputs. Call once after construction.
    pub fn start(&mut self) {
        self.driver.start();
    }

    /// Periodic-tick context: ship the transmit buffer.
    ///
    /// If the cooperative loop has not staged a new frame since the last
    /// tick, the previous transmit buffer goes out again unchanged; a
    /// dropped update, not an error.
    pub fn frame_tick(&mut self) {
        let _fresh = self.gate.consume();
        self.driver.transmit();
    }

    /// Cooperative-loop context: produce the next frame.
    ///
    /// Skips immediately while a staged frame is still waiting to be
    /// shipped. Otherwise samples the control machine, applies its event,
    /// renders the active display into the draw buffer and stages it.
    pub fn poll(&mut self, pressed: bool) -> LoopStatus {
        if self.gate.is_pending() {
            return LoopStatus::Running;
        }

        self.frame = self.frame.wrapping_add(1);
        let event = self.control.update(pressed, self.frame);
        if !self.apply(event) {
            return LoopStatus::Standby;
        }

        match self.display {
            Display::Effect => {
                self.effects[self.active].tick(self.frame, self.driver.buffer(), &mut self.rng);
            }
            Display::Indicator => {
                self.indicator.tick(self.frame, self.driver.buffer(), &mut self.rng);
            }
        }

        self.driver.stage_frame();
        self.gate.publish();
        LoopStatus::Running
    }

    /// Apply a control event; returns `false` on power-down.
    fn apply(&mut self, event: ControlEvent) -> bool {
        match event {
            ControlEvent::None => {}
            ControlEvent::NextEffect(index) => {
                #[cfg(feature = "defmt")]
                defmt::info!("effect -> {}", self.effects[index].name());
                self.active = index;
                self.driver.clear_buffers();
                self.display = Display::Effect;
            }
            ControlEvent::EnterBrightnessMenu(level) => {
                self.indicator.set_count(level + 1);
                self.driver.clear_buffers();
                self.display = Display::Indicator;
            }
            ControlEvent::BrightnessChanged(level) => {
                self.driver.set_brightness(BRIGHTNESS_LEVELS[usize::from(level)]);
                self.indicator.set_count(level + 1);
            }
            ControlEvent::LeaveBrightnessMenu(index) => {
                self.active = index;
                self.driver.clear_buffers();
                self.display = Display::Effect;
            }
            ControlEvent::HoldProgress(excess) => {
                self.indicator.set_count(Self::hold_feedback(excess));
                self.display = Display::Indicator;
            }
            ControlEvent::PowerOff => {
                self.driver.stop();
                return false;
            }
        }
        true
    }

    /// Lit-LED count for hold-to-power-off feedback: one LED just past the
    /// long-press threshold, the whole strip as the power press lands.
    fn hold_feedback(excess: u32) -> u8 {
        let span = PWR_PRESS - LONG_PRESS;
        let lit = 1 + excess * N as u32 / span;
        lit.min(N as u32) as u8
    }

    /// Running frame number (cooperative-loop ticks).
    pub const fn frame(&self) -> u32 {
        self.frame
    }

    /// Index of the active catalog effect.
    pub const fn active_effect(&self) -> usize {
        self.active
    }

    /// The control state machine.
    pub const fn controller(&self) -> &Controller {
        &self.control
    }

    /// The LED driver.
    pub const fn driver(&self) -> &Mbi5043<B, N> {
        &self.driver
    }

    /// Mutable driver access, for host harnesses and tests.
    pub fn driver_mut(&mut self) -> &mut Mbi5043<B, N> {
        &mut self.driver
    }
}
