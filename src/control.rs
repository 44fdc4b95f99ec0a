//! Button, menu and power control state machine.
//!
//! One raw button sample goes in per tick, at most one [`ControlEvent`]
//! comes out; the orchestrator applies events to the driver and effect
//! catalog. All transitions are total functions of (state, sample, counter)
//! and every duration is a tick count from [`crate::config`].

use crate::config::{APO_FRAMES, DEBOUNCE_DELAY, LONG_PRESS, PWR_PRESS};

/// Debounce super-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonPhase {
    /// Idle, accepting a new press.
    Waiting,
    /// Button down, counting held frames.
    Pressed,
    /// Button released, waiting out the debounce dead time.
    Released,
    /// Power press seen; waiting out the dead time before standby.
    PowerOffDelay,
}

/// Menu sub-state layered over the debounce cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Menu {
    /// Short press cycles effects, long press enters brightness.
    Main,
    /// Short press steps brightness, long press commits.
    Bright,
}

/// What the orchestrator should do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    /// Nothing to apply.
    None,
    /// Activate the effect at this catalog index and clear the buffers.
    NextEffect(usize),
    /// Show the brightness indicator for this level.
    EnterBrightnessMenu(u8),
    /// Brightness level changed; update the driver scale and the indicator.
    BrightnessChanged(u8),
    /// Brightness committed; re-activate the effect at this index.
    LeaveBrightnessMenu(usize),
    /// Button held past the long-press threshold by this many ticks;
    /// escalate the visual feedback.
    HoldProgress(u32),
    /// Terminate the control loop and power down.
    PowerOff,
}

/// The full control state: debounce phase, menu, selection and deadlines.
#[derive(Debug, Clone)]
pub struct Controller {
    phase: ButtonPhase,
    menu: Menu,
    frames_held: u32,
    effect_index: usize,
    catalog_len: usize,
    brightness_level: u8,
    apo_deadline: u32,
}

impl Controller {
    /// A controller cycling through `catalog_len` effects, starting at
    /// `effect_index` with `brightness_level`.
    pub const fn new(catalog_len: usize, effect_index: usize, brightness_level: u8) -> Self {
        Self {
            phase: ButtonPhase::Waiting,
            menu: Menu::Main,
            frames_held: 0,
            effect_index,
            catalog_len,
            brightness_level,
            apo_deadline: APO_FRAMES,
        }
    }

    /// Current debounce phase.
    pub const fn phase(&self) -> ButtonPhase {
        self.phase
    }

    /// Current menu sub-state.
    pub const fn menu(&self) -> Menu {
        self.menu
    }

    /// Index of the selected effect.
    pub const fn effect_index(&self) -> usize {
        self.effect_index
    }

    /// Selected brightness level, `0..=6`.
    pub const fn brightness_level(&self) -> u8 {
        self.brightness_level
    }

    /// Advance the state machine by one tick.
    ///
    /// `pressed` is the raw button sample for this tick and `frame` the
    /// running tick number. Called exactly once per cooperative iteration.
    pub fn update(&mut self, pressed: bool, frame: u32) -> ControlEvent {
        // Every tick the button is seen down pushes the auto-power-off
        // deadline out; reaching it ends the loop no matter the state.
        if pressed {
            self.apo_deadline = frame.wrapping_add(APO_FRAMES);
        }
        if frame >= self.apo_deadline {
            #[cfg(feature = "defmt")]
            defmt::info!("auto power off at frame {}", frame);
            return ControlEvent::PowerOff;
        }

        match self.phase {
            ButtonPhase::Waiting => {
                if pressed {
                    self.phase = ButtonPhase::Pressed;
                    self.frames_held = 1;
                }
                ControlEvent::None
            }
            ButtonPhase::Pressed => {
                if pressed {
                    self.frames_held += 1;
                    if self.frames_held >= PWR_PRESS {
                        #[cfg(feature = "defmt")]
                        defmt::info!("waiting to standby");
                        self.phase = ButtonPhase::PowerOffDelay;
                        self.frames_held = 0;
                        ControlEvent::None
                    } else if self.frames_held > LONG_PRESS {
                        ControlEvent::HoldProgress(self.frames_held - LONG_PRESS)
                    } else {
                        ControlEvent::None
                    }
                } else {
                    let held = self.frames_held;
                    self.phase = ButtonPhase::Released;
                    self.frames_held = 0;
                    if held <= LONG_PRESS {
                        #[cfg(feature = "defmt")]
                        defmt::debug!("short press");
                        self.short_press()
                    } else {
                        #[cfg(feature = "defmt")]
                        defmt::debug!("long press ({} frames)", held);
                        self.long_press()
                    }
                }
            }
            ButtonPhase::Released => {
                self.frames_held += 1;
                if self.frames_held >= DEBOUNCE_DELAY {
                    self.phase = ButtonPhase::Waiting;
                    self.frames_held = 0;
                }
                ControlEvent::None
            }
            ButtonPhase::PowerOffDelay => {
                self.frames_held += 1;
                if self.frames_held >= DEBOUNCE_DELAY {
                    #[cfg(feature = "defmt")]
                    defmt::info!("entering standby");
                    ControlEvent::PowerOff
                } else {
                    ControlEvent::None
                }
            }
        }
    }

    fn short_press(&mut self) -> ControlEvent {
        match self.menu {
            Menu::Main => {
                self.effect_index = (self.effect_index + 1) % self.catalog_len;
                ControlEvent::NextEffect(self.effect_index)
            }
            Menu::Bright => {
                self.brightness_level = match self.brightness_level {
                    0 => 6,
                    level => level - 1,
                };
                ControlEvent::BrightnessChanged(self.brightness_level)
            }
        }
    }

    fn long_press(&mut self) -> ControlEvent {
        match self.menu {
            Menu::Main => {
                self.menu = Menu::Bright;
                ControlEvent::EnterBrightnessMenu(self.brightness_level)
            }
            Menu::Bright => {
                self.menu = Menu::Main;
                ControlEvent::LeaveBrightnessMenu(self.effect_index)
            }
        }
    }
}
