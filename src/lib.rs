#![no_std]

pub mod cheby;
pub mod config;
pub mod control;
pub mod driver;
pub mod effect;
pub mod lamp;
pub mod math16;
pub mod rng;
pub mod scheduler;
pub mod sync;

pub use cheby::Chebyshev;
pub use control::{ButtonPhase, ControlEvent, Controller, Menu};
pub use driver::Mbi5043;
pub use effect::{Effect, EffectSlot};
pub use lamp::{Lamp, LoopStatus};
pub use rng::Pcg32;
pub use scheduler::{TickResult, TickScheduler};
pub use sync::FrameGate;

pub use embassy_time::{Duration, Instant};

/// Wire interface to the MBI5043 LED driver chip.
///
/// Implement this trait to bind the three serial lines and the grayscale
/// reference clock to real pins/peripherals. The chip samples the data line
/// on the rising clock edge; the driver only relies on call order, never on
/// wall-clock delays.
pub trait Mbi5043Bus {
    /// Drive the serial clock line (DCLK).
    fn set_clock(&mut self, high: bool);
    /// Drive the serial data line (SDI).
    fn set_data(&mut self, high: bool);
    /// Drive the latch line (LE).
    fn set_latch(&mut self, high: bool);
    /// Supply or withhold the grayscale reference clock (GCLK).
    ///
    /// Treated as an opaque on/off peripheral; typically a timer output.
    fn set_grayscale_clock(&mut self, enabled: bool);
}

/// The single push-button input.
///
/// Sampled once per cooperative-loop tick. Debouncing is done in software by
/// [`Controller`], so implementations should return the raw line level.
pub trait ButtonInput {
    /// Current button level; `true` while pressed.
    fn is_pressed(&mut self) -> bool;
}
