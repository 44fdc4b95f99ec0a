//! Tick scheduling for platforms that drive everything from one timer loop.
//!
//! On the real board the periodic tick is an interrupt and the cooperative
//! loop sleeps with `wfi`; this scheduler is the portable rendering of that
//! pair for hosts and single-task runtimes. The caller is responsible for
//! sleeping until the returned deadline between calls.

use embassy_time::{Duration, Instant};

use crate::config::FPS;
use crate::lamp::{Lamp, LoopStatus};
use crate::{ButtonInput, Mbi5043Bus};

/// Duration of one tick at the fixed frame rate.
pub const TICK_DURATION: Duration = Duration::from_millis(1000 / FPS as u64);

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives a [`Lamp`] at the fixed tick rate with drift correction.
///
/// Each tick runs the periodic context first (ship the previous frame),
/// then the cooperative context (sample the button, produce the next
/// frame), matching the interrupt/mainloop ordering on hardware.
pub struct TickScheduler<B: Mbi5043Bus, I: ButtonInput, const N: usize> {
    lamp: Lamp<B, N>,
    button: I,
    next_tick: Instant,
    tick_duration: Duration,
}

impl<B: Mbi5043Bus, I: ButtonInput, const N: usize> TickScheduler<B, I, N> {
    /// Schedule `lamp` at the default tick rate.
    pub fn new(lamp: Lamp<B, N>, button: I) -> Self {
        Self::with_tick_duration(lamp, button, TICK_DURATION)
    }

    /// Schedule `lamp` with a custom tick duration.
    pub fn with_tick_duration(lamp: Lamp<B, N>, button: I, tick_duration: Duration) -> Self {
        Self {
            lamp,
            button,
            next_tick: Instant::from_millis(0),
            tick_duration,
        }
    }

    /// Run one tick and return the loop status plus timing information.
    ///
    /// If we have fallen more than two ticks behind, the backlog is skipped
    /// rather than replayed as a catch-up burst.
    pub fn tick(&mut self, now: Instant) -> (LoopStatus, TickResult) {
        let max_drift = self.tick_duration.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift {
            self.next_tick = now;
        }

        self.lamp.frame_tick();
        let pressed = self.button.is_pressed();
        let status = self.lamp.poll(pressed);

        self.next_tick += self.tick_duration;
        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        (
            status,
            TickResult {
                next_deadline: self.next_tick,
                sleep_duration,
            },
        )
    }

    /// The scheduled lamp.
    pub const fn lamp(&self) -> &Lamp<B, N> {
        &self.lamp
    }

    /// Mutable access to the scheduled lamp.
    pub fn lamp_mut(&mut self) -> &mut Lamp<B, N> {
        &mut self.lamp
    }
}
