//! Build-time configuration.
//!
//! Everything here is fixed at compile time: buffer sizes, the tick rate and
//! every duration derived from it. Durations are tick counts, not wall-clock
//! time.

/// Number of LEDs attached to the driver chain.
pub const NUM_LEDS: usize = 11;

/// Minimum LED brightness value.
pub const LED_MIN: u16 = 0x0000;
/// Maximum LED brightness value.
pub const LED_MAX: u16 = 0xffff;

/// Frames drawn per second; the rate of the periodic tick.
pub const FPS: u32 = 60;

/// Presses held longer than this (in ticks) classify as long presses.
pub const LONG_PRESS: u32 = FPS / 2;

/// Presses held at least this long (in ticks) power the lamp down.
pub const PWR_PRESS: u32 = FPS * 3;

/// Dead ticks after a button transition before the next one is accepted.
pub const DEBOUNCE_DELAY: u32 = FPS / 20;

/// Auto-power-off: ticks of button inactivity before the lamp shuts down.
pub const APO_FRAMES: u32 = FPS * 4 * 3600;

/// Gamma correction exponent.
pub const GAMMA: f32 = 2.8;
/// Gamma-correct frames on the way out by default.
pub const ENABLE_GAMMA: bool = true;

/// LED chase order: zig-zag starting bottom right, with the first LEDs of the
/// sequence repeated at the end so a chase tail wraps cleanly.
pub const LED_ORDER: [u8; 14] = [3, 4, 5, 6, 7, 8, 9, 10, 1, 0, 2, 8, 9, 10];

/// Output scale for each of the 7 brightness levels, dimmest first.
///
/// Roughly perceptual steps; level 6 is full scale.
pub const BRIGHTNESS_LEVELS: [u16; 7] = [
    0x00ff, 0x03ff, 0x0fff, 0x2fff, 0x5fff, 0xafff, 0xffff,
];

/// Brightness level selected at boot.
pub const DEFAULT_BRIGHTNESS_LEVEL: u8 = 6;
