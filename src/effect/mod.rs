//! Effect engine with compile-time known variants.
//!
//! All effects live in an enum to avoid heap allocation and virtual
//! dispatch; the match at the call site is the whole dispatch mechanism.
//! Each effect is a small per-frame state machine that mutates the draw
//! buffer in place, exactly once per control-loop tick.

mod chase;
mod fill;
mod indicator;
mod ramp;
mod twinkle;

pub use chase::{Direction, OrderedChase, RandomChase};
pub use fill::{ConstantFill, RandomFill};
pub use indicator::Indicator;
pub use ramp::LinearRamp;
pub use twinkle::Twinkle;

use crate::config::{LED_MAX, LED_MIN, LED_ORDER};
use crate::rng::Pcg32;

/// A per-frame brightness generator.
///
/// `tick` mutates the draw buffer in place. Any randomness goes through the
/// shared generator so reseeding at boot varies every effect at once.
pub trait Effect {
    /// Render one frame into `fb`. `frame` is the running tick number.
    fn tick(&mut self, frame: u32, fb: &mut [u16], rng: &mut Pcg32);
}

/// The active effect slot: one variant per shipped effect family.
#[derive(Debug, Clone)]
pub enum EffectSlot<const N: usize> {
    /// Every LED at a fixed bound.
    ConstantFill(ConstantFill),
    /// Every LED independently random each frame.
    RandomFill(RandomFill),
    /// Every LED ramping by a fixed step.
    LinearRamp(LinearRamp),
    /// Cursor chasing a fixed LED order.
    OrderedChase(OrderedChase),
    /// Cursor walking a shuffled permutation.
    RandomChase(RandomChase<N>),
    /// Per-LED random fade targets.
    Twinkle(Twinkle<N>),
    /// First-N level indicator (menu feedback, not ambient lighting).
    Indicator(Indicator),
}

impl<const N: usize> EffectSlot<N> {
    /// Render the current effect.
    pub fn tick(&mut self, frame: u32, fb: &mut [u16], rng: &mut Pcg32) {
        match self {
            Self::ConstantFill(effect) => effect.tick(frame, fb, rng),
            Self::RandomFill(effect) => effect.tick(frame, fb, rng),
            Self::LinearRamp(effect) => effect.tick(frame, fb, rng),
            Self::OrderedChase(effect) => effect.tick(frame, fb, rng),
            Self::RandomChase(effect) => effect.tick(frame, fb, rng),
            Self::Twinkle(effect) => effect.tick(frame, fb, rng),
            Self::Indicator(effect) => effect.tick(frame, fb, rng),
        }
    }

    /// Short name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ConstantFill(_) => "constant_fill",
            Self::RandomFill(_) => "random_fill",
            Self::LinearRamp(_) => "linear_ramp",
            Self::OrderedChase(_) => "ordered_chase",
            Self::RandomChase(_) => "random_chase",
            Self::Twinkle(_) => "twinkle",
            Self::Indicator(_) => "indicator",
        }
    }
}

/// Residual glow left behind the default random chase.
const EMBER: u16 = 0x0200;

/// Number of effects in the shipped catalog.
pub const CATALOG_LEN: usize = 10;

/// Instantiate the shipped ambient effects, in menu order.
///
/// The first chase is slow with a short tail; `chase_back` runs the order
/// backwards with a tail the length of the strip; the last entries are the
/// plain fills useful mostly for checking the serial protocol.
pub fn catalog<const N: usize>() -> [EffectSlot<N>; CATALOG_LEN] {
    [
        EffectSlot::OrderedChase(OrderedChase::new(&LED_ORDER, 120, 3, Direction::Forward)),
        EffectSlot::OrderedChase(OrderedChase::new(&LED_ORDER, 15, N as u16, Direction::Backward)),
        EffectSlot::OrderedChase(OrderedChase::new(&LED_ORDER, 5, 1, Direction::Backward)),
        EffectSlot::RandomChase(RandomChase::new(20, N as u16, EMBER)),
        EffectSlot::RandomChase(RandomChase::new(5, 1, 0)),
        EffectSlot::Twinkle(Twinkle::new(8192, 40)),
        EffectSlot::Twinkle(Twinkle::new(i16::MAX as u16 / 2, 20)),
        EffectSlot::LinearRamp(LinearRamp::new(LED_MAX / 128)),
        EffectSlot::RandomFill(RandomFill::new(LED_MIN, LED_MAX)),
        EffectSlot::ConstantFill(ConstantFill::new(LED_MAX)),
    ]
}
