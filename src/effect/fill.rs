//! Whole-buffer fills.

use super::Effect;
use crate::rng::Pcg32;

/// Set every LED to one fixed value.
#[derive(Debug, Clone, Copy)]
pub struct ConstantFill {
    value: u16,
}

impl ConstantFill {
    /// Fill with `value`, typically `LED_MIN` or `LED_MAX`.
    pub const fn new(value: u16) -> Self {
        Self { value }
    }
}

impl Effect for ConstantFill {
    fn tick(&mut self, _frame: u32, fb: &mut [u16], _rng: &mut Pcg32) {
        fb.fill(self.value);
    }
}

/// Replace every LED with an independent uniform sample each frame.
///
/// Visually it is noise; mostly useful for exercising the serial protocol.
#[derive(Debug, Clone, Copy)]
pub struct RandomFill {
    lower: u16,
    upper: u16,
}

impl RandomFill {
    /// Sample uniformly from `[lower, upper]`.
    pub const fn new(lower: u16, upper: u16) -> Self {
        Self { lower, upper }
    }
}

impl Effect for RandomFill {
    fn tick(&mut self, _frame: u32, fb: &mut [u16], rng: &mut Pcg32) {
        for led in fb {
            *led = rng.uniform(self.lower, self.upper);
        }
    }
}
