//! Linear brightness ramp.

use super::Effect;
use crate::rng::Pcg32;

/// Add a fixed step to every LED each frame.
///
/// The only effect whose update wraps instead of saturating: values roll
/// over to zero at full scale, giving a repeating sawtooth.
#[derive(Debug, Clone, Copy)]
pub struct LinearRamp {
    step: u16,
}

impl LinearRamp {
    /// Ramp by `step` per frame.
    pub const fn new(step: u16) -> Self {
        Self { step }
    }
}

impl Effect for LinearRamp {
    fn tick(&mut self, _frame: u32, fb: &mut [u16], _rng: &mut Pcg32) {
        for led in fb {
            *led = led.wrapping_add(self.step);
        }
    }
}
