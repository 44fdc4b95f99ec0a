//! First-N indicator used for menu feedback.

use super::Effect;
use crate::config::{LED_MAX, LED_MIN};
use crate::rng::Pcg32;

/// Light the first `count` LEDs, leave the rest dark (or the inverse).
///
/// Not an ambient effect: the control loop swaps it in to show the current
/// brightness level and hold-to-power-off progress.
#[derive(Debug, Clone, Copy)]
pub struct Indicator {
    count: u8,
    inverted: bool,
}

impl Indicator {
    /// Show `count` lit LEDs; `inverted` flips which bound is "lit".
    pub const fn new(count: u8, inverted: bool) -> Self {
        Self { count, inverted }
    }

    /// Change the number of lit LEDs.
    pub fn set_count(&mut self, count: u8) {
        self.count = count;
    }

    /// The number of lit LEDs.
    pub const fn count(&self) -> u8 {
        self.count
    }
}

impl Effect for Indicator {
    fn tick(&mut self, _frame: u32, fb: &mut [u16], _rng: &mut Pcg32) {
        for (i, led) in fb.iter_mut().enumerate() {
            let lit = (i < usize::from(self.count)) != self.inverted;
            *led = if lit { LED_MAX } else { LED_MIN };
        }
    }
}
