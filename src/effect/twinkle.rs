//! Twinkle: every LED fades toward its own random target.

use super::Effect;
use crate::math16::sat_offset;
use crate::rng::Pcg32;

/// Shortest fade duration a new target may be given, in ticks.
const MIN_FADE_FRAMES: u16 = 10;

#[derive(Debug, Clone, Copy, Default)]
struct Target {
    value: u16,
    due_frame: u32,
}

/// Independent per-LED fades around a midpoint brightness.
///
/// Each LED carries a `(target value, target frame)` pair. When the target
/// frame is reached the value snaps to the target and a new one is drawn:
/// midpoint plus or minus a uniform offset, due a uniform number of ticks
/// out. In between, the value moves linearly toward the target.
#[derive(Debug, Clone)]
pub struct Twinkle<const N: usize> {
    targets: [Target; N],
    midpoint: u16,
    speed: u16,
}

impl<const N: usize> Twinkle<N> {
    /// Twinkle around `midpoint` with fades lasting up to `speed` ticks.
    pub fn new(midpoint: u16, speed: u16) -> Self {
        Self {
            targets: [Target::default(); N],
            midpoint,
            speed,
        }
    }

    fn draw_target(&mut self, frame: u32, rng: &mut Pcg32) -> Target {
        let offset = i32::from(rng.uniform(0, self.midpoint));
        let signed = if rng.next() & 1 == 0 { offset } else { -offset };
        let duration = rng.uniform(MIN_FADE_FRAMES.min(self.speed), self.speed);
        Target {
            value: sat_offset(self.midpoint, signed),
            due_frame: frame + u32::from(duration),
        }
    }
}

impl<const N: usize> Effect for Twinkle<N> {
    fn tick(&mut self, frame: u32, fb: &mut [u16], rng: &mut Pcg32) {
        for i in 0..N.min(fb.len()) {
            let target = self.targets[i];
            if frame >= target.due_frame {
                fb[i] = target.value;
                self.targets[i] = self.draw_target(frame, rng);
            } else {
                // Distance left divided by frames left to cover it
                let remaining = (target.due_frame - frame) as i32;
                let delta = (i32::from(target.value) - i32::from(fb[i])) / remaining;
                fb[i] = sat_offset(fb[i], delta);
            }
        }
    }
}
