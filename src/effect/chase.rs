//! Chase effects: ramp up a moving cursor LED, decay the rest.

use heapless::Vec;

use super::Effect;
use crate::config::{LED_MAX, LED_MIN};
use crate::math16::{sat_add, sat_sub};
use crate::rng::Pcg32;

/// Traversal direction through the chase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Backward,
}

/// Per-tick decay step such that a full-bright LED fades out over one cursor
/// dwell times the tail length.
const fn decay_step(speed: u16, tail: u16) -> u16 {
    (LED_MAX - LED_MIN) / (speed * tail)
}

/// Chase around a caller-supplied LED order.
///
/// The cursor LED ramps up `tail`× as fast as every other LED decays, so a
/// tail of roughly `tail` LEDs trails the cursor. The cursor dwells `speed`
/// ticks per position and wraps at either end. Its starting position is
/// randomized the first time the effect ever runs.
#[derive(Debug, Clone)]
pub struct OrderedChase {
    order: &'static [u8],
    pos: usize,
    frames_left: u16,
    speed: u16,
    tail: u16,
    dir: Direction,
    step: u16,
    started: bool,
}

impl OrderedChase {
    /// Chase over `order` at `speed` ticks per position with a `tail`-LED
    /// fade behind the cursor.
    pub const fn new(order: &'static [u8], speed: u16, tail: u16, dir: Direction) -> Self {
        Self {
            order,
            pos: 0,
            frames_left: speed,
            speed,
            tail,
            dir,
            step: decay_step(speed, tail),
            started: false,
        }
    }

    /// The LED currently under the cursor, once the chase has started.
    pub fn cursor_led(&self) -> Option<u8> {
        if self.started {
            Some(self.order[self.pos])
        } else {
            None
        }
    }

    fn next_start(&self, rng: &mut Pcg32) -> usize {
        rng.next_below(self.order.len() as u32) as usize
    }

    fn advance(&mut self) {
        match self.dir {
            Direction::Forward => {
                self.pos += 1;
                if self.pos == self.order.len() {
                    self.pos = 0;
                }
            }
            Direction::Backward => {
                if self.pos == 0 {
                    self.pos = self.order.len();
                }
                self.pos -= 1;
            }
        }
    }
}

impl Effect for OrderedChase {
    fn tick(&mut self, _frame: u32, fb: &mut [u16], rng: &mut Pcg32) {
        if !self.started {
            self.pos = self.next_start(rng);
            self.frames_left = self.speed;
            self.started = true;
        }

        if self.frames_left == 0 {
            self.advance();
            self.frames_left = self.speed;
        }

        let target = usize::from(self.order[self.pos]);
        for (i, led) in fb.iter_mut().enumerate() {
            if i == target {
                *led = sat_add(*led, self.step * self.tail);
            } else {
                *led = sat_sub(*led, self.step);
            }
        }
        self.frames_left -= 1;
    }
}

/// Chase over a shuffled permutation of all LED indices.
///
/// Same ramp mechanics as [`OrderedChase`], but the walk order is a
/// Fisher–Yates shuffle that is redrawn every time it is exhausted, and
/// decayed LEDs settle at a dim ember floor instead of going fully dark.
#[derive(Debug, Clone)]
pub struct RandomChase<const N: usize> {
    walk: Vec<u8, N>,
    pos: usize,
    frames_left: u16,
    speed: u16,
    tail: u16,
    step: u16,
    floor: u16,
    started: bool,
}

impl<const N: usize> RandomChase<N> {
    /// Chase at `speed` ticks per position with a `tail`-LED fade; decayed
    /// values never drop below `floor`.
    pub fn new(speed: u16, tail: u16, floor: u16) -> Self {
        let mut walk = Vec::new();
        for i in 0..N as u8 {
            // capacity is exactly N
            let _ = walk.push(i);
        }
        Self {
            walk,
            pos: 0,
            frames_left: speed,
            speed,
            tail,
            step: decay_step(speed, tail),
            floor,
            started: false,
        }
    }

    /// The LED currently under the cursor, once the chase has started.
    pub fn cursor_led(&self) -> Option<u8> {
        if self.started {
            Some(self.walk[self.pos])
        } else {
            None
        }
    }

    fn reshuffle(&mut self, rng: &mut Pcg32) {
        for i in (1..self.walk.len()).rev() {
            let j = rng.next_below(i as u32 + 1) as usize;
            self.walk.swap(i, j);
        }
    }
}

impl<const N: usize> Effect for RandomChase<N> {
    fn tick(&mut self, _frame: u32, fb: &mut [u16], rng: &mut Pcg32) {
        if !self.started {
            self.reshuffle(rng);
            self.pos = 0;
            self.frames_left = self.speed;
            self.started = true;
        }

        if self.frames_left == 0 {
            self.pos += 1;
            if self.pos == self.walk.len() {
                self.reshuffle(rng);
                self.pos = 0;
            }
            self.frames_left = self.speed;
        }

        let target = usize::from(self.walk[self.pos]);
        for (i, led) in fb.iter_mut().enumerate() {
            if i == target {
                *led = sat_add(*led, self.step * self.tail);
            } else {
                let decayed = sat_sub(*led, self.step);
                *led = if decayed < self.floor { self.floor } else { decayed };
            }
        }
        self.frames_left -= 1;
    }
}
