//! Compact deterministic random number generator.
//!
//! PCG-32: a 64-bit linear-congruential core with an xorshift +
//! variable-rotate output permutation. Small, fast, and far better
//! distributed than anything this lamp needs. Default construction yields a
//! fixed, deterministic stream; call [`Pcg32::seed`] once at boot with a true
//! entropy source to vary it.

const DEFAULT_STATE: u64 = 0x853c_49e6_748f_ea9b;
const DEFAULT_INC: u64 = 0xda3e_39cb_94b9_5bdb;
const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// PCG-32 generator state: one state word and one stream-increment word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self {
            state: DEFAULT_STATE,
            inc: DEFAULT_INC,
        }
    }
}

impl Pcg32 {
    /// A generator with the fixed default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reseed from an external entropy source.
    ///
    /// Draws four raw 32-bit values to build a 64-bit seed and a 64-bit odd
    /// stream increment, then mixes the seed in across two discarded
    /// advances. The indirection avoids low-entropy artifacts that a direct
    /// state assignment would preserve. Intended to be called at most once,
    /// at boot.
    pub fn seed<F: FnMut() -> u32>(&mut self, mut entropy: F) {
        let s0 = (u64::from(entropy()) << 31) | u64::from(entropy());
        let s1 = (u64::from(entropy()) << 31) | u64::from(entropy());

        self.state = 0;
        self.inc = (s1 << 1) | 1;
        let _ = self.next();
        self.state = self.state.wrapping_add(s0);
        let _ = self.next();
    }

    /// Next 32-bit output.
    #[inline]
    pub fn next(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Advance `n` steps, discarding the output.
    pub fn discard(&mut self, n: u64) {
        for _ in 0..n {
            let _ = self.next();
        }
    }

    /// Uniform sample in `[0, bound)` via multiply-shift reduction.
    ///
    /// `bound` must be nonzero.
    #[inline]
    pub fn next_below(&mut self, bound: u32) -> u32 {
        ((u64::from(self.next()) * u64::from(bound)) >> 32) as u32
    }

    /// Uniform sample in `[lo, hi]`, inclusive on both ends.
    #[inline]
    pub fn uniform(&mut self, lo: u16, hi: u16) -> u16 {
        let span = u32::from(hi - lo) + 1;
        lo + self.next_below(span) as u16
    }
}
