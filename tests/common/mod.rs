//! Shared test harness: a bus that records wire activity.

// not every test crate uses every helper
#![allow(dead_code)]

use mbi_lamp::Mbi5043Bus;

/// Records the data/latch levels at every rising clock edge, plus the
/// grayscale clock state.
#[derive(Debug, Default)]
pub struct RecordingBus {
    clock: bool,
    data: bool,
    latch: bool,
    pub gclk_on: bool,
    /// (data, latch) sampled at each rising clock edge.
    pub samples: Vec<(bool, bool)>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Mbi5043Bus for RecordingBus {
    fn set_clock(&mut self, high: bool) {
        if high && !self.clock {
            self.samples.push((self.data, self.latch));
        }
        self.clock = high;
    }

    fn set_data(&mut self, high: bool) {
        self.data = high;
    }

    fn set_latch(&mut self, high: bool) {
        self.latch = high;
    }

    fn set_grayscale_clock(&mut self, enabled: bool) {
        self.gclk_on = enabled;
    }
}

/// One decoded 16-bit word as seen by the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub value: u16,
    /// Number of trailing clocks with the latch line high.
    pub latch_clocks: u8,
}

/// Group the recorded samples into MSB-first 16-bit words.
pub fn decode_words(samples: &[(bool, bool)]) -> Vec<Word> {
    assert_eq!(samples.len() % 16, 0, "partial word on the wire");
    samples
        .chunks(16)
        .map(|bits| {
            let mut value = 0_u16;
            for &(data, _) in bits {
                value = (value << 1) | u16::from(data);
            }
            let latch_clocks = bits.iter().rev().take_while(|&&(_, latch)| latch).count();
            // the latch window must be one contiguous trailing run
            assert!(
                bits[..16 - latch_clocks].iter().all(|&(_, latch)| !latch),
                "latch asserted outside the trailing window"
            );
            Word {
                value,
                latch_clocks: latch_clocks as u8,
            }
        })
        .collect()
}
