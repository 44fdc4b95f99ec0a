//! MBI5043 constant-current LED driver.
//!
//! Double-buffered 16-bit grayscale pipeline: effects draw into one buffer,
//! [`Mbi5043::stage_frame`] copies it through gamma and brightness correction
//! into the transmit buffer, and [`Mbi5043::transmit`] bit-bangs the transmit
//! buffer out over clock/data/latch. Effects never observe the transmit
//! buffer.

use crate::Mbi5043Bus;
use crate::cheby::Chebyshev;
use crate::config::{ENABLE_GAMMA, GAMMA, LED_MAX};

// Configuration register bit positions (datasheet order).
pub const GCLK_SHIFT_B1: u16 = 15;
pub const GCLK_SHIFT_B0: u16 = 14;
pub const PC_MODE_B1: u16 = 12;
pub const PC_MODE_B0: u16 = 11;
pub const CS_MODE_BA: u16 = 10;
pub const CS_MODE_BB: u16 = 2;
pub const GAIN_B5: u16 = 9;
pub const GAIN_B4: u16 = 8;
pub const GAIN_B3: u16 = 7;
pub const GAIN_B2: u16 = 6;
pub const GAIN_B1: u16 = 5;
pub const GAIN_B0: u16 = 4;
pub const GCLK_DDR: u16 = 3;
pub const ENABLE: u16 = 0;

/// Configuration register state at startup, output disabled.
pub const STARTUP_CONFIG: u16 = 0b0000_0010_1011_0000;

/// Latch width (in clocks) that commits shifted data to the output latches.
const GLOBAL_LATCH: u8 = 3;
/// Latch width that opens the configuration-write window.
const CONFIG_ENABLE_LATCH: u8 = 15;
/// Latch width that commits the configuration word.
const CONFIG_WRITE_LATCH: u8 = 11;

/// Driver for a chain of MBI5043 chips wired as one long shift register.
///
/// `N` is the number of LEDs actually populated; the serial frame is padded
/// to a multiple of 16 words to match the chips' channel count.
pub struct Mbi5043<B: Mbi5043Bus, const N: usize> {
    bus: B,
    bright: u16,
    config: u16,
    gamma: Chebyshev,
    gamma_enabled: bool,
    draw: [u16; N],
    tx: [u16; N],
}

impl<B: Mbi5043Bus, const N: usize> Mbi5043<B, N> {
    /// Create a driver with the given output brightness scale.
    ///
    /// Fits the gamma approximation once; the table is never recomputed.
    pub fn new(bus: B, brightness: u16) -> Self {
        Self {
            bus,
            bright: brightness,
            config: STARTUP_CONFIG,
            gamma: Chebyshev::fit(|x| libm::powf(x, GAMMA), 0.0, 1.0),
            gamma_enabled: ENABLE_GAMMA,
            draw: [0; N],
            tx: [0; N],
        }
    }

    /// The bus this driver bit-bangs over.
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// The buffer to draw the next frame into.
    pub fn buffer(&mut self) -> &mut [u16; N] {
        &mut self.draw
    }

    /// The most recently drawn frame.
    pub fn frame(&self) -> &[u16; N] {
        &self.draw
    }

    /// The gamma approximation owned by this driver.
    pub const fn gamma(&self) -> &Chebyshev {
        &self.gamma
    }

    /// Current output brightness scale.
    pub const fn brightness(&self) -> u16 {
        self.bright
    }

    /// Set the output brightness scale applied after gamma correction.
    pub fn set_brightness(&mut self, brightness: u16) {
        self.bright = brightness;
    }

    /// Enable or disable the gamma correction stage.
    pub fn set_gamma_enabled(&mut self, enabled: bool) {
        self.gamma_enabled = enabled;
    }

    /// Zero both buffers. Called whenever the active effect changes.
    pub fn clear_buffers(&mut self) {
        self.draw = [0; N];
        self.tx = [0; N];
    }

    /// Copy the draw buffer through correction into the transmit buffer.
    pub fn stage_frame(&mut self) {
        for i in 0..N {
            self.tx[i] = self.apply_correction(self.draw[i]);
        }
    }

    /// Shift the transmit buffer out to the chip chain.
    ///
    /// Safe to call again without re-staging; it ships the previous frame
    /// unchanged, which is how a missed production deadline is absorbed.
    pub fn transmit(&mut self) {
        // Start with all lines low
        self.bus.set_latch(false);
        self.bus.set_clock(false);
        self.bus.set_data(false);

        // Data lands in the highest channel first, so pad up to a whole
        // number of 16-word chips, then send the buffer in reverse.
        for _ in 0..((16 - N % 16) % 16) {
            self.put_word(0, 1);
        }
        for i in (0..N).rev() {
            self.put_word(self.tx[i], 1);
        }

        // An empty word with LE held for the last 3 clocks latches the
        // shifted data into the output comparators.
        self.put_word(0, GLOBAL_LATCH);
    }

    /// Correct and transmit in one step.
    ///
    /// Correction takes on the order of a millisecond per frame at firmware
    /// clock rates; callers splitting work across contexts should use
    /// [`Self::stage_frame`] and [`Self::transmit`] separately.
    pub fn write_frame(&mut self) {
        self.stage_frame();
        self.transmit();
    }

    /// Write the live configuration word to every chip in the chain.
    pub fn write_config(&mut self) {
        // Enable writing configuration
        self.put_word(0, CONFIG_ENABLE_LATCH);
        self.put_word(self.config, CONFIG_WRITE_LATCH);
    }

    /// Enable the outputs and the grayscale reference clock.
    pub fn start(&mut self) {
        self.config |= 1 << ENABLE;
        self.write_config();
        self.bus.set_grayscale_clock(true);
    }

    /// Disable the outputs and stop the grayscale reference clock.
    pub fn stop(&mut self) {
        self.config &= !(1 << ENABLE);
        self.write_config();
        self.bus.set_grayscale_clock(false);
    }

    /// Clock one 16-bit word out, MSB first.
    ///
    /// LE is raised for the final `latch_clocks` bits of the word; the width
    /// of that window is the chip's command selector (1 = data latch,
    /// 3 = global latch, 15/11 = configuration write pair).
    fn put_word(&mut self, word: u16, latch_clocks: u8) {
        let latch_from = 1_u16 << (latch_clocks - 1);
        let mut mask = 0x8000_u16;
        while mask != 0 {
            // clock low for bit setup
            self.bus.set_clock(false);
            if mask == latch_from {
                self.bus.set_latch(true);
            }
            self.bus.set_data(word & mask != 0);
            // rising edge is the chip's sample point
            self.bus.set_clock(true);
            mask >>= 1;
        }
        self.bus.set_latch(false);
        self.bus.set_clock(false);
    }

    /// Gamma/brightness post-processing for one LED value.
    fn apply_correction(&self, val: u16) -> u16 {
        if val == 0 {
            return 0; // Off is off
        }

        if self.gamma_enabled {
            let x = f32::from(val) * (1.0 / f32::from(LED_MAX));
            let y = self.gamma.eval(x);
            // The approximation can (and does) return values < 0 and > 1
            if y >= 1.0 {
                self.bright
            } else if y <= 0.0 {
                0
            } else {
                (y * f32::from(self.bright)) as u16
            }
        } else {
            let scaled = u32::from(val) * u32::from(self.bright);
            scaled.min(u32::from(LED_MAX)) as u16
        }
    }
}
