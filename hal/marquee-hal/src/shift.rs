//! Shift-register chain abstractions
//!
//! The panel's row and column drivers are serial-in/parallel-out shift
//! registers sharing one data, clock and latch line. Words are clocked in
//! one bit at a time and only appear on the outputs when the latch line
//! rises, so a full row update presents atomically.

use crate::gpio::OutputPin;

/// Serial-in/parallel-out register chain
pub trait ShiftChain {
    /// Clock the low `bits` bits of `word` into the chain
    fn shift_out(&mut self, word: u16, bits: u8);

    /// Pulse the latch line low then high, presenting the shifted data
    fn latch(&mut self);
}

/// Order in which bits leave the shift word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 0 first
    #[default]
    LsbFirst,
    /// Highest bit of the word first
    MsbFirst,
}

/// Shift chain bit-banged over three output pins
pub struct BitBangChain<D, C, L> {
    data: D,
    clock: C,
    latch: L,
    order: BitOrder,
}

impl<D, C, L> BitBangChain<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    /// Create a chain, idling all lines low
    pub fn new(mut data: D, mut clock: C, mut latch: L, order: BitOrder) -> Self {
        data.set_low();
        clock.set_low();
        latch.set_low();
        Self {
            data,
            clock,
            latch,
            order,
        }
    }
}

impl<D, C, L> ShiftChain for BitBangChain<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    fn shift_out(&mut self, word: u16, bits: u8) {
        let bits = bits.min(16);
        for i in 0..bits {
            let bit = match self.order {
                BitOrder::LsbFirst => i,
                BitOrder::MsbFirst => bits - 1 - i,
            };
            self.data.set_state(word & (1 << bit) != 0);
            self.clock.set_high();
            self.clock.set_low();
        }
    }

    fn latch(&mut self) {
        self.latch.set_low();
        self.latch.set_high();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Mock data line shared with the clock lines
    struct DataPin<'a> {
        level: &'a Cell<bool>,
    }

    impl OutputPin for DataPin<'_> {
        fn set_high(&mut self) {
            self.level.set(true);
        }

        fn set_low(&mut self) {
            self.level.set(false);
        }

        fn is_set_high(&self) -> bool {
            self.level.get()
        }
    }

    /// Mock clock that samples the data line on each rising edge
    struct ClockPin<'a> {
        data: &'a Cell<bool>,
        captured: &'a Cell<u32>,
        count: &'a Cell<u8>,
        high: bool,
    }

    impl OutputPin for ClockPin<'_> {
        fn set_high(&mut self) {
            if !self.high {
                let bit = self.data.get() as u32;
                self.captured
                    .set(self.captured.get() | (bit << self.count.get()));
                self.count.set(self.count.get() + 1);
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// Mock latch that counts low-to-high transitions
    struct LatchPin<'a> {
        rises: &'a Cell<u8>,
        high: bool,
    }

    impl OutputPin for LatchPin<'_> {
        fn set_high(&mut self) {
            if !self.high {
                self.rises.set(self.rises.get() + 1);
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct Sampler {
        data: Cell<bool>,
        captured: Cell<u32>,
        count: Cell<u8>,
        rises: Cell<u8>,
    }

    impl Sampler {
        fn new() -> Self {
            Self {
                data: Cell::new(false),
                captured: Cell::new(0),
                count: Cell::new(0),
                rises: Cell::new(0),
            }
        }

        fn chain(&self, order: BitOrder) -> BitBangChain<DataPin<'_>, ClockPin<'_>, LatchPin<'_>> {
            BitBangChain::new(
                DataPin { level: &self.data },
                ClockPin {
                    data: &self.data,
                    captured: &self.captured,
                    count: &self.count,
                    high: false,
                },
                LatchPin {
                    rises: &self.rises,
                    high: false,
                },
                order,
            )
        }
    }

    #[test]
    fn test_lsb_first_clocks_bit_zero_first() {
        let lines = Sampler::new();
        let mut chain = lines.chain(BitOrder::LsbFirst);

        chain.shift_out(0b1010_0001, 8);

        assert_eq!(lines.count.get(), 8);
        // Captured in clock order, so LSB-first reproduces the word
        assert_eq!(lines.captured.get(), 0b1010_0001);
        assert_eq!(lines.rises.get(), 0);
    }

    #[test]
    fn test_msb_first_reverses_clock_order() {
        let lines = Sampler::new();
        let mut chain = lines.chain(BitOrder::MsbFirst);

        chain.shift_out(0b1000_0000, 8);

        // First clocked bit is the word's bit 7
        assert_eq!(lines.captured.get(), 0b0000_0001);
    }

    #[test]
    fn test_sixteen_bit_words() {
        let lines = Sampler::new();
        let mut chain = lines.chain(BitOrder::LsbFirst);

        chain.shift_out(0xBEEF, 16);

        assert_eq!(lines.count.get(), 16);
        assert_eq!(lines.captured.get(), 0xBEEF);
    }

    #[test]
    fn test_two_words_share_one_latch() {
        let lines = Sampler::new();
        let mut chain = lines.chain(BitOrder::LsbFirst);

        chain.shift_out(0x00FF, 8);
        chain.shift_out(0x0001, 8);
        assert_eq!(lines.rises.get(), 0);
        chain.latch();

        assert_eq!(lines.count.get(), 16);
        assert_eq!(lines.captured.get(), 0x01FF);
        assert_eq!(lines.rises.get(), 1);
    }
}
