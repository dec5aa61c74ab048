//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins, plus adapters that
//! lift infallible `embedded-hal` pins (such as embassy-rp's `Output` and
//! `Input`) into these traits.

use core::convert::Infallible;

use embedded_hal::digital;

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Output adapter for infallible `embedded-hal` pins
///
/// Tracks the last written level so `is_set_high` does not need to touch
/// the hardware.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P> EhOutput<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    /// Wrap a pin, driving it to `initial_high` immediately
    pub fn new(pin: P, initial_high: bool) -> Self {
        let mut out = Self { pin, high: false };
        out.set_state(initial_high);
        out
    }
}

impl<P> OutputPin for EhOutput<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        self.pin.set_high().unwrap_or_else(|e| match e {});
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().unwrap_or_else(|e| match e {});
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input adapter for infallible `embedded-hal` pins
pub struct EhInput<P> {
    pin: P,
}

impl<P> EhInput<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    /// Wrap an input pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> InputPin for EhInput<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or_else(|e| match e {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal embedded-hal pin for adapter tests
    struct FakeEhPin {
        level: bool,
        writes: u8,
    }

    impl digital::ErrorType for FakeEhPin {
        type Error = Infallible;
    }

    impl digital::OutputPin for FakeEhPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.level = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.level = true;
            self.writes += 1;
            Ok(())
        }
    }

    impl digital::InputPin for FakeEhPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.level)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.level)
        }
    }

    #[test]
    fn test_output_adapter_drives_initial_level() {
        let mut pin = FakeEhPin { level: false, writes: 0 };
        let out = EhOutput::new(&mut pin, true);
        assert!(out.is_set_high());

        assert!(pin.level);
        assert_eq!(pin.writes, 1);
    }

    #[test]
    fn test_output_adapter_tracks_state() {
        let mut pin = FakeEhPin { level: true, writes: 0 };
        let mut out = EhOutput::new(&mut pin, false);
        assert!(out.is_set_low());

        out.set_state(true);
        assert!(out.is_set_high());

        out.set_low();
        assert!(out.is_set_low());
        assert!(!pin.level);
    }

    #[test]
    fn test_input_adapter_reads_level() {
        let mut input = EhInput::new(FakeEhPin { level: true, writes: 0 });
        assert!(input.is_high());
        assert!(!input.is_low());
    }
}
