//! Adapters from `embedded-hal` 1.0 to the Periphery traits
//!
//! Any platform HAL implementing `embedded-hal` 1.0 can drive Periphery
//! drivers by wrapping its bus, pin or delay in [`Eh1`]:
//!
//! ```rust, ignore
//! use periphery_hal::eh1::{Eh1, Eh1Pin};
//!
//! let i2c = Eh1(platform_i2c);
//! let dc = Eh1Pin::new(platform_dc_pin);
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;
use embedded_hal::i2c;
use embedded_hal::spi;

use crate::{DelayMs, I2cBus, OutputPin, SpiBus};

/// Wrapper adapting an `embedded-hal` 1.0 I2C bus, SPI bus or delay
#[derive(Debug)]
pub struct Eh1<T>(pub T);

impl<T> Eh1<T> {
    /// Unwrap the inner `embedded-hal` value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: i2c::I2c> I2cBus for Eh1<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        i2c::I2c::write(&mut self.0, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        i2c::I2c::read(&mut self.0, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        i2c::I2c::write_read(&mut self.0, address, write_data, read_buf)
    }
}

impl<T: spi::SpiBus<u8>> SpiBus for Eh1<T> {
    type Error = T::Error;

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        spi::SpiBus::transfer(&mut self.0, read, write)?;
        spi::SpiBus::flush(&mut self.0)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        spi::SpiBus::write(&mut self.0, data)?;
        spi::SpiBus::flush(&mut self.0)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        spi::SpiBus::read(&mut self.0, buf)?;
        spi::SpiBus::flush(&mut self.0)
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        spi::SpiBus::transfer_in_place(&mut self.0, data)?;
        spi::SpiBus::flush(&mut self.0)
    }
}

impl<T: DelayNs> DelayMs for Eh1<T> {
    fn delay_ms(&mut self, ms: u32) {
        DelayNs::delay_ms(&mut self.0, ms)
    }
}

/// Wrapper adapting an infallible `embedded-hal` 1.0 output pin
///
/// The last written level is tracked locally so [`OutputPin::is_set_high`]
/// does not need `StatefulOutputPin`.
#[derive(Debug)]
pub struct Eh1Pin<P> {
    pin: P,
    high: bool,
}

impl<P> Eh1Pin<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    /// Wrap a pin, driving it low so the tracked state matches the hardware
    pub fn new(mut pin: P) -> Self {
        infallible(digital::OutputPin::set_low(&mut pin));
        Self { pin, high: false }
    }

    /// Unwrap the inner pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for Eh1Pin<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        infallible(digital::OutputPin::set_high(&mut self.pin));
        self.high = true;
    }

    fn set_low(&mut self) {
        infallible(digital::OutputPin::set_low(&mut self.pin));
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

fn infallible(result: Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
