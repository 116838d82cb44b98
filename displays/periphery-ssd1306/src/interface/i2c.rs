//! I2C backend
//!
//! Every I2C transfer to the SSD1306 starts with a control byte: `0x00`
//! for a command, `0x40` for display data. The transmission buffer keeps
//! two header bytes in front of the framebuffer:
//!
//! - offsets 0..2 hold `[0x00, cmd]` for a command write
//! - offset 1 is overwritten with `0x40` for a flush, which then sends
//!   offsets 1.. as one transfer

use heapless::Vec;
use periphery_hal::I2cBus;

use super::DisplayBus;
use crate::framebuffer::MAX_BUFFER_SIZE;

pub use crate::cmd::{ADDRESS, ADDRESS_128_32};

const HEADER_LEN: usize = 2;
const TX_CAPACITY: usize = MAX_BUFFER_SIZE + HEADER_LEN;

const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 over I2C
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
    buffer: Vec<u8, TX_CAPACITY>,
}

impl<I2C: I2cBus> I2cInterface<I2C> {
    /// Create an interface using the default address. The bus must already
    /// be configured.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, ADDRESS)
    }

    /// Create an interface for a device at `address`
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: Vec::from_slice(&[0; HEADER_LEN]).unwrap_or_default(),
        }
    }

    /// Device address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2cBus> DisplayBus for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn configure(&mut self, address: u8, size: usize) -> &mut [u8] {
        if address != 0 {
            self.address = address;
        }
        self.buffer.clear();
        // Length is clamped to capacity, so resize cannot fail
        let _ = self
            .buffer
            .resize((size + HEADER_LEN).min(TX_CAPACITY), 0);
        &mut self.buffer[HEADER_LEN..]
    }

    fn command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        self.buffer[0] = CONTROL_COMMAND;
        self.buffer[1] = cmd;
        self.i2c.write(self.address, &self.buffer[..HEADER_LEN])
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.buffer[1] = CONTROL_DATA;
        self.i2c.write(self.address, &self.buffer[1..])
    }

    fn transmit(&mut self, data: &[u8], is_command: bool) -> Result<(), Self::Error> {
        if is_command {
            return match data.first() {
                Some(&cmd) => self.command(cmd),
                None => Ok(()),
            };
        }
        let payload = &mut self.buffer[HEADER_LEN..];
        let n = data.len().min(payload.len());
        payload[..n].copy_from_slice(&data[..n]);
        self.flush()
    }

    fn buffer(&self) -> &[u8] {
        &self.buffer[HEADER_LEN..]
    }

    fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer[HEADER_LEN..]
    }
}
