//! 4-wire SPI backend
//!
//! Uses a data/command select line, a reset line and a chip-select line
//! next to the SPI bus. The transmission buffer keeps one header byte in
//! front of the framebuffer for single-byte commands.

use heapless::Vec;
use periphery_hal::{DelayMs, OutputPin, SpiBus};

use super::DisplayBus;
use crate::framebuffer::MAX_BUFFER_SIZE;

const HEADER_LEN: usize = 1;
const TX_CAPACITY: usize = MAX_BUFFER_SIZE + HEADER_LEN;

/// Reset pulse timing
const RESET_HIGH_MS: u32 = 1;
const RESET_LOW_MS: u32 = 10;

/// SSD1306 over SPI
pub struct SpiInterface<SPI, DC, RST, CS, D> {
    spi: SPI,
    dc: DC,
    rst: RST,
    cs: CS,
    delay: D,
    buffer: Vec<u8, TX_CAPACITY>,
}

impl<SPI, DC, RST, CS, D> SpiInterface<SPI, DC, RST, CS, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
    D: DelayMs,
{
    /// Create an interface. The SPI bus must already be configured; the
    /// pins must be outputs.
    pub fn new(spi: SPI, dc: DC, rst: RST, cs: CS, delay: D) -> Self {
        Self {
            spi,
            dc,
            rst,
            cs,
            delay,
            buffer: Vec::from_slice(&[0; HEADER_LEN]).unwrap_or_default(),
        }
    }

    /// Release the bus, pins and delay
    pub fn release(self) -> (SPI, DC, RST, CS, D) {
        (self.spi, self.dc, self.rst, self.cs, self.delay)
    }

    /// Pulse the reset line to put the controller into its reset state
    fn hard_reset(&mut self) {
        debug!("ssd1306: hardware reset");
        self.cs.set_low();
        self.dc.set_low();
        self.rst.set_low();

        self.rst.set_high();
        self.delay.delay_ms(RESET_HIGH_MS);
        self.rst.set_low();
        self.delay.delay_ms(RESET_LOW_MS);
        self.rst.set_high();
    }

    /// One chip-select framed transfer. DC is settled while CS is high and
    /// held for the whole transfer; CS is released even if the bus fails.
    fn framed_write(
        spi: &mut SPI,
        dc: &mut DC,
        cs: &mut CS,
        data: &[u8],
        is_command: bool,
    ) -> Result<(), SPI::Error> {
        cs.set_high();
        dc.set_state(!is_command);
        cs.set_low();
        let result = spi.write(data);
        cs.set_high();
        result
    }
}

impl<SPI, DC, RST, CS, D> DisplayBus for SpiInterface<SPI, DC, RST, CS, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
    D: DelayMs,
{
    type Error = SPI::Error;

    fn configure(&mut self, _address: u8, size: usize) -> &mut [u8] {
        self.hard_reset();

        self.buffer.clear();
        // Length is clamped to capacity, so resize cannot fail
        let _ = self
            .buffer
            .resize((size + HEADER_LEN).min(TX_CAPACITY), 0);
        &mut self.buffer[HEADER_LEN..]
    }

    fn command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        self.buffer[0] = cmd;
        Self::framed_write(
            &mut self.spi,
            &mut self.dc,
            &mut self.cs,
            &self.buffer[..HEADER_LEN],
            true,
        )
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Self::framed_write(
            &mut self.spi,
            &mut self.dc,
            &mut self.cs,
            &self.buffer[HEADER_LEN..],
            false,
        )
    }

    fn transmit(&mut self, data: &[u8], is_command: bool) -> Result<(), Self::Error> {
        Self::framed_write(&mut self.spi, &mut self.dc, &mut self.cs, data, is_command)
    }

    fn buffer(&self) -> &[u8] {
        &self.buffer[HEADER_LEN..]
    }

    fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer[HEADER_LEN..]
    }
}
