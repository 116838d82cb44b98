//! Bus backends for the SSD1306
//!
//! The display engine talks to the controller only through [`DisplayBus`].
//! Each backend owns one transmission buffer laid out as
//!
//! ```text
//! ┌──────────────┬──────────────────────────────────┐
//! │ header bytes │ framebuffer (width*height/8)     │
//! └──────────────┴──────────────────────────────────┘
//! ```
//!
//! The header holds the protocol prefix for the bus (I2C control bytes,
//! the SPI command byte), so a full-frame flush is a single transfer with
//! no copy. The engine only ever sees the framebuffer region.

mod i2c;
mod spi;

pub use i2c::{I2cInterface, ADDRESS, ADDRESS_128_32};
pub use spi::SpiInterface;

/// Transport capability the display engine is written against
///
/// Implemented by [`I2cInterface`] and [`SpiInterface`]; tests and other
/// transports can provide their own.
pub trait DisplayBus {
    /// Error type of the underlying transport
    type Error;

    /// Prepare the bus and size the transmission buffer for a `size` byte
    /// framebuffer. Returns the framebuffer region.
    ///
    /// `address` is the I2C device address (0 keeps the backend default);
    /// backends without addressing ignore it.
    fn configure(&mut self, address: u8, size: usize) -> &mut [u8];

    /// Send one controller command byte
    fn command(&mut self, cmd: u8) -> Result<(), Self::Error>;

    /// Send the whole framebuffer region as display data
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Generic transmit: a command (first byte of `data` only) or a data
    /// block
    fn transmit(&mut self, data: &[u8], is_command: bool) -> Result<(), Self::Error>;

    /// Framebuffer region of the transmission buffer
    fn buffer(&self) -> &[u8];

    /// Mutable framebuffer region of the transmission buffer
    fn buffer_mut(&mut self) -> &mut [u8];
}
