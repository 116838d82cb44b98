//! I2C master bus
//!
//! Display and sensor drivers only ever need three shapes of transfer:
//! a plain write (commands, framebuffer data, register writes), a plain
//! read, and a register read done as write-then-read with a repeated
//! start.

/// Blocking I2C master
///
/// Addresses are 7-bit. Each call is one complete bus transaction and
/// returns once it has finished or failed; timeouts are up to the
/// implementation.
pub trait I2cBus {
    /// Bus error reported by the implementation
    type Error;

    /// Send `data` to the device at `address`
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buf` from the device at `address`
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Send `write_data`, then fill `read_buf` after a repeated start
    ///
    /// Register reads put the register address in `write_data`.
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        T::write_read(self, address, write_data, read_buf)
    }
}
