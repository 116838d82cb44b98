//! SPI master bus
//!
//! Chip-select is not part of the bus: drivers that need a particular CS
//! timing drive their own [`OutputPin`](crate::OutputPin).

/// Blocking, full-duplex SPI master (8-bit words)
///
/// Every method returns once the last bit has been clocked.
pub trait SpiBus {
    /// Bus error reported by the implementation
    type Error;

    /// Clock out `write` while filling `read`; both have the same length
    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error>;

    /// Clock out `data`, discarding what comes back
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buf`, clocking out zeros
    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Clock out `data` and replace it with the received bytes
    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        T::transfer(self, read, write)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, buf)
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        T::transfer_in_place(self, data)
    }
}
