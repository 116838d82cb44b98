//! Register access helper for 8-bit register peripherals
//!
//! Most small sensors expose a flat map of 8-bit register addresses and
//! move 1, 2 or 4 byte values through them. [`Device8`] owns a small
//! scratch buffer so those transfers never allocate.
//!
//! # Wire conventions
//!
//! - I2C reads write the register address and read the value back in one
//!   repeated-start transaction. Writes send address then value bytes.
//! - SPI is full duplex: the device answers after the address byte, so a
//!   read of N bytes clocks N + 1 bytes and drops the first received byte.

use crate::{I2cBus, SpiBus};

/// Scratch buffer size: longest SPI read is 5 bytes out + 5 bytes in
const SCRATCH_LEN: usize = 10;

/// Byte order of multi-byte register values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteOrder {
    /// Most significant byte first
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl ByteOrder {
    /// Decode a 16-bit value
    pub fn u16_from(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    /// Decode a 32-bit value
    pub fn u32_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
        }
    }

    /// Encode a 16-bit value
    pub fn u16_to(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        }
    }

    /// Encode a 32-bit value
    pub fn u32_to(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        }
    }
}

/// Register helper errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegmapError<E> {
    /// Auxiliary buffer cannot hold the write and read halves
    ShortBuffer,
    /// Error from the underlying bus
    Bus(E),
}

impl<E> From<E> for RegmapError<E> {
    fn from(e: E) -> Self {
        RegmapError::Bus(e)
    }
}

/// Register helper for peripherals with 8-bit register addresses
#[derive(Debug, Default)]
pub struct Device8 {
    buf: [u8; SCRATCH_LEN],
}

impl Device8 {
    /// Create a helper with a zeroed scratch buffer
    pub const fn new() -> Self {
        Self {
            buf: [0; SCRATCH_LEN],
        }
    }

    fn clear(&mut self) {
        self.buf = [0; SCRATCH_LEN];
    }

    // I2C

    /// Read one byte from register `reg`
    pub fn read8_i2c<B: I2cBus>(
        &mut self,
        bus: &mut B,
        i2c_addr: u8,
        reg: u8,
    ) -> Result<u8, B::Error> {
        let mut value = [0u8; 1];
        self.read_data_i2c(bus, i2c_addr, reg, &mut value)?;
        Ok(value[0])
    }

    /// Read a 16-bit value starting at register `reg`
    pub fn read16_i2c<B: I2cBus>(
        &mut self,
        bus: &mut B,
        i2c_addr: u8,
        reg: u8,
        order: ByteOrder,
    ) -> Result<u16, B::Error> {
        let mut value = [0u8; 2];
        self.read_data_i2c(bus, i2c_addr, reg, &mut value)?;
        Ok(order.u16_from(value))
    }

    /// Read a 32-bit value starting at register `reg`
    pub fn read32_i2c<B: I2cBus>(
        &mut self,
        bus: &mut B,
        i2c_addr: u8,
        reg: u8,
        order: ByteOrder,
    ) -> Result<u32, B::Error> {
        let mut value = [0u8; 4];
        self.read_data_i2c(bus, i2c_addr, reg, &mut value)?;
        Ok(order.u32_from(value))
    }

    /// Burst-read `dest.len()` bytes starting at register `reg`
    pub fn read_data_i2c<B: I2cBus>(
        &mut self,
        bus: &mut B,
        i2c_addr: u8,
        reg: u8,
        dest: &mut [u8],
    ) -> Result<(), B::Error> {
        self.buf[0] = reg;
        bus.write_read(i2c_addr, &self.buf[..1], dest)
    }

    /// Write one byte to register `reg`
    pub fn write8_i2c<B: I2cBus>(
        &mut self,
        bus: &mut B,
        i2c_addr: u8,
        reg: u8,
        value: u8,
    ) -> Result<(), B::Error> {
        self.buf[0] = reg;
        self.buf[1] = value;
        bus.write(i2c_addr, &self.buf[..2])
    }

    /// Write a 16-bit value starting at register `reg`
    pub fn write16_i2c<B: I2cBus>(
        &mut self,
        bus: &mut B,
        i2c_addr: u8,
        reg: u8,
        value: u16,
        order: ByteOrder,
    ) -> Result<(), B::Error> {
        self.buf[0] = reg;
        self.buf[1..3].copy_from_slice(&order.u16_to(value));
        bus.write(i2c_addr, &self.buf[..3])
    }

    /// Write a 32-bit value starting at register `reg`
    pub fn write32_i2c<B: I2cBus>(
        &mut self,
        bus: &mut B,
        i2c_addr: u8,
        reg: u8,
        value: u32,
        order: ByteOrder,
    ) -> Result<(), B::Error> {
        self.buf[0] = reg;
        self.buf[1..5].copy_from_slice(&order.u32_to(value));
        bus.write(i2c_addr, &self.buf[..5])
    }

    // SPI

    /// Read one byte from register `reg`
    pub fn read8_spi<B: SpiBus>(&mut self, bus: &mut B, reg: u8) -> Result<u8, B::Error> {
        let rx = self.spi_read(bus, reg, 1)?;
        Ok(rx[0])
    }

    /// Read a 16-bit value starting at register `reg`
    pub fn read16_spi<B: SpiBus>(
        &mut self,
        bus: &mut B,
        reg: u8,
        order: ByteOrder,
    ) -> Result<u16, B::Error> {
        let rx = self.spi_read(bus, reg, 2)?;
        Ok(order.u16_from([rx[0], rx[1]]))
    }

    /// Read a 32-bit value starting at register `reg`
    pub fn read32_spi<B: SpiBus>(
        &mut self,
        bus: &mut B,
        reg: u8,
        order: ByteOrder,
    ) -> Result<u32, B::Error> {
        let rx = self.spi_read(bus, reg, 4)?;
        Ok(order.u32_from([rx[0], rx[1], rx[2], rx[3]]))
    }

    /// Burst-read `len` bytes starting at register `reg`
    ///
    /// `aux` is split in half: the first half is clocked out, the second
    /// receives. Each half must hold `len + 1` bytes. Returns the `len`
    /// data bytes that followed the address byte.
    pub fn read_data_spi<'a, B: SpiBus>(
        &mut self,
        bus: &mut B,
        reg: u8,
        len: usize,
        aux: &'a mut [u8],
    ) -> Result<&'a [u8], RegmapError<B::Error>> {
        let split = aux.len() / 2;
        if split < len + 1 {
            return Err(RegmapError::ShortBuffer);
        }

        let (tx, rx) = aux.split_at_mut(split);
        let tx = &mut tx[..len + 1];
        let rx = &mut rx[..len + 1];
        tx.fill(0);
        tx[0] = reg;
        bus.transfer(rx, tx)?;
        Ok(&rx[1..])
    }

    /// Write one byte to register `reg`
    pub fn write8_spi<B: SpiBus>(
        &mut self,
        bus: &mut B,
        reg: u8,
        value: u8,
    ) -> Result<(), B::Error> {
        self.clear();
        self.buf[0] = reg;
        self.buf[1] = value;
        bus.write(&self.buf[..2])
    }

    /// Write a 16-bit value starting at register `reg`
    pub fn write16_spi<B: SpiBus>(
        &mut self,
        bus: &mut B,
        reg: u8,
        value: u16,
        order: ByteOrder,
    ) -> Result<(), B::Error> {
        self.clear();
        self.buf[0] = reg;
        self.buf[1..3].copy_from_slice(&order.u16_to(value));
        bus.write(&self.buf[..3])
    }

    /// Write a 32-bit value starting at register `reg`
    pub fn write32_spi<B: SpiBus>(
        &mut self,
        bus: &mut B,
        reg: u8,
        value: u32,
        order: ByteOrder,
    ) -> Result<(), B::Error> {
        self.clear();
        self.buf[0] = reg;
        self.buf[1..5].copy_from_slice(&order.u32_to(value));
        bus.write(&self.buf[..5])
    }

    /// Clock out `reg` followed by `len` zero bytes; returns the `len`
    /// bytes received after the address byte.
    fn spi_read<B: SpiBus>(&mut self, bus: &mut B, reg: u8, len: usize) -> Result<&[u8], B::Error> {
        self.clear();
        let n = len + 1;
        let (tx, rx) = self.buf.split_at_mut(SCRATCH_LEN / 2);
        tx[0] = reg;
        bus.transfer(&mut rx[..n], &tx[..n])?;
        Ok(&rx[1..n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// I2C bus that records writes and answers reads from a register file
    struct MockI2c {
        regs: [u8; 16],
        last_write: Vec<u8>,
        address: u8,
    }

    impl MockI2c {
        fn new() -> Self {
            let mut regs = [0u8; 16];
            for (i, r) in regs.iter_mut().enumerate() {
                *r = 0xA0 + i as u8;
            }
            Self {
                regs,
                last_write: Vec::new(),
                address: 0,
            }
        }
    }

    impl I2cBus for MockI2c {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            self.address = address;
            self.last_write = data.to_vec();
            Ok(())
        }

        fn read(&mut self, _address: u8, _buf: &mut [u8]) -> Result<(), ()> {
            Err(())
        }

        fn write_read(
            &mut self,
            address: u8,
            write_data: &[u8],
            read_buf: &mut [u8],
        ) -> Result<(), ()> {
            self.address = address;
            let start = write_data[0] as usize;
            read_buf.copy_from_slice(&self.regs[start..start + read_buf.len()]);
            Ok(())
        }
    }

    /// SPI bus that echoes a register file one byte behind the address
    struct MockSpi {
        regs: [u8; 16],
        last_tx: Vec<u8>,
    }

    impl SpiBus for MockSpi {
        type Error = ();

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), ()> {
            assert_eq!(read.len(), write.len());
            self.last_tx = write.to_vec();
            let start = write[0] as usize;
            read[0] = 0xFF;
            for i in 1..read.len() {
                read[i] = self.regs[start + i - 1];
            }
            Ok(())
        }

        fn write(&mut self, data: &[u8]) -> Result<(), ()> {
            self.last_tx = data.to_vec();
            Ok(())
        }

        fn read(&mut self, _buf: &mut [u8]) -> Result<(), ()> {
            Err(())
        }

        fn transfer_in_place(&mut self, _data: &mut [u8]) -> Result<(), ()> {
            Err(())
        }
    }

    #[test]
    fn test_i2c_reads() {
        let mut bus = MockI2c::new();
        let mut dev = Device8::new();

        assert_eq!(dev.read8_i2c(&mut bus, 0x52, 0x02).unwrap(), 0xA2);
        assert_eq!(bus.address, 0x52);
        assert_eq!(
            dev.read16_i2c(&mut bus, 0x52, 0x00, ByteOrder::LittleEndian).unwrap(),
            0xA1A0
        );
        assert_eq!(
            dev.read16_i2c(&mut bus, 0x52, 0x00, ByteOrder::BigEndian).unwrap(),
            0xA0A1
        );
        assert_eq!(
            dev.read32_i2c(&mut bus, 0x52, 0x04, ByteOrder::BigEndian).unwrap(),
            0xA4A5_A6A7
        );
    }

    #[test]
    fn test_i2c_writes() {
        let mut bus = MockI2c::new();
        let mut dev = Device8::new();

        dev.write8_i2c(&mut bus, 0x36, 0x10, 0x7F).unwrap();
        assert_eq!(bus.last_write, [0x10, 0x7F]);

        dev.write16_i2c(&mut bus, 0x36, 0x13, 0x1234, ByteOrder::LittleEndian)
            .unwrap();
        assert_eq!(bus.last_write, [0x13, 0x34, 0x12]);

        dev.write32_i2c(&mut bus, 0x36, 0x20, 0xDEAD_BEEF, ByteOrder::BigEndian)
            .unwrap();
        assert_eq!(bus.last_write, [0x20, 0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_spi_reads_skip_address_byte() {
        let mut regs = [0u8; 16];
        for (i, r) in regs.iter_mut().enumerate() {
            *r = i as u8;
        }
        let mut bus = MockSpi {
            regs,
            last_tx: Vec::new(),
        };
        let mut dev = Device8::new();

        assert_eq!(dev.read8_spi(&mut bus, 0x05).unwrap(), 0x05);
        assert_eq!(bus.last_tx, [0x05, 0x00]);

        assert_eq!(
            dev.read16_spi(&mut bus, 0x02, ByteOrder::BigEndian).unwrap(),
            0x0203
        );
        assert_eq!(
            dev.read32_spi(&mut bus, 0x08, ByteOrder::LittleEndian).unwrap(),
            0x0B0A_0908
        );
        assert_eq!(bus.last_tx, [0x08, 0, 0, 0, 0]);
    }

    #[test]
    fn test_spi_writes() {
        let mut bus = MockSpi {
            regs: [0; 16],
            last_tx: Vec::new(),
        };
        let mut dev = Device8::new();

        dev.write8_spi(&mut bus, 0x01, 0x99).unwrap();
        assert_eq!(bus.last_tx, [0x01, 0x99]);

        dev.write16_spi(&mut bus, 0x02, 0xBEEF, ByteOrder::BigEndian)
            .unwrap();
        assert_eq!(bus.last_tx, [0x02, 0xBE, 0xEF]);

        dev.write32_spi(&mut bus, 0x03, 1, ByteOrder::LittleEndian)
            .unwrap();
        assert_eq!(bus.last_tx, [0x03, 1, 0, 0, 0]);
    }

    #[test]
    fn test_read_data_spi() {
        let mut regs = [0u8; 16];
        for (i, r) in regs.iter_mut().enumerate() {
            *r = 0x10 + i as u8;
        }
        let mut bus = MockSpi {
            regs,
            last_tx: Vec::new(),
        };
        let mut dev = Device8::new();

        let mut aux = [0u8; 8];
        let data = dev.read_data_spi(&mut bus, 0x04, 3, &mut aux).unwrap();
        assert_eq!(data, &[0x14, 0x15, 0x16]);

        let mut small = [0u8; 6];
        let result = dev.read_data_spi(&mut bus, 0x04, 3, &mut small);
        assert!(matches!(result, Err(RegmapError::ShortBuffer)));
    }

    #[test]
    fn test_byte_order_round_trip() {
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            assert_eq!(order.u16_from(order.u16_to(0xCAFE)), 0xCAFE);
            assert_eq!(order.u32_from(order.u32_to(0x0102_0304)), 0x0102_0304);
        }
    }
}
