//! Test doubles for the bus traits

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use periphery_hal::{DelayMs, I2cBus, OutputPin, SpiBus};

use crate::interface::{DisplayBus, SpiInterface};

/// Error returned by failing mocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// I2C bus that records every write
#[derive(Debug, Default)]
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    fail: bool,
}

impl MockI2c {
    /// A bus on which every transfer fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl I2cBus for MockI2c {
    type Error = BusFault;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(BusFault);
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, _address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(BusFault);
        }
        buffer.fill(0);
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write: &[u8],
        read: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.write(address, write)?;
        self.read(address, read)
    }
}

/// Command bytes from recorded I2C command writes (`[0x00, cmd]`)
pub fn i2c_commands(writes: &[(u8, Vec<u8>)]) -> Vec<u8> {
    writes
        .iter()
        .filter(|(_, data)| data.len() == 2 && data[0] == 0x00)
        .map(|(_, data)| data[1])
        .collect()
}

/// Control lines of the SPI backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Dc,
    Rst,
    Cs,
}

/// One observable action on the SPI rig
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Pin(Line, bool),
    Write(Vec<u8>),
    Delay(u32),
}

#[derive(Debug, Default)]
struct LogState {
    events: Vec<Event>,
    fail: bool,
}

/// Shared, ordered record of everything the SPI rig did
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<LogState>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.borrow_mut().events.push(event);
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<Event> {
        core::mem::take(&mut self.0.borrow_mut().events)
    }

    /// Make subsequent SPI transfers fail
    pub fn set_fail(&self, fail: bool) {
        self.0.borrow_mut().fail = fail;
    }

    fn failing(&self) -> bool {
        self.0.borrow().fail
    }

    /// Bytes written while DC was low, in order
    pub fn commands(&self) -> Vec<u8> {
        self.writes(false).into_iter().flatten().collect()
    }

    /// Transfers made while DC was high
    pub fn data_writes(&self) -> Vec<Vec<u8>> {
        self.writes(true)
    }

    fn writes(&self, data: bool) -> Vec<Vec<u8>> {
        let mut dc = false;
        let mut out = Vec::new();
        for event in self.0.borrow().events.iter() {
            match event {
                Event::Pin(Line::Dc, level) => dc = *level,
                Event::Write(bytes) if dc == data => out.push(bytes.clone()),
                _ => {}
            }
        }
        out
    }
}

pub struct MockSpi(EventLog);

impl SpiBus for MockSpi {
    type Error = BusFault;

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.write(write)?;
        read.fill(0);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if self.0.failing() {
            return Err(BusFault);
        }
        self.0.push(Event::Write(data.to_vec()));
        Ok(())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        buffer.fill(0);
        Ok(())
    }

    fn transfer_in_place(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.write(buffer)?;
        buffer.fill(0);
        Ok(())
    }
}

pub struct MockPin {
    line: Line,
    high: bool,
    log: EventLog,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.log.push(Event::Pin(self.line, true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.push(Event::Pin(self.line, false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

pub struct MockDelay(EventLog);

impl DelayMs for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::Delay(ms));
    }
}

pub type MockSpiInterface = SpiInterface<MockSpi, MockPin, MockPin, MockPin, MockDelay>;

/// SPI backend wired to mocks that share one event log
pub fn spi_rig() -> (MockSpiInterface, EventLog) {
    let log = EventLog::default();
    let pin = |line| MockPin {
        line,
        high: false,
        log: log.clone(),
    };
    let bus = SpiInterface::new(
        MockSpi(log.clone()),
        pin(Line::Dc),
        pin(Line::Rst),
        pin(Line::Cs),
        MockDelay(log.clone()),
    );
    (bus, log)
}

/// Backend that records commands and flushes without any wire format
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub commands: Vec<u8>,
    pub flushes: usize,
    pub address: u8,
    buffer: Vec<u8>,
}

impl DisplayBus for RecordingBus {
    type Error = BusFault;

    fn configure(&mut self, address: u8, size: usize) -> &mut [u8] {
        self.address = address;
        self.buffer = vec![0; size];
        &mut self.buffer
    }

    fn command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        self.commands.push(cmd);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }

    fn transmit(&mut self, data: &[u8], is_command: bool) -> Result<(), Self::Error> {
        if is_command {
            if let Some(&cmd) = data.first() {
                self.command(cmd)?;
            }
            return Ok(());
        }
        let n = data.len().min(self.buffer.len());
        self.buffer[..n].copy_from_slice(&data[..n]);
        self.flush()
    }

    fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}
