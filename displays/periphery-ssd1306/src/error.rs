//! Driver errors

use core::fmt;

use crate::interface::DisplayBus;

/// SSD1306 driver errors
///
/// `E` is the error type of the bus backing the display. Pixel-level
/// operations never fail; only bulk operations and bus traffic do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Buffer length does not match the configured framebuffer
    InvalidBufferSize,
    /// Rectangle or bitmap does not fit on the panel
    OutOfRange,
    /// Panel size the controller cannot address
    InvalidGeometry,
    /// Error from the underlying bus, passed through unchanged
    Transport(E),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Transport(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBufferSize => f.write_str("invalid size buffer"),
            Error::OutOfRange => f.write_str("out of screen range"),
            Error::InvalidGeometry => f.write_str("unsupported panel size"),
            Error::Transport(e) => write!(f, "bus error: {:?}", e),
        }
    }
}

/// [`Ssd1306::configure`](crate::Ssd1306::configure) failure
///
/// Hands the bus back so the caller can retry or reuse its peripherals.
pub struct ConfigureError<B: DisplayBus> {
    error: Error<B::Error>,
    bus: B,
}

impl<B: DisplayBus> ConfigureError<B> {
    pub(crate) fn new(error: Error<B::Error>, bus: B) -> Self {
        Self { error, bus }
    }

    /// What went wrong
    pub fn error(&self) -> &Error<B::Error> {
        &self.error
    }

    /// Drop the bus and keep the error
    pub fn into_error(self) -> Error<B::Error> {
        self.error
    }

    /// Recover the bus
    pub fn release(self) -> B {
        self.bus
    }

    pub fn into_parts(self) -> (Error<B::Error>, B) {
        (self.error, self.bus)
    }
}

impl<B: DisplayBus> fmt::Debug for ConfigureError<B>
where
    B::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigureError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<B: DisplayBus> fmt::Display for ConfigureError<B>
where
    B::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "configure failed: {}", self.error)
    }
}

#[cfg(feature = "defmt")]
impl<B: DisplayBus> defmt::Format for ConfigureError<B>
where
    B::Error: defmt::Format,
{
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ConfigureError({})", self.error)
    }
}
