//! Blocking delay abstraction

/// Blocking millisecond delay
///
/// Used for the fixed settle times some peripherals need around a
/// hardware reset. This is a plain busy/blocking wait, not a yield point.
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: DelayMs + ?Sized> DelayMs for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}

/// Delay that returns immediately
///
/// Useful on hosts and in tests where the peripheral is simulated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayMs for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}
