//! Display configuration
//!
//! [`Config`] is what callers fill in; zero/unset fields are replaced with
//! defaults derived from the panel size by [`Config::resolve`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cmd;

/// Default panel width in pixels
pub const DEFAULT_WIDTH: u16 = 128;

/// Default panel height in pixels
pub const DEFAULT_HEIGHT: u16 = 64;

/// Panel supply mode
///
/// Selects the charge-pump, contrast and pre-charge values sent during
/// bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum VccMode {
    /// Panel supplied from an external VCC rail
    External = cmd::EXTERNAL_VCC,
    /// Internal switched-capacitor charge pump
    #[default]
    SwitchCap = cmd::SWITCH_CAP_VCC,
}

/// Display rotation (clockwise)
///
/// The controller can only mirror both axes, so `Rotate180` is the only
/// value that changes the output. Every other value maps like `Rotate0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    #[default]
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

/// Inclusive `[start, end]` range for the addressing window
///
/// The all-zero value means "derive from the panel size".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResetRange(pub [u8; 2]);

impl ResetRange {
    /// Create a range from its first and last value
    pub const fn new(start: u8, end: u8) -> Self {
        Self([start, end])
    }

    /// First column or page of the window
    pub const fn start(&self) -> u8 {
        self.0[0]
    }

    /// Last column or page of the window (inclusive)
    pub const fn end(&self) -> u8 {
        self.0[1]
    }

    /// True when the range should be derived from the panel size
    pub const fn is_unset(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Panel width in pixels (0 = 128)
    pub width: u16,
    /// Panel height in pixels (0 = 64)
    pub height: u16,
    /// Supply mode
    pub vcc: VccMode,
    /// I2C address (0 = backend default; ignored by SPI)
    pub address: u8,
    /// Column window used to reset the write cursor before a flush
    ///
    /// Panels narrower than the controller usually need this, e.g. a 72x40
    /// panel sits at columns 28..=99.
    pub reset_col: ResetRange,
    /// Page window used to reset the write cursor before a flush
    pub reset_page: ResetRange,
    /// Initial rotation
    pub rotation: Rotation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vcc: VccMode::SwitchCap,
            address: 0,
            reset_col: ResetRange::default(),
            reset_page: ResetRange::default(),
            rotation: Rotation::Rotate0,
        }
    }
}

impl Config {
    /// Config for a panel of the given size, everything else default
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Fill in defaults and decide whether the addressing window may be
    /// reset before each flush.
    pub fn resolve(&self) -> ResolvedConfig {
        let width = if self.width != 0 {
            self.width
        } else {
            DEFAULT_WIDTH
        };
        let height = if self.height != 0 {
            self.height
        } else {
            DEFAULT_HEIGHT
        };

        let reset_col = if self.reset_col.is_unset() {
            ResetRange::new(0, width.saturating_sub(1) as u8)
        } else {
            self.reset_col
        };
        let reset_page = if self.reset_page.is_unset() {
            ResetRange::new(0, (height / 8).saturating_sub(1) as u8)
        } else {
            self.reset_page
        };

        // Default-size SPI panels corrupt their addressing state when the
        // window is reset before every full-buffer write.
        let supports_addressing_reset =
            self.address != 0 || width != DEFAULT_WIDTH || height != DEFAULT_HEIGHT;

        ResolvedConfig {
            width,
            height,
            vcc: self.vcc,
            address: self.address,
            reset_col,
            reset_page,
            rotation: self.rotation,
            supports_addressing_reset,
        }
    }
}

/// Configuration with all defaults applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolvedConfig {
    pub width: u16,
    pub height: u16,
    pub vcc: VccMode,
    pub address: u8,
    pub reset_col: ResetRange,
    pub reset_page: ResetRange,
    pub rotation: Rotation,
    pub supports_addressing_reset: bool,
}
