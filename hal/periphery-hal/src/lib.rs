//! Periphery Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that Periphery
//! drivers are written against. Chip-specific HALs (or the `eh1` adapters
//! for any `embedded-hal` 1.0 implementation) provide the concrete buses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (periphery-ssd1306, etc.)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  periphery-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  chip HAL     │       │ embedded-hal  │
//! │  (direct)     │       │ 1.0 via `eh1` │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`spi::SpiBus`] - SPI bus operations
//! - [`delay::DelayMs`] - Blocking delays
//!
//! [`regmap::Device8`] builds register-level reads and writes on top of
//! the bus traits for simple 8-bit register peripherals.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod delay;
#[cfg(feature = "eh1")]
pub mod eh1;
pub mod gpio;
pub mod i2c;
pub mod regmap;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use regmap::{ByteOrder, Device8, RegmapError};
pub use spi::SpiBus;
