//! SSD1306 monochrome OLED driver
//!
//! Drives SSD1306 panels up to 128x64 over I2C or 4-wire SPI. Drawing goes
//! to an in-memory framebuffer; [`Ssd1306::display`] pushes it to the
//! panel in one transfer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Ssd1306 (init, pixels, rectangles,     │
//! │  bitmaps, rotation, sleep)              │
//! └─────────────────────────────────────────┘
//!                     │ DisplayBus
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ I2cInterface  │       │ SpiInterface  │
//! │ (control byte)│       │ (DC/RST/CS)   │
//! └───────────────┘       └───────────────┘
//!         │                       │
//!         ▼                       ▼
//!   periphery_hal::I2cBus   periphery_hal::SpiBus
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use periphery_ssd1306::{Config, I2cInterface, Rgba, Ssd1306};
//!
//! let bus = I2cInterface::new(i2c);
//! let mut display = match Ssd1306::configure(bus, Config::with_size(128, 32)) {
//!     Ok(display) => display,
//!     // The bus comes back on failure, ready for another attempt
//!     Err(e) => return Err(e.into_error()),
//! };
//!
//! display.clear_buffer();
//! display.set_pixel(10, 10, Rgba::WHITE);
//! display.fill_rectangle(20, 4, 16, 8, Rgba::WHITE)?;
//! display.display()?;
//! ```
//!
//! # Features
//!
//! - `defmt` / `log` - driver logging
//! - `graphics` - `embedded-graphics` [`DrawTarget`] implementation
//! - `serde` - (de)serializable [`Config`]
//! - `eh1` - adapters from `embedded-hal` 1.0 types, under [`hal::eh1`]
//!
//! [`DrawTarget`]: https://docs.rs/embedded-graphics/latest/embedded_graphics/draw_target/trait.DrawTarget.html

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to every module
mod fmt;

pub mod cmd;
pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod framebuffer;
#[cfg(feature = "graphics")]
mod graphics;
pub mod image;
pub mod interface;

#[cfg(test)]
mod mock;

pub use periphery_hal as hal;

pub use color::Rgba;
pub use config::{Config, ResetRange, ResolvedConfig, Rotation, VccMode};
pub use display::Ssd1306;
pub use error::{ConfigureError, Error};
pub use image::{MonoBitmap, MonochromeImage};
pub use interface::{DisplayBus, I2cInterface, SpiInterface};
