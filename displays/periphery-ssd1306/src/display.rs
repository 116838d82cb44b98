//! SSD1306 display engine
//!
//! Owns the bus backend (and through it the framebuffer), runs the panel
//! bring-up sequence and exposes the drawing operations.

use crate::cmd;
use crate::color::Rgba;
use crate::config::{Config, ResolvedConfig, Rotation, VccMode};
use crate::error::{ConfigureError, Error};
use crate::framebuffer::Geometry;
use crate::image::MonochromeImage;
use crate::interface::DisplayBus;

/// A configured SSD1306 panel
///
/// Pixel operations silently ignore off-panel coordinates; bulk
/// operations report [`Error::OutOfRange`] instead. Drawing only touches
/// the framebuffer until [`display`](Self::display) is called.
pub struct Ssd1306<B> {
    bus: B,
    config: ResolvedConfig,
    geometry: Geometry,
    rotation: Rotation,
}

impl<B: DisplayBus> Ssd1306<B> {
    /// Bring up a panel on `bus`
    ///
    /// Sizes the framebuffer, then sends the controller initialization
    /// sequence. The configuration is fixed for the life of the returned
    /// driver; [`release`](Self::release) the bus to configure again.
    ///
    /// On failure the bus comes back inside the [`ConfigureError`], so the
    /// caller can retry with the same peripherals.
    pub fn configure(mut bus: B, config: Config) -> Result<Self, ConfigureError<B>> {
        let config = config.resolve();
        let Some(geometry) = Geometry::new(config.width, config.height) else {
            return Err(ConfigureError::new(Error::InvalidGeometry, bus));
        };

        debug!(
            "ssd1306: configuring {}x{} panel, addressing reset {}",
            config.width,
            config.height,
            config.supports_addressing_reset
        );

        bus.configure(config.address, geometry.buffer_len());

        let mut display = Self {
            bus,
            config,
            geometry,
            rotation: config.rotation,
        };
        match display.init() {
            Ok(()) => Ok(display),
            Err(e) => Err(ConfigureError::new(e, display.bus)),
        }
    }

    fn init(&mut self) -> Result<(), Error<B::Error>> {
        let external = self.config.vcc == VccMode::External;

        self.commands(&[
            cmd::DISPLAY_OFF,
            cmd::SET_DISPLAY_CLOCK_DIV,
            cmd::CLOCK_DIV_DEFAULT,
            cmd::SET_MULTIPLEX,
            (self.geometry.height() - 1) as u8,
            cmd::SET_DISPLAY_OFFSET,
            cmd::DISPLAY_OFFSET_NONE,
            cmd::SET_START_LINE,
            cmd::CHARGE_PUMP,
            if external {
                cmd::CHARGE_PUMP_EXTERNAL
            } else {
                cmd::CHARGE_PUMP_INTERNAL
            },
            cmd::MEMORY_MODE,
            cmd::MEMORY_MODE_PAGE,
        ])?;

        self.set_rotation(self.rotation)?;

        match cmd::panel_tuning(self.geometry.width(), self.geometry.height()) {
            Some(tuning) => {
                let contrast = if external {
                    tuning.contrast_external
                } else {
                    tuning.contrast_internal
                };
                self.commands(&[cmd::SET_COM_PINS, tuning.com_pins, cmd::SET_CONTRAST, contrast])?;
            }
            None => {
                // Many compatible panels still work without tuning
                warn!(
                    "ssd1306: no COM-pin/contrast settings for {}x{}, skipping",
                    self.geometry.width(),
                    self.geometry.height()
                );
            }
        }

        self.commands(&[
            cmd::SET_PRECHARGE,
            if external {
                cmd::PRECHARGE_EXTERNAL
            } else {
                cmd::PRECHARGE_INTERNAL
            },
            cmd::SET_VCOM_DETECT,
            cmd::VCOM_DETECT_DEFAULT,
            cmd::DISPLAY_ALL_ON_RESUME,
            cmd::NORMAL_DISPLAY,
            cmd::DEACTIVATE_SCROLL,
            cmd::DISPLAY_ON,
        ])
    }

    fn commands(&mut self, cmds: &[u8]) -> Result<(), Error<B::Error>> {
        for &c in cmds {
            self.bus.command(c)?;
        }
        Ok(())
    }

    /// Send a raw controller command byte
    pub fn command(&mut self, cmd: u8) -> Result<(), Error<B::Error>> {
        Ok(self.bus.command(cmd)?)
    }

    /// Generic transmit through the backend
    ///
    /// What a data transmit does to the framebuffer depends on the backend:
    /// [`I2cInterface`](crate::I2cInterface) copies `data` into it before
    /// flushing, [`SpiInterface`](crate::SpiInterface) writes `data` straight
    /// to the wire and leaves it untouched.
    pub fn tx(&mut self, data: &[u8], is_command: bool) -> Result<(), Error<B::Error>> {
        Ok(self.bus.transmit(data, is_command)?)
    }

    /// Send the whole framebuffer to the panel
    ///
    /// When the panel tolerates it, the column and page window is reset
    /// first so the data lands at the top-left of the addressable area.
    pub fn display(&mut self) -> Result<(), Error<B::Error>> {
        if self.config.supports_addressing_reset {
            let col = self.config.reset_col;
            let page = self.config.reset_page;
            trace!(
                "ssd1306: window col {}..={} page {}..={}",
                col.start(),
                col.end(),
                page.start(),
                page.end()
            );
            self.commands(&[
                cmd::COLUMN_ADDR,
                col.start(),
                col.end(),
                cmd::PAGE_ADDR,
                page.start(),
                page.end(),
            ])?;
        }

        Ok(self.bus.flush()?)
    }

    /// Clear the framebuffer
    pub fn clear_buffer(&mut self) {
        self.bus.buffer_mut().fill(0);
    }

    /// Clear the framebuffer and the panel
    pub fn clear_display(&mut self) -> Result<(), Error<B::Error>> {
        self.clear_buffer();
        self.display()
    }

    /// Set or clear a pixel; off-panel coordinates are ignored
    pub fn set_pixel(&mut self, x: i16, y: i16, color: Rgba) {
        self.geometry
            .set_pixel(self.bus.buffer_mut(), x, y, color.is_on());
    }

    /// True if the pixel is on; off-panel coordinates read as off
    pub fn get_pixel(&self, x: i16, y: i16) -> bool {
        self.geometry.get_pixel(self.bus.buffer(), x, y)
    }

    /// Replace the whole framebuffer
    pub fn set_buffer(&mut self, buffer: &[u8]) -> Result<(), Error<B::Error>> {
        let current = self.bus.buffer_mut();
        if buffer.len() != current.len() {
            return Err(Error::InvalidBufferSize);
        }
        current.copy_from_slice(buffer);
        Ok(())
    }

    /// The framebuffer
    pub fn buffer(&self) -> &[u8] {
        self.bus.buffer()
    }

    /// The framebuffer, for direct manipulation
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.bus.buffer_mut()
    }

    /// Panel size as `(width, height)`
    pub fn size(&self) -> (i16, i16) {
        (self.geometry.width() as i16, self.geometry.height() as i16)
    }

    /// Fill a rectangle
    ///
    /// The rectangle must be non-empty and lie entirely on the panel.
    /// Filling the whole panel with an off color clears and flushes the
    /// display.
    pub fn fill_rectangle(
        &mut self,
        x: i16,
        y: i16,
        width: i16,
        height: i16,
        color: Rgba,
    ) -> Result<(), Error<B::Error>> {
        if !self.geometry.contains_rect(x, y, width, height) {
            return Err(Error::OutOfRange);
        }

        let (dw, dh) = self.size();
        if x == 0 && y == 0 && width == dw && height == dh && !color.is_on() {
            return self.clear_display();
        }

        for i in x..x + width {
            for j in y..y + height {
                self.set_pixel(i, j, color);
            }
        }
        Ok(())
    }

    /// Copy a monochrome image to `(x, y)`
    ///
    /// The whole image must fit on the panel; nothing is drawn otherwise.
    pub fn draw_bitmap<I: MonochromeImage>(
        &mut self,
        x: i16,
        y: i16,
        bitmap: &I,
    ) -> Result<(), Error<B::Error>> {
        let (width, height) = bitmap.size();
        if x < 0
            || y < 0
            || i32::from(x) + i32::from(width) > i32::from(self.geometry.width())
            || i32::from(y) + i32::from(height) > i32::from(self.geometry.height())
        {
            return Err(Error::OutOfRange);
        }

        for i in 0..width {
            for j in 0..height {
                // Fits on a panel of at most 128x64, so the sums stay in i16
                self.set_pixel(x + i as i16, y + j as i16, bitmap.get(i, j));
            }
        }
        Ok(())
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Program the controller's output mapping
    ///
    /// Only the controller mapping changes; existing framebuffer content is
    /// not transformed, so set the rotation before drawing.
    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Error<B::Error>> {
        debug!("ssd1306: rotation {:?}", rotation);
        self.rotation = rotation;
        match rotation {
            Rotation::Rotate180 => self.commands(&[cmd::SEG_REMAP, cmd::COM_SCAN_INC]),
            _ => self.commands(&[cmd::SEG_REMAP | 0x1, cmd::COM_SCAN_DEC]),
        }
    }

    /// Turn the panel off (`true`) or back on (`false`)
    ///
    /// Display RAM and the framebuffer are kept.
    pub fn sleep(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        debug!("ssd1306: sleep {}", enable);
        if enable {
            self.command(cmd::DISPLAY_OFF)
        } else {
            self.command(cmd::DISPLAY_ON)
        }
    }

    /// Configuration with defaults applied
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// True if [`display`](Self::display) resets the addressing window
    pub fn supports_addressing_reset(&self) -> bool {
        self.config.supports_addressing_reset
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the bus backend
    pub fn release(self) -> B {
        self.bus
    }
}
