//! Framebuffer geometry and pixel math
//!
//! The SSD1306 RAM is page-major: each byte holds a vertical strip of 8
//! pixels, bit 0 at the top. Pixel `(x, y)` lives in byte
//! `x + (y / 8) * width`, bit `y % 8`.

/// Widest panel the controller can drive
pub const MAX_WIDTH: u16 = 128;

/// Tallest panel the controller can drive
pub const MAX_HEIGHT: u16 = 64;

/// Largest framebuffer in bytes
pub const MAX_BUFFER_SIZE: usize = MAX_WIDTH as usize * MAX_HEIGHT as usize / 8;

/// Validated panel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    width: u16,
    height: u16,
}

impl Geometry {
    /// Validate a panel size
    ///
    /// Width must be 1..=128 and height a whole number of 8-row pages up
    /// to 64.
    pub const fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || width > MAX_WIDTH {
            return None;
        }
        if height == 0 || height > MAX_HEIGHT || height % 8 != 0 {
            return None;
        }
        Some(Self { width, height })
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Number of 8-row pages
    pub const fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Framebuffer length in bytes
    pub const fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize / 8
    }

    /// True if `(x, y)` is on the panel
    pub fn contains(&self, x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && (x as u16) < self.width && (y as u16) < self.height
    }

    /// True if the `w` x `h` rectangle at `(x, y)` is non-empty and lies
    /// entirely on the panel
    pub fn contains_rect(&self, x: i16, y: i16, w: i16, h: i16) -> bool {
        if x < 0 || y < 0 || w <= 0 || h <= 0 {
            return false;
        }
        i32::from(x) + i32::from(w) <= i32::from(self.width)
            && i32::from(y) + i32::from(h) <= i32::from(self.height)
    }

    /// Byte index and bit mask for `(x, y)`, or `None` off-panel
    pub fn locate(&self, x: i16, y: i16) -> Option<(usize, u8)> {
        if !self.contains(x, y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((x + (y / 8) * self.width as usize, 1 << (y % 8)))
    }

    /// Set or clear one pixel, leaving the rest of its byte untouched.
    /// Off-panel coordinates are ignored.
    pub fn set_pixel(&self, buffer: &mut [u8], x: i16, y: i16, on: bool) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        if let Some(byte) = buffer.get_mut(index) {
            if on {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
    }

    /// Read one pixel; off-panel coordinates read as off
    pub fn get_pixel(&self, buffer: &[u8], x: i16, y: i16) -> bool {
        self.locate(x, y)
            .and_then(|(index, mask)| buffer.get(index).map(|b| b & mask != 0))
            .unwrap_or(false)
    }
}
