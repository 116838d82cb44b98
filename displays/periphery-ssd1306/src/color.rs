//! Pixel colors

/// 8-bit RGBA color
///
/// The panel is monochrome: a pixel is lit when any of the red, green or
/// blue channels is non-zero. Alpha is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque white (pixel on)
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF, 0xFF);

    /// Opaque black (pixel off)
    pub const BLACK: Self = Self::new(0, 0, 0, 0xFF);

    /// Fully transparent black (pixel off)
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// True if this color lights a pixel
    pub const fn is_on(&self) -> bool {
        self.r != 0 || self.g != 0 || self.b != 0
    }
}

impl From<bool> for Rgba {
    fn from(on: bool) -> Self {
        if on {
            Rgba::WHITE
        } else {
            Rgba::BLACK
        }
    }
}
