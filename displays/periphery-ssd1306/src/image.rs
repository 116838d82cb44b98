//! Monochrome source images for [`Ssd1306::draw_bitmap`](crate::Ssd1306::draw_bitmap)

use crate::color::Rgba;

/// Read-only monochrome image
pub trait MonochromeImage {
    /// Image size as `(width, height)` in pixels
    fn size(&self) -> (u16, u16);

    /// Color of the pixel at `(x, y)`; callers stay inside [`size`](Self::size)
    fn get(&self, x: u16, y: u16) -> Rgba;
}

impl<T: MonochromeImage + ?Sized> MonochromeImage for &T {
    fn size(&self) -> (u16, u16) {
        T::size(self)
    }

    fn get(&self, x: u16, y: u16) -> Rgba {
        T::get(self, x, y)
    }
}

/// Borrowed 1-bit-per-pixel image
///
/// Rows are stored top to bottom, each padded to a whole number of bytes,
/// with the leftmost pixel in the most significant bit. A set bit is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonoBitmap<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
}

impl<'a> MonoBitmap<'a> {
    /// Wrap packed bitmap data
    ///
    /// Returns `None` if `data` is shorter than `width` x `height` needs.
    pub fn new(data: &'a [u8], width: u16, height: u16) -> Option<Self> {
        let needed = Self::stride(width) * usize::from(height);
        if data.len() < needed {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    fn stride(width: u16) -> usize {
        usize::from(width).div_ceil(8)
    }

    /// True if the pixel at `(x, y)` is set; false outside the image
    pub fn is_set(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = usize::from(y) * Self::stride(self.width) + usize::from(x) / 8;
        let mask = 0x80u8 >> (x % 8);
        self.data.get(index).is_some_and(|b| b & mask != 0)
    }
}

impl MonochromeImage for MonoBitmap<'_> {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn get(&self, x: u16, y: u16) -> Rgba {
        Rgba::from(self.is_set(x, y))
    }
}
