//! `embedded-graphics` support

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::Pixel;

use crate::color::Rgba;
use crate::display::Ssd1306;
use crate::error::Error;
use crate::interface::DisplayBus;

impl From<BinaryColor> for Rgba {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Rgba::WHITE,
            BinaryColor::Off => Rgba::BLACK,
        }
    }
}

impl<B: DisplayBus> DrawTarget for Ssd1306<B> {
    type Color = BinaryColor;
    type Error = Error<B::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Points outside i16 are off-panel anyway
            if let (Ok(x), Ok(y)) = (i16::try_from(point.x), i16::try_from(point.y)) {
                self.set_pixel(x, y, color.into());
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let color = Rgba::from(color);
        for point in area.points() {
            // Clipped to the panel, so coordinates fit in i16
            self.set_pixel(point.x as i16, point.y as i16, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.buffer_mut().fill(fill);
        Ok(())
    }
}

impl<B: DisplayBus> OriginDimensions for Ssd1306<B> {
    fn size(&self) -> Size {
        let (width, height) = Ssd1306::size(self);
        Size::new(width as u32, height as u32)
    }
}
