//! Pixel sinks the rasterizers write into.

use std::path::Path;

use super::{check_dimensions, RenderError};
use crate::colors::Color;

/// Anything that can receive accepted pixels.
///
/// Called once per accepted pixel with no batching. Implementations ignore
/// coordinates they cannot store.
pub trait Surface {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
    fn clear(&mut self);
}

/// An owned ARGB8888 color buffer.
pub struct ColorBuffer {
    pixels: Vec<u32>,
    background: Color,
    width: u32,
    height: u32,
}

impl ColorBuffer {
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, RenderError> {
        check_dimensions(width, height)?;
        Ok(Self {
            pixels: vec![background.to_argb(); width as usize * height as usize],
            background,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw ARGB8888 pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(Color::from_argb(
                self.pixels[y as usize * self.width as usize + x as usize],
            ))
        } else {
            None
        }
    }

    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = Color::from_argb(self.pixels[(y * self.width + x) as usize]);
            image::Rgb([c.r, c.g, c.b])
        })
    }

    /// Encode the buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)
    }
}

impl Surface for ColorBuffer {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.pixels[y as usize * self.width as usize + x as usize] = color.to_argb();
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(self.background.to_argb());
    }
}

/// One accepted pixel, as recorded by the `Vec<PixelWrite>` surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelWrite {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Surface for Vec<PixelWrite> {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.push(PixelWrite { x, y, color });
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}
