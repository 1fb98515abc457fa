//! Read-only pixel access for the renderer.
//!
//! The renderer only ever needs the dimensions of an image and a color per
//! coordinate, so it is written against the [`Raster`] trait instead of a
//! concrete buffer type. Samples are 16-bit RGBA; 8-bit sources are widened so
//! that `sample >> 8` gives back the original channel value.

use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba, RgbaImage};

/// The 16-bit RGBA buffer the loader produces.
pub type Raster16 = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// An addressable 2D grid of pixels.
pub trait Raster {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Returns the 16-bit RGBA sample at `(x, y)`.
    ///
    /// Callers only pass coordinates within `width() x height()`.
    fn sample(&self, x: u32, y: u32) -> [u16; 4];
}

#[inline]
fn widen(channel: u8) -> u16 {
    // 0xab -> 0xabab
    u16::from(channel) * 257
}

impl Raster for RgbaImage {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn sample(&self, x: u32, y: u32) -> [u16; 4] {
        self.get_pixel(x, y).0.map(widen)
    }
}

impl Raster for Raster16 {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn sample(&self, x: u32, y: u32) -> [u16; 4] {
        self.get_pixel(x, y).0
    }
}

impl Raster for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn sample(&self, x: u32, y: u32) -> [u16; 4] {
        match self {
            DynamicImage::ImageRgba16(buffer) => buffer.get_pixel(x, y).0,
            _ => GenericImageView::get_pixel(self, x, y).0.map(widen),
        }
    }
}
