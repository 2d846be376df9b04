//! The 64x64 skin atlas image
//!
//! Handles decoding dropped/opened images (resampled with nearest-neighbor so
//! hard pixel edges survive) and PNG export.

use image::{imageops::FilterType, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use super::uv_map::ATLAS_SIZE;
use super::SkinError;

/// Fully transparent pixel
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// The flattened skin raster
#[derive(Debug, Clone, PartialEq)]
pub struct Atlas {
    image: RgbaImage,
}

impl Atlas {
    /// Fully transparent atlas
    pub fn new() -> Self {
        Self {
            image: RgbaImage::from_pixel(ATLAS_SIZE as u32, ATLAS_SIZE as u32, Rgba(TRANSPARENT)),
        }
    }

    /// Wrap an image of any size, resampling to 64x64 with nearest-neighbor
    pub fn from_image(image: RgbaImage) -> Self {
        let size = ATLAS_SIZE as u32;
        let image = if image.dimensions() == (size, size) {
            image
        } else {
            image::imageops::resize(&image, size, size, FilterType::Nearest)
        };
        Self { image }
    }

    /// Decode an encoded image (png, jpeg, bmp) into an atlas
    pub fn decode(bytes: &[u8]) -> Result<Self, SkinError> {
        image::guess_format(bytes)
            .map_err(|_| SkinError::NotAnImage("unrecognized image data".to_string()))?;
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::from_image(decoded.to_rgba8()))
    }

    /// Decode an image file from disk
    #[cfg(test)]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SkinError> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }

    /// RGBA at atlas pixel (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        self.image.get_pixel(x as u32, y as u32).0
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        self.image.put_pixel(x as u32, y as u32, Rgba(rgba));
    }

    /// Raw RGBA bytes, row-major
    #[cfg(test)]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Encode as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>, SkinError> {
        let mut bytes = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Write the atlas to disk as PNG
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), SkinError> {
        std::fs::write(path, self.encode_png()?)?;
        Ok(())
    }
}

impl Default for Atlas {
    fn default() -> Self {
        Self::new()
    }
}
