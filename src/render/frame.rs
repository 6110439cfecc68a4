use crate::{
    foundation::core::Rgba8,
    foundation::error::{TrishardError, TrishardResult},
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Owned straight-alpha RGBA8 destination buffer.
///
/// Exclusively mutated by the render engine during a tick; the driver owns
/// it between ticks and recreates it when the presentation surface resizes.
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Allocate a frame cleared to opaque white, the canvas color.
    pub fn new(width: u32, height: u32) -> TrishardResult<Self> {
        if width == 0 || height == 0 {
            return Err(TrishardError::validation("frame dimensions must be > 0"));
        }
        let mut frame = Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        };
        frame.fill(Rgba8::WHITE);
        Ok(frame)
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Read the pixel at (`x`, `y`). Coordinates must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.index(x, y);
        Rgba8::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Write the pixel at (`x`, `y`). Coordinates must be in bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }

    /// Convert into an [`image::RgbaImage`] for encoding.
    pub fn into_rgba_image(self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
            .expect("frame buffer length matches dimensions")
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
