use anyhow::Context as _;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{TrishardError, TrishardResult},
};

#[derive(Clone, Debug)]
/// Read-only source texture sampled by the render engine.
///
/// Holds straight RGBA8 texels. Normalized coordinates in [0, 1] address the
/// texel grid as `u * (width - 1)` (and likewise for v), so u = 0 and u = 1
/// land exactly on the first and last column.
pub struct Texture {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Texture {
    /// Decode encoded image bytes (PNG, JPEG, ...) into a texture.
    pub fn decode(bytes: &[u8]) -> TrishardResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode texture from memory")?;
        Self::from_rgba8(dyn_img.to_rgba8())
    }

    /// Wrap an already decoded RGBA8 image.
    ///
    /// Both dimensions must be at least 2 so every sample has a 2x2
    /// neighborhood for the bilinear filter.
    pub fn from_rgba8(img: image::RgbaImage) -> TrishardResult<Self> {
        let (width, height) = img.dimensions();
        if width < 2 || height < 2 {
            return Err(TrishardError::validation(format!(
                "texture must be at least 2x2, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// Texture width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Nearest-texel lookup at normalized (`u`, `v`) in [0, 1].
    pub fn sample_nearest(&self, u: f64, v: f64) -> Rgba8 {
        let x = (u * f64::from(self.width - 1) + 0.5) as u32;
        let y = (v * f64::from(self.height - 1) + 0.5) as u32;
        self.texel(x.min(self.width - 1), y.min(self.height - 1))
    }

    /// Bilinearly filtered lookup at normalized (`u`, `v`) in [0, 1].
    ///
    /// The 2x2 neighborhood base steps back one texel when the coordinate
    /// lands exactly on the last row or column, keeping the `+1` neighbor in
    /// bounds. All four channels are blended independently.
    pub fn sample_bilinear(&self, u: f64, v: f64) -> Rgba8 {
        let fx = u * f64::from(self.width - 1);
        let mut x0 = fx as u32;
        if x0 == self.width - 1 {
            x0 -= 1;
        }
        let fx = fx - f64::from(x0);

        let fy = v * f64::from(self.height - 1);
        let mut y0 = fy as u32;
        if y0 == self.height - 1 {
            y0 -= 1;
        }
        let fy = fy - f64::from(y0);

        let c00 = self.texel(x0, y0);
        let c10 = self.texel(x0 + 1, y0);
        let c11 = self.texel(x0 + 1, y0 + 1);
        let c01 = self.texel(x0, y0 + 1);

        let blend = |f: fn(Rgba8) -> u8| {
            (f64::from(f(c00)) * (1.0 - fx) * (1.0 - fy)
                + f64::from(f(c10)) * fx * (1.0 - fy)
                + f64::from(f(c11)) * fx * fy
                + f64::from(f(c01)) * (1.0 - fx) * fy) as u8
        };
        Rgba8::new(blend(|c| c.r), blend(|c| c.g), blend(|c| c.b), blend(|c| c.a))
    }

    fn texel(&self, x: u32, y: u32) -> Rgba8 {
        let i = (((y as usize) * (self.width as usize)) + (x as usize)) * 4;
        Rgba8::new(self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/texture.rs"]
mod tests;
