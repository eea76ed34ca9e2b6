use crate::foundation::core::{Bounds, Rgba};
use crate::foundation::error::{PaintError, PaintResult};

/// Dense row-major grid of straight-alpha pixels.
///
/// Used for both the read-only target and the mutable canvas. Dimensions are fixed at
/// construction and are always non-zero.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Buffer of `width x height` pixels all set to `color`.
    pub fn new_filled(width: u32, height: u32, color: Rgba) -> PaintResult<Self> {
        let bounds = Bounds::new(width, height);
        if bounds.is_empty() {
            return Err(PaintError::config(format!(
                "pixel buffer dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: vec![color; bounds.pixel_count()],
        })
    }

    /// Wrap existing row-major pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> PaintResult<Self> {
        let bounds = Bounds::new(width, height);
        if bounds.is_empty() {
            return Err(PaintError::config(format!(
                "pixel buffer dimensions must be non-zero, got {width}x{height}"
            )));
        }
        if pixels.len() != bounds.pixel_count() {
            return Err(PaintError::config(format!(
                "pixel buffer expects {} pixels for {width}x{height}, got {}",
                bounds.pixel_count(),
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode tightly packed 8-bit RGBA.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> PaintResult<Self> {
        if rgba.len() != Bounds::new(width, height).pixel_count() * 4 {
            return Err(PaintError::config(format!(
                "rgba8 buffer length {} does not match {width}x{height}",
                rgba.len()
            )));
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|px| Rgba::from_rgba8([px[0], px[1], px[2], px[3]]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Encode as tightly packed 8-bit RGBA.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&px.to_rgba8());
        }
        out
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Extent of this buffer.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`. Callers must stay inside [`Self::bounds`].
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Mean RGB over every pixel, returned fully opaque.
    pub fn average_rgb(&self) -> Rgba {
        let mut acc = [0.0f64; 3];
        for px in &self.pixels {
            acc[0] += f64::from(px.r);
            acc[1] += f64::from(px.g);
            acc[2] += f64::from(px.b);
        }
        let n = self.pixels.len() as f64;
        Rgba::opaque(
            (acc[0] / n) as f32,
            (acc[1] / n) as f32,
            (acc[2] / n) as f32,
        )
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
