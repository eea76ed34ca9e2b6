use crate::foundation::error::{PaintError, PaintResult};

/// One texel of a stroke texture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TexelSample {
    /// Luminance masked by alpha, in `[0, 1]`.
    pub coverage: f32,
    /// Texture alpha, in `[0, 1]`.
    pub alpha: f32,
}

/// Immutable, preprocessed stroke shape.
///
/// Sampling is bilinear with clamp-to-edge addressing. Texel `(i, j)` has its center at
/// `(i + 0.5, j + 0.5)` in texture-local coordinates, so the texture spans `[0, w] x [0, h]`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureDescriptor {
    width: u32,
    height: u32,
    texels: Vec<TexelSample>,
}

impl TextureDescriptor {
    /// Build from row-major texels.
    pub fn from_texels(width: u32, height: u32, texels: Vec<TexelSample>) -> PaintResult<Self> {
        if width == 0 || height == 0 {
            return Err(PaintError::texture(format!(
                "texture dimensions must be non-zero, got {width}x{height}"
            )));
        }
        if texels.len() != width as usize * height as usize {
            return Err(PaintError::texture(format!(
                "texture expects {} texels for {width}x{height}, got {}",
                width as usize * height as usize,
                texels.len()
            )));
        }
        if texels.iter().any(|t| {
            !(0.0..=1.0).contains(&t.coverage) || !(0.0..=1.0).contains(&t.alpha)
        }) {
            return Err(PaintError::texture("texel coverage and alpha must lie in [0, 1]"));
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Derive texels from 8-bit straight RGBA.
    ///
    /// Coverage is Rec. 601 luminance masked by alpha.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> PaintResult<Self> {
        if rgba.len() != width as usize * height as usize * 4 {
            return Err(PaintError::texture(format!(
                "rgba8 texture length {} does not match {width}x{height}",
                rgba.len()
            )));
        }
        let texels = rgba
            .chunks_exact(4)
            .map(|px| {
                let luma = (0.299 * f32::from(px[0])
                    + 0.587 * f32::from(px[1])
                    + 0.114 * f32::from(px[2]))
                    / 255.0;
                let alpha = f32::from(px[3]) / 255.0;
                TexelSample {
                    coverage: (luma * alpha).clamp(0.0, 1.0),
                    alpha,
                }
            })
            .collect();
        Self::from_texels(width, height, texels)
    }

    /// Texture of `width x height` identical texels.
    pub fn filled(width: u32, height: u32, texel: TexelSample) -> PaintResult<Self> {
        Self::from_texels(width, height, vec![texel; width as usize * height as usize])
    }

    /// Native width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Native height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Length of the shorter side.
    pub fn reference_size(&self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// Texel at integer coordinates.
    pub fn texel(&self, x: u32, y: u32) -> TexelSample {
        self.texels[y as usize * self.width as usize + x as usize]
    }

    /// Bilinear sample at texture-local `(u, v)`.
    pub fn sample(&self, u: f64, v: f64) -> TexelSample {
        let fx = u - 0.5;
        let fy = v - 0.5;
        let x0f = fx.floor();
        let y0f = fy.floor();
        let tx = (fx - x0f) as f32;
        let ty = (fy - y0f) as f32;

        let max_x = i64::from(self.width) - 1;
        let max_y = i64::from(self.height) - 1;
        let x0 = (x0f as i64).clamp(0, max_x) as u32;
        let x1 = (x0f as i64 + 1).clamp(0, max_x) as u32;
        let y0 = (y0f as i64).clamp(0, max_y) as u32;
        let y1 = (y0f as i64 + 1).clamp(0, max_y) as u32;

        let a = self.texel(x0, y0);
        let b = self.texel(x1, y0);
        let c = self.texel(x0, y1);
        let d = self.texel(x1, y1);

        let mix = |p: f32, q: f32, r: f32, s: f32| {
            let top = p + (q - p) * tx;
            let bottom = r + (s - r) * tx;
            top + (bottom - top) * ty
        };
        TexelSample {
            coverage: mix(a.coverage, b.coverage, c.coverage, d.coverage),
            alpha: mix(a.alpha, b.alpha, c.alpha, d.alpha),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/descriptor.rs"]
mod tests;
