use crate::foundation::core::{Bounds, Point, Rgba};
use crate::raster::buffer::PixelBuffer;
use crate::raster::composite::over;
use crate::raster::pose::StrokePose;
use crate::texture::descriptor::TextureDescriptor;

// Inverse-mapped centers may land a hair outside the texture rectangle through rounding.
const EDGE_EPS: f64 = 1e-9;

/// One canvas pixel touched by a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffectedPixel {
    /// Canvas column.
    pub x: u32,
    /// Canvas row.
    pub y: u32,
    /// Sampled texture coverage, in `(0, 1]`.
    pub coverage: f32,
    /// Sampled texture alpha multiplied by the run opacity, in `(0, 1]`.
    pub alpha: f32,
}

/// The exact set of canvas pixels a posed texture touches, in scanline order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Footprint {
    pixels: Vec<AffectedPixel>,
}

impl Footprint {
    /// Affected pixels in scanline order.
    pub fn pixels(&self) -> &[AffectedPixel] {
        &self.pixels
    }

    /// Number of affected pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// `true` when the stroke touches nothing.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Alpha-composite `color` into `canvas` over every affected pixel.
    pub fn composite_onto(&self, canvas: &mut PixelBuffer, color: Rgba) {
        for p in &self.pixels {
            let dst = canvas.get(p.x, p.y);
            canvas.set(p.x, p.y, over(dst, color, p.coverage, p.alpha));
        }
    }
}

/// Compute the footprint of `texture` placed at `pose`, clipped to `bounds`.
///
/// Degenerate input (collapsed or non-finite pose, empty bounds, zero opacity) yields an
/// empty footprint.
pub fn rasterize(
    pose: &StrokePose,
    texture: &TextureDescriptor,
    opacity: f32,
    bounds: Bounds,
) -> Footprint {
    let mut out = Footprint::default();
    rasterize_into(pose, texture, opacity, bounds, &mut out);
    out
}

/// Like [`rasterize`], reusing the allocation held by `out`.
pub fn rasterize_into(
    pose: &StrokePose,
    texture: &TextureDescriptor,
    opacity: f32,
    bounds: Bounds,
    out: &mut Footprint,
) {
    out.pixels.clear();
    if !pose.is_valid() || bounds.is_empty() || opacity.is_nan() || opacity <= 0.0 {
        return;
    }

    let tw = f64::from(texture.width());
    let th = f64::from(texture.height());
    let xf = pose.to_affine(tw, th);
    let det = xf.determinant();
    if !det.is_finite() || det.abs() < f64::EPSILON {
        return;
    }
    let inv = xf.inverse();

    let quad = [
        xf * Point::new(0.0, 0.0),
        xf * Point::new(tw, 0.0),
        xf * Point::new(tw, th),
        xf * Point::new(0.0, th),
    ];
    let (min_y, max_y) = quad
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });

    let Some((row_lo, row_hi)) = pixel_span(min_y, max_y, bounds.height) else {
        return;
    };

    for row in row_lo..=row_hi {
        let yc = f64::from(row) + 0.5;
        let Some((left, right)) = scanline_crossings(&quad, yc) else {
            continue;
        };
        let Some((col_lo, col_hi)) = pixel_span(left, right, bounds.width) else {
            continue;
        };

        for col in col_lo..=col_hi {
            let local = inv * Point::new(f64::from(col) + 0.5, yc);
            if local.x < -EDGE_EPS
                || local.y < -EDGE_EPS
                || local.x > tw + EDGE_EPS
                || local.y > th + EDGE_EPS
            {
                continue;
            }
            let s = texture.sample(local.x, local.y);
            let alpha = s.alpha * opacity;
            if s.coverage <= 0.0 || alpha <= 0.0 {
                continue;
            }
            out.pixels.push(AffectedPixel {
                x: col,
                y: row,
                coverage: s.coverage,
                alpha: alpha.min(1.0),
            });
        }
    }
}

/// Rasterize `pose` and composite `color` into `canvas`. Returns the footprint drawn.
pub fn commit_stroke(
    pose: &StrokePose,
    texture: &TextureDescriptor,
    opacity: f32,
    color: Rgba,
    canvas: &mut PixelBuffer,
) -> Footprint {
    let footprint = rasterize(pose, texture, opacity, canvas.bounds());
    footprint.composite_onto(canvas, color);
    footprint
}

/// Indices of pixels whose centers lie in `[lo, hi]`, clipped to `[0, len)`.
fn pixel_span(lo: f64, hi: f64, len: u32) -> Option<(u32, u32)> {
    let first = (lo - 0.5).ceil().max(0.0);
    let last = (hi - 0.5).floor().min(f64::from(len) - 1.0);
    if first > last {
        return None;
    }
    Some((first as u32, last as u32))
}

/// Leftmost and rightmost crossings of the quad's edges with the horizontal line `y`.
///
/// Edges are half-open in y so a vertex on the scanline is counted once.
fn scanline_crossings(quad: &[Point; 4], y: f64) -> Option<(f64, f64)> {
    let mut left = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;
    for i in 0..quad.len() {
        let a = quad[i];
        let b = quad[(i + 1) % quad.len()];
        let crosses = (a.y <= y && y < b.y) || (b.y <= y && y < a.y);
        if !crosses {
            continue;
        }
        let x = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
        left = left.min(x);
        right = right.max(x);
    }
    (left <= right).then_some((left, right))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rasterizer.rs"]
mod tests;
