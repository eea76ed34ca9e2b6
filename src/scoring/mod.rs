//! Improvement scoring over a stroke footprint.

use crate::foundation::core::Rgba;
use crate::raster::buffer::PixelBuffer;
use crate::raster::composite::over;
use crate::raster::rasterizer::Footprint;

/// Score assigned to a stroke that touches no pixels. Never beats any real candidate.
pub const EMPTY_FOOTPRINT_SCORE: f64 = f64::NEG_INFINITY;

/// Error reduction achieved by compositing `stroke_color` over `footprint`.
///
/// Sums, over affected pixels only, the RGB distance to `target` before the stroke minus the
/// distance after it. Positive means the canvas moves closer to the target. The sum is not
/// normalized by area.
pub fn score(
    footprint: &Footprint,
    target: &PixelBuffer,
    canvas_before: &PixelBuffer,
    stroke_color: Rgba,
) -> f64 {
    if footprint.is_empty() {
        return EMPTY_FOOTPRINT_SCORE;
    }
    let mut total = 0.0f64;
    for p in footprint.pixels() {
        let want = target.get(p.x, p.y);
        let before = canvas_before.get(p.x, p.y);
        let after = over(before, stroke_color, p.coverage, p.alpha);
        total += f64::from(want.rgb_distance(before)) - f64::from(want.rgb_distance(after));
    }
    total
}

/// Mean target color under `footprint`, fully opaque.
///
/// Every affected pixel counts once regardless of its sampled alpha. Returns `None` for an
/// empty footprint.
pub fn stroke_color(footprint: &Footprint, target: &PixelBuffer) -> Option<Rgba> {
    if footprint.is_empty() {
        return None;
    }
    let mut acc = [0.0f64; 3];
    for p in footprint.pixels() {
        let c = target.get(p.x, p.y);
        acc[0] += f64::from(c.r);
        acc[1] += f64::from(c.g);
        acc[2] += f64::from(c.b);
    }
    let n = footprint.len() as f64;
    Some(Rgba::opaque(
        (acc[0] / n) as f32,
        (acc[1] / n) as f32,
        (acc[2] / n) as f32,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/scoring/mod.rs"]
mod tests;
