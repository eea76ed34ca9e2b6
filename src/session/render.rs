use crate::foundation::core::Bounds;
use crate::foundation::error::{PaintError, PaintResult};
use crate::raster::buffer::PixelBuffer;
use crate::raster::rasterizer::commit_stroke;
use crate::session::record::CommittedStroke;
use crate::texture::set::TextureSet;

/// Replay `strokes` onto `base`, scaling every pose by `scale`.
///
/// With `scale == 1` and `base` equal to the session's starting canvas this reproduces the
/// session's final canvas exactly.
#[tracing::instrument(skip_all, fields(strokes = strokes.len(), scale = scale))]
pub fn render_strokes(
    strokes: &[CommittedStroke],
    textures: &TextureSet,
    opacity: f32,
    mut base: PixelBuffer,
    scale: f64,
) -> PaintResult<PixelBuffer> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(PaintError::evaluation(format!(
            "render scale must be a positive number, got {scale}"
        )));
    }
    for (i, stroke) in strokes.iter().enumerate() {
        let texture = textures.get(&stroke.texture).ok_or_else(|| {
            PaintError::texture(format!(
                "stroke {i} references unknown texture '{}'",
                stroke.texture
            ))
        })?;
        let pose = if scale == 1.0 {
            stroke.pose
        } else {
            stroke.pose.scaled(scale)
        };
        commit_stroke(&pose, texture, opacity, stroke.color, &mut base);
    }
    Ok(base)
}

/// Output size whose longer side is `long_side`, plus the scale factor from `bounds`.
pub fn output_dimensions(bounds: Bounds, long_side: u32) -> PaintResult<(u32, u32, f64)> {
    if bounds.is_empty() || long_side == 0 {
        return Err(PaintError::config(format!(
            "cannot scale {}x{} to a longer side of {long_side}",
            bounds.width, bounds.height
        )));
    }
    let scale = f64::from(long_side) / f64::from(bounds.longer_side());
    let w = ((f64::from(bounds.width) * scale).round() as u32).max(1);
    let h = ((f64::from(bounds.height) * scale).round() as u32).max(1);
    Ok((w, h, scale))
}

#[cfg(test)]
#[path = "../../tests/unit/session/render.rs"]
mod tests;
