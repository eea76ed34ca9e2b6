use crate::foundation::core::{Affine, Point, Vec2};
use crate::foundation::math::wrap_angle;

/// Placement of a texture on the canvas.
///
/// `center` is in canvas pixel coordinates (pixel `(x, y)` covers `[x, x+1) x [y, y+1)`),
/// `rotation` is in radians and `scale` maps texture pixels to canvas pixels per axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokePose {
    /// Canvas-space center of the texture.
    pub center: Point,
    /// Rotation in radians, normalized to `[0, 2π)` when mapped.
    pub rotation: f64,
    /// Texture-to-canvas scale per axis.
    pub scale: Vec2,
}

impl StrokePose {
    /// Build a pose.
    pub fn new(center: Point, rotation: f64, scale: Vec2) -> Self {
        Self {
            center,
            rotation,
            scale,
        }
    }

    /// Pose with the same scale on both axes.
    pub fn uniform(center: Point, rotation: f64, scale: f64) -> Self {
        Self::new(center, rotation, Vec2::new(scale, scale))
    }

    /// `true` when every component is finite and both scales are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.rotation.is_finite()
            && self.scale.x.is_finite()
            && self.scale.y.is_finite()
            && self.scale.x > 0.0
            && self.scale.y > 0.0
    }

    /// Affine mapping texture-local coordinates of a `tex_w x tex_h` texture into canvas space.
    pub fn to_affine(&self, tex_w: f64, tex_h: f64) -> Affine {
        Affine::translate(self.center.to_vec2())
            * Affine::rotate(wrap_angle(self.rotation))
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
            * Affine::translate(Vec2::new(-tex_w * 0.5, -tex_h * 0.5))
    }

    /// Same placement on a canvas `k` times larger.
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            center: Point::new(self.center.x * k, self.center.y * k),
            rotation: self.rotation,
            scale: self.scale * k,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/pose.rs"]
mod tests;
