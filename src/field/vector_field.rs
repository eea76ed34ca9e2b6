use crate::field::expression::FieldExpr;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::PaintResult;

/// Angle returned where the field is undefined or vanishes.
pub const FALLBACK_ANGLE: f64 = 0.0;

/// Direction constraint `θ(p) = atan2(g(q), f(q))` with `q = p - origin_shift`.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorField {
    f: FieldExpr,
    g: FieldExpr,
    origin_shift: Vec2,
}

impl VectorField {
    /// Compile both components.
    pub fn new(f: &str, g: &str, origin_shift: Vec2) -> PaintResult<Self> {
        Ok(Self {
            f: FieldExpr::compile(f)?,
            g: FieldExpr::compile(g)?,
            origin_shift,
        })
    }

    /// Field vector `(f, g)` at canvas point `p`.
    pub fn vector_at(&self, p: Point) -> Vec2 {
        let q = p - self.origin_shift;
        Vec2::new(self.f.eval(q.x, q.y), self.g.eval(q.x, q.y))
    }

    /// Preferred stroke rotation at `p`, in radians.
    ///
    /// Falls back to [`FALLBACK_ANGLE`] when either component is non-finite or both are zero.
    pub fn preferred_angle(&self, p: Point) -> f64 {
        let v = self.vector_at(p);
        if !v.x.is_finite() || !v.y.is_finite() || (v.x == 0.0 && v.y == 0.0) {
            return FALLBACK_ANGLE;
        }
        v.y.atan2(v.x)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/vector_field.rs"]
mod tests;
