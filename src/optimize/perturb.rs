use rand::Rng;
use smallvec::SmallVec;

use crate::config::paint_config::PerturbConfig;
use crate::foundation::core::{Bounds, Point, Vec2};
use crate::foundation::math::wrap_angle;
use crate::raster::pose::StrokePose;

/// One kind of random pose change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Perturbation {
    /// Move the center.
    Translate,
    /// Change the rotation.
    Rotate,
    /// Grow or shrink uniformly.
    Scale,
}

/// Samples perturbations for one stroke and keeps poses inside the search domain.
///
/// Centers stay within the canvas rectangle; scales keep the footprint's shorter side between
/// one pixel and twice the canvas's longer side.
#[derive(Clone, Debug)]
pub(crate) struct Perturber {
    kinds: SmallVec<[Perturbation; 3]>,
    translate: f64,
    rotate: f64,
    scale_range: (f64, f64),
    scale_limits: (f64, f64),
    bounds: Bounds,
}

impl Perturber {
    pub(crate) fn new(
        cfg: &PerturbConfig,
        reference_size: f64,
        texture_reference: f64,
        bounds: Bounds,
        allow_rotate: bool,
        allow_scale: bool,
    ) -> Self {
        let mut kinds = SmallVec::new();
        kinds.push(Perturbation::Translate);
        if allow_rotate {
            kinds.push(Perturbation::Rotate);
        }
        if allow_scale {
            kinds.push(Perturbation::Scale);
        }
        let texture_reference = texture_reference.max(1.0);
        Self {
            kinds,
            translate: cfg.translate_range(reference_size),
            rotate: cfg.rotate_rad,
            scale_range: (cfg.scale_min, cfg.scale_max),
            scale_limits: (
                1.0 / texture_reference,
                2.0 * f64::from(bounds.longer_side()) / texture_reference,
            ),
            bounds,
        }
    }

    /// Apply one uniformly chosen perturbation to `pose`.
    pub(crate) fn perturb<R: Rng + ?Sized>(
        &self,
        pose: &StrokePose,
        rng: &mut R,
    ) -> (Perturbation, StrokePose) {
        let kind = self.kinds[rng.random_range(0..self.kinds.len())];
        let mut next = *pose;
        match kind {
            Perturbation::Translate => {
                let t = self.translate;
                next.center = Point::new(
                    pose.center.x + rng.random_range(-t..=t),
                    pose.center.y + rng.random_range(-t..=t),
                );
            }
            Perturbation::Rotate => {
                let r = self.rotate;
                next.rotation = wrap_angle(pose.rotation + rng.random_range(-r..=r));
            }
            Perturbation::Scale => {
                let (lo, hi) = self.scale_range;
                next.scale = pose.scale * rng.random_range(lo..=hi);
            }
        }
        (kind, self.clamp(next))
    }

    pub(crate) fn clamp(&self, pose: StrokePose) -> StrokePose {
        let (lo, hi) = self.scale_limits;
        StrokePose {
            center: Point::new(
                pose.center.x.clamp(0.0, f64::from(self.bounds.width)),
                pose.center.y.clamp(0.0, f64::from(self.bounds.height)),
            ),
            rotation: pose.rotation,
            scale: Vec2::new(pose.scale.x.clamp(lo, hi), pose.scale.y.clamp(lo, hi)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/perturb.rs"]
mod tests;
