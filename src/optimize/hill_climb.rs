use std::f64::consts::TAU;

use rand::Rng;

use crate::config::paint_config::PaintConfig;
use crate::field::vector_field::VectorField;
use crate::foundation::core::{Point, Rgba};
use crate::foundation::error::{PaintError, PaintResult};
use crate::optimize::perturb::Perturber;
use crate::raster::buffer::PixelBuffer;
use crate::raster::pose::StrokePose;
use crate::raster::rasterizer::{Footprint, rasterize_into};
use crate::scoring::{EMPTY_FOOTPRINT_SCORE, score, stroke_color};
use crate::texture::descriptor::TextureDescriptor;

/// A scored pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Placement.
    pub pose: StrokePose,
    /// Mean target color under the placement.
    pub color: Rgba,
    /// Improvement score; [`EMPTY_FOOTPRINT_SCORE`] when nothing is touched.
    pub score: f64,
}

impl Candidate {
    /// `true` when the pose touched at least one pixel.
    pub fn is_placeable(&self) -> bool {
        self.score > EMPTY_FOOTPRINT_SCORE
    }
}

/// Result of one stroke's search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClimbOutcome {
    /// Best candidate found. Equal to `initial` when nothing was accepted.
    pub best: Candidate,
    /// Random starting candidate.
    pub initial: Candidate,
    /// Candidates evaluated after the initial one.
    pub iterations: u32,
    /// Candidates that replaced the best.
    pub accepted: u32,
    /// Search ended on the consecutive-rejection threshold.
    pub early_terminated: bool,
}

/// Greedy local search for one stroke against a fixed canvas.
///
/// The climber only reads the canvas; committing the result is the caller's job.
pub struct HillClimber<'a> {
    target: &'a PixelBuffer,
    canvas: &'a PixelBuffer,
    texture: &'a TextureDescriptor,
    field: Option<&'a VectorField>,
    config: &'a PaintConfig,
    perturber: Perturber,
    scratch: Footprint,
}

impl<'a> HillClimber<'a> {
    /// Set up a search. `target` and `canvas` must share dimensions.
    pub fn new(
        target: &'a PixelBuffer,
        canvas: &'a PixelBuffer,
        texture: &'a TextureDescriptor,
        field: Option<&'a VectorField>,
        config: &'a PaintConfig,
    ) -> PaintResult<Self> {
        if target.bounds() != canvas.bounds() {
            return Err(PaintError::config(format!(
                "canvas is {}x{} but target is {}x{}",
                canvas.width(),
                canvas.height(),
                target.width(),
                target.height()
            )));
        }
        Ok(Self::new_unchecked(target, canvas, texture, field, config))
    }

    /// Like [`Self::new`] for callers that already matched the buffer sizes.
    pub(crate) fn new_unchecked(
        target: &'a PixelBuffer,
        canvas: &'a PixelBuffer,
        texture: &'a TextureDescriptor,
        field: Option<&'a VectorField>,
        config: &'a PaintConfig,
    ) -> Self {
        let perturber = Perturber::new(
            &config.perturbation,
            config.reference_size,
            texture.reference_size(),
            canvas.bounds(),
            field.is_none(),
            !config.fixed_size,
        );
        Self {
            target,
            canvas,
            texture,
            field,
            config,
            perturber,
            scratch: Footprint::default(),
        }
    }

    /// Random starting pose: anywhere on the canvas at the reference size.
    pub fn initial_pose<R: Rng + ?Sized>(&self, rng: &mut R) -> StrokePose {
        let bounds = self.canvas.bounds();
        let center = Point::new(
            rng.random_range(0.0..f64::from(bounds.width)),
            rng.random_range(0.0..f64::from(bounds.height)),
        );
        let rotation = rng.random_range(0.0..TAU);
        let mut scale = self.config.reference_size / self.texture.reference_size();
        if let Some([lo, hi]) = self.config.size_jitter {
            scale *= rng.random_range(lo..=hi);
        }
        let pose = self.constrain(StrokePose::uniform(center, rotation, scale));
        self.perturber.clamp(pose)
    }

    /// Color and score for `pose` against the current canvas.
    pub fn evaluate(&mut self, pose: &StrokePose) -> Candidate {
        rasterize_into(
            pose,
            self.texture,
            self.config.opacity,
            self.canvas.bounds(),
            &mut self.scratch,
        );
        match stroke_color(&self.scratch, self.target) {
            Some(color) => Candidate {
                pose: *pose,
                color,
                score: score(&self.scratch, self.target, self.canvas, color),
            },
            None => Candidate {
                pose: *pose,
                color: Rgba::default(),
                score: EMPTY_FOOTPRINT_SCORE,
            },
        }
    }

    /// Search from a random start with `budget` candidate evaluations.
    pub fn climb<R: Rng + ?Sized>(&mut self, budget: u32, rng: &mut R) -> ClimbOutcome {
        let start = self.initial_pose(rng);
        self.climb_from(start, budget, rng)
    }

    /// Search from `start`. Only strictly better candidates are accepted.
    pub fn climb_from<R: Rng + ?Sized>(
        &mut self,
        start: StrokePose,
        budget: u32,
        rng: &mut R,
    ) -> ClimbOutcome {
        let start = self.constrain(start);
        let initial = self.evaluate(&start);
        let mut best = initial;
        let mut iterations = 0u32;
        let mut accepted = 0u32;
        let mut rejections = 0u32;
        let mut early_terminated = false;

        while iterations < budget {
            let (kind, pose) = self.perturber.perturb(&best.pose, rng);
            let pose = self.constrain(pose);
            let candidate = self.evaluate(&pose);
            iterations += 1;

            if candidate.score > best.score {
                tracing::trace!(
                    iteration = iterations,
                    kind = ?kind,
                    score = candidate.score,
                    "candidate accepted"
                );
                best = candidate;
                accepted += 1;
                rejections = 0;
            } else {
                rejections += 1;
                if self.config.early_termination && rejections >= self.config.failure_threshold {
                    early_terminated = true;
                    break;
                }
            }
        }

        ClimbOutcome {
            best,
            initial,
            iterations,
            accepted,
            early_terminated,
        }
    }

    /// Force the rotation onto the vector field when one is set.
    fn constrain(&self, mut pose: StrokePose) -> StrokePose {
        if let Some(field) = self.field {
            pose.rotation = field.preferred_angle(pose.center);
        }
        pose
    }
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/hill_climb.rs"]
mod tests;
