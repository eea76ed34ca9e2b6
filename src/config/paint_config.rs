use std::{fs::File, io::BufReader, path::Path};

use crate::field::vector_field::VectorField;
use crate::foundation::core::Vec2;
use crate::foundation::error::{PaintError, PaintResult};

/// Run-level painting parameters.
///
/// Every field has a default, so a JSON file only needs to name what it changes. Unknown
/// keys are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaintConfig {
    /// Length the target's shorter side is resized to before painting. Must exceed 10.
    pub computation_size: u32,
    /// Number of strokes to paint per frame.
    pub stroke_count: u32,
    /// Search budget of the first stroke.
    pub min_iterations: u32,
    /// Search budget of the last stroke.
    pub max_iterations: u32,
    /// Constant stroke opacity in `(0, 1]`.
    pub opacity: f32,
    /// Initial length, in canvas pixels, of a stroke's shorter side.
    pub reference_size: f64,
    /// Optional `[lo, hi]` factor range applied to the initial scale.
    pub size_jitter: Option<[f64; 2]>,
    /// Never perturb scale.
    pub fixed_size: bool,
    /// Stop a stroke's search after `failure_threshold` consecutive rejections.
    pub early_termination: bool,
    /// Consecutive rejections tolerated when `early_termination` is set.
    pub failure_threshold: u32,
    /// Optional stroke direction constraint.
    pub vector_field: VectorFieldConfig,
    /// Perturbation magnitudes.
    pub perturbation: PerturbConfig,
    /// Longer side, in pixels, of the re-rendered output.
    pub output_size: u32,
    /// Run seed. Frame `i` derives its own generator from this.
    pub seed: u64,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            computation_size: 200,
            stroke_count: 100,
            min_iterations: 20,
            max_iterations: 100,
            opacity: 1.0,
            reference_size: 20.0,
            size_jitter: None,
            fixed_size: false,
            early_termination: false,
            failure_threshold: 10,
            vector_field: VectorFieldConfig::default(),
            perturbation: PerturbConfig::default(),
            output_size: 1200,
            seed: 0,
        }
    }
}

/// Vector-field constraint settings.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VectorFieldConfig {
    /// Force stroke rotation to follow the field.
    pub enabled: bool,
    /// Horizontal component `f(x, y)`.
    pub f: String,
    /// Vertical component `g(x, y)`.
    pub g: String,
    /// Canvas point treated as the field's origin.
    pub origin_shift: [f64; 2],
    /// Per-frame origin shifts for animations. Frames past the end use `origin_shift`.
    pub frame_origin_shifts: Vec<[f64; 2]>,
}

impl VectorFieldConfig {
    /// Origin shift used by frame `frame_index`.
    pub fn origin_shift_for_frame(&self, frame_index: usize) -> Vec2 {
        let [x, y] = self
            .frame_origin_shifts
            .get(frame_index)
            .copied()
            .unwrap_or(self.origin_shift);
        Vec2::new(x, y)
    }

    /// Compile the field for `frame_index`, or `None` when disabled.
    pub fn build(&self, frame_index: usize) -> PaintResult<Option<VectorField>> {
        if !self.enabled {
            return Ok(None);
        }
        VectorField::new(&self.f, &self.g, self.origin_shift_for_frame(frame_index)).map(Some)
    }
}

/// Magnitudes of the optimizer's random perturbations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerturbConfig {
    /// Maximum translation per axis in canvas pixels. Defaults to half the reference size.
    pub translate_px: Option<f64>,
    /// Maximum rotation change in radians.
    pub rotate_rad: f64,
    /// Smallest scale factor per step.
    pub scale_min: f64,
    /// Largest scale factor per step.
    pub scale_max: f64,
}

impl Default for PerturbConfig {
    fn default() -> Self {
        Self {
            translate_px: None,
            rotate_rad: std::f64::consts::FRAC_PI_6,
            scale_min: 0.8,
            scale_max: 1.25,
        }
    }
}

impl PerturbConfig {
    /// Effective translation range for strokes of `reference_size`.
    pub fn translate_range(&self, reference_size: f64) -> f64 {
        self.translate_px
            .unwrap_or((reference_size * 0.5).max(1.0))
    }
}

impl PaintConfig {
    /// Parse a configuration from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> PaintResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PaintError::config(format!("parse paint config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PaintResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PaintError::config(format!("open paint config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every constraint, reporting all violations at once.
    pub fn validate(&self) -> PaintResult<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.computation_size <= 10 {
            errors.push("computation_size must be > 10".to_owned());
        }
        if self.stroke_count == 0 {
            errors.push("stroke_count must be > 0".to_owned());
        }
        if self.min_iterations == 0 {
            errors.push("min_iterations must be > 0".to_owned());
        }
        if self.max_iterations < self.min_iterations {
            errors.push("max_iterations must be >= min_iterations".to_owned());
        }
        if !(self.opacity > 0.0 && self.opacity <= 1.0) {
            errors.push("opacity must be in (0, 1]".to_owned());
        }
        if !(self.reference_size.is_finite() && self.reference_size > 0.0) {
            errors.push("reference_size must be a positive number".to_owned());
        }
        if let Some([lo, hi]) = self.size_jitter
            && !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi)
        {
            errors.push("size_jitter must satisfy 0 < lo <= hi".to_owned());
        }
        if self.early_termination && self.failure_threshold == 0 {
            errors.push("failure_threshold must be > 0 when early_termination is set".to_owned());
        }
        if self.vector_field.enabled {
            if self.vector_field.f.trim().is_empty() {
                errors.push("vector_field.f must be non-empty when the field is enabled".to_owned());
            }
            if self.vector_field.g.trim().is_empty() {
                errors.push("vector_field.g must be non-empty when the field is enabled".to_owned());
            }
        }
        let p = &self.perturbation;
        if let Some(t) = p.translate_px
            && !(t.is_finite() && t > 0.0)
        {
            errors.push("perturbation.translate_px must be a positive number".to_owned());
        }
        if !(p.rotate_rad.is_finite() && p.rotate_rad >= 0.0) {
            errors.push("perturbation.rotate_rad must be >= 0".to_owned());
        }
        if !(p.scale_min.is_finite() && p.scale_max.is_finite() && p.scale_min > 0.0)
            || p.scale_min > p.scale_max
        {
            errors.push("perturbation scale range must satisfy 0 < scale_min <= scale_max".to_owned());
        }
        if self.output_size == 0 {
            errors.push("output_size must be > 0".to_owned());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PaintError::config(errors.join("; ")))
        }
    }

    /// Iteration budget for stroke `stroke_index` of this run.
    pub fn iteration_budget(&self, stroke_index: u32) -> u32 {
        crate::optimize::budget::iteration_budget(
            stroke_index,
            self.stroke_count,
            self.min_iterations,
            self.max_iterations,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/paint_config.rs"]
mod tests;
