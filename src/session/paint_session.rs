use rand::Rng;

use crate::config::paint_config::PaintConfig;
use crate::field::vector_field::VectorField;
use crate::foundation::error::{PaintError, PaintResult};
use crate::optimize::hill_climb::HillClimber;
use crate::raster::buffer::PixelBuffer;
use crate::raster::rasterizer::rasterize;
use crate::session::record::CommittedStroke;
use crate::session::sink::{SinkControl, StrokeEvent, StrokeSink};
use crate::texture::set::TextureSet;

/// Final state of a painted frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Painting {
    /// Canvas after the last committed stroke.
    pub canvas: PixelBuffer,
    /// Strokes in commit order.
    pub strokes: Vec<CommittedStroke>,
}

/// Summary of a [`PaintSession::paint`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintReport {
    /// Strokes composited into the canvas.
    pub committed: u32,
    /// Strokes skipped because no placeable pose was found.
    pub degraded: u32,
    /// Candidates evaluated across all strokes.
    pub iterations: u64,
    /// A sink stopped the session before `stroke_count` was reached.
    pub cancelled: bool,
}

/// Result of one [`PaintSession::paint_next`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeStep {
    /// Zero-based stroke index.
    pub index: u32,
    /// The stroke was composited; `false` means it degraded.
    pub committed: bool,
    /// Candidates evaluated.
    pub iterations: u32,
    /// The sink's decision.
    pub control: SinkControl,
}

/// Sequential painter for a single frame.
///
/// Owns the canvas; each stroke is searched against the canvas as left by every earlier
/// commit.
#[derive(Debug)]
pub struct PaintSession<'a> {
    target: &'a PixelBuffer,
    canvas: PixelBuffer,
    textures: &'a TextureSet,
    config: PaintConfig,
    field: Option<VectorField>,
    strokes: Vec<CommittedStroke>,
    next_stroke: u32,
}

impl<'a> PaintSession<'a> {
    /// Build a session for a still image.
    pub fn new(
        target: &'a PixelBuffer,
        canvas: PixelBuffer,
        textures: &'a TextureSet,
        config: &PaintConfig,
    ) -> PaintResult<Self> {
        Self::for_frame(target, canvas, textures, config, 0)
    }

    /// Build a session for frame `frame_index` of an animation.
    ///
    /// The frame index only selects the vector field's origin shift.
    pub fn for_frame(
        target: &'a PixelBuffer,
        canvas: PixelBuffer,
        textures: &'a TextureSet,
        config: &PaintConfig,
        frame_index: usize,
    ) -> PaintResult<Self> {
        config.validate()?;
        if textures.is_empty() {
            return Err(PaintError::config("texture set must contain at least one texture"));
        }
        if target.bounds() != canvas.bounds() {
            return Err(PaintError::config(format!(
                "canvas is {}x{} but target is {}x{}",
                canvas.width(),
                canvas.height(),
                target.width(),
                target.height()
            )));
        }
        let field = config.vector_field.build(frame_index)?;
        Ok(Self {
            target,
            canvas,
            textures,
            config: config.clone(),
            field,
            strokes: Vec::with_capacity(config.stroke_count as usize),
            next_stroke: 0,
        })
    }

    /// Canvas in its current state.
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    /// Strokes committed so far.
    pub fn strokes(&self) -> &[CommittedStroke] {
        &self.strokes
    }

    /// Compiled vector field, if enabled.
    pub fn field(&self) -> Option<&VectorField> {
        self.field.as_ref()
    }

    /// Strokes not yet attempted.
    pub fn remaining(&self) -> u32 {
        self.config.stroke_count - self.next_stroke
    }

    /// Search and commit the next stroke.
    ///
    /// Returns `None` once every stroke has been attempted.
    pub fn paint_next<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        sink: &mut dyn StrokeSink,
    ) -> Option<StrokeStep> {
        if self.remaining() == 0 {
            return None;
        }
        let index = self.next_stroke;
        self.next_stroke += 1;

        let textures = self.textures;
        let (name, texture) = textures.choose(rng)?;
        let budget = self.config.iteration_budget(index);
        // Bounds were matched in `for_frame`.
        let outcome = HillClimber::new_unchecked(
            self.target,
            &self.canvas,
            texture,
            self.field.as_ref(),
            &self.config,
        )
        .climb(budget, rng);

        let best = outcome.best;
        let footprint = rasterize(&best.pose, texture, self.config.opacity, self.canvas.bounds());
        let degraded = footprint.is_empty();
        if degraded {
            tracing::warn!(
                stroke = index,
                texture = name,
                iterations = outcome.iterations,
                "no placeable pose found; stroke skipped"
            );
        } else {
            footprint.composite_onto(&mut self.canvas, best.color);
            self.strokes.push(CommittedStroke {
                texture: name.to_owned(),
                pose: best.pose,
                color: best.color,
                score: best.score,
                iterations: outcome.iterations,
            });
            tracing::debug!(
                stroke = index,
                texture = name,
                score = best.score,
                initial_score = outcome.initial.score,
                iterations = outcome.iterations,
                accepted = outcome.accepted,
                early_terminated = outcome.early_terminated,
                pixels = footprint.len(),
                "stroke committed"
            );
        }

        let event = StrokeEvent {
            index,
            texture: name,
            pose: best.pose,
            color: best.color,
            opacity: self.config.opacity,
            footprint: &footprint,
            score: best.score,
            initial_score: outcome.initial.score,
            iterations: outcome.iterations,
            degraded,
        };
        Some(StrokeStep {
            index,
            committed: !degraded,
            iterations: outcome.iterations,
            control: sink.on_stroke(&event),
        })
    }

    /// Paint every remaining stroke, stopping early if `sink` asks to.
    #[tracing::instrument(skip_all, fields(strokes = self.config.stroke_count))]
    pub fn paint<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        sink: &mut dyn StrokeSink,
    ) -> PaintReport {
        let mut report = PaintReport::default();
        let attempted_before = self.next_stroke;

        while let Some(step) = self.paint_next(rng, sink) {
            if step.committed {
                report.committed += 1;
            } else {
                report.degraded += 1;
            }
            report.iterations += u64::from(step.iterations);
            if step.control == SinkControl::Stop {
                report.cancelled = self.remaining() > 0;
                break;
            }
        }

        tracing::info!(
            attempted = self.next_stroke - attempted_before,
            committed = report.committed,
            degraded = report.degraded,
            cancelled = report.cancelled,
            "painting finished"
        );
        report
    }

    /// Consume the session, keeping the canvas and the committed strokes.
    pub fn into_painting(self) -> Painting {
        Painting {
            canvas: self.canvas,
            strokes: self.strokes,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/paint_session.rs"]
mod tests;
