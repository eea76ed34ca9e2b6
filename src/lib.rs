//! strokepaint reconstructs images as sequences of textured strokes.
//!
//! Each stroke is placed by a greedy hill-climbing search that rasterizes a rotated, scaled,
//! semi-transparent texture and scores only the pixels it touches. The public API is
//! session-oriented:
//!
//! - Validate a [`PaintConfig`] and build a [`TextureSet`]
//! - Create a [`PaintSession`] over a target and a starting canvas
//! - Paint strokes one by one or all at once, observing them through a [`StrokeSink`]
//! - Re-render the committed strokes at any resolution with [`render_strokes`]
//!
//! Frames of an animation are independent and can be painted in parallel with
//! [`paint_frames`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod field;
mod foundation;
mod optimize;
mod raster;
mod scoring;
mod texture;

/// Painting sessions, sinks and re-rendering.
pub mod session;

pub use crate::foundation::core::{Affine, Bounds, Point, Rgba, Vec2};
pub use crate::foundation::error::{PaintError, PaintResult};

pub use crate::assets::decode::{
    AnimationFrames, decode_animation_frames, decode_target, decode_texture, encode_gif,
    encode_png,
};
pub use crate::assets::files::{load_target, load_texture_dir, load_textures};
pub use crate::config::paint_config::{PaintConfig, PerturbConfig, VectorFieldConfig};
pub use crate::field::expression::FieldExpr;
pub use crate::field::vector_field::{FALLBACK_ANGLE, VectorField};
pub use crate::optimize::budget::iteration_budget;
pub use crate::optimize::hill_climb::{Candidate, ClimbOutcome, HillClimber};
pub use crate::optimize::perturb::Perturbation;
pub use crate::raster::buffer::PixelBuffer;
pub use crate::raster::pose::StrokePose;
pub use crate::raster::rasterizer::{
    AffectedPixel, Footprint, commit_stroke, rasterize, rasterize_into,
};
pub use crate::scoring::{EMPTY_FOOTPRINT_SCORE, score, stroke_color};
pub use crate::session::frames::{FrameThreading, PaintRng, frame_rng, paint_frames};
pub use crate::session::paint_session::{PaintReport, PaintSession, Painting, StrokeStep};
pub use crate::session::record::{CommittedStroke, StrokeLog};
pub use crate::session::render::{output_dimensions, render_strokes};
pub use crate::session::sink::{
    NullSink, RecordedStroke, SinkControl, StrokeEvent, StrokeRecorder, StrokeSink,
};
pub use crate::texture::descriptor::{TexelSample, TextureDescriptor};
pub use crate::texture::set::TextureSet;
