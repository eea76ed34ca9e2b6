use rand::SeedableRng;
use rayon::prelude::*;

use crate::config::paint_config::PaintConfig;
use crate::foundation::error::{PaintError, PaintResult};
use crate::foundation::math::frame_seed;
use crate::raster::buffer::PixelBuffer;
use crate::session::paint_session::{PaintSession, Painting};
use crate::session::sink::NullSink;
use crate::texture::set::TextureSet;

/// Generator used for painting.
pub type PaintRng = rand_pcg::Pcg32;

/// Generator for frame `frame_index` of a run seeded with `seed`.
///
/// Frames get independent streams, so painting order does not affect results.
pub fn frame_rng(seed: u64, frame_index: usize) -> PaintRng {
    PaintRng::seed_from_u64(frame_seed(seed, frame_index))
}

/// How [`paint_frames`] schedules work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameThreading {
    /// Paint frames concurrently on a dedicated thread pool.
    pub parallel: bool,
    /// Worker count for the pool; `None` lets rayon decide.
    pub threads: Option<usize>,
}

/// Paint every frame independently.
///
/// Each frame starts from a canvas filled with its target's average color and draws from
/// [`frame_rng`]. Results come back in frame order and are identical whether or not
/// `threading.parallel` is set.
#[tracing::instrument(skip_all, fields(frames = targets.len(), parallel = threading.parallel))]
pub fn paint_frames(
    targets: &[PixelBuffer],
    textures: &TextureSet,
    config: &PaintConfig,
    threading: FrameThreading,
) -> PaintResult<Vec<Painting>> {
    config.validate()?;

    let paint_one = |(frame_index, target): (usize, &PixelBuffer)| -> PaintResult<Painting> {
        let canvas = PixelBuffer::new_filled(target.width(), target.height(), target.average_rgb())?;
        let mut session = PaintSession::for_frame(target, canvas, textures, config, frame_index)?;
        let mut rng = frame_rng(config.seed, frame_index);
        session.paint(&mut rng, &mut NullSink);
        tracing::debug!(frame = frame_index, "frame painted");
        Ok(session.into_painting())
    };

    if !threading.parallel {
        return targets.iter().enumerate().map(paint_one).collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| targets.par_iter().enumerate().map(paint_one).collect())
}

fn build_thread_pool(threads: Option<usize>) -> PaintResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PaintError::config("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PaintError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/frames.rs"]
mod tests;
