use crate::foundation::core::Rgba;
use crate::raster::pose::StrokePose;
use crate::raster::rasterizer::Footprint;

/// What a sink wants the session to do after a stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkControl {
    /// Keep painting.
    Continue,
    /// Stop after this stroke. The canvas keeps every stroke committed so far.
    Stop,
}

/// Everything known about a finished stroke.
#[derive(Clone, Copy, Debug)]
pub struct StrokeEvent<'a> {
    /// Zero-based stroke index within the session.
    pub index: u32,
    /// Name of the texture used.
    pub texture: &'a str,
    /// Final pose.
    pub pose: StrokePose,
    /// Stroke color.
    pub color: Rgba,
    /// Run opacity.
    pub opacity: f32,
    /// Pixels composited. Empty for degraded strokes.
    pub footprint: &'a Footprint,
    /// Score of the committed pose.
    pub score: f64,
    /// Score of the random starting pose.
    pub initial_score: f64,
    /// Candidates evaluated.
    pub iterations: u32,
    /// The search found no placeable pose and nothing was committed.
    pub degraded: bool,
}

/// Sink contract for observing strokes as they are committed.
///
/// Ordering contract: `on_stroke` is called once per stroke, in increasing `index` order, after
/// the stroke has been composited.
pub trait StrokeSink: Send {
    /// Observe one stroke and decide whether painting continues.
    fn on_stroke(&mut self, event: &StrokeEvent<'_>) -> SinkControl;
}

/// Sink that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl StrokeSink for NullSink {
    fn on_stroke(&mut self, _event: &StrokeEvent<'_>) -> SinkControl {
        SinkControl::Continue
    }
}

/// Owned copy of a [`StrokeEvent`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedStroke {
    /// Zero-based stroke index.
    pub index: u32,
    /// Texture name.
    pub texture: String,
    /// Final pose.
    pub pose: StrokePose,
    /// Stroke color.
    pub color: Rgba,
    /// Score of the committed pose.
    pub score: f64,
    /// Score of the random starting pose.
    pub initial_score: f64,
    /// Candidates evaluated.
    pub iterations: u32,
    /// Number of pixels composited.
    pub pixels: usize,
    /// Nothing was committed.
    pub degraded: bool,
}

/// In-memory sink for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct StrokeRecorder {
    strokes: Vec<RecordedStroke>,
    stop_after: Option<usize>,
}

impl StrokeRecorder {
    /// Recorder that never stops the session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder that requests a stop once it has seen `n` strokes.
    pub fn stop_after(n: usize) -> Self {
        Self {
            strokes: Vec::new(),
            stop_after: Some(n),
        }
    }

    /// Borrow the recorded strokes.
    pub fn strokes(&self) -> &[RecordedStroke] {
        &self.strokes
    }
}

impl StrokeSink for StrokeRecorder {
    fn on_stroke(&mut self, event: &StrokeEvent<'_>) -> SinkControl {
        self.strokes.push(RecordedStroke {
            index: event.index,
            texture: event.texture.to_owned(),
            pose: event.pose,
            color: event.color,
            score: event.score,
            initial_score: event.initial_score,
            iterations: event.iterations,
            pixels: event.footprint.len(),
            degraded: event.degraded,
        });
        match self.stop_after {
            Some(n) if self.strokes.len() >= n => SinkControl::Stop,
            _ => SinkControl::Continue,
        }
    }
}
