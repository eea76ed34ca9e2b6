use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::core::{Bounds, Rgba};
use crate::foundation::error::{PaintError, PaintResult};
use crate::raster::buffer::PixelBuffer;
use crate::raster::pose::StrokePose;
use crate::session::render::{output_dimensions, render_strokes};
use crate::texture::set::TextureSet;

/// A stroke as it was composited into the canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommittedStroke {
    /// Name of the texture in the session's [`TextureSet`].
    pub texture: String,
    /// Final pose in computation-canvas coordinates.
    pub pose: StrokePose,
    /// Stroke color.
    pub color: Rgba,
    /// Score at commit time.
    pub score: f64,
    /// Candidates evaluated before commit.
    pub iterations: u32,
}

/// Self-contained description of a painting, enough to re-render it at any size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeLog {
    /// Computation canvas size the poses refer to.
    pub bounds: Bounds,
    /// Run opacity.
    pub opacity: f32,
    /// Color the canvas started from.
    pub background: Rgba,
    /// Strokes in commit order.
    pub strokes: Vec<CommittedStroke>,
}

impl StrokeLog {
    /// Parse a stroke log from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> PaintResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PaintError::config(format!("parse stroke log JSON: {e}")))
    }

    /// Parse a stroke log from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PaintResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PaintError::config(format!("open stroke log JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Write as pretty JSON.
    pub fn to_writer<W: std::io::Write>(&self, w: W) -> PaintResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| PaintError::Other(anyhow::Error::new(e).context("write stroke log JSON")))
    }

    /// Re-render with the longer side set to `long_side` pixels.
    pub fn render(&self, textures: &TextureSet, long_side: u32) -> PaintResult<PixelBuffer> {
        let (w, h, scale) = output_dimensions(self.bounds, long_side)?;
        let base = PixelBuffer::new_filled(w, h, self.background)?;
        render_strokes(&self.strokes, textures, self.opacity, base, scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/record.rs"]
mod tests;
