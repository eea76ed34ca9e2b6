/// Parallel painting of independent frames.
pub mod frames;
/// One frame's sequential painting session.
pub mod paint_session;
/// Serializable stroke lists.
pub mod record;
/// Re-rendering committed strokes.
pub mod render;
/// Per-stroke event delivery.
pub mod sink;
