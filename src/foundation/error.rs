/// Convenience result type used across strokepaint.
pub type PaintResult<T> = Result<T, PaintError>;

/// Top-level error taxonomy used by painting APIs.
#[derive(thiserror::Error, Debug)]
pub enum PaintError {
    /// Invalid run configuration or mismatched session inputs.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors while building or decoding stroke textures.
    #[error("texture error: {0}")]
    Texture(String),

    /// Errors while compiling vector-field expressions.
    #[error("vector field error: {0}")]
    Field(String),

    /// Runtime failures outside the per-stroke search.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PaintError {
    /// Build a [`PaintError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PaintError::Texture`] value.
    pub fn texture(msg: impl Into<String>) -> Self {
        Self::Texture(msg.into())
    }

    /// Build a [`PaintError::Field`] value.
    pub fn field(msg: impl Into<String>) -> Self {
        Self::Field(msg.into())
    }

    /// Build a [`PaintError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
