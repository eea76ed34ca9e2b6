/// Lex, parse or resolve failure in a field expression, located by byte offset.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("field expression error at byte {offset}: {message}")]
pub(crate) struct ExprError {
    pub(crate) offset: usize,
    pub(crate) message: String,
}

impl ExprError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}
