/// Convenience result type used across fieldmovie.
pub type MovieResult<T> = Result<T, MovieError>;

/// Top-level error taxonomy.
///
/// None of these are retried: every error is terminal for the operation that raised it.
#[derive(thiserror::Error, Debug)]
pub enum MovieError {
    /// Invalid configuration or dataset content.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while composing or writing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors from the external movie encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MovieError {
    /// Build a [`MovieError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MovieError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MovieError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
