/// Convenience result type used across Tinct.
pub type TinctResult<T> = Result<T, TinctError>;

/// Top-level error taxonomy used by the color APIs.
#[derive(thiserror::Error, Debug)]
pub enum TinctError {
    /// Malformed color text, such as a bad hex literal.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid caller-provided values outside of parsing.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TinctError {
    /// Build a [`TinctError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`TinctError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
