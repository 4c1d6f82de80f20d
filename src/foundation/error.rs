/// Result alias used throughout the crate.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors surfaced by the synthesis pipeline.
///
/// Every variant is fatal for the current call; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum SynthError {
    /// Invalid configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface could not be acquired (size out of range, allocation refused).
    #[error("surface error: {0}")]
    Surface(String),

    /// Encoder initialization, streaming or finalization failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Config or attribute (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure, typically IO with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SynthError {
    /// Build a [`SynthError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SynthError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`SynthError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SynthError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
