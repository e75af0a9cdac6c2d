/// Convenience result type used across hashposter.
pub type PosterResult<T> = Result<T, PosterError>;

/// Top-level error taxonomy used by the generation APIs.
#[derive(thiserror::Error, Debug)]
pub enum PosterError {
    /// Invalid caller-provided option values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when reading or writing option/parameter JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A serialized document failed to parse as SVG.
    #[error("markup error: {0}")]
    Markup(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PosterError {
    /// Build a [`PosterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PosterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`PosterError::Markup`] value.
    pub fn markup(msg: impl Into<String>) -> Self {
        Self::Markup(msg.into())
    }
}

impl From<serde_json::Error> for PosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
