/// Convenience result type used across scrollreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy.
///
/// Only construction-time failures are returned to callers. Inside the render loop, asset and
/// draw failures degrade into skip outcomes and log lines instead.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid user-provided data (ranges, sizes, paths).
    #[error("validation error: {0}")]
    Validation(String),

    /// A single frame asset failed to fetch or decode.
    #[error("asset error: {0}")]
    Asset(String),

    /// A drawing surface rejected an operation.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when reading or parsing configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`ReelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ReelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
