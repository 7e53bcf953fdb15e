use thiserror::Error;

/// A convenience `Result` alias using [`RegkompassError`].
pub type RegkompassResult<T> = Result<T, RegkompassError>;

/// Top-level error type for the Regkompass engine.
///
/// Query paths of the engine never produce errors; only content
/// validation, configuration and I/O at the edges do.
#[derive(Error, Debug)]
pub enum RegkompassError {
    /// A framework config violates a content invariant.
    #[error("Invalid framework '{framework}': {reason}")]
    InvalidFramework {
        /// Id of the offending framework config.
        framework: String,
        /// Human readable description of the violation.
        reason: String,
    },

    /// The overlap edge table violates a graph invariant.
    #[error("Invalid overlap mapping: {0}")]
    InvalidOverlap(String),

    /// An answer value that cannot be represented (e.g. a maturity level of 4).
    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    /// An error in configuration parsing or validation.
    #[error("Config error: {0}")]
    Config(String),

    /// A JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegkompassError {
    /// Shorthand for [`RegkompassError::InvalidFramework`].
    pub fn invalid_framework(framework: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFramework {
            framework: framework.into(),
            reason: reason.into(),
        }
    }
}
