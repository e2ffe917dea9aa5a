//! Critic and catalog error types.

use thiserror::Error;

/// Result type for critic evaluation.
pub type CriticResult<T> = Result<T, CriticError>;

/// Errors a critic can raise.
///
/// A fault during evaluation is isolated by the runner to the one
/// (critic, element) pair it occurred on; it never aborts a pass.
#[derive(Debug, Error)]
pub enum CriticError {
    #[error("Critic evaluation failed: {message}")]
    EvaluationFailed { message: String },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl CriticError {
    pub fn evaluation_failed(message: impl Into<String>) -> Self {
        Self::EvaluationFailed {
            message: message.into(),
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur during catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate critic name: {0}")]
    DuplicateCriticName(String),
}
