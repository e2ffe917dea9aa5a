//! Engine error types.

use critique_traverse::TraverseError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running a critique pass.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Pass cancelled after visiting {visited} elements")]
    Cancelled { visited: usize },

    #[error(transparent)]
    Traverse(#[from] TraverseError),
}
