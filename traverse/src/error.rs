//! Traversal error types.

use critique_core::ElementId;
use critique_model::ModelError;
use thiserror::Error;

/// Result type for traversal operations.
pub type TraverseResult<T> = Result<T, TraverseError>;

/// Errors that can occur during traversal and relocation.
#[derive(Debug, Error)]
pub enum TraverseError {
    #[error("Element {0} is not a namespace")]
    NotANamespace(ElementId),

    #[error("Element {0} is not a model")]
    NotAModel(ElementId),

    #[error(transparent)]
    Model(#[from] ModelError),
}
