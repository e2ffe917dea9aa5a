//! Model error types.

use critique_core::ElementId;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by model graph mutation.
///
/// Queries through the facade are total and never raise these; only the
/// strict mutation surface validates its arguments.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    #[error("Element {0} is not a namespace")]
    NotANamespace(ElementId),

    #[error("Element {0} is not a classifier")]
    NotAClassifier(ElementId),

    #[error("Element {0} is not an operation")]
    NotAnOperation(ElementId),

    #[error("Element {0} is not an attribute")]
    NotAnAttribute(ElementId),
}
