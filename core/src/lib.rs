//! Critique Core Types
//!
//! This crate provides the foundational types used throughout the critique
//! system:
//! - Identity type for model elements (ElementId)
//! - Element classification tags (ElementKind, Trigger)
//! - Critic decision categories (Decision)
//! - Evaluation verdicts (Verdict)

mod decision;
mod id;
mod kind;
mod verdict;

pub use decision::*;
pub use id::*;
pub use kind::*;
pub use verdict::*;
