//! Critique Engine
//!
//! Orchestrates critic evaluation over a model graph.
//!
//! Responsibilities:
//! - Full-catalog passes over every element under a root namespace
//! - Trigger-dispatched incremental passes over changed elements
//! - Finding accumulation with set-replacement semantics
//! - Per-(critic, element) fault isolation
//! - Cooperative cancellation between element visits

mod cancel;
mod error;
mod finding;
mod runner;

pub use cancel::CancellationToken;
pub use error::{EngineError, EngineResult};
pub use finding::{Finding, Findings};
pub use runner::{CritiqueRunner, EvaluationFault, PassOutcome, PassStats};
