//! Critique Catalog
//!
//! The critic contract and the trigger-indexed catalog that dispatches
//! critics by element category.
//!
//! Responsibilities:
//! - Define the two-stage critic predicate contract (Critic)
//! - Index critics by declared interest (TriggerIndex)
//! - Assemble and validate an immutable critic catalog (CatalogBuilder)

mod builder;
mod catalog;
mod critic;
mod error;
mod index;

pub use builder::CatalogBuilder;
pub use catalog::Catalog;
pub use critic::Critic;
pub use error::{CatalogError, CriticError, CriticResult};
pub use index::TriggerIndex;
