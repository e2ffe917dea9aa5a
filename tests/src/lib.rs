//! Shared helpers for critique integration tests.

mod fixture;

pub use fixture::ModelFixture;

/// Common imports for integration tests.
pub mod prelude {
    pub use crate::ModelFixture;
    pub use critique_core::{Decision, ElementId, ElementKind, Trigger, Verdict};
    pub use critique_catalog::{Catalog, CatalogBuilder, Critic, CriticError, CriticResult};
    pub use critique_critics::{
        standard_catalog, ConstructorNeeded, EmptyNamespace, UnconventionalClassName,
    };
    pub use critique_engine::{CritiqueRunner, Finding, Findings};
    pub use critique_model::{ModelFacade, ModelGraph};
}
