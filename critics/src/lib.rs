//! Concrete design critics.
//!
//! Each critic here implements the contract from critique-catalog: an
//! ordered exemption chain followed by one substantive check, evaluated
//! against a single element through the model facade.

mod constructor_needed;
mod empty_namespace;
mod unconventional_name;

pub use constructor_needed::ConstructorNeeded;
pub use empty_namespace::EmptyNamespace;
pub use unconventional_name::UnconventionalClassName;

use critique_catalog::{Catalog, CatalogBuilder, CatalogError};

/// Assemble the standard critic catalog.
pub fn standard_catalog() -> Result<Catalog, CatalogError> {
    CatalogBuilder::new()
        .add(ConstructorNeeded)
        .add(EmptyNamespace)
        .add(UnconventionalClassName::new())
        .build()
}
