//! CatalogBuilder for constructing an immutable Catalog.

use std::collections::HashMap;

use crate::{Catalog, CatalogError, Critic, TriggerIndex};

/// Builder for constructing an immutable [`Catalog`].
///
/// Validation happens at [`build`](CatalogBuilder::build): critic names
/// must be unique, since findings are keyed by them.
#[derive(Default)]
pub struct CatalogBuilder {
    critics: Vec<Box<dyn Critic>>,
}

impl CatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a critic to the catalog.
    pub fn add(mut self, critic: impl Critic + 'static) -> Self {
        self.critics.push(Box::new(critic));
        self
    }

    /// Add an already-boxed critic to the catalog.
    pub fn add_boxed(mut self, critic: Box<dyn Critic>) -> Self {
        self.critics.push(critic);
        self
    }

    /// Build the immutable catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut names: HashMap<String, usize> = HashMap::new();
        for (i, critic) in self.critics.iter().enumerate() {
            let name = critic.name().to_string();
            if names.insert(name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCriticName(name));
            }
        }

        let index = TriggerIndex::build(&self.critics);
        Ok(Catalog::new(self.critics, names, index))
    }
}
