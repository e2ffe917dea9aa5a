//! The critic catalog - immutable critic lookup.

use critique_core::Trigger;
use std::collections::HashMap;

use crate::{Critic, TriggerIndex};

/// An immutable collection of critics with trigger-indexed dispatch.
///
/// Built once at startup via [`CatalogBuilder`](crate::CatalogBuilder) and
/// read-only thereafter. The catalog is the critique subsystem's entire
/// configuration surface.
pub struct Catalog {
    /// Critics in registration order.
    critics: Vec<Box<dyn Critic>>,
    /// Critic lookup by name.
    names: HashMap<String, usize>,
    /// Trigger interest index.
    index: TriggerIndex,
}

impl Catalog {
    pub(crate) fn new(
        critics: Vec<Box<dyn Critic>>,
        names: HashMap<String, usize>,
        index: TriggerIndex,
    ) -> Self {
        Self {
            critics,
            names,
            index,
        }
    }

    /// All critics, in registration order.
    pub fn critics(&self) -> impl Iterator<Item = &dyn Critic> {
        self.critics.iter().map(|c| c.as_ref())
    }

    /// Get a critic by name.
    pub fn get(&self, name: &str) -> Option<&dyn Critic> {
        self.names.get(name).map(|&i| self.critics[i].as_ref())
    }

    /// Number of critics in the catalog.
    pub fn len(&self) -> usize {
        self.critics.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.critics.is_empty()
    }

    /// Critics interested in a single trigger, in registration order.
    pub fn interested_in(&self, trigger: Trigger) -> impl Iterator<Item = &dyn Critic> {
        self.index
            .interested_in(trigger)
            .iter()
            .map(|&i| self.critics[i].as_ref())
    }

    /// Critics interested in any of the given triggers, deduplicated, in
    /// registration order.
    ///
    /// A critic with an empty trigger set never appears here; full-catalog
    /// passes are its only execution path.
    pub fn interested_in_any(
        &self,
        triggers: impl IntoIterator<Item = Trigger>,
    ) -> Vec<&dyn Critic> {
        self.index
            .interested_in_any(triggers)
            .into_iter()
            .map(|i| self.critics[i].as_ref())
            .collect()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("critics", &self.critics.iter().map(|c| c.name()).collect::<Vec<_>>())
            .finish()
    }
}
