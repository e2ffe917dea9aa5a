//! Ancestor chains and namespace lookups.

use critique_core::ElementId;
use critique_model::ModelFacade;
use std::collections::HashSet;

/// The namespace `ns` together with every ancestor reachable through the
/// enclosing-namespace reference, up to the root.
///
/// Set-based accumulation: the chain is acyclic by construction, but a
/// re-entrant chain would still terminate here rather than loop.
pub fn surrounding_namespaces<F>(model: &F, ns: ElementId) -> HashSet<ElementId>
where
    F: ModelFacade + ?Sized,
{
    let mut set = HashSet::new();
    let mut current = Some(ns);
    while let Some(element) = current {
        if !set.insert(element) {
            break;
        }
        current = model.enclosing_namespace(element);
    }
    set
}

/// The first element owned by `ns` with the given name, in insertion order.
pub fn lookup<F>(model: &F, ns: ElementId, name: &str) -> Option<ElementId>
where
    F: ModelFacade + ?Sized,
{
    model
        .owned_elements(ns)
        .into_iter()
        .find(|&el| model.name(el) == Some(name))
}
