//! Namespace reassignment.

use critique_core::ElementId;
use critique_model::ModelEdit;

use crate::{TraverseError, TraverseResult};

/// Move a model element to another top-level model.
///
/// When the element sits directly under its current model, only the
/// element is reassigned. When it is nested deeper, the walk moves up and
/// reassigns the *enclosing namespace* instead — every element sharing
/// that namespace moves together. This subtree behavior is deliberate and
/// callers depend on it.
///
/// A target that is not a model is rejected. Moving an element that is
/// already under `target` is a no-op.
// TODO: offer a single-element move that reparents just the named element
// and leaves its siblings behind.
pub fn move_element<M>(model: &mut M, element: ElementId, target: ElementId) -> TraverseResult<()>
where
    M: ModelEdit + ?Sized,
{
    if !model.is_model(target) {
        return Err(TraverseError::NotAModel(target));
    }

    let current = model.owning_model(element);
    if current == Some(target) {
        return Ok(());
    }

    match (model.enclosing_namespace(element), current) {
        // Nested below top level: move the whole namespace.
        (Some(ns), Some(current_model)) if ns != current_model => {
            move_element(model, ns, target)
        }
        _ => model
            .set_enclosing_namespace(element, target)
            .map_err(TraverseError::from),
    }
}
