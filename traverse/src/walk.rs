//! Descendant enumeration.

use critique_core::ElementId;
use critique_model::ModelFacade;

use crate::{TraverseError, TraverseResult};

/// Visit every element owned below `root`, depth-first in insertion order.
///
/// Descends into every namespace descendant regardless of whether the
/// caller keeps it. `root` itself is never visited.
fn walk_owned<F>(model: &F, root: ElementId, visit: &mut impl FnMut(ElementId))
where
    F: ModelFacade + ?Sized,
{
    let mut stack: Vec<ElementId> = Vec::new();
    push_children(model, root, &mut stack);

    while let Some(element) = stack.pop() {
        visit(element);
        if model.is_namespace(element) {
            push_children(model, element, &mut stack);
        }
    }
}

/// Push children in reverse so the stack pops them in insertion order.
fn push_children<F>(model: &F, namespace: ElementId, stack: &mut Vec<ElementId>)
where
    F: ModelFacade + ?Sized,
{
    let children = model.owned_elements(namespace);
    for &child in children.iter().rev() {
        stack.push(child);
    }
}

/// All subsystems found below `ns`, at any depth.
///
/// Permissive entry point: a `None` namespace yields an empty result, for
/// call sites that hold an optional root.
pub fn collect_subsystems<F>(model: &F, ns: Option<ElementId>) -> Vec<ElementId>
where
    F: ModelFacade + ?Sized,
{
    let Some(root) = ns else {
        return Vec::new();
    };
    let mut found = Vec::new();
    walk_owned(model, root, &mut |element| {
        if model.is_subsystem(element) {
            found.push(element);
        }
    });
    found
}

/// All namespaces found below `ns`, at any depth, excluding `ns` itself.
///
/// Permissive entry point: a `None` namespace yields an empty result.
pub fn collect_namespaces<F>(model: &F, ns: Option<ElementId>) -> Vec<ElementId>
where
    F: ModelFacade + ?Sized,
{
    let Some(root) = ns else {
        return Vec::new();
    };
    let mut found = Vec::new();
    walk_owned(model, root, &mut |element| {
        if model.is_namespace(element) {
            found.push(element);
        }
    });
    found
}

/// All elements below `root` for which `classifier` holds, at any depth.
///
/// Strict entry point, unlike its permissive siblings: a `None` root still
/// yields an empty result, but a root that exists and is not a namespace
/// is rejected with [`TraverseError::NotANamespace`].
pub fn collect_elements_of_kind<F, P>(
    model: &F,
    root: Option<ElementId>,
    classifier: P,
) -> TraverseResult<Vec<ElementId>>
where
    F: ModelFacade + ?Sized,
    P: Fn(&F, ElementId) -> bool,
{
    let Some(root) = root else {
        return Ok(Vec::new());
    };
    if !model.is_namespace(root) {
        return Err(TraverseError::NotANamespace(root));
    }
    let mut found = Vec::new();
    walk_owned(model, root, &mut |element| {
        if classifier(model, element) {
            found.push(element);
        }
    });
    Ok(found)
}
