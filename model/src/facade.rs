//! The model query facade.

use critique_core::{ElementId, ElementKind};

use crate::ModelResult;

/// Structural and classification queries over an opaque model graph.
///
/// This is the only surface critics and traversal see. All queries are
/// total: asking about an identifier the graph does not know answers
/// negatively (`false`, `None`, or empty) rather than erroring.
///
/// Implementations answer from a fixed snapshot; callers that evaluate a
/// whole pass must hold exclusive access to the graph for its duration.
pub trait ModelFacade {
    /// Category of an element, if it exists.
    fn kind(&self, element: ElementId) -> Option<ElementKind>;

    /// Name of an element, if it exists and has one.
    fn name(&self, element: ElementId) -> Option<&str>;

    /// Child elements owned by a namespace, in insertion order.
    ///
    /// Empty for non-namespaces and unknown elements.
    fn owned_elements(&self, namespace: ElementId) -> Vec<ElementId>;

    /// The enclosing namespace of an element (non-owning back-reference).
    fn enclosing_namespace(&self, element: ElementId) -> Option<ElementId>;

    /// Operations of a classifier, in insertion order.
    fn operations(&self, classifier: ElementId) -> Vec<ElementId>;

    /// Attributes of a classifier, in insertion order.
    fn attributes(&self, classifier: ElementId) -> Vec<ElementId>;

    /// Whether this is a first-class design entity rather than an
    /// auxiliary or derived view.
    fn is_primary(&self, element: ElementId) -> bool;

    /// Whether an operation is a constructor.
    fn is_constructor(&self, operation: ElementId) -> bool;

    /// Whether an attribute has instance scope.
    fn is_instance_scope(&self, attribute: ElementId) -> bool;

    /// Whether an attribute carries an initial value.
    fn is_initialized(&self, attribute: ElementId) -> bool;

    // ==================== Derived classification ====================

    /// Whether the element is a namespace.
    fn is_namespace(&self, element: ElementId) -> bool {
        self.kind(element).is_some_and(|k| k.is_namespace())
    }

    /// Whether the element is a top-level model.
    fn is_model(&self, element: ElementId) -> bool {
        self.kind(element) == Some(ElementKind::Model)
    }

    /// Whether the element is a subsystem.
    fn is_subsystem(&self, element: ElementId) -> bool {
        self.kind(element) == Some(ElementKind::Subsystem)
    }

    /// Whether the element is a class.
    fn is_class(&self, element: ElementId) -> bool {
        self.kind(element) == Some(ElementKind::Class)
    }

    /// Whether the element is a type-only construct that can never be
    /// instantiated.
    fn is_type(&self, element: ElementId) -> bool {
        self.kind(element).is_some_and(|k| k.is_type_only())
    }

    /// The top-level model an element ultimately lives under, following
    /// enclosing-namespace references. A model resolves to itself.
    fn owning_model(&self, element: ElementId) -> Option<ElementId> {
        let mut current = element;
        loop {
            if self.is_model(current) {
                return Some(current);
            }
            current = self.enclosing_namespace(current)?;
        }
    }
}

/// Mutation seam for namespace reassignment.
///
/// Kept separate from the read-only facade so that evaluation code can
/// only ever hold the query surface.
pub trait ModelEdit: ModelFacade {
    /// Reassign an element's enclosing namespace, maintaining the owned
    /// lists on both sides.
    fn set_enclosing_namespace(
        &mut self,
        element: ElementId,
        namespace: ElementId,
    ) -> ModelResult<()>;
}
