//! In-memory model graph storage.

use critique_core::{ElementId, ElementKind};
use std::collections::HashMap;

use crate::{Element, ModelError, ModelFacade, ModelEdit, ModelResult};

/// ID allocator for elements.
#[derive(Debug)]
struct IdAllocator {
    next_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next_id: 1 }
    }

    fn alloc(&mut self) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// The in-memory model graph.
///
/// Owns every element and the containment relation between them. The
/// owned-elements relation must stay acyclic; traversal over a cyclic
/// graph does not terminate and no operation here checks for it.
#[derive(Debug)]
pub struct ModelGraph {
    /// Element storage.
    elements: HashMap<ElementId, Element>,
    /// ID allocator.
    id_alloc: IdAllocator,
}

impl Default for ModelGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            id_alloc: IdAllocator::new(),
        }
    }

    // ==================== Element Operations ====================

    /// Create a new element of the given kind, not yet owned by anything.
    pub fn create_element(&mut self, name: impl Into<String>, kind: ElementKind) -> ElementId {
        let id = self.id_alloc.alloc();
        self.elements.insert(id, Element::new(id, name, kind));
        id
    }

    /// Get an element by ID.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Number of elements in the graph.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All element IDs in the graph, in unspecified order.
    pub fn all_element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.keys().copied()
    }

    // ==================== Containment ====================

    /// Add `child` to the owned elements of `namespace` and set its
    /// enclosing-namespace back-reference.
    pub fn add_owned(&mut self, namespace: ElementId, child: ElementId) -> ModelResult<()> {
        let ns = self
            .elements
            .get(&namespace)
            .ok_or(ModelError::UnknownElement(namespace))?;
        if !ns.kind.is_namespace() {
            return Err(ModelError::NotANamespace(namespace));
        }
        if !self.elements.contains_key(&child) {
            return Err(ModelError::UnknownElement(child));
        }

        self.detach(child);
        self.elements
            .get_mut(&namespace)
            .expect("namespace checked above")
            .owned
            .push(child);
        self.elements
            .get_mut(&child)
            .expect("child checked above")
            .namespace = Some(namespace);
        Ok(())
    }

    /// Remove `child` from its current owner's owned list, if any.
    fn detach(&mut self, child: ElementId) {
        let owner = self.elements.get(&child).and_then(|el| el.namespace);
        if let Some(owner) = owner {
            if let Some(owner_el) = self.elements.get_mut(&owner) {
                owner_el.owned.retain(|&c| c != child);
            }
        }
    }

    // ==================== Classifier Features ====================

    /// Attach an operation to a classifier.
    pub fn add_operation(&mut self, classifier: ElementId, operation: ElementId) -> ModelResult<()> {
        self.check_kind(classifier, |k| k.is_classifier(), ModelError::NotAClassifier)?;
        self.check_kind(
            operation,
            |k| k == ElementKind::Operation,
            ModelError::NotAnOperation,
        )?;
        self.elements
            .get_mut(&classifier)
            .expect("classifier checked above")
            .operations
            .push(operation);
        Ok(())
    }

    /// Attach an attribute to a classifier.
    pub fn add_attribute(&mut self, classifier: ElementId, attribute: ElementId) -> ModelResult<()> {
        self.check_kind(classifier, |k| k.is_classifier(), ModelError::NotAClassifier)?;
        self.check_kind(
            attribute,
            |k| k == ElementKind::Attribute,
            ModelError::NotAnAttribute,
        )?;
        self.elements
            .get_mut(&classifier)
            .expect("classifier checked above")
            .attributes
            .push(attribute);
        Ok(())
    }

    // ==================== Semantic Flags ====================

    /// Mark an element as primary or auxiliary.
    pub fn set_primary(&mut self, element: ElementId, primary: bool) -> ModelResult<()> {
        let el = self
            .elements
            .get_mut(&element)
            .ok_or(ModelError::UnknownElement(element))?;
        el.primary = primary;
        Ok(())
    }

    /// Declare a classifier as a pure type that can never be instantiated.
    pub fn set_type_only(&mut self, classifier: ElementId, type_only: bool) -> ModelResult<()> {
        self.check_kind(classifier, |k| k.is_classifier(), ModelError::NotAClassifier)?;
        self.elements
            .get_mut(&classifier)
            .expect("classifier checked above")
            .type_only = type_only;
        Ok(())
    }

    /// Mark an operation as a constructor.
    pub fn mark_constructor(&mut self, operation: ElementId) -> ModelResult<()> {
        self.check_kind(
            operation,
            |k| k == ElementKind::Operation,
            ModelError::NotAnOperation,
        )?;
        self.elements
            .get_mut(&operation)
            .expect("operation checked above")
            .constructor = true;
        Ok(())
    }

    /// Set an attribute's scope.
    pub fn set_instance_scope(&mut self, attribute: ElementId, instance: bool) -> ModelResult<()> {
        self.check_kind(
            attribute,
            |k| k == ElementKind::Attribute,
            ModelError::NotAnAttribute,
        )?;
        self.elements
            .get_mut(&attribute)
            .expect("attribute checked above")
            .instance_scope = instance;
        Ok(())
    }

    /// Set whether an attribute carries an initial value.
    pub fn set_initialized(&mut self, attribute: ElementId, initialized: bool) -> ModelResult<()> {
        self.check_kind(
            attribute,
            |k| k == ElementKind::Attribute,
            ModelError::NotAnAttribute,
        )?;
        self.elements
            .get_mut(&attribute)
            .expect("attribute checked above")
            .initialized = initialized;
        Ok(())
    }

    fn check_kind(
        &self,
        element: ElementId,
        pred: impl Fn(ElementKind) -> bool,
        err: impl Fn(ElementId) -> ModelError,
    ) -> ModelResult<()> {
        let el = self
            .elements
            .get(&element)
            .ok_or(ModelError::UnknownElement(element))?;
        if !pred(el.kind) {
            return Err(err(element));
        }
        Ok(())
    }
}

impl ModelFacade for ModelGraph {
    fn kind(&self, element: ElementId) -> Option<ElementKind> {
        self.elements.get(&element).map(|el| el.kind)
    }

    fn name(&self, element: ElementId) -> Option<&str> {
        self.elements.get(&element).map(|el| el.name.as_str())
    }

    fn owned_elements(&self, namespace: ElementId) -> Vec<ElementId> {
        self.elements
            .get(&namespace)
            .map(|el| el.owned.clone())
            .unwrap_or_default()
    }

    fn enclosing_namespace(&self, element: ElementId) -> Option<ElementId> {
        self.elements.get(&element).and_then(|el| el.namespace)
    }

    fn operations(&self, classifier: ElementId) -> Vec<ElementId> {
        self.elements
            .get(&classifier)
            .map(|el| el.operations.clone())
            .unwrap_or_default()
    }

    fn attributes(&self, classifier: ElementId) -> Vec<ElementId> {
        self.elements
            .get(&classifier)
            .map(|el| el.attributes.clone())
            .unwrap_or_default()
    }

    fn is_primary(&self, element: ElementId) -> bool {
        self.elements.get(&element).is_some_and(|el| el.primary)
    }

    fn is_type(&self, element: ElementId) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|el| el.kind.is_type_only() || el.type_only)
    }

    fn is_constructor(&self, operation: ElementId) -> bool {
        self.elements.get(&operation).is_some_and(|el| el.constructor)
    }

    fn is_instance_scope(&self, attribute: ElementId) -> bool {
        self.elements
            .get(&attribute)
            .is_some_and(|el| el.instance_scope)
    }

    fn is_initialized(&self, attribute: ElementId) -> bool {
        self.elements
            .get(&attribute)
            .is_some_and(|el| el.initialized)
    }
}

impl ModelEdit for ModelGraph {
    fn set_enclosing_namespace(
        &mut self,
        element: ElementId,
        namespace: ElementId,
    ) -> ModelResult<()> {
        self.add_owned(namespace, element)
    }
}
