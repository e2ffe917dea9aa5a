//! Element storage structure.

use critique_core::{ElementId, ElementKind};

/// Data carried by one model element.
///
/// This is the concrete representation behind the in-memory graph. Nothing
/// outside this crate should depend on it; all semantic questions go
/// through the facade traits.
#[derive(Debug, Clone)]
pub struct Element {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Element name.
    pub name: String,
    /// Category of this element.
    pub kind: ElementKind,
    /// Enclosing namespace back-reference (non-owning).
    pub namespace: Option<ElementId>,
    /// Owned child elements, in insertion order.
    pub owned: Vec<ElementId>,
    /// Operations of a classifier, in insertion order.
    pub operations: Vec<ElementId>,
    /// Attributes of a classifier, in insertion order.
    pub attributes: Vec<ElementId>,
    /// Whether this is a first-class design entity rather than an
    /// auxiliary or derived view.
    pub primary: bool,
    /// Whether a classifier is declared as a pure type that can never be
    /// instantiated, independent of its kind.
    pub type_only: bool,
    /// Whether an operation is a constructor.
    pub constructor: bool,
    /// Whether an attribute has instance scope.
    pub instance_scope: bool,
    /// Whether an attribute carries an initial value.
    pub initialized: bool,
}

impl Element {
    /// Create a new element with default semantic flags.
    pub fn new(id: ElementId, name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            namespace: None,
            owned: Vec::new(),
            operations: Vec::new(),
            attributes: Vec::new(),
            primary: true,
            type_only: false,
            constructor: false,
            // Attributes default to instance scope, matching the common case.
            instance_scope: true,
            initialized: false,
        }
    }
}
