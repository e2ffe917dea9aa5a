//! Model graph fixture builder.

use critique_core::{ElementId, ElementKind};
use critique_model::ModelGraph;

/// Convenience wrapper for assembling model graphs in tests.
///
/// Every method panics on a malformed fixture; tests should fail loudly
/// when the scaffolding itself is wrong.
pub struct ModelFixture {
    graph: ModelGraph,
    root: ElementId,
}

impl ModelFixture {
    /// Create a fixture with a root model named `design`.
    pub fn new() -> Self {
        let mut graph = ModelGraph::new();
        let root = graph.create_element("design", ElementKind::Model);
        Self { graph, root }
    }

    /// The root model.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The underlying graph.
    pub fn graph(&self) -> &ModelGraph {
        &self.graph
    }

    /// Mutable access for scenarios that edit the model mid-test.
    pub fn graph_mut(&mut self) -> &mut ModelGraph {
        &mut self.graph
    }

    /// Add a package under the given namespace.
    pub fn package(&mut self, owner: ElementId, name: &str) -> ElementId {
        self.namespace(owner, name, ElementKind::Package)
    }

    /// Add a subsystem under the given namespace.
    pub fn subsystem(&mut self, owner: ElementId, name: &str) -> ElementId {
        self.namespace(owner, name, ElementKind::Subsystem)
    }

    fn namespace(&mut self, owner: ElementId, name: &str, kind: ElementKind) -> ElementId {
        let ns = self.graph.create_element(name, kind);
        self.graph.add_owned(owner, ns).unwrap();
        ns
    }

    /// Add a class under the given namespace.
    pub fn class(&mut self, owner: ElementId, name: &str) -> ElementId {
        let class = self.graph.create_element(name, ElementKind::Class);
        self.graph.add_owned(owner, class).unwrap();
        class
    }

    /// Add a regular operation to a classifier.
    pub fn operation(&mut self, classifier: ElementId, name: &str) -> ElementId {
        let op = self.graph.create_element(name, ElementKind::Operation);
        self.graph.add_operation(classifier, op).unwrap();
        op
    }

    /// Add a constructor operation to a classifier.
    pub fn constructor(&mut self, classifier: ElementId, name: &str) -> ElementId {
        let op = self.operation(classifier, name);
        self.graph.mark_constructor(op).unwrap();
        op
    }

    /// Add an instance-scoped, uninitialized attribute to a classifier.
    pub fn attribute(&mut self, classifier: ElementId, name: &str) -> ElementId {
        let attr = self.graph.create_element(name, ElementKind::Attribute);
        self.graph.add_attribute(classifier, attr).unwrap();
        attr
    }

    /// Add an instance-scoped attribute with an initial value.
    pub fn initialized_attribute(&mut self, classifier: ElementId, name: &str) -> ElementId {
        let attr = self.attribute(classifier, name);
        self.graph.set_initialized(attr, true).unwrap();
        attr
    }
}

impl Default for ModelFixture {
    fn default() -> Self {
        Self::new()
    }
}
