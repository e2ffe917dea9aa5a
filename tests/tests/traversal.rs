//! Traversal integration tests over a deeper model graph.

use critique_tests::prelude::*;
use critique_traverse::{
    collect_elements_of_kind, collect_namespaces, collect_subsystems, move_element,
    surrounding_namespaces, TraverseError,
};

/// design
///   billing (package)
///     payments (subsystem)
///       gateway (subsystem)
///       Invoice (class)
///     Order (class)
///   reporting (package)
struct Sample {
    fx: ModelFixture,
    billing: ElementId,
    payments: ElementId,
    gateway: ElementId,
    invoice: ElementId,
    order: ElementId,
    reporting: ElementId,
}

fn sample() -> Sample {
    let mut fx = ModelFixture::new();
    let root = fx.root();
    let billing = fx.package(root, "billing");
    let payments = fx.subsystem(billing, "payments");
    let gateway = fx.subsystem(payments, "gateway");
    let invoice = fx.class(payments, "Invoice");
    let order = fx.class(billing, "Order");
    let reporting = fx.package(root, "reporting");
    Sample {
        fx,
        billing,
        payments,
        gateway,
        invoice,
        order,
        reporting,
    }
}

#[test]
fn test_collect_namespaces_is_exactly_the_reachable_set() {
    let s = sample();

    let found = collect_namespaces(s.fx.graph(), Some(s.fx.root()));

    let mut sorted = found.clone();
    sorted.sort();
    let mut expected = vec![s.billing, s.payments, s.gateway, s.reporting];
    expected.sort();
    assert_eq!(sorted, expected);
    assert!(!found.contains(&s.fx.root()));
}

#[test]
fn test_subsystem_walks_agree() {
    let s = sample();

    let direct = collect_subsystems(s.fx.graph(), Some(s.fx.root()));
    let by_kind =
        collect_elements_of_kind(s.fx.graph(), Some(s.fx.root()), |m, el| m.is_subsystem(el))
            .unwrap();

    assert_eq!(direct, by_kind);
    assert_eq!(direct, vec![s.payments, s.gateway]);
}

#[test]
fn test_surrounding_namespaces_size_is_depth_plus_one() {
    let s = sample();
    let graph = s.fx.graph();

    // gateway sits three hops below the root
    assert_eq!(surrounding_namespaces(graph, s.gateway).len(), 4);
    assert_eq!(surrounding_namespaces(graph, s.payments).len(), 3);
    assert_eq!(surrounding_namespaces(graph, s.billing).len(), 2);
    assert_eq!(surrounding_namespaces(graph, s.fx.root()).len(), 1);
}

#[test]
fn test_strict_entry_point_rejects_class_root() {
    let s = sample();

    let err =
        collect_elements_of_kind(s.fx.graph(), Some(s.invoice), |_, _| true).unwrap_err();

    assert!(matches!(err, TraverseError::NotANamespace(el) if el == s.invoice));
}

#[test]
fn test_moving_nested_class_relocates_its_package() {
    // GIVEN a second model and a class nested two levels deep
    let mut s = sample();
    let other = s
        .fx
        .graph_mut()
        .create_element("archive", ElementKind::Model);

    // WHEN the nested class moves to the other model
    move_element(s.fx.graph_mut(), s.invoice, other).unwrap();

    // THEN its whole package subtree went with it, siblings included
    let graph = s.fx.graph();
    assert_eq!(graph.owning_model(s.invoice), Some(other));
    assert_eq!(graph.owning_model(s.order), Some(other));
    assert_eq!(graph.enclosing_namespace(s.billing), Some(other));
    assert!(collect_namespaces(graph, Some(s.fx.root()))
        .iter()
        .all(|&ns| ns != s.billing));
}
