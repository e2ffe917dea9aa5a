//! End-to-end critique pass tests.

use critique_tests::prelude::*;

/// design
///   shop (package)
///     Foo  - no operations at all
///     Bar  - constructor only
///     Baz  - regular method + uninitialized instance attribute
///     Qux  - regular method + initialized instance attribute
///   empty (package, owns nothing)
struct Scenario {
    fx: ModelFixture,
    shop: ElementId,
    empty: ElementId,
    foo: ElementId,
    bar: ElementId,
    baz: ElementId,
    qux: ElementId,
}

fn scenario() -> Scenario {
    let mut fx = ModelFixture::new();
    let root = fx.root();
    let shop = fx.package(root, "shop");
    let empty = fx.package(root, "empty");

    let foo = fx.class(shop, "Foo");

    let bar = fx.class(shop, "Bar");
    fx.constructor(bar, "new");

    let baz = fx.class(shop, "Baz");
    fx.operation(baz, "run");
    fx.attribute(baz, "x");

    let qux = fx.class(shop, "Qux");
    fx.operation(qux, "run");
    fx.initialized_attribute(qux, "y");

    Scenario {
        fx,
        shop,
        empty,
        foo,
        bar,
        baz,
        qux,
    }
}

#[test]
fn test_full_pass_over_scenario_classes() {
    // GIVEN the four scenario classes and an empty package
    let s = scenario();
    let catalog = standard_catalog().unwrap();

    // WHEN a full pass runs from the root
    let runner = CritiqueRunner::new(&catalog, s.fx.graph());
    let outcome = runner.run_full_pass(s.fx.root()).unwrap();

    // THEN exactly the expected findings are present
    let findings = &outcome.findings;
    assert!(findings.contains("constructor-needed", s.foo));
    assert!(!findings.contains("constructor-needed", s.bar));
    assert!(findings.contains("constructor-needed", s.baz));
    assert!(!findings.contains("constructor-needed", s.qux));
    assert!(findings.contains("empty-namespace", s.empty));
    assert!(!findings.contains("empty-namespace", s.shop));
    assert_eq!(findings.len(), 3);
    assert!(outcome.faults.is_empty());
}

#[test]
fn test_full_pass_is_idempotent() {
    let s = scenario();
    let catalog = standard_catalog().unwrap();
    let runner = CritiqueRunner::new(&catalog, s.fx.graph());

    let first = runner.run_full_pass(s.fx.root()).unwrap();
    let second = runner.run_full_pass(s.fx.root()).unwrap();

    assert_eq!(first.findings, second.findings);
}

#[test]
fn test_findings_carry_decision_categories() {
    let s = scenario();
    let catalog = standard_catalog().unwrap();
    let runner = CritiqueRunner::new(&catalog, s.fx.graph());

    let outcome = runner.run_full_pass(s.fx.root()).unwrap();

    for finding in outcome.findings.iter() {
        let expected = catalog.get(&finding.critic).unwrap().decision();
        assert_eq!(finding.decision, expected);
    }
}

#[test]
fn test_incremental_pass_matches_full_pass_on_changed_set() {
    // GIVEN a full-pass baseline
    let s = scenario();
    let catalog = standard_catalog().unwrap();
    let runner = CritiqueRunner::new(&catalog, s.fx.graph());
    let full = runner.run_full_pass(s.fx.root()).unwrap();

    // WHEN each element is re-evaluated incrementally on its own
    for element in [s.foo, s.bar, s.baz, s.qux, s.shop, s.empty] {
        let incremental = runner.run_incremental_pass(&[element]).unwrap();

        // THEN the findings restricted to that element agree
        let from_full: Vec<_> = full.findings.for_element(element).collect();
        let from_incremental: Vec<_> = incremental.findings.for_element(element).collect();
        assert_eq!(from_full, from_incremental);
    }
}

#[test]
fn test_refresh_retracts_fixed_findings() {
    // GIVEN a persistent findings set with Baz flagged
    let mut s = scenario();
    let catalog = standard_catalog().unwrap();
    let mut findings = {
        let runner = CritiqueRunner::new(&catalog, s.fx.graph());
        runner.run_full_pass(s.fx.root()).unwrap().findings
    };
    assert!(findings.contains("constructor-needed", s.baz));

    // WHEN Baz gains a constructor and is refreshed
    s.fx.constructor(s.baz, "new");
    let runner = CritiqueRunner::new(&catalog, s.fx.graph());
    let faults = runner.refresh(&[s.baz], &mut findings).unwrap();

    // THEN the stale finding is retracted and the rest survive
    assert!(faults.is_empty());
    assert!(!findings.contains("constructor-needed", s.baz));
    assert!(findings.contains("constructor-needed", s.foo));
    assert!(findings.contains("empty-namespace", s.empty));
}

#[test]
fn test_refresh_records_new_findings() {
    // GIVEN a clean findings set
    let mut s = scenario();
    let catalog = standard_catalog().unwrap();
    let mut findings = Findings::new();

    // WHEN a fresh problem class appears and is refreshed
    let stray = s.fx.class(s.shop, "Stray");
    let runner = CritiqueRunner::new(&catalog, s.fx.graph());
    runner.refresh(&[stray], &mut findings).unwrap();

    // THEN the new finding is recorded
    assert!(findings.contains("constructor-needed", stray));
}

/// A critic that always faults, for isolation tests.
struct Flaky;

impl Critic for Flaky {
    fn name(&self) -> &str {
        "flaky"
    }

    fn decision(&self) -> Decision {
        Decision::Storage
    }

    fn triggers(&self) -> &[Trigger] {
        &[Trigger::Classifier]
    }

    fn applies_to(&self, model: &dyn ModelFacade, element: ElementId) -> bool {
        model.is_class(element)
    }

    fn examine(&self, _model: &dyn ModelFacade, _element: ElementId) -> CriticResult<Verdict> {
        Err(CriticError::evaluation_failed("synthetic failure"))
    }
}

#[test]
fn test_faulting_critic_does_not_hide_other_findings() {
    // GIVEN a catalog with a failing critic registered first
    let s = scenario();
    let catalog = CatalogBuilder::new()
        .add(Flaky)
        .add(ConstructorNeeded)
        .build()
        .unwrap();

    // WHEN a full pass runs
    let runner = CritiqueRunner::new(&catalog, s.fx.graph());
    let outcome = runner.run_full_pass(s.fx.root()).unwrap();

    // THEN the healthy critic still reports, and each fault is isolated
    assert!(outcome.findings.contains("constructor-needed", s.foo));
    assert!(outcome.findings.contains("constructor-needed", s.baz));
    assert_eq!(outcome.faults.len(), 4);
    assert!(outcome
        .faults
        .iter()
        .all(|f| f.critic == "flaky" && f.message.contains("synthetic failure")));
}

#[test]
fn test_non_class_elements_never_trip_constructor_critic() {
    // GIVEN namespaces alongside the scenario classes
    let s = scenario();
    let catalog = standard_catalog().unwrap();
    let runner = CritiqueRunner::new(&catalog, s.fx.graph());

    let outcome = runner.run_full_pass(s.fx.root()).unwrap();

    for element in [s.shop, s.empty] {
        assert!(!outcome.findings.contains("constructor-needed", element));
    }
}
