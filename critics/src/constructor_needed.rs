//! Constructor-needed critic.

use critique_catalog::{Critic, CriticResult};
use critique_core::{Decision, ElementId, Trigger, Verdict};
use critique_model::ModelFacade;

/// Detects classes whose instances would start with unset state: instance
/// attributes without initial values and no constructor to assign them.
///
/// A class with no operations at all is flagged outright; nothing on it
/// can resemble a constructor.
pub struct ConstructorNeeded;

const TRIGGERS: &[Trigger] = &[
    Trigger::Classifier,
    Trigger::BehavioralFeature,
    Trigger::StructuralFeature,
];

impl Critic for ConstructorNeeded {
    fn name(&self) -> &str {
        "constructor-needed"
    }

    fn decision(&self) -> Decision {
        Decision::Storage
    }

    fn triggers(&self) -> &[Trigger] {
        TRIGGERS
    }

    fn applies_to(&self, model: &dyn ModelFacade, element: ElementId) -> bool {
        model.is_class(element)
    }

    fn examine(&self, model: &dyn ModelFacade, element: ElementId) -> CriticResult<Verdict> {
        // Only classes are examined.
        if !model.is_class(element) {
            return Ok(Verdict::NoProblem);
        }

        // Secondary objects are not critiqued.
        if !model.is_primary(element) {
            return Ok(Verdict::NoProblem);
        }

        // Types cannot be instantiated and need no constructor.
        if model.is_type(element) {
            return Ok(Verdict::NoProblem);
        }

        let operations = model.operations(element);
        if operations.is_empty() {
            return Ok(Verdict::ProblemFound);
        }

        if operations.iter().any(|&op| model.is_constructor(op)) {
            return Ok(Verdict::NoProblem);
        }

        for attribute in model.attributes(element) {
            if !model.is_instance_scope(attribute) {
                continue;
            }
            if model.is_initialized(attribute) {
                continue;
            }
            // Instance scope and no initial value: nothing sets it.
            return Ok(Verdict::ProblemFound);
        }

        Ok(Verdict::NoProblem)
    }
}
