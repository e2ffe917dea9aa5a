//! Empty-namespace critic.

use critique_catalog::{Critic, CriticResult};
use critique_core::{Decision, ElementId, Trigger, Verdict};
use critique_model::ModelFacade;

/// Detects packages and subsystems that own nothing.
///
/// An empty namespace usually marks decomposition that was planned but
/// never filled in. The top-level model is exempt: an empty model is a
/// fresh project, not a design problem.
pub struct EmptyNamespace;

const TRIGGERS: &[Trigger] = &[Trigger::Namespace];

impl Critic for EmptyNamespace {
    fn name(&self) -> &str {
        "empty-namespace"
    }

    fn decision(&self) -> Decision {
        Decision::Modularity
    }

    fn triggers(&self) -> &[Trigger] {
        TRIGGERS
    }

    fn applies_to(&self, model: &dyn ModelFacade, element: ElementId) -> bool {
        model.is_namespace(element) && !model.is_model(element)
    }

    fn examine(&self, model: &dyn ModelFacade, element: ElementId) -> CriticResult<Verdict> {
        if !model.is_namespace(element) || model.is_model(element) {
            return Ok(Verdict::NoProblem);
        }

        if !model.is_primary(element) {
            return Ok(Verdict::NoProblem);
        }

        if model.owned_elements(element).is_empty() {
            return Ok(Verdict::ProblemFound);
        }

        Ok(Verdict::NoProblem)
    }
}
