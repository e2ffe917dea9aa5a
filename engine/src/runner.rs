//! The critique runner.

use critique_catalog::{Catalog, Critic};
use critique_core::ElementId;
use critique_model::ModelFacade;
use critique_traverse::collect_elements_of_kind;
use tracing::{debug, warn};

use crate::{CancellationToken, EngineError, EngineResult, Findings};

/// A critic failure isolated to one (critic, element) evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationFault {
    /// Name of the critic that failed.
    pub critic: String,
    /// Element under evaluation when it failed.
    pub element: ElementId,
    /// Rendered failure message.
    pub message: String,
}

impl EvaluationFault {
    fn new(critic: &str, element: ElementId, message: String) -> Self {
        Self {
            critic: critic.to_string(),
            element,
            message,
        }
    }
}

/// Statistics from one critique pass.
#[derive(Debug, Clone, Default)]
pub struct PassStats {
    /// Number of elements visited.
    pub elements_visited: usize,
    /// Number of (critic, element) evaluations run.
    pub critics_evaluated: usize,
    /// Number of evaluations that reported a problem.
    pub problems_found: usize,
    /// Number of evaluations that faulted.
    pub faults: usize,
}

/// Result of one critique pass.
#[derive(Debug, Default)]
pub struct PassOutcome {
    /// Findings from this pass.
    pub findings: Findings,
    /// Faults isolated during this pass.
    pub faults: Vec<EvaluationFault>,
    /// Pass statistics.
    pub stats: PassStats,
}

/// Orchestrates critic evaluation over a model graph.
///
/// The runner borrows the catalog and the model facade for its lifetime;
/// the caller must hold exclusive access to the model for the duration of
/// a pass — the runner evaluates against a snapshot it does not defend.
///
/// Critics execute synchronously, one (critic, element) evaluation at a
/// time. A faulting evaluation is recorded and skipped, never fatal: one
/// bad critic must not hide findings from the others.
pub struct CritiqueRunner<'c, 'm> {
    catalog: &'c Catalog,
    model: &'m dyn ModelFacade,
    cancel: Option<CancellationToken>,
}

impl<'c, 'm> CritiqueRunner<'c, 'm> {
    /// Create a new runner over a catalog and a model snapshot.
    pub fn new(catalog: &'c Catalog, model: &'m dyn ModelFacade) -> Self {
        Self {
            catalog,
            model,
            cancel: None,
        }
    }

    /// Attach a cancellation token, checked between element visits.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    // ==================== Run Modes ====================

    /// Run the entire catalog against every element under `root`.
    ///
    /// Elements are enumerated through the traversal utilities, so `root`
    /// must be a namespace; each element is evaluated by every critic
    /// whose applicability pre-check passes.
    pub fn run_full_pass(&self, root: ElementId) -> EngineResult<PassOutcome> {
        let elements = collect_elements_of_kind(self.model, Some(root), |_, _| true)?;

        let mut outcome = PassOutcome::default();
        for element in elements {
            self.check_cancelled(&outcome.stats)?;
            outcome.stats.elements_visited += 1;
            for critic in self.catalog.critics() {
                if critic.applies_to(self.model, element) {
                    self.evaluate(critic, element, &mut outcome);
                }
            }
        }

        debug!(
            elements = outcome.stats.elements_visited,
            evaluations = outcome.stats.critics_evaluated,
            problems = outcome.stats.problems_found,
            faults = outcome.stats.faults,
            "full critique pass complete"
        );
        Ok(outcome)
    }

    /// Evaluate only the changed elements against the critics interested
    /// in their categories.
    ///
    /// Descendants of changed elements are not revisited. Dispatch derives
    /// each element's trigger tokens from its kind and selects critics
    /// through the trigger index; the full predicate then runs without the
    /// applicability pre-filter, so an element that no longer matches a
    /// critic's category yields a clean verdict and retracts its stale
    /// finding.
    pub fn run_incremental_pass(&self, changed: &[ElementId]) -> EngineResult<PassOutcome> {
        let mut outcome = PassOutcome::default();
        self.pass_over_changed(changed, &mut outcome)?;

        debug!(
            elements = outcome.stats.elements_visited,
            evaluations = outcome.stats.critics_evaluated,
            problems = outcome.stats.problems_found,
            faults = outcome.stats.faults,
            "incremental critique pass complete"
        );
        Ok(outcome)
    }

    /// Incremental pass applied onto a persistent findings set.
    ///
    /// Re-evaluation replaces stale findings for the changed elements and
    /// leaves everything else untouched. Returns the faults isolated
    /// during the refresh.
    pub fn refresh(
        &self,
        changed: &[ElementId],
        findings: &mut Findings,
    ) -> EngineResult<Vec<EvaluationFault>> {
        let mut outcome = PassOutcome {
            findings: std::mem::take(findings),
            ..PassOutcome::default()
        };
        let result = self.pass_over_changed(changed, &mut outcome);
        *findings = outcome.findings;
        result?;
        Ok(outcome.faults)
    }

    // ==================== Internals ====================

    fn pass_over_changed(
        &self,
        changed: &[ElementId],
        outcome: &mut PassOutcome,
    ) -> EngineResult<()> {
        for &element in changed {
            self.check_cancelled(&outcome.stats)?;
            let Some(kind) = self.model.kind(element) else {
                continue;
            };
            outcome.stats.elements_visited += 1;
            for critic in self.catalog.interested_in_any(kind.triggers().iter().copied()) {
                self.evaluate(critic, element, outcome);
            }
        }
        Ok(())
    }

    /// Evaluate one (critic, element) pair, isolating faults.
    ///
    /// A fault leaves any pre-existing finding for the pair in place: a
    /// degraded pass must not destroy knowledge it could not recompute.
    fn evaluate(&self, critic: &dyn Critic, element: ElementId, outcome: &mut PassOutcome) {
        outcome.stats.critics_evaluated += 1;
        match critic.examine(self.model, element) {
            Ok(verdict) => {
                if verdict.is_problem() {
                    outcome.stats.problems_found += 1;
                }
                outcome
                    .findings
                    .apply(critic.name(), element, critic.decision(), verdict);
            }
            Err(err) => {
                warn!(
                    critic = critic.name(),
                    element = %element,
                    error = %err,
                    "critic evaluation faulted; continuing pass"
                );
                outcome.stats.faults += 1;
                outcome
                    .faults
                    .push(EvaluationFault::new(critic.name(), element, err.to_string()));
            }
        }
    }

    fn check_cancelled(&self, stats: &PassStats) -> EngineResult<()> {
        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                return Err(EngineError::Cancelled {
                    visited: stats.elements_visited,
                });
            }
        }
        Ok(())
    }
}
