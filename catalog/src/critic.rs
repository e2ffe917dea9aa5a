//! The critic contract.

use critique_core::{Decision, ElementId, Trigger, Verdict};
use critique_model::ModelFacade;

use crate::CriticResult;

/// A named design rule evaluated against one element at a time.
///
/// Critics are constructed once at catalog load and live for the process
/// lifetime; they are immutable and stateless per run. Evaluation must be
/// side-effect-free: no model mutation, no blocking, no I/O.
///
/// Evaluation is two-staged. [`applies_to`](Critic::applies_to) is the
/// cheap category pre-check the runner uses for dispatch;
/// [`examine`](Critic::examine) is the full predicate and applies the
/// exemption chain in order:
///
/// 1. element not of the applicable category — no problem;
/// 2. element not a primary object — no problem;
/// 3. element a type-only construct — no problem;
/// 4. the substantive check.
///
/// `examine` re-applies the category check so it stays total: handing it
/// an arbitrary element is always safe.
pub trait Critic: Send + Sync {
    /// Stable identifier, doubling as the resource key the presentation
    /// layer resolves headline and description text with.
    fn name(&self) -> &str;

    /// Decision category this critic's findings belong to.
    fn decision(&self) -> Decision;

    /// Element categories this critic wants to be re-evaluated for.
    ///
    /// Used only for dispatch. An empty set opts the critic out of
    /// token-based dispatch entirely; full passes are then the only way
    /// it runs.
    fn triggers(&self) -> &[Trigger];

    /// Cheap applicability pre-check (the first exemption of `examine`).
    fn applies_to(&self, model: &dyn ModelFacade, element: ElementId) -> bool;

    /// Evaluate one element.
    fn examine(&self, model: &dyn ModelFacade, element: ElementId) -> CriticResult<Verdict>;
}
