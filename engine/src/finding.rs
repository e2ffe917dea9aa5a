//! Finding types.

use critique_core::{Decision, ElementId, Verdict};
use std::collections::BTreeMap;

/// A single problem reported by a critic against one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Name of the critic that reported the problem.
    pub critic: String,
    /// The offending element.
    pub element: ElementId,
    /// Decision category of the problem.
    pub decision: Decision,
}

impl Finding {
    /// Create a new finding.
    pub fn new(critic: impl Into<String>, element: ElementId, decision: Decision) -> Self {
        Self {
            critic: critic.into(),
            element,
            decision,
        }
    }
}

/// Set of findings keyed by (element, critic).
///
/// Accumulation uses set-replacement semantics: recording a clean verdict
/// for a pair retracts any stale finding, so a long-lived set refreshed
/// after edits always reflects the latest evaluation. Iteration order is
/// deterministic (element, then critic name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    findings: BTreeMap<(ElementId, String), Finding>,
}

impl Findings {
    /// Create a new empty findings set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding, replacing any previous one for the same pair.
    pub fn record(&mut self, finding: Finding) {
        self.findings
            .insert((finding.element, finding.critic.clone()), finding);
    }

    /// Retract the finding for a (critic, element) pair, if present.
    pub fn retract(&mut self, critic: &str, element: ElementId) {
        self.findings.remove(&(element, critic.to_string()));
    }

    /// Fold one evaluation result into the set: a problem records a
    /// finding, a clean verdict retracts the stale one.
    pub fn apply(
        &mut self,
        critic: &str,
        element: ElementId,
        decision: Decision,
        verdict: Verdict,
    ) {
        match verdict {
            Verdict::ProblemFound => self.record(Finding::new(critic, element, decision)),
            Verdict::NoProblem => self.retract(critic, element),
        }
    }

    /// Check if a (critic, element) pair has a finding.
    pub fn contains(&self, critic: &str, element: ElementId) -> bool {
        self.findings.contains_key(&(element, critic.to_string()))
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Check if there are no findings.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// All findings, ordered by element then critic name.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.values()
    }

    /// Findings against one element.
    pub fn for_element(&self, element: ElementId) -> impl Iterator<Item = &Finding> {
        self.iter().filter(move |f| f.element == element)
    }
}

impl IntoIterator for Findings {
    type Item = Finding;
    type IntoIter = std::collections::btree_map::IntoValues<(ElementId, String), Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_values()
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = &'a Finding;
    type IntoIter = std::collections::btree_map::Values<'a, (ElementId, String), Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.values()
    }
}
