//! Class naming-convention critic.

use critique_catalog::{Critic, CriticError, CriticResult};
use critique_core::{Decision, ElementId, Trigger, Verdict};
use critique_model::ModelFacade;
use regex_lite::Regex;

/// Default convention: a leading uppercase letter, then word characters.
const DEFAULT_PATTERN: &str = "^[A-Z][A-Za-z0-9_]*$";

/// Detects classes whose names break the naming convention.
///
/// The convention is a regular expression compiled once at construction.
/// An unnamed class also counts as a problem: there is no anonymous class
/// in a reviewed design.
#[derive(Debug)]
pub struct UnconventionalClassName {
    pattern: Regex,
}

const TRIGGERS: &[Trigger] = &[Trigger::Classifier];

impl UnconventionalClassName {
    /// Create the critic with the default leading-uppercase convention.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_PATTERN).expect("default pattern compiles"),
        }
    }

    /// Create the critic with a custom convention.
    pub fn with_pattern(pattern: &str) -> CriticResult<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| CriticError::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self { pattern })
    }
}

impl Default for UnconventionalClassName {
    fn default() -> Self {
        Self::new()
    }
}

impl Critic for UnconventionalClassName {
    fn name(&self) -> &str {
        "unconventional-class-name"
    }

    fn decision(&self) -> Decision {
        Decision::Naming
    }

    fn triggers(&self) -> &[Trigger] {
        TRIGGERS
    }

    fn applies_to(&self, model: &dyn ModelFacade, element: ElementId) -> bool {
        model.is_class(element)
    }

    fn examine(&self, model: &dyn ModelFacade, element: ElementId) -> CriticResult<Verdict> {
        if !model.is_class(element) {
            return Ok(Verdict::NoProblem);
        }

        if !model.is_primary(element) {
            return Ok(Verdict::NoProblem);
        }

        let verdict = match model.name(element) {
            Some(name) if !name.is_empty() => {
                if self.pattern.is_match(name) {
                    Verdict::NoProblem
                } else {
                    Verdict::ProblemFound
                }
            }
            _ => Verdict::ProblemFound,
        };
        Ok(verdict)
    }
}
