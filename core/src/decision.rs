//! Critic decision categories.

use std::fmt;

/// Design decision category a critic contributes findings to.
///
/// The set is fixed; the presentation layer groups findings by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Decision {
    /// Storage and instantiation state of classifiers.
    Storage,
    /// Naming conventions.
    Naming,
    /// Decomposition into packages and subsystems.
    Modularity,
    /// Generalization hierarchies.
    Inheritance,
    /// Associations and dependencies.
    Relationships,
    /// Object creation and lifecycle.
    Instantiation,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Storage => "storage",
            Self::Naming => "naming",
            Self::Modularity => "modularity",
            Self::Inheritance => "inheritance",
            Self::Relationships => "relationships",
            Self::Instantiation => "instantiation",
        };
        write!(f, "{}", name)
    }
}
