//! Element classification tags.
//!
//! `ElementKind` is the closed set of element categories the critique core
//! distinguishes. `Trigger` is the closed set of interest tokens critics
//! declare and the dispatch index is keyed by; each kind maps to a fixed
//! trigger set, which is the bridge between "what changed" and "which
//! critics care".

use std::fmt;

/// Category of a model element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Top-level model, the root namespace of a graph.
    Model,
    /// A package namespace.
    Package,
    /// A subsystem namespace.
    Subsystem,
    /// A class.
    Class,
    /// An interface (type-only, cannot be instantiated).
    Interface,
    /// A data type (type-only, cannot be instantiated).
    DataType,
    /// An operation owned by a classifier.
    Operation,
    /// An attribute owned by a classifier.
    Attribute,
}

impl ElementKind {
    /// Whether elements of this kind own other elements.
    pub fn is_namespace(&self) -> bool {
        matches!(self, Self::Model | Self::Package | Self::Subsystem)
    }

    /// Whether elements of this kind carry operations and attributes.
    pub fn is_classifier(&self) -> bool {
        matches!(self, Self::Class | Self::Interface | Self::DataType)
    }

    /// Whether elements of this kind are type-only constructs that can
    /// never be instantiated.
    pub fn is_type_only(&self) -> bool {
        matches!(self, Self::Interface | Self::DataType)
    }

    /// The trigger tokens raised when an element of this kind changes.
    pub fn triggers(&self) -> &'static [Trigger] {
        match self {
            Self::Model | Self::Package | Self::Subsystem => &[Trigger::Namespace],
            Self::Class | Self::Interface | Self::DataType => &[Trigger::Classifier],
            Self::Operation => &[Trigger::BehavioralFeature],
            Self::Attribute => &[Trigger::StructuralFeature],
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Model => "model",
            Self::Package => "package",
            Self::Subsystem => "subsystem",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::DataType => "datatype",
            Self::Operation => "operation",
            Self::Attribute => "attribute",
        };
        write!(f, "{}", name)
    }
}

/// Interest token a critic declares for dispatch.
///
/// Trigger sets are a dispatch optimization, not a correctness mechanism:
/// a critic is free to declare no triggers, in which case only full passes
/// run it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Namespaces: models, packages, subsystems.
    Namespace,
    /// Classifiers: classes, interfaces, data types.
    Classifier,
    /// Behavioral features: operations.
    BehavioralFeature,
    /// Structural features: attributes.
    StructuralFeature,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Namespace => "namespace",
            Self::Classifier => "classifier",
            Self::BehavioralFeature => "behavioral_feature",
            Self::StructuralFeature => "structural_feature",
        };
        write!(f, "{}", name)
    }
}
