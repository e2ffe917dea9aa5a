//! Critique Traverse
//!
//! Queries over the model graph's containment structure.
//!
//! Responsibilities:
//! - Enumerate descendants by category (subsystems, namespaces, arbitrary kind)
//! - Compute surrounding namespaces and name lookups
//! - Reassign an element's enclosing namespace
//!
//! All enumeration is done with an explicit stack in owned-insertion order
//! (depth-first, pre-order). Results are deterministic for a fixed graph
//! snapshot; callers must not rely on more than that. The owned-elements
//! relation must be acyclic — a cyclic graph makes the walk non-terminating
//! and nothing here detects it.

mod error;
mod relocate;
mod scope;
mod walk;

pub use error::{TraverseError, TraverseResult};
pub use relocate::move_element;
pub use scope::{lookup, surrounding_namespaces};
pub use walk::{collect_elements_of_kind, collect_namespaces, collect_subsystems};
