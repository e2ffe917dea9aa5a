//! Trigger-to-critic interest index.

use critique_core::Trigger;
use std::collections::HashMap;

use crate::Critic;

/// Maps a trigger token to the catalog positions of the critics that
/// declared interest in it.
///
/// Built once per catalog; rebuilt only when the catalog changes.
#[derive(Debug, Default)]
pub struct TriggerIndex {
    interested: HashMap<Trigger, Vec<usize>>,
}

impl TriggerIndex {
    /// Build the index from a critic list.
    pub fn build(critics: &[Box<dyn Critic>]) -> Self {
        let mut interested: HashMap<Trigger, Vec<usize>> = HashMap::new();
        for (i, critic) in critics.iter().enumerate() {
            for &trigger in critic.triggers() {
                let slots = interested.entry(trigger).or_default();
                if !slots.contains(&i) {
                    slots.push(i);
                }
            }
        }
        Self { interested }
    }

    /// Catalog positions interested in a single trigger, in catalog order.
    pub fn interested_in(&self, trigger: Trigger) -> &[usize] {
        self.interested
            .get(&trigger)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Union of catalog positions interested in any of the given triggers,
    /// deduplicated, in catalog order.
    pub fn interested_in_any(&self, triggers: impl IntoIterator<Item = Trigger>) -> Vec<usize> {
        let mut union: Vec<usize> = Vec::new();
        for trigger in triggers {
            for &i in self.interested_in(trigger) {
                if !union.contains(&i) {
                    union.push(i);
                }
            }
        }
        union.sort_unstable();
        union
    }
}
