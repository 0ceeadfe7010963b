//! Core data types for the exam planner.

use std::collections::BTreeMap;

/// Time slot index. Slots are numbered from 1.
pub type SlotIndex = u32;

/// Outcome of registering a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The course was not known before.
    Added,
    /// The course was already registered; nothing changed.
    AlreadyPresent,
}

impl Registration {
    pub fn is_added(self) -> bool {
        matches!(self, Registration::Added)
    }
}

/// Result of one scheduling run: course name -> slot index.
///
/// Keyed by name in an ordered map so two runs over the same state compare equal
/// and iterate identically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    slots: BTreeMap<String, SlotIndex>,
}

impl Assignment {
    pub(crate) fn from_map(slots: BTreeMap<String, SlotIndex>) -> Self {
        Self { slots }
    }

    /// Slot assigned to `name`, if it was part of the run.
    pub fn slot_of(&self, name: &str) -> Option<SlotIndex> {
        self.slots.get(name).copied()
    }

    /// Number of scheduled courses.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate `(name, slot)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SlotIndex)> {
        self.slots.iter().map(|(name, &slot)| (name.as_str(), slot))
    }

    /// Occupants of each used slot, names sorted ascending.
    pub fn by_slot(&self) -> BTreeMap<SlotIndex, Vec<String>> {
        let mut grouped: BTreeMap<SlotIndex, Vec<String>> = BTreeMap::new();
        // iter() is name-ordered, so each bucket comes out sorted
        for (name, slot) in self.iter() {
            grouped.entry(slot).or_default().push(name.to_string());
        }
        grouped
    }

    /// Number of distinct slots with at least one occupant.
    pub fn slot_count(&self) -> usize {
        self.by_slot().len()
    }
}
