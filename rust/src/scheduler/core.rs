//! Core conflict scheduler implementation.

use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::config::{SchedulingConfig, UnknownItemPolicy};
use crate::interner::{ItemId, ItemInterner};
use crate::models::{Assignment, Registration, SlotIndex};
use crate::{log_changes, log_checks, log_debug};

use super::graph::ConflictGraph;
use super::ordering::coloring_order;

/// Errors that can occur while editing the conflict graph or scheduling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("A course cannot conflict with itself: {0}")]
    InvalidConflict(String),
    #[error("Unknown course: {0}")]
    UnknownItem(String),
    #[error("Invalid slot capacity: max_per_slot must be at least 1")]
    InvalidCapacity,
}

/// Owns the registered courses and their conflicts, and computes slot
/// assignments on request.
///
/// No internal synchronization: a host sharing one scheduler between threads
/// must serialize access itself.
#[derive(Clone, Debug, Default)]
pub struct ConflictScheduler {
    interner: ItemInterner,
    graph: ConflictGraph,
    config: SchedulingConfig,
}

impl ConflictScheduler {
    /// Create an empty scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scheduler with the given configuration.
    pub fn with_config(config: SchedulingConfig) -> Self {
        Self {
            interner: ItemInterner::default(),
            graph: ConflictGraph::new(),
            config,
        }
    }

    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    /// Register a course. Adding a known course changes nothing.
    pub fn add_item(&mut self, name: &str) -> Registration {
        if self.interner.get(name).is_some() {
            log_debug!(self.config.verbosity, "Course already registered: {}", name);
            return Registration::AlreadyPresent;
        }
        let id = self.register(name);
        log_debug!(self.config.verbosity, "Registered course {} (id {})", name, id);
        Registration::Added
    }

    /// Remove a course and every conflict that involves it.
    ///
    /// Returns false if the course was not registered.
    pub fn remove_item(&mut self, name: &str) -> bool {
        let Some(id) = self.interner.get(name) else {
            return false;
        };
        let former = self.graph.remove_node(id).map_or(0, |n| n.len());
        self.interner.release(name);
        log_debug!(
            self.config.verbosity,
            "Removed course {} and {} conflict(s)",
            name,
            former
        );
        true
    }

    /// Record that `a` and `b` cannot share a slot.
    ///
    /// Returns true if the conflict is new. Unregistered courses are handled
    /// according to the configured `UnknownItemPolicy`.
    pub fn add_conflict(&mut self, a: &str, b: &str) -> Result<bool, SchedulerError> {
        if a == b {
            return Err(SchedulerError::InvalidConflict(a.to_string()));
        }
        if self.config.unknown_item_policy == UnknownItemPolicy::Reject {
            for name in [a, b] {
                if !self.contains(name) {
                    return Err(SchedulerError::UnknownItem(name.to_string()));
                }
            }
        }

        let id_a = self.register(a);
        let id_b = self.register(b);
        let added = self.graph.insert_edge(id_a, id_b);
        log_debug!(
            self.config.verbosity,
            "Conflict {} - {} ({})",
            a,
            b,
            if added { "new" } else { "existing" }
        );
        Ok(added)
    }

    /// Compute a fresh assignment with the given slot capacity.
    pub fn schedule(&self, max_per_slot: usize) -> Result<Assignment, SchedulerError> {
        self.schedule_with(&self.config.with_max_per_slot(max_per_slot))
    }

    /// Compute a fresh assignment using an explicit configuration.
    pub fn schedule_with(&self, config: &SchedulingConfig) -> Result<Assignment, SchedulerError> {
        if config.max_per_slot == 0 {
            return Err(SchedulerError::InvalidCapacity);
        }
        if self.graph.node_count() == 0 {
            return Ok(Assignment::default());
        }
        Ok(assign_slots(
            &self.graph,
            &self.interner,
            config.max_per_slot,
            config.verbosity,
        ))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.interner.get(name).is_some()
    }

    /// All registered course names, sorted ascending.
    pub fn items(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .interner
            .iter()
            .map(|(_, name)| name.to_string())
            .collect();
        names.sort();
        names
    }

    /// Sorted names of the courses conflicting with `name`, or `None` if
    /// `name` is not registered.
    pub fn conflicts_of(&self, name: &str) -> Option<Vec<String>> {
        let id = self.interner.get(name)?;
        let neighbors = self.graph.neighbors(id)?;
        let mut names: Vec<String> = neighbors
            .iter()
            .filter_map(|&n| self.interner.resolve(n))
            .map(str::to_string)
            .collect();
        names.sort();
        Some(names)
    }

    pub fn are_conflicting(&self, a: &str, b: &str) -> bool {
        match (self.interner.get(a), self.interner.get(b)) {
            (Some(id_a), Some(id_b)) => self.graph.contains_edge(id_a, id_b),
            _ => false,
        }
    }

    /// Number of courses conflicting with `name`.
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.graph.degree(self.interner.get(name)?)
    }

    pub fn item_count(&self) -> usize {
        self.interner.len()
    }

    /// Number of distinct (undirected) conflicts.
    pub fn conflict_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// Forget every course and conflict. The configuration is kept.
    pub fn clear(&mut self) {
        self.interner.clear();
        self.graph.clear();
    }

    fn register(&mut self, name: &str) -> ItemId {
        let id = self.interner.intern(name);
        self.graph.insert_node(id);
        id
    }
}

/// Degree-ordered greedy coloring with a per-slot capacity.
///
/// Each course takes the lowest slot that none of its already placed
/// neighbors occupy and that still has room. A new slot always qualifies, so
/// every course is placed.
fn assign_slots(
    graph: &ConflictGraph,
    interner: &ItemInterner,
    max_per_slot: usize,
    verbosity: u8,
) -> Assignment {
    let order = coloring_order(graph, interner);

    // Indexed by ItemId
    let mut slot_of: Vec<Option<SlotIndex>> = vec![None; interner.capacity_bound()];
    // Indexed by slot - 1
    let mut occupancy: Vec<usize> = Vec::new();

    for id in order {
        let name = interner.resolve(id).unwrap_or("?");
        let forbidden: FxHashSet<SlotIndex> = graph
            .neighbors(id)
            .into_iter()
            .flatten()
            .filter_map(|&n| slot_of.get(n as usize).copied().flatten())
            .collect();

        let mut slot: SlotIndex = 1;
        loop {
            let used = occupancy.get(slot as usize - 1).copied().unwrap_or(0);
            if forbidden.contains(&slot) {
                log_checks!(verbosity, "  {}: slot {} used by a conflicting course", name, slot);
            } else if used >= max_per_slot {
                log_checks!(verbosity, "  {}: slot {} is full ({})", name, slot, used);
            } else {
                break;
            }
            slot += 1;
        }

        let index = slot as usize - 1;
        if index == occupancy.len() {
            occupancy.push(0);
        }
        occupancy[index] += 1;
        slot_of[id as usize] = Some(slot);
        log_changes!(verbosity, "Assigned {} -> slot {}", name, slot);
    }

    log_changes!(
        verbosity,
        "Scheduled {} course(s) into {} slot(s)",
        graph.node_count(),
        occupancy.len()
    );

    let slots: BTreeMap<String, SlotIndex> = interner
        .iter()
        .filter_map(|(id, name)| {
            slot_of
                .get(id as usize)
                .copied()
                .flatten()
                .map(|slot| (name.to_string(), slot))
        })
        .collect();
    Assignment::from_map(slots)
}
