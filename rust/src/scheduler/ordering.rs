//! Processing order for greedy slot assignment.
//!
//! Courses with the most conflicts go first. Equal degrees are broken by
//! course name so the order does not depend on hash iteration.

use std::cmp::{Ordering, Reverse};

use crate::interner::{ItemId, ItemInterner};

use super::graph::ConflictGraph;

/// Sort key for a course in the coloring order (lower = processed earlier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringKey<'a> {
    pub degree: usize,
    pub name: &'a str,
    pub id: ItemId,
}

impl Ord for ColoringKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        Reverse(self.degree)
            .cmp(&Reverse(other.degree))
            .then_with(|| self.name.cmp(other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for ColoringKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ids of every course in the graph, highest degree first, ties by name.
pub fn coloring_order(graph: &ConflictGraph, interner: &ItemInterner) -> Vec<ItemId> {
    let mut keys: Vec<ColoringKey<'_>> = graph
        .nodes()
        .filter_map(|id| {
            let name = interner.resolve(id)?;
            Some(ColoringKey {
                degree: graph.degree(id).unwrap_or(0),
                name,
                id,
            })
        })
        .collect();
    keys.sort_unstable();
    keys.into_iter().map(|key| key.id).collect()
}
