//! Conflict graph over interned course ids.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::interner::ItemId;

/// Undirected simple graph: every registered course is a key, mapped to the
/// set of courses it conflicts with.
///
/// Invariants: the relation is symmetric and irreflexive, and every id that
/// appears in a neighbor set is itself a key.
#[derive(Clone, Debug, Default)]
pub struct ConflictGraph {
    adjacency: FxHashMap<ItemId, FxHashSet<ItemId>>,
}

impl ConflictGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no edges. Returns false if it already existed.
    pub fn insert_node(&mut self, id: ItemId) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, FxHashSet::default());
        true
    }

    /// Remove a node and every edge touching it.
    ///
    /// Returns the former neighbors, or `None` if the node was absent.
    pub fn remove_node(&mut self, id: ItemId) -> Option<FxHashSet<ItemId>> {
        let neighbors = self.adjacency.remove(&id)?;
        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.remove(&id);
            }
        }
        Some(neighbors)
    }

    /// Insert the undirected edge `a - b`, creating missing endpoints.
    ///
    /// Returns true if the edge is new. Self-loops are refused and return false.
    pub fn insert_edge(&mut self, a: ItemId, b: ItemId) -> bool {
        if a == b {
            return false;
        }
        let added = self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        added
    }

    pub fn contains_edge(&self, a: ItemId, b: ItemId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Neighbors of `id`, or `None` if the node is absent.
    pub fn neighbors(&self, id: ItemId) -> Option<&FxHashSet<ItemId>> {
        self.adjacency.get(&id)
    }

    /// Number of distinct conflicting neighbors.
    pub fn degree(&self, id: ItemId) -> Option<usize> {
        self.adjacency.get(&id).map(|neighbors| neighbors.len())
    }

    /// Iterate over all node ids (arbitrary order).
    pub fn nodes(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}
