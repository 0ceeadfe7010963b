//! Conflict scheduler module.
//!
//! Keeps the course registry and conflict graph, and assigns time slots with a
//! degree-ordered greedy coloring bounded by a per-slot capacity.

mod core;
mod graph;
mod ordering;

pub use self::core::{ConflictScheduler, SchedulerError};
pub use graph::ConflictGraph;
pub use ordering::{coloring_order, ColoringKey};
