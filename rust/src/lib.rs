//! Exam slot planning by degree-ordered greedy graph coloring.
//!
//! Courses are nodes, conflicts are edges. A schedule assigns each course a
//! time slot so that conflicting courses never share one and no slot holds
//! more than a configured number of courses.

pub mod commands;
mod config;
mod interner;
pub mod logging;
mod models;
pub mod report;
pub mod sample;
pub mod scheduler;

#[cfg(feature = "python")]
mod python;

pub use commands::{Command, CommandError, ScriptError, Session, SessionError};
pub use config::{SchedulingConfig, UnknownItemPolicy, DEFAULT_MAX_PER_SLOT};
pub use interner::{ItemId, ItemInterner};
pub use models::{Assignment, Registration, SlotIndex};
pub use report::{render_report, render_summary};
pub use scheduler::{ConflictScheduler, SchedulerError};
