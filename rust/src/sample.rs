//! Built-in example course catalogue.
//!
//! Two programmes of four courses each. Every course conflicts with the other
//! courses of its own programme, and the two maths courses conflict across
//! programmes.

use crate::scheduler::{ConflictScheduler, SchedulerError};

pub const CSE_IT_COURSES: [&str; 4] = [
    "Maths(CSE/IT)",
    "Physics(CSE/IT)",
    "Basic Electrical Engineering(CSE/IT)",
    "English(CSE/IT)",
];

pub const CT_COURSES: [&str; 4] = [
    "Programming for Problem solving(CT)",
    "Maths(CT)",
    "Chemistry(CT)",
    "Electronics(CT)",
];

pub const CROSS_CONFLICTS: [(&str, &str); 1] = [("Maths(CT)", "Maths(CSE/IT)")];

/// Register the example courses and conflicts into `scheduler`.
///
/// Courses are registered before their conflicts, so this works under either
/// unknown-item policy.
pub fn load_example_courses(scheduler: &mut ConflictScheduler) -> Result<(), SchedulerError> {
    for course in CSE_IT_COURSES.iter().chain(CT_COURSES.iter()) {
        scheduler.add_item(course);
    }
    for group in [&CSE_IT_COURSES, &CT_COURSES] {
        for (i, a) in group.iter().enumerate() {
            for b in &group[i + 1..] {
                scheduler.add_conflict(a, b)?;
            }
        }
    }
    for (a, b) in CROSS_CONFLICTS {
        scheduler.add_conflict(a, b)?;
    }
    Ok(())
}
