//! Text rendering of an assignment.

use std::fmt::Write;

use crate::models::Assignment;

const RULE_WIDTH: usize = 50;

/// Render the full exam schedule listing.
///
/// Slots are listed ascending, each followed by its courses in name order,
/// then totals for slots and courses.
pub fn render_report(assignment: &Assignment) -> String {
    if assignment.is_empty() {
        return "No schedule generated yet.\n".to_string();
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let grouped = assignment.by_slot();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "EXAM SCHEDULE");
    let _ = writeln!(out, "{rule}");
    out.push('\n');

    for (slot, courses) in &grouped {
        let _ = writeln!(out, "TIME SLOT {slot}:");
        for course in courses {
            let _ = writeln!(out, "   - {course}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Total Time Slots: {}", grouped.len());
    let _ = writeln!(out, "Total Courses: {}", assignment.len());
    out
}

/// Render the compact per-slot summary printed by the `schedule` command.
pub fn render_summary(assignment: &Assignment) -> String {
    let mut out = String::new();
    let grouped = assignment.by_slot();
    for (slot, courses) in &grouped {
        let _ = writeln!(out, "Slot {}: {}", slot, courses.join(", "));
    }
    let _ = writeln!(out, "Total slots: {}", grouped.len());
    let _ = writeln!(out, "Total items: {}", assignment.len());
    out
}
