//! Logging macros for the exam planner with verbosity level control.
//!
//! Nothing is formatted when the configured verbosity is below a macro's level.
//! Verbosity levels:
//! - 0: SILENT (only errors)
//! - 1: CHANGES (slot assignments)
//! - 2: CHECKS (forbidden slots and capacity checks per course)
//! - 3: DEBUG (conflict graph mutations)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at CHANGES level (verbosity >= 1).
///
/// Used for: slot assignments and run summaries.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            eprintln!($($arg)*);
        }
    };
}

/// Log at CHECKS level (verbosity >= 2).
///
/// Used for: slots skipped because of a neighbor or a full slot.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
///
/// Used for: item registration, removal and edge insertion.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(VERBOSITY_SILENT < VERBOSITY_CHANGES);
        assert!(VERBOSITY_CHANGES < VERBOSITY_CHECKS);
        assert!(VERBOSITY_CHECKS < VERBOSITY_DEBUG);
    }

    #[test]
    fn test_log_macros_compile() {
        let verbosity = VERBOSITY_SILENT;
        log_changes!(verbosity, "slot {}", 1);
        log_checks!(verbosity, "course {}", "Maths");
        log_debug!(verbosity, "edge {} - {}", "a", "b");
    }

    #[test]
    fn test_arguments_formatted_only_at_or_above_level() {
        let calls = std::cell::Cell::new(0);
        let arg = || {
            calls.set(calls.get() + 1);
            "x"
        };

        log_changes!(VERBOSITY_SILENT, "{}", arg());
        log_checks!(VERBOSITY_CHANGES, "{}", arg());
        log_debug!(VERBOSITY_CHECKS, "{}", arg());
        assert_eq!(calls.get(), 0);

        log_changes!(VERBOSITY_CHANGES, "{}", arg());
        log_checks!(VERBOSITY_CHECKS, "{}", arg());
        log_debug!(VERBOSITY_DEBUG, "{}", arg());
        assert_eq!(calls.get(), 3);

        log_changes!(VERBOSITY_DEBUG, "{}", arg());
        assert_eq!(calls.get(), 4);
    }
}
