//! Configuration types for the exam planner.

/// Default number of courses that may share one time slot.
pub const DEFAULT_MAX_PER_SLOT: usize = 2;

/// How `add_conflict` treats course names that are not registered yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownItemPolicy {
    /// Register missing courses as a side effect of adding the conflict.
    #[default]
    AutoRegister,
    /// Fail with `SchedulerError::UnknownItem` and leave the state untouched.
    Reject,
}

/// Configuration for conflict registration and slot assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulingConfig {
    /// Maximum number of courses per time slot (must be at least 1)
    pub max_per_slot: usize,
    /// Policy for conflicts that reference unregistered courses
    pub unknown_item_policy: UnknownItemPolicy,
    /// Logging verbosity (see `crate::logging`)
    pub verbosity: u8,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            max_per_slot: DEFAULT_MAX_PER_SLOT,
            unknown_item_policy: UnknownItemPolicy::default(),
            verbosity: 0,
        }
    }
}

impl SchedulingConfig {
    /// Build a config from optional overrides, falling back to defaults.
    pub fn new(
        max_per_slot: Option<usize>,
        unknown_item_policy: Option<UnknownItemPolicy>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            max_per_slot: max_per_slot.unwrap_or(defaults.max_per_slot),
            unknown_item_policy: unknown_item_policy.unwrap_or(defaults.unknown_item_policy),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    /// Same config with a different slot capacity.
    pub fn with_max_per_slot(&self, max_per_slot: usize) -> Self {
        Self {
            max_per_slot,
            ..self.clone()
        }
    }
}
