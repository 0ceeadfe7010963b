//! PyO3 bindings for the exam planner.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::config::{SchedulingConfig, UnknownItemPolicy};
use crate::models::{Assignment, SlotIndex};
use crate::report::render_report;
use crate::sample::load_example_courses;
use crate::scheduler::{ConflictScheduler, SchedulerError};

fn to_py_err(err: SchedulerError) -> PyErr {
    match err {
        SchedulerError::UnknownItem(_) => PyKeyError::new_err(err.to_string()),
        SchedulerError::InvalidConflict(_) | SchedulerError::InvalidCapacity => {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Conflict scheduler (PyO3 wrapper).
#[pyclass(name = "ConflictScheduler")]
#[derive(Clone, Debug)]
pub struct PyConflictScheduler {
    inner: ConflictScheduler,
}

impl PyConflictScheduler {
    fn run(&self, max_per_slot: Option<usize>) -> PyResult<Assignment> {
        let config = match max_per_slot {
            Some(n) => self.inner.config().with_max_per_slot(n),
            None => self.inner.config().clone(),
        };
        self.inner.schedule_with(&config).map_err(to_py_err)
    }
}

#[pymethods]
impl PyConflictScheduler {
    #[new]
    #[pyo3(signature = (max_per_slot=None, strict=false, verbosity=None))]
    fn new(max_per_slot: Option<usize>, strict: bool, verbosity: Option<u8>) -> Self {
        let policy = if strict {
            UnknownItemPolicy::Reject
        } else {
            UnknownItemPolicy::AutoRegister
        };
        Self {
            inner: ConflictScheduler::with_config(SchedulingConfig::new(
                max_per_slot,
                Some(policy),
                verbosity,
            )),
        }
    }

    /// Register a course. Returns False if it was already registered.
    fn add_item(&mut self, name: &str) -> bool {
        self.inner.add_item(name).is_added()
    }

    /// Remove a course and its conflicts. Returns False if it was unknown.
    fn remove_item(&mut self, name: &str) -> bool {
        self.inner.remove_item(name)
    }

    /// Record a conflict. Raises ValueError on a self-conflict and KeyError
    /// for unknown courses in strict mode.
    fn add_conflict(&mut self, a: &str, b: &str) -> PyResult<bool> {
        self.inner.add_conflict(a, b).map_err(to_py_err)
    }

    /// Compute a fresh assignment as a dict of course -> slot.
    #[pyo3(signature = (max_per_slot=None))]
    fn schedule(&self, max_per_slot: Option<usize>) -> PyResult<HashMap<String, SlotIndex>> {
        Ok(self
            .run(max_per_slot)?
            .iter()
            .map(|(name, slot)| (name.to_string(), slot))
            .collect())
    }

    /// Compute a fresh assignment and render it as text.
    #[pyo3(signature = (max_per_slot=None))]
    fn render_schedule(&self, max_per_slot: Option<usize>) -> PyResult<String> {
        Ok(render_report(&self.run(max_per_slot)?))
    }

    fn items(&self) -> Vec<String> {
        self.inner.items()
    }

    fn conflicts_of(&self, name: &str) -> PyResult<Vec<String>> {
        self.inner
            .conflicts_of(name)
            .ok_or_else(|| to_py_err(SchedulerError::UnknownItem(name.to_string())))
    }

    fn load_example(&mut self) -> PyResult<()> {
        load_example_courses(&mut self.inner).map_err(to_py_err)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn __len__(&self) -> usize {
        self.inner.item_count()
    }

    fn __contains__(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    fn __repr__(&self) -> String {
        format!(
            "ConflictScheduler(courses={}, conflicts={}, max_per_slot={})",
            self.inner.item_count(),
            self.inner.conflict_count(),
            self.inner.config().max_per_slot
        )
    }
}

/// The exam_planner Python module.
#[pymodule]
fn exam_planner(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyConflictScheduler>()?;
    Ok(())
}
