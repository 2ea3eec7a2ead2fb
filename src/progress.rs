// src/progress.rs

//! Completion statistics derived from the two task lists.

use serde::Serialize;

use crate::task::{CompletedTask, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    /// Whole percentage, rounded half up. `0` when there are no tasks at all.
    pub completion_rate: u32,
}

pub fn progress(active: &[Task], completed: &[CompletedTask]) -> Progress {
    let total = active.len() + completed.len();
    let done = completed.len();
    let completion_rate = if total > 0 {
        (100.0 * done as f64 / total as f64).round() as u32
    } else {
        0
    };

    Progress {
        total,
        completed: done,
        completion_rate,
    }
}
