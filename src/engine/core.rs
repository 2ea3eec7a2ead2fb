// src/engine/core.rs

//! Pure helpers for the complete-then-reanalyze workflow.
//!
//! Nothing here touches the network or the store; the planner feeds in the
//! active list and a ranking and acts on the answer.

use crate::gateway::ScoredTask;
use crate::task::{CompletedTask, Position, Task};

/// Result of asking the planner to complete the top-ranked task.
#[derive(Debug, Clone, PartialEq)]
pub enum NextStep {
    /// The top task was completed; `ranking` is the fresh ordering of what
    /// is left (empty when nothing remains).
    Completed {
        task: CompletedTask,
        ranking: Vec<ScoredTask>,
    },
    /// The scoring service returned nothing to do.
    AllDone,
}

/// Find the active position of a ranked task.
///
/// The scoring service echoes task fields back, so the first active task
/// equal in every field wins. If the service normalised some field, fall
/// back to the first task with the same title.
pub fn locate_ranked_task(active: &[Task], ranked: &ScoredTask) -> Option<Position> {
    active
        .iter()
        .position(|t| *t == ranked.task)
        .or_else(|| active.iter().position(|t| t.title == ranked.task.title))
        .map(|idx| idx + 1)
}
