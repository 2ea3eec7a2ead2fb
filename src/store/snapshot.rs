// src/store/snapshot.rs

use crate::dag::{detect_mutual_dependencies, MutualPair};
use crate::progress::{progress, Progress};
use crate::task::{CompletedTask, Position, Task};

/// Immutable view of the store published after every mutation.
///
/// Renderers subscribe to these instead of reaching into the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreSnapshot {
    pub active: Vec<Task>,
    pub completed: Vec<CompletedTask>,
    /// Position currently open in the edit form, if any.
    pub editing: Option<Position>,
    pub progress: Progress,
    pub mutual_dependencies: Vec<MutualPair>,
}

impl StoreSnapshot {
    pub fn capture(
        active: &[Task],
        completed: &[CompletedTask],
        editing: Option<Position>,
    ) -> Self {
        Self {
            active: active.to_vec(),
            completed: completed.to_vec(),
            editing,
            progress: progress(active, completed),
            mutual_dependencies: detect_mutual_dependencies(active),
        }
    }
}
