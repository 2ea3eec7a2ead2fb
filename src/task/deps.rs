// src/task/deps.rs

//! Positional dependency references.
//!
//! A dependency is the 1-based position of another task in the active list.
//! Positions shift when a task leaves the list, so every removal must be
//! followed by [`renumber_after_removal`] before anyone reads dependencies
//! again. Appends and in-place edits never move other tasks and need no pass.

use tracing::trace;

use crate::task::model::{Position, Task};
use crate::task::validate::ValidationError;

/// Dependencies of a surviving task after the task at `removed` is gone.
///
/// - references to `removed` are dropped,
/// - references above it move down by one,
/// - references below it are kept as they are.
///
/// Order and duplicates of the remaining references are preserved.
pub fn renumbered(deps: &[Position], removed: Position) -> Vec<Position> {
    deps.iter()
        .filter(|&&d| d != removed)
        .map(|&d| if d > removed { d - 1 } else { d })
        .collect()
}

/// Rewrite the dependencies of every task in `tasks` in one pass after the
/// task at position `removed` has been taken out of the list.
pub fn renumber_after_removal(tasks: &mut [Task], removed: Position) {
    for task in tasks.iter_mut() {
        if task.dependencies.is_empty() {
            continue;
        }
        let updated = renumbered(&task.dependencies, removed);
        if updated != task.dependencies {
            trace!(
                task = %task.title,
                before = ?task.dependencies,
                after = ?updated,
                removed,
                "renumbered dependencies"
            );
            task.dependencies = updated;
        }
    }
}

/// Parse the comma-separated dependency field of the task form, e.g. `"1, 3"`.
///
/// Blank input and empty segments are ignored.
pub fn parse_dependencies(input: &str) -> Result<Vec<Position>, ValidationError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<Position>() {
            Ok(p) if p >= 1 => Ok(p),
            _ => Err(ValidationError::single(format!(
                "Dependency '{part}' is not a task number"
            ))),
        })
        .collect()
}
