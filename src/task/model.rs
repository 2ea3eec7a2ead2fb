// src/task/model.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 1-based index of a task within the active list.
///
/// This is the only way one task refers to another; it is *not* a stable
/// identifier and shifts whenever an earlier task leaves the list.
pub type Position = usize;

/// A validated work item.
///
/// Serializes to the same shape the scoring service and the bulk-load input
/// use:
///
/// ```json
/// {
///   "title": "Write API documentation",
///   "due_date": "2025-11-28",
///   "estimated_hours": 4.0,
///   "importance": 6,
///   "dependencies": [1]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub importance: u8,
    /// Positions of the tasks this one waits for. May contain duplicates.
    #[serde(default)]
    pub dependencies: Vec<Position>,
}

impl Task {
    pub fn depends_on(&self, position: Position) -> bool {
        self.dependencies.contains(&position)
    }
}

/// A task that has been moved out of the active list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTask {
    #[serde(flatten)]
    pub task: Task,

    #[serde(rename = "completedAt")]
    pub completed_at: DateTime<Utc>,

    /// 1-based sequence number assigned at completion time. Never rewritten
    /// when siblings are restored or removed.
    #[serde(rename = "completedOrder")]
    pub completed_order: usize,
}

/// Unvalidated task input, as it arrives from a form or a JSON document.
///
/// Every field is optional and numbers are kept as `f64` so that a missing
/// or out-of-range value turns into a readable validation message rather
/// than a deserialization failure. Convert with [`Task::try_from`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: Option<String>,

    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub estimated_hours: Option<f64>,

    #[serde(default)]
    pub importance: Option<f64>,

    #[serde(default)]
    pub dependencies: Option<Vec<i64>>,
}

impl From<Task> for TaskDraft {
    fn from(task: Task) -> Self {
        Self {
            title: Some(task.title),
            due_date: Some(task.due_date.format("%Y-%m-%d").to_string()),
            estimated_hours: Some(task.estimated_hours),
            importance: Some(f64::from(task.importance)),
            dependencies: Some(
                task.dependencies
                    .into_iter()
                    .map(|d| i64::try_from(d).unwrap_or(i64::MAX))
                    .collect(),
            ),
        }
    }
}
