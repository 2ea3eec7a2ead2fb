// src/store/mod.rs

//! The task store: ordered active list, ordered completed list and the
//! editing cursor.
//!
//! Every mutation runs to completion before returning and leaves the
//! positional dependency references consistent: removing a task from the
//! active list (delete or complete) is always followed by the renumbering
//! pass from [`crate::task::deps`]. After each successful mutation a fresh
//! [`StoreSnapshot`] is published to subscribers, and if the completed list
//! changed it is written to the snapshot store (best effort).

pub mod bulk;
pub mod snapshot;

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::dag::{detect_mutual_dependencies, DependencyGraph, MutualPair};
use crate::errors::{Collection, Result, TaskrankError};
use crate::persist::SnapshotStore;
use crate::progress::{progress, Progress};
use crate::task::{renumber_after_removal, validate_task, CompletedTask, Position, Task, TaskDraft};

pub use bulk::BulkLoadReport;
pub use snapshot::StoreSnapshot;

#[derive(Debug)]
pub struct TaskStore {
    active: Vec<Task>,
    completed: Vec<CompletedTask>,
    /// Position of the task open in the edit form.
    editing: Option<Position>,
    persistence: Option<SnapshotStore>,
    updates: watch::Sender<Arc<StoreSnapshot>>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Empty store without persistence.
    pub fn new() -> Self {
        let (updates, _) = watch::channel(Arc::new(StoreSnapshot::default()));
        Self {
            active: Vec::new(),
            completed: Vec::new(),
            editing: None,
            persistence: None,
            updates,
        }
    }

    /// Store whose completed list is loaded from, and written back to,
    /// `persistence`.
    pub fn open(persistence: SnapshotStore) -> Result<Self> {
        let completed = persistence.load()?;
        info!(
            path = ?persistence.path(),
            completed = completed.len(),
            "opened task store"
        );

        let mut store = Self::new();
        store.completed = completed;
        store.persistence = Some(persistence);
        store.publish();
        Ok(store)
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    pub fn active(&self) -> &[Task] {
        &self.active
    }

    pub fn completed(&self) -> &[CompletedTask] {
        &self.completed
    }

    /// Active task at a 1-based position.
    pub fn get(&self, position: Position) -> Option<&Task> {
        position.checked_sub(1).and_then(|idx| self.active.get(idx))
    }

    pub fn editing(&self) -> Option<Position> {
        self.editing
    }

    pub fn progress(&self) -> Progress {
        progress(&self.active, &self.completed)
    }

    pub fn mutual_dependencies(&self) -> Vec<MutualPair> {
        detect_mutual_dependencies(&self.active)
    }

    /// Positions of active tasks that list `position` as a dependency.
    ///
    /// Useful to warn before deleting or completing a task others wait on.
    pub fn dependents_of(&self, position: Position) -> Vec<Position> {
        DependencyGraph::from_tasks(&self.active).dependents_of(position)
    }

    /// Receive a new [`StoreSnapshot`] after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<Arc<StoreSnapshot>> {
        self.updates.subscribe()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot::capture(&self.active, &self.completed, self.editing)
    }

    /// Active tasks as a pretty-printed JSON array, loadable with
    /// [`TaskStore::bulk_load_json`].
    pub fn export_active_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.active)?)
    }

    // ---------------------------------------------------------------------
    // Active list
    // ---------------------------------------------------------------------

    /// Validate and append a task. Returns its new position.
    pub fn add(&mut self, draft: TaskDraft) -> Result<Position> {
        let task = validate_task(&draft)?;
        self.active.push(task);
        let position = self.active.len();

        info!(position, title = %self.active[position - 1].title, "task added");
        self.publish();
        Ok(position)
    }

    /// Replace the task at `position` in place. Other tasks are untouched.
    pub fn update(&mut self, position: Position, draft: TaskDraft) -> Result<()> {
        let idx = self.active_index(position)?;
        let task = validate_task(&draft)?;
        self.active[idx] = task;

        if self.editing == Some(position) {
            self.editing = None;
        }

        info!(position, title = %self.active[idx].title, "task updated");
        self.publish();
        Ok(())
    }

    /// Remove the task at `position` and renumber everyone else's
    /// dependencies. The caller is responsible for any confirmation.
    pub fn delete(&mut self, position: Position) -> Result<Task> {
        let task = self.remove_active(position)?;

        info!(position, title = %task.title, "task deleted");
        self.publish();
        Ok(task)
    }

    /// Move the task at `position` to the completed list.
    pub fn complete(&mut self, position: Position) -> Result<CompletedTask> {
        let task = self.remove_active(position)?;

        let entry = CompletedTask {
            task,
            completed_at: Utc::now(),
            completed_order: self.completed.len() + 1,
        };
        self.completed.push(entry.clone());

        info!(
            position,
            title = %entry.task.title,
            completed_order = entry.completed_order,
            "task completed"
        );
        self.persist_completed();
        self.publish();
        Ok(entry)
    }

    pub fn clear_active(&mut self) {
        let cleared = self.active.len();
        self.active.clear();
        self.editing = None;

        info!(cleared, "active tasks cleared");
        self.publish();
    }

    // ---------------------------------------------------------------------
    // Completed list
    // ---------------------------------------------------------------------

    /// Move a completed task back to the end of the active list.
    ///
    /// Its dependencies are carried over as they were at completion time and
    /// may no longer point at the tasks they originally meant. Siblings keep
    /// their `completed_order`.
    pub fn restore(&mut self, completed_position: Position) -> Result<Task> {
        let idx = self.completed_index(completed_position)?;
        let entry = self.completed.remove(idx);
        let task = entry.task;
        self.active.push(task.clone());

        info!(
            completed_position,
            position = self.active.len(),
            title = %task.title,
            "task restored"
        );
        if !task.dependencies.is_empty() {
            debug!(
                title = %task.title,
                dependencies = ?task.dependencies,
                "restored task keeps its dependency positions unchanged"
            );
        }
        self.persist_completed();
        self.publish();
        Ok(task)
    }

    /// Delete a completed task for good. The active list is unaffected.
    pub fn remove_permanently(&mut self, completed_position: Position) -> Result<CompletedTask> {
        let idx = self.completed_index(completed_position)?;
        let entry = self.completed.remove(idx);

        info!(completed_position, title = %entry.task.title, "completed task removed");
        self.persist_completed();
        self.publish();
        Ok(entry)
    }

    pub fn clear_completed(&mut self) {
        let cleared = self.completed.len();
        self.completed.clear();

        info!(cleared, "completed tasks cleared");
        self.persist_completed();
        self.publish();
    }

    /// Empty both lists and leave edit mode.
    pub fn clear_all(&mut self) {
        self.active.clear();
        self.completed.clear();
        self.editing = None;

        info!("all tasks cleared");
        self.persist_completed();
        self.publish();
    }

    // ---------------------------------------------------------------------
    // Editing cursor
    // ---------------------------------------------------------------------

    /// Mark the task at `position` as being edited and return it.
    pub fn begin_edit(&mut self, position: Position) -> Result<&Task> {
        let idx = self.active_index(position)?;
        self.editing = Some(position);

        debug!(position, "editing task");
        self.publish();
        Ok(&self.active[idx])
    }

    pub fn cancel_edit(&mut self) {
        if self.editing.take().is_some() {
            debug!("edit cancelled");
            self.publish();
        }
    }

    // ---------------------------------------------------------------------
    // Bulk load
    // ---------------------------------------------------------------------

    /// Validate each candidate independently and append the valid ones in
    /// input order. Invalid entries are dropped and only counted.
    pub fn bulk_load(&mut self, candidates: Vec<Value>) -> BulkLoadReport {
        let report = bulk::partition_candidates(candidates);
        self.active.extend(report.accepted.iter().cloned());

        info!(
            accepted = report.accepted.len(),
            rejected = report.rejected_count,
            "bulk load finished"
        );
        self.publish();
        report
    }

    /// Bulk load from JSON text. Malformed text aborts the whole load.
    pub fn bulk_load_json(&mut self, text: &str) -> Result<BulkLoadReport> {
        let candidates = bulk::parse_candidates(text)?;
        Ok(self.bulk_load(candidates))
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn active_index(&self, position: Position) -> Result<usize> {
        checked_index(position, self.active.len(), Collection::Active)
    }

    fn completed_index(&self, position: Position) -> Result<usize> {
        checked_index(position, self.completed.len(), Collection::Completed)
    }

    /// Take a task out of the active list and run the renumbering pass.
    fn remove_active(&mut self, position: Position) -> Result<Task> {
        let idx = self.active_index(position)?;
        let task = self.active.remove(idx);
        renumber_after_removal(&mut self.active, position);

        self.editing = match self.editing {
            Some(p) if p == position => None,
            Some(p) if p > position => Some(p - 1),
            other => other,
        };

        debug!(removed = position, remaining = self.active.len(), "dependencies renumbered");
        Ok(task)
    }

    fn persist_completed(&self) {
        if let Some(persistence) = &self.persistence {
            if let Err(e) = persistence.save(&self.completed) {
                warn!(
                    path = ?persistence.path(),
                    error = %e,
                    "failed to persist completed tasks; keeping in-memory state"
                );
            }
        }
    }

    fn publish(&self) {
        self.updates.send_replace(Arc::new(self.snapshot()));
    }
}

fn checked_index(position: Position, len: usize, collection: Collection) -> Result<usize> {
    if position == 0 || position > len {
        return Err(TaskrankError::NotFound {
            collection,
            position,
            len,
        });
    }
    Ok(position - 1)
}
