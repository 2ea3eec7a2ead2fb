// src/task/mod.rs

//! Task data model and the positional dependency reference model.
//!
//! - [`model`] defines `Task`, `CompletedTask` and the unvalidated `TaskDraft`.
//! - [`validate`] turns a `TaskDraft` into a `Task`, aggregating every problem.
//! - [`deps`] holds the renumbering pass that keeps 1-based dependency
//!   positions consistent when a task leaves the active list.

pub mod deps;
pub mod model;
pub mod validate;

pub use deps::{parse_dependencies, renumber_after_removal, renumbered};
pub use model::{CompletedTask, Position, Task, TaskDraft};
pub use validate::{validate_task, ValidationError};
