// src/dag/mod.rs

//! Dependency graph views over the active task list.
//!
//! - [`graph`] builds a positional graph (task position -> dependency
//!   position) for adjacency queries.
//! - [`cycles`] reports pairs of tasks that depend on each other directly.

pub mod cycles;
pub mod graph;

pub use cycles::{describe_pair, detect_mutual_dependencies, MutualPair};
pub use graph::DependencyGraph;
