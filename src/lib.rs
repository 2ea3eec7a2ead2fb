// src/lib.rs

pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod gateway;
pub mod logging;
pub mod persist;
pub mod progress;
pub mod store;
pub mod task;
pub mod types;

use std::path::Path;

use tracing::debug;

use crate::config::load_and_validate;
use crate::engine::Planner;
use crate::errors::Result;
use crate::gateway::HttpScoringGateway;

pub use crate::errors::TaskrankError;
pub use crate::store::TaskStore;
pub use crate::task::{CompletedTask, Position, Task, TaskDraft};

/// High-level entry point for embedding applications.
///
/// This wires together:
/// - config loading and validation
/// - the completed-tasks snapshot (file or memory)
/// - the HTTP scoring gateway
///
/// Logging is left to the caller (see [`logging::init_logging`]).
pub fn open_planner(config_path: impl AsRef<Path>) -> Result<Planner<HttpScoringGateway>> {
    let config_path = config_path.as_ref();
    let cfg = load_and_validate(config_path)?;
    debug!(path = ?config_path, "configuration loaded");
    Planner::from_config(&cfg)
}
