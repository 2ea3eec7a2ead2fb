// src/engine/mod.rs

//! Workflows that combine the task store with the scoring gateway.
//!
//! The pure decision logic (which active task a ranking points at, what the
//! next step is) lives in [`core`]; the async shell that calls the gateway and
//! mutates the store is [`planner`].

pub mod core;
pub mod planner;

pub use self::core::{locate_ranked_task, NextStep};
pub use self::planner::Planner;
