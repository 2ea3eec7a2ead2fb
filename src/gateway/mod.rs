// src/gateway/mod.rs

//! Scoring gateway: the external service that ranks tasks.
//!
//! The planner talks to a `ScoringGateway` instead of an HTTP client
//! directly, so tests can swap in a fake that ranks tasks in-process while
//! production uses [`HttpScoringGateway`].
//!
//! The gateway's ordering is authoritative; nothing here re-sorts it.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::Task;
use crate::types::PriorityBand;

pub mod http;

pub use http::HttpScoringGateway;

/// Body of a scoring request: `{ "tasks": [...], "strategy": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringRequest {
    pub tasks: Vec<Task>,
    /// Opaque strategy name chosen by the caller.
    pub strategy: String,
}

/// Body of a scoring response. Extra keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringResponse {
    pub tasks: Vec<ScoredTask>,
}

/// A task annotated by the scoring service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    /// Higher is more urgent.
    pub priority_score: f64,
    pub explanation: String,
}

impl ScoredTask {
    pub fn band(&self) -> PriorityBand {
        PriorityBand::from_score(self.priority_score)
    }
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP error! status: {status} ({body})")]
    Status { status: u16, body: String },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("failed to decode scoring response: {0}")]
    Decode(String),
}

/// Trait abstracting how tasks get scored.
pub trait ScoringGateway: Send + Sync {
    /// Submit the tasks and return them in the service's priority order.
    fn score<'a>(
        &'a self,
        request: &'a ScoringRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ScoredTask>, GatewayError>> + Send + 'a>>;
}
