// src/engine/planner.rs

use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::engine::core::{locate_ranked_task, NextStep};
use crate::errors::{Result, TaskrankError};
use crate::gateway::{HttpScoringGateway, ScoredTask, ScoringGateway, ScoringRequest};
use crate::persist::SnapshotStore;
use crate::store::TaskStore;

/// Owns the task store and drives it against a scoring gateway.
///
/// Analysis takes `&mut self`, so while a scoring request is in flight
/// nothing else can mutate the store the request was built from, and a
/// second analysis cannot start.
#[derive(Debug)]
pub struct Planner<G: ScoringGateway> {
    store: TaskStore,
    gateway: G,
    strategy: String,
}

impl Planner<HttpScoringGateway> {
    /// Wire up the HTTP gateway and the configured snapshot persistence.
    pub fn from_config(cfg: &ConfigFile) -> Result<Self> {
        let gateway = HttpScoringGateway::from_config(&cfg.gateway)?;
        let store = TaskStore::open(SnapshotStore::from_config(&cfg.storage))?;
        info!(
            endpoint = %gateway.endpoint(),
            strategy = %cfg.gateway.strategy,
            "planner ready"
        );
        Ok(Self::new(store, gateway, cfg.gateway.strategy.clone()))
    }
}

impl<G: ScoringGateway> Planner<G> {
    pub fn new(store: TaskStore, gateway: G, strategy: impl Into<String>) -> Self {
        Self {
            store,
            gateway,
            strategy: strategy.into(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Default strategy used when none is given.
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Score the active tasks.
    ///
    /// An empty list is answered locally with an empty ranking instead of
    /// being sent; the scoring service itself rejects an empty `tasks` array
    /// with "Please add at least one task to analyze".
    pub async fn analyze(&mut self, strategy: Option<&str>) -> Result<Vec<ScoredTask>> {
        if self.store.active().is_empty() {
            debug!("no active tasks; skipping scoring request");
            return Ok(Vec::new());
        }

        let request = ScoringRequest {
            tasks: self.store.active().to_vec(),
            strategy: strategy.unwrap_or(self.strategy.as_str()).to_string(),
        };

        let ranking = self.gateway.score(&request).await?;
        info!(
            strategy = %request.strategy,
            tasks = request.tasks.len(),
            ranked = ranking.len(),
            "tasks analyzed"
        );
        Ok(ranking)
    }

    /// Complete whichever task the gateway ranks first, then re-analyze.
    ///
    /// A gateway failure before the completion, or a top-ranked task that
    /// cannot be found in the active list, leaves the store untouched.
    pub async fn complete_next(&mut self, strategy: Option<&str>) -> Result<NextStep> {
        let ranking = self.analyze(strategy).await?;

        let Some(top) = ranking.first() else {
            info!("nothing left to complete");
            return Ok(NextStep::AllDone);
        };

        let position = locate_ranked_task(self.store.active(), top)
            .ok_or_else(|| TaskrankError::UnrankedTask {
                title: top.task.title.clone(),
            })?;

        let task = self.store.complete(position)?;
        let ranking = self.analyze(strategy).await?;

        Ok(NextStep::Completed { task, ranking })
    }
}
