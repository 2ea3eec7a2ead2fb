use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use taskrank::gateway::{GatewayError, ScoredTask, ScoringGateway, ScoringRequest};

/// A fake scoring gateway that:
/// - records every request it receives
/// - ranks tasks by importance (highest first, ties keep input order)
/// - can be switched to fail with an HTTP status
/// - can be told to answer with a fixed ranking instead.
///
/// Clones share the recorded requests and both switches.
#[derive(Debug, Clone, Default)]
pub struct FakeScoringGateway {
    requests: Arc<Mutex<Vec<ScoringRequest>>>,
    fail_with: Arc<Mutex<Option<u16>>>,
    scripted: Arc<Mutex<Option<Vec<ScoredTask>>>>,
}

impl FakeScoringGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(status: u16) -> Self {
        let gw = Self::new();
        gw.fail_with(Some(status));
        gw
    }

    pub fn fail_with(&self, status: Option<u16>) {
        *self.fail_with.lock().unwrap() = status;
    }

    /// Answer every request with `ranking`, whatever tasks were sent.
    pub fn respond_with(&self, ranking: Option<Vec<ScoredTask>>) {
        *self.scripted.lock().unwrap() = ranking;
    }

    pub fn requests(&self) -> Vec<ScoringRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ScoringGateway for FakeScoringGateway {
    fn score<'a>(
        &'a self,
        request: &'a ScoringRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ScoredTask>, GatewayError>> + Send + 'a>> {
        let requests = Arc::clone(&self.requests);
        let fail_with = *self.fail_with.lock().unwrap();
        let scripted = self.scripted.lock().unwrap().clone();

        Box::pin(async move {
            requests.lock().unwrap().push(request.clone());

            if let Some(status) = fail_with {
                return Err(GatewayError::Status {
                    status,
                    body: "<fake failure>".to_string(),
                });
            }

            if let Some(ranking) = scripted {
                return Ok(ranking);
            }

            let mut ranked: Vec<ScoredTask> = request
                .tasks
                .iter()
                .map(|t| ScoredTask {
                    task: t.clone(),
                    priority_score: f64::from(t.importance) * 10.0,
                    explanation: format!("Importance {}", t.importance),
                })
                .collect();
            ranked.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
            Ok(ranked)
        })
    }
}
