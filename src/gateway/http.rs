// src/gateway/http.rs

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::debug;

use super::{GatewayError, ScoredTask, ScoringGateway, ScoringRequest, ScoringResponse};
use crate::config::GatewaySection;

/// Analyze endpoint of the scoring service when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/tasks/analyze/";

const BODY_PREVIEW_LIMIT: usize = 512;

/// Scoring gateway that POSTs JSON to the scoring service.
#[derive(Debug, Clone)]
pub struct HttpScoringGateway {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpScoringGateway {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let endpoint = endpoint.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport {
                url: endpoint.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { endpoint, http })
    }

    pub fn from_config(cfg: &GatewaySection) -> Result<Self, GatewayError> {
        Self::new(cfg.endpoint.trim(), Duration::from_millis(cfg.timeout_ms))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: &ScoringRequest) -> Result<Vec<ScoredTask>, GatewayError> {
        debug!(
            target: "taskrank.gateway",
            url = %self.endpoint,
            tasks = request.tasks.len(),
            strategy = %request.strategy,
            "scoring request"
        );

        let transport = |e: reqwest::Error| GatewayError::Transport {
            url: self.endpoint.clone(),
            message: e.to_string(),
        };

        let resp = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;

        debug!(target: "taskrank.gateway", status = %status, bytes = body.len(), "scoring response");

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: preview_body(&body),
            });
        }

        let parsed: ScoringResponse =
            serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))?;
        Ok(parsed.tasks)
    }
}

impl ScoringGateway for HttpScoringGateway {
    fn score<'a>(
        &'a self,
        request: &'a ScoringRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ScoredTask>, GatewayError>> + Send + 'a>> {
        Box::pin(self.post(request))
    }
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }
    if trimmed.len() <= BODY_PREVIEW_LIMIT {
        return trimmed.to_string();
    }
    let mut end = BODY_PREVIEW_LIMIT;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}
