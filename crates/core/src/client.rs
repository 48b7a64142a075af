//! HTTP client for the search backend: `GET /health` and `POST /search`.
//!
//! No timeouts or retries are layered on top of the transport.

use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::format::format_response;
use crate::state::{Action, Effect};
use crate::types::{BackendStatus, ErrorBody, SearchRequest, SearchResponse};

pub const MSG_NOT_RESPONDING: &str = "Backend not responding";
pub const MSG_CANNOT_CONNECT: &str = "Cannot connect to backend";

#[derive(Clone)]
pub struct BackendClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Probe `/health`. Never fails: every failure maps to an error status.
    pub async fn health(&self) -> BackendStatus {
        let url = self.config.health_url();
        debug!(url = url.as_str(), "Checking backend health");
        let resp = match self.http.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "Backend health check failed");
                return BackendStatus::error(MSG_CANNOT_CONNECT);
            }
        };
        if !resp.status().is_success() {
            warn!(status = resp.status().as_u16(), "Backend health check returned an error status");
            return BackendStatus::error(MSG_NOT_RESPONDING);
        }
        match resp.json::<BackendStatus>().await {
            Ok(status) => {
                info!(?status, "Backend health");
                status
            }
            Err(e) => {
                warn!(error = %e, "Backend health response was not valid");
                BackendStatus::error(MSG_CANNOT_CONNECT)
            }
        }
    }

    /// Run one search. Non-2xx responses surface the body's `error` field.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        let url = self.config.search_url();
        debug!(url = url.as_str(), question = request.question.as_str(), "Sending search");
        let resp = self.http.post(&url).json(request).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            return Err(ClientError::status(status.as_u16(), message));
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Perform an effect and return the action that reports its outcome.
    pub async fn run(&self, effect: Effect) -> Action {
        match effect {
            Effect::CheckHealth => Action::HealthChecked(self.health().await),
            Effect::Search(request) => match self.search(&request).await {
                Ok(response) => Action::SearchSucceeded(format_response(&request.question, response)),
                Err(e) => {
                    warn!(error = %e, "Search failed");
                    Action::SearchFailed(e.to_string())
                }
            },
        }
    }
}
