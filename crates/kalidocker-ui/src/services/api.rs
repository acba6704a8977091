//! HTTP client helpers (REST).

use crate::core::health::{HEALTH_PATH, HealthCheckError, HealthStatus, decode_health};
use gloo_net::http::Request;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Issue `GET /api/health` and classify the result.
    pub(crate) async fn fetch_health(&self) -> Result<HealthStatus, HealthCheckError> {
        let response = Request::get(&format!("{}{}", self.base_url, HEALTH_PATH))
            .send()
            .await
            .map_err(|err| HealthCheckError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| HealthCheckError::Transport(err.to_string()))?;
        decode_health(status, &body)
    }
}
