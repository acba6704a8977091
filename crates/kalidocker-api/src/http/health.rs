//! Health and metrics endpoints.

use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use kalidocker_api_models::HealthResponse;
use kalidocker_telemetry::current_request_id;
use tracing::{error, info, warn};

use crate::http::constants::METRICS_CONTENT_TYPE;
use crate::http::errors::ApiError;
use crate::state::ApiState;

pub(crate) async fn health(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    let docker = state.probe.docker_available().await;
    let database = state.probe.database_available().await;
    let response = HealthResponse::from_dependencies(docker, database);
    state.telemetry.inc_health_check(&response.status);

    let request_id = current_request_id().unwrap_or_default();
    if response.is_ok() {
        info!(%request_id, docker, database, "health check ok");
    } else {
        warn!(%request_id, docker, database, "health check degraded");
    }
    Json(response)
}

pub(crate) async fn metrics(State(state): State<Arc<ApiState>>) -> Result<Response, ApiError> {
    match state.telemetry.render() {
        Ok(body) => Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, METRICS_CONTENT_TYPE)
            .body(Body::from(body))
            .map_err(|err| {
                error!(error = %err, "failed to build metrics response");
                ApiError::internal("failed to build metrics response")
            }),
        Err(err) => {
            error!(error = %err, "failed to render metrics");
            Err(ApiError::internal("failed to render metrics"))
        }
    }
}
