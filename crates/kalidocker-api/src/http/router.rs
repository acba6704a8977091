//! Router construction and server host for the API.

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, Method, Request, header::CONTENT_TYPE},
    middleware,
    routing::get,
};
use kalidocker_telemetry::{Metrics, build_sha};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{Span, info};

use crate::error::{ApiServerError, ApiServerResult};
use crate::http::constants::{API_PREFIX, HEADER_REQUEST_ID, UI_INDEX};
use crate::http::errors::route_not_found;
use crate::http::health::{health, metrics};
use crate::http::telemetry::track_request;
use crate::http::tools::list_tools;
use crate::probe::DependencyProbe;
use crate::state::ApiState;

/// Axum router wrapper that hosts the KaliDocker API and dashboard bundle.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Construct the server. When `ui_dir` is set, paths outside `/api` are
    /// served from it with `index.html` as the fallback document.
    ///
    /// # Errors
    ///
    /// Returns `UiBundleMissing` when `ui_dir` has no `index.html`.
    pub fn new(
        probe: Arc<dyn DependencyProbe>,
        telemetry: Metrics,
        ui_dir: Option<PathBuf>,
    ) -> ApiServerResult<Self> {
        if let Some(dir) = &ui_dir {
            let index = dir.join(UI_INDEX);
            if !index.is_file() {
                return Err(ApiServerError::UiBundleMissing { index });
            }
        }
        let state = Arc::new(ApiState::new(probe, telemetry.clone()));
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE, HeaderName::from_static(HEADER_REQUEST_ID)]);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let method = request.method().clone();
                let uri_path = request.uri().path();
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();

                tracing::info_span!(
                    "http.request",
                    method = %method,
                    route = %uri_path,
                    request_id = %request_id,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    let status = response.status().as_u16();
                    span.record("status_code", status);
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let layered = ServiceBuilder::new()
            .layer(kalidocker_telemetry::request_id_layer())
            .layer(trace_layer)
            .layer(middleware::from_fn_with_state(telemetry, track_request));

        let api = Self::api_routes().route_layer(layered).with_state(state);
        let router = Router::new().nest(API_PREFIX, api);
        let router = Self::mount_ui(router, ui_dir.as_deref()).layer(cors_layer);

        Ok(Self { router })
    }

    fn api_routes() -> Router<Arc<ApiState>> {
        Router::new()
            .route("/health", get(health))
            .route("/tools", get(list_tools))
            .route("/metrics", get(metrics))
            .fallback(route_not_found)
    }

    fn mount_ui(router: Router, ui_dir: Option<&Path>) -> Router {
        match ui_dir {
            Some(dir) => {
                let index = ServeFile::new(dir.join(UI_INDEX));
                router.fallback_service(ServeDir::new(dir).fallback(index))
            }
            None => router.fallback(route_not_found),
        }
    }

    /// Bind `addr` and serve until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or the server loop fails.
    pub async fn serve<F>(self, addr: SocketAddr, shutdown: F) -> ApiServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        info!(addr = %addr, "api listener bound");
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|source| ApiServerError::Serve { source })
    }

    #[cfg(test)]
    pub(crate) const fn router(&self) -> &Router {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Response, StatusCode};
    use kalidocker_api_models::{HealthResponse, ProblemDetails, ToolSummary};
    use std::error::Error;
    use tower::ServiceExt;

    type TestResult = Result<(), Box<dyn Error>>;

    struct FixedProbe {
        docker: bool,
    }

    #[async_trait]
    impl DependencyProbe for FixedProbe {
        async fn docker_available(&self) -> bool {
            self.docker
        }

        async fn database_available(&self) -> bool {
            true
        }
    }

    fn server(docker: bool, ui_dir: Option<PathBuf>) -> Result<(ApiServer, Metrics), Box<dyn Error>> {
        let metrics = Metrics::new()?;
        let server = ApiServer::new(Arc::new(FixedProbe { docker }), metrics.clone(), ui_dir)?;
        Ok((server, metrics))
    }

    async fn get(server: &ApiServer, uri: &str) -> Result<Response<Body>, Box<dyn Error>> {
        let request = Request::builder().uri(uri).body(Body::empty())?;
        Ok(server.router().clone().oneshot(request).await?)
    }

    fn request_id(response: &Response<Body>) -> Option<String> {
        response
            .headers()
            .get(HEADER_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    async fn body_bytes(response: Response<Body>) -> Result<Vec<u8>, Box<dyn Error>> {
        Ok(to_bytes(response.into_body(), usize::MAX).await?.to_vec())
    }

    #[tokio::test]
    async fn health_reports_ok_when_docker_is_reachable() -> TestResult {
        let (server, metrics) = server(true, None)?;
        let response = get(&server, "/api/health").await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(request_id(&response).is_some_and(|id| !id.is_empty()));

        let body: HealthResponse = serde_json::from_slice(&body_bytes(response).await?)?;
        assert_eq!(body, HealthResponse::from_dependencies(true, true));
        assert_eq!(metrics.snapshot().health_ok_total, 1);
        Ok(())
    }

    #[tokio::test]
    async fn health_reports_degraded_without_docker() -> TestResult {
        let (server, metrics) = server(false, None)?;
        let response = get(&server, "/api/health").await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body: HealthResponse = serde_json::from_slice(&body_bytes(response).await?)?;
        assert_eq!(body.status, "degraded");
        assert!(!body.docker);
        assert!(body.database);
        assert_eq!(metrics.snapshot().health_degraded_total, 1);
        Ok(())
    }

    #[tokio::test]
    async fn incoming_request_id_is_echoed() -> TestResult {
        let (server, _) = server(true, None)?;
        let request = Request::builder()
            .uri("/api/tools")
            .header(HEADER_REQUEST_ID, "req-7")
            .body(Body::empty())?;
        let response = server.router().clone().oneshot(request).await?;
        assert_eq!(request_id(&response).as_deref(), Some("req-7"));
        Ok(())
    }

    #[tokio::test]
    async fn generated_request_ids_differ_per_request() -> TestResult {
        let (server, _) = server(true, None)?;
        let first = request_id(&get(&server, "/api/health").await?);
        let second = request_id(&get(&server, "/api/health").await?);
        assert!(first.is_some());
        assert!(second.is_some());
        assert_ne!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn tools_lists_catalog_in_order() -> TestResult {
        let (server, _) = server(true, None)?;
        let response = get(&server, "/api/tools").await?;
        assert_eq!(response.status(), StatusCode::OK);

        let tools: Vec<ToolSummary> = serde_json::from_slice(&body_bytes(response).await?)?;
        let names: Vec<_> = tools.iter().map(|tool| tool.name.as_str()).collect();
        assert_eq!(
            names,
            ["Nmap", "Nuclei", "SQLMap", "Nikto", "Dirb", "Metasploit"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn metrics_renders_prometheus_text() -> TestResult {
        let (server, _) = server(true, None)?;
        get(&server, "/api/health").await?;

        let response = get(&server, "/api/metrics").await?;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));

        let text = String::from_utf8(body_bytes(response).await?)?;
        assert!(text.contains("health_checks_total"));
        let health_line = text
            .lines()
            .find(|line| line.starts_with("http_requests_total") && line.contains("/api/health"))
            .unwrap_or_default();
        assert!(health_line.contains(r#"code="200""#));
        assert!(health_line.ends_with(" 1"));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_api_route_returns_problem() -> TestResult {
        let (server, _) = server(true, None)?;
        let response = get(&server, "/api/scan").await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let problem: ProblemDetails = serde_json::from_slice(&body_bytes(response).await?)?;
        assert_eq!(problem.status, 404);
        assert_eq!(problem.kind, "https://kalidocker.dev/problems/not-found");
        Ok(())
    }

    #[tokio::test]
    async fn dashboard_paths_404_without_ui_dir() -> TestResult {
        let (server, _) = server(true, None)?;
        let response = get(&server, "/").await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[test]
    fn ui_dir_without_index_is_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;
        match server(true, Some(dir.path().to_path_buf())) {
            Err(err) => assert_eq!(err.to_string(), "dashboard directory has no index document"),
            Ok(_) => panic!("expected missing index to be rejected"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn dashboard_paths_fall_back_to_index() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(UI_INDEX), "<html>dashboard</html>")?;
        let (server, _) = server(true, Some(dir.path().to_path_buf()))?;

        let response = get(&server, "/").await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body = String::from_utf8(body_bytes(response).await?)?;
        assert!(body.contains("dashboard"));

        let response = get(&server, "/scans/42").await?;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get(&server, "/api/health").await?;
        let body: HealthResponse = serde_json::from_slice(&body_bytes(response).await?)?;
        assert!(body.is_ok());
        Ok(())
    }
}
