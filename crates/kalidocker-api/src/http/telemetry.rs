//! Per-request bookkeeping: route labelling, request-id scope, and the
//! `http_requests_total` counter.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use kalidocker_telemetry::{Metrics, record_route, with_request_context};
use tracing::Span;

use crate::http::constants::HEADER_REQUEST_ID;

/// Count the request under its route template and expose its id to handlers.
///
/// Runs inside the trace layer, so `Span::current()` is the request span.
pub(crate) async fn track_request(
    State(metrics): State<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let route = request.extensions().get::<MatchedPath>().map_or_else(
        || request.uri().path().to_owned(),
        |matched| matched.as_str().to_owned(),
    );
    let request_id = request
        .headers()
        .get(HEADER_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    record_route(&Span::current(), &route);

    let response = with_request_context(request_id, next.run(request)).await;
    metrics.inc_http_request(&route, response.status().as_u16());
    response
}
