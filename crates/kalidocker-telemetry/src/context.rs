//! Span and request context helpers.
//!
//! # Design
//! - The request id lives in task-local storage so handlers can log it without
//!   threading it through extractors.
//! - The application span carries the build SHA for every event emitted at startup.

use std::future::Future;
use std::sync::Arc;

use tracing::{Span, span::Entered};

use crate::init::build_sha;

/// Guard that keeps the application-level span entered for the lifetime of the process.
pub struct GlobalContextGuard {
    _guard: Entered<'static>,
}

impl GlobalContextGuard {
    /// Enter an `app` span tagged with `phase` and the build SHA.
    #[must_use]
    pub fn new(phase: &'static str) -> Self {
        let span: &'static Span = Box::leak(Box::new(tracing::info_span!(
            "app",
            phase,
            build_sha = %build_sha()
        )));
        Self {
            _guard: span.enter(),
        }
    }
}

/// Replace the raw path on a request span with the matched route template.
pub fn record_route(span: &Span, route: &str) {
    span.record("route", route);
}

/// Request id of the request being handled on this task, if any.
#[must_use]
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|id| id.to_string()).ok()
}

/// Run `fut` with `request_id` visible to [`current_request_id`].
pub async fn with_request_context<Fut, T>(request_id: impl Into<String>, fut: Fut) -> T
where
    Fut: Future<Output = T>,
{
    REQUEST_ID.scope(Arc::from(request_id.into()), fut).await
}

tokio::task_local! {
    static REQUEST_ID: Arc<str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_context_guard_can_be_dropped() {
        let guard = GlobalContextGuard::new("bootstrap");
        drop(guard);
    }

    #[test]
    fn record_route_accepts_declared_field() {
        let span = tracing::info_span!("http.request", route = "/api/unmatched");
        record_route(&span, "/api/health");
    }

    #[tokio::test]
    async fn request_id_is_scoped_to_the_future() {
        let output = with_request_context("req-42", async {
            assert_eq!(current_request_id().as_deref(), Some("req-42"));
            "done"
        })
        .await;
        assert_eq!(output, "done");
        assert!(current_request_id().is_none());
    }
}
