//! Shared HTTP constants (headers, problem URIs).

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";
pub(crate) const API_PREFIX: &str = "/api";
pub(crate) const UI_INDEX: &str = "index.html";
pub(crate) const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

pub(crate) const PROBLEM_INTERNAL: &str = "https://kalidocker.dev/problems/internal";
pub(crate) const PROBLEM_NOT_FOUND: &str = "https://kalidocker.dev/problems/not-found";
