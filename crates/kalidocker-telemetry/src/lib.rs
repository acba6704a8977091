#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Telemetry primitives shared across the KaliDocker workspace.
//!
//! Layout: `init.rs` (subscriber install), `context.rs` (span/request context),
//! `layers.rs` (request-id middleware), `metrics.rs` (Prometheus registry),
//! `error.rs` (error type).

pub mod context;
pub mod error;
pub mod init;
pub mod layers;
pub mod metrics;

pub use context::{
    GlobalContextGuard, current_request_id, record_route, with_request_context,
};
pub use error::{CollectorStage, Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
pub use layers::{RequestIdLayer, request_id_layer};
pub use metrics::{Metrics, MetricsSnapshot};
