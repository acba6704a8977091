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
//! HTTP surface for KaliDocker: health, tool catalog, metrics, and the static
//! dashboard bundle.
//!
//! Layout: `http/` (router, handlers, problem errors, metrics middleware),
//! `probe.rs` (dependency availability), `state.rs` (shared handler state),
//! `error.rs` (bootstrap/serve errors).

/// Bootstrap and serve errors.
pub mod error;
/// HTTP surface modules (router, handlers, middleware).
pub mod http;
/// Dependency availability probes feeding the health endpoint.
pub mod probe;
pub(crate) mod state;

pub use error::{ApiServerError, ApiServerResult};
pub use http::router::ApiServer;
pub use probe::{DependencyProbe, DockerEndpoint, EnvDependencyProbe};
