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

//! KaliDocker application bootstrap wiring.
//!
//! Layout: `config.rs` (environment settings), `bootstrap.rs` (service wiring),
//! `error.rs` (application error type).

/// Application bootstrap.
pub mod bootstrap;
/// Environment-driven configuration.
pub mod config;
/// Application error type.
pub mod error;

pub use bootstrap::run_app;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
