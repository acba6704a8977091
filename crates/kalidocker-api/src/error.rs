//! Errors raised while assembling or running the API server.
//!
//! Messages are constant; the path or address involved travels in a field.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Result alias for API server operations.
pub type ApiServerResult<T> = Result<T, ApiServerError>;

/// Errors raised while assembling or running the API server.
#[derive(Debug)]
pub enum ApiServerError {
    /// The configured dashboard directory has no `index.html`.
    UiBundleMissing {
        /// Index document that was expected.
        index: PathBuf,
    },
    /// The listener could not bind.
    Bind {
        /// Address attempted.
        addr: SocketAddr,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The accept loop stopped with an error.
    Serve {
        /// Underlying IO error.
        source: io::Error,
    },
}

impl Display for ApiServerError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::UiBundleMissing { .. } => "dashboard directory has no index document",
            Self::Bind { .. } => "failed to bind api listener",
            Self::Serve { .. } => "api server terminated unexpectedly",
        })
    }
}

impl Error for ApiServerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UiBundleMissing { .. } => None,
            Self::Bind { source, .. } | Self::Serve { source } => Some(source),
        }
    }
}
