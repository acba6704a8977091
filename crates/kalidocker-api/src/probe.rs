//! Dependency availability probes.
//!
//! # Design
//! - Handlers only see the `DependencyProbe` trait so tests can swap in fixed answers.
//! - Probes never fail; an unreachable dependency is reported as `false`.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

/// Default Docker daemon socket when `DOCKER_HOST` is unset.
pub const DEFAULT_DOCKER_SOCKET: &str = "/var/run/docker.sock";

const UNIX_SCHEME: &str = "unix://";

/// Answers whether the backing dependencies are reachable.
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// Whether the Docker endpoint is reachable.
    async fn docker_available(&self) -> bool;
    /// Whether the database is reachable.
    async fn database_available(&self) -> bool;
}

/// Where the Docker daemon is expected to listen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerEndpoint {
    /// Local unix socket.
    Socket(PathBuf),
    /// Remote endpoint (`tcp://`, `ssh://`, ...). Treated as configured.
    Remote(String),
}

impl DockerEndpoint {
    /// Resolve the endpoint from a `DOCKER_HOST` value.
    #[must_use]
    pub fn from_docker_host(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|host| !host.is_empty()) {
            None => Self::Socket(PathBuf::from(DEFAULT_DOCKER_SOCKET)),
            Some(host) => host.strip_prefix(UNIX_SCHEME).map_or_else(
                || Self::Remote(host.to_string()),
                |path| Self::Socket(PathBuf::from(path)),
            ),
        }
    }
}

impl Default for DockerEndpoint {
    fn default() -> Self {
        Self::from_docker_host(None)
    }
}

/// Probe backed by the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvDependencyProbe {
    docker: DockerEndpoint,
}

impl EnvDependencyProbe {
    /// Create a probe for the given Docker endpoint.
    #[must_use]
    pub const fn new(docker: DockerEndpoint) -> Self {
        Self { docker }
    }

    /// Endpoint the probe checks.
    #[must_use]
    pub const fn docker_endpoint(&self) -> &DockerEndpoint {
        &self.docker
    }
}

#[async_trait]
impl DependencyProbe for EnvDependencyProbe {
    async fn docker_available(&self) -> bool {
        match &self.docker {
            DockerEndpoint::Socket(path) => {
                let exists = tokio::fs::try_exists(path).await.unwrap_or(false);
                debug!(socket = %path.display(), exists, "probed docker socket");
                exists
            }
            DockerEndpoint::Remote(_) => true,
        }
    }

    // No database probe exists yet; the dependency is reported as reachable.
    async fn database_available(&self) -> bool {
        true
    }
}
