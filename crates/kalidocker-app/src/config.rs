//! Environment-driven application configuration.
//!
//! # Design
//! - Read every setting through one lookup function so tests never touch the process env.
//! - Reject malformed values at startup with a structured `InvalidConfig` error.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use kalidocker_api::DockerEndpoint;
use kalidocker_telemetry::LogFormat;

use crate::error::{AppError, AppResult};

/// Listener IP variable.
pub const ENV_BIND_ADDR: &str = "KALIDOCKER_BIND_ADDR";
/// Listener port variable.
pub const ENV_HTTP_PORT: &str = "KALIDOCKER_HTTP_PORT";
/// Built dashboard directory variable.
pub const ENV_UI_DIR: &str = "KALIDOCKER_UI_DIR";
/// Log output format variable.
pub const ENV_LOG_FORMAT: &str = "KALIDOCKER_LOG_FORMAT";
/// Docker endpoint variable, shared with the Docker CLI.
pub const ENV_DOCKER_HOST: &str = "DOCKER_HOST";

const DEFAULT_HTTP_PORT: u16 = 8000;

/// Settings needed to boot the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// IP address the listener binds to.
    pub bind_addr: IpAddr,
    /// TCP port the listener binds to.
    pub http_port: u16,
    /// Directory holding the built dashboard, if any.
    pub ui_dir: Option<PathBuf>,
    /// Tracing output format.
    pub log_format: LogFormat,
    /// Docker endpoint probed by `/api/health`.
    pub docker: DockerEndpoint,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            http_port: DEFAULT_HTTP_PORT,
            ui_dir: None,
            log_format: LogFormat::infer(),
            docker: DockerEndpoint::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidConfig` when a variable holds a malformed value.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidConfig` when a variable holds a malformed value.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|raw| !raw.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = match value(ENV_BIND_ADDR) {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| AppError::InvalidConfig {
                    field: "bind_addr",
                    reason: "invalid_ip",
                    value: Some(raw.clone()),
                })?,
            None => defaults.bind_addr,
        };

        let http_port = match value(ENV_HTTP_PORT) {
            Some(raw) => parse_port(&raw)?,
            None => defaults.http_port,
        };

        let log_format = match value(ENV_LOG_FORMAT) {
            Some(raw) => LogFormat::parse(&raw).ok_or_else(|| AppError::InvalidConfig {
                field: "log_format",
                reason: "unknown_format",
                value: Some(raw.clone()),
            })?,
            None => defaults.log_format,
        };

        Ok(Self {
            bind_addr,
            http_port,
            ui_dir: value(ENV_UI_DIR).map(|raw| PathBuf::from(raw.trim())),
            log_format,
            docker: DockerEndpoint::from_docker_host(value(ENV_DOCKER_HOST).as_deref()),
        })
    }

    /// Address the listener binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }
}

fn parse_port(raw: &str) -> AppResult<u16> {
    let port = raw
        .trim()
        .parse::<u16>()
        .map_err(|_| AppError::InvalidConfig {
            field: "http_port",
            reason: "out_of_range",
            value: Some(raw.to_string()),
        })?;
    if port == 0 {
        return Err(AppError::InvalidConfig {
            field: "http_port",
            reason: "zero",
            value: Some(raw.to_string()),
        });
    }
    Ok(port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_env_is_empty() -> AppResult<()> {
        let config = AppConfig::from_lookup(lookup(&[]))?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
        Ok(())
    }

    #[test]
    fn values_are_parsed_from_env() -> AppResult<()> {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "127.0.0.1"),
            (ENV_HTTP_PORT, " 7070 "),
            (ENV_UI_DIR, "/srv/kalidocker/dist"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_DOCKER_HOST, "tcp://docker:2375"),
        ]))?;
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:7070");
        assert_eq!(config.ui_dir, Some(PathBuf::from("/srv/kalidocker/dist")));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.docker,
            DockerEndpoint::Remote("tcp://docker:2375".into())
        );
        Ok(())
    }

    #[test]
    fn blank_values_fall_back_to_defaults() -> AppResult<()> {
        let config = AppConfig::from_lookup(lookup(&[(ENV_UI_DIR, "  "), (ENV_HTTP_PORT, "")]))?;
        assert_eq!(config.ui_dir, None);
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
        Ok(())
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cases = [
            (ENV_HTTP_PORT, "0", "http_port", "zero"),
            (ENV_HTTP_PORT, "70000", "http_port", "out_of_range"),
            (ENV_HTTP_PORT, "eighty", "http_port", "out_of_range"),
            (ENV_BIND_ADDR, "localhost", "bind_addr", "invalid_ip"),
            (ENV_LOG_FORMAT, "yaml", "log_format", "unknown_format"),
        ];
        for (name, raw, expected_field, expected_reason) in cases {
            match AppConfig::from_lookup(lookup(&[(name, raw)])) {
                Err(AppError::InvalidConfig { field, reason, .. }) => {
                    assert_eq!(field, expected_field);
                    assert_eq!(reason, expected_reason);
                }
                other => panic!("expected invalid config for {name}={raw}, got {other:?}"),
            }
        }
    }
}
