//! Health-check interpretation and the one-shot guard.
//!
//! # Design
//! - Decoding lives here, away from the fetch transport, so every failure
//!   class can be exercised without a browser.
//! - Every failure is classified before being discarded.
//! - Only `status` is read from the body; any other field is skipped whatever its type.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use kalidocker_api_models::HEALTH_STATUS_OK;
use serde::Deserialize;

/// Path of the health endpoint, relative to the API origin.
pub const HEALTH_PATH: &str = "/api/health";

/// The part of a `/api/health` body the dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    /// Reported status, `"ok"` when the API is healthy.
    pub status: String,
}

impl HealthStatus {
    /// True when the payload reports the literal `"ok"` status.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == HEALTH_STATUS_OK
    }
}

/// Reasons a health check did not confirm the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthCheckError {
    /// The request never produced a response.
    Transport(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The body was not a health payload.
    Decode(String),
    /// The payload decoded but did not report `"ok"`.
    NotOk(String),
}

impl Display for HealthCheckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(_) => f.write_str("health request failed"),
            Self::Status(code) => write!(f, "health request returned status {code}"),
            Self::Decode(_) => f.write_str("health payload could not be decoded"),
            Self::NotOk(status) => write!(f, "health status was {status}"),
        }
    }
}

impl Error for HealthCheckError {}

/// Turn a raw HTTP response into a health payload.
///
/// # Errors
///
/// Returns `Status` for non-2xx codes and `Decode` for bodies without a
/// string `status` field.
pub fn decode_health(status: u16, body: &str) -> Result<HealthStatus, HealthCheckError> {
    if !(200..300).contains(&status) {
        return Err(HealthCheckError::Status(status));
    }
    serde_json::from_str(body).map_err(|err| HealthCheckError::Decode(err.to_string()))
}

/// Accept only payloads whose status is exactly `"ok"`.
///
/// # Errors
///
/// Returns `NotOk` carrying the reported status otherwise.
pub fn confirm_health(payload: &HealthStatus) -> Result<(), HealthCheckError> {
    if payload.is_ok() {
        Ok(())
    } else {
        Err(HealthCheckError::NotOk(payload.status.clone()))
    }
}

/// Lifecycle of the single health check allowed per store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthCheckPhase {
    /// Not started.
    #[default]
    Idle,
    /// Request issued, outcome pending.
    InFlight,
    /// Outcome applied or discarded. Terminal.
    Settled,
}

impl HealthCheckPhase {
    /// Whether a check may still be started.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}
