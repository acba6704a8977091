//! Error types for telemetry operations.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use prometheus::Error as PrometheusError;

/// Result alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Step at which a Prometheus collector failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorStage {
    /// Building the collector from its options.
    Build,
    /// Registering the collector with the registry.
    Register,
}

/// Errors raised by telemetry helpers.
#[derive(Debug)]
pub enum TelemetryError {
    /// A global tracing subscriber was already installed.
    SubscriberInstall {
        /// Underlying tracing subscriber error.
        source: tracing_subscriber::util::TryInitError,
    },
    /// A counter could not be set up.
    Collector {
        /// Metric name.
        name: &'static str,
        /// Failing step.
        stage: CollectorStage,
        /// Underlying Prometheus error.
        source: PrometheusError,
    },
    /// The `/api/metrics` exposition could not be rendered.
    Render {
        /// Underlying Prometheus error.
        source: PrometheusError,
    },
}

impl Display for TelemetryError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubscriberInstall { .. } => {
                formatter.write_str("failed to install tracing subscriber")
            }
            Self::Collector {
                stage: CollectorStage::Build,
                ..
            } => formatter.write_str("failed to build metrics collector"),
            Self::Collector {
                stage: CollectorStage::Register,
                ..
            } => formatter.write_str("failed to register metrics collector"),
            Self::Render { .. } => formatter.write_str("failed to render metrics"),
        }
    }
}

impl Error for TelemetryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SubscriberInstall { source } => Some(source),
            Self::Collector { source, .. } | Self::Render { source } => Some(source),
        }
    }
}
