//! Prometheus-backed metrics registry and snapshot helpers.
//!
//! # Design
//! - Encapsulates collector registration to keep the public API small.
//! - Exposes only the counters the API surface records.

use std::sync::Arc;

use prometheus::{IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::{CollectorStage, Result, TelemetryError};

/// Prometheus-backed metrics registry shared across services.
#[derive(Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    registry: Registry,
    http_requests_total: IntCounterVec,
    health_checks_total: IntCounterVec,
}

/// Snapshot of the health-check counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Health checks answered with `ok`.
    pub health_ok_total: u64,
    /// Health checks answered with `degraded`.
    pub health_degraded_total: u64,
}

impl Metrics {
    /// Construct a new metrics registry with the standard collectors registered.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the Prometheus collectors cannot be built or
    /// registered.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let http_requests_total = register_counter(
            &registry,
            "http_requests_total",
            "HTTP requests served, by matched route and status code",
            &["route", "code"],
        )?;
        let health_checks_total = register_counter(
            &registry,
            "health_checks_total",
            "Health checks answered, by reported status",
            &["status"],
        )?;

        Ok(Self {
            inner: Arc::new(MetricsInner {
                registry,
                http_requests_total,
                health_checks_total,
            }),
        })
    }

    /// Increment the HTTP request counter for the given route and status code.
    pub fn inc_http_request(&self, route: &str, status: u16) {
        self.inner
            .http_requests_total
            .with_label_values(&[route, &status.to_string()])
            .inc();
    }

    /// Increment the health-check counter for the reported status.
    pub fn inc_health_check(&self, status: &str) {
        self.inner
            .health_checks_total
            .with_label_values(&[status])
            .inc();
    }

    /// Render the registry in the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if the metric families cannot be encoded.
    pub fn render(&self) -> Result<String> {
        TextEncoder::new()
            .encode_to_string(&self.inner.registry.gather())
            .map_err(|source| TelemetryError::Render { source })
    }

    /// Take a point-in-time snapshot of the health-check counters.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        let counter = &self.inner.health_checks_total;
        MetricsSnapshot {
            health_ok_total: counter.with_label_values(&["ok"]).get(),
            health_degraded_total: counter.with_label_values(&["degraded"]).get(),
        }
    }
}

fn register_counter(
    registry: &Registry,
    name: &'static str,
    help: &str,
    labels: &[&str],
) -> Result<IntCounterVec> {
    let counter = IntCounterVec::new(Opts::new(name, help), labels).map_err(|source| {
        TelemetryError::Collector {
            name,
            stage: CollectorStage::Build,
            source,
        }
    })?;
    registry
        .register(Box::new(counter.clone()))
        .map_err(|source| TelemetryError::Collector {
            name,
            stage: CollectorStage::Register,
            source,
        })?;
    Ok(counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_snapshot_reflects_updates() -> Result<()> {
        let metrics = Metrics::new()?;
        metrics.inc_http_request("/api/health", 200);
        metrics.inc_health_check("ok");
        metrics.inc_health_check("ok");
        metrics.inc_health_check("degraded");

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.health_ok_total, 2);
        assert_eq!(snapshot.health_degraded_total, 1);

        let rendered = metrics.render()?;
        assert!(rendered.contains("http_requests_total"));
        assert!(rendered.contains("health_checks_total"));
        Ok(())
    }

    #[test]
    fn duplicate_registration_reports_register_stage() -> Result<()> {
        let registry = Registry::new();
        register_counter(&registry, "health_checks_total", "first", &["status"])?;
        match register_counter(&registry, "health_checks_total", "second", &["status"]) {
            Err(TelemetryError::Collector { name, stage, .. }) => {
                assert_eq!(name, "health_checks_total");
                assert_eq!(stage, CollectorStage::Register);
            }
            other => panic!("expected register failure, got {:?}", other.map(|_| ())),
        }
        Ok(())
    }

    #[test]
    fn registries_are_independent() -> Result<()> {
        let first = Metrics::new()?;
        let second = Metrics::new()?;
        first.inc_health_check("ok");
        assert_eq!(second.snapshot().health_ok_total, 0);
        Ok(())
    }
}
