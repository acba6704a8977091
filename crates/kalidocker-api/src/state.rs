//! Shared state handed to every handler.

use std::sync::Arc;

use kalidocker_telemetry::Metrics;

use crate::probe::DependencyProbe;

pub(crate) struct ApiState {
    pub(crate) probe: Arc<dyn DependencyProbe>,
    pub(crate) telemetry: Metrics,
}

impl ApiState {
    pub(crate) const fn new(probe: Arc<dyn DependencyProbe>, telemetry: Metrics) -> Self {
        Self { probe, telemetry }
    }
}
