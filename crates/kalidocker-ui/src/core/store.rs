//! App-wide yewdux store.
//!
//! # Design
//! - One store holds the service list, the scan counter and the health-check phase.
//! - Reducers are plain methods so they can be tested without a renderer.

use yewdux::store::Store;

use crate::core::health::{HealthCheckError, HealthCheckPhase, HealthStatus, confirm_health};
use crate::core::services::{SERVICE_API, ServiceList};

/// Global dashboard state, recreated on every page load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Service badges.
    pub services: ServiceList,
    /// Number of scans started. Nothing increments it.
    pub scan_count: u32,
    /// One-shot health-check guard.
    pub health: HealthCheckPhase,
}

impl AppStore {
    /// Claim the single health-check slot.
    ///
    /// Returns `false` when a check was already started in this store's lifetime.
    pub const fn begin_health_check(&mut self) -> bool {
        if !self.health.is_idle() {
            return false;
        }
        self.health = HealthCheckPhase::InFlight;
        true
    }

    /// Fold a health-check outcome into the service list.
    ///
    /// Only applied while a check is in flight; failures are discarded and
    /// leave every entry as it was. Returns whether the list changed.
    pub fn apply_health_outcome(
        &mut self,
        outcome: Result<HealthStatus, HealthCheckError>,
    ) -> bool {
        if self.health != HealthCheckPhase::InFlight {
            return false;
        }
        self.health = HealthCheckPhase::Settled;
        match outcome.and_then(|payload| confirm_health(&payload)) {
            Ok(()) => self.services.mark_running(SERVICE_API),
            Err(_) => false,
        }
    }
}
