//! Derived dashboard figures.

use kalidocker_api_models::TOOL_CATALOG;

use crate::core::store::AppStore;

/// Numbers shown in the stats row. Recomputed from the store on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    /// Scans started this session.
    pub total_scans: u32,
    /// Entries in the tool catalog.
    pub tool_count: usize,
    /// Services currently running.
    pub running_services: usize,
    /// Services tracked.
    pub total_services: usize,
}

impl DashboardStats {
    /// Derive the stats row from the current store.
    #[must_use]
    pub fn from_store(store: &AppStore) -> Self {
        Self {
            total_scans: store.scan_count,
            tool_count: TOOL_CATALOG.len(),
            running_services: store.services.running_count(),
            total_services: store.services.len(),
        }
    }

    /// `running/total` label for the services card.
    #[must_use]
    pub fn services_label(&self) -> String {
        format!("{}/{}", self.running_services, self.total_services)
    }

    /// Label and value for each stat card, in display order.
    #[must_use]
    pub fn cards(&self) -> [(&'static str, String); 3] {
        [
            ("Total Scans", self.total_scans.to_string()),
            ("Active Tools", self.tool_count.to_string()),
            ("Services", self.services_label()),
        ]
    }
}

/// Footer copyright line for `year`.
#[must_use]
pub fn copyright_line(year: u32) -> String {
    format!("KaliDocker © {year} | Built with Yew + Docker")
}
