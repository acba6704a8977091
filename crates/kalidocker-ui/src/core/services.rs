//! Service status entries shown as header badges.
//!
//! # Design
//! - Statuses form an explicit state machine; `transition` rejects every edge
//!   except `Unknown -> Running`.
//! - The service list is fixed at construction; names are never added or removed.

/// Database service entry name.
pub const SERVICE_POSTGRES: &str = "PostgreSQL";
/// API service entry name; the only entry the health check can advance.
pub const SERVICE_API: &str = "API";
/// Kali container service entry name.
pub const SERVICE_KALI: &str = "Kali";

/// Status of one service entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceState {
    /// Confirmed reachable.
    Running,
    /// Confirmed unreachable. No current path produces it.
    Stopped,
    /// Not yet confirmed.
    Unknown,
}

impl ServiceState {
    /// Lower-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Unknown => "unknown",
        }
    }

    /// Whether moving from `self` to `next` is a legal transition.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!((self, next), (Self::Unknown, Self::Running))
    }

    /// Attempt a transition, returning the resulting state.
    #[must_use]
    pub const fn transition(self, next: Self) -> Option<Self> {
        if self.can_transition_to(next) {
            Some(next)
        } else {
            None
        }
    }

    /// CSS class for the badge dot.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Running => "status-running",
            Self::Stopped | Self::Unknown => "status-stopped",
        }
    }
}

/// One named service and its current status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceStatus {
    /// Display name, unique within the list.
    pub name: &'static str,
    /// Current status.
    pub state: ServiceState,
}

/// Ordered list of service entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceList {
    entries: Vec<ServiceStatus>,
}

impl Default for ServiceList {
    fn default() -> Self {
        Self::initialize()
    }
}

impl ServiceList {
    /// The fixed initial list: every known service in `Unknown`.
    #[must_use]
    pub fn initialize() -> Self {
        let entries = [SERVICE_POSTGRES, SERVICE_API, SERVICE_KALI]
            .into_iter()
            .map(|name| ServiceStatus {
                name,
                state: ServiceState::Unknown,
            })
            .collect();
        Self { entries }
    }

    /// Move the entry named `name` to `Running`.
    ///
    /// Unknown names and illegal transitions leave the list untouched. Returns
    /// whether an entry changed.
    pub fn mark_running(&mut self, name: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) else {
            return false;
        };
        match entry.state.transition(ServiceState::Running) {
            Some(next) => {
                entry.state = next;
                true
            }
            None => false,
        }
    }

    /// Entries in display order.
    #[must_use]
    pub const fn entries(&self) -> &[ServiceStatus] {
        self.entries.as_slice()
    }

    /// Status of the entry named `name`, if present.
    #[must_use]
    pub fn state_of(&self, name: &str) -> Option<ServiceState> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.state)
    }

    /// Number of entries currently `Running`.
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.state == ServiceState::Running)
            .count()
    }

    /// Total number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the list holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ServiceState; 3] = [
        ServiceState::Running,
        ServiceState::Stopped,
        ServiceState::Unknown,
    ];

    #[test]
    fn initialize_lists_known_services_as_unknown() {
        let list = ServiceList::initialize();
        let names: Vec<_> = list.entries().iter().map(|entry| entry.name).collect();
        assert_eq!(names, ["PostgreSQL", "API", "Kali"]);
        assert!(
            list.entries()
                .iter()
                .all(|entry| entry.state == ServiceState::Unknown)
        );
        assert_eq!(list, ServiceList::default());
    }

    #[test]
    fn only_unknown_to_running_is_legal() {
        for from in ALL {
            for to in ALL {
                let expected = from == ServiceState::Unknown && to == ServiceState::Running;
                assert_eq!(from.can_transition_to(to), expected, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn mark_running_updates_only_the_named_entry() {
        let mut list = ServiceList::initialize();
        assert!(list.mark_running(SERVICE_API));
        assert_eq!(list.state_of(SERVICE_API), Some(ServiceState::Running));
        assert_eq!(list.state_of(SERVICE_POSTGRES), Some(ServiceState::Unknown));
        assert_eq!(list.state_of(SERVICE_KALI), Some(ServiceState::Unknown));
        assert_eq!(list.running_count(), 1);
    }

    #[test]
    fn mark_running_is_idempotent_and_ignores_unknown_names() {
        let mut list = ServiceList::initialize();
        assert!(!list.mark_running("Redis"));
        assert_eq!(list, ServiceList::initialize());

        assert!(list.mark_running(SERVICE_KALI));
        let snapshot = list.clone();
        assert!(!list.mark_running(SERVICE_KALI));
        assert_eq!(list, snapshot);
    }

    #[test]
    fn badges_map_running_and_everything_else() {
        assert_eq!(ServiceState::Running.badge_class(), "status-running");
        assert_eq!(ServiceState::Unknown.badge_class(), "status-stopped");
        assert_eq!(ServiceState::Stopped.badge_class(), "status-stopped");
        assert_eq!(ServiceState::Unknown.as_str(), "unknown");
    }
}
