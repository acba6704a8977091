#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the KaliDocker API.
//!
//! The dashboard and the server both depend on this crate so the health
//! payload and the tool catalog have a single definition.
use serde::{Deserialize, Serialize};

/// `status` value reported when every probed dependency is reachable.
pub const HEALTH_STATUS_OK: &str = "ok";
/// `status` value reported when at least one dependency is unreachable.
pub const HEALTH_STATUS_DEGRADED: &str = "degraded";

/// RFC9457-compatible problem document surfaced on runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

/// Body returned by `GET /api/health`.
///
/// Clients only rely on `status`; the dependency flags default to `false` so
/// older or partial payloads still decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Whether the Docker endpoint was reachable.
    #[serde(default)]
    pub docker: bool,
    /// Whether the database was reachable.
    #[serde(default)]
    pub database: bool,
}

impl HealthResponse {
    /// Build a response from dependency flags. Only Docker gates the overall status.
    #[must_use]
    pub fn from_dependencies(docker: bool, database: bool) -> Self {
        let status = if docker {
            HEALTH_STATUS_OK
        } else {
            HEALTH_STATUS_DEGRADED
        };
        Self {
            status: status.to_string(),
            docker,
            database,
        }
    }

    /// True when the payload reports the literal `"ok"` status.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == HEALTH_STATUS_OK
    }
}

/// Static display record for one security tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Display name.
    pub name: &'static str,
    /// Display glyph.
    pub icon: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Executable identifier. Informational only.
    pub command: &'static str,
}

/// The fixed tool catalog, in display order.
pub const TOOL_CATALOG: [ToolDescriptor; 6] = [
    ToolDescriptor {
        name: "Nmap",
        icon: "🔍",
        description: "Network discovery and security auditing",
        command: "nmap",
    },
    ToolDescriptor {
        name: "Nuclei",
        icon: "⚡",
        description: "Fast vulnerability scanner",
        command: "nuclei",
    },
    ToolDescriptor {
        name: "SQLMap",
        icon: "💉",
        description: "SQL injection detection and exploitation",
        command: "sqlmap",
    },
    ToolDescriptor {
        name: "Nikto",
        icon: "🌐",
        description: "Web server vulnerability scanner",
        command: "nikto",
    },
    ToolDescriptor {
        name: "Dirb",
        icon: "📁",
        description: "Web content scanner",
        command: "dirb",
    },
    ToolDescriptor {
        name: "Metasploit",
        icon: "🛡️",
        description: "Penetration testing framework",
        command: "msfconsole",
    },
];

/// Entry returned by `GET /api/tools`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolSummary {
    /// Display name.
    pub name: String,
    /// Executable identifier.
    pub command: String,
    /// One-line description.
    pub description: String,
}

impl From<&ToolDescriptor> for ToolSummary {
    fn from(value: &ToolDescriptor) -> Self {
        Self {
            name: value.name.to_string(),
            command: value.command.to_string(),
            description: value.description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_fixed() {
        let names: Vec<_> = TOOL_CATALOG.iter().map(|tool| tool.name).collect();
        assert_eq!(
            names,
            ["Nmap", "Nuclei", "SQLMap", "Nikto", "Dirb", "Metasploit"]
        );
    }

    #[test]
    fn health_status_follows_docker_flag() {
        let healthy = HealthResponse::from_dependencies(true, true);
        assert!(healthy.is_ok());
        assert_eq!(healthy.status, HEALTH_STATUS_OK);

        let degraded = HealthResponse::from_dependencies(false, true);
        assert!(!degraded.is_ok());
        assert_eq!(degraded.status, HEALTH_STATUS_DEGRADED);
        assert!(degraded.database);
    }

    #[test]
    fn health_payload_tolerates_missing_and_extra_fields() -> Result<(), serde_json::Error> {
        let minimal: HealthResponse = serde_json::from_str(r#"{"status":"ok"}"#)?;
        assert!(minimal.is_ok());
        assert!(!minimal.docker);

        let extended: HealthResponse =
            serde_json::from_str(r#"{"status":"OK","docker":true,"uptime":12}"#)?;
        assert!(!extended.is_ok());
        assert!(extended.docker);
        Ok(())
    }

    #[test]
    fn problem_details_serializes_type_field() -> Result<(), serde_json::Error> {
        let problem = ProblemDetails {
            kind: "https://kalidocker.dev/problems/not-found".into(),
            title: "resource not found".into(),
            status: 404,
            detail: None,
        };
        let value = serde_json::to_value(&problem)?;
        assert_eq!(value["type"], "https://kalidocker.dev/problems/not-found");
        assert!(value.get("detail").is_none());
        Ok(())
    }

    #[test]
    fn tool_summary_copies_descriptor_fields() {
        let summary = ToolSummary::from(&TOOL_CATALOG[5]);
        assert_eq!(summary.name, "Metasploit");
        assert_eq!(summary.command, "msfconsole");
    }
}
