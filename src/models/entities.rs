use serde::{Deserialize, Serialize};

/// Certificates at or below this many days remaining are flagged as expiring.
pub const EXPIRING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub home: String,
    #[serde(default)]
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Running,
    Stopped,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Running => "running",
            RunState::Stopped => "stopped",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
}

impl Stack {
    /// Renders as `Frontend (react) + Backend (node)`, omitting missing parts.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = [
            self.frontend.as_ref().map(|f| format!("Frontend ({})", f)),
            self.backend.as_ref().map(|b| format!("Backend ({})", b)),
        ]
        .into_iter()
        .flatten()
        .collect();
        parts.join(" + ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub user: String,
    pub domain: String,
    pub port: u16,
    #[serde(default)]
    pub stack: Stack,
    pub status: RunState,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub host: u16,
    pub container: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: RunState,
    #[serde(default)]
    pub ports: Vec<PortMapping>,
    #[serde(default)]
    pub uptime: String,
}

impl Container {
    /// `8080 → 80, 8443 → 443`
    pub fn ports_label(&self) -> String {
        self.ports
            .iter()
            .map(|p| format!("{} → {}", p.host, p.container))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub domain: String,
    pub days_remaining: i64,
    pub issuer: String,
    #[serde(default)]
    pub valid_to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStatus {
    Valid,
    Expiring,
    Expired,
}

impl CertificateStatus {
    pub fn from_days_remaining(days_remaining: i64) -> Self {
        if days_remaining <= 0 {
            CertificateStatus::Expired
        } else if days_remaining <= EXPIRING_WINDOW_DAYS {
            CertificateStatus::Expiring
        } else {
            CertificateStatus::Valid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStatus::Valid => "valid",
            CertificateStatus::Expiring => "expiring",
            CertificateStatus::Expired => "expired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CertificateStatus::Valid => "Valid",
            CertificateStatus::Expiring => "Expiring",
            CertificateStatus::Expired => "Expired",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSeries {
    pub timestamps: Vec<String>,
    pub cpu: Vec<f64>,
    pub memory: Vec<f64>,
    pub disk: Vec<f64>,
}

/// Headline values shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub cpu: String,
    pub memory: String,
    pub disk: String,
    pub uptime: String,
}
