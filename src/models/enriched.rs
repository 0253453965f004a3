use serde::Serialize;

use crate::models::entities::{
    Certificate, CertificateStatus, Container, Project, EXPIRING_WINDOW_DAYS,
};

/// Owner key used for grouping and filtering when no owner could be resolved.
pub const UNKNOWN_OWNER: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedContainer {
    #[serde(flatten)]
    pub container: Container,
    pub owner: Option<String>,
    pub project: Option<Project>,
}

impl EnrichedContainer {
    /// Domain of the matched project, if any.
    pub fn domain(&self) -> Option<&str> {
        self.project.as_ref().map(|p| p.domain.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedCertificate {
    #[serde(flatten)]
    pub certificate: Certificate,
    pub owner: Option<String>,
    pub status: CertificateStatus,
}

impl EnrichedCertificate {
    /// Certificate cards always show an owner line.
    pub fn owner_label(&self) -> &str {
        self.owner.as_deref().unwrap_or("Unknown")
    }

    /// Expired or inside the expiry window.
    pub fn needs_attention(&self) -> bool {
        self.certificate.days_remaining <= EXPIRING_WINDOW_DAYS
    }

    pub fn expires_at(&self) -> &str {
        if self.certificate.valid_to.is_empty() {
            "N/A"
        } else {
            &self.certificate.valid_to
        }
    }
}

/// Uniform view used by the filter engine and the summary aggregator.
pub trait Filterable {
    fn owner(&self) -> Option<&str>;
    fn status_key(&self) -> &str;

    /// Text matched by free-text search. Entities without one ignore the query.
    fn search_key(&self) -> Option<&str> {
        None
    }

    fn owner_key(&self) -> &str {
        self.owner().unwrap_or(UNKNOWN_OWNER)
    }
}

impl Filterable for EnrichedContainer {
    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn status_key(&self) -> &str {
        self.container.status.as_str()
    }
}

impl Filterable for EnrichedCertificate {
    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn status_key(&self) -> &str {
        self.status.as_str()
    }

    fn search_key(&self) -> Option<&str> {
        Some(self.certificate.domain.as_str())
    }
}

impl Filterable for Project {
    fn owner(&self) -> Option<&str> {
        Some(self.user.as_str()).filter(|user| !user.is_empty())
    }

    fn status_key(&self) -> &str {
        self.status.as_str()
    }
}
