// models/errors.rs

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    FixtureUnreadable { collection: String, reason: String },
    FixtureMalformed { collection: String, reason: String },
    UnknownDomain(String),
    // Returned by renewal adapters backed by a real issuer.
    #[cfg_attr(not(test), allow(dead_code))]
    RenewalFailed { domain: String, reason: String },
    TemplateRenderFailed(String),
}

impl DashboardError {
    pub fn message(&self) -> String {
        match self {
            Self::FixtureUnreadable { collection, reason } => {
                format!("Failed to read {} fixture: {}", collection, reason)
            }
            Self::FixtureMalformed { collection, reason } => {
                format!("Failed to parse {} fixture: {}", collection, reason)
            }
            Self::UnknownDomain(domain) => format!("No certificate found for {}.", domain),
            Self::RenewalFailed { domain, reason } => {
                format!("Renewal of {} failed: {}", domain, reason)
            }
            Self::TemplateRenderFailed(reason) => format!("Failed to render template: {}", reason),
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for DashboardError {}
