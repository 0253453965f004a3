use log::info;
use serde::{Deserialize, Serialize};

use crate::models::errors::DashboardError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalReceipt {
    pub domain: String,
    pub message: String,
}

/// Port for certificate renewal requests.
pub trait CertificateRenewer: Send + Sync {
    fn renew(&self, domain: &str) -> Result<RenewalReceipt, DashboardError>;
}

/// Acknowledges the request and logs it. Nothing is issued.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingRenewer;

impl CertificateRenewer for LoggingRenewer {
    fn renew(&self, domain: &str) -> Result<RenewalReceipt, DashboardError> {
        info!("Renewal requested for {} (no renewal backend configured)", domain);
        Ok(RenewalReceipt {
            domain: domain.to_string(),
            message: format!("Renewal requested for {}", domain),
        })
    }
}
