use std::collections::{BTreeMap, BTreeSet};

use chrono::DateTime;
use serde::Serialize;

use crate::models::{
    enriched::{EnrichedCertificate, EnrichedContainer, Filterable},
    entities::{CertificateStatus, MetricsSeries, User},
};
use crate::services::uptime::parse_uptime_to_hours;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_owner: BTreeMap<String, usize>,
}

impl Summary {
    pub fn count(&self, status: &str) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }
}

pub fn summarize<T: Filterable>(items: &[T]) -> Summary {
    items.iter().fold(Summary::default(), |mut summary, item| {
        summary.total += 1;
        *summary
            .by_status
            .entry(item.status_key().to_string())
            .or_insert(0) += 1;
        *summary
            .by_owner
            .entry(item.owner_key().to_string())
            .or_insert(0) += 1;
        summary
    })
}

/// Sorted, de-duplicated owner keys for the owner select box.
pub fn owner_options<T: Filterable>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.owner_key().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProjectCount {
    pub username: String,
    pub projects: usize,
}

impl UserProjectCount {
    /// `1 project`, `3 projects`
    pub fn label(&self) -> String {
        format!(
            "{} project{}",
            self.projects,
            if self.projects > 1 { "s" } else { "" }
        )
    }
}

pub fn projects_per_user(users: &[User]) -> Vec<UserProjectCount> {
    users
        .iter()
        .map(|u| UserProjectCount {
            username: u.username.clone(),
            projects: u.projects.len(),
        })
        .collect()
}

/// Certificates at or inside the expiry window, including expired ones.
pub fn expiry_warnings(certificates: &[EnrichedCertificate]) -> Vec<&EnrichedCertificate> {
    certificates
        .iter()
        .filter(|c| c.needs_attention())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UptimeSeries {
    pub labels: Vec<String>,
    pub hours: Vec<f64>,
    pub raw: Vec<String>,
}

pub fn uptime_series(containers: &[EnrichedContainer]) -> UptimeSeries {
    containers.iter().fold(UptimeSeries::default(), |mut series, c| {
        series.labels.push(c.container.name.clone());
        series.hours.push(parse_uptime_to_hours(&c.container.uptime));
        series.raw.push(c.container.uptime.clone());
        series
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DaysRemainingSeries {
    pub labels: Vec<String>,
    pub days_remaining: Vec<i64>,
    pub status: Vec<CertificateStatus>,
}

pub fn days_remaining_series(certificates: &[EnrichedCertificate]) -> DaysRemainingSeries {
    certificates
        .iter()
        .fold(DaysRemainingSeries::default(), |mut series, c| {
            series.labels.push(c.certificate.domain.clone());
            series.days_remaining.push(c.certificate.days_remaining);
            series.status.push(c.status);
            series
        })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceChart {
    pub labels: Vec<String>,
    pub cpu: Vec<f64>,
    pub memory: Vec<f64>,
    pub disk: Vec<f64>,
}

/// `HH:MM` label for an RFC 3339 timestamp; unparseable values pass through.
pub fn time_label(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

pub fn resource_chart(metrics: &MetricsSeries) -> ResourceChart {
    ResourceChart {
        labels: metrics.timestamps.iter().map(|t| time_label(t)).collect(),
        cpu: metrics.cpu.clone(),
        memory: metrics.memory.clone(),
        disk: metrics.disk.clone(),
    }
}
