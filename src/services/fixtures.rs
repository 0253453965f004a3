use crate::models::{
    entities::{Certificate, Container, MetricsSeries, Overview, Project, User},
    errors::DashboardError,
};
use log::{debug, error};
use serde::de::DeserializeOwned;
use std::{fs, path::PathBuf};

const USERS: &str = "users";
const PROJECTS: &str = "projects";
const CONTAINERS: &str = "containers";
const CERTIFICATES: &str = "ssl";
const METRICS: &str = "metrics";
const OVERVIEW: &str = "overview";

/// Read-only access to the entity collections backing the dashboard.
///
/// Every call returns the current snapshot of one collection; callers never
/// write back. Swapping the implementation is how a live backend would be
/// attached.
pub trait FixtureSource: Send + Sync {
    fn users(&self) -> Result<Vec<User>, DashboardError>;
    fn projects(&self) -> Result<Vec<Project>, DashboardError>;
    fn containers(&self) -> Result<Vec<Container>, DashboardError>;
    fn certificates(&self) -> Result<Vec<Certificate>, DashboardError>;
    fn metrics(&self) -> Result<MetricsSeries, DashboardError>;
    fn overview(&self) -> Result<Overview, DashboardError>;

    fn snapshot(&self) -> Result<Snapshot, DashboardError> {
        Ok(Snapshot {
            users: self.users()?,
            projects: self.projects()?,
            containers: self.containers()?,
            certificates: self.certificates()?,
            metrics: self.metrics()?,
            overview: self.overview()?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub containers: Vec<Container>,
    pub certificates: Vec<Certificate>,
    pub metrics: MetricsSeries,
    pub overview: Overview,
}

fn parse_collection<T: DeserializeOwned>(collection: &str, raw: &str) -> Result<T, DashboardError> {
    serde_json::from_str(raw).map_err(|e| {
        let err = DashboardError::FixtureMalformed {
            collection: collection.to_string(),
            reason: e.to_string(),
        };
        error!("{}", err.message());
        err
    })
}

/// Fixtures compiled into the binary, parsed once at construction.
#[derive(Debug, Clone)]
pub struct EmbeddedFixtures {
    snapshot: Snapshot,
}

impl EmbeddedFixtures {
    pub fn load() -> Result<Self, DashboardError> {
        let snapshot = Snapshot {
            users: parse_collection(USERS, include_str!("../../fixtures/users.json"))?,
            projects: parse_collection(PROJECTS, include_str!("../../fixtures/projects.json"))?,
            containers: parse_collection(
                CONTAINERS,
                include_str!("../../fixtures/containers.json"),
            )?,
            certificates: parse_collection(CERTIFICATES, include_str!("../../fixtures/ssl.json"))?,
            metrics: parse_collection(METRICS, include_str!("../../fixtures/metrics.json"))?,
            overview: parse_collection(OVERVIEW, include_str!("../../fixtures/overview.json"))?,
        };
        debug!(
            "Embedded fixtures loaded: {} users, {} projects, {} containers, {} certificates",
            snapshot.users.len(),
            snapshot.projects.len(),
            snapshot.containers.len(),
            snapshot.certificates.len()
        );
        Ok(Self { snapshot })
    }
}

impl FixtureSource for EmbeddedFixtures {
    fn users(&self) -> Result<Vec<User>, DashboardError> {
        Ok(self.snapshot.users.clone())
    }

    fn projects(&self) -> Result<Vec<Project>, DashboardError> {
        Ok(self.snapshot.projects.clone())
    }

    fn containers(&self) -> Result<Vec<Container>, DashboardError> {
        Ok(self.snapshot.containers.clone())
    }

    fn certificates(&self) -> Result<Vec<Certificate>, DashboardError> {
        Ok(self.snapshot.certificates.clone())
    }

    fn metrics(&self) -> Result<MetricsSeries, DashboardError> {
        Ok(self.snapshot.metrics.clone())
    }

    fn overview(&self) -> Result<Overview, DashboardError> {
        Ok(self.snapshot.overview.clone())
    }
}

/// JSON files read from a directory on every fetch, so edits show up on the
/// next page view.
#[derive(Debug, Clone)]
pub struct DirectoryFixtures {
    root: PathBuf,
}

impl DirectoryFixtures {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn read<T: DeserializeOwned>(&self, collection: &str) -> Result<T, DashboardError> {
        let path = self.root.join(format!("{}.json", collection));
        debug!("Reading fixture from: {}", path.display());
        let raw = fs::read_to_string(&path).map_err(|e| {
            let err = DashboardError::FixtureUnreadable {
                collection: collection.to_string(),
                reason: format!("{}: {}", path.display(), e),
            };
            error!("{}", err.message());
            err
        })?;
        parse_collection(collection, &raw)
    }
}

impl FixtureSource for DirectoryFixtures {
    fn users(&self) -> Result<Vec<User>, DashboardError> {
        self.read(USERS)
    }

    fn projects(&self) -> Result<Vec<Project>, DashboardError> {
        self.read(PROJECTS)
    }

    fn containers(&self) -> Result<Vec<Container>, DashboardError> {
        self.read(CONTAINERS)
    }

    fn certificates(&self) -> Result<Vec<Certificate>, DashboardError> {
        self.read(CERTIFICATES)
    }

    fn metrics(&self) -> Result<MetricsSeries, DashboardError> {
        self.read(METRICS)
    }

    fn overview(&self) -> Result<Overview, DashboardError> {
        self.read(OVERVIEW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixtures_parse() {
        let fixtures = EmbeddedFixtures::load().unwrap();
        let snapshot = fixtures.snapshot().unwrap();
        assert!(!snapshot.users.is_empty());
        assert!(!snapshot.projects.is_empty());
        assert!(!snapshot.containers.is_empty());
        assert!(!snapshot.certificates.is_empty());
        assert_eq!(snapshot.metrics.timestamps.len(), snapshot.metrics.cpu.len());
        assert_eq!(snapshot.metrics.timestamps.len(), snapshot.metrics.memory.len());
        assert_eq!(snapshot.metrics.timestamps.len(), snapshot.metrics.disk.len());
    }

    #[test]
    fn directory_fixtures_match_embedded_copy() {
        let embedded = EmbeddedFixtures::load().unwrap().snapshot().unwrap();
        let on_disk = DirectoryFixtures::new("fixtures").snapshot().unwrap();
        assert_eq!(embedded, on_disk);
    }

    #[test]
    fn missing_directory_is_reported_not_panicked() {
        let fixtures = DirectoryFixtures::new("does/not/exist");
        match fixtures.users() {
            Err(DashboardError::FixtureUnreadable { collection, .. }) => {
                assert_eq!(collection, "users")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_reported() {
        let result: Result<Vec<User>, _> = parse_collection("users", "[{\"username\": 3}]");
        assert!(matches!(result, Err(DashboardError::FixtureMalformed { .. })));
    }
}
