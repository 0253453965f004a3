//! Joins containers and certificates to their owning project or user.
//!
//! There are no foreign keys in the fixtures: containers match projects by
//! name and certificates match projects by domain. The join keys are spelled
//! out as functions so that collisions can be detected and tested.

use std::collections::BTreeMap;

use crate::models::{
    enriched::{EnrichedCertificate, EnrichedContainer},
    entities::{Certificate, CertificateStatus, Container, Project, User},
};

pub fn container_join_key(container: &Container) -> &str {
    &container.name
}

pub fn project_join_key(project: &Project) -> &str {
    &project.name
}

pub fn certificate_join_key(certificate: &Certificate) -> &str {
    &certificate.domain
}

pub fn project_domain_key(project: &Project) -> &str {
    &project.domain
}

/// First DNS label of a domain; the whole string when there is no dot.
pub fn domain_label(domain: &str) -> &str {
    domain.split('.').next().unwrap_or(domain)
}

/// Owner of the first user listing `project_name` among their projects.
fn owner_by_membership<'a>(users: &'a [User], project_name: &str) -> Option<&'a str> {
    users
        .iter()
        .find(|u| u.projects.iter().any(|p| p == project_name))
        .map(|u| u.username.as_str())
}

fn resolve_owner(project: Option<&Project>, users: &[User], fallback_key: &str) -> Option<String> {
    project
        .map(|p| p.user.as_str())
        .filter(|user| !user.is_empty())
        .or_else(|| owner_by_membership(users, fallback_key))
        .map(str::to_string)
}

pub fn enrich_containers(
    containers: &[Container],
    projects: &[Project],
    users: &[User],
) -> Vec<EnrichedContainer> {
    containers
        .iter()
        .map(|container| {
            let key = container_join_key(container);
            let project = projects.iter().find(|p| project_join_key(p) == key);
            EnrichedContainer {
                owner: resolve_owner(project, users, key),
                project: project.cloned(),
                container: container.clone(),
            }
        })
        .collect()
}

pub fn enrich_certificates(
    certificates: &[Certificate],
    projects: &[Project],
    users: &[User],
) -> Vec<EnrichedCertificate> {
    certificates
        .iter()
        .map(|certificate| {
            let key = certificate_join_key(certificate);
            let project = projects.iter().find(|p| project_domain_key(p) == key);
            EnrichedCertificate {
                owner: resolve_owner(project, users, domain_label(key)),
                status: CertificateStatus::from_days_remaining(certificate.days_remaining),
                certificate: certificate.clone(),
            }
        })
        .collect()
}

/// Project names used by more than one project. Container enrichment picks
/// the first of these, so any entry here means some containers may resolve
/// to an unexpected owner.
pub fn duplicate_join_keys(projects: &[Project]) -> Vec<String> {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for project in projects {
        *seen.entry(project_join_key(project)).or_insert(0) += 1;
    }
    seen.into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entities::{RunState, Stack};
    use crate::services::uptime::parse_uptime_to_hours;

    fn user(username: &str, projects: &[&str]) -> User {
        User {
            username: username.into(),
            home: format!("/home/{}", username),
            projects: projects.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn project(name: &str, owner: &str, domain: &str) -> Project {
        Project {
            name: name.into(),
            user: owner.into(),
            domain: domain.into(),
            port: 3000,
            stack: Stack::default(),
            status: RunState::Running,
            updated_at: "2025-05-01T10:00:00Z".into(),
        }
    }

    fn container(name: &str, uptime: &str) -> Container {
        Container {
            id: format!("id-{}", name),
            name: name.into(),
            image: format!("{}:latest", name),
            status: RunState::Running,
            ports: vec![],
            uptime: uptime.into(),
        }
    }

    fn certificate(domain: &str, days_remaining: i64) -> Certificate {
        Certificate {
            domain: domain.into(),
            days_remaining,
            issuer: "Let's Encrypt".into(),
            valid_to: "2025-07-01".into(),
        }
    }

    #[test]
    fn container_owner_comes_from_matching_project() {
        let enriched = enrich_containers(
            &[container("alice-app", "2h 15m")],
            &[project("alice-app", "alice", "alice.com")],
            &[],
        );
        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].owner.as_deref(), Some("alice"));
        assert_eq!(enriched[0].domain(), Some("alice.com"));
        let hours = parse_uptime_to_hours(&enriched[0].container.uptime);
        assert!((hours - 2.25).abs() < 1e-9);
    }

    #[test]
    fn container_owner_falls_back_to_user_membership() {
        let enriched = enrich_containers(
            &[container("carol-blog", "1h")],
            &[],
            &[user("bob", &["bob"]), user("carol", &["carol-blog"])],
        );
        assert_eq!(enriched[0].owner.as_deref(), Some("carol"));
        assert!(enriched[0].project.is_none());
    }

    #[test]
    fn unmatched_container_has_no_owner() {
        let enriched = enrich_containers(&[container("orphan", "")], &[], &[user("bob", &["bob"])]);
        assert_eq!(enriched[0].owner, None);
    }

    #[test]
    fn first_project_wins_on_name_collision() {
        let projects = [project("shared", "alice", "a.com"), project("shared", "bob", "b.com")];
        let enriched = enrich_containers(&[container("shared", "")], &projects, &[]);
        assert_eq!(enriched[0].owner.as_deref(), Some("alice"));
        assert_eq!(duplicate_join_keys(&projects), vec!["shared".to_string()]);
    }

    #[test]
    fn empty_project_owner_falls_through_to_users() {
        let enriched = enrich_containers(
            &[container("site", "")],
            &[project("site", "", "site.com")],
            &[user("dave", &["site"])],
        );
        assert_eq!(enriched[0].owner.as_deref(), Some("dave"));
    }

    #[test]
    fn certificate_owner_via_domain_label() {
        let enriched = enrich_certificates(&[certificate("bob.com", 5)], &[], &[user("bob", &["bob"])]);
        assert_eq!(enriched[0].owner.as_deref(), Some("bob"));
        assert_eq!(enriched[0].status, CertificateStatus::Expiring);
    }

    #[test]
    fn certificate_owner_via_project_domain() {
        let enriched = enrich_certificates(
            &[certificate("alice.com", 90)],
            &[project("alice-app", "alice", "alice.com")],
            &[user("mallory", &["alice"])],
        );
        assert_eq!(enriched[0].owner.as_deref(), Some("alice"));
        assert_eq!(enriched[0].status, CertificateStatus::Valid);
    }

    #[test]
    fn certificate_without_dot_or_match_is_tolerated() {
        let enriched = enrich_certificates(&[certificate("localhost", -3)], &[], &[user("bob", &["bob"])]);
        assert_eq!(enriched[0].owner, None);
        assert_eq!(enriched[0].status, CertificateStatus::Expired);
        assert_eq!(enriched[0].owner_label(), "Unknown");
    }

    #[test]
    fn domain_label_takes_text_before_first_dot() {
        assert_eq!(domain_label("api.example.com"), "api");
        assert_eq!(domain_label("localhost"), "localhost");
        assert_eq!(domain_label(""), "");
    }

    #[test]
    fn enrichment_preserves_cardinality_and_is_deterministic() {
        let containers = [container("a", "1h"), container("b", "2h"), container("a", "3h")];
        let projects = [project("a", "alice", "a.com")];
        let users = [user("bob", &["b"])];
        let first = enrich_containers(&containers, &projects, &users);
        let second = enrich_containers(&containers, &projects, &users);
        assert_eq!(first.len(), containers.len());
        assert_eq!(first, second);

        let certs = [certificate("a.com", 10), certificate("b.net", 100)];
        assert_eq!(
            enrich_certificates(&certs, &projects, &users),
            enrich_certificates(&certs, &projects, &users)
        );
    }

    #[test]
    fn no_duplicates_in_distinct_projects() {
        let projects = [project("a", "alice", "a.com"), project("b", "bob", "b.com")];
        assert!(duplicate_join_keys(&projects).is_empty());
    }
}
