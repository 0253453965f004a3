use askama::Template;

use crate::models::{
    enriched::{EnrichedCertificate, EnrichedContainer},
    entities::{Container, Overview, Project, User},
};
use crate::services::{summary::UserProjectCount, uptime::DaysAndHours};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub overview: Overview,
    pub containers: Vec<Container>,
    pub user_projects: Vec<UserProjectCount>,
    pub certificates: Vec<EnrichedCertificate>,
    pub warning_count: usize,
    pub current_year: u32,
}

pub struct ProjectCard {
    pub project: Project,
    pub stack: String,
    pub updated: String,
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub users: Vec<User>,
    pub projects: Vec<ProjectCard>,
    pub owners: Vec<String>,
    pub owner_filter: String,
    pub status_filter: String,
    pub current_year: u32,
}

pub struct ContainerCard {
    pub item: EnrichedContainer,
    pub ports: String,
    pub uptime: DaysAndHours,
}

#[derive(Template)]
#[template(path = "containers.html")]
pub struct ContainersTemplate {
    pub total: usize,
    pub running: usize,
    pub containers: Vec<ContainerCard>,
    pub owners: Vec<String>,
    pub owner_filter: String,
    pub status_filter: String,
    pub current_year: u32,
}

#[derive(Template)]
#[template(path = "ssl.html")]
pub struct SslTemplate {
    pub total: usize,
    pub expiring: usize,
    pub expired: usize,
    pub certificates: Vec<EnrichedCertificate>,
    pub by_owner: Vec<(String, usize)>,
    pub owners: Vec<String>,
    pub owner_filter: String,
    pub status_filter: String,
    pub query: String,
    pub current_year: u32,
}
