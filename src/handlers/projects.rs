use actix_web::{web, HttpResponse};
use chrono::DateTime;
use log::{debug, info};

use super::{current_year, load_snapshot, render, AppState};
use crate::models::templates::{ProjectCard, ProjectsTemplate};
use crate::services::filters::{FilterParams, FilterSet};

/// `2025-05-01 10:15`; anything that is not RFC 3339 is shown as-is.
fn format_updated_at(updated_at: &str) -> String {
    DateTime::parse_from_rfc3339(updated_at)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| updated_at.to_string())
}

pub async fn get_projects(
    state: web::Data<AppState>,
    query: web::Query<FilterParams>,
) -> HttpResponse {
    info!("Gathering project data");
    let snapshot = match load_snapshot(&state) {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let filters = FilterSet::from(&*query);
    let projects: Vec<ProjectCard> = filters
        .apply(&snapshot.projects)
        .into_iter()
        .map(|project| ProjectCard {
            stack: project.stack.describe(),
            updated: format_updated_at(&project.updated_at),
            project: project.clone(),
        })
        .collect();
    debug!(
        "{} of {} projects match owner={} status={}",
        projects.len(),
        snapshot.projects.len(),
        filters.owner.as_str(),
        filters.status.as_str()
    );

    let template = ProjectsTemplate {
        owners: snapshot.users.iter().map(|u| u.username.clone()).collect(),
        users: snapshot.users,
        projects,
        owner_filter: filters.owner.as_str().to_string(),
        status_filter: filters.status.as_str().to_string(),
        current_year: current_year(),
    };
    render(&template, "Projects")
}
