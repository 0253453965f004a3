use actix_web::{web, HttpResponse};
use log::{debug, info};

use super::{current_year, load_snapshot, render, AppState};
use crate::models::templates::DashboardTemplate;
use crate::services::{
    enrichment::enrich_certificates,
    summary::{expiry_warnings, projects_per_user},
};

pub async fn get_dashboard(state: web::Data<AppState>) -> HttpResponse {
    info!("Gathering dashboard data");
    let snapshot = match load_snapshot(&state) {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let certificates =
        enrich_certificates(&snapshot.certificates, &snapshot.projects, &snapshot.users);
    let warning_count = expiry_warnings(&certificates).len();
    debug!("{} certificates need attention", warning_count);

    let template = DashboardTemplate {
        overview: snapshot.overview,
        user_projects: projects_per_user(&snapshot.users),
        containers: snapshot.containers,
        certificates,
        warning_count,
        current_year: current_year(),
    };
    render(&template, "Dashboard")
}
