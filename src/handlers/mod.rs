pub mod api;
pub mod containers;
pub mod dashboard;
pub mod projects;
pub mod ssl;

use actix_web::{web, HttpResponse};
use askama::Template;
use chrono::{Datelike, Local};
use log::{error, info};
use serde::Serialize;
use std::sync::Arc;

use crate::models::errors::DashboardError;
use crate::services::{
    fixtures::{FixtureSource, Snapshot},
    renewal::CertificateRenewer,
};

/// Shared by every worker; both collaborators are read-only.
#[derive(Clone)]
pub struct AppState {
    pub fixtures: Arc<dyn FixtureSource>,
    pub renewer: Arc<dyn CertificateRenewer>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard::get_dashboard))
        .route("/projects", web::get().to(projects::get_projects))
        .route("/containers", web::get().to(containers::get_containers))
        .route("/ssl", web::get().to(ssl::get_certificates))
        .route("/ssl/{domain}/renew", web::post().to(ssl::renew_certificate))
        .route("/api/metrics", web::get().to(api::get_metrics))
        .route("/api/projects", web::get().to(api::get_projects))
        .route("/api/containers", web::get().to(api::get_containers))
        .route("/api/certificates", web::get().to(api::get_certificates));
}

pub(crate) fn load_snapshot(state: &AppState) -> Result<Snapshot, HttpResponse> {
    state.fixtures.snapshot().map_err(|e| {
        error!("Unable to load dashboard data: {}", e);
        HttpResponse::InternalServerError().json(ErrorBody { error: e.message() })
    })
}

pub(crate) fn render<T: Template>(template: &T, page: &str) -> HttpResponse {
    match template.render() {
        Ok(html) => {
            info!("{} page rendered successfully", page);
            HttpResponse::Ok().content_type("text/html").body(html)
        }
        Err(e) => {
            let err = DashboardError::TemplateRenderFailed(e.to_string());
            error!("{}", err.message());
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub(crate) fn current_year() -> u32 {
    Local::now().year() as u32
}
