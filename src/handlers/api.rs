//! JSON documents for chart widgets and other consumers of the enriched data.

use actix_web::{web, HttpResponse};
use log::info;
use serde::Serialize;

use super::{load_snapshot, AppState};
use crate::models::{
    enriched::{EnrichedCertificate, EnrichedContainer},
    entities::Project,
};
use crate::services::{
    enrichment::{enrich_certificates, enrich_containers},
    filters::{FilterParams, FilterSet},
    summary::{
        days_remaining_series, owner_options, resource_chart, summarize, uptime_series,
        DaysRemainingSeries, Summary, UptimeSeries,
    },
};

#[derive(Serialize)]
struct ProjectsDocument<'a> {
    projects: Vec<&'a Project>,
    summary: Summary,
}

#[derive(Serialize)]
struct ContainersDocument<'a> {
    containers: Vec<&'a EnrichedContainer>,
    summary: Summary,
    uptime: UptimeSeries,
}

#[derive(Serialize)]
struct CertificatesDocument<'a> {
    certificates: Vec<&'a EnrichedCertificate>,
    summary: Summary,
    owners: Vec<String>,
    days_remaining: DaysRemainingSeries,
}

pub async fn get_metrics(state: web::Data<AppState>) -> HttpResponse {
    match state.fixtures.metrics() {
        Ok(metrics) => {
            info!("Serving {} metric samples", metrics.timestamps.len());
            HttpResponse::Ok().json(resource_chart(&metrics))
        }
        Err(e) => HttpResponse::InternalServerError().json(super::ErrorBody { error: e.message() }),
    }
}

pub async fn get_projects(
    state: web::Data<AppState>,
    query: web::Query<FilterParams>,
) -> HttpResponse {
    let snapshot = match load_snapshot(&state) {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };
    let filters = FilterSet::from(&*query);
    HttpResponse::Ok().json(ProjectsDocument {
        projects: filters.apply(&snapshot.projects),
        summary: summarize(&snapshot.projects),
    })
}

pub async fn get_containers(
    state: web::Data<AppState>,
    query: web::Query<FilterParams>,
) -> HttpResponse {
    let snapshot = match load_snapshot(&state) {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };
    let enriched = enrich_containers(&snapshot.containers, &snapshot.projects, &snapshot.users);
    let filters = FilterSet::from(&*query);
    HttpResponse::Ok().json(ContainersDocument {
        containers: filters.apply(&enriched),
        summary: summarize(&enriched),
        uptime: uptime_series(&enriched),
    })
}

pub async fn get_certificates(
    state: web::Data<AppState>,
    query: web::Query<FilterParams>,
) -> HttpResponse {
    let snapshot = match load_snapshot(&state) {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };
    let enriched = enrich_certificates(&snapshot.certificates, &snapshot.projects, &snapshot.users);
    let filters = FilterSet::from(&*query);
    HttpResponse::Ok().json(CertificatesDocument {
        certificates: filters.apply(&enriched),
        summary: summarize(&enriched),
        owners: owner_options(&enriched),
        days_remaining: days_remaining_series(&enriched),
    })
}
