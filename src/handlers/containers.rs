use actix_web::{web, HttpResponse};
use log::{debug, info};

use super::{current_year, load_snapshot, render, AppState};
use crate::models::templates::{ContainerCard, ContainersTemplate};
use crate::services::{
    enrichment::enrich_containers,
    filters::{FilterParams, FilterSet},
    summary::summarize,
    uptime::parse_uptime_to_days_and_hours,
};

pub async fn get_containers(
    state: web::Data<AppState>,
    query: web::Query<FilterParams>,
) -> HttpResponse {
    info!("Gathering container data");
    let snapshot = match load_snapshot(&state) {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let enriched = enrich_containers(&snapshot.containers, &snapshot.projects, &snapshot.users);
    let summary = summarize(&enriched);
    let filters = FilterSet::from(&*query);
    let containers: Vec<ContainerCard> = filters
        .apply(&enriched)
        .into_iter()
        .map(|c| ContainerCard {
            ports: c.container.ports_label(),
            uptime: parse_uptime_to_days_and_hours(&c.container.uptime),
            item: c.clone(),
        })
        .collect();
    debug!(
        "{} of {} containers match owner={} status={}",
        containers.len(),
        summary.total,
        filters.owner.as_str(),
        filters.status.as_str()
    );

    let template = ContainersTemplate {
        total: summary.total,
        running: summary.count("running"),
        containers,
        owners: snapshot.users.iter().map(|u| u.username.clone()).collect(),
        owner_filter: filters.owner.as_str().to_string(),
        status_filter: filters.status.as_str().to_string(),
        current_year: current_year(),
    };
    render(&template, "Containers")
}
