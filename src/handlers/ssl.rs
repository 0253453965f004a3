use actix_web::{http::header, web, HttpRequest, HttpResponse};
use log::{debug, error, info, warn};

use super::{current_year, load_snapshot, render, AppState, ErrorBody};
use crate::models::{errors::DashboardError, templates::SslTemplate};
use crate::services::{
    enrichment::enrich_certificates,
    filters::{FilterParams, FilterSet},
    summary::{owner_options, summarize},
};

pub async fn get_certificates(
    state: web::Data<AppState>,
    query: web::Query<FilterParams>,
) -> HttpResponse {
    info!("Gathering certificate data");
    let snapshot = match load_snapshot(&state) {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let enriched = enrich_certificates(&snapshot.certificates, &snapshot.projects, &snapshot.users);
    let summary = summarize(&enriched);
    let filters = FilterSet::from(&*query);
    let certificates: Vec<_> = filters.apply(&enriched).into_iter().cloned().collect();
    debug!(
        "{} of {} certificates match owner={} status={} query={:?}",
        certificates.len(),
        summary.total,
        filters.owner.as_str(),
        filters.status.as_str(),
        filters.search
    );

    let template = SslTemplate {
        total: summary.total,
        expiring: summary.count("expiring"),
        expired: summary.count("expired"),
        owners: owner_options(&enriched),
        by_owner: summary.by_owner.into_iter().collect(),
        certificates,
        owner_filter: filters.owner.as_str().to_string(),
        status_filter: filters.status.as_str().to_string(),
        query: filters.search,
        current_year: current_year(),
    };
    render(&template, "SSL")
}

/// Form posts from the certificates page accept HTML and are sent back to it.
fn wants_html(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("text/html"))
        .unwrap_or(false)
}

pub async fn renew_certificate(
    req: HttpRequest,
    state: web::Data<AppState>,
    domain: web::Path<String>,
) -> HttpResponse {
    let domain = domain.into_inner();
    info!("Renewal requested for {}", domain);

    let known = match state.fixtures.certificates() {
        Ok(certificates) => certificates.iter().any(|c| c.domain == domain),
        Err(e) => {
            error!("Unable to load certificates: {}", e);
            return HttpResponse::InternalServerError().json(ErrorBody { error: e.message() });
        }
    };
    if !known {
        let err = DashboardError::UnknownDomain(domain);
        warn!("{}", err.message());
        return HttpResponse::NotFound().json(ErrorBody { error: err.message() });
    }

    match state.renewer.renew(&domain) {
        Ok(receipt) if wants_html(&req) => {
            info!("{}", receipt.message);
            HttpResponse::SeeOther()
                .append_header((header::LOCATION, "/ssl"))
                .finish()
        }
        Ok(receipt) => HttpResponse::Ok().json(receipt),
        Err(e) => {
            error!("{}", e.message());
            HttpResponse::BadGateway().json(ErrorBody { error: e.message() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{configure, test_support};
    use crate::services::renewal::{CertificateRenewer, RenewalReceipt};
    use actix_web::{http::StatusCode, test, App};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingRenewer {
        requested: Mutex<Vec<String>>,
    }

    impl CertificateRenewer for RecordingRenewer {
        fn renew(&self, domain: &str) -> Result<RenewalReceipt, DashboardError> {
            self.requested.lock().unwrap().push(domain.to_string());
            Err(DashboardError::RenewalFailed {
                domain: domain.to_string(),
                reason: "acme unreachable".into(),
            })
        }
    }

    async fn fetch(uri: &str) -> String {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::embedded_state()))
                .configure(configure),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn summary_cards_cover_all_certificates() {
        let body = fetch("/ssl?status=valid").await;
        assert!(body.contains("<p>Total Certificates</p><p>6</p>"));
        assert!(body.contains("<p>Expiring Soon</p><p>2</p>"));
        assert!(body.contains("<p>Expired</p><p>2</p>"));
        assert!(body.contains("<h2>alice.com</h2>"));
        assert!(!body.contains("<h2>bob.com</h2>"));
    }

    #[actix_web::test]
    async fn unresolved_owner_is_shown_as_unknown() {
        let body = fetch("/ssl?owner=unknown").await;
        assert!(body.contains("<h2>legacy.example.org</h2>"));
        assert!(body.contains("Owner: Unknown"));
        assert!(!body.contains("<h2>alice.com</h2>"));
    }

    #[actix_web::test]
    async fn search_narrows_by_domain() {
        let body = fetch("/ssl?q=BOB").await;
        assert!(body.contains("<h2>bob.com</h2>"));
        assert!(body.contains("Owner: bob"));
        assert!(!body.contains("<h2>alice.com</h2>"));
    }

    #[actix_web::test]
    async fn renew_known_domain_returns_receipt() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::embedded_state()))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post().uri("/ssl/bob.com/renew").to_request();
        let receipt: RenewalReceipt = test::call_and_read_body_json(&app, req).await;
        assert_eq!(receipt.domain, "bob.com");
        assert_eq!(receipt.message, "Renewal requested for bob.com");
    }

    #[actix_web::test]
    async fn renew_from_browser_form_redirects_to_list() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::embedded_state()))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/ssl/bob.com/renew")
            .insert_header((header::ACCEPT, "text/html,application/xhtml+xml"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/ssl");
    }

    #[actix_web::test]
    async fn renew_unknown_domain_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::embedded_state()))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post().uri("/ssl/nope.example/renew").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn renewal_port_is_injectable() {
        let renewer = Arc::new(RecordingRenewer::default());
        let state = AppState {
            renewer: renewer.clone(),
            ..test_support::embedded_state()
        };
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure),
        )
        .await;
        let req = test::TestRequest::post().uri("/ssl/alice.com/renew").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(*renewer.requested.lock().unwrap(), vec!["alice.com".to_string()]);
    }
}
