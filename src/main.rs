mod config;
mod logging;
mod handlers;
mod models;
mod services;

use actix_web::{
    middleware::{Logger, NormalizePath, TrailingSlash},
    web, App, HttpServer,
};
use handlers::AppState;
use log::{info, warn};
use logging::init_logging;
use services::{
    enrichment::duplicate_join_keys,
    fixtures::{DirectoryFixtures, EmbeddedFixtures, FixtureSource},
    renewal::LoggingRenewer,
};
use std::{io, sync::Arc};

fn build_fixtures(config: &config::Config) -> io::Result<Arc<dyn FixtureSource>> {
    let fixtures: Arc<dyn FixtureSource> = match &config.fixtures_path {
        Some(path) => {
            info!("Serving fixtures from directory: {}", path);
            Arc::new(DirectoryFixtures::new(path))
        }
        None => {
            info!("Serving embedded fixtures");
            Arc::new(
                EmbeddedFixtures::load()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            )
        }
    };

    match fixtures.projects() {
        Ok(projects) => {
            for name in duplicate_join_keys(&projects) {
                warn!("Project name {} is used more than once; containers named {} join to the first", name, name);
            }
        }
        Err(e) => warn!("Projects fixture unavailable at startup: {}", e),
    }
    Ok(fixtures)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = config::Config::from_file("config").expect("Failed to load configuration");
    init_logging(&config).expect("Failed to initialize logging");

    let state = web::Data::new(AppState {
        fixtures: build_fixtures(&config)?,
        renewer: Arc::new(LoggingRenewer),
    });

    info!("Listening on {}:{}", config.server_address, config.server_port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(format!("{}:{}", config.server_address, config.server_port))?
    .run()
    .await
}
