// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::chart_service::ChartService;
use crate::application::launch_repository::LaunchRepository;
use crate::application::site_catalog_service::SiteCatalogService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csv_repository::CsvLaunchRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_controls, get_payload_scatter, get_success_pie, health_check,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Load the launch table once (infrastructure layer). A missing,
    // malformed, or empty dataset is fatal before the port is bound.
    let repository = Arc::new(CsvLaunchRepository::load(Path::new(&config.dataset.path))?);
    let payload_extent = repository.payload_extent();

    // Create services (application layer)
    let catalog_service = SiteCatalogService::new(repository.clone());
    let chart_service = ChartService::new(repository);

    // Create application state
    let state = Arc::new(AppState {
        catalog_service,
        chart_service,
        slider: config.slider,
        payload_extent,
    });

    // Build router (presentation layer)
    // Note: Response bodies are compressed manually in the response
    // builders, so no CompressionLayer here
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/controls", get(get_controls))
        .route("/charts/success-pie", get(get_success_pie))
        .route("/charts/payload-scatter", get(get_payload_scatter))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    println!("Starting launch-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
