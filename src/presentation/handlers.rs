// HTTP request handlers
use crate::application::chart_service::scatter_title;
use crate::domain::charts::ScatterChart;
use crate::domain::launch::{PayloadRange, SiteSelector};
use crate::infrastructure::dto::{controls_to_dto, pie_chart_to_dto, scatter_chart_to_dto};
use crate::infrastructure::http_response::json_response;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PieQuery {
    pub site: Option<String>,
}

#[derive(Deserialize)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Control catalog: site dropdown options plus the payload slider shape
pub async fn get_controls(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    let sites = state.catalog_service.site_options();
    let dto = controls_to_dto(sites, &state.slider, state.payload_extent);

    match json_response(&dto, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Success pie chart for the selected site
pub async fn get_success_pie(
    Query(query): Query<PieQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    let selector = selector_from_query(query.site);
    let chart = state.chart_service.success_pie(&selector);

    match json_response(&pie_chart_to_dto(chart), compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Payload/outcome scatter chart for the selected site and payload range.
/// Missing bounds default to the observed extent, matching the slider's
/// initial thumb positions. An inverted range degrades to an empty chart
/// instead of failing the interaction.
pub async fn get_payload_scatter(
    Query(query): Query<ScatterQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    let selector = selector_from_query(query.site);
    let extent = state.payload_extent;
    let low = query.low.unwrap_or(extent.min_kg);
    let high = query.high.unwrap_or(extent.max_kg);

    let chart = match PayloadRange::new(low, high) {
        Ok(range) => state.chart_service.payload_scatter(&selector, &range),
        Err(e) => {
            tracing::warn!("{}, serving an empty scatter dataset", e);
            ScatterChart::new(scatter_title(&selector, low, high), Vec::new())
        }
    };

    match json_response(&scatter_chart_to_dto(chart), compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

fn selector_from_query(site: Option<String>) -> SiteSelector {
    match site {
        Some(value) => SiteSelector::from_value(&value),
        None => SiteSelector::All,
    }
}

// Check if the client accepts Brotli compression
fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get("accept-encoding")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.contains("br"))
        .unwrap_or(false)
}
