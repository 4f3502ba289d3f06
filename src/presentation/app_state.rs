// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::launch_repository::PayloadExtent;
use crate::application::site_catalog_service::SiteCatalogService;
use crate::infrastructure::config::SliderSettings;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: SiteCatalogService,
    pub chart_service: ChartService,
    pub slider: SliderSettings,
    pub payload_extent: PayloadExtent,
}
