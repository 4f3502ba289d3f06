// Application layer - use cases over the repository seam
pub mod chart_service;
pub mod launch_repository;
pub mod site_catalog_service;
