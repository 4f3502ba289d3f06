// Site catalog service - Use case for building the site dropdown
use crate::application::launch_repository::LaunchRepository;
use crate::domain::charts::SiteOption;
use crate::domain::launch::SiteSelector;
use std::collections::HashSet;
use std::sync::Arc;

/// Display label of the sentinel dropdown entry.
pub const ALL_SITES_LABEL: &str = "All Sites";

#[derive(Clone)]
pub struct SiteCatalogService {
    repository: Arc<dyn LaunchRepository>,
}

impl SiteCatalogService {
    pub fn new(repository: Arc<dyn LaunchRepository>) -> Self {
        Self { repository }
    }

    /// Dropdown options: the "All Sites" sentinel followed by the distinct
    /// launch sites in first-occurrence order. Source order, not
    /// alphabetical, so the option list is reproducible from the input.
    pub fn site_options(&self) -> Vec<SiteOption> {
        let mut options = vec![SiteOption::new(
            ALL_SITES_LABEL.to_string(),
            SiteSelector::ALL_VALUE.to_string(),
        )];

        let mut seen = HashSet::new();
        for record in self.repository.records() {
            if seen.insert(record.launch_site.clone()) {
                options.push(SiteOption::new(
                    record.launch_site.clone(),
                    record.launch_site.clone(),
                ));
            }
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::launch_repository::PayloadExtent;
    use crate::domain::launch::{LaunchRecord, Outcome};

    struct FixedTable(Vec<LaunchRecord>);

    impl LaunchRepository for FixedTable {
        fn records(&self) -> &[LaunchRecord] {
            &self.0
        }

        fn payload_extent(&self) -> PayloadExtent {
            PayloadExtent {
                min_kg: 0.0,
                max_kg: 10_000.0,
            }
        }
    }

    fn record(site: &str) -> LaunchRecord {
        LaunchRecord::new(site.to_string(), 1000.0, Outcome::Success, "v1".to_string())
    }

    #[test]
    fn test_sentinel_then_first_occurrence_order() {
        let service = SiteCatalogService::new(Arc::new(FixedTable(vec![
            record("KSC"),
            record("KSC"),
            record("CCAFS"),
            record("KSC"),
        ])));

        let options = service.site_options();
        assert_eq!(
            options,
            vec![
                SiteOption::new("All Sites".to_string(), "ALL".to_string()),
                SiteOption::new("KSC".to_string(), "KSC".to_string()),
                SiteOption::new("CCAFS".to_string(), "CCAFS".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_table_yields_only_the_sentinel() {
        let service = SiteCatalogService::new(Arc::new(FixedTable(Vec::new())));

        let options = service.site_options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "ALL");
    }
}
