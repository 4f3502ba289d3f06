// Chart service - Use cases for the success pie and payload scatter datasets
use crate::application::launch_repository::LaunchRepository;
use crate::domain::charts::{PieChart, PieSlice, ScatterChart, ScatterPoint};
use crate::domain::launch::{Outcome, PayloadRange, SiteSelector};
use std::collections::HashMap;
use std::sync::Arc;

/// Scatter chart title for a selector and range. Shared with the HTTP
/// layer so the empty chart served for an inverted range keeps the same
/// title shape.
pub fn scatter_title(selector: &SiteSelector, low: f64, high: f64) -> String {
    match selector {
        SiteSelector::All => format!(
            "Correlation between Payload and Success for All Sites (Payload Range: {}-{} kg)",
            low, high
        ),
        SiteSelector::Site(site) => format!(
            "Correlation between Payload and Success for site {} (Payload Range: {}-{} kg)",
            site, low, high
        ),
    }
}

/// Stateless aggregations over the loaded launch table. Every call is a
/// pure projection of the table snapshot: same inputs, same outputs.
#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn LaunchRepository>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn LaunchRepository>) -> Self {
        Self { repository }
    }

    /// Pie dataset for the site selector.
    ///
    /// `All` sums outcome classes per site, so the slice value is the
    /// success count (a sum of 1s), not a success rate. A single site
    /// yields exactly the Failure/Success split; a selector matching no
    /// rows is a valid empty aggregation with both counts zero.
    pub fn success_pie(&self, selector: &SiteSelector) -> PieChart {
        match selector {
            SiteSelector::All => self.successes_by_site(),
            SiteSelector::Site(site) => self.outcome_split(site),
        }
    }

    fn successes_by_site(&self) -> PieChart {
        let mut order = Vec::new();
        let mut successes: HashMap<&str, u64> = HashMap::new();

        for record in self.repository.records() {
            let site = record.launch_site.as_str();
            if !successes.contains_key(site) {
                order.push(site);
            }
            *successes.entry(site).or_insert(0) += u64::from(record.outcome.class());
        }

        let slices = order
            .into_iter()
            .map(|site| PieSlice::new(site.to_string(), successes[site]))
            .collect();

        PieChart::new("Total Successful Launches By Site".to_string(), slices)
    }

    fn outcome_split(&self, site: &str) -> PieChart {
        let mut failures = 0;
        let mut successes = 0;

        for record in self.repository.records() {
            if record.launch_site != site {
                continue;
            }
            match record.outcome {
                Outcome::Failure => failures += 1,
                Outcome::Success => successes += 1,
            }
        }

        PieChart::new(
            format!("Total Launches for site {}: Success vs. Failure", site),
            vec![
                PieSlice::new("Failure".to_string(), failures),
                PieSlice::new("Success".to_string(), successes),
            ],
        )
    }

    /// Scatter dataset: payload filter first (inclusive interval), then
    /// the site filter, preserving source order.
    pub fn payload_scatter(&self, selector: &SiteSelector, range: &PayloadRange) -> ScatterChart {
        let points = self
            .repository
            .records()
            .iter()
            .filter(|record| range.contains(record.payload_mass_kg))
            .filter(|record| selector.matches(&record.launch_site))
            .map(|record| {
                ScatterPoint::new(
                    record.payload_mass_kg,
                    record.outcome.class(),
                    record.booster_category.clone(),
                )
            })
            .collect();

        ScatterChart::new(scatter_title(selector, range.low(), range.high()), points)
    }
}
