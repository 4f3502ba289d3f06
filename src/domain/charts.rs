// Chart dataset domain models
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

impl PieSlice {
    pub fn new(label: String, value: u64) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn new(title: String, slices: Vec<PieSlice>) -> Self {
        Self { title, slices }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_category: String,
}

impl ScatterPoint {
    pub fn new(payload_mass_kg: f64, outcome_class: u8, booster_category: String) -> Self {
        Self {
            payload_mass_kg,
            outcome_class,
            booster_category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn new(title: String, points: Vec<ScatterPoint>) -> Self {
        Self { title, points }
    }
}

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    pub fn new(label: String, value: String) -> Self {
        Self { label, value }
    }
}
