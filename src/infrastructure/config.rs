use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub slider: SliderSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// Payload slider shape. The domain is fixed by configuration, not by
/// the observed payloads; only the default thumb positions follow the
/// data.
#[derive(Debug, Deserialize, Clone)]
pub struct SliderSettings {
    #[serde(default = "default_slider_min")]
    pub min_kg: f64,
    #[serde(default = "default_slider_max")]
    pub max_kg: f64,
    #[serde(default = "default_slider_step")]
    pub step_kg: f64,
    #[serde(default = "default_mark_spacing")]
    pub mark_spacing_kg: f64,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            min_kg: default_slider_min(),
            max_kg: default_slider_max(),
            step_kg: default_slider_step(),
            mark_spacing_kg: default_mark_spacing(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_dataset_path() -> String {
    "data/spacex_launch_dash.csv".to_string()
}

fn default_slider_min() -> f64 {
    0.0
}

fn default_slider_max() -> f64 {
    10_000.0
}

fn default_slider_step() -> f64 {
    1_000.0
}

fn default_mark_spacing() -> f64 {
    2_500.0
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
