// Mapper to convert domain models to JSON wire types
use crate::application::launch_repository::PayloadExtent;
use crate::domain::charts::{PieChart, ScatterChart, SiteOption};
use crate::infrastructure::config::SliderSettings;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PieChartDto {
    pub title: String,
    pub slices: Vec<PieSliceDto>,
}

#[derive(Debug, Serialize)]
pub struct PieSliceDto {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Serialize)]
pub struct ScatterChartDto {
    pub title: String,
    pub points: Vec<ScatterPointDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPointDto {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_category: String,
}

/// Everything the presentation shell needs to render its two controls.
#[derive(Debug, Serialize)]
pub struct ControlsDto {
    pub sites: Vec<SiteOptionDto>,
    pub payload: PayloadSliderDto,
}

#[derive(Debug, Serialize)]
pub struct SiteOptionDto {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadSliderDto {
    pub min_kg: f64,
    pub max_kg: f64,
    pub step_kg: f64,
    pub marks: Vec<SliderMarkDto>,
    /// Initial thumb positions: the observed payload extent.
    pub default_range: [f64; 2],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderMarkDto {
    pub position_kg: f64,
    pub label: String,
}

pub fn pie_chart_to_dto(chart: PieChart) -> PieChartDto {
    let slices = chart
        .slices
        .into_iter()
        .map(|slice| PieSliceDto {
            label: slice.label,
            value: slice.value,
        })
        .collect();

    PieChartDto {
        title: chart.title,
        slices,
    }
}

pub fn scatter_chart_to_dto(chart: ScatterChart) -> ScatterChartDto {
    let points = chart
        .points
        .into_iter()
        .map(|point| ScatterPointDto {
            payload_mass_kg: point.payload_mass_kg,
            outcome_class: point.outcome_class,
            booster_category: point.booster_category,
        })
        .collect();

    ScatterChartDto {
        title: chart.title,
        points,
    }
}

pub fn controls_to_dto(
    sites: Vec<SiteOption>,
    slider: &SliderSettings,
    extent: PayloadExtent,
) -> ControlsDto {
    let sites = sites
        .into_iter()
        .map(|option| SiteOptionDto {
            label: option.label,
            value: option.value,
        })
        .collect();

    ControlsDto {
        sites,
        payload: PayloadSliderDto {
            min_kg: slider.min_kg,
            max_kg: slider.max_kg,
            step_kg: slider.step_kg,
            marks: slider_marks(slider),
            default_range: [extent.min_kg, extent.max_kg],
        },
    }
}

fn slider_marks(slider: &SliderSettings) -> Vec<SliderMarkDto> {
    let mut marks = Vec::new();
    if slider.mark_spacing_kg <= 0.0 {
        return marks;
    }

    let mut position = slider.min_kg;

    while position <= slider.max_kg {
        marks.push(SliderMarkDto {
            position_kg: position,
            label: format!("{} kg", position),
        });
        position += slider.mark_spacing_kg;
    }

    marks
}
