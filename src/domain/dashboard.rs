// Dashboard page view models
use super::color::ColorMap;
use super::filter::{DepartmentSelection, Period, RenderMode};
use super::series::{ChartRow, SeriesStyle};
use super::stats::Stats;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const INPATIENT_FALLBACK_TITLE: &str = "入院患者数（病棟別）";
pub const STACKED_HEADING: &str = "診療科別の積み上げグラフ";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InpatientDashboard {
    pub title: String,
    pub rows: Vec<ChartRow>,
    pub stats: Stats,
    pub ward_count: usize,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilter {
    pub department: DepartmentSelection,
    pub period: Period,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutpatientDashboard {
    pub title: String,
    pub heading: String,
    pub render_mode: RenderMode,
    pub rows: Vec<ChartRow>,
    pub stats: Stats,
    pub colors: ColorMap,
    /// Backend-supplied dataset styling, one entry per series
    pub series_styles: Vec<SeriesStyle>,
    /// Department choices offered by the filter panel
    pub departments: Vec<String>,
    pub filter: AppliedFilter,
    pub last_updated: DateTime<Utc>,
}

/// Chart heading for the selected department and mode
pub fn outpatient_heading(department: &DepartmentSelection, mode: RenderMode) -> String {
    match mode {
        RenderMode::Stacked => STACKED_HEADING.to_string(),
        RenderMode::Overlaid => format!("{}の患者数推移", department),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InpatientSummary {
    pub rows: Vec<ChartRow>,
    pub total: i64,
    pub ward_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutpatientSummary {
    pub rows: Vec<ChartRow>,
    /// Most recent value of the first series
    pub latest: i64,
    pub department_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub inpatient: InpatientSummary,
    pub outpatient: OutpatientSummary,
    pub last_updated: DateTime<Utc>,
}
