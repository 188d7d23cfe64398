// Dashboard service - Use cases for building the dashboard pages
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::view_state::OutpatientViewState;
use crate::domain::color::build_color_map;
use crate::domain::dashboard::{
    outpatient_heading, InpatientDashboard, InpatientSummary, OutpatientDashboard,
    OutpatientSummary, Overview, INPATIENT_FALLBACK_TITLE,
};
use crate::domain::error::AggregationError;
use crate::domain::filter::{
    OutpatientQuery, Period, ALL_DEPARTMENTS, ALL_DEPARTMENTS_BY_COLOR, BUILTIN_DEPARTMENTS,
};
use crate::domain::master::MasterList;
use crate::domain::series::{
    to_chart_rows, ChartRow, MultiSeriesDataset, SeriesInput, SINGLE_SERIES_LABEL,
};
use crate::domain::stats::compute_stats;
use crate::infrastructure::config::PaletteConfig;
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

// Range shown on the landing page
const OVERVIEW_START: &str = "2025-01-01";
const OVERVIEW_END: &str = "2025-10-31";

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The data-fetch collaborator failed; nothing was aggregated
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),

    #[error("invalid upstream data: {0}")]
    Aggregation(#[from] AggregationError),
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn DashboardRepository>,
    palette: PaletteConfig,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DashboardRepository>, palette: PaletteConfig) -> Self {
        Self {
            repository,
            palette,
        }
    }

    pub async fn inpatient_dashboard(&self) -> Result<InpatientDashboard, DashboardError> {
        let data = self.repository.inpatient_data().await?;

        let series = [data.as_series()];
        let rows = to_chart_rows(&data.labels, &series)?;
        let stats = compute_stats(&series)?;

        let title = if data.title.trim().is_empty() {
            INPATIENT_FALLBACK_TITLE.to_string()
        } else {
            data.title.clone()
        };

        tracing::debug!("Built inpatient dashboard: {} wards", rows.len());

        Ok(InpatientDashboard {
            title,
            rows,
            stats,
            ward_count: data.labels.len(),
            last_updated: Utc::now(),
        })
    }

    pub async fn outpatient_dashboard(
        &self,
        state: &OutpatientViewState,
    ) -> Result<OutpatientDashboard, DashboardError> {
        let query = state.query();
        let (data, master) = futures::join!(
            self.repository.outpatient_data(&query),
            self.master_list()
        );
        let data = data?;

        let series = data.series();
        let rows = to_chart_rows(&data.labels, &series)?;
        let stats = compute_stats(&series)?;

        let mode = state.render_mode();
        let mut master_colors = self.palette.departments.clone();
        if let Some(master) = &master {
            master_colors.extend(master.colors());
        }
        let colors = build_color_map(
            data.series_labels(),
            &master_colors,
            self.palette.default_for(mode),
        );

        let mut departments = vec![
            ALL_DEPARTMENTS.to_string(),
            ALL_DEPARTMENTS_BY_COLOR.to_string(),
        ];
        match &master {
            Some(master) => departments.extend(master.names()),
            None => departments.extend(BUILTIN_DEPARTMENTS.iter().map(|d| d.to_string())),
        }

        tracing::debug!(
            "Built outpatient dashboard for {} ({}): {} rows, {} series, {} colors, {:?}",
            query.department,
            query.period,
            rows.len(),
            series.len(),
            colors.len(),
            mode
        );

        Ok(OutpatientDashboard {
            title: data.title.clone(),
            heading: outpatient_heading(state.department(), mode),
            render_mode: mode,
            rows,
            stats,
            colors,
            series_styles: data.styles(),
            departments,
            filter: state.applied_filter(),
            last_updated: Utc::now(),
        })
    }

    pub async fn overview(&self) -> Result<Overview, DashboardError> {
        let query = OutpatientQuery {
            department: ALL_DEPARTMENTS.to_string(),
            period: Period::Monthly,
            start_date: Some(OVERVIEW_START.to_string()),
            end_date: Some(OVERVIEW_END.to_string()),
        };

        let (inpatient, outpatient, master) = futures::join!(
            self.repository.inpatient_data(),
            self.repository.outpatient_data(&query),
            self.master_list()
        );
        let inpatient = inpatient?;
        let outpatient = outpatient?;

        let inpatient_series = [inpatient.as_series()];
        let inpatient_summary = InpatientSummary {
            rows: to_chart_rows(&inpatient.labels, &inpatient_series)?,
            total: compute_stats(&inpatient_series)?.total,
            ward_count: inpatient.labels.len(),
        };

        let department_count = match &master {
            Some(master) => master.names().len(),
            None => BUILTIN_DEPARTMENTS.len(),
        };
        let outpatient_summary = OutpatientSummary {
            rows: first_series_rows(&outpatient)?,
            latest: outpatient
                .datasets
                .first()
                .and_then(|d| d.data.last().copied())
                .unwrap_or(0),
            department_count,
        };

        Ok(Overview {
            inpatient: inpatient_summary,
            outpatient: outpatient_summary,
            last_updated: Utc::now(),
        })
    }

    /// The master list only adds colors and names, so a failed fetch degrades
    /// to the built-in palette instead of failing the page.
    async fn master_list(&self) -> Option<MasterList> {
        match self.repository.departments().await {
            Ok(entries) => Some(MasterList::new(entries)),
            Err(e) => {
                tracing::warn!("Department master unavailable, using built-in palette: {:#}", e);
                None
            }
        }
    }
}

/// Rows for the first dataset only, zero-filled when there is none
fn first_series_rows(data: &MultiSeriesDataset) -> Result<Vec<ChartRow>, AggregationError> {
    let zeros;
    let values: &[i64] = match data.datasets.first() {
        Some(dataset) => &dataset.data,
        None => {
            zeros = vec![0; data.labels.len()];
            &zeros
        }
    };
    to_chart_rows(&data.labels, &[SeriesInput::new(SINGLE_SERIES_LABEL, values)])
}
