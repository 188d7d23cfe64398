// HTTP request handlers
use crate::application::view_state::{FilterParams, OutpatientViewState};
use crate::domain::dashboard::{InpatientDashboard, OutpatientDashboard, Overview};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiResult;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutpatientParams {
    pub department: Option<String>,
    pub period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<OutpatientParams> for FilterParams {
    fn from(params: OutpatientParams) -> Self {
        Self {
            department: params.department,
            period: params.period,
            start_date: params.start_date,
            end_date: params.end_date,
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Landing page summary of both dashboards
pub async fn overview(State(state): State<Arc<AppState>>) -> ApiResult<Json<Overview>> {
    let overview = state.dashboard_service.overview().await?;
    Ok(Json(overview))
}

pub async fn inpatient(State(state): State<Arc<AppState>>) -> ApiResult<Json<InpatientDashboard>> {
    let dashboard = state.dashboard_service.inpatient_dashboard().await?;
    Ok(Json(dashboard))
}

/// Outpatient dashboard; absent parameters keep the filter panel defaults
pub async fn outpatient(
    Query(params): Query<OutpatientParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<OutpatientDashboard>> {
    let params: FilterParams = params.into();
    let mut view = OutpatientViewState::default();
    view.apply(&params)?;

    let dashboard = state.dashboard_service.outpatient_dashboard(&view).await?;
    Ok(Json(dashboard))
}
