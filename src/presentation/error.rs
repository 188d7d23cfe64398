// API error types and their HTTP mapping
use crate::application::dashboard_service::DashboardError;
use crate::domain::error::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Dashboard error: {0}")]
    Dashboard(#[from] DashboardError),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Dashboard(DashboardError::Upstream(_)) => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
            }
            ApiError::Dashboard(DashboardError::Aggregation(_)) => {
                (StatusCode::BAD_GATEWAY, "INVALID_UPSTREAM_DATA")
            }
        };

        if status.is_server_error() {
            tracing::error!(error_code = %code, error = ?self, "API error occurred");
        } else {
            tracing::debug!(error_code = %code, error = %self, "Rejected request");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
