// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, inpatient, outpatient, overview};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/overview", get(overview))
        .route("/api/inpatient", get(inpatient))
        .route("/api/outpatient", get(outpatient))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_repository::DashboardRepository;
    use crate::application::dashboard_service::DashboardService;
    use crate::domain::filter::OutpatientQuery;
    use crate::domain::master::MasterEntry;
    use crate::domain::series::{Dataset, LabeledSeries, MultiSeriesDataset};
    use crate::infrastructure::config::PaletteConfig;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    struct StaticRepository {
        healthy: bool,
    }

    #[async_trait]
    impl DashboardRepository for StaticRepository {
        async fn inpatient_data(&self) -> anyhow::Result<LabeledSeries> {
            if !self.healthy {
                anyhow::bail!("connection refused");
            }
            Ok(LabeledSeries {
                title: "入院患者数（病棟別）".to_string(),
                labels: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                values: vec![10, 20, 30],
            })
        }

        async fn outpatient_data(&self, query: &OutpatientQuery) -> anyhow::Result<MultiSeriesDataset> {
            if !self.healthy {
                anyhow::bail!("connection refused");
            }
            let datasets = if query.department == "全科(色分)" {
                vec![
                    Dataset {
                        label: "内科".to_string(),
                        data: vec![5, 7],
                        border_color: None,
                        background_color: None,
                        fill: Some(true),
                    },
                    Dataset {
                        label: "小児科".to_string(),
                        data: vec![3, 9],
                        border_color: None,
                        background_color: None,
                        fill: Some(true),
                    },
                ]
            } else {
                vec![Dataset {
                    label: query.department.clone(),
                    data: vec![8, 16],
                    border_color: None,
                    background_color: None,
                    fill: None,
                }]
            };
            Ok(MultiSeriesDataset {
                title: "外来患者数".to_string(),
                labels: vec!["Jan".to_string(), "Feb".to_string()],
                datasets,
            })
        }

        async fn departments(&self) -> anyhow::Result<Vec<MasterEntry>> {
            anyhow::bail!("master not deployed")
        }
    }

    fn app(healthy: bool) -> Router {
        let repository = Arc::new(StaticRepository { healthy });
        let state = Arc::new(AppState {
            dashboard_service: DashboardService::new(repository, PaletteConfig::default()),
        });
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app(true)
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_inpatient() {
        let (status, body) = get_json(app(true), "/api/inpatient").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["wardCount"], 3);
        assert_eq!(body["rows"][0], serde_json::json!({ "category": "A", "patients": 10 }));
        assert_eq!(
            body["stats"],
            serde_json::json!({ "total": 60, "average": 20, "max": 30, "min": 10 })
        );
    }

    #[tokio::test]
    async fn test_outpatient_stacked() {
        let uri = "/api/outpatient?department=%E5%85%A8%E7%A7%91(%E8%89%B2%E5%88%86)&period=%E6%9C%88%E6%AF%8E";
        let (status, body) = get_json(app(true), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["renderMode"], "stacked");
        assert_eq!(body["filter"]["department"], "全科(色分)");
        assert_eq!(body["filter"]["period"], "月毎");
        assert_eq!(
            body["rows"][1],
            serde_json::json!({ "category": "Feb", "内科": 7, "小児科": 9 })
        );
        assert_eq!(body["stats"]["total"], 24);
        assert_eq!(body["stats"]["average"], 6);
        assert_eq!(
            body["colors"],
            serde_json::json!([
                { "label": "内科", "color": "#ef4444" },
                { "label": "小児科", "color": "#3b82f6" }
            ])
        );
        assert_eq!(
            body["seriesStyles"][0],
            serde_json::json!({
                "label": "内科",
                "borderColor": null,
                "backgroundColor": null,
                "fill": true
            })
        );
    }

    #[tokio::test]
    async fn test_outpatient_defaults() {
        let (status, body) = get_json(app(true), "/api/outpatient").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["renderMode"], "overlaid");
        assert_eq!(body["heading"], "全科の患者数推移");
        assert_eq!(body["filter"]["period"], "日毎");
        assert_eq!(body["filter"]["startDate"], "2025-01-01");
        assert_eq!(body["colors"][0]["color"], "#8b5cf6");
    }

    #[tokio::test]
    async fn test_outpatient_bad_period() {
        let (status, body) = get_json(app(true), "/api/outpatient?period=weekly").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let (status, body) = get_json(app(false), "/api/overview").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_overview() {
        let (status, body) = get_json(app(true), "/api/overview").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["inpatient"]["total"], 60);
        assert_eq!(body["outpatient"]["latest"], 16);
        assert_eq!(body["outpatient"]["departmentCount"], 3);
    }
}
