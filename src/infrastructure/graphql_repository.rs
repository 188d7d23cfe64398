// GraphQL repository implementation
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::filter::OutpatientQuery;
use crate::domain::master::MasterEntry;
use crate::domain::series::{LabeledSeries, MultiSeriesDataset};
use crate::infrastructure::graphql_client::GraphQlClient;
use crate::infrastructure::queries::{GET_DEPARTMENTS, GET_INPATIENT_DATA, GET_OUTPATIENT_DATA};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GraphQlRepository {
    client: Arc<GraphQlClient>,
}

impl GraphQlRepository {
    pub fn new(client: Arc<GraphQlClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardRepository for GraphQlRepository {
    async fn inpatient_data(&self) -> Result<LabeledSeries> {
        let data: LabeledSeries = self
            .client
            .query(GET_INPATIENT_DATA, json!({}), "inpatientData")
            .await
            .context("Failed to fetch inpatient data")?;

        tracing::debug!("Fetched inpatient data: {} labels", data.labels.len());
        Ok(data)
    }

    async fn outpatient_data(&self, query: &OutpatientQuery) -> Result<MultiSeriesDataset> {
        tracing::debug!(
            "Fetching outpatient data: department={}, period={}, start={:?}, end={:?}",
            query.department,
            query.period,
            query.start_date,
            query.end_date
        );

        let data: MultiSeriesDataset = self
            .client
            .query(GET_OUTPATIENT_DATA, query, "outpatientData")
            .await
            .with_context(|| format!("Failed to fetch outpatient data for {}", query.department))?;

        tracing::debug!(
            "Fetched outpatient data: {} labels, {} datasets",
            data.labels.len(),
            data.datasets.len()
        );
        Ok(data)
    }

    async fn departments(&self) -> Result<Vec<MasterEntry>> {
        let entries: Vec<MasterEntry> = self
            .client
            .query(GET_DEPARTMENTS, json!({}), "departments")
            .await
            .context("Failed to fetch department master")?;

        tracing::debug!("Fetched {} department master entries", entries.len());
        Ok(entries)
    }
}
