// Repository trait for dashboard data access
use crate::domain::filter::OutpatientQuery;
use crate::domain::master::MasterEntry;
use crate::domain::series::{LabeledSeries, MultiSeriesDataset};
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Inpatient counts per ward
    async fn inpatient_data(&self) -> anyhow::Result<LabeledSeries>;

    /// Outpatient counts for the given department and period
    async fn outpatient_data(&self, query: &OutpatientQuery) -> anyhow::Result<MultiSeriesDataset>;

    /// Department master list, including hidden entries
    async fn departments(&self) -> anyhow::Result<Vec<MasterEntry>>;
}
