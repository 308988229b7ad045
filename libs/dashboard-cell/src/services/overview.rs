use anyhow::{Context, Result};
use tracing::debug;

use shared_api::ClinicApiClient;
use shared_config::AppConfig;

use crate::models::{CallRecord, DashboardOverview};

pub struct OverviewService {
    api: ClinicApiClient,
}

impl OverviewService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ClinicApiClient::new(config),
        }
    }

    pub async fn overview(&self) -> Result<DashboardOverview> {
        debug!("Fetching dashboard overview");

        let mut overview: DashboardOverview = self
            .api
            .dashboard()
            .await
            .context("Failed to load dashboard overview")?;

        // Calls that already ended are shown in call history, not here.
        overview.live_calls.retain(CallRecord::is_live);

        debug!(
            "Overview: {} appointments today, {} reminders, {} live calls",
            overview.todays_appointments.len(),
            overview.reminders.len(),
            overview.live_calls.len()
        );

        Ok(overview)
    }
}
