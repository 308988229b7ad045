use anyhow::{Context, Result};
use tracing::debug;

use shared_api::{ClinicApiClient, ListFilters, Page, Resource};
use shared_config::AppConfig;

use crate::models::{CallQuery, CallRecord, Reminder, ReminderQuery};

pub struct CallService {
    api: ClinicApiClient,
}

impl CallService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ClinicApiClient::new(config),
        }
    }

    pub async fn list_calls(&self, query: &CallQuery) -> Result<Page<CallRecord>> {
        debug!("Listing calls with {:?}", query);

        let filters = ListFilters::new()
            .with_opt("status", query.status.as_deref())
            .with_opt("search", query.search.as_deref())
            .with_opt("start_date", query.start_date);

        self.api
            .list(Resource::Calls, &filters)
            .await
            .context("Failed to load call history")
    }

    /// A single call including its transcript and summary.
    pub async fn get_call(&self, call_id: &str) -> Result<CallRecord> {
        debug!("Fetching call {}", call_id);

        self.api
            .get(Resource::Calls, call_id)
            .await
            .with_context(|| format!("Failed to load call {}", call_id))
    }

    pub async fn list_reminders(&self, query: &ReminderQuery) -> Result<Page<Reminder>> {
        debug!("Listing reminders with {:?}", query);

        let filters = ListFilters::new()
            .with_opt("status", query.status.as_deref())
            .with_opt("patient_id", query.patient_id.as_deref());

        self.api
            .list(Resource::Reminders, &filters)
            .await
            .context("Failed to load reminders")
    }
}
