// =====================================================================================
// DASHBOARD CELL HANDLERS
// =====================================================================================

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::instrument;

use shared_api::{ApiError, Page};
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{CallQuery, CallRecord, DashboardOverview, Reminder, ReminderQuery};
use crate::services::{CallService, OverviewService};

/// Backend failures keep their HTTP meaning; anything else is internal.
fn service_error(err: anyhow::Error) -> AppError {
    match err.downcast::<ApiError>() {
        Ok(api_error) => api_error.into(),
        Err(other) => AppError::Internal(format!("{:#}", other)),
    }
}

#[instrument(skip(state))]
pub async fn get_overview(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<DashboardOverview>, AppError> {
    let overview = OverviewService::new(&state)
        .overview()
        .await
        .map_err(service_error)?;

    Ok(Json(overview))
}

#[instrument(skip(state))]
pub async fn list_calls(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<CallQuery>,
) -> Result<Json<Page<CallRecord>>, AppError> {
    let calls = CallService::new(&state)
        .list_calls(&query)
        .await
        .map_err(service_error)?;

    Ok(Json(calls))
}

#[instrument(skip(state))]
pub async fn get_call(
    State(state): State<Arc<AppConfig>>,
    Path(call_id): Path<String>,
) -> Result<Json<CallRecord>, AppError> {
    let call = CallService::new(&state)
        .get_call(&call_id)
        .await
        .map_err(service_error)?;

    Ok(Json(call))
}

#[instrument(skip(state))]
pub async fn list_reminders(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<ReminderQuery>,
) -> Result<Json<Page<Reminder>>, AppError> {
    let reminders = CallService::new(&state)
        .list_reminders(&query)
        .await
        .map_err(service_error)?;

    Ok(Json(reminders))
}
