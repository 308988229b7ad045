use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{
    AvailableSlot, CalendarMonth, CalendarQuery, GenerateSlotsQuery, SlotQuery, SlotView,
    SlotsResponse,
};
use crate::services::{build_calendar_month, generate_slots, SlotLoad, SlotLoader, SlotService};

#[derive(Clone)]
pub struct SchedulingState {
    pub config: Arc<AppConfig>,
    pub loader: Arc<SlotLoader>,
}

impl SchedulingState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let loader = Arc::new(SlotLoader::new(&config));
        Self { config, loader }
    }
}

pub async fn get_calendar(
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarMonth>, AppError> {
    let today = Local::now().date_naive();
    let reference = query.date.or(query.selected).unwrap_or(today);

    Ok(Json(build_calendar_month(reference, today, query.selected)))
}

pub async fn generate_time_slots(
    Query(query): Query<GenerateSlotsQuery>,
) -> Result<Json<Value>, AppError> {
    let slots = generate_slots(&query.start_time, &query.end_time, query.duration_minutes)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(Json(json!({ "slots": slots })))
}

pub async fn get_available_slots(
    State(state): State<SchedulingState>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<SlotsResponse<AvailableSlot>>, AppError> {
    let view = query.view.as_deref().map(str::trim).filter(|v| !v.is_empty());

    let Some(selection) = query.selection() else {
        debug!("Slot selection incomplete, skipping fetch");
        if let Some(view) = view {
            state.loader.reset(view).await;
        }
        return Ok(Json(SlotsResponse::not_ready()));
    };

    match state.loader.load(view, &selection).await? {
        SlotLoad::Fresh(slots) => Ok(Json(SlotsResponse::ready(slots))),
        SlotLoad::Superseded => Ok(Json(SlotsResponse::stale())),
    }
}

pub async fn get_working_hours_slots(
    State(state): State<SchedulingState>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<SlotsResponse<SlotView>>, AppError> {
    let Some(selection) = query.selection() else {
        return Ok(Json(SlotsResponse::not_ready()));
    };

    let service = SlotService::new(&state.config);
    let slots = service.working_hours_slots(&selection).await?;

    Ok(Json(SlotsResponse::ready(slots.iter().map(SlotView::from).collect())))
}
