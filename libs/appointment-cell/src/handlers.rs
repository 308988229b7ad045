// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_models::{Appointment, AppointmentStatus};

use crate::models::{AppointmentListQuery, BookingDraft, BookingOptions, UpdateStatusRequest};
use crate::services::{validate_draft, AppointmentService, BookingService};

// ==============================================================================
// BOOKING HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_booking_options(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<BookingOptions>, AppError> {
    let booking_service = BookingService::new(&state);

    Ok(Json(booking_service.load_booking_options().await))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppConfig>>,
    Json(draft): Json<BookingDraft>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    validate_draft(&draft)?;

    let booking_service = BookingService::new(&state);

    // Without the type list the configured default duration applies.
    let types = booking_service.appointment_types().await.unwrap_or_else(|e| {
        warn!("Appointment types unavailable, using default duration: {}", e);
        Vec::new()
    });

    let appointment = booking_service.submit(&draft, &types).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "appointment": appointment,
            "message": "Appointment booked successfully"
        })),
    ))
}

// ==============================================================================
// APPOINTMENT HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::new(&state);

    let page = appointment_service.list_appointments(&query).await?;

    Ok(Json(json!(page)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppConfig>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let appointment_service = AppointmentService::new(&state);

    let appointment = appointment_service
        .get_appointment(&appointment_id)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                AppError::NotFound("Appointment not found".to_string())
            } else {
                e.into()
            }
        })?;

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<AppConfig>>,
    Path(appointment_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Appointment>, AppError> {
    if request.status == AppointmentStatus::Unknown {
        return Err(AppError::ValidationError("Unknown appointment status".to_string()));
    }

    let appointment_service = AppointmentService::new(&state);
    let appointment = appointment_service
        .update_status(&appointment_id, request.status)
        .await?;

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<AppConfig>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::new(&state);

    appointment_service.delete_appointment(&appointment_id).await?;

    Ok(Json(json!({
        "deleted": true,
        "id": appointment_id
    })))
}
