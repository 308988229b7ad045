// libs/appointment-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_api::ApiError;
use shared_models::error::AppError;
use shared_models::{AppointmentStatus, AppointmentType, Patient, Practitioner, RecordId};
use shared_utils::TimeFormatError;

// ==============================================================================
// BOOKING
// ==============================================================================

/// In-progress booking as the dashboard form holds it. Every field may still
/// be missing; `selected_time` is the 12-hour slot label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    #[serde(default)]
    pub patient_id: Option<RecordId>,
    #[serde(default)]
    pub selected_date: Option<NaiveDate>,
    #[serde(default)]
    pub selected_time: Option<String>,
    #[serde(default)]
    pub practitioner_id: Option<RecordId>,
    #[serde(default)]
    pub appointment_type_id: Option<RecordId>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A draft with every required field present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
    pub patient_id: RecordId,
    pub date: NaiveDate,
    pub time_12h: String,
    pub practitioner_id: RecordId,
    pub appointment_type_id: RecordId,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: RecordId,
    pub practitioner_id: RecordId,
    pub appointment_type_id: RecordId,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOptions {
    pub practitioners: Vec<Practitioner>,
    pub appointment_types: Vec<AppointmentType>,
    pub patients: Vec<Patient>,
}

// ==============================================================================
// QUERY / REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentListQuery {
    pub status: Option<AppointmentStatus>,
    pub practitioner_id: Option<String>,
    pub appointment_type_id: Option<String>,
    pub patient_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub patient_phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Please select a date")]
    MissingDate,

    #[error("Please select a time slot")]
    MissingTime,

    #[error("Please select a patient")]
    MissingPatient,

    #[error("Please select an appointment type")]
    MissingAppointmentType,

    #[error("Please select a practitioner")]
    MissingPractitioner,

    #[error("Invalid appointment time: {0}")]
    InvalidTime(#[from] TimeFormatError),

    #[error("Appointments must finish before midnight")]
    CrossesMidnight,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Api(e) => e.into(),
            BookingError::InvalidTime(_) => AppError::BadRequest(err.to_string()),
            _ => AppError::ValidationError(err.to_string()),
        }
    }
}
