// libs/appointment-cell/src/services/booking.rs
use serde_json::to_value;
use tracing::{debug, info, warn};

use shared_api::{ApiError, ClinicApiClient, ListFilters, Resource};
use shared_config::AppConfig;
use shared_models::{Appointment, AppointmentStatus, AppointmentType, Patient, Practitioner, RecordId};
use shared_utils::time_format::{add_minutes_same_day, format_wire_time, parse_wire_time};
use shared_utils::to_24_hour;

use crate::models::{BookingDraft, BookingError, BookingOptions, CreateAppointmentRequest, ValidBooking};

fn present(id: &Option<RecordId>) -> Option<RecordId> {
    match id {
        Some(RecordId::Text(text)) if text.trim().is_empty() => None,
        other => other.clone(),
    }
}

/// Checks required fields in form order: date, time, patient, appointment
/// type, practitioner. The first missing one is reported.
pub fn validate_draft(draft: &BookingDraft) -> Result<ValidBooking, BookingError> {
    let date = draft.selected_date.ok_or(BookingError::MissingDate)?;
    let time_12h = draft
        .selected_time
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(BookingError::MissingTime)?
        .to_string();
    let patient_id = present(&draft.patient_id).ok_or(BookingError::MissingPatient)?;
    let appointment_type_id =
        present(&draft.appointment_type_id).ok_or(BookingError::MissingAppointmentType)?;
    let practitioner_id = present(&draft.practitioner_id).ok_or(BookingError::MissingPractitioner)?;

    Ok(ValidBooking {
        patient_id,
        date,
        time_12h,
        practitioner_id,
        appointment_type_id,
        notes: draft.notes.clone().filter(|n| !n.trim().is_empty()),
    })
}

/// Duration of the chosen type, or `default_minutes` when the type is not in
/// the loaded list or carries no usable duration.
pub fn resolve_duration(types: &[AppointmentType], type_id: &RecordId, default_minutes: i64) -> i64 {
    let wanted = type_id.to_string();
    types
        .iter()
        .find(|t| t.id.matches(&wanted))
        .map(|t| t.duration_minutes)
        .filter(|minutes| *minutes > 0)
        .unwrap_or(default_minutes)
}

/// `"09:30:00"` plus 45 minutes is `"10:15:00"`. Ending at or past midnight
/// is rejected.
pub fn derive_end_time(start_24h: &str, duration_minutes: i64) -> Result<String, BookingError> {
    let start = parse_wire_time(start_24h)?;
    let end = add_minutes_same_day(start, duration_minutes).ok_or(BookingError::CrossesMidnight)?;
    Ok(format_wire_time(end))
}

pub fn build_create_request(
    draft: &BookingDraft,
    types: &[AppointmentType],
    default_minutes: i64,
) -> Result<CreateAppointmentRequest, BookingError> {
    let booking = validate_draft(draft)?;

    let duration = resolve_duration(types, &booking.appointment_type_id, default_minutes);
    let start_time = to_24_hour(&booking.time_12h)?;
    let end_time = derive_end_time(&start_time, duration)?;

    Ok(CreateAppointmentRequest {
        patient_id: booking.patient_id,
        practitioner_id: booking.practitioner_id,
        appointment_type_id: booking.appointment_type_id,
        date: booking.date,
        start_time,
        end_time,
        status: AppointmentStatus::Scheduled,
        notes: booking.notes,
    })
}

pub struct BookingService {
    api: ClinicApiClient,
    default_duration: i64,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ClinicApiClient::new(config),
            default_duration: config.default_appointment_minutes,
        }
    }

    /// Sends a single create request. Failures are returned to the caller
    /// as-is and never retried.
    pub async fn submit(&self, draft: &BookingDraft, types: &[AppointmentType]) -> Result<Appointment, BookingError> {
        let request = build_create_request(draft, types, self.default_duration)?;
        debug!(
            "Booking {} {}-{} with practitioner {}",
            request.date, request.start_time, request.end_time, request.practitioner_id
        );

        let body = to_value(&request).map_err(ApiError::from)?;
        let appointment: Appointment = self.api.create(Resource::Appointments, body).await?;

        info!("Appointment {} booked for {}", appointment.id, request.date);
        Ok(appointment)
    }

    pub async fn appointment_types(&self) -> Result<Vec<AppointmentType>, ApiError> {
        Ok(self
            .api
            .list(Resource::AppointmentTypes, &ListFilters::new())
            .await?
            .into_items())
    }

    /// Loads the three pick lists concurrently. A list that fails to load is
    /// logged and left empty; the others are still returned.
    pub async fn load_booking_options(&self) -> BookingOptions {
        debug!("Loading booking options");

        let no_filters = ListFilters::new();
        let (practitioners, appointment_types, patients) = futures::join!(
            self.api.list::<Practitioner>(Resource::Practitioners, &no_filters),
            self.appointment_types(),
            self.api.list::<Patient>(Resource::Patients, &no_filters),
        );

        BookingOptions {
            practitioners: practitioners
                .map(|page| page.into_items())
                .unwrap_or_else(|e| {
                    warn!("Could not load practitioners: {}", e);
                    Vec::new()
                }),
            appointment_types: appointment_types.unwrap_or_else(|e| {
                warn!("Could not load appointment types: {}", e);
                Vec::new()
            }),
            patients: patients
                .map(|page| page.into_items())
                .unwrap_or_else(|e| {
                    warn!("Could not load patients: {}", e);
                    Vec::new()
                }),
        }
    }
}
