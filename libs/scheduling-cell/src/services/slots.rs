use chrono::{Datelike, NaiveTime};
use tracing::{debug, warn};

use shared_api::{ClinicApiClient, ListFilters, Resource};
use shared_config::AppConfig;
use shared_models::{Appointment, AppointmentType, WorkingHours};
use shared_utils::time_format::{
    add_minutes_same_day, from_minutes, minutes_since_midnight, parse_wire_time, TimeFormatError,
    MINUTES_PER_DAY,
};

use crate::models::{SchedulingError, Slot, SlotSelection};

/// Splits `[start, end)` into back-to-back slots of `duration_minutes`.
/// A trailing remainder shorter than one slot is dropped.
pub fn generate_slot_windows(start: NaiveTime, end: NaiveTime, duration_minutes: i64) -> Vec<Slot> {
    if duration_minutes <= 0 || start >= end {
        return Vec::new();
    }

    let end_minutes = minutes_since_midnight(end) as i64;
    let mut current = minutes_since_midnight(start) as i64;
    let mut slots = Vec::new();

    while current + duration_minutes <= end_minutes {
        let next = current + duration_minutes;
        if let (Some(slot_start), Some(slot_end)) = (from_minutes(current as u32), from_minutes(next as u32)) {
            slots.push(Slot { start: slot_start, end: slot_end });
        }
        current = next;
    }

    slots
}

/// 12-hour labels for every slot between two 24-hour wire times.
pub fn generate_slots(start_time: &str, end_time: &str, duration_minutes: i64) -> Result<Vec<String>, TimeFormatError> {
    let start = parse_wire_time(start_time)?;
    let end = parse_wire_time(end_time)?;

    Ok(generate_slot_windows(start, end, duration_minutes)
        .iter()
        .map(Slot::label)
        .collect())
}

pub struct SlotService {
    api: ClinicApiClient,
    default_duration: i64,
}

impl SlotService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ClinicApiClient::new(config),
            default_duration: config.default_appointment_minutes,
        }
    }

    /// Slots inside the practitioner's working hours for the selected day,
    /// minus anything already taken by a booking.
    pub async fn working_hours_slots(&self, selection: &SlotSelection) -> Result<Vec<Slot>, SchedulingError> {
        debug!(
            "Generating slots for practitioner {} on {}",
            selection.practitioner_id, selection.date
        );

        let day_of_week = selection.date.weekday().num_days_from_sunday();

        let hours_filters = ListFilters::new()
            .with("practitioner_id", &selection.practitioner_id)
            .with("day_of_week", day_of_week);
        let windows: Vec<WorkingHours> = self
            .api
            .list(Resource::WorkingHours, &hours_filters)
            .await?
            .into_items();

        let duration = self.resolve_duration(&selection.appointment_type_id).await;

        let mut slots = Vec::new();
        for window in windows.iter().filter(|w| {
            w.is_active
                && w.day_of_week == day_of_week
                && w.practitioner_id.matches(&selection.practitioner_id)
        }) {
            let start = parse_wire_time(&window.start_time)?;
            let end = parse_wire_time(&window.end_time)?;
            slots.extend(generate_slot_windows(start, end, duration));
        }

        if slots.is_empty() {
            return Ok(slots);
        }

        let booked_filters = ListFilters::new()
            .with("practitioner_id", &selection.practitioner_id)
            .with("date", selection.date);
        // A booking list that cannot be read in full must not read as a free day.
        let booked: Vec<Appointment> = self
            .api
            .list_complete(Resource::Appointments, &booked_filters)
            .await?
            .into_items();

        let end_of_day = from_minutes(MINUTES_PER_DAY - 1).unwrap_or_default();
        let mut busy = Vec::new();
        for appointment in booked.iter().filter(|a| {
            a.status.blocks_time()
                && a.date.map_or(true, |d| d == selection.date)
                && a.practitioner_id
                    .as_ref()
                    .map_or(false, |id| id.matches(&selection.practitioner_id))
        }) {
            let Some(start_time) = appointment.start_time.as_deref() else {
                continue;
            };
            let start = parse_wire_time(start_time)?;
            let end = match appointment.end_time.as_deref() {
                Some(end_time) => parse_wire_time(end_time)?,
                None => add_minutes_same_day(start, duration).unwrap_or(end_of_day),
            };
            busy.push((start, end));
        }

        slots.sort();
        slots.dedup();
        slots.retain(|slot| !busy.iter().any(|(start, end)| slot.overlaps(*start, *end)));

        debug!("{} open slots after removing {} bookings", slots.len(), busy.len());
        Ok(slots)
    }

    async fn resolve_duration(&self, appointment_type_id: &str) -> i64 {
        match self
            .api
            .get::<AppointmentType>(Resource::AppointmentTypes, appointment_type_id)
            .await
        {
            Ok(kind) if kind.duration_minutes > 0 => kind.duration_minutes,
            Ok(_) => self.default_duration,
            Err(e) => {
                warn!(
                    "Could not load appointment type {}, using {} minutes: {}",
                    appointment_type_id, self.default_duration, e
                );
                self.default_duration
            }
        }
    }
}
