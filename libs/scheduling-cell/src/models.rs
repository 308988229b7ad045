// libs/scheduling-cell/src/models.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_api::ApiError;
use shared_models::{error::AppError, RecordId};
use shared_utils::time_format::{format_12_hour, format_wire_time, TimeFormatError};

// ==============================================================================
// SLOTS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Slot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    pub fn label(&self) -> String {
        format_12_hour(self.start)
    }

    pub fn overlaps(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start < end && self.end > start
    }
}

/// Slot as handed to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    pub label: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<&Slot> for SlotView {
    fn from(slot: &Slot) -> Self {
        Self {
            label: slot.label(),
            start_time: format_wire_time(slot.start),
            end_time: format_wire_time(slot.end),
        }
    }
}

/// An open slot published by the backend as an `available` appointment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlot {
    pub appointment_id: RecordId,
    pub label: String,
    pub start_time: String,
}

// ==============================================================================
// CALENDAR
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub previous_month: NaiveDate,
    pub next_month: NaiveDate,
    pub days: Vec<CalendarDay>,
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// A complete practitioner/date/type choice. Slot fetches only run once
/// all three are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSelection {
    pub practitioner_id: String,
    pub date: NaiveDate,
    pub appointment_type_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotQuery {
    /// Caller-chosen id of the booking view issuing the request. Loads that
    /// share a view id supersede one another.
    pub view: Option<String>,
    pub practitioner_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub appointment_type_id: Option<String>,
}

impl SlotQuery {
    pub fn selection(&self) -> Option<SlotSelection> {
        let practitioner_id = non_empty(self.practitioner_id.as_deref())?;
        let appointment_type_id = non_empty(self.appointment_type_id.as_deref())?;
        let date = self.date?;

        Some(SlotSelection {
            practitioner_id,
            date,
            appointment_type_id,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarQuery {
    pub date: Option<NaiveDate>,
    pub selected: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSlotsQuery {
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotsResponse<T> {
    /// False while the selection is incomplete.
    pub ready: bool,
    /// True when a newer request replaced this one before it finished.
    pub stale: bool,
    pub slots: Vec<T>,
}

impl<T> SlotsResponse<T> {
    pub fn ready(slots: Vec<T>) -> Self {
        Self { ready: true, stale: false, slots }
    }

    pub fn not_ready() -> Self {
        Self { ready: false, stale: false, slots: Vec::new() }
    }

    pub fn stale() -> Self {
        Self { ready: true, stale: true, slots: Vec::new() }
    }
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Time(#[from] TimeFormatError),
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::Api(e) => e.into(),
            SchedulingError::Time(e) => AppError::Internal(e.to_string()),
        }
    }
}
