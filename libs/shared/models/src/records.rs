// libs/shared/models/src/records.rs
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ==============================================================================
// IDENTIFIERS
// ==============================================================================

/// Backend identifiers show up as JSON numbers on some resources and as
/// strings on others. Both compare by their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    pub fn matches(&self, other: &str) -> bool {
        match self {
            RecordId::Number(n) => other.trim().parse::<i64>().map(|o| o == *n).unwrap_or(false),
            RecordId::Text(s) => s == other.trim(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(n) => RecordId::Number(n),
            Err(_) => RecordId::Text(value.trim().to_string()),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

fn default_true() -> bool {
    true
}

/// An explicit `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ==============================================================================
// APPOINTMENTS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Available,
    Scheduled,
    Booked,
    Confirmed,
    Completed,
    #[serde(alias = "canceled")]
    Cancelled,
    NoShow,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    /// Whether an appointment in this status occupies the practitioner's time.
    pub fn blocks_time(&self) -> bool {
        !matches!(self, AppointmentStatus::Available | AppointmentStatus::Cancelled)
    }
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        AppointmentStatus::Unknown
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Available => write!(f, "available"),
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Booked => write!(f, "booked"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::NoShow => write!(f, "no_show"),
            AppointmentStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    #[serde(default)]
    pub patient_id: Option<RecordId>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub patient_phone: Option<String>,
    #[serde(default)]
    pub practitioner_id: Option<RecordId>,
    #[serde(default)]
    pub appointment_type_id: Option<RecordId>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Appointment {
    pub fn is_for(&self, practitioner_id: &str, appointment_type_id: &str) -> bool {
        let practitioner_matches = self
            .practitioner_id
            .as_ref()
            .map(|id| id.matches(practitioner_id))
            .unwrap_or(false);
        let type_matches = self
            .appointment_type_id
            .as_ref()
            .map(|id| id.matches(appointment_type_id))
            .unwrap_or(false);

        practitioner_matches && type_matches
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentType {
    pub id: RecordId,
    pub name: String,
    #[serde(alias = "duration")]
    pub duration_minutes: i64,
    #[serde(default)]
    pub description: Option<String>,
}

// ==============================================================================
// PEOPLE & SCHEDULES
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Practitioner {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A practitioner's bookable window on one weekday. `day_of_week` runs
/// from 0 (Sunday) to 6 (Saturday).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    pub id: RecordId,
    pub practitioner_id: RecordId,
    pub day_of_week: u32,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_status_reads_as_unknown_and_blocks() {
        let appointment: Appointment = serde_json::from_value(json!({
            "id": 21,
            "practitioner_id": 4,
            "start_time": "10:00:00",
            "status": null
        }))
        .unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Unknown);
        assert!(appointment.status.blocks_time());
    }

    #[test]
    fn test_missing_status_reads_as_unknown() {
        let appointment: Appointment = serde_json::from_value(json!({ "id": "a-1" })).unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Unknown);
        assert_eq!(appointment.id, RecordId::Text("a-1".to_string()));
    }
}
