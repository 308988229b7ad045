// =====================================================================================
// DASHBOARD CELL MODELS
// =====================================================================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use shared_models::{Appointment, RecordId};

// =====================================================================================
// CALLS
// =====================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    #[serde(alias = "active", alias = "live")]
    InProgress,
    Completed,
    Missed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl Default for CallStatus {
    fn default() -> Self {
        CallStatus::Unknown
    }
}

/// A phone call handled by the clinic's voice assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: RecordId,
    #[serde(default)]
    pub caller_phone: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub status: CallStatus,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_seconds: Option<i64>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub recording_url: Option<String>,
}

impl CallRecord {
    pub fn is_live(&self) -> bool {
        self.status == CallStatus::InProgress
    }
}

// =====================================================================================
// REMINDERS
// =====================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Pending,
    Sent,
    Failed,
    #[serde(alias = "canceled")]
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl Default for ReminderStatus {
    fn default() -> Self {
        ReminderStatus::Unknown
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: RecordId,
    #[serde(default)]
    pub patient_id: Option<RecordId>,
    #[serde(default)]
    pub appointment_id: Option<RecordId>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub remind_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub status: ReminderStatus,
}

// =====================================================================================
// OVERVIEW
// =====================================================================================

/// The backend's dashboard aggregate. Sections the backend leaves out come
/// back empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardOverview {
    #[serde(default)]
    pub metrics: Map<String, Value>,
    #[serde(default, alias = "appointments_today")]
    pub todays_appointments: Vec<Appointment>,
    #[serde(default, alias = "upcoming_reminders")]
    pub reminders: Vec<Reminder>,
    #[serde(default, alias = "active_calls")]
    pub live_calls: Vec<CallRecord>,
}

// =====================================================================================
// QUERIES
// =====================================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReminderQuery {
    pub status: Option<String>,
    pub patient_id: Option<String>,
}
