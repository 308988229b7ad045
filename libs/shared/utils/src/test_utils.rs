use std::sync::Arc;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::{Session, SessionUser};

pub struct TestConfig {
    pub api_base_url: String,
    pub demo_email: String,
    pub demo_password: String,
    pub default_appointment_minutes: i64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            demo_email: "demo@clinic.local".to_string(),
            demo_password: "demo1234".to_string(),
            default_appointment_minutes: 30,
        }
    }
}

impl TestConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_base_url: self.api_base_url.clone(),
            api_key: "test-api-key".to_string(),
            api_timeout_secs: 5,
            default_appointment_minutes: self.default_appointment_minutes,
            demo_email: self.demo_email.clone(),
            demo_password: self.demo_password.clone(),
            session_file: ".test-session.json".to_string(),
            port: 0,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub email: String,
    pub name: String,
    pub role: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            email: "demo@clinic.local".to_string(),
            name: "Demo Receptionist".to_string(),
            role: "staff".to_string(),
        }
    }
}

impl TestUser {
    pub fn to_session(&self) -> Session {
        Session::new(SessionUser {
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        })
    }
}

/// Canned backend payloads, snake_case as the clinic API sends them.
pub struct MockApiResponses;

impl MockApiResponses {
    pub fn appointment(id: i64, practitioner_id: i64, appointment_type_id: i64, start_time: &str, status: &str) -> Value {
        json!({
            "id": id,
            "patient_id": null,
            "patient_name": null,
            "patient_phone": null,
            "practitioner_id": practitioner_id,
            "appointment_type_id": appointment_type_id,
            "date": "2026-10-20",
            "start_time": start_time,
            "end_time": null,
            "status": status,
            "notes": null
        })
    }

    pub fn booked_appointment(id: i64, practitioner_id: i64, start_time: &str, end_time: &str) -> Value {
        json!({
            "id": id,
            "patient_id": 12,
            "patient_name": "Aoife Byrne",
            "patient_phone": "+353861234567",
            "practitioner_id": practitioner_id,
            "appointment_type_id": 1,
            "date": "2026-10-20",
            "start_time": start_time,
            "end_time": end_time,
            "status": "scheduled",
            "notes": null
        })
    }

    pub fn appointment_type(id: i64, name: &str, duration_minutes: i64) -> Value {
        json!({
            "id": id,
            "name": name,
            "duration_minutes": duration_minutes,
            "description": null
        })
    }

    pub fn patient(id: i64, first_name: &str, last_name: &str) -> Value {
        json!({
            "id": id,
            "first_name": first_name,
            "last_name": last_name,
            "phone": "+353861234567",
            "email": format!("{}@example.com", first_name.to_lowercase()),
            "date_of_birth": "1988-04-12",
            "is_active": true
        })
    }

    pub fn practitioner(id: i64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "specialty": "General Practice",
            "email": null,
            "phone": null,
            "is_active": true
        })
    }

    pub fn working_hours(id: i64, practitioner_id: i64, day_of_week: u32, start_time: &str, end_time: &str) -> Value {
        json!({
            "id": id,
            "practitioner_id": practitioner_id,
            "day_of_week": day_of_week,
            "start_time": start_time,
            "end_time": end_time,
            "is_active": true
        })
    }

    pub fn call(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "caller_phone": "+353871112233",
            "patient_name": "Ciaran Walsh",
            "status": status,
            "started_at": "2026-10-19T09:12:00Z",
            "ended_at": "2026-10-19T09:15:30Z",
            "duration_seconds": 210,
            "transcript": "Caller asked to move Thursday's appointment.",
            "summary": "Reschedule request for Thursday.",
            "recording_url": null
        })
    }

    pub fn reminder(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "patient_id": 12,
            "appointment_id": 301,
            "message": "Your appointment is tomorrow at 9:30am",
            "remind_at": "2026-10-19T18:00:00Z",
            "channel": "sms",
            "status": status
        })
    }

    pub fn paginated(items: Vec<Value>) -> Value {
        let count = items.len();
        json!({
            "results": items,
            "count": count,
            "page": 1
        })
    }

    pub fn error_response(message: &str) -> Value {
        json!({
            "detail": message
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default();
        let app_config = config.to_app_config();

        assert_eq!(app_config.api_base_url, "http://localhost:8000/api");
        assert_eq!(app_config.api_key(), Some("test-api-key"));
        assert!(app_config.is_configured());
    }

    #[test]
    fn test_session_fixture() {
        let session = TestUser::default().to_session();
        assert_eq!(session.user.email, "demo@clinic.local");
        assert_eq!(session.user.role, "staff");
    }

    #[test]
    fn test_paginated_fixture_counts_items() {
        let body = MockApiResponses::paginated(vec![
            MockApiResponses::practitioner(1, "Dr. Nolan"),
            MockApiResponses::practitioner(2, "Dr. Quinn"),
        ]);
        assert_eq!(body["count"], 2);
        assert_eq!(body["results"][1]["name"], "Dr. Quinn");
    }
}
