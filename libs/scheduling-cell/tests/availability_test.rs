use chrono::NaiveDate;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scheduling_cell::models::{SchedulingError, SlotSelection};
use scheduling_cell::services::{AvailabilityService, SlotService};
use shared_models::RecordId;
use shared_utils::test_utils::{MockApiResponses, TestConfig};

fn selection(date: &str) -> SlotSelection {
    SlotSelection {
        practitioner_id: "4".to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        appointment_type_id: "2".to_string(),
    }
}

#[tokio::test]
async fn test_available_slots_keep_backend_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("date", "2026-10-20"))
        .and(query_param("status", "available"))
        .and(query_param("practitioner_id", "4"))
        .and(query_param("appointment_type_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::appointment(10, 4, 2, "11:00:00", "available"),
            MockApiResponses::appointment(11, 4, 2, "09:00:00", "booked"),
            MockApiResponses::appointment(12, 4, 2, "09:30:00", "available"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = TestConfig::with_base_url(&mock_server.uri()).to_app_config();
    let slots = AvailabilityService::new(&config)
        .available_slots(&selection("2026-10-20"))
        .await
        .unwrap();

    let labels: Vec<&str> = slots.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["11:00am", "9:30am"]);
    assert_eq!(slots[0].appointment_id, RecordId::Number(10));
}

#[tokio::test]
async fn test_available_slots_accepts_paginated_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::paginated(vec![
            MockApiResponses::appointment(10, 4, 2, "14:15:00", "available"),
        ])))
        .mount(&mock_server)
        .await;

    let config = TestConfig::with_base_url(&mock_server.uri()).to_app_config();
    let slots = AvailabilityService::new(&config)
        .available_slots(&selection("2026-10-20"))
        .await
        .unwrap();

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].label, "2:15pm");
}

#[tokio::test]
async fn test_non_list_response_means_no_slots() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "maintenance window"
        })))
        .mount(&mock_server)
        .await;

    let config = TestConfig::with_base_url(&mock_server.uri()).to_app_config();
    let slots = AvailabilityService::new(&config)
        .available_slots(&selection("2026-10-20"))
        .await
        .unwrap();

    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_records_for_other_days_are_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::appointment(10, 4, 2, "09:00:00", "available"),
        ])))
        .mount(&mock_server)
        .await;

    // Fixture records are dated 2026-10-20.
    let config = TestConfig::with_base_url(&mock_server.uri()).to_app_config();
    let slots = AvailabilityService::new(&config)
        .available_slots(&selection("2026-10-21"))
        .await
        .unwrap();

    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_working_hours_slots_skip_booked_times() {
    let mock_server = MockServer::start().await;

    // 2026-10-20 is a Tuesday.
    Mock::given(method("GET"))
        .and(path("/working-hours"))
        .and(query_param("practitioner_id", "4"))
        .and(query_param("day_of_week", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::working_hours(1, 4, 2, "09:00:00", "11:00:00"),
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/appointment-types/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockApiResponses::appointment_type(2, "Consultation", 30),
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("date", "2026-10-20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::booked_appointment(20, 4, "09:30:00", "10:00:00"),
            MockApiResponses::appointment(21, 4, 2, "10:00:00", "cancelled"),
        ])))
        .mount(&mock_server)
        .await;

    let config = TestConfig::with_base_url(&mock_server.uri()).to_app_config();
    let slots = SlotService::new(&config)
        .working_hours_slots(&selection("2026-10-20"))
        .await
        .unwrap();

    let labels: Vec<String> = slots.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["9:00am", "10:00am", "10:30am"]);
}

#[tokio::test]
async fn test_working_hours_slots_fall_back_to_default_duration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/working-hours"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::working_hours(1, 4, 2, "13:00", "14:00"),
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/appointment-types/2"))
        .respond_with(ResponseTemplate::new(404).set_body_json(
            MockApiResponses::error_response("Not found"),
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let config = TestConfig::with_base_url(&mock_server.uri()).to_app_config();
    let slots = SlotService::new(&config)
        .working_hours_slots(&selection("2026-10-20"))
        .await
        .unwrap();

    let labels: Vec<String> = slots.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["1:00pm", "1:30pm"]);
}

async fn mount_tuesday_hours(mock_server: &MockServer, booked: Value) {
    Mock::given(method("GET"))
        .and(path("/working-hours"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::working_hours(1, 4, 2, "09:00:00", "11:00:00"),
        ])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/appointment-types/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockApiResponses::appointment_type(2, "Consultation", 30),
        ))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(booked))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_booking_with_null_status_still_blocks_its_slot() {
    let mock_server = MockServer::start().await;

    let mut unlabelled = MockApiResponses::booked_appointment(21, 4, "10:00:00", "10:30:00");
    unlabelled["status"] = json!(null);

    mount_tuesday_hours(&mock_server, json!([
        MockApiResponses::booked_appointment(20, 4, "09:30:00", "10:00:00"),
        unlabelled,
    ]))
    .await;

    let config = TestConfig::with_base_url(&mock_server.uri()).to_app_config();
    let slots = SlotService::new(&config)
        .working_hours_slots(&selection("2026-10-20"))
        .await
        .unwrap();

    let labels: Vec<String> = slots.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["9:00am", "10:30am"]);
}

#[tokio::test]
async fn test_unreadable_booking_fails_instead_of_freeing_the_day() {
    let mock_server = MockServer::start().await;

    let mut broken = MockApiResponses::booked_appointment(21, 4, "10:00:00", "10:30:00");
    broken["id"] = json!(null);

    mount_tuesday_hours(&mock_server, json!([
        MockApiResponses::booked_appointment(20, 4, "09:30:00", "10:00:00"),
        broken,
    ]))
    .await;

    let config = TestConfig::with_base_url(&mock_server.uri()).to_app_config();
    let result = SlotService::new(&config)
        .working_hours_slots(&selection("2026-10-20"))
        .await;

    assert!(matches!(result, Err(SchedulingError::Api(_))));
}

#[tokio::test]
async fn test_booking_list_with_unexpected_shape_is_an_error() {
    let mock_server = MockServer::start().await;

    mount_tuesday_hours(&mock_server, json!({ "detail": "maintenance" })).await;

    let config = TestConfig::with_base_url(&mock_server.uri()).to_app_config();
    let result = SlotService::new(&config)
        .working_hours_slots(&selection("2026-10-20"))
        .await;

    assert!(matches!(result, Err(SchedulingError::Api(_))));
}
