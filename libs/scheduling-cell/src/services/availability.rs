use tracing::debug;

use shared_api::{ClinicApiClient, ListFilters, Resource};
use shared_config::AppConfig;
use shared_models::{Appointment, AppointmentStatus};
use shared_utils::time_format::{to_12_hour, TimeFormatError};

use crate::models::{AvailableSlot, SchedulingError, SlotSelection};

/// Keeps the `available` records for one practitioner and appointment type,
/// in the order the backend returned them. Ids compare by their text form, so
/// `7` and `"7"` are the same practitioner.
pub fn filter_available_slots(
    records: &[Appointment],
    practitioner_id: &str,
    appointment_type_id: &str,
) -> Result<Vec<AvailableSlot>, TimeFormatError> {
    records
        .iter()
        .filter(|record| record.status == AppointmentStatus::Available)
        .filter(|record| record.is_for(practitioner_id, appointment_type_id))
        .filter_map(|record| record.start_time.as_deref().map(|start| (record, start)))
        .map(|(record, start)| {
            Ok(AvailableSlot {
                appointment_id: record.id.clone(),
                label: to_12_hour(start)?,
                start_time: start.to_string(),
            })
        })
        .collect()
}

pub struct AvailabilityService {
    api: ClinicApiClient,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ClinicApiClient::new(config),
        }
    }

    pub async fn available_slots(&self, selection: &SlotSelection) -> Result<Vec<AvailableSlot>, SchedulingError> {
        debug!(
            "Fetching available slots for practitioner {} type {} on {}",
            selection.practitioner_id, selection.appointment_type_id, selection.date
        );

        let filters = ListFilters::new()
            .with("date", selection.date)
            .with("status", AppointmentStatus::Available)
            .with("practitioner_id", &selection.practitioner_id)
            .with("appointment_type_id", &selection.appointment_type_id);

        let records: Vec<Appointment> = self
            .api
            .list(Resource::Appointments, &filters)
            .await?
            .into_items();

        // The backend may ignore filters it doesn't know, so the date is
        // checked again here along with practitioner and type.
        let same_day: Vec<Appointment> = records
            .into_iter()
            .filter(|record| record.date.map_or(true, |d| d == selection.date))
            .collect();

        let slots = filter_available_slots(
            &same_day,
            &selection.practitioner_id,
            &selection.appointment_type_id,
        )?;

        debug!("{} available slots", slots.len());
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json, Value};
    use shared_models::RecordId;

    fn records(values: Vec<Value>) -> Vec<Appointment> {
        values.into_iter().map(|v| from_value(v).unwrap()).collect()
    }

    #[test]
    fn test_filter_keeps_matching_available_records_in_order() {
        let records = records(vec![
            json!({"id": 3, "practitioner_id": 7, "appointment_type_id": 2, "start_time": "14:00:00", "status": "available"}),
            json!({"id": 1, "practitioner_id": 7, "appointment_type_id": 2, "start_time": "09:00:00", "status": "available"}),
            json!({"id": 2, "practitioner_id": 7, "appointment_type_id": 2, "start_time": "10:00:00", "status": "scheduled"}),
            json!({"id": 4, "practitioner_id": 8, "appointment_type_id": 2, "start_time": "11:00:00", "status": "available"}),
            json!({"id": 5, "practitioner_id": 7, "appointment_type_id": 9, "start_time": "12:00:00", "status": "available"}),
        ]);

        let slots = filter_available_slots(&records, "7", "2").unwrap();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].appointment_id, RecordId::from(3));
        assert_eq!(slots[0].label, "2:00pm");
        assert_eq!(slots[0].start_time, "14:00:00");
        assert_eq!(slots[1].label, "9:00am");
    }

    #[test]
    fn test_filter_matches_ids_across_number_and_text() {
        let records = records(vec![
            json!({"id": "a1", "practitioner_id": "7", "appointment_type_id": 2, "start_time": "09:30", "status": "available"}),
        ]);

        let slots = filter_available_slots(&records, "7", "2").unwrap();

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].label, "9:30am");
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_available_slots(&[], "7", "2").unwrap().is_empty());
    }

    #[test]
    fn test_filter_reports_malformed_time() {
        let records = records(vec![
            json!({"id": 1, "practitioner_id": 7, "appointment_type_id": 2, "start_time": "nine", "status": "available"}),
        ]);

        assert!(filter_available_slots(&records, "7", "2").is_err());
    }
}
