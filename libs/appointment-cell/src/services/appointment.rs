use tracing::debug;

use shared_api::{ApiError, ClinicApiClient, ListFilters, Page, Resource};
use shared_config::AppConfig;
use shared_models::{Appointment, AppointmentStatus};

use crate::models::AppointmentListQuery;

pub struct AppointmentService {
    api: ClinicApiClient,
}

impl AppointmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ClinicApiClient::new(config),
        }
    }

    pub async fn list_appointments(&self, query: &AppointmentListQuery) -> Result<Page<Appointment>, ApiError> {
        debug!("Listing appointments with {:?}", query);

        let filters = ListFilters::new()
            .with_opt("status", query.status)
            .with_opt("practitioner_id", query.practitioner_id.as_deref())
            .with_opt("appointment_type_id", query.appointment_type_id.as_deref())
            .with_opt("patient_id", query.patient_id.as_deref())
            .with_opt("date", query.date)
            .with_opt("patient_phone", query.patient_phone.as_deref());

        self.api.list(Resource::Appointments, &filters).await
    }

    pub async fn get_appointment(&self, appointment_id: &str) -> Result<Appointment, ApiError> {
        debug!("Fetching appointment {}", appointment_id);
        self.api.get(Resource::Appointments, appointment_id).await
    }

    pub async fn update_status(&self, appointment_id: &str, status: AppointmentStatus) -> Result<Appointment, ApiError> {
        debug!("Setting appointment {} to {}", appointment_id, status);
        self.api
            .update_status(Resource::Appointments, appointment_id, &status.to_string())
            .await
    }

    pub async fn delete_appointment(&self, appointment_id: &str) -> Result<(), ApiError> {
        debug!("Deleting appointment {}", appointment_id);
        self.api.delete(Resource::Appointments, appointment_id).await
    }
}
