use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers::{self, SchedulingState};

pub fn scheduling_routes(config: Arc<AppConfig>) -> Router {
    let state = SchedulingState::new(config);

    Router::new()
        .route("/calendar", get(handlers::get_calendar))
        .route("/slots/generate", get(handlers::generate_time_slots))
        .route("/slots/available", get(handlers::get_available_slots))
        .route("/slots/working-hours", get(handlers::get_working_hours_slots))
        .with_state(state)
}
