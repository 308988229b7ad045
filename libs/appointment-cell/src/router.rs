// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments))
        .route("/booking-options", get(handlers::get_booking_options))
        .route("/book", post(handlers::book_appointment))
        .route(
            "/{appointment_id}",
            get(handlers::get_appointment).delete(handlers::delete_appointment),
        )
        .route("/{appointment_id}/status", patch(handlers::update_appointment_status))
        .with_state(state)
}
