use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn dashboard_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::get_overview))
        .route("/calls", get(handlers::list_calls))
        .route("/calls/{call_id}", get(handlers::get_call))
        .route("/reminders", get(handlers::list_reminders))
        .with_state(state)
}
