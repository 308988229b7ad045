use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::services::SessionManager;

pub fn auth_routes(sessions: Arc<SessionManager>) -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/session", get(handlers::get_session))
        .with_state(sessions)
}
