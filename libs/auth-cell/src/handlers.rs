use std::sync::Arc;

use axum::{
    extract::{State, Json},
};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::auth::SessionResponse;
use shared_models::error::AppError;

use crate::models::LoginRequest;
use crate::services::SessionManager;

pub async fn login(
    State(sessions): State<Arc<SessionManager>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    debug!("Sign-in requested for {}", request.email);

    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::ValidationError("Email and password are required".to_string()));
    }

    let session = sessions.login(&request.email, &request.password).await?;

    Ok(Json(SessionResponse {
        signed_in: true,
        session: Some(session),
    }))
}

pub async fn logout(
    State(sessions): State<Arc<SessionManager>>,
) -> Result<Json<Value>, AppError> {
    debug!("Sign-out requested");

    sessions.logout().await?;

    Ok(Json(json!({ "signed_in": false })))
}

pub async fn get_session(
    State(sessions): State<Arc<SessionManager>>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = sessions.current().await;

    Ok(Json(SessionResponse {
        signed_in: session.is_some(),
        session,
    }))
}
