use std::sync::Arc;

use axum::{
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
    body::Body,
};

use shared_models::error::AppError;

use crate::services::SessionManager;

// Rejects requests while nobody is signed in and hands the session to handlers
pub async fn require_session(
    State(sessions): State<Arc<SessionManager>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let session = sessions
        .current()
        .await
        .ok_or_else(|| AppError::Auth("Sign in required".to_string()))?;

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}
