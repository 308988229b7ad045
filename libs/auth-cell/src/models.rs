use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The single account the dashboard accepts. This is a placeholder for a
/// real identity provider, not a security boundary.
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub role: String,
}

impl DemoCredentials {
    pub fn accepts(&self, email: &str, password: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim()) && self.password == password
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::Auth(err.to_string()),
            AuthError::NotSignedIn => AppError::Auth(err.to_string()),
            AuthError::Storage(msg) => AppError::Internal(msg),
        }
    }
}
