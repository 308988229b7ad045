use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected list response: {0}")]
    UnexpectedShape(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(msg) => AppError::NotFound(msg),
            ApiError::Auth(msg) => AppError::Auth(msg),
            other => {
                tracing::error!("Clinic API call failed: {}", other);
                AppError::ExternalService(
                    "Failed to reach the clinic service, please try again".to_string(),
                )
            }
        }
    }
}
