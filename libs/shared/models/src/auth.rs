use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
    pub role: String,
}

/// The signed-in dashboard user. Owned by the session manager and
/// persisted through whatever store it was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user: SessionUser,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: SessionUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            signed_in_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub signed_in: bool,
    pub session: Option<Session>,
}
