use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use shared_models::auth::Session;

use crate::models::AuthError;

/// Where the signed-in session is persisted between restarts.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<Session>, AuthError>;
    async fn save(&self, session: &Session) -> Result<(), AuthError>;
    async fn clear(&self) -> Result<(), AuthError>;
}

#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &Session) -> Result<(), AuthError> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), AuthError> {
        *self.session.write().await = None;
        Ok(())
    }
}

/// JSON file holding the last signed-in session.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>, AuthError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AuthError::Storage(e.to_string())),
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                debug!("Restored session for {}", session.user.email);
                Ok(Some(session))
            }
            Err(e) => {
                // A corrupt file means nobody is signed in.
                warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AuthError::Storage(e.to_string()))?;
            }
        }

        let body = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))
    }

    async fn clear(&self) -> Result<(), AuthError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Storage(e.to_string())),
        }
    }
}
