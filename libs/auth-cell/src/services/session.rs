use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use shared_config::AppConfig;
use shared_models::auth::{Session, SessionUser};

use crate::models::{AuthError, DemoCredentials};
use crate::services::store::SessionStore;

/// Owns the dashboard's signed-in session.
///
/// Lifecycle: `init` once at startup to restore a persisted session,
/// `login`/`logout` while running, and `teardown` to wipe persisted state.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    credentials: DemoCredentials,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>, credentials: DemoCredentials) -> Self {
        Self {
            store,
            credentials,
            current: RwLock::new(None),
        }
    }

    pub fn from_config(store: Arc<dyn SessionStore>, config: &AppConfig) -> Self {
        Self::new(store, DemoCredentials {
            email: config.demo_email.clone(),
            password: config.demo_password.clone(),
            display_name: "Clinic Staff".to_string(),
            role: "staff".to_string(),
        })
    }

    pub async fn init(&self) -> Result<Option<Session>, AuthError> {
        let restored = self.store.load().await?;

        match &restored {
            Some(session) => info!("Restored session for {}", session.user.email),
            None => debug!("No persisted session found"),
        }

        *self.current.write().await = restored.clone();
        Ok(restored)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if !self.credentials.accepts(email, password) {
            warn!("Rejected sign-in attempt for {}", email);
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::new(SessionUser {
            email: self.credentials.email.clone(),
            name: self.credentials.display_name.clone(),
            role: self.credentials.role.clone(),
        });

        self.store.save(&session).await?;
        *self.current.write().await = Some(session.clone());

        info!("Signed in {}", session.user.email);
        Ok(session)
    }

    /// Persisted state goes first, so a failed wipe leaves the session
    /// signed in rather than coming back after a restart.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let mut current = self.current.write().await;
        if current.is_none() {
            return Err(AuthError::NotSignedIn);
        }

        self.store.clear().await?;
        *current = None;
        debug!("Session state cleared");
        Ok(())
    }

    pub async fn teardown(&self) -> Result<(), AuthError> {
        let mut current = self.current.write().await;
        self.store.clear().await?;
        *current = None;
        debug!("Session state cleared");
        Ok(())
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.current.read().await.is_some()
    }
}
