use async_trait::async_trait;
use voting_errors::AppError;

use super::{assemble, entries, SessionStore, ROLE_KEY, TOKEN_KEY, USER_KEY};
use crate::domain::Session;

/// Session kept in the server-side `tower-sessions` record identified by the
/// browser's session cookie.
#[derive(Clone)]
pub struct CookieSessionStore {
    session: tower_sessions::Session,
}

impl CookieSessionStore {
    pub fn new(session: tower_sessions::Session) -> Self {
        Self { session }
    }

    async fn get(&self, key: &str) -> Option<String> {
        match self.session.get::<String>(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read session key {}: {}", key, e);
                None
            }
        }
    }
}

#[async_trait]
impl SessionStore for CookieSessionStore {
    async fn save(&self, session: &Session) -> Result<(), AppError> {
        for (key, value) in entries(session)? {
            self.session
                .insert(key, value)
                .await
                .map_err(|e| AppError::Session(e.to_string()))?;
        }

        tracing::info!("Session saved for {} ({})", session.user.display_name(), session.role);
        Ok(())
    }

    async fn read(&self) -> Option<Session> {
        let token = self.get(TOKEN_KEY).await;
        let role = self.get(ROLE_KEY).await;
        let user = self.get(USER_KEY).await;
        assemble(token, role, user)
    }

    async fn clear(&self) -> Result<(), AppError> {
        for key in [TOKEN_KEY, ROLE_KEY, USER_KEY] {
            self.session
                .remove::<String>(key)
                .await
                .map_err(|e| AppError::Session(e.to_string()))?;
        }
        Ok(())
    }
}
