use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use voting_errors::AppError;

use super::{assemble, entries, SessionStore, ROLE_KEY, TOKEN_KEY, USER_KEY};
use crate::domain::Session;

/// Process-local store, used where no browser session exists (tests, tools).
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, session: &Session) -> Result<(), AppError> {
        let entries = entries(session)?;
        let mut values = self
            .values
            .lock()
            .map_err(|e| AppError::Session(e.to_string()))?;

        for (key, value) in entries {
            values.insert(key.to_string(), value);
        }
        Ok(())
    }

    async fn read(&self) -> Option<Session> {
        let values = self.values.lock().ok()?;
        assemble(
            values.get(TOKEN_KEY).cloned(),
            values.get(ROLE_KEY).cloned(),
            values.get(USER_KEY).cloned(),
        )
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.values
            .lock()
            .map_err(|e| AppError::Session(e.to_string()))?
            .clear();
        Ok(())
    }
}
