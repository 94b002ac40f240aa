use std::sync::Arc;
use voting_errors::AppError;

use crate::domain::{Session, SignupInput};
use crate::infrastructure::backend::BackendClient;
use crate::infrastructure::identity::IdentityClaims;
use crate::infrastructure::session::SessionStore;

/// Turns an external credential or a registration form into a stored session.
pub struct Authenticate {
    backend: Arc<BackendClient>,
}

impl Authenticate {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }

    pub async fn google(
        &self,
        store: &dyn SessionStore,
        credential: &str,
    ) -> Result<Session, AppError> {
        let identity = IdentityClaims::decode_unverified(credential)?;
        tracing::info!("Google login for {}", identity.email);

        let session = self.backend.google_login(&identity).await?;
        store.save(&session).await?;
        Ok(session)
    }

    pub async fn signup(
        &self,
        store: &dyn SessionStore,
        input: &SignupInput,
    ) -> Result<Session, AppError> {
        let form = input.validate()?;
        tracing::info!("Signup as {}", form.role);

        let session = self.backend.signup(&form).await?;
        store.save(&session).await?;
        Ok(session)
    }

    pub async fn logout(&self, store: &dyn SessionStore) -> Result<(), AppError> {
        store.clear().await
    }
}
