use crate::application::{Authenticate, VotingService};
use crate::config::AppConfig;
use crate::infrastructure::backend::BackendClient;
use std::sync::Arc;
use voting_errors::AppError;

#[derive(Clone)]
pub struct AppContext {
    pub authenticate: Arc<Authenticate>,
    pub voting: Arc<VotingService>,
    pub google_client_id: Option<String>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let backend = Arc::new(BackendClient::new(&config.api_url));

        Self {
            authenticate: Arc::new(Authenticate::new(backend.clone())),
            voting: Arc::new(VotingService::new(backend)),
            google_client_id: config.google_client_id,
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        let config = AppConfig::from_env()?;
        tracing::info!("Using voting backend at {}", config.api_url);

        if config.google_client_id.is_none() {
            tracing::warn!("GOOGLE_CLIENT_ID is not set; Google sign-in is disabled");
        }

        Ok(Self::new(config))
    }
}
