use std::sync::Arc;
use voting_errors::AppError;

use crate::domain::{Candidate, CandidateInput, Mutation, UserSummary, VoteTally, Voter};
use crate::infrastructure::backend::BackendClient;
use crate::infrastructure::session::SessionStore;

/// Reads and writes against the backend on behalf of the stored session.
///
/// Reads return data; writes return the [`Mutation`] that happened so the
/// caller can refetch what it invalidated.
pub struct VotingService {
    backend: Arc<BackendClient>,
}

impl VotingService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }

    pub async fn candidates(&self, store: &dyn SessionStore) -> Result<Vec<Candidate>, AppError> {
        let token = token(store).await;
        self.backend.candidates(token.as_deref()).await
    }

    pub async fn tallies(&self, store: &dyn SessionStore) -> Result<Vec<VoteTally>, AppError> {
        let token = token(store).await;
        self.backend.tallies(token.as_deref()).await
    }

    pub async fn profile(&self, store: &dyn SessionStore) -> Result<UserSummary, AppError> {
        let token = token(store).await;
        self.backend.profile(token.as_deref()).await
    }

    pub async fn voters(&self, store: &dyn SessionStore) -> Result<Vec<Voter>, AppError> {
        let token = token(store).await;
        self.backend.voters(token.as_deref()).await
    }

    pub async fn cast_vote(
        &self,
        store: &dyn SessionStore,
        candidate_id: &str,
    ) -> Result<Mutation, AppError> {
        if candidate_id.trim().is_empty() {
            return Err(AppError::Validation("Invalid candidate id".to_string()));
        }

        let token = token(store).await;
        self.backend.cast_vote(token.as_deref(), candidate_id).await
    }

    pub async fn add_candidate(
        &self,
        store: &dyn SessionStore,
        input: &CandidateInput,
    ) -> Result<Mutation, AppError> {
        let candidate = input.validate()?;
        let token = token(store).await;
        self.backend.add_candidate(token.as_deref(), &candidate).await
    }

    /// Clears every vote and every voter's flag. Not reversible.
    pub async fn reset_voting(&self, store: &dyn SessionStore) -> Result<Mutation, AppError> {
        let token = token(store).await;
        self.backend.reset_voting(token.as_deref()).await
    }
}

async fn token(store: &dyn SessionStore) -> Option<String> {
    store.read().await.map(|s| s.token)
}
