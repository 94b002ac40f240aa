use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use voting_errors::AppError;

use super::wire::{AuthResponse, ErrorBody, ProfileResponse, RawCandidate, RawTally, RawVoter};
use crate::domain::{
    Candidate, Mutation, NewCandidate, Session, SignupForm, UserSummary, VoteTally, Voter,
};
use crate::infrastructure::identity::IdentityClaims;

pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// HTTP client for the external voting backend.
///
/// Every authenticated call takes the bearer token explicitly; when it is
/// `None` the request goes out without an `Authorization` header and the
/// backend decides.
#[derive(Clone)]
pub struct BackendClient {
    http_client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct GoogleLoginRequest<'a> {
    name: &'a str,
    email: &'a str,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn google_login(&self, identity: &IdentityClaims) -> Result<Session, AppError> {
        let request = self
            .http_client
            .post(self.url("/user/google-login"))
            .json(&GoogleLoginRequest {
                name: &identity.name,
                email: &identity.email,
            });

        let response: AuthResponse = self.send_json(request, "Login failed").await?;
        response.into_session()
    }

    pub async fn signup(&self, form: &SignupForm) -> Result<Session, AppError> {
        let request = self.http_client.post(self.url("/user/signup")).json(form);

        let response: AuthResponse = self.send_json(request, "Signup failed").await?;
        response.into_session()
    }

    pub async fn profile(&self, token: Option<&str>) -> Result<UserSummary, AppError> {
        let request = authorize(self.http_client.get(self.url("/user/profile")), token);

        let response: ProfileResponse = self.send_json(request, "Failed to load profile").await?;
        response
            .user
            .map(UserSummary::from)
            .ok_or_else(|| AppError::Decode("profile response did not include a user".to_string()))
    }

    pub async fn voters(&self, token: Option<&str>) -> Result<Vec<Voter>, AppError> {
        let request = authorize(self.http_client.get(self.url("/user/users/voters")), token);

        let voters: Vec<RawVoter> = self.send_json(request, "Failed to fetch voters").await?;
        Ok(voters.into_iter().map(Voter::from).collect())
    }

    pub async fn reset_voting(&self, token: Option<&str>) -> Result<Mutation, AppError> {
        let request = authorize(self.http_client.post(self.url("/user/admin/reset")), token);

        self.execute(request, "Failed to reset voting").await?;
        tracing::info!("Voting reset requested");
        Ok(Mutation::ResetVoting)
    }

    pub async fn candidates(&self, token: Option<&str>) -> Result<Vec<Candidate>, AppError> {
        let request = authorize(self.http_client.get(self.url("/candidate/")), token);

        let candidates: Vec<RawCandidate> =
            self.send_json(request, "Failed to load candidates").await?;
        Ok(candidates.into_iter().map(Candidate::from).collect())
    }

    pub async fn tallies(&self, token: Option<&str>) -> Result<Vec<VoteTally>, AppError> {
        let request = authorize(self.http_client.get(self.url("/candidate/vote/count")), token);

        let tallies: Vec<RawTally> = self.send_json(request, "Failed to fetch results").await?;
        Ok(tallies.into_iter().map(VoteTally::from).collect())
    }

    pub async fn cast_vote(
        &self,
        token: Option<&str>,
        candidate_id: &str,
    ) -> Result<Mutation, AppError> {
        let path = format!("/candidate/vote/{}", urlencoding::encode(candidate_id));
        let request = authorize(self.http_client.get(self.url(&path)), token);

        self.execute(request, "Vote failed").await?;
        Ok(Mutation::CastVote)
    }

    pub async fn add_candidate(
        &self,
        token: Option<&str>,
        candidate: &NewCandidate,
    ) -> Result<Mutation, AppError> {
        let request = authorize(self.http_client.post(self.url("/candidate")), token).json(candidate);

        self.execute(request, "Failed to add candidate").await?;
        tracing::info!("Candidate added: {}", candidate.name);
        Ok(Mutation::AddCandidate)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = self.dispatch(request, fallback).await?;

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to decode backend response: {}", e);
            AppError::Decode(e.to_string())
        })
    }

    /// Sends a write whose success body carries nothing the client needs.
    async fn execute(&self, request: RequestBuilder, fallback: &str) -> Result<(), AppError> {
        self.dispatch(request, fallback).await.map(|_| ())
    }

    async fn dispatch(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<reqwest::Response, AppError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Backend request failed: {}", e);
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Backend error on {}: {} - {}", url, status, body);

        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message());
        Err(AppError::backend(status.as_u16(), message, fallback))
    }
}

fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) if !token.is_empty() => request.bearer_auth(token),
        _ => request,
    }
}
