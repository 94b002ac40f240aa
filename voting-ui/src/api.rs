//! Server functions the views call. Each one reads the session from the
//! request's cookie and forwards to the backend with its token.

use leptos::prelude::*;
use server_fn::ServerFnError;
use voting_app::domain::{Candidate, Mutation, UserSummary, VoteTally, Voter};

#[cfg(feature = "ssr")]
use crate::session::{app_context, session_store};
#[cfg(feature = "ssr")]
use voting_errors::AppError;

#[server(ListCandidatesFn, "/api", endpoint = "candidates")]
pub async fn list_candidates() -> Result<Vec<Candidate>, ServerFnError> {
    let ctx = app_context()?;
    let store = session_store().await?;

    ctx.voting
        .candidates(&store)
        .await
        .map_err(AppError::into_server_error)
}

#[server(ListTalliesFn, "/api", endpoint = "tallies")]
pub async fn list_tallies() -> Result<Vec<VoteTally>, ServerFnError> {
    let ctx = app_context()?;
    let store = session_store().await?;

    ctx.voting
        .tallies(&store)
        .await
        .map_err(AppError::into_server_error)
}

#[server(FetchProfileFn, "/api", endpoint = "profile")]
pub async fn fetch_profile() -> Result<UserSummary, ServerFnError> {
    let ctx = app_context()?;
    let store = session_store().await?;

    ctx.voting
        .profile(&store)
        .await
        .map_err(AppError::into_server_error)
}

#[server(ListVotersFn, "/api", endpoint = "voters")]
pub async fn list_voters() -> Result<Vec<Voter>, ServerFnError> {
    let ctx = app_context()?;
    let store = session_store().await?;

    ctx.voting
        .voters(&store)
        .await
        .map_err(AppError::into_server_error)
}

#[server(CastVoteFn, "/api", endpoint = "cast_vote")]
pub async fn cast_vote(candidate_id: String) -> Result<Mutation, ServerFnError> {
    let ctx = app_context()?;
    let store = session_store().await?;

    ctx.voting
        .cast_vote(&store, &candidate_id)
        .await
        .map_err(|e| {
            tracing::warn!("Vote for {} failed: {}", candidate_id, e);
            e.into_server_error()
        })
}

#[server(AddCandidateFn, "/api", endpoint = "add_candidate")]
pub async fn add_candidate(
    name: String,
    party: String,
    age: String,
) -> Result<Mutation, ServerFnError> {
    use voting_app::domain::CandidateInput;

    let ctx = app_context()?;
    let store = session_store().await?;
    let input = CandidateInput { name, party, age };

    ctx.voting
        .add_candidate(&store, &input)
        .await
        .map_err(AppError::into_server_error)
}

#[server(ResetVotingFn, "/api", endpoint = "reset_voting")]
pub async fn reset_voting() -> Result<Mutation, ServerFnError> {
    let ctx = app_context()?;
    let store = session_store().await?;

    let mutation = ctx
        .voting
        .reset_voting(&store)
        .await
        .map_err(AppError::into_server_error)?;

    tracing::info!("Voting reset");
    Ok(mutation)
}

#[server(GoogleClientIdFn, "/api", endpoint = "google_client_id")]
pub async fn google_client_id() -> Result<Option<String>, ServerFnError> {
    let ctx = app_context()?;
    Ok(ctx.google_client_id.clone())
}

#[server(SignupFn, "/api", endpoint = "signup")]
pub async fn signup(
    name: String,
    aadhar_card_number: String,
    password: String,
    age: String,
    address: String,
    role: String,
) -> Result<(), ServerFnError> {
    use voting_app::domain::SignupInput;

    let ctx = app_context()?;
    let store = session_store().await?;
    let input = SignupInput {
        name,
        aadhar_card_number,
        password,
        age,
        address,
        role,
    };

    let session = ctx
        .authenticate
        .signup(&store, &input)
        .await
        .map_err(AppError::into_server_error)?;

    leptos_axum::redirect(session.role.dashboard_path());
    Ok(())
}

/// Text to show for a failed server function.
pub fn error_text(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError(message) => message.clone(),
        _ => "Unable to reach the server".to_string(),
    }
}
