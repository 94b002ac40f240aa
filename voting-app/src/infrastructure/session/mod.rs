mod cookie;
mod memory;

pub use cookie::CookieSessionStore;
pub use memory::MemorySessionStore;

use async_trait::async_trait;
use voting_errors::AppError;

use crate::domain::{Role, Session, UserSummary};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_KEY: &str = "user";

/// Persisted sign-in state. No expiry and no refresh: a session lives until
/// it is cleared or the underlying storage forgets it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, session: &Session) -> Result<(), AppError>;

    /// Storage failures read as signed out.
    async fn read(&self) -> Option<Session>;

    async fn clear(&self) -> Result<(), AppError>;
}

/// The three stored values, each as a plain string.
fn entries(session: &Session) -> Result<[(&'static str, String); 3], AppError> {
    let user = serde_json::to_string(&session.user).map_err(|e| AppError::Session(e.to_string()))?;

    Ok([
        (TOKEN_KEY, session.token.clone()),
        (ROLE_KEY, session.role.as_str().to_string()),
        (USER_KEY, user),
    ])
}

fn assemble(token: Option<String>, role: Option<String>, user: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let role = role.map(|r| Role::parse_lossy(&r)).unwrap_or_default();
    let user = user
        .and_then(|raw| serde_json::from_str::<UserSummary>(&raw).ok())
        .unwrap_or_default();

    Some(Session::new(token, role, user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_requires_token() {
        assert_eq!(assemble(None, Some("admin".into()), None), None);
        assert_eq!(assemble(Some(String::new()), None, None), None);
    }

    #[test]
    fn test_assemble_defaults() {
        let session = assemble(Some("t".into()), None, Some("not json".into())).unwrap();
        assert_eq!(session.role, Role::Voter);
        assert_eq!(session.user, UserSummary::default());
    }
}
