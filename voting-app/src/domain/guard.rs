use super::{paths, Role, SessionSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Decides whether a protected view may render. `session` is `None` when
/// no token is stored.
pub fn guard(session: Option<&SessionSummary>, required: Option<Role>) -> GuardDecision {
    let Some(session) = session else {
        return GuardDecision::Redirect(paths::LOGIN);
    };

    match required {
        Some(role) if session.role != role => GuardDecision::Redirect(paths::UNAUTHORIZED),
        _ => GuardDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Session, UserSummary};

    fn session(role: Role) -> Session {
        Session::new("tok".into(), role, UserSummary::default())
    }

    #[test]
    fn test_no_session_redirects_to_login() {
        assert_eq!(guard(None, None), GuardDecision::Redirect("/login"));
        assert_eq!(guard(None, Some(Role::Admin)), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn test_empty_token_counts_as_signed_out() {
        let mut s = session(Role::Admin);
        s.token.clear();
        assert_eq!(guard(s.summary().as_ref(), None), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn test_role_mismatch_redirects_to_unauthorized() {
        let voter = session(Role::Voter).summary();
        assert_eq!(
            guard(voter.as_ref(), Some(Role::Admin)),
            GuardDecision::Redirect("/unauthorized")
        );
    }

    #[test]
    fn test_renders_when_satisfied() {
        let voter = session(Role::Voter).summary();
        let admin = session(Role::Admin).summary();
        assert_eq!(guard(voter.as_ref(), None), GuardDecision::Render);
        assert_eq!(guard(admin.as_ref(), None), GuardDecision::Render);
        assert_eq!(guard(admin.as_ref(), Some(Role::Admin)), GuardDecision::Render);
    }
}
