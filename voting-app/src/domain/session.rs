use serde::{Deserialize, Serialize};

use super::Role;

/// The signed-in identity: bearer token, role and the user record the
/// backend returned when the token was issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub user: UserSummary,
}

impl Session {
    pub fn new(token: String, role: Role, user: UserSummary) -> Self {
        Self { token, role, user }
    }

    /// `None` when there is no usable token.
    pub fn summary(&self) -> Option<SessionSummary> {
        if self.token.is_empty() {
            return None;
        }

        Some(SessionSummary {
            role: self.role,
            user: self.user.clone(),
        })
    }
}

/// The part of a session the browser gets to see. The token stays on the
/// server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub role: Role,
    pub user: UserSummary,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub has_voted: bool,
}

impl UserSummary {
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.email.is_empty() {
            &self.email
        } else {
            "Voter"
        }
    }
}
