use serde::{Deserialize, Serialize};

/// Admin-visible roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub has_voted: bool,
}

impl Voter {
    pub fn roster_line(&self) -> String {
        format!(
            "{} - Email: {} - Voted: {}",
            self.name,
            self.email,
            if self.has_voted { "Yes" } else { "No" }
        )
    }
}
