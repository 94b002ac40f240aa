use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Voter,
    Admin,
}

impl Role {
    /// Anything other than `admin` is treated as a voter.
    pub fn parse_lossy(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Voter
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Voter => "voter",
            Role::Admin => "admin",
        }
    }

    /// Landing page after a successful login or signup.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => paths::ADMIN_DASHBOARD,
            Role::Voter => paths::VOTER_DASHBOARD,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lossy() {
        assert_eq!(Role::parse_lossy("admin"), Role::Admin);
        assert_eq!(Role::parse_lossy(" Admin "), Role::Admin);
        assert_eq!(Role::parse_lossy("voter"), Role::Voter);
        assert_eq!(Role::parse_lossy("superuser"), Role::Voter);
        assert_eq!(Role::parse_lossy(""), Role::Voter);
    }

    #[test]
    fn test_dashboard_path() {
        assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
        assert_eq!(Role::Voter.dashboard_path(), "/dashboard");
    }
}
