//! Backend payloads as they arrive on the wire.
//!
//! The voting backend is inconsistent about field names (`votes` /
//! `voteCount` / `vote_count`, `isVoted` / `is_voted`, `id` / `_id`) and
//! about value types. Everything is decoded loosely here and converted into
//! the canonical domain records, so views never see the variations.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use voting_errors::AppError;

use crate::domain::{Candidate, Role, Session, UserSummary, VoteTally, Voter};

#[derive(Debug, Default, Deserialize)]
pub struct RawTally {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, rename = "_id")]
    pub object_id: Option<Value>,
    #[serde(default)]
    pub candidate: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub party: Option<Value>,
    #[serde(default)]
    pub votes: Option<Value>,
    #[serde(default, rename = "voteCount")]
    pub vote_count_camel: Option<Value>,
    #[serde(default)]
    pub vote_count: Option<Value>,
}

impl From<RawTally> for VoteTally {
    fn from(raw: RawTally) -> Self {
        VoteTally {
            id: identifier(&raw.id, &raw.object_id),
            label: first_text(&[&raw.candidate, &raw.name, &raw.party]).unwrap_or_default(),
            votes: count(&[&raw.votes, &raw.vote_count_camel, &raw.vote_count]),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCandidate {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, rename = "_id")]
    pub object_id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub party: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub votes: Option<Value>,
    #[serde(default, rename = "voteCount")]
    pub vote_count_camel: Option<Value>,
    #[serde(default)]
    pub vote_count: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
}

impl From<RawCandidate> for Candidate {
    fn from(raw: RawCandidate) -> Self {
        // `votes` on a candidate can be the list of ballots rather than a count.
        let votes = match &raw.votes {
            Some(Value::Array(ballots)) => ballots.len() as u64,
            _ => count(&[&raw.votes, &raw.vote_count_camel, &raw.vote_count]),
        };

        Candidate {
            id: identifier(&raw.id, &raw.object_id),
            name: text(&raw.name).unwrap_or_default(),
            party: text(&raw.party).unwrap_or_default(),
            age: raw.age.as_ref().map(number).filter(|age| *age > 0).map(|age| age as u32),
            votes,
            image: text(&raw.image).filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawVoter {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, rename = "_id")]
    pub object_id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default, rename = "isVoted", deserialize_with = "present")]
    pub is_voted_camel: Option<Value>,
    #[serde(default)]
    pub is_voted: Option<Value>,
}

impl From<RawVoter> for Voter {
    fn from(raw: RawVoter) -> Self {
        Voter {
            id: identifier(&raw.id, &raw.object_id),
            name: text(&raw.name).unwrap_or_default(),
            email: text(&raw.email).unwrap_or_default(),
            has_voted: voted_flag(&raw.is_voted_camel, &raw.is_voted),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, rename = "_id")]
    pub object_id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub role: Option<Value>,
    #[serde(default, rename = "isVoted", deserialize_with = "present")]
    pub is_voted_camel: Option<Value>,
    #[serde(default)]
    pub is_voted: Option<Value>,
}

impl RawUser {
    pub fn role(&self) -> Option<Role> {
        text(&self.role).map(|r| Role::parse_lossy(&r))
    }
}

impl From<RawUser> for UserSummary {
    fn from(raw: RawUser) -> Self {
        UserSummary {
            id: identifier(&raw.id, &raw.object_id),
            name: text(&raw.name).unwrap_or_default(),
            email: text(&raw.email).unwrap_or_default(),
            has_voted: voted_flag(&raw.is_voted_camel, &raw.is_voted),
        }
    }
}

/// Response of `/user/google-login` and `/user/signup`.
#[derive(Debug, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<Value>,
    #[serde(default)]
    pub user: Option<RawUser>,
}

impl AuthResponse {
    /// The role on the user record wins over a top-level `role`; a response
    /// carrying neither is a voter.
    pub fn into_session(self) -> Result<Session, AppError> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Decode("response did not include a token".to_string()))?;

        let role = self
            .user
            .as_ref()
            .and_then(RawUser::role)
            .or_else(|| text(&self.role).map(|r| Role::parse_lossy(&r)))
            .unwrap_or_default();

        let user = self.user.map(UserSummary::from).unwrap_or_default();

        Ok(Session::new(token, role, user))
    }
}

/// Response of `/user/profile`.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub user: Option<RawUser>,
}

/// Body of a non-OK response.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        first_text(&[&self.error, &self.message])
    }
}

/// Vote count from the first field that is present, else 0.
pub fn count(candidates: &[&Option<Value>]) -> u64 {
    candidates
        .iter()
        .find_map(|v| v.as_ref())
        .map(number)
        .unwrap_or(0)
}

/// Keeps an explicit `null` as `Some(Value::Null)` so a field that was sent
/// can be told apart from one that was left out.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// `isVoted` when present (`null` included), otherwise the truthiness of
/// `is_voted`, else false.
pub fn voted_flag(camel: &Option<Value>, snake: &Option<Value>) -> bool {
    camel.as_ref().or(snake.as_ref()).map(truthy).unwrap_or(false)
}

/// Lenient numeric coercion: numbers, numeric strings and `true` count;
/// anything else, negatives and non-finite values are 0.
pub fn number(value: &Value) -> u64 {
    let n = match value {
        Value::Number(n) => n.as_u64().map(|u| u as f64).or_else(|| n.as_f64()),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match n {
        Some(n) if n.is_finite() && n > 0.0 => n as u64,
        _ => 0,
    }
}

pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_text(values: &[&Option<Value>]) -> Option<String> {
    values
        .iter()
        .filter_map(|v| text(v))
        .find(|s| !s.trim().is_empty())
}

fn identifier(id: &Option<Value>, object_id: &Option<Value>) -> Option<String> {
    first_text(&[id, object_id])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tally(value: Value) -> VoteTally {
        serde_json::from_value::<RawTally>(value).unwrap().into()
    }

    #[test]
    fn test_vote_count_field_names() {
        assert_eq!(tally(json!({"name": "A", "votes": 3})).votes, 3);
        assert_eq!(tally(json!({"name": "A", "voteCount": 4})).votes, 4);
        assert_eq!(tally(json!({"name": "A", "vote_count": 5})).votes, 5);
        assert_eq!(tally(json!({"name": "A"})).votes, 0);
    }

    #[test]
    fn test_first_defined_count_wins() {
        assert_eq!(tally(json!({"votes": 2, "voteCount": 9, "vote_count": 7})).votes, 2);
        assert_eq!(tally(json!({"votes": null, "voteCount": 9})).votes, 9);
        // Present but unusable does not fall through to the next name.
        assert_eq!(tally(json!({"votes": "many", "voteCount": 9})).votes, 0);
    }

    #[test]
    fn test_count_coercion() {
        assert_eq!(tally(json!({"votes": "12"})).votes, 12);
        assert_eq!(tally(json!({"votes": 2.0})).votes, 2);
        assert_eq!(tally(json!({"votes": -4})).votes, 0);
        assert_eq!(tally(json!({"votes": ""})).votes, 0);
    }

    #[test]
    fn test_tally_label_and_id() {
        let t = tally(json!({"_id": "abc", "party": "Green", "votes": 1}));
        assert_eq!(t.id.as_deref(), Some("abc"));
        assert_eq!(t.label, "Green");

        let t = tally(json!({"id": 7, "candidate": "", "name": "Ravi", "party": "Blue"}));
        assert_eq!(t.id.as_deref(), Some("7"));
        assert_eq!(t.label, "Ravi");
    }

    #[test]
    fn test_voter_flag() {
        let voter = |v: Value| -> Voter { serde_json::from_value::<RawVoter>(v).unwrap().into() };

        assert!(voter(json!({"name": "a", "isVoted": true})).has_voted);
        assert!(!voter(json!({"name": "a", "isVoted": false, "is_voted": true})).has_voted);
        assert!(voter(json!({"name": "a", "is_voted": 1})).has_voted);
        assert!(!voter(json!({"name": "a", "is_voted": 0})).has_voted);
        assert!(voter(json!({"name": "a", "is_voted": "yes"})).has_voted);
        assert!(!voter(json!({"name": "a"})).has_voted);
        assert!(!voter(json!({"name": "a", "isVoted": null, "is_voted": true})).has_voted);
    }

    #[test]
    fn test_huge_counts_do_not_break_shares() {
        let tallies = vec![
            tally(json!({"name": "A", "votes": "1e20"})),
            tally(json!({"name": "B", "votes": 1})),
        ];
        assert_eq!(tallies[0].votes, u64::MAX);

        let shares = crate::domain::tally::shares(&tallies);
        assert_eq!(shares[0].percentage_label(), "100.0%");
        assert_eq!(shares[1].percentage_label(), "0.0%");
    }

    #[test]
    fn test_candidate_normalization() {
        let c: Candidate = serde_json::from_value::<RawCandidate>(json!({
            "_id": "64f0",
            "name": "Meera",
            "party": "Independent",
            "age": "41",
            "votes": [{"user": "u1"}, {"user": "u2"}],
            "voteCount": 2,
            "image": ""
        }))
        .unwrap()
        .into();

        assert_eq!(c.id.as_deref(), Some("64f0"));
        assert_eq!(c.age, Some(41));
        assert_eq!(c.votes, 2);
        assert_eq!(c.image, None);
    }

    #[test]
    fn test_candidate_without_id() {
        let c: Candidate = serde_json::from_value::<RawCandidate>(json!({"name": "X"}))
            .unwrap()
            .into();
        assert_eq!(c.id, None);
    }

    #[test]
    fn test_auth_response_role() {
        let response: AuthResponse = serde_json::from_value(json!({
            "token": "t1",
            "user": {"_id": "u1", "name": "Asha", "email": "a@x.io", "role": "admin"}
        }))
        .unwrap();
        let session = response.into_session().unwrap();
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.user.name, "Asha");

        let response: AuthResponse =
            serde_json::from_value(json!({"token": "t2", "role": "admin"})).unwrap();
        assert_eq!(response.into_session().unwrap().role, Role::Admin);

        let response: AuthResponse =
            serde_json::from_value(json!({"token": "t3", "user": {"role": "moderator"}})).unwrap();
        assert_eq!(response.into_session().unwrap().role, Role::Voter);
    }

    #[test]
    fn test_auth_response_without_token() {
        let response: AuthResponse = serde_json::from_value(json!({"user": {}})).unwrap();
        assert!(matches!(response.into_session(), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_value(json!({"message": "Already voted"})).unwrap();
        assert_eq!(body.message().as_deref(), Some("Already voted"));

        let body: ErrorBody =
            serde_json::from_value(json!({"error": "Unauthorized", "message": "x"})).unwrap();
        assert_eq!(body.message().as_deref(), Some("Unauthorized"));

        assert_eq!(ErrorBody::default().message(), None);
    }
}
