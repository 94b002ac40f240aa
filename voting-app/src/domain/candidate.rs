use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// `None` when the backend sent neither `id` nor `_id`.
    pub id: Option<String>,
    pub name: String,
    pub party: String,
    pub age: Option<u32>,
    pub votes: u64,
    pub image: Option<String>,
}

/// Payload for `POST /candidate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub party: String,
    pub age: u32,
}
