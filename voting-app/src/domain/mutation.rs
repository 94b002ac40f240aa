use serde::{Deserialize, Serialize};

/// A read the views cache as a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Query {
    Candidates,
    Tallies,
    Profile,
    Voters,
}

/// A completed write. The caller refetches the queries it invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    CastVote,
    AddCandidate,
    ResetVoting,
}

impl Mutation {
    pub fn invalidates(&self) -> &'static [Query] {
        match self {
            Mutation::CastVote => &[Query::Tallies, Query::Profile],
            Mutation::AddCandidate => &[Query::Candidates, Query::Tallies],
            Mutation::ResetVoting => &[Query::Tallies, Query::Voters, Query::Profile],
        }
    }

    pub fn invalidates_query(&self, query: Query) -> bool {
        self.invalidates().contains(&query)
    }

    pub fn success_notice(&self) -> &'static str {
        match self {
            Mutation::CastVote => "Vote cast successfully!",
            Mutation::AddCandidate => "Candidate added successfully",
            Mutation::ResetVoting => "Voting has been reset successfully",
        }
    }
}
