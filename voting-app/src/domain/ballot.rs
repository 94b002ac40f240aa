use serde::{Deserialize, Serialize};

/// Where the voter dashboard is in its lifecycle.
///
/// `Loading` resolves once the candidate list, the tallies and the profile
/// have all arrived. A successful vote moves `VotingOpen` to `Voted`; a
/// failed one leaves the phase untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallotPhase {
    #[default]
    Loading,
    VotingOpen,
    Voted,
}

impl BallotPhase {
    pub fn loaded(self, has_voted: bool) -> Self {
        match self {
            BallotPhase::Loading if has_voted => BallotPhase::Voted,
            BallotPhase::Loading => BallotPhase::VotingOpen,
            other => other,
        }
    }

    pub fn after_vote(self, succeeded: bool) -> Self {
        match self {
            BallotPhase::VotingOpen if succeeded => BallotPhase::Voted,
            other => other,
        }
    }

    pub fn can_vote(self) -> bool {
        self == BallotPhase::VotingOpen
    }

    pub fn shows_results(self) -> bool {
        self == BallotPhase::Voted
    }
}
