mod ballot;
mod candidate;
mod forms;
mod guard;
mod mutation;
pub mod paths;
mod role;
mod session;
pub mod tally;
mod voter;

pub use ballot::BallotPhase;
pub use candidate::{Candidate, NewCandidate};
pub use forms::{CandidateInput, SignupForm, SignupInput};
pub use guard::{guard, GuardDecision};
pub use mutation::{Mutation, Query};
pub use role::Role;
pub use session::{Session, SessionSummary, UserSummary};
pub use tally::{TallyShare, VoteTally};
pub use voter::Voter;
