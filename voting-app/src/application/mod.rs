mod authenticate;
mod voting;

pub use authenticate::Authenticate;
pub use voting::VotingService;
