mod candidate_form;
mod error_display;
mod loading_spinner;
mod nav;
mod notice;
mod route_guard;
mod tally_board;
mod voter_roster;

pub use candidate_form::CandidateForm;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use nav::Nav;
pub use notice::{Notice, NoticeBanner, NoticeKind};
pub use route_guard::RouteGuard;
pub use tally_board::TallyBoard;
pub use voter_roster::VoterRoster;
