mod admin_dashboard;
mod login;
mod results;
mod signup;
mod unauthorized;
mod voter_dashboard;

pub use admin_dashboard::AdminDashboardPage;
pub use login::LoginPage;
pub use results::ResultsPage;
pub use signup::SignupPage;
pub use unauthorized::UnauthorizedPage;
pub use voter_dashboard::VoterDashboardPage;
