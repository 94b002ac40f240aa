//! Client routes shared by the router, the route guard and the login flow.

pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const VOTER_DASHBOARD: &str = "/dashboard";
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const RESULTS: &str = "/results";
pub const UNAUTHORIZED: &str = "/unauthorized";
