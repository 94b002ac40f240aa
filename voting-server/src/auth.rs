use axum::http::{header, HeaderMap};
use axum::response::Redirect;
use serde::Deserialize;
use tower_sessions::cookie::Cookie;
use tower_sessions::Session;
use voting_app::domain::paths;
use voting_app::infrastructure::session::CookieSessionStore;
use voting_app::AppContext;

/// Cookie Google Identity Services sets next to the `g_csrf_token` form field.
const CSRF_COOKIE: &str = "g_csrf_token";

/// Body Google Identity Services posts to the login URI.
#[derive(Deserialize)]
pub struct GoogleCallback {
    credential: String,
    g_csrf_token: Option<String>,
}

pub async fn google_callback(
    ctx: AppContext,
    session: Session,
    headers: HeaderMap,
    form: GoogleCallback,
) -> Redirect {
    if !csrf_matches(&headers, form.g_csrf_token.as_deref()) {
        tracing::warn!("Google callback rejected: CSRF token mismatch");
        return login_error("Login failed. Please try again.");
    }

    let store = CookieSessionStore::new(session);
    match ctx.authenticate.google(&store, &form.credential).await {
        Ok(session) => {
            tracing::info!("Signed in {} as {}", session.user.display_name(), session.role);
            Redirect::to(session.role.dashboard_path())
        }
        Err(e) => {
            tracing::warn!("Google login failed: {}", e);
            login_error(e.user_message())
        }
    }
}

pub async fn logout(ctx: AppContext, session: Session) -> Redirect {
    let store = CookieSessionStore::new(session);

    if let Err(e) = ctx.authenticate.logout(&store).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    Redirect::to(paths::LOGIN)
}

fn login_error(message: &str) -> Redirect {
    let location = format!("{}?error={}", paths::LOGIN, urlencoding::encode(message));
    Redirect::to(&location)
}

/// Double-submit check: when the cookie is present the form field must match it.
fn csrf_matches(headers: &HeaderMap, form_token: Option<&str>) -> bool {
    match cookie_value(headers, CSRF_COOKIE) {
        Some(cookie) => form_token == Some(cookie.as_str()),
        None => true,
    }
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}
