use leptos::prelude::*;
use leptos_router::hooks::use_location;
use server_fn::ServerFnError;
use voting_app::domain::SessionSummary;

#[cfg(feature = "ssr")]
use voting_app::{infrastructure::session::CookieSessionStore, AppContext};

#[server(CurrentSessionFn, "/api", endpoint = "current_session")]
pub async fn current_session() -> Result<Option<SessionSummary>, ServerFnError> {
    use voting_app::infrastructure::session::SessionStore;

    let store = session_store().await?;
    Ok(store.read().await.and_then(|session| session.summary()))
}

/// The signed-in state every view reads, refreshed on each navigation.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: Resource<Result<Option<SessionSummary>, ServerFnError>>,
}

impl SessionContext {
    /// `None` while loading, when signed out, or when the lookup failed.
    pub fn summary(&self) -> Option<SessionSummary> {
        self.session.get().and_then(|result| result.ok().flatten())
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext {
        session: Resource::new(|| (), |_| current_session()),
    })
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let location = use_location();
    let session = Resource::new(move || location.pathname.get(), |_| current_session());

    provide_context(SessionContext { session });

    children()
}

#[cfg(feature = "ssr")]
pub async fn session_store() -> Result<CookieSessionStore, ServerFnError> {
    let session: tower_sessions::Session = leptos_axum::extract().await?;
    Ok(CookieSessionStore::new(session))
}

#[cfg(feature = "ssr")]
pub fn app_context() -> Result<AppContext, ServerFnError> {
    use_context::<AppContext>().ok_or_else(|| {
        tracing::error!("AppContext missing from server function context");
        ServerFnError::new("Server is not configured")
    })
}
