use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use voting_app::domain::paths;

use crate::api::google_client_id;
use crate::components::ErrorDisplay;

const GOOGLE_SCRIPT: &str = "https://accounts.google.com/gsi/client";

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let client_id = Resource::new(|| (), |_| google_client_id());

    let login_error = move || {
        query
            .read()
            .get("error")
            .filter(|message| !message.is_empty())
            .map(|message| view! { <ErrorDisplay message=message/> })
    };

    view! {
        <div class="auth">
            <h1 class="auth__title">"Sign in to vote"</h1>
            {login_error}

            <Suspense fallback=|| view! { <p class="auth__hint">"Loading sign-in..."</p> }>
                {move || client_id.get().map(|result| match result {
                    Ok(Some(client_id)) => view! {
                        <script src=GOOGLE_SCRIPT></script>
                        <div
                            id="g_id_onload"
                            data-client_id=client_id
                            data-login_uri="/auth/google"
                            data-ux_mode="redirect"
                            data-auto_prompt="false"
                        ></div>
                        <div
                            class="g_id_signin"
                            data-type="standard"
                            data-text="signin_with"
                            data-shape="rectangular"
                        ></div>
                    }
                    .into_any(),
                    Ok(None) => view! {
                        <p class="auth__hint">"Google sign-in is not configured on this server."</p>
                    }
                    .into_any(),
                    Err(_) => view! {
                        <p class="auth__hint">"Google sign-in is unavailable right now."</p>
                    }
                    .into_any(),
                })}
            </Suspense>

            <p class="auth__switch">
                "No account yet? " <A href=paths::SIGNUP>"Sign up"</A>
            </p>
        </div>
    }
}
