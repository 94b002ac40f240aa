use leptos::prelude::*;
use leptos_router::components::A;
use voting_app::domain::paths;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <section class="panel">
            <h1 class="panel__title">"Unauthorized"</h1>
            <p>"You do not have access to this page."</p>
            <A href=paths::VOTER_DASHBOARD>"Back to your dashboard"</A>
        </section>
    }
}
