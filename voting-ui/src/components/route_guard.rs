use leptos::prelude::*;
use leptos_router::components::Redirect;
use voting_app::domain::{guard, GuardDecision, Role};

use super::LoadingSpinner;
use crate::session::use_session;

/// Renders `children` only when the session satisfies `role`.
#[component]
pub fn RouteGuard(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let ctx = use_session();

    view! {
        <Suspense fallback=|| view! { <LoadingSpinner/> }>
            {move || {
                ctx.session.get().map(|result| {
                    let summary = result.ok().flatten();
                    match guard(summary.as_ref(), role) {
                        GuardDecision::Render => children().into_any(),
                        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
                    }
                })
            }}
        </Suspense>
    }
}
