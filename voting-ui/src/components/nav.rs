use leptos::prelude::*;
use leptos_router::components::A;
use voting_app::domain::{paths, Role};

use crate::session::use_session;

#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_session();

    view! {
        <nav class="nav">
            <A href=paths::RESULTS attr:class="nav__brand">"Voting"</A>
            <Transition fallback=|| ()>
                {move || ctx.summary().map(|summary| {
                    let home = summary.role.dashboard_path();
                    let badge = (summary.role == Role::Admin).then(|| view! {
                        <span class="nav__badge">"admin"</span>
                    });

                    view! {
                        <div class="nav__user">
                            <A href=home attr:class="nav__link">"Dashboard"</A>
                            <span class="nav__name">{summary.user.display_name().to_string()}</span>
                            {badge}
                            <form action="/auth/logout" method="post" class="nav__logout">
                                <button type="submit" class="nav__logout-button">"Logout"</button>
                            </form>
                        </div>
                    }
                })}
            </Transition>
        </nav>
    }
}
