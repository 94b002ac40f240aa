pub mod api;
pub mod components;
pub mod pages;
pub mod session;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use voting_app::domain::Role;

use components::{Nav, RouteGuard};
use pages::{
    AdminDashboardPage, LoginPage, ResultsPage, SignupPage, UnauthorizedPage, VoterDashboardPage,
};
use session::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Voting"/>
        <Meta name="description" content="Cast your vote and follow the live results"/>

        <Router>
            <SessionProvider>
                <Nav/>
                <main class="container">
                    <Routes fallback=|| "404 - Page Not Found">
                        <Route path=path!("/") view=LoginPage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/signup") view=SignupPage/>
                        <Route
                            path=path!("/dashboard")
                            view=|| view! { <RouteGuard><VoterDashboardPage/></RouteGuard> }
                        />
                        <Route
                            path=path!("/admin/dashboard")
                            view=|| view! {
                                <RouteGuard role=Role::Admin><AdminDashboardPage/></RouteGuard>
                            }
                        />
                        <Route path=path!("/results") view=ResultsPage/>
                        <Route path=path!("/unauthorized") view=UnauthorizedPage/>
                    </Routes>
                </main>
            </SessionProvider>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
