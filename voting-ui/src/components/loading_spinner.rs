use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            <p class="loading__text">{label.unwrap_or_else(|| "Loading...".to_string())}</p>
        </div>
    }
}
