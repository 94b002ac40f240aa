use leptos::prelude::*;

use crate::api::{error_text, list_tallies};
use crate::components::{ErrorDisplay, LoadingSpinner, TallyBoard};

#[component]
pub fn ResultsPage() -> impl IntoView {
    let tallies = Resource::new(|| (), |_| list_tallies());

    view! {
        <section class="panel">
            <h1 class="panel__title">"Voting Results"</h1>
            <Suspense fallback=|| view! { <LoadingSpinner label="Loading results..."/> }>
                {move || tallies.get().map(|result| match result {
                    Ok(rows) => view! { <TallyBoard tallies=rows/> }.into_any(),
                    Err(e) => view! {
                        <ErrorDisplay
                            message=error_text(&e)
                            on_retry=Callback::new(move |_| tallies.refetch())
                        />
                    }
                    .into_any(),
                })}
            </Suspense>
        </section>
    }
}
