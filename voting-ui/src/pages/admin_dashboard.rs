use leptos::prelude::*;
use voting_app::domain::{CandidateInput, Mutation, Query};

use crate::api::{error_text, list_tallies, list_voters, AddCandidateFn, ResetVotingFn};
use crate::components::{
    CandidateForm, ErrorDisplay, LoadingSpinner, Notice, NoticeBanner, TallyBoard, VoterRoster,
};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let tallies = Resource::new(|| (), |_| list_tallies());
    let voters = Resource::new(|| (), |_| list_voters());

    let add_candidate = ServerAction::<AddCandidateFn>::new();
    let reset_voting = ServerAction::<ResetVotingFn>::new();
    let draft = RwSignal::new(CandidateInput::default());
    let notice = RwSignal::new(None::<Notice>);

    let invalidate = move |mutation: Mutation| {
        for query in mutation.invalidates() {
            match query {
                Query::Tallies => tallies.refetch(),
                Query::Voters => voters.refetch(),
                Query::Candidates | Query::Profile => {}
            }
        }
    };

    Effect::new(move |_| {
        let Some(outcome) = add_candidate.value().get() else {
            return;
        };

        notice.set(Some(Notice::from_outcome(&outcome)));
        if let Ok(mutation) = outcome {
            draft.set(CandidateInput::default());
            invalidate(mutation);
        }
    });

    Effect::new(move |_| {
        let Some(outcome) = reset_voting.value().get() else {
            return;
        };

        notice.set(Some(Notice::from_outcome(&outcome)));
        if let Ok(mutation) = outcome {
            invalidate(mutation);
        }
    });

    let on_add = Callback::new(move |input: CandidateInput| {
        add_candidate.dispatch(AddCandidateFn {
            name: input.name,
            party: input.party,
            age: input.age,
        });
    });
    let adding = Signal::derive(move || add_candidate.pending().get());
    let resetting = move || reset_voting.pending().get();

    view! {
        <section class="panel">
            <h1 class="panel__title">"Admin Dashboard"</h1>
            <NoticeBanner notice=notice/>

            <div class="admin__controls">
                <h2 class="panel__subtitle">"Add Candidate"</h2>
                <CandidateForm draft=draft on_submit=on_add is_loading=adding/>

                <button
                    class="admin__reset"
                    prop:disabled=resetting
                    on:click=move |_| {
                        reset_voting.dispatch(ResetVotingFn {});
                    }
                >
                    {move || if resetting() { "Resetting..." } else { "Reset Voting" }}
                </button>
            </div>

            <h2 class="panel__subtitle">"Results"</h2>
            <Transition fallback=|| view! { <LoadingSpinner label="Loading results..."/> }>
                {move || tallies.get().map(|result| match result {
                    Ok(rows) => view! { <TallyBoard tallies=rows/> }.into_any(),
                    Err(e) => view! { <ErrorDisplay message=error_text(&e)/> }.into_any(),
                })}
            </Transition>

            <h2 class="panel__subtitle">"Voters"</h2>
            <Transition fallback=|| view! { <LoadingSpinner label="Loading voters..."/> }>
                {move || voters.get().map(|result| match result {
                    Ok(rows) => view! { <VoterRoster voters=rows/> }.into_any(),
                    Err(e) => view! { <ErrorDisplay message=error_text(&e)/> }.into_any(),
                })}
            </Transition>
        </section>
    }
}
