use leptos::prelude::*;
use voting_app::domain::{BallotPhase, Candidate, Query};

use crate::api::{error_text, fetch_profile, list_candidates, list_tallies, CastVoteFn};
use crate::components::{ErrorDisplay, LoadingSpinner, Notice, NoticeBanner, TallyBoard};

#[component]
pub fn VoterDashboardPage() -> impl IntoView {
    let candidates = Resource::new(|| (), |_| list_candidates());
    let tallies = Resource::new(|| (), |_| list_tallies());
    let profile = Resource::new(|| (), |_| fetch_profile());

    let cast_vote = ServerAction::<CastVoteFn>::new();
    let notice = RwSignal::new(None::<Notice>);

    let phase = Memo::new(move |_| {
        let loaded = match profile.get() {
            None => return BallotPhase::Loading,
            Some(Ok(user)) => BallotPhase::Loading.loaded(user.has_voted),
            Some(Err(e)) => {
                leptos::logging::warn!("profile unavailable, treating as not voted: {e}");
                BallotPhase::Loading.loaded(false)
            }
        };
        let voted_now = matches!(cast_vote.value().get(), Some(Ok(_)));
        loaded.after_vote(voted_now)
    });

    Effect::new(move |_| {
        let Some(outcome) = cast_vote.value().get() else {
            return;
        };

        notice.set(Some(Notice::from_outcome(&outcome)));
        if let Ok(mutation) = outcome {
            for query in mutation.invalidates() {
                match query {
                    Query::Tallies => tallies.refetch(),
                    Query::Profile => profile.refetch(),
                    Query::Candidates => candidates.refetch(),
                    Query::Voters => {}
                }
            }
        }
    });

    let on_vote = Callback::new(move |candidate: Candidate| match candidate.id {
        Some(candidate_id) => {
            cast_vote.dispatch(CastVoteFn { candidate_id });
        }
        None => notice.set(Some(Notice::error("Invalid candidate id"))),
    });
    let voting = Signal::derive(move || cast_vote.pending().get());

    view! {
        <section class="panel">
            <h1 class="panel__title">"Voter Dashboard"</h1>
            <NoticeBanner notice=notice/>

            <Transition fallback=|| view! { <LoadingSpinner/> }>
                {move || {
                    let candidates = candidates.get()?;
                    let tallies = tallies.get()?;
                    let _profile = profile.get()?;

                    let content = if phase.get().shows_results() {
                        view! {
                            <p class="ballot__voted">"✓ You have voted."</p>
                            <h2 class="panel__subtitle">"Live Results"</h2>
                            {match tallies {
                                Ok(rows) => view! { <TallyBoard tallies=rows/> }.into_any(),
                                Err(e) => view! { <ErrorDisplay message=error_text(&e)/> }.into_any(),
                            }}
                        }
                        .into_any()
                    } else {
                        view! {
                            <h2 class="panel__subtitle">"Vote for Your Candidate"</h2>
                            {match candidates {
                                Ok(list) => view! {
                                    <CandidateList candidates=list on_vote=on_vote voting=voting/>
                                }
                                .into_any(),
                                Err(e) => view! { <ErrorDisplay message=error_text(&e)/> }.into_any(),
                            }}
                        }
                        .into_any()
                    };
                    Some(content)
                }}
            </Transition>
        </section>
    }
}

#[component]
fn CandidateList(
    candidates: Vec<Candidate>,
    on_vote: Callback<Candidate>,
    voting: Signal<bool>,
) -> impl IntoView {
    if candidates.is_empty() {
        return view! { <p class="ballot__empty">"No candidates yet."</p> }.into_any();
    }

    view! {
        <ul class="ballot">
            {candidates
                .into_iter()
                .map(|candidate| {
                    let age = candidate.age.map(|age| format!("Age {}", age));
                    let image = candidate.image.clone().map(|src| view! {
                        <img class="ballot__image" src=src alt=candidate.name.clone()/>
                    });
                    let name = candidate.name.clone();
                    let party = candidate.party.clone();

                    view! {
                        <li class="ballot__card">
                            {image}
                            <p class="ballot__name">{name}</p>
                            <p class="ballot__party">{party}</p>
                            <p class="ballot__age">{age}</p>
                            <button
                                class="ballot__button"
                                prop:disabled=move || voting.get()
                                on:click=move |_| on_vote.run(candidate.clone())
                            >
                                "Vote"
                            </button>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
