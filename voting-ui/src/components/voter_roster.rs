use leptos::prelude::*;
use voting_app::domain::Voter;

#[component]
pub fn VoterRoster(voters: Vec<Voter>) -> impl IntoView {
    if voters.is_empty() {
        return view! { <p class="roster__empty">"No voter data available."</p> }.into_any();
    }

    view! {
        <ul class="roster">
            {voters
                .into_iter()
                .map(|voter| {
                    let class = if voter.has_voted {
                        "roster__item roster__item--voted"
                    } else {
                        "roster__item"
                    };
                    view! { <li class=class>{voter.roster_line()}</li> }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
