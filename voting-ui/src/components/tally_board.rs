use leptos::prelude::*;
use voting_app::domain::{tally, VoteTally};

/// One proportional bar per entry.
#[component]
pub fn TallyBoard(tallies: Vec<VoteTally>) -> impl IntoView {
    let Some(board) = tally::board(&tallies) else {
        return view! { <p class="tally__empty">{tally::NO_RESULTS}</p> }.into_any();
    };

    let rows = board
        .shares
        .into_iter()
        .map(|share| {
            let width = share.bar_width();
            let percentage = share.percentage_label();

            view! {
                <li class="tally__row">
                    <p class="tally__label">
                        {share.label} " - " {share.votes} " votes"
                    </p>
                    <div class="tally__track">
                        <div class="tally__bar" style=width></div>
                    </div>
                    <p class="tally__percentage">{percentage}</p>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="tally">
            <ul class="tally__list">{rows}</ul>
            <p class="tally__total">"Total votes: " {board.total}</p>
        </div>
    }
    .into_any()
}
