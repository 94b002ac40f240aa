use leptos::prelude::*;
use voting_app::domain::CandidateInput;

#[component]
pub fn CandidateForm(
    draft: RwSignal<CandidateInput>,
    #[prop(into)] on_submit: Callback<CandidateInput>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(draft.get());
    };

    view! {
        <form class="candidate-form" on:submit=on_form_submit>
            <input
                type="text"
                class="candidate-form__input"
                placeholder="Candidate Name"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                prop:disabled=move || is_loading.get()
                required
            />
            <input
                type="text"
                class="candidate-form__input"
                placeholder="Party"
                prop:value=move || draft.with(|d| d.party.clone())
                on:input=move |ev| draft.update(|d| d.party = event_target_value(&ev))
                prop:disabled=move || is_loading.get()
                required
            />
            <input
                type="number"
                min="1"
                class="candidate-form__input"
                placeholder="Age"
                prop:value=move || draft.with(|d| d.age.clone())
                on:input=move |ev| draft.update(|d| d.age = event_target_value(&ev))
                prop:disabled=move || is_loading.get()
                required
            />
            <button
                type="submit"
                class="candidate-form__button"
                prop:disabled=move || is_loading.get()
            >
                {move || if is_loading.get() { "Adding..." } else { "Add Candidate" }}
            </button>
        </form>
    }
}
