use leptos::form::ActionForm;
use leptos::prelude::*;
use leptos_router::components::A;
use voting_app::domain::paths;

use crate::api::{error_text, SignupFn};
use crate::components::ErrorDisplay;

#[component]
pub fn SignupPage() -> impl IntoView {
    let signup = ServerAction::<SignupFn>::new();
    let pending = signup.pending();

    let signup_error = move || {
        signup
            .value()
            .get()
            .and_then(|result| result.err())
            .map(|e| view! { <ErrorDisplay message=error_text(&e)/> })
    };

    view! {
        <div class="auth">
            <h1 class="auth__title">"Create an account"</h1>
            {signup_error}

            <ActionForm action=signup attr:class="signup-form">
                <input type="text" name="name" class="signup-form__input" placeholder="Full Name" required/>
                <input
                    type="text"
                    name="aadhar_card_number"
                    class="signup-form__input"
                    placeholder="Aadhar Card Number"
                    inputmode="numeric"
                    required
                />
                <input type="password" name="password" class="signup-form__input" placeholder="Password" required/>
                <input type="number" name="age" min="1" class="signup-form__input" placeholder="Age" required/>
                <input type="text" name="address" class="signup-form__input" placeholder="Address" required/>
                <select name="role" class="signup-form__input">
                    <option value="voter" selected>"Voter"</option>
                    <option value="admin">"Admin"</option>
                </select>
                <button type="submit" class="signup-form__button" prop:disabled=move || pending.get()>
                    {move || if pending.get() { "Signing up..." } else { "Sign Up" }}
                </button>
            </ActionForm>

            <p class="auth__switch">
                "Already registered? " <A href=paths::LOGIN>"Sign in"</A>
            </p>
        </div>
    }
}
