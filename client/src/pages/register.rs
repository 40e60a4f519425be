//! Registration page served at `/`; redirects to `/login` on success.

use leptos::prelude::*;

use crate::components::credential_card::CredentialCard;
use crate::state::credential::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());

    view! {
        <CredentialCard form submit_label="Register">
            "Have an account? "
            <a class="auth-card__link" href="/login">
                "Sign in"
            </a>
        </CredentialCard>
    }
}
