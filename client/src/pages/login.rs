//! Login page: email + password, redirects to `/chat` on success.

use leptos::prelude::*;

use crate::components::credential_card::CredentialCard;
use crate::state::credential::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());

    view! {
        <CredentialCard form submit_label="Login">
            "Don't have an account? "
            <a class="auth-card__link" href="/">
                "Sign up"
            </a>
        </CredentialCard>
    }
}
