//! Card hosting a credential form and its submit flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the login and registration pages. The card owns the form's
//! validation errors and submit phase, builds a `SubmitController` wired to
//! the browser (fetch, `localStorage`, router, alert slot) and renders one
//! `FieldInput` per required field.

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field_input::FieldInput;
use crate::components::submit_button::SubmitButton;
use crate::config::api_base_url;
use crate::net::auth_api::AuthClient;
use crate::net::http::GlooTransport;
use crate::state::credential::{CredentialForm, ValidationErrors};
use crate::state::notification::AlertState;
use crate::state::submit::{SubmitController, SubmitOutcome, SubmitPhase};
use crate::util::navigate::RouterNavigator;
use crate::util::token_store::LocalTokenStore;

#[component]
pub fn CredentialCard<F>(form: RwSignal<F>, submit_label: &'static str, children: Children) -> impl IntoView
where
    F: CredentialForm + Clone + Send + Sync + 'static,
{
    let alerts = expect_context::<RwSignal<AlertState>>();
    let errors = RwSignal::new(ValidationErrors::default());
    let phase = RwSignal::new(SubmitPhase::Idle);

    let controller = SubmitController::new(
        AuthClient::new(api_base_url(), GlooTransport),
        alerts,
        LocalTokenStore,
        RouterNavigator(use_navigate()),
        phase,
    );
    let controller = StoredValue::new_local(Rc::new(controller));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            if let SubmitOutcome::Invalid(found) = controller.submit(&snapshot).await {
                errors.set(found);
            }
        });
    };

    let busy = Signal::derive(move || phase.get() == SubmitPhase::Submitting);

    let fields = F::FIELDS
        .iter()
        .copied()
        .map(|field| {
            let value = Signal::derive(move || form.with(|f| f.value(field).to_owned()));
            let error = Signal::derive(move || errors.with(|e| e.get(field).map(str::to_owned)));
            let on_input = Callback::new(move |text: String| {
                form.update(|f| f.set_value(field, text));
                errors.set(ValidationErrors::default());
            });
            view! { <FieldInput field value error on_input/> }
        })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Pyxell AI"</h1>
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    {fields}
                    <SubmitButton label=submit_label busy/>
                </form>
                <p class="auth-card__footer">{children()}</p>
            </div>
        </div>
    }
}
