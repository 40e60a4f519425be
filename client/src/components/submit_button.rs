//! Submit button that swaps its label for a spinner while busy.

use leptos::prelude::*;

#[component]
pub fn SubmitButton(label: &'static str, busy: Signal<bool>) -> impl IntoView {
    view! {
        <button
            class="auth-button"
            type="submit"
            disabled=move || busy.get()
            aria-busy=move || busy.get().to_string()
        >
            <Show when=move || busy.get() fallback=move || label>
                <Spinner/>
            </Show>
        </button>
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span class="spinner" role="status" aria-label="Loading"></span> }
}
