//! Labeled credential input with inline validation message.
//!
//! Password fields get a show/hide toggle that flips the input type.

#[cfg(test)]
#[path = "field_input_test.rs"]
mod field_input_test;

use leptos::prelude::*;

use crate::state::credential::Field;

/// Single labeled input bound to one credential field.
#[component]
pub fn FieldInput(
    field: Field,
    value: Signal<String>,
    error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let is_secret = field == Field::Password;

    view! {
        <div class="auth-field">
            <label class="auth-field__label" for=field.key()>
                {field.label()}
            </label>
            <div class="auth-field__control">
                <input
                    id=field.key()
                    name=field.key()
                    class=move || input_class(error.with(Option::is_some))
                    type=move || input_type(field, revealed.get())
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <Show when=move || is_secret>
                    <button
                        type="button"
                        class="auth-field__toggle"
                        on:click=move |_| revealed.update(|r| *r = !*r)
                    >
                        {move || toggle_label(revealed.get())}
                    </button>
                </Show>
            </div>
            {move || error.get().map(|msg| view! { <p class="auth-field__error">{msg}</p> })}
        </div>
    }
}

fn input_class(invalid: bool) -> &'static str {
    if invalid { "auth-input auth-input--invalid" } else { "auth-input" }
}

fn input_type(field: Field, revealed: bool) -> &'static str {
    match field {
        Field::Password if !revealed => "password",
        Field::Email => "email",
        _ => "text",
    }
}

fn toggle_label(revealed: bool) -> &'static str {
    if revealed { "Hide" } else { "Show" }
}
