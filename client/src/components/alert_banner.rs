//! Global alert banner rendering the single notification slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`. Any page may write to the `RwSignal<AlertState>`
//! context; the banner shows the latest entry and clears it after
//! `NOTIFICATION_TTL_MS` unless a newer notification took its place.

use leptos::prelude::*;

use crate::state::notification::AlertState;

#[component]
pub fn AlertBanner() -> impl IntoView {
    let alerts = expect_context::<RwSignal<AlertState>>();

    Effect::new(move || {
        let live_seq = alerts.with(|state| state.current.as_ref().map(|_| state.seq));
        if let Some(seq) = live_seq {
            schedule_expiry(alerts, seq);
        }
    });

    view! {
        {move || {
            alerts
                .get()
                .current
                .map(|note| {
                    let class = format!("alert {}", note.color.css_modifier());
                    view! {
                        <div class=class role="alert" on:click=move |_| alerts.update(AlertState::dismiss)>
                            {note.message}
                        </div>
                    }
                })
        }}
    }
}

#[cfg(feature = "hydrate")]
fn schedule_expiry(alerts: RwSignal<AlertState>, seq: u64) {
    leptos::task::spawn_local(async move {
        let ttl = std::time::Duration::from_millis(u64::from(crate::config::NOTIFICATION_TTL_MS));
        gloo_timers::future::sleep(ttl).await;
        alerts.update(|state| {
            state.expire(seq);
        });
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_expiry(_alerts: RwSignal<AlertState>, _seq: u64) {}
