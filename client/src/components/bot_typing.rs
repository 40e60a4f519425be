//! Three bouncing dots shown while the assistant composes a reply.

use leptos::prelude::*;

/// Staggered start offsets so the dots bounce in sequence.
const DOT_DELAYS: [&str; 3] = ["0s", "0.2s", "0.4s"];

#[component]
pub fn BotTyping() -> impl IntoView {
    view! {
        <div class="bot-typing" role="status" aria-label="Assistant is typing">
            {DOT_DELAYS
                .iter()
                .map(|delay| view! { <span class="bot-typing__dot" style:animation-delay=*delay></span> })
                .collect_view()}
        </div>
    }
}
