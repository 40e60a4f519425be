//! Assistant chat page with typing indicator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached after a successful login. Requires a stored token; without one the
//! page redirects back to `/login`. Each sent message waits for exactly one
//! reply before the next can be sent.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::bot_typing::BotTyping;
use crate::config::api_base_url;
use crate::net::chat_api::ChatClient;
use crate::net::http::GlooTransport;
use crate::state::chat::{Author, ChatMessage, ChatState};
use crate::state::notification::{AlertState, Notification, Notifier};
use crate::util::auth::install_unauth_redirect;
use crate::util::token_store::{LocalTokenStore, TokenStore};

const CHAT_FAILURE_MESSAGE: &str = "Message failed. Please try again.";

#[component]
pub fn ChatPage() -> impl IntoView {
    let alerts = expect_context::<RwSignal<AlertState>>();
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let client = StoredValue::new(ChatClient::new(api_base_url(), GlooTransport));

    install_unauth_redirect(LocalTokenStore, use_navigate());

    // Keep the newest message in view.
    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(text) = chat.try_update(|c| c.begin_exchange(&input.get_untracked())).flatten() else {
            return;
        };
        input.set(String::new());
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match client.ask(LocalTokenStore.load_token(), &text).await {
                Ok(reply) => chat.update(|c| c.receive_reply(reply)),
                Err(err) => {
                    leptos::logging::error!("chat request failed: {err}");
                    chat.update(ChatState::reply_failed);
                    alerts.show(Notification::failure(CHAT_FAILURE_MESSAGE));
                }
            }
        });
    };

    let sendable = move || can_send(&input.get(), chat.with(|c| c.bot_typing));

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Pyxell AI"</h1>
            </header>
            <div class="chat-page__messages" node_ref=messages_ref>
                <Show when=move || chat.with(|c| c.messages.is_empty())>
                    <div class="chat-page__empty">"Ask me anything to get started."</div>
                </Show>
                <For
                    each=move || chat.get().messages
                    key=|msg| msg.id.clone()
                    children=move |msg: ChatMessage| {
                        view! {
                            <div class=message_class(msg.author)>
                                <p class="chat-message__text">{msg.content}</p>
                            </div>
                        }
                    }
                />
                <Show when=move || chat.with(|c| c.bot_typing)>
                    <BotTyping/>
                </Show>
            </div>
            <form class="chat-page__input-row" on:submit=on_submit>
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Message Pyxell..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="chat-page__send" type="submit" disabled=move || !sendable()>
                    "Send"
                </button>
            </form>
        </div>
    }
}

fn can_send(input: &str, bot_typing: bool) -> bool {
    !bot_typing && !input.trim().is_empty()
}

fn message_class(author: Author) -> &'static str {
    match author {
        Author::User => "chat-message chat-message--user",
        Author::Bot => "chat-message chat-message--bot",
    }
}
