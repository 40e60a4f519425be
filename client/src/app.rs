//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::alert_banner::AlertBanner;
use crate::pages::{chat::ChatPage, login::LoginPage, register::RegisterPage};
use crate::state::notification::AlertState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the global alert slot and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let alerts = RwSignal::new(AlertState::default());
    provide_context(alerts);

    view! {
        <Stylesheet id="leptos" href="/pkg/pyxell-web.css"/>
        <Title text="Pyxell AI"/>

        <Router>
            <AlertBanner/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("chat") view=ChatPage/>
                </Routes>
            </main>
        </Router>
    }
}
