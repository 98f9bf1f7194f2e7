//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, room::RoomPage};
use crate::state::{chat::ChatState, expiry::ExpiryState, ui::UiState};

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
/// Provides the session state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One session object per page load; every component reads these
    // contexts instead of module globals.
    let chat = RwSignal::new(ChatState::default());
    let expiry = RwSignal::new(ExpiryState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(chat);
    provide_context(expiry);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/ephemeral-chat.css"/>
        <Title text="Ephemeral Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("r"), ParamSegment("code")) view=RoomPage/>
            </Routes>
        </Router>
    }
}
