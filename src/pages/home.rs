//! Landing page: create a room or join one by code.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Home page with a create-room form and a join-by-code input.
///
/// Room creation is a full-page POST; the server answers with a redirect
/// into the freshly created room.
#[component]
pub fn HomePage() -> impl IntoView {
    let join_code = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_join = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code = join_code.get();
        let code = code.trim();
        if code.is_empty() {
            return;
        }
        navigate(&format!("/r/{code}"), NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"Ephemeral Chat"</h1>
                <p class="home-card__subtitle">"Rooms expire after a period of inactivity."</p>
                <form method="post" action="/create/">
                    <button class="btn btn--primary" type="submit">
                        "Create a room"
                    </button>
                </form>
                <div class="home-card__divider"></div>
                <p class="home-card__subtitle">"Or join an existing room"</p>
                <form class="home-card__join" on:submit=on_join>
                    <input
                        class="home-card__input"
                        type="text"
                        maxlength="12"
                        placeholder="room code"
                        prop:value=move || join_code.get()
                        on:input=move |ev| join_code.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Join"
                    </button>
                </form>
            </div>
        </div>
    }
}
