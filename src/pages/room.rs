//! Room page — poll wiring and workspace layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the polling lifecycle: it attaches the chat session to the
//! routed room, fires one immediate poll, and keeps a fixed wall-clock
//! interval running for as long as the page is mounted. The composer's
//! post-send refresh funnels through the same guarded routine.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::composer::Composer;
use crate::components::expiry_badge::ExpiryBadge;
use crate::components::message_list::MessageList;
use crate::state::chat::ChatState;
use crate::state::expiry::ExpiryState;

/// Poll period. Wall-clock: a tick that fires while the previous fetch is
/// still outstanding is skipped by the in-flight guard, never queued.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_MS: u64 = 3_000;

/// Room page — header with the room code and expiry badge, the message
/// list, and the composer. Reads the room code from the route parameter.
#[component]
pub fn RoomPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let expiry = expect_context::<RwSignal<ExpiryState>>();
    let params = use_params_map();

    let room_code = move || params.read().get("code").unwrap_or_default();

    // Attach the session to the routed room, discarding any previous room's
    // history and cursor.
    Effect::new(move || {
        let code = room_code();
        if code.is_empty() {
            return;
        }
        if chat.get_untracked().room_code.as_deref() == Some(code.as_str()) {
            return;
        }
        chat.update(|c| c.reset_for_room(&code));
    });

    #[cfg(feature = "hydrate")]
    {
        // One immediate poll per room attachment.
        let last_polled_room = RwSignal::new(None::<String>);
        Effect::new(move || {
            let Some(code) = chat.get().room_code else {
                return;
            };
            if last_polled_room.get_untracked().as_deref() == Some(code.as_str()) {
                return;
            }
            last_polled_room.set(Some(code));
            leptos::task::spawn_local(run_poll(chat, expiry));
        });

        // Fixed wall-clock cadence: each tick spawns the poll without
        // awaiting it, so a slow fetch never stretches the period.
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                leptos::task::spawn_local(run_poll(chat, expiry));
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_refresh = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(run_poll(chat, expiry));
        #[cfg(not(feature = "hydrate"))]
        let _ = (chat, expiry);
    });

    view! {
        <div class="room-page">
            <header class="room-page__header">
                <span class="room-page__title">
                    "Room " <span class="room-page__code">{room_code}</span>
                </span>
                <ExpiryBadge/>
            </header>
            <MessageList/>
            <Composer on_refresh=on_refresh/>
        </div>
    }
}

/// Fetch new messages once, honoring the single in-flight guard.
///
/// Background failures are swallowed (debug log only) so the UI never
/// interrupts the user for a failed poll; the cursor is untouched, and the
/// next tick retries from the same point. The guard is always cleared,
/// including on failure.
#[cfg(feature = "hydrate")]
async fn run_poll(chat: RwSignal<ChatState>, expiry: RwSignal<ExpiryState>) {
    let session = chat.get_untracked();
    let Some(room) = session.room_code else {
        return;
    };
    if !chat.try_update(ChatState::begin_poll).unwrap_or(false) {
        return;
    }

    match crate::net::api::fetch_messages(&room, session.cursor.as_deref()).await {
        Ok(resp) => {
            let deadline = resp.expires_at.clone();
            chat.update(|c| {
                c.apply_poll_response(resp);
            });
            // Countdown sync: the latest server deadline always wins.
            if let Some(iso) = deadline {
                let ms = js_sys::Date::parse(&iso);
                if ms.is_finite() {
                    expiry.update(|e| e.set_deadline(ms));
                }
            }
        }
        Err(err) => log::debug!("message poll failed: {err}"),
    }

    chat.update(ChatState::finish_poll);
}
