//! Message list: one bubble per message with a kind-specific body.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is append-only: the poller pushes into `ChatState` and this
//! component renders whatever is there. Text and code bodies go through
//! Leptos text interpolation, so message content is always escaped; the only
//! raw interpolation is the image URL, which is server-controlled.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{Message, MessageKind};
use crate::state::chat::ChatState;
use crate::util::clipboard;
use crate::util::code_tag::split_language_tag;

/// Scrollable message history for the current room.
///
/// Smooth-scrolls to the bottom whenever new messages arrive; an empty poll
/// leaves the scroll position alone.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();
    let rendered_count = RwSignal::new(0usize);

    Effect::new(move || {
        let len = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if len > rendered_count.get_untracked() {
                if let Some(el) = list_ref.get() {
                    scroll_to_latest(&el);
                }
            }
        }

        rendered_count.set(len);
    });

    view! {
        <div class="messages" node_ref=list_ref>
            {move || {
                let messages = chat.get().messages;
                if messages.is_empty() {
                    return view! {
                        <div class="messages__empty">"No messages yet"</div>
                    }
                        .into_any();
                }

                messages
                    .into_iter()
                    .map(|message| view! { <MessageBubble message=message/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

/// One rendered message: meta header plus a body chosen by message kind.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let who = message.display_name().to_owned();
    let time = format_timestamp(&message.created_at);
    let content = message.content.unwrap_or_default();

    // Code messages carry their language as a bracketed prefix on the body.
    let (language, body) = match message.kind {
        MessageKind::Code => {
            let (language, body) = split_language_tag(&content);
            (language.map(str::to_owned), body.to_owned())
        }
        _ => (None, content),
    };

    let body_view = match message.kind {
        MessageKind::Text => view! { <div class="bubble__text">{body}</div> }.into_any(),
        MessageKind::Code => view! { <CodeBody body=body/> }.into_any(),
        MessageKind::Image => {
            let src = message.image_url.unwrap_or_default();
            view! { <img class="bubble__image" src=src alt="image message"/> }.into_any()
        }
        // Unknown kinds keep their header so the room history stays complete.
        MessageKind::Unknown => view! { <></> }.into_any(),
    };

    view! {
        <div class="bubble">
            <div class="bubble__meta">
                <span class="bubble__dot"></span>
                <span>{who}</span>
                <span>"•"</span>
                <span>{time}</span>
                {language.map(|lang| view! { <span class="bubble__tag">{lang}</span> })}
            </div>
            {body_view}
        </div>
    }
}

/// Fixed-width code body with a copy action.
///
/// Copies the raw body text (the language marker is already stripped) and
/// shows a transient "Copied!" confirmation next to the button.
#[component]
fn CodeBody(body: String) -> impl IntoView {
    let copied = RwSignal::new(false);
    let copy_source = body.clone();
    let on_copy = move |_| clipboard::copy_with_confirmation(&copy_source, copied);

    view! {
        <div class="bubble__code-actions">
            <button class="btn bubble__copy" type="button" on:click=on_copy>
                "Copy"
            </button>
            <span class="bubble__copy-done">{move || if copied.get() { "Copied!" } else { "" }}</span>
        </div>
        <pre class="bubble__code"><code>{body}</code></pre>
    }
}

fn format_timestamp(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if parsed.get_time().is_finite() {
            return String::from(parsed.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
        iso.to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        iso.to_owned()
    }
}

#[cfg(feature = "hydrate")]
fn scroll_to_latest(el: &web_sys::HtmlDivElement) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(f64::from(el.scroll_height()));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_to_with_scroll_to_options(&options);
}
