//! Composer: mode switcher plus the three send forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one input panel (text / code / file) is visible at a time,
//! selected by the mode radio. Each form owns its own busy flag and
//! "Sending…" hint; a successful submission resets the form and asks the
//! page for exactly one follow-up poll via `on_refresh`. Once the room has
//! expired every control here is permanently disabled.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::SendError;
use crate::state::chat::ChatState;
use crate::state::expiry::ExpiryState;
use crate::state::ui::{ComposeMode, UiState};
use crate::util::code_tag::{download_file_name, prepend_language_tag};
use crate::util::files;
#[cfg(feature = "hydrate")]
use crate::util::notice::blocking_notice;

/// The send forms under the message list.
#[component]
pub fn Composer(on_refresh: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let expiry = expect_context::<RwSignal<ExpiryState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let locked = move || expiry.get().expired;

    // Text panel state.
    let text_nickname = RwSignal::new(String::new());
    let text_content = RwSignal::new(String::new());
    let text_busy = RwSignal::new(false);

    // Code panel state.
    let code_nickname = RwSignal::new(String::new());
    let code_language = RwSignal::new(String::new());
    let code_content = RwSignal::new(String::new());
    let code_busy = RwSignal::new(false);

    // File panel state.
    let file_nickname = RwSignal::new(String::new());
    let file_busy = RwSignal::new(false);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(not(feature = "hydrate"))]
    let _ = (chat, on_refresh);

    let on_text_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if text_busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            text_busy.set(true);
            leptos::task::spawn_local(async move {
                let room = chat.get_untracked().room_code.unwrap_or_default();
                let outcome =
                    crate::net::api::send_text(&room, &text_nickname.get_untracked(), &text_content.get_untracked())
                        .await;
                match outcome {
                    Ok(()) => {
                        text_nickname.set(String::new());
                        text_content.set(String::new());
                        on_refresh.run(());
                    }
                    Err(err) => blocking_notice(&err.notice_text()),
                }
                text_busy.set(false);
            });
        }
    };

    let on_code_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if code_busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            code_busy.set(true);
            leptos::task::spawn_local(async move {
                let room = chat.get_untracked().room_code.unwrap_or_default();
                let outcome = crate::net::api::send_code(
                    &room,
                    &code_nickname.get_untracked(),
                    &code_language.get_untracked(),
                    &code_content.get_untracked(),
                )
                .await;
                match outcome {
                    Ok(()) => {
                        code_nickname.set(String::new());
                        code_language.set(String::new());
                        code_content.set(String::new());
                        on_refresh.run(());
                    }
                    Err(err) => blocking_notice(&err.notice_text()),
                }
                code_busy.set(false);
            });
        }
    };

    let on_file_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if file_busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                blocking_notice("Choose a file first");
                return;
            };
            file_busy.set(true);
            leptos::task::spawn_local(async move {
                let room = chat.get_untracked().room_code.unwrap_or_default();
                let nickname = file_nickname.get_untracked();
                // Plain-text uploads travel the text-send path instead of the
                // image endpoint.
                let outcome = if files::is_plain_text_upload(&file.name(), &file.type_()) {
                    match files::read_file_text(&file).await {
                        Ok(content) => crate::net::api::send_text(&room, &nickname, &content).await,
                        Err(err) => Err(SendError::Network(err)),
                    }
                } else {
                    crate::net::api::send_image(&room, &nickname, &file).await
                };
                match outcome {
                    Ok(()) => {
                        file_nickname.set(String::new());
                        input.set_value("");
                        on_refresh.run(());
                    }
                    Err(err) => blocking_notice(&err.notice_text()),
                }
                file_busy.set(false);
            });
        }
    };

    // Local-only draft actions: no server round-trip.
    let on_text_preview = move |_| {
        files::open_text_preview(&text_content.get_untracked());
    };
    let on_code_download = move |_| {
        let language = code_language.get_untracked();
        let mut content = code_content.get_untracked();
        if !language.is_empty() {
            content = prepend_language_tag(&language, &content);
        }
        files::download_text_file(&download_file_name(&language), &content);
    };

    view! {
        <div class="composer">
            <div class="composer__modes">
                <label class="composer__mode">
                    <input
                        type="radio"
                        name="mode"
                        value="text"
                        prop:checked=move || ui.get().mode == ComposeMode::Text
                        on:change=move |_| ui.update(|u| u.mode = ComposeMode::Text)
                    />
                    "Text"
                </label>
                <label class="composer__mode">
                    <input
                        type="radio"
                        name="mode"
                        value="code"
                        prop:checked=move || ui.get().mode == ComposeMode::Code
                        on:change=move |_| ui.update(|u| u.mode = ComposeMode::Code)
                    />
                    "Code"
                </label>
                <label class="composer__mode">
                    <input
                        type="radio"
                        name="mode"
                        value="file"
                        prop:checked=move || ui.get().mode == ComposeMode::File
                        on:change=move |_| ui.update(|u| u.mode = ComposeMode::File)
                    />
                    "File"
                </label>
            </div>

            <Show when=move || ui.get().mode == ComposeMode::Text>
                <form class="composer__panel" on:submit=on_text_submit>
                    <input
                        class="composer__input"
                        type="text"
                        maxlength="24"
                        placeholder="Nickname (optional)"
                        prop:value=move || text_nickname.get()
                        on:input=move |ev| text_nickname.set(event_target_value(&ev))
                        disabled=locked
                    />
                    <textarea
                        class="composer__textarea"
                        rows="2"
                        maxlength="5000"
                        placeholder="Say something"
                        prop:value=move || text_content.get()
                        on:input=move |ev| text_content.set(event_target_value(&ev))
                        disabled=locked
                    ></textarea>
                    <div class="composer__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || text_busy.get() || locked()>
                            "Send"
                        </button>
                        <button class="btn" type="button" on:click=on_text_preview disabled=locked>
                            "Preview"
                        </button>
                        <span class="composer__hint">{move || if text_busy.get() { "Sending…" } else { "" }}</span>
                    </div>
                </form>
            </Show>

            <Show when=move || ui.get().mode == ComposeMode::Code>
                <form class="composer__panel" on:submit=on_code_submit>
                    <input
                        class="composer__input"
                        type="text"
                        maxlength="24"
                        placeholder="Nickname (optional)"
                        prop:value=move || code_nickname.get()
                        on:input=move |ev| code_nickname.set(event_target_value(&ev))
                        disabled=locked
                    />
                    <input
                        class="composer__input"
                        type="text"
                        maxlength="24"
                        placeholder="Language (optional)"
                        prop:value=move || code_language.get()
                        on:input=move |ev| code_language.set(event_target_value(&ev))
                        disabled=locked
                    />
                    <textarea
                        class="composer__textarea composer__textarea--code"
                        rows="6"
                        maxlength="20000"
                        placeholder="Paste code here"
                        prop:value=move || code_content.get()
                        on:input=move |ev| code_content.set(event_target_value(&ev))
                        disabled=locked
                    ></textarea>
                    <div class="composer__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || code_busy.get() || locked()>
                            "Send"
                        </button>
                        <button class="btn" type="button" on:click=on_code_download disabled=locked>
                            "Download"
                        </button>
                        <span class="composer__hint">{move || if code_busy.get() { "Sending…" } else { "" }}</span>
                    </div>
                </form>
            </Show>

            <Show when=move || ui.get().mode == ComposeMode::File>
                <form class="composer__panel" on:submit=on_file_submit>
                    <input
                        class="composer__input"
                        type="text"
                        maxlength="24"
                        placeholder="Nickname (optional)"
                        prop:value=move || file_nickname.get()
                        on:input=move |ev| file_nickname.set(event_target_value(&ev))
                        disabled=locked
                    />
                    <input class="composer__file" type="file" node_ref=file_input_ref disabled=locked/>
                    <div class="composer__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || file_busy.get() || locked()>
                            "Send"
                        </button>
                        <span class="composer__hint">{move || if file_busy.get() { "Sending…" } else { "" }}</span>
                    </div>
                </form>
            </Show>
        </div>
    }
}
