//! Clipboard write with a transient confirmation.

use leptos::prelude::*;

/// How long the "Copied!" confirmation stays up before reverting.
#[cfg(feature = "hydrate")]
const COPY_CONFIRM_MS: u32 = 1_200;

/// Copy `text` to the clipboard. On success, flips `copied` on for a short
/// confirmation window; a denied or unavailable clipboard raises a blocking
/// notice instead.
pub fn copy_with_confirmation(text: &str, copied: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(text);
        leptos::task::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => {
                    copied.set(true);
                    gloo_timers::callback::Timeout::new(COPY_CONFIRM_MS, move || copied.set(false)).forget();
                }
                Err(_) => {
                    crate::util::notice::blocking_notice("Copy failed. Your browser may block clipboard access.");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, copied);
    }
}
