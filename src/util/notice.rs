//! Blocking user-facing notices.
//!
//! Submission and clipboard failures interrupt the user; background poll
//! failures never come through here.

/// Show a blocking notice. No-op outside the browser.
pub fn blocking_notice(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
