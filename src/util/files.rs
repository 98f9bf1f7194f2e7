//! File helpers for the composer: plain-text detection, file reading, and
//! object-URL preview/download.
//!
//! TRADE-OFFS
//! ==========
//! Preview and download are best-effort browser-only actions; SSR paths
//! safely no-op. Object URLs are revoked on a short timer so the browser
//! never accumulates handles for throwaway blobs.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// How long a preview tab gets to load its object URL before revocation.
#[cfg(feature = "hydrate")]
const PREVIEW_URL_TTL_MS: u32 = 10_000;

/// Whether an uploaded file should be routed through the text-send path
/// instead of the image endpoint: a `.txt` extension (any case) or a
/// plain-text content type.
pub fn is_plain_text_upload(name: &str, content_type: &str) -> bool {
    name.to_lowercase().ends_with(".txt") || content_type == "text/plain"
}

/// Read an uploaded file's contents as text.
///
/// # Errors
///
/// Returns an error string if the browser read fails or the result is not a
/// string.
#[cfg(feature = "hydrate")]
pub async fn read_file_text(file: &web_sys::File) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|_| "file read failed".to_owned())?;
    text.as_string().ok_or_else(|| "file read failed".to_owned())
}

/// Open drafted text in a new tab via a temporary `text/plain` object URL.
#[cfg(feature = "hydrate")]
pub fn open_text_preview(content: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(url) = text_object_url(content) else {
        return;
    };
    let _ = window.open_with_url_and_target(&url, "_blank");
    gloo_timers::callback::Timeout::new(PREVIEW_URL_TTL_MS, move || {
        let _ = web_sys::Url::revoke_object_url(&url);
    })
    .forget();
}

#[cfg(not(feature = "hydrate"))]
pub fn open_text_preview(content: &str) {
    let _ = content;
}

/// Download drafted text as a file by clicking a synthetic anchor. The
/// object URL is revoked and the anchor removed right after the click.
#[cfg(feature = "hydrate")]
pub fn download_text_file(file_name: &str, content: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Some(url) = text_object_url(content) else {
        return;
    };
    let Ok(anchor) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = anchor.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(&url);
    anchor.set_download(file_name);
    let _ = body.append_child(&anchor);
    anchor.click();
    gloo_timers::callback::Timeout::new(0, move || {
        let _ = web_sys::Url::revoke_object_url(&url);
        anchor.remove();
    })
    .forget();
}

#[cfg(not(feature = "hydrate"))]
pub fn download_text_file(file_name: &str, content: &str) {
    let _ = (file_name, content);
}

#[cfg(feature = "hydrate")]
fn text_object_url(content: &str) -> Option<String> {
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(parts.as_ref(), &options).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}
