//! REST helpers for the room message API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `fetch_messages` returns `Result<_, String>`: poll failures are swallowed
//! by the caller, so a message is all that is needed. The send helpers return
//! [`SendError`] instead, preserving the server's JSON error payload for the
//! blocking notice shown to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::MessagesResponse;

/// Every request carries this header so the server can distinguish
/// client-originated asynchronous calls from full-page navigations.
#[cfg(feature = "hydrate")]
const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "fetch");

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(room: &str) -> String {
    format!("/api/{room}/messages/")
}

#[cfg(any(test, feature = "hydrate"))]
fn send_text_endpoint(room: &str) -> String {
    format!("/api/{room}/send/text/")
}

#[cfg(any(test, feature = "hydrate"))]
fn send_code_endpoint(room: &str) -> String {
    format!("/api/{room}/send/code/")
}

#[cfg(any(test, feature = "hydrate"))]
fn send_image_endpoint(room: &str) -> String {
    format!("/api/{room}/send/image/")
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_request_failed(status: u16) -> String {
    format!("messages request failed: {status}")
}

/// Failure modes of a message submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SendError {
    /// The server rejected the submission. Carries the parsed JSON error
    /// payload, or an empty object when the body was not valid JSON.
    Rejected(serde_json::Value),
    /// The request never produced a response.
    Network(String),
}

impl SendError {
    /// Text for the blocking notice shown to the user.
    ///
    /// Rejections surface the server's `errors` detail when present, falling
    /// back to the whole payload; transport failures get a generic message.
    pub fn notice_text(&self) -> String {
        match self {
            Self::Rejected(payload) => {
                let detail = payload.get("errors").unwrap_or(payload);
                format!("Error: {detail}")
            }
            Self::Network(_) => "Network error".to_owned(),
        }
    }
}

/// Fetch messages newer than `since` from the room's messages endpoint.
///
/// Passing `since: None` requests the full history; the response's
/// `server_time` becomes the cursor for the next call.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not decode.
pub async fn fetch_messages(room: &str, since: Option<&str>) -> Result<MessagesResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut url = messages_endpoint(room);
        if let Some(since) = since {
            // Percent-encode so ISO timestamps with `+` and `:` survive.
            let encoded = String::from(js_sys::encode_uri_component(since));
            url = format!("{url}?since={encoded}");
        }
        let resp = gloo_net::http::Request::get(&url)
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(messages_request_failed(resp.status()));
        }
        resp.json::<MessagesResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (room, since);
        Err("not available on server".to_owned())
    }
}

/// Send a text message, URL-encoded.
///
/// # Errors
///
/// Returns [`SendError::Rejected`] with the server's error payload on a
/// non-OK response, or [`SendError::Network`] on transport failure.
pub async fn send_text(room: &str, nickname: &str, content: &str) -> Result<(), SendError> {
    #[cfg(feature = "hydrate")]
    {
        let params = form_params()?;
        if !nickname.is_empty() {
            params.append("nickname", nickname);
        }
        params.append("content", content);
        post_form(&send_text_endpoint(room), params.into()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (room, nickname, content);
        Err(SendError::Network("not available on server".to_owned()))
    }
}

/// Send a code message, URL-encoded. The server prepends the `[<lang>]\n`
/// marker to the stored content when `language` is non-empty.
///
/// # Errors
///
/// Same contract as [`send_text`].
pub async fn send_code(room: &str, nickname: &str, language: &str, content: &str) -> Result<(), SendError> {
    #[cfg(feature = "hydrate")]
    {
        let params = form_params()?;
        if !nickname.is_empty() {
            params.append("nickname", nickname);
        }
        if !language.is_empty() {
            params.append("language", language);
        }
        params.append("content", content);
        post_form(&send_code_endpoint(room), params.into()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (room, nickname, language, content);
        Err(SendError::Network("not available on server".to_owned()))
    }
}

/// Send an image file as multipart form data.
///
/// # Errors
///
/// Same contract as [`send_text`].
#[cfg(feature = "hydrate")]
pub async fn send_image(room: &str, nickname: &str, file: &web_sys::File) -> Result<(), SendError> {
    let form = web_sys::FormData::new().map_err(|_| SendError::Network("form data unavailable".to_owned()))?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|_| SendError::Network("form data unavailable".to_owned()))?;
    if !nickname.is_empty() {
        form.append_with_str("nickname", nickname)
            .map_err(|_| SendError::Network("form data unavailable".to_owned()))?;
    }
    post_form(&send_image_endpoint(room), form.into()).await
}

#[cfg(feature = "hydrate")]
fn form_params() -> Result<web_sys::UrlSearchParams, SendError> {
    web_sys::UrlSearchParams::new().map_err(|_| SendError::Network("form params unavailable".to_owned()))
}

/// POST a browser-native body (`UrlSearchParams` or `FormData`) and decode the
/// error payload on rejection. The browser supplies the content type,
/// including the multipart boundary.
#[cfg(feature = "hydrate")]
async fn post_form(url: &str, body: wasm_bindgen::JsValue) -> Result<(), SendError> {
    let request = gloo_net::http::Request::post(url)
        .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
        .body(body)
        .map_err(|e| SendError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| SendError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(());
    }
    let payload = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()));
    Err(SendError::Rejected(payload))
}
