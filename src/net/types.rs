//! Wire DTOs for the room message API.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the message endpoint returns so serde does all
//! decoding at the network boundary. Optional fields default rather than fail:
//! a malformed message must degrade to a partial bubble, never break a poll.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Discriminator for the three message bodies the room supports.
///
/// Unrecognized values decode to [`MessageKind::Unknown`] so one unexpected
/// record cannot sink the rest of a poll batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Code,
    Image,
    #[serde(other)]
    Unknown,
}

/// A single room message as returned by the messages endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned row id, informational only.
    #[serde(default)]
    pub id: Option<i64>,
    /// Message body discriminator.
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
    /// Sender nickname; the server defaults it, but tolerate absence anyway.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Body for `text` and `code` messages. For `code`, may carry a leading
    /// `[<lang>]\n` marker identifying the language.
    #[serde(default)]
    pub content: Option<String>,
    /// Server-hosted URL for `image` messages.
    #[serde(default)]
    pub image_url: Option<String>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl Message {
    /// Nickname for display, falling back to the room's placeholder.
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "anon",
        }
    }
}

/// Response envelope of the messages endpoint.
///
/// `server_time` is the poll cursor: the client echoes it back as `since` on
/// the next request, so it must be adopted even when `messages` is empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessagesResponse {
    /// Messages newer than the request's `since` cursor, oldest first.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Server-authoritative timestamp of this response.
    pub server_time: String,
    /// Current room deadline, recomputed by the server from room activity.
    #[serde(default)]
    pub expires_at: Option<String>,
}
