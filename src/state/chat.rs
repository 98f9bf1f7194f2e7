//! Chat session state: message history, poll cursor, in-flight guard.
//!
//! DESIGN
//! ======
//! All poll bookkeeping lives on this one struct so the polling routine and
//! the send forms share a single session object instead of module globals.
//! Everything here is pure; the networking side effects live in `pages::room`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{Message, MessagesResponse};

/// State for the room chat view.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Code of the room this session is attached to.
    pub room_code: Option<String>,
    /// Messages received so far, in arrival order.
    pub messages: Vec<Message>,
    /// Last `server_time` acknowledged; sent as `since` on the next poll.
    /// Lost on page reload by design.
    pub cursor: Option<String>,
    /// True while a poll request is outstanding. A tick that lands while this
    /// is set is skipped, never queued.
    pub poll_in_flight: bool,
}

impl ChatState {
    /// Attach the session to a room, discarding any previous room's history
    /// and cursor.
    pub fn reset_for_room(&mut self, code: &str) {
        self.room_code = Some(code.to_owned());
        self.messages.clear();
        self.cursor = None;
        self.poll_in_flight = false;
    }

    /// Claim the single in-flight poll slot.
    ///
    /// Returns false when a poll is already outstanding; the caller skips the
    /// tick entirely rather than queueing behind it.
    pub fn begin_poll(&mut self) -> bool {
        if self.poll_in_flight {
            return false;
        }
        self.poll_in_flight = true;
        true
    }

    /// Release the in-flight slot. Runs on every completion path, success or
    /// failure.
    pub fn finish_poll(&mut self) {
        self.poll_in_flight = false;
    }

    /// Apply a successful poll response: append the new messages and advance
    /// the cursor to the response's `server_time`.
    ///
    /// The cursor advances even when no messages arrived, keeping it aligned
    /// with the server clock. Returns the number of messages appended so the
    /// view knows whether to scroll.
    pub fn apply_poll_response(&mut self, resp: MessagesResponse) -> usize {
        let appended = resp.messages.len();
        self.messages.extend(resp.messages);
        self.cursor = Some(resp.server_time);
        appended
    }
}
