//! Room expiry state and remaining-time formatting.
//!
//! The deadline is server-authoritative: every poll may carry a fresh
//! `expires_at`, and the latest value always wins. Crossing the deadline
//! latches `expired`, which permanently disables the send forms for the rest
//! of the page session.

#[cfg(test)]
#[path = "expiry_test.rs"]
mod expiry_test;

/// Expiry state for the current room.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpiryState {
    /// Deadline in milliseconds since the Unix epoch, once known.
    pub expires_at_ms: Option<f64>,
    /// Latched when the countdown reaches zero. Never cleared.
    pub expired: bool,
}

impl ExpiryState {
    /// Adopt the latest server-supplied deadline.
    pub fn set_deadline(&mut self, ms: f64) {
        self.expires_at_ms = Some(ms);
    }

    /// Latch the terminal expired state.
    pub fn mark_expired(&mut self) {
        self.expired = true;
    }
}

/// Format a remaining duration for the countdown badge.
///
/// `"<h>h <m>m <s>s"` at an hour or more, `"<m>m <s>s"` below, `"Expired"`
/// at or past the deadline. Sub-second remainders truncate toward zero.
pub fn format_remaining(ms: i64) -> String {
    if ms <= 0 {
        return "Expired".to_owned();
    }
    let total_sec = ms / 1000;
    let hours = total_sec / 3600;
    let minutes = (total_sec % 3600) / 60;
    let seconds = total_sec % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}
