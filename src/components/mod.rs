//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the room chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod composer;
pub mod expiry_badge;
pub mod message_list;
