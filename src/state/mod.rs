//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `expiry`, `ui`) so individual components
//! can depend on small focused models provided as context signals.

pub mod chat;
pub mod expiry;
pub mod ui;
