//! Networking modules for the room HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls the poller and the send forms make, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
