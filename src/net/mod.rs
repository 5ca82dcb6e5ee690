//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema.
//! Everything here is read-only from the UI's perspective; state mutation
//! happens in the stores after a response lands.

pub mod api;
pub mod types;
