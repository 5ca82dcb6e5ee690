//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `company`) so individual
//! components can depend on small focused models. Each struct is plain data;
//! `app::App` wraps one instance of each in an `RwSignal` and provides it via
//! context.

pub mod auth;
pub mod company;
pub mod session;
