//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and data surfaces while reading/writing
//! shared state from Leptos context providers. Access control lives in
//! `route_guard`; everything else is presentational.

pub mod loading_spinner;
pub mod metric_panels;
pub mod role_selector;
pub mod route_guard;
pub mod search_box;
pub mod users_table;
