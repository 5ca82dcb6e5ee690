//! Shared loading indicator.

use leptos::prelude::*;

/// Animated spinner shown while a session or data fetch is pending.
#[component]
pub fn LoadingSpinner(#[prop(optional)] large: bool) -> impl IntoView {
    view! {
        <span
            class="spinner"
            class:spinner--large=large
            role="status"
            aria-label="Loading"
        ></span>
    }
}
