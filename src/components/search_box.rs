//! Company search input with suggestions and recent searches.
//!
//! DESIGN
//! ======
//! Suggestion state lives in local signals; the only outward write is the
//! selected company flowing into [`CompanyState`] (one-directional, never
//! read back). List logic is delegated to `util::search` so this component
//! stays DOM glue.

use leptos::prelude::*;

use crate::state::company::CompanyState;
use crate::util::search;

/// Search box with autocomplete suggestions and a recent-search row.
#[component]
pub fn SearchBox() -> impl IntoView {
    let company = expect_context::<RwSignal<CompanyState>>();

    let query = RwSignal::new(String::new());
    let recent = RwSignal::new(Vec::<String>::new());
    let companies = RwSignal::new(search::fallback_company_list());
    let show_suggestions = RwSignal::new(false);

    // Replace the bundled list with the backend one when available.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Ok(list) = crate::net::api::fetch_company_list().await {
                if !list.is_empty() {
                    companies.set(list);
                }
            }
        });
    }

    let suggestions =
        Memo::new(move |_| search::filter_companies(&companies.get(), &query.get()));

    let select = Callback::new(move |name: String| {
        let name = name.trim().to_owned();
        if name.is_empty() {
            return;
        }
        company.update(|c| {
            c.select(&name);
        });
        recent.update(|r| search::push_recent(r, &name));
        query.set(name);
        show_suggestions.set(false);
    });

    view! {
        <div class="search-box">
            <div class="search-box__row">
                <input
                    class="search-box__input"
                    type="text"
                    placeholder="Search for a company"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                        show_suggestions.set(true);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            select.run(query.get_untracked());
                        } else if ev.key() == "Escape" {
                            show_suggestions.set(false);
                        }
                    }
                />
                <button
                    class="search-box__submit"
                    on:click=move |_| select.run(query.get_untracked())
                >
                    "Search"
                </button>
            </div>
            <Show when=move || show_suggestions.get() && !suggestions.get().is_empty()>
                <div class="search-box__suggestions">
                    {move || {
                        suggestions
                            .get()
                            .into_iter()
                            .map(|name| {
                                let value = name.clone();
                                view! {
                                    <button
                                        class="search-box__suggestion"
                                        on:click=move |_| select.run(value.clone())
                                    >
                                        {name}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <Show when=move || !recent.get().is_empty()>
                <div class="search-box__recent">
                    <span class="search-box__recent-label">"Recent:"</span>
                    {move || {
                        recent
                            .get()
                            .into_iter()
                            .map(|name| {
                                let value = name.clone();
                                view! {
                                    <button
                                        class="search-box__recent-item"
                                        on:click=move |_| select.run(value.clone())
                                    >
                                        {name}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
