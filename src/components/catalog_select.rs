//! Catalog Select Component
//!
//! `<select>` filled from a category or subject list.

use leptos::prelude::*;

use crate::models::CatalogEntry;

#[component]
pub fn CatalogSelect(
    id: &'static str,
    placeholder: &'static str,
    options: Signal<Vec<CatalogEntry>>,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] invalid: Option<Signal<bool>>,
) -> impl IntoView {
    let invalid = move || invalid.map(|s| s.get()).unwrap_or(false);

    view! {
        <select
            id=id
            class="form-control"
            class:error=invalid
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
            <For
                each=move || options.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id_str = entry.id.to_string();
                    let is_selected = {
                        let id_str = id_str.clone();
                        move || value.get() == id_str
                    };
                    view! {
                        <option value=id_str prop:selected=is_selected>{entry.name}</option>
                    }
                }
            />
        </select>
    }
}
