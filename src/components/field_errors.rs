//! Field Errors Component

use leptos::prelude::*;

use crate::validation::FormValidation;

/// Inline messages for one form field
#[component]
pub fn FieldErrors(
    errors: ReadSignal<FormValidation>,
    field: &'static str,
) -> impl IntoView {
    let messages = move || errors.with(|e| e.field(field).to_vec());

    view! {
        <Show when=move || !messages().is_empty()>
            <div class="field-error">
                {move || messages().into_iter().map(|m| view! { <div>{m}</div> }).collect_view()}
            </div>
        </Show>
    }
}
