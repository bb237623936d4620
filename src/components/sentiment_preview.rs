//! Sentiment Preview Component
//!
//! Inline classification of the draft while typing.

use leptos::prelude::*;

use crate::models::Sentiment;

#[component]
pub fn SentimentPreview(preview: RwSignal<Option<Sentiment>>) -> impl IntoView {
    view! {
        {move || preview.get().map(|sentiment| {
            let label_class = format!("sentiment-label {}", sentiment.label.to_lowercase());
            view! {
                <div class="sentiment-preview">
                    <span class="sentiment-caption">"Expected sentiment: "</span>
                    <span class=label_class>{sentiment.label.clone()}</span>
                    <span class="sentiment-score">{format!("Score: {:.2}", sentiment.score)}</span>
                </div>
            }
        })}
    }
}
