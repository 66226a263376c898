//! Textarea Component

use leptos::prelude::*;

/// Labeled multi-line input bound to a string signal
#[component]
pub fn Textarea(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <span class="form-error">{message}</span>
            })}
        </label>
    }
}
