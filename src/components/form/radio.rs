//! Radio Components
//!
//! A fieldset wrapper plus single radio options. Selection state is owned
//! by the enclosing sub-form, not by the controls.

use leptos::prelude::*;

/// Fieldset wrapper around a group of radio options
#[component]
pub fn RadioGroup(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <fieldset class="radio-group">
            <legend>{label}</legend>
            <div class="radio-group-options">{children()}</div>
        </fieldset>
    }
}

/// One labeled radio option
#[component]
pub fn Radio(
    #[prop(into)] name: String,
    checked: Signal<bool>,
    #[prop(into)] on_select: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <label class="radio-option">
            <input
                type="radio"
                name=name
                prop:checked=move || checked.get()
                on:change=move |_| on_select.run(())
            />
            {children()}
        </label>
    }
}
