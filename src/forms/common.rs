//! Shared Sub-Form Chrome

use leptos::prelude::*;

use crate::forms::state::FormErrors;
use crate::i18n::{use_i18n, I18n};

/// Form element and save button shared by every category sub-form.
///
/// Submit never bubbles past this wrapper; validation outcomes stay local
/// to the sub-form instance.
#[component]
pub fn ProductFormShell(#[prop(into)] on_save: Callback<()>, children: Children) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <form
            class="product-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_save.run(());
            }
        >
            {children()}
            <button type="submit" class="save-btn">{i18n.t("save")}</button>
        </form>
    }
}

/// Reactive error message for one field, localized at render time
pub fn field_error(
    errors: RwSignal<FormErrors>,
    i18n: I18n,
    field: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || errors.get().get(field).map(|key| i18n.t(key)))
}
