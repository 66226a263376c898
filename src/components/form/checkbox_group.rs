//! Checkbox Group Component
//!
//! Multi-select over the county choices. Tolerates absent choices while the
//! schema fetch is in flight by rendering an empty, disabled selector.

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::models::CountyChoice;

/// Labeled multi-select bound to a list of selected values
#[component]
pub fn CheckboxGroup(
    #[prop(into)] label: String,
    choices: Signal<Option<Vec<CountyChoice>>>,
    selected: RwSignal<Vec<String>>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <fieldset class="checkbox-group">
            <legend>{label}</legend>
            {move || match choices.get() {
                None => view! {
                    <p class="checkbox-group-empty">{i18n.t("loading")}</p>
                }.into_any(),
                Some(choices) => choices.into_iter().map(|choice| {
                    let value = choice.value;
                    let is_checked = {
                        let value = value.clone();
                        move || selected.get().iter().any(|v| v == &value)
                    };
                    view! {
                        <label class="checkbox-option">
                            <input
                                type="checkbox"
                                prop:checked=is_checked
                                on:change=move |_| {
                                    selected.update(|current| {
                                        if let Some(pos) = current.iter().position(|v| v == &value) {
                                            current.remove(pos);
                                        } else {
                                            current.push(value.clone());
                                        }
                                    });
                                }
                            />
                            {choice.label}
                        </label>
                    }
                }).collect_view().into_any(),
            }}
        </fieldset>
    }
}
