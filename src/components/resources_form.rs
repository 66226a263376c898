//! Resources Form Component
//!
//! Category picker, the dialog holding the active sub-form, and the summary
//! table of already-added items with per-row removal. Only one category
//! dialog can be open at a time, so at most one sub-form instance exists.

use leptos::prelude::*;

use crate::catalog::CategoryDescriptor;
use crate::components::RemoveConfirmButton;
use crate::i18n::use_i18n;
use crate::models::{DonateItem, ResourceCategory};

#[component]
pub fn ResourcesForm(
    categories: Vec<CategoryDescriptor>,
    render_form: impl Fn(ResourceCategory) -> AnyView + Copy + Send + Sync + 'static,
    #[prop(into)] table_title: String,
    table_columns: [String; 2],
    items: Signal<Vec<DonateItem>>,
    #[prop(into)] on_remove_item: Callback<usize>,
    show_dialog: ReadSignal<bool>,
    set_show_dialog: WriteSignal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();
    let (selected, set_selected) = signal::<Option<ResourceCategory>>(None);
    let [product_column, quantity_column] = table_columns;

    view! {
        <div class="resources-form">
            <div class="category-picker">
                {categories.into_iter().map(|descriptor| {
                    let category = descriptor.category;
                    let label = i18n.t(descriptor.label_key);
                    let css = format!("category-btn category-btn-{}", descriptor.resource_type);
                    view! {
                        <button
                            type="button"
                            class=css
                            on:click=move |_| {
                                set_selected.set(Some(category));
                                set_show_dialog.set(true);
                            }
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>

            // The open dialog re-renders from scratch on every category
            // switch, so sub-form state never leaks between categories.
            {move || {
                if !show_dialog.get() {
                    return None;
                }
                selected.get().map(|category| view! {
                    <div class="dialog-backdrop">
                        <div class="dialog">
                            <header class="dialog-header">
                                <h4>{i18n.t(category.label_key())}</h4>
                                <button
                                    type="button"
                                    class="dialog-close"
                                    on:click=move |_| set_show_dialog.set(false)
                                >
                                    "×"
                                </button>
                            </header>
                            {render_form(category)}
                        </div>
                    </div>
                }.into_any())
            }}

            <div class="resources-table">
                <h4>{table_title}</h4>
                <table>
                    <thead>
                        <tr>
                            <th>{product_column}</th>
                            <th>{quantity_column}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().enumerate().map(|(index, item)| {
                            let product = item
                                .name
                                .clone()
                                .unwrap_or_else(|| i18n.t(item.category.label_key()));
                            let quantity = item
                                .quantity
                                .map(|q| q.to_string())
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr>
                                    <td>{product}</td>
                                    <td>{quantity}</td>
                                    <td>
                                        <RemoveConfirmButton
                                            button_class="row-remove-btn"
                                            on_confirm=move |_: ()| on_remove_item.run(index)
                                        />
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
