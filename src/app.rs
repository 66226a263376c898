//! Application Shell
//!
//! Mode selection, reference data loading, and page layout. Owns the
//! collected item list through the store; the registration components only
//! see read access plus append/remove callbacks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Footer, SignUpProducts};
use crate::i18n::{provide_i18n, use_i18n, LOCALE_NAMES, SUPPORTED_LOCALES};
use crate::models::{DonateItem, Mode, ProductsFormData};
use crate::store::{
    store_add_item, store_remove_item, use_app_store, AppState, AppStateStoreFields, AppStore,
};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppStore::new(AppState::default()));
    provide_i18n();

    let store = use_app_store();
    let i18n = use_i18n();
    let (mode, set_mode) = signal::<Option<Mode>>(None);
    let (form_data, set_form_data) = signal::<Option<ProductsFormData>>(None);

    // Fetch the form schema once a flow mode is chosen
    Effect::new(move |_| {
        let Some(mode) = mode.get() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_products_form(mode).await {
                Ok(data) => set_form_data.set(Some(data)),
                Err(err) => web_sys::console::error_1(
                    &format!("[APP] form schema fetch failed: {}", err).into(),
                ),
            }
        });
    });

    let items = Signal::derive(move || store.items().get());
    let on_add_item = Callback::new(move |item: DonateItem| store_add_item(&store, item));
    let on_remove_item = Callback::new(move |index: usize| store_remove_item(&store, index));

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <span class="brand">"Sprijin de Urgență"</span>
                <div class="locale-switcher">
                    {SUPPORTED_LOCALES.iter().zip(LOCALE_NAMES.iter()).map(|(code, name)| {
                        let code = *code;
                        view! {
                            <button
                                class=move || {
                                    if i18n.locale() == code { "locale-btn active" } else { "locale-btn" }
                                }
                                on:click=move |_| i18n.set_locale(code)
                            >
                                {*name}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </header>

            <main class="page-content">
                {move || {
                    // Rebuild the page when the locale changes so labels re-resolve.
                    let _ = i18n.locale();
                    match mode.get() {
                        None => view! {
                            <div class="mode-chooser">
                                <button
                                    class="mode-btn"
                                    on:click=move |_| set_mode.set(Some(Mode::Offer))
                                >
                                    {i18n.t("signup.donor")}
                                </button>
                                <button
                                    class="mode-btn"
                                    on:click=move |_| set_mode.set(Some(Mode::Request))
                                >
                                    {i18n.t("signup.requester")}
                                </button>
                            </div>
                        }
                        .into_any(),
                        Some(mode) => view! {
                            <SignUpProducts
                                mode=mode
                                items=items
                                on_add_item=on_add_item
                                on_remove_item=on_remove_item
                                form_data=form_data
                            />
                        }
                        .into_any(),
                    }
                }}
            </main>

            {move || {
                let _ = i18n.locale();
                view! { <Footer /> }
            }}
        </div>
    }
}
