//! Sign-Up Products Section
//!
//! Bridges "user wants to add a resource" and the collected resource list,
//! independent of which of the seven categories is active.

use leptos::prelude::*;

use crate::catalog::{self, sub_form_for, SubFormKind};
use crate::components::ResourcesForm;
use crate::forms::{
    OfferBuildingMaterials, OfferGenericProduct, OfferProductsOthers, OfferTents,
    OfferTextileProduct, RequestGenericProduct, RequestOthers,
};
use crate::i18n::use_i18n;
use crate::models::{CountyChoice, DonateItem, Mode, ProductsFormData, ResourceCategory};

#[component]
pub fn SignUpProducts(
    mode: Mode,
    #[prop(into)] items: Signal<Vec<DonateItem>>,
    #[prop(into)] on_add_item: Callback<DonateItem>,
    #[prop(into)] on_remove_item: Callback<usize>,
    #[prop(into)] form_data: Signal<Option<ProductsFormData>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let (show_dialog, set_show_dialog) = signal(false);

    // Recomputed only when the reference data itself changes, including the
    // None-to-Some transition once the schema fetch lands.
    let county_choices = Memo::new(move |_| catalog::county_choices(form_data.get().as_ref()));
    let counties = Signal::derive(move || county_choices.get());

    // Close the dialog before the item reaches the parent list.
    let on_product_add = Callback::new(move |item: DonateItem| {
        set_show_dialog.set(false);
        on_add_item.run(item);
    });

    let render_form = move |category: ResourceCategory| {
        render_sub_form(sub_form_for(mode, category), category, counties, on_product_add)
    };

    let categories = catalog::categories().to_vec();
    let table_columns = [i18n.t("resources.product"), i18n.t("resources.quantity")];

    view! {
        <section class="signup-products">
            <h3>{i18n.t("products")}</h3>
            <ResourcesForm
                categories=categories
                render_form=render_form
                table_title=i18n.t("resources.added.products")
                table_columns=table_columns
                items=items
                on_remove_item=on_remove_item
                show_dialog=show_dialog
                set_show_dialog=set_show_dialog
            />
        </section>
    }
}

/// Instantiate the sub-form variant for one open category dialog
fn render_sub_form(
    kind: SubFormKind,
    category: ResourceCategory,
    counties: Signal<Option<Vec<CountyChoice>>>,
    on_submit: Callback<DonateItem>,
) -> AnyView {
    match kind {
        SubFormKind::OfferGeneric => view! {
            <OfferGenericProduct category=category counties=counties on_submit=on_submit />
        }
        .into_any(),
        SubFormKind::OfferTextile => view! {
            <OfferTextileProduct category=category counties=counties on_submit=on_submit />
        }
        .into_any(),
        SubFormKind::OfferBuildingMaterials => view! {
            <OfferBuildingMaterials category=category counties=counties on_submit=on_submit />
        }
        .into_any(),
        SubFormKind::OfferTents => view! {
            <OfferTents category=category counties=counties on_submit=on_submit />
        }
        .into_any(),
        SubFormKind::OfferOthers => view! {
            <OfferProductsOthers category=category counties=counties on_submit=on_submit />
        }
        .into_any(),
        SubFormKind::RequestGeneric => view! {
            <RequestGenericProduct category=category counties=counties on_submit=on_submit />
        }
        .into_any(),
        SubFormKind::RequestOthers => view! {
            <RequestOthers category=category on_submit=on_submit />
        }
        .into_any(),
    }
}
