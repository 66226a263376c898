//! Offer Sub-Forms
//!
//! One component per category family on the donation side.

use leptos::prelude::*;

use crate::components::form::{CheckboxGroup, Radio, RadioGroup, TextInput, Textarea};
use crate::forms::common::{field_error, ProductFormShell};
use crate::forms::state::{
    FormErrors, OfferBuildingMaterialsState, OfferGenericState, OfferOthersState, OfferTentsState,
    OfferTextileState,
};
use crate::i18n::use_i18n;
use crate::models::{CountyChoice, DonateItem, ResourceCategory};

/// Offer sub-form shared by the food and hygiene categories
#[component]
pub fn OfferGenericProduct(
    category: ResourceCategory,
    counties: Signal<Option<Vec<CountyChoice>>>,
    #[prop(into)] on_submit: Callback<DonateItem>,
) -> impl IntoView {
    let i18n = use_i18n();

    let name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let unit_type = RwSignal::new(String::new());
    let packaging_type = RwSignal::new(String::new());
    let expiration_date = RwSignal::new(String::new());
    let county_coverage = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(FormErrors::default());

    let name_error = field_error(errors, i18n, "name");

    let save = move |_: ()| {
        let state = OfferGenericState {
            name: name.get(),
            quantity: quantity.get(),
            unit_type: unit_type.get(),
            packaging_type: packaging_type.get(),
            expiration_date: expiration_date.get(),
            county_coverage: county_coverage.get(),
        };
        match state.validate() {
            Ok(()) => on_submit.run(state.into_item(category)),
            Err(found) => errors.set(found),
        }
    };

    view! {
        <ProductFormShell on_save=save>
            <TextInput label=i18n.t("signup.products.name") value=name error=name_error />
            <TextInput
                label=i18n.t("signup.products.quantity")
                value=quantity
                input_type="number"
                error=Signal::derive(|| None::<String>)
            />
            <TextInput
                label=i18n.t("signup.products.unit")
                value=unit_type
                error=Signal::derive(|| None::<String>)
            />
            <TextInput
                label=i18n.t("signup.products.packaging")
                value=packaging_type
                error=Signal::derive(|| None::<String>)
            />
            <TextInput
                label=i18n.t("signup.products.expirationDate")
                value=expiration_date
                input_type="date"
                error=Signal::derive(|| None::<String>)
            />
            <CheckboxGroup
                label=i18n.t("signup.products.county")
                choices=counties
                selected=county_coverage
            />
        </ProductFormShell>
    }
}

/// Offer sub-form for textile products
#[component]
pub fn OfferTextileProduct(
    category: ResourceCategory,
    counties: Signal<Option<Vec<CountyChoice>>>,
    #[prop(into)] on_submit: Callback<DonateItem>,
) -> impl IntoView {
    let i18n = use_i18n();

    let name = RwSignal::new(String::new());
    let textile_size = RwSignal::new(String::new());
    let kids_age = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let unit_type = RwSignal::new(String::new());
    let county_coverage = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(FormErrors::default());

    let name_error = field_error(errors, i18n, "name");

    let save = move |_: ()| {
        let state = OfferTextileState {
            name: name.get(),
            textile_size: textile_size.get(),
            kids_age: kids_age.get(),
            quantity: quantity.get(),
            unit_type: unit_type.get(),
            county_coverage: county_coverage.get(),
        };
        match state.validate() {
            Ok(()) => on_submit.run(state.into_item(category)),
            Err(found) => errors.set(found),
        }
    };

    view! {
        <ProductFormShell on_save=save>
            <TextInput label=i18n.t("signup.products.name") value=name error=name_error />
            <TextInput
                label=i18n.t("signup.products.textileSize")
                value=textile_size
                error=Signal::derive(|| None::<String>)
            />
            <TextInput
                label=i18n.t("signup.products.kidsAge")
                value=kids_age
                error=Signal::derive(|| None::<String>)
            />
            <TextInput
                label=i18n.t("signup.products.quantity")
                value=quantity
                input_type="number"
                error=Signal::derive(|| None::<String>)
            />
            <TextInput
                label=i18n.t("signup.products.unit")
                value=unit_type
                error=Signal::derive(|| None::<String>)
            />
            <CheckboxGroup
                label=i18n.t("signup.products.county")
                choices=counties
                selected=county_coverage
            />
        </ProductFormShell>
    }
}

/// Offer sub-form for building materials
#[component]
pub fn OfferBuildingMaterials(
    category: ResourceCategory,
    counties: Signal<Option<Vec<CountyChoice>>>,
    #[prop(into)] on_submit: Callback<DonateItem>,
) -> impl IntoView {
    let i18n = use_i18n();

    let name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let unit_type = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let county_coverage = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(FormErrors::default());

    let name_error = field_error(errors, i18n, "name");

    let save = move |_: ()| {
        let state = OfferBuildingMaterialsState {
            name: name.get(),
            quantity: quantity.get(),
            unit_type: unit_type.get(),
            description: description.get(),
            county_coverage: county_coverage.get(),
        };
        match state.validate() {
            Ok(()) => on_submit.run(state.into_item(category)),
            Err(found) => errors.set(found),
        }
    };

    view! {
        <ProductFormShell on_save=save>
            <TextInput label=i18n.t("signup.products.name") value=name error=name_error />
            <TextInput
                label=i18n.t("signup.products.quantity")
                value=quantity
                input_type="number"
                error=Signal::derive(|| None::<String>)
            />
            <TextInput
                label=i18n.t("signup.products.unit")
                value=unit_type
                error=Signal::derive(|| None::<String>)
            />
            <Textarea
                label=i18n.t("signup.products.description")
                value=description
                error=Signal::derive(|| None::<String>)
            />
            <CheckboxGroup
                label=i18n.t("signup.products.county")
                choices=counties
                selected=county_coverage
            />
        </ProductFormShell>
    }
}

/// Offer sub-form for tents
#[component]
pub fn OfferTents(
    category: ResourceCategory,
    counties: Signal<Option<Vec<CountyChoice>>>,
    #[prop(into)] on_submit: Callback<DonateItem>,
) -> impl IntoView {
    let i18n = use_i18n();

    let tent_capacity = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let county_coverage = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(FormErrors::default());

    let capacity_error = field_error(errors, i18n, "tent_capacity");

    let save = move |_: ()| {
        let state = OfferTentsState {
            tent_capacity: tent_capacity.get(),
            quantity: quantity.get(),
            county_coverage: county_coverage.get(),
        };
        match state.validate() {
            Ok(()) => on_submit.run(state.into_item(category)),
            Err(found) => errors.set(found),
        }
    };

    view! {
        <ProductFormShell on_save=save>
            <TextInput
                label=i18n.t("signup.products.tentCapacity")
                value=tent_capacity
                input_type="number"
                error=capacity_error
            />
            <TextInput
                label=i18n.t("signup.products.quantity")
                value=quantity
                input_type="number"
                error=Signal::derive(|| None::<String>)
            />
            <CheckboxGroup
                label=i18n.t("signup.products.county")
                choices=counties
                selected=county_coverage
            />
        </ProductFormShell>
    }
}

/// Offer sub-form for the free-text "others" category
#[component]
pub fn OfferProductsOthers(
    category: ResourceCategory,
    counties: Signal<Option<Vec<CountyChoice>>>,
    #[prop(into)] on_submit: Callback<DonateItem>,
) -> impl IntoView {
    let i18n = use_i18n();

    let name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let unit_type = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let has_transportation = RwSignal::new(None::<bool>);
    let county_coverage = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(FormErrors::default());

    let name_error = field_error(errors, i18n, "name");

    let save = move |_: ()| {
        let state = OfferOthersState {
            name: name.get(),
            quantity: quantity.get(),
            unit_type: unit_type.get(),
            description: description.get(),
            has_transportation: has_transportation.get(),
            county_coverage: county_coverage.get(),
        };
        match state.validate() {
            Ok(()) => on_submit.run(state.into_item(category)),
            Err(found) => errors.set(found),
        }
    };

    view! {
        <ProductFormShell on_save=save>
            <TextInput label=i18n.t("signup.products.name") value=name error=name_error />
            <TextInput
                label=i18n.t("signup.products.quantity")
                value=quantity
                input_type="number"
                error=Signal::derive(|| None::<String>)
            />
            <TextInput
                label=i18n.t("signup.products.unit")
                value=unit_type
                error=Signal::derive(|| None::<String>)
            />
            <Textarea
                label=i18n.t("signup.products.description")
                value=description
                error=Signal::derive(|| None::<String>)
            />
            <RadioGroup label=i18n.t("services.offerTransport")>
                <Radio
                    name="offer_has_transportation"
                    checked=Signal::derive(move || has_transportation.get() == Some(true))
                    on_select=move |_: ()| has_transportation.set(Some(true))
                >
                    {i18n.t("yes")}
                </Radio>
                <Radio
                    name="offer_has_transportation"
                    checked=Signal::derive(move || has_transportation.get() == Some(false))
                    on_select=move |_: ()| has_transportation.set(Some(false))
                >
                    {i18n.t("no")}
                </Radio>
            </RadioGroup>
            <CheckboxGroup
                label=i18n.t("signup.products.county")
                choices=counties
                selected=county_coverage
            />
        </ProductFormShell>
    }
}
