//! Request Sub-Forms
//!
//! The generic request form covers every category without a dedicated one;
//! "others" collects a free-text product plus transport availability.

use leptos::prelude::*;

use crate::components::form::{CheckboxGroup, Radio, RadioGroup, TextInput, Textarea};
use crate::forms::common::{field_error, ProductFormShell};
use crate::forms::state::{FormErrors, RequestGenericState, RequestOthersState};
use crate::i18n::use_i18n;
use crate::models::{CountyChoice, DonateItem, ResourceCategory};

/// Request sub-form shared by every category without a dedicated form
#[component]
pub fn RequestGenericProduct(
    category: ResourceCategory,
    counties: Signal<Option<Vec<CountyChoice>>>,
    #[prop(into)] on_submit: Callback<DonateItem>,
) -> impl IntoView {
    let i18n = use_i18n();

    let name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let unit_type = RwSignal::new(String::new());
    let county_coverage = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(FormErrors::default());

    let name_error = field_error(errors, i18n, "name");

    let save = move |_: ()| {
        let state = RequestGenericState {
            name: name.get(),
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

/// Request sub-form for the free-text "others" category
#[component]
pub fn RequestOthers(
    category: ResourceCategory,
    #[prop(into)] on_submit: Callback<DonateItem>,
) -> impl IntoView {
    let i18n = use_i18n();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let has_transportation = RwSignal::new(None::<bool>);
    let errors = RwSignal::new(FormErrors::default());

    let name_error = field_error(errors, i18n, "name");
    let description_error = field_error(errors, i18n, "description");

    let save = move |_: ()| {
        let state = RequestOthersState {
            name: name.get(),
            description: description.get(),
            has_transportation: has_transportation.get(),
        };
        match state.validate() {
            Ok(()) => on_submit.run(state.into_item(category)),
            Err(found) => errors.set(found),
        }
    };

    view! {
        <ProductFormShell on_save=save>
            <RadioGroup label=i18n.t("services.offerTransport")>
                <Radio
                    name="request_has_transportation"
                    checked=Signal::derive(move || has_transportation.get() == Some(true))
                    on_select=move |_: ()| has_transportation.set(Some(true))
                >
                    {i18n.t("yes")}
                </Radio>
                <Radio
                    name="request_has_transportation"
                    checked=Signal::derive(move || has_transportation.get() == Some(false))
                    on_select=move |_: ()| has_transportation.set(Some(false))
                >
                    {i18n.t("no")}
                </Radio>
            </RadioGroup>
            <TextInput label=i18n.t("signup.products.name") value=name error=name_error />
            <Textarea
                label=i18n.t("signup.products.description")
                value=description
                error=description_error
            />
        </ProductFormShell>
    }
}
