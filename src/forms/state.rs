//! Sub-Form State
//!
//! One plain struct per sub-form variant: the field values as entered, a
//! validation pass, and the conversion into the emitted item. Keeping this
//! free of view code lets the whole item lifecycle be tested directly.

use std::collections::BTreeMap;

use crate::models::{DonateItem, ResourceCategory};

/// Field-level validation errors.
///
/// Values are translation keys; the field components resolve them to
/// localized messages at render time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, &'static str>,
}

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message_key: &'static str) {
        self.errors.insert(field, message_key);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

const REQUIRED: &str = "validation.required";
const NOT_A_NUMBER: &str = "validation.number";

fn require(errors: &mut FormErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
    }
}

fn require_number(errors: &mut FormErrors, field: &'static str, value: &str) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, REQUIRED);
    } else if trimmed.parse::<u32>().is_err() {
        errors.add(field, NOT_A_NUMBER);
    }
}

fn opt_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn opt_number(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

fn opt_counties(selected: &[String]) -> Option<Vec<String>> {
    (!selected.is_empty()).then(|| selected.to_vec())
}

/// Offer fields shared by the food and hygiene categories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferGenericState {
    pub name: String,
    pub quantity: String,
    pub unit_type: String,
    pub packaging_type: String,
    pub expiration_date: String,
    pub county_coverage: Vec<String>,
}

impl OfferGenericState {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require(&mut errors, "name", &self.name);
        errors.into_result()
    }

    pub fn into_item(self, category: ResourceCategory) -> DonateItem {
        DonateItem {
            name: opt_text(&self.name),
            quantity: opt_number(&self.quantity),
            unit_type: opt_text(&self.unit_type),
            packaging_type: opt_text(&self.packaging_type),
            expiration_date: opt_text(&self.expiration_date),
            county_coverage: opt_counties(&self.county_coverage),
            ..DonateItem::new(category)
        }
    }
}

/// Offer fields for textile products
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferTextileState {
    pub name: String,
    pub textile_size: String,
    pub kids_age: String,
    pub quantity: String,
    pub unit_type: String,
    pub county_coverage: Vec<String>,
}

impl OfferTextileState {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require(&mut errors, "name", &self.name);
        errors.into_result()
    }

    pub fn into_item(self, category: ResourceCategory) -> DonateItem {
        DonateItem {
            name: opt_text(&self.name),
            textile_size: opt_text(&self.textile_size),
            kids_age: opt_text(&self.kids_age),
            quantity: opt_number(&self.quantity),
            unit_type: opt_text(&self.unit_type),
            county_coverage: opt_counties(&self.county_coverage),
            ..DonateItem::new(category)
        }
    }
}

/// Offer fields for building materials
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferBuildingMaterialsState {
    pub name: String,
    pub quantity: String,
    pub unit_type: String,
    pub description: String,
    pub county_coverage: Vec<String>,
}

impl OfferBuildingMaterialsState {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require(&mut errors, "name", &self.name);
        errors.into_result()
    }

    pub fn into_item(self, category: ResourceCategory) -> DonateItem {
        DonateItem {
            name: opt_text(&self.name),
            quantity: opt_number(&self.quantity),
            unit_type: opt_text(&self.unit_type),
            description: opt_text(&self.description),
            county_coverage: opt_counties(&self.county_coverage),
            ..DonateItem::new(category)
        }
    }
}

/// Offer fields for tents; capacity is the leading field here
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferTentsState {
    pub tent_capacity: String,
    pub quantity: String,
    pub county_coverage: Vec<String>,
}

impl OfferTentsState {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require_number(&mut errors, "tent_capacity", &self.tent_capacity);
        errors.into_result()
    }

    pub fn into_item(self, category: ResourceCategory) -> DonateItem {
        DonateItem {
            tent_capacity: opt_number(&self.tent_capacity),
            quantity: opt_number(&self.quantity),
            county_coverage: opt_counties(&self.county_coverage),
            ..DonateItem::new(category)
        }
    }
}

/// Offer fields for the free-text "others" category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferOthersState {
    pub name: String,
    pub quantity: String,
    pub unit_type: String,
    pub description: String,
    pub has_transportation: Option<bool>,
    pub county_coverage: Vec<String>,
}

impl OfferOthersState {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require(&mut errors, "name", &self.name);
        errors.into_result()
    }

    pub fn into_item(self, category: ResourceCategory) -> DonateItem {
        DonateItem {
            name: opt_text(&self.name),
            quantity: opt_number(&self.quantity),
            unit_type: opt_text(&self.unit_type),
            description: opt_text(&self.description),
            has_transportation: self.has_transportation,
            county_coverage: opt_counties(&self.county_coverage),
            ..DonateItem::new(category)
        }
    }
}

/// Request fields shared by every category without a dedicated form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestGenericState {
    pub name: String,
    pub quantity: String,
    pub unit_type: String,
    pub county_coverage: Vec<String>,
}

impl RequestGenericState {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require(&mut errors, "name", &self.name);
        errors.into_result()
    }

    pub fn into_item(self, category: ResourceCategory) -> DonateItem {
        DonateItem {
            name: opt_text(&self.name),
            quantity: opt_number(&self.quantity),
            unit_type: opt_text(&self.unit_type),
            county_coverage: opt_counties(&self.county_coverage),
            ..DonateItem::new(category)
        }
    }
}

/// Request fields for the free-text "others" category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOthersState {
    pub name: String,
    pub description: String,
    pub has_transportation: Option<bool>,
}

impl RequestOthersState {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require(&mut errors, "name", &self.name);
        errors.into_result()
    }

    pub fn into_item(self, category: ResourceCategory) -> DonateItem {
        DonateItem {
            name: opt_text(&self.name),
            description: opt_text(&self.description),
            has_transportation: self.has_transportation,
            ..DonateItem::new(category)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let state = OfferGenericState::default();
        let errors = state.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("validation.required"));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let state = RequestGenericState {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert!(state.validate().is_err());
    }

    #[test]
    fn valid_state_carries_the_configured_category() {
        let state = OfferGenericState {
            name: "Paste făinoase".to_string(),
            quantity: "20".to_string(),
            unit_type: "kg".to_string(),
            ..Default::default()
        };
        assert!(state.validate().is_ok());

        let item = state.into_item(ResourceCategory::Food);
        assert_eq!(item.category, ResourceCategory::Food);
        assert_eq!(item.name.as_deref(), Some("Paste făinoase"));
        assert_eq!(item.quantity, Some(20));
        assert_eq!(item.unit_type.as_deref(), Some("kg"));
        assert_eq!(item.packaging_type, None);
    }

    #[test]
    fn request_others_transcribes_fields_verbatim() {
        let state = RequestOthersState {
            name: "Canned beans".to_string(),
            description: "50 cans".to_string(),
            has_transportation: Some(true),
        };
        assert!(state.validate().is_ok());

        let item = state.into_item(ResourceCategory::Others);
        assert_eq!(item.category.id(), 7);
        assert_eq!(item.name.as_deref(), Some("Canned beans"));
        assert_eq!(item.description.as_deref(), Some("50 cans"));
        assert_eq!(item.has_transportation, Some(true));
        assert_eq!(item.county_coverage, None);
    }

    #[test]
    fn tent_capacity_must_be_a_number() {
        let empty = OfferTentsState::default();
        let errors = empty.validate().unwrap_err();
        assert_eq!(errors.get("tent_capacity"), Some("validation.required"));

        let not_a_number = OfferTentsState {
            tent_capacity: "multe".to_string(),
            ..Default::default()
        };
        let errors = not_a_number.validate().unwrap_err();
        assert_eq!(errors.get("tent_capacity"), Some("validation.number"));

        let valid = OfferTentsState {
            tent_capacity: "4".to_string(),
            quantity: "2".to_string(),
            ..Default::default()
        };
        assert!(valid.validate().is_ok());
        let item = valid.into_item(ResourceCategory::Tents);
        assert_eq!(item.tent_capacity, Some(4));
        assert_eq!(item.quantity, Some(2));
    }

    #[test]
    fn selected_counties_are_kept_in_order() {
        let state = OfferTextileState {
            name: "Pături".to_string(),
            county_coverage: vec!["CJ".to_string(), "AB".to_string()],
            ..Default::default()
        };

        let item = state.into_item(ResourceCategory::Textile);
        assert_eq!(
            item.county_coverage,
            Some(vec!["CJ".to_string(), "AB".to_string()])
        );
    }

    #[test]
    fn no_counties_selected_means_absent() {
        let state = OfferBuildingMaterialsState {
            name: "Ciment".to_string(),
            ..Default::default()
        };

        let item = state.into_item(ResourceCategory::BuildingMaterials);
        assert_eq!(item.county_coverage, None);
        assert_eq!(item.category.id(), 5);
    }

    #[test]
    fn unanswered_transport_stays_absent() {
        let state = OfferOthersState {
            name: "Lanterne".to_string(),
            ..Default::default()
        };

        let item = state.into_item(ResourceCategory::Others);
        assert_eq!(item.has_transportation, None);
    }
}
