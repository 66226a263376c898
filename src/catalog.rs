//! Category Catalog
//!
//! The (mode, category) to sub-form matrix and the county choice derivation.
//! Keeping the matrix as data makes the whole 7x2 space auditable in one place.

use crate::models::{CountyChoice, Mode, ProductsFormData, ResourceCategory};

/// Which sub-form variant handles a (mode, category) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubFormKind {
    OfferGeneric,
    OfferTextile,
    OfferBuildingMaterials,
    OfferTents,
    OfferOthers,
    RequestGeneric,
    RequestOthers,
}

/// One entry of the category picker, in canonical display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub category: ResourceCategory,
    pub resource_type: &'static str,
    pub label_key: &'static str,
}

/// The seven picker entries in canonical display order
pub fn categories() -> [CategoryDescriptor; 7] {
    ResourceCategory::ALL.map(|category| CategoryDescriptor {
        category,
        resource_type: category.key(),
        label_key: category.label_key(),
    })
}

/// Resolve the sub-form variant for a category in the given mode.
///
/// Total over the 7x2 space. Textile has a dedicated Offer form but shares
/// the generic Request form; only "others" has a dedicated Request form.
pub fn sub_form_for(mode: Mode, category: ResourceCategory) -> SubFormKind {
    use ResourceCategory::*;

    match (mode, category) {
        (Mode::Offer, Food | GeneralHygiene | FeminineHygiene) => SubFormKind::OfferGeneric,
        (Mode::Offer, Textile) => SubFormKind::OfferTextile,
        (Mode::Offer, BuildingMaterials) => SubFormKind::OfferBuildingMaterials,
        (Mode::Offer, Tents) => SubFormKind::OfferTents,
        (Mode::Offer, Others) => SubFormKind::OfferOthers,
        (Mode::Request, Others) => SubFormKind::RequestOthers,
        (Mode::Request, _) => SubFormKind::RequestGeneric,
    }
}

/// Map raw reference data to selectable county choices.
///
/// Absent data stays absent so selectors can render disabled while the
/// schema fetch is still in flight.
pub fn county_choices(data: Option<&ProductsFormData>) -> Option<Vec<CountyChoice>> {
    let field = data?.county_coverage.as_ref()?;
    Some(
        field
            .choices
            .iter()
            .map(|choice| CountyChoice {
                value: choice.value.clone(),
                label: choice.display_name.clone(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiChoice, CountyCoverageField};

    #[test]
    fn display_order_is_canonical() {
        let keys: Vec<&str> = categories().iter().map(|c| c.resource_type).collect();
        assert_eq!(
            keys,
            [
                "food",
                "generalHygiene",
                "feminineHygiene",
                "textile",
                "buildingMaterials",
                "tents",
                "others",
            ]
        );
    }

    #[test]
    fn positional_ids_follow_display_order() {
        for (position, descriptor) in categories().iter().enumerate() {
            assert_eq!(descriptor.category.id() as usize, position + 1);
        }
        assert_eq!(ResourceCategory::Food.id(), 1);
        assert_eq!(ResourceCategory::Others.id(), 7);
    }

    #[test]
    fn offer_mapping() {
        use ResourceCategory::*;

        assert_eq!(sub_form_for(Mode::Offer, Food), SubFormKind::OfferGeneric);
        assert_eq!(sub_form_for(Mode::Offer, GeneralHygiene), SubFormKind::OfferGeneric);
        assert_eq!(sub_form_for(Mode::Offer, FeminineHygiene), SubFormKind::OfferGeneric);
        assert_eq!(sub_form_for(Mode::Offer, Textile), SubFormKind::OfferTextile);
        assert_eq!(
            sub_form_for(Mode::Offer, BuildingMaterials),
            SubFormKind::OfferBuildingMaterials
        );
        assert_eq!(sub_form_for(Mode::Offer, Tents), SubFormKind::OfferTents);
        assert_eq!(sub_form_for(Mode::Offer, Others), SubFormKind::OfferOthers);
    }

    #[test]
    fn request_mapping_keeps_textile_generic() {
        use ResourceCategory::*;

        // Textile has a dedicated Offer form but no Request counterpart.
        assert_eq!(sub_form_for(Mode::Request, Textile), SubFormKind::RequestGeneric);
        assert_eq!(sub_form_for(Mode::Request, Others), SubFormKind::RequestOthers);
        for category in [Food, GeneralHygiene, FeminineHygiene, BuildingMaterials, Tents] {
            assert_eq!(sub_form_for(Mode::Request, category), SubFormKind::RequestGeneric);
        }
    }

    #[test]
    fn mapping_is_total() {
        for mode in [Mode::Offer, Mode::Request] {
            for category in ResourceCategory::ALL {
                sub_form_for(mode, category);
            }
        }
    }

    #[test]
    fn county_choices_map_value_and_display_name() {
        let data = ProductsFormData {
            county_coverage: Some(CountyCoverageField {
                choices: vec![ApiChoice {
                    value: "AB".to_string(),
                    display_name: "Alba".to_string(),
                }],
            }),
        };

        let derived = county_choices(Some(&data)).unwrap();
        assert_eq!(
            derived,
            vec![CountyChoice {
                value: "AB".to_string(),
                label: "Alba".to_string(),
            }]
        );
    }

    #[test]
    fn county_choices_absent_data_stays_absent() {
        assert_eq!(county_choices(None), None);

        let no_field = ProductsFormData {
            county_coverage: None,
        };
        assert_eq!(county_choices(Some(&no_field)), None);
    }
}
