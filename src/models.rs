//! Frontend Models
//!
//! Data structures shared across the registration flow.

use serde::{Deserialize, Serialize};

/// Which side of the matching flow a form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Offer,
    Request,
}

impl Mode {
    /// Query value used by the donation API
    pub fn as_query(self) -> &'static str {
        match self {
            Mode::Offer => "offer",
            Mode::Request => "request",
        }
    }
}

/// The seven fixed resource categories.
///
/// Discriminants are the stable wire ids. They do not depend on display
/// order, so reordering the picker cannot silently change stored ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ResourceCategory {
    Food = 1,
    GeneralHygiene = 2,
    FeminineHygiene = 3,
    Textile = 4,
    BuildingMaterials = 5,
    Tents = 6,
    Others = 7,
}

impl ResourceCategory {
    /// Canonical display order for the category picker
    pub const ALL: [ResourceCategory; 7] = [
        ResourceCategory::Food,
        ResourceCategory::GeneralHygiene,
        ResourceCategory::FeminineHygiene,
        ResourceCategory::Textile,
        ResourceCategory::BuildingMaterials,
        ResourceCategory::Tents,
        ResourceCategory::Others,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Resource-type key, as used in translation keys and the API
    pub fn key(self) -> &'static str {
        match self {
            ResourceCategory::Food => "food",
            ResourceCategory::GeneralHygiene => "generalHygiene",
            ResourceCategory::FeminineHygiene => "feminineHygiene",
            ResourceCategory::Textile => "textile",
            ResourceCategory::BuildingMaterials => "buildingMaterials",
            ResourceCategory::Tents => "tents",
            ResourceCategory::Others => "others",
        }
    }

    /// Translation key of the category's display label
    pub fn label_key(self) -> &'static str {
        match self {
            ResourceCategory::Food => "signup.products.food",
            ResourceCategory::GeneralHygiene => "signup.products.generalHygiene",
            ResourceCategory::FeminineHygiene => "signup.products.feminineHygiene",
            ResourceCategory::Textile => "signup.products.textile",
            ResourceCategory::BuildingMaterials => "signup.products.buildingMaterials",
            ResourceCategory::Tents => "signup.products.tents",
            ResourceCategory::Others => "signup.products.others",
        }
    }
}

impl From<ResourceCategory> for u8 {
    fn from(category: ResourceCategory) -> u8 {
        category as u8
    }
}

impl TryFrom<u8> for ResourceCategory {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(ResourceCategory::Food),
            2 => Ok(ResourceCategory::GeneralHygiene),
            3 => Ok(ResourceCategory::FeminineHygiene),
            4 => Ok(ResourceCategory::Textile),
            5 => Ok(ResourceCategory::BuildingMaterials),
            6 => Ok(ResourceCategory::Tents),
            7 => Ok(ResourceCategory::Others),
            other => Err(format!("unknown resource category id {}", other)),
        }
    }
}

/// One offered or requested resource record.
///
/// `category` is fixed at construction; the sub-forms fill in the fields
/// relevant to their category and leave the rest `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonateItem {
    pub category: ResourceCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_coverage: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_transportation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textile_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kids_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tent_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DonateItem {
    /// An empty record for the given category
    pub fn new(category: ResourceCategory) -> Self {
        Self {
            category,
            name: None,
            quantity: None,
            unit_type: None,
            packaging_type: None,
            expiration_date: None,
            county_coverage: None,
            has_transportation: None,
            textile_size: None,
            kids_age: None,
            tent_capacity: None,
            description: None,
        }
    }
}

/// One selectable county, as shown in the coverage selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyChoice {
    pub value: String,
    pub label: String,
}

/// Form schema returned by the donation API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsFormData {
    #[serde(default)]
    pub county_coverage: Option<CountyCoverageField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyCoverageField {
    pub choices: Vec<ApiChoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiChoice {
    pub value: String,
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_survive_serde() {
        let json = serde_json::to_string(&ResourceCategory::Tents).unwrap();
        assert_eq!(json, "6");

        let parsed: ResourceCategory = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, ResourceCategory::Textile);
    }

    #[test]
    fn unknown_category_id_is_rejected() {
        let parsed: Result<ResourceCategory, _> = serde_json::from_str("8");
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_fields_are_skipped_on_serialization() {
        let mut item = DonateItem::new(ResourceCategory::Food);
        item.name = Some("Conserve".to_string());
        item.quantity = Some(10);

        let json = serde_json::to_value(&item).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["category"], 1);
        assert_eq!(object["name"], "Conserve");
        assert_eq!(object["quantity"], 10);
    }
}
