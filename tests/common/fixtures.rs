//! Static datasets used across harnesses.

use super::builders::*;
use housing_core::{Category, HousingInfo, LocalizedText, MenuSection, Resource, SectionTarget};

/// The two-category example hierarchy: Amenities (WiFi, Gym) and Policies
/// (Pets Allowed).
pub fn amenities_and_policies() -> Vec<Category> {
    vec![
        CategoryBuilder::new("Amenities")
            .prop("wifi", "WiFi")
            .prop("gym", "Gym")
            .build(),
        CategoryBuilder::new("Policies")
            .prop("pets", "Pets Allowed")
            .build(),
    ]
}

/// A richer hierarchy with French names, descriptions and a placeholder.
pub fn campus_categories() -> Vec<Category> {
    vec![
        CategoryBuilder::new("Room Types")
            .french("Types de chambres")
            .with(described("traditional", "Traditional", "Shared washroom on the floor"))
            .with(described("suite", "Suite", "Private rooms sharing a washroom"))
            .prop("none", "")
            .build(),
        CategoryBuilder::new("Amenities")
            .french("Commodités")
            .with(described("wifi", "WiFi", "Wireless internet in every room"))
            .prop("laundry", "Laundry")
            .prop("gym", "Gym")
            .build(),
        CategoryBuilder::new("Meals")
            .french("Repas")
            .prop("meal_plan", "Meal Plan Required")
            .with(described("kitchen", "Kitchen", "Shared or in-unit kitchen"))
            .build(),
        CategoryBuilder::new("Policies")
            .prop("pets", "Pets Allowed")
            .build(),
    ]
}

/// A full dataset: menu, categories, three residences and one resource.
pub fn campus_info() -> HousingInfo {
    HousingInfo {
        sections: vec![
            MenuSection {
                name: LocalizedText::bilingual("Residences", "Résidences"),
                image: None,
                target: SectionTarget::Residences,
            },
            MenuSection {
                name: LocalizedText::bilingual("Resources", "Ressources"),
                image: None,
                target: SectionTarget::Resources,
            },
        ],
        categories: campus_categories(),
        residences: vec![
            residence("Thompson", &["traditional", "wifi", "laundry", "meal_plan"]),
            residence("Rideau", &["suite", "wifi", "gym", "kitchen"]),
            residence("Stanton", &["traditional", "laundry", "meal_plan"]),
        ],
        resources: vec![Resource {
            name: LocalizedText::new("Housing Service"),
            description: None,
            link: "https://example.edu/housing".to_string(),
        }],
    }
}

/// [`campus_info`] serialized as a dataset document.
pub fn campus_info_json() -> String {
    serde_json::to_string_pretty(&campus_info()).expect("fixture serializes")
}
