//! Test builders — ergonomic constructors for categories, properties and
//! residences.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use housing_core::{Category, LocalizedText, Property, Residence};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Property / Category
// ---------------------------------------------------------------------------

/// A property with an English name and no description.
pub fn prop(key: &str, name: &str) -> Property {
    Property {
        key: key.to_string(),
        name: LocalizedText::new(name),
        description: None,
        value: false,
    }
}

/// A property with a description.
pub fn described(key: &str, name: &str, description: &str) -> Property {
    Property {
        description: Some(LocalizedText::new(description)),
        ..prop(key, name)
    }
}

/// Fluent builder for [`Category`] fixtures.
///
/// ```rust
/// let c = CategoryBuilder::new("Amenities")
///     .prop("wifi", "WiFi")
///     .prop("gym", "Gym")
///     .build();
/// ```
pub struct CategoryBuilder {
    name: LocalizedText,
    description: Option<LocalizedText>,
    data: Vec<Property>,
}

impl CategoryBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: LocalizedText::new(name),
            description: None,
            data: Vec::new(),
        }
    }

    pub fn french(mut self, fr: &str) -> Self {
        self.name.fr = fr.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(LocalizedText::new(description));
        self
    }

    pub fn prop(mut self, key: &str, name: &str) -> Self {
        self.data.push(prop(key, name));
        self
    }

    pub fn with(mut self, property: Property) -> Self {
        self.data.push(property);
        self
    }

    pub fn build(self) -> Category {
        Category {
            name: self.name,
            description: self.description,
            data: self.data,
        }
    }
}

// ---------------------------------------------------------------------------
// Residence
// ---------------------------------------------------------------------------

/// A residence holding every key in `has` as `true`.
pub fn residence(name: &str, has: &[&str]) -> Residence {
    Residence {
        name: name.to_string(),
        image: None,
        address: None,
        description: None,
        properties: has
            .iter()
            .map(|k| (k.to_string(), true))
            .collect::<HashMap<_, _>>(),
    }
}

/// Keys of every property in a filter result, flattened in order.
pub fn keys(result: &[Category]) -> Vec<String> {
    result
        .iter()
        .flat_map(|c| c.data.iter().map(|p| p.key.clone()))
        .collect()
}

/// True when `kept` appears in `original` in the same relative order.
pub fn is_subsequence(kept: &[Property], original: &[Property]) -> bool {
    let mut rest = original.iter();
    kept.iter().all(|k| rest.any(|o| o == k))
}

/// English names of the categories in a filter result, in order.
pub fn category_names(result: &[Category]) -> Vec<String> {
    result.iter().map(|c| c.name.en.clone()).collect()
}
