//! Core types for housing-core.
//!
//! This module defines the data structures shared across the workspace: the
//! [`HousingInfo`] snapshot supplied by the dataset loader, the two-level
//! [`Category`] / [`Property`] hierarchy the filter engine works on, and the
//! [`Residence`] entities that users browse and compare.

use crate::localize::LocalizedText;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Property key reserved for empty slots in the dataset. Never shown as data.
pub const PLACEHOLDER_KEY: &str = "none";

/// A single named boolean attribute of a residence (e.g. "has Wi-Fi").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Unique key, used to look the value up in [`Residence::properties`].
    pub key: String,
    pub name: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    /// Populated from a residence by [`Residence::property_view`]; `false`
    /// in the raw dataset.
    #[serde(default)]
    pub value: bool,
}

impl Property {
    /// True for the `"none"` sentinel slot.
    pub fn is_placeholder(&self) -> bool {
        self.key == PLACEHOLDER_KEY
    }
}

/// A named group of related properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub data: Vec<Property>,
}

impl Category {
    /// Properties that should be displayed: everything except placeholders.
    pub fn visible_properties(&self) -> impl Iterator<Item = &Property> {
        self.data.iter().filter(|p| !p.is_placeholder())
    }
}

/// A university housing unit. Identity is by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residence {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub address: Option<LocalizedText>,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    /// Property key → whether this residence has it.
    #[serde(default)]
    pub properties: HashMap<String, bool>,
}

impl Residence {
    /// Value of a property for this residence. Unknown keys are `false`.
    pub fn has(&self, key: &str) -> bool {
        self.properties.get(key).copied().unwrap_or(false)
    }

    /// Copy `categories` with every property's `value` taken from this
    /// residence. This is the header list shown on the details view and the
    /// input set for the filter engine.
    pub fn property_view(&self, categories: &[Category]) -> Vec<Category> {
        categories
            .iter()
            .map(|category| Category {
                data: category
                    .data
                    .iter()
                    .map(|p| Property {
                        value: self.has(&p.key),
                        ..p.clone()
                    })
                    .collect(),
                ..category.clone()
            })
            .collect()
    }
}

/// Which view a menu section leads to.
///
/// Stored as a snake_case identifier in the dataset; an identifier that does
/// not name a view fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionTarget {
    Residences,
    Resources,
}

/// An entry on the housing menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: LocalizedText,
    #[serde(default)]
    pub image: Option<String>,
    pub target: SectionTarget,
}

/// An external housing resource (off-campus listings, housing office, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    pub link: String,
}

/// Read-only snapshot of the housing dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingInfo {
    #[serde(default)]
    pub sections: Vec<MenuSection>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub residences: Vec<Residence>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl HousingInfo {
    /// Look a residence up by name (exact match).
    pub fn residence(&self, name: &str) -> Option<&Residence> {
        self.residences.iter().find(|r| r.name == name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
