//! Localized strings and the [`Localizer`] collaborator.
//!
//! Every user-facing string in the dataset carries an English and a French
//! rendition. The filter engine never looks at [`LocalizedText`] directly; it
//! asks a [`Localizer`] for the string in the active language.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language of the guide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Map the legacy boolean language preference (English = `true`,
    /// French = `false`).
    pub fn from_preference(english: bool) -> Self {
        if english {
            Language::En
        } else {
            Language::Fr
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Fr => write!(f, "fr"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "fr" | "french" | "francais" | "français" => Ok(Language::Fr),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// A string with English and (optional) French variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fr: String,
}

impl LocalizedText {
    /// English-only text; French falls back to it.
    pub fn new(en: impl Into<String>) -> Self {
        Self { en: en.into(), fr: String::new() }
    }

    pub fn bilingual(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self { en: en.into(), fr: fr.into() }
    }

    /// The variant for `lang`, falling back to English when the French
    /// string is empty.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Fr if !self.fr.is_empty() => &self.fr,
            _ => &self.en,
        }
    }
}

/// Resolves localized dataset strings for the active language.
pub trait Localizer {
    fn resolve<'a>(&self, text: &'a LocalizedText) -> &'a str;

    /// Resolve an optional string; a missing value resolves to `""`.
    fn resolve_opt<'a>(&self, text: Option<&'a LocalizedText>) -> &'a str {
        text.map(|t| self.resolve(t)).unwrap_or("")
    }
}

impl Localizer for Language {
    fn resolve<'a>(&self, text: &'a LocalizedText) -> &'a str {
        text.get(*self)
    }
}
