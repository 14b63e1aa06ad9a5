//! Filter engine — keyword search over the category / property hierarchy.
//!
//! Three layers, leaf first:
//!
//! - [`matches`]: case-insensitive substring test.
//! - [`filter_category`]: keeps a whole category when its name matches,
//!   otherwise only the properties whose name or description matches.
//! - [`search`]: runs [`filter_category`] over an input set chosen by
//!   [`SearchMode`], preserving category and property order.
//!
//! Everything here is pure: inputs are borrowed, outputs are new values.

use crate::localize::Localizer;
use crate::types::Category;

// ---------------------------------------------------------------------------
// Text matcher
// ---------------------------------------------------------------------------

/// True when `haystack` contains `query`, ignoring case.
///
/// An empty or whitespace-only query matches everything.
pub fn matches(haystack: &str, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    haystack.to_uppercase().contains(&query.to_uppercase())
}

// ---------------------------------------------------------------------------
// Property filter
// ---------------------------------------------------------------------------

/// Filter one category against `query`.
///
/// Returns the full category when its name matches, a copy holding only the
/// matching properties when some match, and `None` when nothing does.
/// Placeholder properties are not special-cased here.
pub fn filter_category<L: Localizer + ?Sized>(
    category: &Category,
    query: &str,
    localizer: &L,
) -> Option<Category> {
    if matches(localizer.resolve(&category.name), query) {
        return Some(category.clone());
    }

    let data: Vec<_> = category
        .data
        .iter()
        .filter(|p| {
            matches(localizer.resolve(&p.name), query)
                || matches(localizer.resolve_opt(p.description.as_ref()), query)
        })
        .cloned()
        .collect();

    if data.is_empty() {
        None
    } else {
        Some(Category { data, ..category.clone() })
    }
}

// ---------------------------------------------------------------------------
// Hierarchy filter
// ---------------------------------------------------------------------------

/// Which input set a search runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Search the complete dataset.
    Fresh,
    /// Refine the previous result.
    Narrow,
}

impl SearchMode {
    /// Pick the mode for a query edit from `prev` to `next`.
    ///
    /// Narrowing is only safe when `next` continues `prev`: the previous
    /// query was empty, or the new one contains it. Anything else (deleting
    /// characters, an unrelated query) needs a fresh search so no stale
    /// exclusions survive.
    pub fn for_transition(prev: &str, next: &str) -> Self {
        if prev.trim().is_empty() || matches(next, prev) {
            SearchMode::Narrow
        } else {
            SearchMode::Fresh
        }
    }
}

/// Filter the hierarchy against `query`.
///
/// `dataset` is the complete set for the selected residence; `None` means no
/// residence is selected and the call returns `previous` unchanged. In
/// [`SearchMode::Narrow`] the input set is `previous` instead of `dataset`.
pub fn search<L: Localizer + ?Sized>(
    dataset: Option<&[Category]>,
    query: &str,
    mode: SearchMode,
    previous: &[Category],
    localizer: &L,
) -> Vec<Category> {
    let Some(dataset) = dataset else {
        tracing::debug!(query, "search skipped: no dataset");
        return previous.to_vec();
    };

    let input = match mode {
        SearchMode::Fresh => dataset,
        SearchMode::Narrow => previous,
    };

    let result: Vec<Category> = input
        .iter()
        .filter_map(|c| filter_category(c, query, localizer))
        .collect();

    tracing::debug!(
        query,
        mode = ?mode,
        input = input.len(),
        matched = result.len(),
        "search"
    );
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localize::{Language, LocalizedText};
    use crate::types::Property;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn prop(key: &str, name: &str, description: Option<&str>) -> Property {
        Property {
            key: key.to_string(),
            name: LocalizedText::new(name),
            description: description.map(LocalizedText::new),
            value: false,
        }
    }

    fn amenities() -> Category {
        Category {
            name: LocalizedText::new("Amenities"),
            description: None,
            data: vec![
                prop("wifi", "WiFi", Some("Wireless internet in every room")),
                prop("gym", "Gym", None),
            ],
        }
    }

    #[rstest]
    #[case("WiFi", "wifi", true)]
    #[case("wifi", "WIFI", true)]
    #[case("Pets Allowed", "ts al", true)]
    #[case("Gym", "pool", false)]
    #[case("Gym", "", true)]
    #[case("Gym", "   ", true)]
    #[case("", "a", false)]
    fn matcher(#[case] haystack: &str, #[case] query: &str, #[case] expected: bool) {
        assert_eq!(matches(haystack, query), expected);
    }

    #[test]
    fn category_name_match_keeps_everything() {
        let c = amenities();
        assert_eq!(filter_category(&c, "amen", &Language::En), Some(c));
    }

    #[test]
    fn description_match_keeps_property() {
        let out = filter_category(&amenities(), "wireless", &Language::En).unwrap();
        assert_eq!(out.data.len(), 1);
        assert_eq!(out.data[0].key, "wifi");
    }

    #[test]
    fn empty_non_matching_category_is_dropped() {
        let c = Category {
            name: LocalizedText::new("Policies"),
            description: None,
            data: vec![],
        };
        assert_eq!(filter_category(&c, "gym", &Language::En), None);
    }

    #[test]
    fn search_without_dataset_is_noop() {
        let previous = vec![amenities()];
        let out = search(None, "gym", SearchMode::Fresh, &previous, &Language::En);
        assert_eq!(out, previous);
    }

    #[test]
    fn narrow_searches_previous_result() {
        let dataset = vec![amenities()];
        let previous: Vec<Category> = vec![];
        let out = search(Some(dataset.as_slice()), "gym", SearchMode::Narrow, &previous, &Language::En);
        assert!(out.is_empty());
        let out = search(Some(dataset.as_slice()), "gym", SearchMode::Fresh, &previous, &Language::En);
        assert_eq!(out.len(), 1);
    }

    #[rstest]
    #[case("", "w", SearchMode::Narrow)]
    #[case("wi", "wif", SearchMode::Narrow)]
    #[case("WI", "wifi", SearchMode::Narrow)]
    #[case("wif", "wi", SearchMode::Fresh)]
    #[case("gym", "pool", SearchMode::Fresh)]
    #[case("wifi", "", SearchMode::Fresh)]
    fn mode_for_transition(#[case] prev: &str, #[case] next: &str, #[case] expected: SearchMode) {
        assert_eq!(SearchMode::for_transition(prev, next), expected);
    }
}
