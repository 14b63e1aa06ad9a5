//! Residence comparison — selection bookkeeping and the side-by-side table.
//!
//! [`SelectionTracker`] backs the selection view: the user toggles residences
//! on and off, optionally capped by the configured maximum. Submitting goes
//! through [`select_for_compare`], which enforces the two-residence minimum
//! and nothing else. [`ComparisonTable`] lays the result out row by row.

use crate::error::{SelectionError, MIN_COMPARE};
use crate::localize::Localizer;
use crate::types::{Category, Residence};

// ---------------------------------------------------------------------------
// Comparison gate
// ---------------------------------------------------------------------------

/// An accepted comparison, in the order the residences were picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub residences: Vec<Residence>,
}

/// Validate a selection for comparison.
///
/// Fewer than [`MIN_COMPARE`] residences is rejected with
/// [`SelectionError::TooFew`]. There is no upper bound at this layer.
pub fn select_for_compare(selected: &[Residence]) -> Result<Comparison, SelectionError> {
    if selected.len() < MIN_COMPARE {
        return Err(SelectionError::TooFew {
            required: MIN_COMPARE,
            selected: selected.len(),
        });
    }
    Ok(Comparison { residences: selected.to_vec() })
}

// ---------------------------------------------------------------------------
// SelectionTracker
// ---------------------------------------------------------------------------

/// Residence names picked on the selection view, in pick order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    picked: Vec<String>,
    /// Upper bound on picks; `None` is unbounded.
    max: Option<usize>,
}

impl SelectionTracker {
    /// `max == 0` means unbounded.
    pub fn new(max: usize) -> Self {
        Self {
            picked: Vec::new(),
            max: (max > 0).then_some(max),
        }
    }

    pub fn picked(&self) -> &[String] {
        &self.picked
    }

    pub fn is_picked(&self, name: &str) -> bool {
        self.picked.iter().any(|n| n == name)
    }

    /// Toggle `name`. Returns whether it is picked afterwards.
    pub fn toggle(&mut self, name: &str) -> Result<bool, SelectionError> {
        if let Some(pos) = self.picked.iter().position(|n| n == name) {
            self.picked.remove(pos);
            tracing::debug!(residence = name, picked = self.picked.len(), "unpicked");
            return Ok(false);
        }
        if let Some(max) = self.max {
            if self.picked.len() >= max {
                return Err(SelectionError::LimitReached { max });
            }
        }
        self.picked.push(name.to_string());
        tracing::debug!(residence = name, picked = self.picked.len(), "picked");
        Ok(true)
    }

    /// Resolve the picked names against `residences`, keeping pick order.
    pub fn resolve(&self, residences: &[Residence]) -> Result<Vec<Residence>, SelectionError> {
        self.picked
            .iter()
            .map(|name| {
                residences
                    .iter()
                    .find(|r| &r.name == name)
                    .cloned()
                    .ok_or_else(|| SelectionError::UnknownResidence(name.clone()))
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.picked.clear();
    }
}

// ---------------------------------------------------------------------------
// ComparisonTable
// ---------------------------------------------------------------------------

/// One property row: its display name and one value per residence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub key: String,
    pub name: String,
    pub values: Vec<bool>,
}

/// Rows grouped under a category heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonGroup {
    pub category: String,
    pub rows: Vec<ComparisonRow>,
}

/// Side-by-side property table for a [`Comparison`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonTable {
    /// Column headings (residence names) in comparison order.
    pub columns: Vec<String>,
    pub groups: Vec<ComparisonGroup>,
}

impl ComparisonTable {
    /// Build the table. Placeholder properties are skipped, and so are
    /// categories left without rows.
    pub fn build<L: Localizer + ?Sized>(
        categories: &[Category],
        comparison: &Comparison,
        localizer: &L,
    ) -> Self {
        let columns = comparison.residences.iter().map(|r| r.name.clone()).collect();
        let groups = categories
            .iter()
            .map(|category| ComparisonGroup {
                category: localizer.resolve(&category.name).to_string(),
                rows: category
                    .visible_properties()
                    .map(|p| ComparisonRow {
                        key: p.key.clone(),
                        name: localizer.resolve(&p.name).to_string(),
                        values: comparison.residences.iter().map(|r| r.has(&p.key)).collect(),
                    })
                    .collect(),
            })
            .filter(|g: &ComparisonGroup| !g.rows.is_empty())
            .collect();
        Self { columns, groups }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
