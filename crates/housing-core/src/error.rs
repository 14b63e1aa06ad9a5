//! Error types for housing-core.

use thiserror::Error;

/// Minimum number of residences a comparison needs.
pub const MIN_COMPARE: usize = 2;

/// Rejections from the comparison selection. These are user-facing
/// validation messages, not faults: the caller keeps its prior state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("select at least two residences to compare ({selected} selected)")]
    TooFew { required: usize, selected: usize },

    #[error("you can compare at most {max} residences")]
    LimitReached { max: usize },

    #[error("unknown residence: {0}")]
    UnknownResidence(String),
}
