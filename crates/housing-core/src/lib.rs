//! housing-core — campus guide housing core library.
//!
//! This crate holds the pure logic behind the housing screen, plus the shared
//! types used across the workspace.
//!
//! # Architecture
//!
//! ```text
//! Source ──► HousingInfo ──► Screen (reducer) ──► CLI
//!                               │
//!                     filter / compare (this crate)
//! ```
//!
//! Nothing in this crate performs I/O except [`config::Config::load`].

pub mod compare;
pub mod config;
pub mod error;
pub mod filter;
pub mod localize;
pub mod types;

pub use compare::{select_for_compare, Comparison, ComparisonTable, SelectionTracker};
pub use error::{SelectionError, MIN_COMPARE};
pub use filter::{filter_category, matches, search, SearchMode};
pub use localize::{Language, LocalizedText, Localizer};
pub use types::{
    Category, HousingInfo, MenuSection, Property, Residence, Resource, SectionTarget,
    PLACEHOLDER_KEY,
};
