//! campus-guide — university housing browser.
//!
//! The binary is a thin shell over the workspace crates. This library target
//! exposes the CLI plumbing so integration tests can drive it directly.
//!
//! # Architecture
//!
//! ```text
//! housing-source ──► HousingInfo ──► housing-screen (Store) ──► output
//!                                          │
//!                                    housing-core (filter / compare)
//! ```
//!
//! Dataset loading is the only asynchronous step; everything after it runs
//! synchronously on the calling task.

pub mod app;
pub mod cli;
pub mod output;

pub use app::{one_shot, Settings};
pub use cli::{Cli, Commands};
