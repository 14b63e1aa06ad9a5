//! View routing as an explicit finite-state machine.
//!
//! The housing screen is a stack of views rooted at [`Route::Menu`]. Every
//! forward move must be listed in [`TRANSITIONS`]; [`Navigator::push`]
//! rejects anything else. Back navigation pops one level and never pops the
//! root.
//!
//! ```text
//! Menu ──► ResidenceList ──► ResidenceDetails ──► ResidenceSelect ──► ResidenceCompare
//!   └────► Resources
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A view of the housing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Menu,
    ResidenceList,
    Resources,
    ResidenceDetails,
    ResidenceSelect,
    ResidenceCompare,
}

/// Legal forward transitions `(from, to)`.
pub const TRANSITIONS: &[(Route, Route)] = &[
    (Route::Menu, Route::ResidenceList),
    (Route::Menu, Route::Resources),
    (Route::ResidenceList, Route::ResidenceDetails),
    (Route::ResidenceDetails, Route::ResidenceSelect),
    (Route::ResidenceSelect, Route::ResidenceCompare),
];

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Menu,
        Route::ResidenceList,
        Route::Resources,
        Route::ResidenceDetails,
        Route::ResidenceSelect,
        Route::ResidenceCompare,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Route::Menu => "menu",
            Route::ResidenceList => "residence_list",
            Route::Resources => "resources",
            Route::ResidenceDetails => "residence_details",
            Route::ResidenceSelect => "residence_select",
            Route::ResidenceCompare => "residence_compare",
        }
    }

    /// True when `self -> to` is in [`TRANSITIONS`].
    pub fn can_push(self, to: Route) -> bool {
        TRANSITIONS.iter().any(|&(f, t)| f == self && t == to)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("illegal transition {from} -> {to}")]
    IllegalTransition { from: Route, to: Route },
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// The view stack. Never empty; the bottom is always [`Route::Menu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self { stack: vec![Route::Menu] }
    }
}

impl Navigator {
    pub fn current(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::Menu)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn push(&mut self, to: Route) -> Result<(), NavigationError> {
        let from = self.current();
        if !from.can_push(to) {
            return Err(NavigationError::IllegalTransition { from, to });
        }
        tracing::debug!(%from, %to, "navigate");
        self.stack.push(to);
        Ok(())
    }

    /// Pop one level. Returns the route left, or `None` at the root.
    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        let left = self.stack.pop();
        tracing::debug!(left = ?left, now = %self.current(), "navigate back");
        left
    }
}
