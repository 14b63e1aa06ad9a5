//! housing-screen — state container for the campus guide housing screen.
//!
//! The screen is modelled without any rendering: a route stack
//! ([`navigation`]), a pure reducer over [`HousingState`] ([`state`]), and a
//! [`Store`] that owns the state and runs side effects through its
//! collaborators ([`effects`]). [`command`] maps shell input onto actions.

pub mod command;
pub mod effects;
pub mod navigation;
pub mod query;
pub mod state;
pub mod store;

pub use command::ScreenCommand;
pub use effects::{Analytics, AnalyticsEvent, Effect, LinkOpener, LogLinkOpener, TracingAnalytics};
pub use navigation::{NavigationError, Navigator, Route, TRANSITIONS};
pub use query::{QueryEdit, QueryInput};
pub use state::{reduce, Action, HousingState, ScreenError, Transition};
pub use store::Store;
