//! Side effects requested by the reducer, and the collaborators that run them.
//!
//! The reducer never opens links or reports analytics itself. It returns
//! [`Effect`] values and the [`Store`](crate::store::Store) hands them to a
//! [`LinkOpener`] or an [`Analytics`] sink. Both are fire-and-forget.

use crate::navigation::Route;

/// A user action reported to analytics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    MenuSelected { section: String, route: Route },
    ResidenceOpened { residence: String },
    ComparisonStarted { residences: usize },
    ResourceOpened { link: String },
}

/// Work the store performs after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenLink(String),
    Track(AnalyticsEvent),
}

/// Opens a URL outside the guide. Invalid links are the opener's problem.
pub trait LinkOpener {
    fn open(&self, url: &str);
}

/// Receives analytics events. Nothing is returned.
pub trait Analytics {
    fn track(&self, event: &AnalyticsEvent);
}

/// Analytics sink that writes events to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        tracing::info!(event = ?event, "analytics");
    }
}

/// Link opener that only logs the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLinkOpener;

impl LinkOpener for LogLinkOpener {
    fn open(&self, url: &str) {
        tracing::info!(url, "open link");
    }
}
