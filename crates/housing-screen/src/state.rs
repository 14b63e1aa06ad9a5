//! Screen state and the reducer that drives it.
//!
//! [`reduce`] is a pure function: it borrows the current [`HousingState`],
//! applies one [`Action`] and returns the next state together with the
//! [`Effect`]s to run. An `Err` means the action was rejected and the caller
//! keeps the state it had. Recoverable validation failures (too few
//! residences picked, selection limit reached) are not errors: they come back
//! as `Ok` with the prior state and a user-facing `notice`.

use crate::effects::{AnalyticsEvent, Effect};
use crate::navigation::{NavigationError, Navigator, Route};
use crate::query::{QueryEdit, QueryInput};
use housing_core::{
    search, select_for_compare, Category, Comparison, HousingInfo, Localizer, Residence,
    SearchMode, SectionTarget, SelectionError, SelectionTracker,
};
use std::sync::Arc;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error("housing data is not loaded yet")]
    NoDataset,

    #[error("no menu section #{0}")]
    UnknownSection(usize),

    #[error("unknown residence: {0}")]
    UnknownResidence(String),

    #[error("no resource #{0}")]
    UnknownResource(usize),

    #[error("{action} is not available from {route}")]
    WrongView { action: &'static str, route: Route },

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The dataset loader delivered a snapshot.
    DatasetLoaded(HousingInfo),
    /// Pick a menu entry by position.
    SelectSection(usize),
    /// Show a residence. From the details view this switches residence.
    OpenResidence(String),
    /// Replace the filter keyword.
    SetQuery(String),
    /// Type one character into the filter box.
    TypeChar(char),
    /// Delete the character before the cursor in the filter box.
    Backspace,
    /// Go to the comparison selection view.
    BeginComparison,
    /// Pick or unpick a residence on the selection view.
    ToggleSelection(String),
    /// Compare the picked residences.
    SubmitComparison,
    /// Open a housing resource link by position.
    OpenResource(usize),
    /// Pop one view.
    Back,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HousingState {
    /// Dataset snapshot; `None` until the loader delivers one.
    pub info: Option<Arc<HousingInfo>>,
    pub nav: Navigator,
    /// Name of the residence on the details view.
    pub residence: Option<String>,
    /// Full property list of the selected residence, values filled in.
    pub header: Option<Vec<Category>>,
    /// `header` filtered by the current query.
    pub filtered: Vec<Category>,
    pub query: QueryInput,
    pub selection: SelectionTracker,
    pub comparison: Option<Comparison>,
    /// User-facing message from the last action, if any.
    pub notice: Option<String>,
    /// Selection-view cap (0 = none).
    pub max_selected: usize,
}

impl HousingState {
    pub fn new(max_selected: usize) -> Self {
        Self {
            selection: SelectionTracker::new(max_selected),
            max_selected,
            ..Default::default()
        }
    }

    pub fn route(&self) -> Route {
        self.nav.current()
    }

    pub fn is_loaded(&self) -> bool {
        self.info.is_some()
    }

    /// The residence on the details view.
    pub fn selected_residence(&self) -> Option<&Residence> {
        let name = self.residence.as_deref()?;
        self.info.as_ref()?.residence(name)
    }
}

/// Result of a successful [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: HousingState,
    pub effects: Vec<Effect>,
}

// ---------------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------------

pub fn reduce<L: Localizer + ?Sized>(
    state: &HousingState,
    action: Action,
    localizer: &L,
) -> Result<Transition, ScreenError> {
    let mut next = state.clone();
    next.notice = None;
    let mut effects = Vec::new();

    match action {
        Action::DatasetLoaded(info) => {
            next.info = Some(Arc::new(info));
            // A reload while a residence is open refreshes its properties,
            // or forgets it when the new snapshot no longer has it.
            if let Some(name) = next.residence.clone() {
                match show_residence(&mut next, &name, localizer) {
                    Ok(()) => {}
                    Err(ScreenError::UnknownResidence(_)) => {
                        tracing::warn!(residence = %name, "open residence missing from new snapshot");
                        next.residence = None;
                        next.header = None;
                        next.filtered.clear();
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        Action::SelectSection(index) => {
            let info = loaded(&next)?;
            let section = info.sections.get(index).ok_or(ScreenError::UnknownSection(index))?;
            let route = match section.target {
                SectionTarget::Residences => Route::ResidenceList,
                SectionTarget::Resources => Route::Resources,
            };
            let name = localizer.resolve(&section.name).to_string();
            next.nav.push(route)?;
            effects.push(Effect::Track(AnalyticsEvent::MenuSelected { section: name, route }));
        }

        Action::OpenResidence(name) => {
            if next.route() != Route::ResidenceDetails {
                next.nav.push(Route::ResidenceDetails)?;
            }
            show_residence(&mut next, &name, localizer)?;
            effects.push(Effect::Track(AnalyticsEvent::ResidenceOpened { residence: name }));
        }

        Action::SetQuery(text) => {
            let edit = next.query.set(&text);
            apply_query(&mut next, state, &edit, localizer);
        }
        Action::TypeChar(c) => {
            let edit = next.query.insert(c);
            apply_query(&mut next, state, &edit, localizer);
        }
        Action::Backspace => {
            let edit = next.query.backspace();
            apply_query(&mut next, state, &edit, localizer);
        }

        Action::BeginComparison => {
            next.nav.push(Route::ResidenceSelect)?;
            next.selection = SelectionTracker::new(next.max_selected);
            if let Some(name) = next.residence.clone() {
                // The residence being viewed starts out picked.
                next.selection.toggle(&name)?;
            }
        }

        Action::ToggleSelection(name) => {
            expect_route(&next, Route::ResidenceSelect, "toggle")?;
            let info = loaded(&next)?;
            if info.residence(&name).is_none() {
                return Err(ScreenError::UnknownResidence(name));
            }
            if let Err(err) = next.selection.toggle(&name) {
                tracing::debug!(error = %err, "selection rejected");
                return Ok(rejected(state, err));
            }
        }

        Action::SubmitComparison => {
            expect_route(&next, Route::ResidenceSelect, "compare")?;
            let info = loaded(&next)?;
            let picked = next.selection.resolve(&info.residences)?;
            match select_for_compare(&picked) {
                Ok(comparison) => {
                    next.nav.push(Route::ResidenceCompare)?;
                    effects.push(Effect::Track(AnalyticsEvent::ComparisonStarted {
                        residences: comparison.residences.len(),
                    }));
                    next.comparison = Some(comparison);
                }
                Err(err) => {
                    tracing::debug!(error = %err, "comparison rejected");
                    return Ok(rejected(state, err));
                }
            }
        }

        Action::OpenResource(index) => {
            expect_route(&next, Route::Resources, "resource")?;
            let info = loaded(&next)?;
            let resource = info.resources.get(index).ok_or(ScreenError::UnknownResource(index))?;
            let link = resource.link.clone();
            effects.push(Effect::OpenLink(link.clone()));
            effects.push(Effect::Track(AnalyticsEvent::ResourceOpened { link }));
        }

        Action::Back => match next.nav.pop() {
            Some(Route::ResidenceDetails) => {
                next.residence = None;
                next.header = None;
                next.filtered.clear();
                next.query.clear();
                next.selection.clear();
            }
            Some(Route::ResidenceSelect) => next.selection.clear(),
            Some(Route::ResidenceCompare) => next.comparison = None,
            Some(_) | None => {}
        },
    }

    Ok(Transition { state: next, effects })
}

fn loaded(state: &HousingState) -> Result<Arc<HousingInfo>, ScreenError> {
    state.info.clone().ok_or(ScreenError::NoDataset)
}

fn expect_route(state: &HousingState, route: Route, action: &'static str) -> Result<(), ScreenError> {
    if state.route() == route {
        Ok(())
    } else {
        Err(ScreenError::WrongView { action, route: state.route() })
    }
}

/// Keep `state` as it was, with `err` as the notice.
fn rejected(state: &HousingState, err: SelectionError) -> Transition {
    let mut kept = state.clone();
    kept.notice = Some(err.to_string());
    Transition { state: kept, effects: Vec::new() }
}

/// Load `name`'s properties and run a fresh search with the current query.
fn show_residence<L: Localizer + ?Sized>(
    state: &mut HousingState,
    name: &str,
    localizer: &L,
) -> Result<(), ScreenError> {
    let info = loaded(state)?;
    let residence = info
        .residence(name)
        .ok_or_else(|| ScreenError::UnknownResidence(name.to_string()))?;

    let header = residence.property_view(&info.categories);
    state.filtered = search(Some(header.as_slice()), &state.query.query, SearchMode::Fresh, &[], localizer);
    state.header = Some(header);
    state.residence = Some(name.to_string());
    Ok(())
}

fn apply_query<L: Localizer + ?Sized>(
    next: &mut HousingState,
    prev: &HousingState,
    edit: &QueryEdit,
    localizer: &L,
) {
    next.filtered = search(
        next.header.as_deref(),
        &edit.next,
        edit.mode(),
        &prev.filtered,
        localizer,
    );
}
