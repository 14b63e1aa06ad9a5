//! State container for the housing screen.
//!
//! The [`Store`] is the single owner of [`HousingState`]. Views read from it
//! and submit [`Action`]s; it runs the pure reducer, swaps in the new state
//! and hands the resulting effects to its collaborators.

use crate::effects::{Analytics, Effect, LinkOpener};
use crate::state::{reduce, Action, HousingState, ScreenError};
use housing_core::Localizer;

pub struct Store<L, O, A> {
    state: HousingState,
    localizer: L,
    links: O,
    analytics: A,
}

impl<L, O, A> Store<L, O, A>
where
    L: Localizer,
    O: LinkOpener,
    A: Analytics,
{
    pub fn new(state: HousingState, localizer: L, links: O, analytics: A) -> Self {
        Self { state, localizer, links, analytics }
    }

    pub fn state(&self) -> &HousingState {
        &self.state
    }

    pub fn localizer(&self) -> &L {
        &self.localizer
    }

    /// Apply `action`. On error the state is left untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ScreenError> {
        tracing::debug!(route = %self.state.route(), action = ?action, "dispatch");
        let transition = reduce(&self.state, action, &self.localizer).map_err(|err| {
            tracing::warn!(route = %self.state.route(), error = %err, "action rejected");
            err
        })?;

        self.state = transition.state;
        for effect in &transition.effects {
            self.run(effect);
        }
        Ok(())
    }

    fn run(&self, effect: &Effect) {
        match effect {
            Effect::OpenLink(url) => self.links.open(url),
            Effect::Track(event) => self.analytics.track(event),
        }
    }
}
