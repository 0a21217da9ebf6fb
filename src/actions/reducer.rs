//! Applies actions to the tournament state.

use tracing::debug;

use super::types::Action;
use crate::state::{RoundError, next, set_entries, vote};
use crate::types::State;

/// Computes the state that results from applying `action` to `state`.
///
/// Each action maps onto one of the round operations; `state` itself is
/// never modified.
pub fn reduce(state: &State, action: &Action) -> Result<State, RoundError> {
    debug!(action = action.name(), phase = state.name(), "Reducing action");
    match action {
        Action::SetEntries { entries } => Ok(set_entries(state, entries)),
        Action::Next => next(state),
        Action::Vote { entry } => vote(state, entry),
    }
}
