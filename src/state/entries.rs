//! Loading the candidate queue.

use crate::types::{Entry, State};

/// Replaces the candidate queue, keeping everything else about `state`.
///
/// Accepts any sequence of values convertible into [`Entry`]; order and
/// duplicates are preserved as given. A decided tournament has no queue to
/// replace, so loading entries into it starts a fresh, pending one and the
/// recorded winner is discarded.
///
/// ```
/// use vote_runoff::state::set_entries;
/// use vote_runoff::types::State;
///
/// let state = set_entries(&State::new(), ["Trainspotting", "28 Days Later"]);
/// assert_eq!(state, State::pending(["Trainspotting", "28 Days Later"]));
/// ```
pub fn set_entries<I, E>(state: &State, entries: I) -> State
where
    I: IntoIterator<Item = E>,
    E: Into<Entry>,
{
    let entries = entries.into_iter().map(Into::into).collect();
    match state {
        State::Voting { vote, .. } => State::Voting {
            entries,
            vote: vote.clone(),
        },
        State::Pending { .. } | State::Decided { .. } => State::Pending { entries },
    }
}
