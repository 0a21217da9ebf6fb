//! Recording votes for the open matchup.

use tracing::trace;

use super::error::RoundError;
use crate::types::{Entry, State};

/// Records one vote for `entry` in the open matchup.
///
/// The queue and the pair are carried over unchanged; only the tally of
/// `entry` grows by one. Voter identity is not tracked here, so repeated
/// votes from the same voter all count.
///
/// # Errors
///
/// - [`RoundError::AlreadyDecided`] if the tournament is over.
/// - [`RoundError::NoActiveVote`] if no matchup is open.
/// - [`RoundError::NotInPair`] if `entry` is not one of the two contestants.
pub fn vote(state: &State, entry: &Entry) -> Result<State, RoundError> {
    match state {
        State::Decided { winner } => Err(RoundError::AlreadyDecided {
            winner: winner.clone(),
        }),
        State::Pending { .. } => Err(RoundError::NoActiveVote {
            entry: entry.clone(),
        }),
        State::Voting { entries, vote } => {
            let mut vote = vote.clone();
            if !vote.record(entry) {
                return Err(RoundError::NotInPair {
                    entry: entry.clone(),
                    pair: vote.pair().clone(),
                });
            }
            trace!(entry = %entry, count = vote.tally().count(entry), "Recorded vote");

            Ok(State::Voting {
                entries: entries.clone(),
                vote,
            })
        }
    }
}
