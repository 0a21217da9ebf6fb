//! Advancing the tournament by one round.
//!
//! A round ends by resolving the open matchup: the winner (or both
//! contestants, when nobody won outright) goes to the back of the queue, and
//! the next two queued candidates face each other. Once nobody is left
//! waiting and the last matchup had an outright winner, the tournament is
//! decided.

use std::collections::VecDeque;

use tracing::debug;

use super::error::RoundError;
use crate::types::{Entry, InvalidVote, Outcome, Pair, State, Vote};

/// Resolves the open matchup and opens the next one, or decides the
/// tournament.
///
/// Requeued candidates always go behind everybody already waiting, so a
/// candidate that just won does not fight again before the rest of the queue
/// has had a turn.
///
/// # Errors
///
/// - [`RoundError::AlreadyDecided`] if the tournament is over.
/// - [`RoundError::NotEnoughEntries`] if no matchup is open and fewer than two
///   candidates are queued.
/// - [`RoundError::InvalidMatchup`] if a drawn matchup fails shape
///   validation.
///
/// Two queue slots holding the same candidate never face each other; see
/// the walkover rule on the matchup draw.
///
/// ```
/// use vote_runoff::state::next;
/// use vote_runoff::types::{Pair, State, Vote};
///
/// let state = State::pending(["one", "two", "three"]);
/// let next_state = next(&state).unwrap();
/// assert_eq!(
///     next_state,
///     State::voting(["three"], Vote::open(Pair::new("one", "two").unwrap()))
/// );
/// ```
pub fn next(state: &State) -> Result<State, RoundError> {
    let (entries, vote) = match state {
        State::Decided { winner } => {
            return Err(RoundError::AlreadyDecided {
                winner: winner.clone(),
            });
        }
        State::Pending { entries } => (entries, None),
        State::Voting { entries, vote } => (entries, Some(vote)),
    };

    let requeued = match vote {
        Some(vote) => {
            let outcome = vote.outcome();
            if let Outcome::Winner(winner) = &outcome
                && entries.is_empty()
            {
                debug!(winner = %winner, "Tournament decided");
                return Ok(State::Decided {
                    winner: winner.clone(),
                });
            }
            requeue(vote, outcome)
        }
        None => Vec::new(),
    };

    let mut queue = entries.clone();
    queue.extend(requeued);
    open_matchup(queue)
}

/// Returns the candidates that survive a resolved matchup, in pair order.
fn requeue(vote: &Vote, outcome: Outcome) -> Vec<Entry> {
    match outcome {
        Outcome::Winner(winner) => {
            debug!(winner = %winner, pair = %vote.pair(), "Matchup won");
            vec![winner]
        }
        undecided @ (Outcome::Tie | Outcome::Undecided) => {
            debug!(pair = %vote.pair(), outcome = ?undecided, "Matchup undecided, requeueing both");
            vote.pair().iter().cloned().collect()
        }
    }
}

/// Draws the next pair off the front of `queue`.
///
/// A candidate drawn against its own duplicate slot gets a walkover: the
/// duplicate slot is dropped, the candidate goes to the back of the queue
/// and the draw is retried. If that leaves nobody else in the queue, the
/// candidate wins the tournament.
fn open_matchup(mut queue: VecDeque<Entry>) -> Result<State, RoundError> {
    let available = queue.len();
    if available < 2 {
        return Err(RoundError::NotEnoughEntries { available });
    }

    loop {
        let Some(first) = queue.pop_front() else {
            return Err(RoundError::NotEnoughEntries { available });
        };
        let Some(second) = queue.pop_front() else {
            debug!(winner = %first, "Tournament decided by walkover");
            return Ok(State::Decided { winner: first });
        };

        match Pair::new(first, second) {
            Ok(pair) => {
                debug!(pair = %pair, queue_len = queue.len(), "Opened matchup");
                return Ok(State::Voting {
                    entries: queue,
                    vote: Vote::open(pair),
                });
            }
            Err(InvalidVote::DuplicateContestant { entry }) => {
                debug!(entry = %entry, "Walkover against own duplicate slot");
                queue.push_back(entry);
            }
            Err(other) => return Err(other.into()),
        }
    }
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod round_tests;
