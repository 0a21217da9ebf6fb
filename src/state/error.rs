//! Errors returned by the round operations.

use thiserror::Error;

use crate::types::{Entry, InvalidVote, Pair};

/// A round operation was called on a state it cannot advance.
///
/// The caller's state is never modified; on error it simply keeps the value
/// it already holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The tournament is over.
    #[error("tournament already decided in favour of {winner}")]
    AlreadyDecided { winner: Entry },

    /// No matchup is open and the queue cannot form one.
    #[error("need at least 2 queued entries to open a matchup, have {available}")]
    NotEnoughEntries { available: usize },

    /// A vote was cast while no matchup is open.
    #[error("no matchup is open to vote for {entry}")]
    NoActiveVote { entry: Entry },

    /// A vote was cast for someone outside the open matchup.
    #[error("{entry} is not competing in {pair}")]
    NotInPair { entry: Entry, pair: Pair },

    /// The next matchup drawn from the queue failed shape validation.
    /// Duplicate slots drawn together are settled by walkover instead.
    #[error(transparent)]
    InvalidMatchup(#[from] InvalidVote),
}
