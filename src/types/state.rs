//! Tournament state.
//!
//! The state is a sum type over the three phases of a tournament, so that a
//! recorded winner can never coexist with a queue or an open matchup.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::Entry;
use super::vote::Vote;

/// The complete application state threaded through the round operations.
///
/// Serializes to the flat shape consumers render:
/// `{"entries": [...], "vote": {"pair": [a, b], "tally": {...}}}` while
/// voting, or `{"winner": a}` once decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawState")]
pub enum State {
    /// Candidates are queued but no matchup is open yet.
    Pending { entries: VecDeque<Entry> },

    /// A matchup is open; `entries` holds everyone waiting for a turn.
    Voting { entries: VecDeque<Entry>, vote: Vote },

    /// Terminal: exactly one candidate remains undefeated.
    Decided { winner: Entry },
}

impl Default for State {
    fn default() -> Self {
        State::Pending {
            entries: VecDeque::new(),
        }
    }
}

impl State {
    /// The empty state a tournament starts from.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        State::Pending {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn voting<I, E>(entries: I, vote: Vote) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        State::Voting {
            entries: entries.into_iter().map(Into::into).collect(),
            vote,
        }
    }

    pub fn decided(winner: impl Into<Entry>) -> Self {
        State::Decided {
            winner: winner.into(),
        }
    }

    /// Returns the name of this phase for logging/display.
    pub fn name(&self) -> &'static str {
        match self {
            State::Pending { .. } => "pending",
            State::Voting { .. } => "voting",
            State::Decided { .. } => "decided",
        }
    }

    /// The queue of candidates waiting for a matchup, if the tournament is
    /// still running.
    pub fn entries(&self) -> Option<&VecDeque<Entry>> {
        match self {
            State::Pending { entries } | State::Voting { entries, .. } => Some(entries),
            State::Decided { .. } => None,
        }
    }

    pub fn vote(&self) -> Option<&Vote> {
        match self {
            State::Voting { vote, .. } => Some(vote),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<&Entry> {
        match self {
            State::Decided { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_decided(&self) -> bool {
        matches!(self, State::Decided { .. })
    }
}

/// Error returned when a serialized state mixes a winner with a running
/// tournament.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a decided state cannot also carry {field}")]
pub struct InvalidState {
    pub field: &'static str,
}

/// Unvalidated wire form of [`State`].
#[derive(Deserialize)]
struct RawState {
    #[serde(default)]
    entries: Option<VecDeque<Entry>>,

    #[serde(default)]
    vote: Option<Vote>,

    #[serde(default)]
    winner: Option<Entry>,
}

impl TryFrom<RawState> for State {
    type Error = InvalidState;

    fn try_from(raw: RawState) -> Result<Self, Self::Error> {
        match raw {
            RawState {
                winner: Some(_),
                entries: Some(_),
                ..
            } => Err(InvalidState { field: "entries" }),
            RawState {
                winner: Some(_),
                vote: Some(_),
                ..
            } => Err(InvalidState { field: "vote" }),
            RawState {
                winner: Some(winner),
                ..
            } => Ok(State::Decided { winner }),
            RawState {
                entries,
                vote: Some(vote),
                ..
            } => Ok(State::Voting {
                entries: entries.unwrap_or_default(),
                vote,
            }),
            RawState { entries, .. } => Ok(State::Pending {
                entries: entries.unwrap_or_default(),
            }),
        }
    }
}
