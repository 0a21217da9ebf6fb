//! Action types dispatched against the tournament state.
//!
//! Actions are the serialized form of the three round operations, as sent by
//! whatever front end drives the tournament.

use serde::{Deserialize, Serialize};

use crate::types::Entry;

/// A request to change the tournament state.
///
/// Serializes with a `type` tag, e.g. `{"type": "VOTE", "entry": "Sunshine"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replaces the candidate queue: `entries a, b, c`
    SetEntries { entries: Vec<Entry> },

    /// Resolves the open matchup and opens the next one: `next`
    Next,

    /// Casts one vote in the open matchup: `vote <entry>`
    Vote { entry: Entry },
}

impl Action {
    /// Returns the name of this action for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetEntries { .. } => "set_entries",
            Action::Next => "next",
            Action::Vote { .. } => "vote",
        }
    }
}
