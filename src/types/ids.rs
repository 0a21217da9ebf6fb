//! Newtype wrapper for tournament candidates.
//!
//! Candidates are opaque: nothing is assumed about them beyond equality (and a
//! total order, used only to keep tallies in a deterministic order).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate taking part in the tournament.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(pub String);

impl Entry {
    pub fn new(s: impl Into<String>) -> Self {
        Entry(s.into())
    }

    /// Returns the entry name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry(s)
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry(s.to_string())
    }
}

impl From<&Entry> for Entry {
    fn from(e: &Entry) -> Self {
        e.clone()
    }
}
