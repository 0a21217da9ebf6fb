//! Matchup and tally types.
//!
//! A [`Vote`] is the currently open matchup: a [`Pair`] of two distinct
//! contestants and the [`Tally`] of votes cast so far. Both types keep their
//! invariants private so that a malformed matchup cannot be constructed, not
//! even through deserialization.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::Entry;

/// Error returned when a matchup would break its shape invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidVote {
    /// A pair must hold exactly two contestants.
    #[error("a matchup needs exactly 2 contestants, got {len}")]
    WrongPairLength { len: usize },

    /// Both slots of the pair hold the same candidate.
    #[error("{entry} cannot be matched against itself")]
    DuplicateContestant { entry: Entry },

    /// A tally key that is not a member of the pair.
    #[error("{entry} is not part of this matchup")]
    UnknownContestant { entry: Entry },

    /// Zero counts are represented by absence, never stored.
    #[error("tally for {entry} must be at least 1")]
    ZeroCount { entry: Entry },
}

/// Two distinct contestants, in queue order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Entry>", into = "Vec<Entry>")]
pub struct Pair {
    first: Entry,
    second: Entry,
}

impl Pair {
    /// Creates a pair, rejecting a candidate matched against itself.
    pub fn new(first: impl Into<Entry>, second: impl Into<Entry>) -> Result<Self, InvalidVote> {
        let first = first.into();
        let second = second.into();
        if first == second {
            return Err(InvalidVote::DuplicateContestant { entry: first });
        }
        Ok(Pair { first, second })
    }

    pub fn first(&self) -> &Entry {
        &self.first
    }

    pub fn second(&self) -> &Entry {
        &self.second
    }

    /// Returns true if `entry` is one of the two contestants.
    pub fn contains(&self, entry: &Entry) -> bool {
        self.first == *entry || self.second == *entry
    }

    /// Iterates over both contestants in pair order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        [&self.first, &self.second].into_iter()
    }

    pub fn into_entries(self) -> [Entry; 2] {
        [self.first, self.second]
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.first, self.second)
    }
}

impl TryFrom<Vec<Entry>> for Pair {
    type Error = InvalidVote;

    fn try_from(entries: Vec<Entry>) -> Result<Self, Self::Error> {
        let len = entries.len();
        let [first, second]: [Entry; 2] = entries
            .try_into()
            .map_err(|_| InvalidVote::WrongPairLength { len })?;
        Pair::new(first, second)
    }
}

impl From<Pair> for Vec<Entry> {
    fn from(pair: Pair) -> Self {
        pair.into_entries().into()
    }
}

/// Vote counts for the open matchup.
///
/// INVARIANT: every stored count is at least 1. A candidate nobody voted for
/// has no key at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<Entry, u64>);

impl Tally {
    /// Returns the number of votes cast for `entry` (zero when absent).
    pub fn count(&self, entry: &Entry) -> u64 {
        self.0.get(entry).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Entry, u64)> {
        self.0.iter().map(|(entry, &count)| (entry, count))
    }

    /// Counts saturate at `u64::MAX`.
    fn increment(&mut self, entry: Entry) {
        let count = self.0.entry(entry).or_insert(0);
        *count = count.saturating_add(1);
    }
}

/// How a matchup resolved when the round is advanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nobody has voted yet.
    Undecided,

    /// Both contestants received the same (non-zero) number of votes.
    Tie,

    /// One contestant received strictly more votes.
    Winner(Entry),
}

/// The open matchup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVote")]
pub struct Vote {
    pair: Pair,

    #[serde(skip_serializing_if = "Tally::is_empty")]
    tally: Tally,
}

impl Vote {
    /// Opens a matchup with no votes cast.
    pub fn open(pair: Pair) -> Self {
        Vote {
            pair,
            tally: Tally::default(),
        }
    }

    /// Builds a matchup with pre-existing counts.
    ///
    /// Zero counts are dropped, since absence already means zero.
    pub fn with_counts<I, E>(pair: Pair, counts: I) -> Result<Self, InvalidVote>
    where
        I: IntoIterator<Item = (E, u64)>,
        E: Into<Entry>,
    {
        let mut tally = BTreeMap::new();
        for (entry, count) in counts {
            let entry = entry.into();
            if !pair.contains(&entry) {
                return Err(InvalidVote::UnknownContestant { entry });
            }
            if count > 0 {
                tally.insert(entry, count);
            }
        }
        Ok(Vote {
            pair,
            tally: Tally(tally),
        })
    }

    pub fn pair(&self) -> &Pair {
        &self.pair
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Records one vote for `entry`.
    ///
    /// Returns false (leaving the tally untouched) if `entry` is not one of
    /// the two contestants.
    pub fn record(&mut self, entry: &Entry) -> bool {
        if !self.pair.contains(entry) {
            return false;
        }
        self.tally.increment(entry.clone());
        true
    }

    /// Resolves the matchup from the current counts.
    pub fn outcome(&self) -> Outcome {
        if self.tally.is_empty() {
            return Outcome::Undecided;
        }
        let first = self.tally.count(self.pair.first());
        let second = self.tally.count(self.pair.second());
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Winner(self.pair.first().clone()),
            std::cmp::Ordering::Less => Outcome::Winner(self.pair.second().clone()),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Unvalidated wire form of [`Vote`].
#[derive(Deserialize)]
struct RawVote {
    pair: Pair,

    #[serde(default)]
    tally: BTreeMap<Entry, u64>,
}

impl TryFrom<RawVote> for Vote {
    type Error = InvalidVote;

    fn try_from(raw: RawVote) -> Result<Self, Self::Error> {
        if let Some((entry, _)) = raw.tally.iter().find(|(_, count)| **count == 0) {
            return Err(InvalidVote::ZeroCount {
                entry: entry.clone(),
            });
        }
        Vote::with_counts(raw.pair, raw.tally)
    }
}
