//! Shared test utilities and arbitrary generators for property-based testing.

use std::ops::Range;

use crate::types::{Entry, Pair, State, Vote};
use proptest::prelude::*;

/// Entry names drawn from a small alphabet so that collisions (duplicate
/// queue slots, repeated votes) actually occur.
pub fn arb_entry() -> impl Strategy<Value = Entry> {
    "[a-f]{1,2}".prop_map(Entry::from)
}

pub fn arb_entries(len: Range<usize>) -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(arb_entry(), len)
}

pub fn arb_distinct_pair() -> impl Strategy<Value = Pair> {
    (arb_entry(), arb_entry())
        .prop_filter_map("contestants must differ", |(a, b)| Pair::new(a, b).ok())
}

pub fn arb_vote() -> impl Strategy<Value = Vote> {
    (arb_distinct_pair(), 0u64..5, 0u64..5).prop_map(|(pair, a, b)| {
        let counts = [(pair.first().clone(), a), (pair.second().clone(), b)];
        Vote::with_counts(pair, counts).unwrap()
    })
}

pub fn arb_state() -> impl Strategy<Value = State> {
    prop_oneof![
        arb_entries(0..6).prop_map(|entries| State::pending(entries)),
        (arb_entries(0..6), arb_vote()).prop_map(|(entries, vote)| State::voting(entries, vote)),
        arb_entry().prop_map(|winner| State::decided(winner)),
    ]
}
