//! Vote Runoff - the state core of a single-elimination pairwise voting tournament.
//!
//! This library provides the tournament's value types, the three pure round
//! operations, and the thin dispatching shell (actions, store, driver) that a
//! front end uses to run a tournament.

pub mod actions;
pub mod config;
pub mod driver;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
