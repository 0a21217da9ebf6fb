//! Core domain types for the voting tournament.
//!
//! This module contains the value types threaded through the round
//! operations, designed to encode the tournament's invariants via the type
//! system.

pub mod ids;
pub mod state;
pub mod vote;

// Re-export commonly used types at the module level
pub use ids::Entry;
pub use state::{InvalidState, State};
pub use vote::{InvalidVote, Outcome, Pair, Tally, Vote};
