//! Pure state logic for the voting tournament.
//!
//! This module contains the functional core: three pure functions that each
//! take the current [`State`](crate::types::State) by reference and return a
//! brand-new one. Nothing here holds state between calls; the caller owns the
//! current value and threads it through.

pub mod ballot;
pub mod entries;
pub mod error;
pub mod round;

// Re-export commonly used types and functions
pub use ballot::vote;
pub use entries::set_entries;
pub use error::RoundError;
pub use round::next;
