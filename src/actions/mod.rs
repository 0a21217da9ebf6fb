//! Tournament actions: parsing, types and the reducer.
//!
//! This module provides:
//! - [`Action`]: the serialized form of the three round operations
//! - [`parse_action`]: pure parser from operator text (or JSON) to an action
//! - [`reduce`]: applies an action to a state

pub mod parser;
pub mod reducer;
pub mod types;

pub use parser::{ParseActionError, parse_action};
pub use reducer::reduce;
pub use types::Action;
