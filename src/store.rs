//! Holds the current tournament state and applies actions to it.
//!
//! The round operations are pure; something still has to own the latest
//! state and thread it from one call to the next. A [`Store`] does that for a
//! single tournament. It is an ordinary value owned by its caller, so several
//! tournaments can run side by side without sharing anything.

use std::fmt;

use tracing::{debug, info, warn};

use crate::actions::{Action, reduce};
use crate::state::RoundError;
use crate::types::State;

/// Callback invoked with the new state after every successful dispatch.
pub type Subscriber = Box<dyn FnMut(&State) + Send>;

/// Owner of one tournament's current state.
pub struct Store {
    state: State,
    dispatched: u64,
    subscribers: Vec<Subscriber>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("dispatched", &self.dispatched)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Store {
    /// Creates a store holding the empty initial state.
    pub fn new() -> Self {
        Self::with_state(State::new())
    }

    /// Creates a store that starts from an existing state.
    pub fn with_state(state: State) -> Self {
        Store {
            state,
            dispatched: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of actions applied successfully so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Registers a callback to run after every successful dispatch.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&State) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies `action` and, on success, replaces the held state and notifies
    /// subscribers.
    ///
    /// On error the held state is left exactly as it was and no subscriber
    /// runs.
    pub fn dispatch(&mut self, action: &Action) -> Result<&State, RoundError> {
        let new_state = match reduce(&self.state, action) {
            Ok(state) => state,
            Err(e) => {
                warn!(action = action.name(), error = %e, "Rejected action");
                return Err(e);
            }
        };

        self.dispatched += 1;
        debug!(
            action = action.name(),
            from = self.state.name(),
            to = new_state.name(),
            seq = self.dispatched,
            "Applied action"
        );
        if let Some(winner) = new_state.winner()
            && !self.state.is_decided()
        {
            info!(winner = %winner, "Tournament has a winner");
        }

        self.state = new_state;
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Entry, Pair, Vote};
    use std::sync::{Arc, Mutex};

    fn set(entries: &[&str]) -> Action {
        Action::SetEntries {
            entries: entries.iter().copied().map(Entry::from).collect(),
        }
    }

    #[test]
    fn starts_empty() {
        let store = Store::new();
        assert_eq!(store.state(), &State::new());
        assert_eq!(store.dispatched(), 0);
    }

    #[test]
    fn dispatch_replaces_the_state() {
        let mut store = Store::new();
        store.dispatch(&set(&["one", "two"])).unwrap();
        let state = store.dispatch(&Action::Next).unwrap().clone();

        assert_eq!(
            state,
            State::voting(Vec::<Entry>::new(), Vote::open(Pair::new("one", "two").unwrap()))
        );
        assert_eq!(store.state(), &state);
        assert_eq!(store.dispatched(), 2);
    }

    #[test]
    fn rejected_action_keeps_the_state() {
        let mut store = Store::with_state(State::pending(["one"]));
        let err = store.dispatch(&Action::Next).unwrap_err();

        assert_eq!(err, RoundError::NotEnoughEntries { available: 1 });
        assert_eq!(store.state(), &State::pending(["one"]));
        assert_eq!(store.dispatched(), 0);
    }

    #[test]
    fn subscribers_see_every_successful_state() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::new();
        {
            let seen = Arc::clone(&seen);
            store.subscribe(move |state| seen.lock().unwrap().push(state.name()));
        }

        store.dispatch(&set(&["one", "two"])).unwrap();
        store.dispatch(&Action::Next).unwrap();
        store.dispatch(&Action::Next).unwrap();
        store
            .dispatch(&Action::Vote {
                entry: Entry::from("two"),
            })
            .unwrap();
        store.dispatch(&Action::Next).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["pending", "voting", "voting", "voting", "decided"]
        );
        assert_eq!(store.state(), &State::decided("two"));
    }

    #[test]
    fn debug_output_skips_callbacks() {
        let mut store = Store::new();
        store.subscribe(|_| {});
        let debug = format!("{store:?}");
        assert!(debug.contains("subscribers: 1"));
    }
}
