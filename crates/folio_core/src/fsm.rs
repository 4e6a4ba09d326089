//! State machine trait
//!
//! Every interaction component keeps its state as an enum and moves it only
//! through [`StateTransitions::on_event`]. Events with no edge from the
//! current state return `None` and leave the state untouched.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{transition, StateTransitions};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Door { Shut, Ajar }
//!
//! #[derive(Clone, Copy, Debug)]
//! enum Push { Open, Close }
//!
//! impl StateTransitions for Door {
//!     type Event = Push;
//!     fn on_event(&self, event: Push) -> Option<Self> {
//!         match (self, event) {
//!             (Door::Shut, Push::Open) => Some(Door::Ajar),
//!             (Door::Ajar, Push::Close) => Some(Door::Shut),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut door = Door::Shut;
//! assert!(transition(&mut door, Push::Open));
//! assert!(!transition(&mut door, Push::Open));
//! assert_eq!(door, Door::Ajar);
//! ```

use std::fmt::Debug;

/// A finite state with an explicit transition table
pub trait StateTransitions: Clone + PartialEq + Debug {
    /// Input that may move the machine
    type Event: Debug;

    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: Self::Event) -> Option<Self>;
}

/// Apply `event` to `state` in place; returns whether a transition happened
pub fn transition<S: StateTransitions>(state: &mut S, event: S::Event) -> bool {
    tracing::trace!(state = ?state, ?event, "state event");
    match state.on_event(event) {
        Some(next) => {
            tracing::trace!(to = ?next, "state transition");
            *state = next;
            true
        }
        None => false,
    }
}
