//! Minimal finite state machines
//!
//! Component states are plain `Copy` enums. Transitions are declared with
//! [`StateTransitions::on_event`], matching `(state, event)` pairs and
//! returning the next state, or `None` when the event is ignored in that
//! state. Events are `u32` constants grouped in a per-component module.
//!
//! # Example
//!
//! ```rust
//! use slidekit_core::fsm::StateTransitions;
//!
//! mod door_events {
//!     pub const OPEN: u32 = 1;
//!     pub const CLOSE: u32 = 2;
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
//! enum Door {
//!     #[default]
//!     Closed,
//!     Open,
//! }
//!
//! impl StateTransitions for Door {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Door::Closed, door_events::OPEN) => Some(Door::Open),
//!             (Door::Open, door_events::CLOSE) => Some(Door::Closed),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut door = Door::Closed;
//! assert!(door.apply(door_events::OPEN));
//! assert!(!door.apply(door_events::OPEN));
//! assert_eq!(door, Door::Open);
//! ```

use std::hash::Hash;

/// State type driven by `u32` events
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + std::fmt::Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;

    /// Apply an event in place
    ///
    /// Returns `true` if the state changed.
    fn apply(&mut self, event: u32) -> bool {
        match self.on_event(event) {
            Some(next) if next != *self => {
                tracing::trace!("fsm: {:?} --{}--> {:?}", self, event, next);
                *self = next;
                true
            }
            _ => false,
        }
    }
}
