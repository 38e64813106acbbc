//! slidekit Core Runtime
//!
//! Foundational primitives shared by the slidekit components:
//!
//! - **Event Dispatch**: Ordered, synchronous observer notification
//! - **Timers**: A cooperative, host-ticked timer queue with a virtual clock
//! - **State Machines**: A small transition trait for component states
//!
//! Everything here is single-threaded. The host event loop owns time and
//! advances it explicitly, so behavior is deterministic under test.
//!
//! # Example
//!
//! ```rust
//! use slidekit_core::timer::TimerQueue;
//! use std::time::Duration;
//!
//! let mut timers = TimerQueue::new();
//! let id = timers.schedule(Duration::from_millis(500), "advance");
//!
//! timers.advance_to(Duration::from_millis(499));
//! assert!(timers.take_due().is_empty());
//!
//! timers.advance_to(Duration::from_millis(500));
//! let due = timers.take_due();
//! assert_eq!(due.as_slice(), &[(id, "advance")]);
//! ```

pub mod events;
pub mod fsm;
pub mod timer;

pub use events::{EventEmitter, SubscriptionId};
pub use fsm::StateTransitions;
pub use timer::{TimerId, TimerQueue};
