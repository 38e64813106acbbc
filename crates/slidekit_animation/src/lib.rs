//! slidekit Animation System
//!
//! Timing curves and the index transition engine used by the slidekit
//! components.
//!
//! # Features
//!
//! - **Easing**: Standard polynomial curves and CSS-style cubic beziers
//! - **Transitions**: Fixed-duration `from → to` index animations with
//!   monotonic progress, pre-emption and snap-to-target stop
//!
//! Nothing here owns a thread or reads the wall clock. The host advances
//! transitions with explicit time deltas.

pub mod easing;
pub mod transition;

pub use easing::Easing;
pub use transition::{Transition, TransitionPhase, TransitionSnapshot, TransitionStep};
