//! slidekit Platform Abstraction Layer
//!
//! Platform-agnostic input types consumed by slidekit components. A host
//! translates its native pointer, keyboard, wheel and window notifications
//! into [`InputEvent`]s; components never see toolkit-specific types.
//!
//! # Example
//!
//! ```rust
//! use slidekit_platform::*;
//! use std::time::Duration;
//!
//! let press = InputEvent::Pointer(PointerEvent::down(
//!     PointerId::PRIMARY,
//!     Point::new(120.0, 40.0),
//!     Duration::from_millis(16),
//! ));
//! assert!(press.is_user_input());
//! assert!(!InputEvent::FocusIn.is_user_input());
//! ```

pub mod input;

// Re-export all public types
pub use input::{InputEvent, Key, Point, PointerEvent, PointerId, PointerPhase};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::input::{InputEvent, Key, Point, PointerEvent, PointerId, PointerPhase};
}
