//! slidekit Carousel
//!
//! The behavior engine of a single-slide carousel: which slide is active,
//! how the change animates, when it advances by itself, and which drags,
//! keys and wheel notches count as navigation. Painting is left to the host.
//!
//! # Features
//!
//! - **Item registry** with index repair on insert/remove
//! - **Navigation** with wrap-around or clamped bounds
//! - **Transitions** driven by the host's frame clock, with snap-on-preempt
//! - **Auto-play** (forward, backward, ping-pong) with pause/resume
//! - **Swipe recognition** with distance and velocity thresholds
//! - **Hover/focus/drag holds** with a debounced resume
//!
//! # Example
//!
//! ```rust
//! use slidekit_carousel::prelude::*;
//! use std::time::Duration;
//!
//! let config = CarouselConfig::autoplay(Duration::from_millis(500));
//! let mut carousel: Carousel<&str> = Carousel::with_config(config).unwrap();
//! carousel.add_item(Slide::new("harbor").title("Harbor"));
//! carousel.add_item(Slide::new("dunes").title("Dunes"));
//!
//! carousel.start_auto_play();
//! carousel.tick(Duration::from_millis(500));
//! assert!(carousel.is_transitioning());
//!
//! carousel.tick(Duration::from_millis(300));
//! assert_eq!(carousel.current_index(), Some(1));
//! ```

pub mod accessibility;
pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod gesture;
pub mod navigation;
pub mod registry;

#[cfg(test)]
mod tests;

pub use autoplay::{AutoPlayScheduler, AutoPlayState};
pub use carousel::Carousel;
pub use config::{
    AutoPlayMode, CarouselConfig, EdgeBehavior, GestureSensitivity, NavigationStyle, Orientation,
    TransitionStyle,
};
pub use coordinator::{Hold, InteractionCoordinator};
pub use error::{ConfigError, Result};
pub use events::{CarouselEvent, SwipeDirection};
pub use gesture::{GestureRecognizer, InputAction, Swipe};
pub use navigation::{normalize_index, NavTarget, NavigationState};
pub use registry::{ItemRegistry, Slide};

pub use slidekit_animation::{Easing, TransitionSnapshot};
pub use slidekit_platform::input::{InputEvent, Key, Point, PointerEvent, PointerId, PointerPhase};

/// Common imports for hosts
pub mod prelude {
    pub use crate::carousel::Carousel;
    pub use crate::config::{AutoPlayMode, CarouselConfig, Orientation};
    pub use crate::events::CarouselEvent;
    pub use crate::registry::Slide;
    pub use slidekit_platform::input::{InputEvent, Key, Point, PointerEvent, PointerId};
}
