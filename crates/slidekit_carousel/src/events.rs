//! Carousel notifications

use crate::error::ConfigError;

/// Direction of a recognized swipe, in screen terms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Event delivered to carousel subscribers
///
/// Events raised while handling one host call are delivered together, in the
/// order they were raised, once the call has finished mutating state.
#[derive(Clone, Debug, PartialEq)]
pub enum CarouselEvent {
    /// Number of slides changed
    ItemCountChanged(usize),
    /// Active slide changed
    CurrentIndexChanged {
        index: Option<usize>,
        previous: Option<usize>,
    },
    TransitionStarted {
        from: usize,
        to: usize,
    },
    /// Eased progress of the running transition
    TransitionProgress(f32),
    /// Transition reached (or snapped to) its target
    TransitionFinished {
        index: usize,
    },
    /// Transition abandoned without committing its target
    TransitionCancelled,
    AutoPlayStarted,
    AutoPlayStopped,
    AutoPlayPaused,
    AutoPlayResumed,
    /// A drag was accepted as a swipe
    SwipeDetected {
        direction: SwipeDirection,
        /// Pixels per second along the navigation axis
        velocity: f32,
    },
    /// Live drag offset along the navigation axis, after edge behavior
    DragMoved {
        offset: f32,
    },
    /// A drag started pulling past the first or last slide of a bounded
    /// carousel; raised once per excursion
    EdgeReached {
        at_start: bool,
        at_end: bool,
    },
    ConfigurationChanged,
    ConfigurationRejected(ConfigError),
    /// Text for assistive technology
    Announcement(String),
}
