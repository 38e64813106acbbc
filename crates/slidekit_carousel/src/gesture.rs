//! Gesture and discrete input recognition
//!
//! Turns raw pointer, key and wheel input into navigation intents. Only the
//! first pointer of a sequence is tracked; others are ignored until it lifts.
//!
//! Direction convention along the navigation axis: positive displacement
//! (rightward, or downward for vertical carousels) means *next*.

use std::time::Duration;

use slidekit_platform::input::{Key, Point, PointerEvent, PointerId};

use crate::config::{EdgeBehavior, Orientation};
use crate::events::SwipeDirection;
use crate::navigation::NavTarget;

/// Wheel delta of one detent
pub const WHEEL_NOTCH: f32 = 120.0;

/// Shortest elapsed time used for velocity
const MIN_SWIPE_TIME: Duration = Duration::from_millis(1);

/// Intent produced by a discrete input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Navigate(NavTarget),
    ToggleAutoPlay,
}

/// An accepted swipe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    pub direction: SwipeDirection,
    /// Pixels per second
    pub velocity: f32,
}

impl Swipe {
    pub fn target(&self) -> NavTarget {
        match self.direction {
            SwipeDirection::Right | SwipeDirection::Down => NavTarget::Next,
            SwipeDirection::Left | SwipeDirection::Up => NavTarget::Previous,
        }
    }
}

/// A completed drag, ready to classify
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    /// Signed displacement along the navigation axis
    pub displacement: f32,
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug)]
struct GestureState {
    pointer: PointerId,
    start: Point,
    current: Point,
    start_time: Duration,
}

/// Tracks one drag sequence plus the wheel accumulator
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    active: Option<GestureState>,
    wheel: f32,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Begin tracking; returns `false` if another pointer is already tracked
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.active.is_some() {
            tracing::trace!("Gesture: ignoring extra pointer {:?}", event.id);
            return false;
        }
        self.active = Some(GestureState {
            pointer: event.id,
            start: event.position,
            current: event.position,
            start_time: event.timestamp,
        });
        true
    }

    /// Update the tracked pointer, returning the displacement so far
    pub fn pointer_move(&mut self, event: &PointerEvent, orientation: Orientation) -> Option<f32> {
        let state = self.active.as_mut().filter(|s| s.pointer == event.id)?;
        state.current = event.position;
        Some(axis_component(state.current - state.start, orientation))
    }

    /// Finish the sequence for the tracked pointer
    pub fn pointer_up(&mut self, event: &PointerEvent, orientation: Orientation) -> Option<DragRelease> {
        if self.active.map(|s| s.pointer) != Some(event.id) {
            return None;
        }
        let state = self.active.take()?;
        Some(DragRelease {
            displacement: axis_component(event.position - state.start, orientation),
            elapsed: event.timestamp.saturating_sub(state.start_time),
        })
    }

    /// Abandon the sequence; returns `false` if nothing was tracked
    ///
    /// `pointer` limits the cancel to that pointer's sequence.
    pub fn cancel(&mut self, pointer: Option<PointerId>) -> bool {
        match (self.active, pointer) {
            (Some(state), Some(id)) if state.pointer != id => false,
            (Some(_), _) => {
                self.active = None;
                true
            }
            (None, _) => false,
        }
    }

    /// Accumulate a wheel delta, returning whole notches crossed
    ///
    /// Positive notches mean *previous*. Reversing direction drops any
    /// partial notch.
    pub fn wheel(&mut self, delta: f32) -> i32 {
        if !delta.is_finite() || delta == 0.0 {
            return 0;
        }
        if self.wheel != 0.0 && self.wheel.signum() != delta.signum() {
            self.wheel = 0.0;
        }
        self.wheel += delta;
        let notches = (self.wheel / WHEEL_NOTCH).trunc();
        self.wheel -= notches * WHEEL_NOTCH;
        notches as i32
    }

    pub fn reset_wheel(&mut self) {
        self.wheel = 0.0;
    }
}

/// Component of `delta` along the navigation axis
pub fn axis_component(delta: Point, orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Horizontal => delta.x,
        Orientation::Vertical => delta.y,
    }
}

/// Classify a completed drag
///
/// Accepted when the displacement is non-zero, covers at least
/// `swipe_threshold × track_length` and moves at least `velocity_threshold`
/// pixels per second. Both bounds are inclusive.
pub fn classify_swipe(
    release: DragRelease,
    orientation: Orientation,
    track_length: f32,
    swipe_threshold: f32,
    velocity_threshold: f32,
) -> Option<Swipe> {
    let distance = release.displacement.abs();
    if distance == 0.0 || !distance.is_finite() {
        return None;
    }

    let min_distance = swipe_threshold * track_length.max(0.0);
    let micros = release.elapsed.max(MIN_SWIPE_TIME).as_micros() as f32;
    let velocity = distance * 1_000_000.0 / micros;

    if distance < min_distance || velocity < velocity_threshold {
        tracing::trace!(
            "Gesture: rejected drag of {:.1}px at {:.0}px/s (need {:.1}px, {:.0}px/s)",
            distance,
            velocity,
            min_distance,
            velocity_threshold
        );
        return None;
    }

    let positive = release.displacement > 0.0;
    let direction = match (orientation, positive) {
        (Orientation::Horizontal, true) => SwipeDirection::Right,
        (Orientation::Horizontal, false) => SwipeDirection::Left,
        (Orientation::Vertical, true) => SwipeDirection::Down,
        (Orientation::Vertical, false) => SwipeDirection::Up,
    };
    Some(Swipe { direction, velocity })
}

/// Edge a drag offset is pulling past, `Some(true)` for the first slide
pub fn overscroll(offset: f32, at_first: bool, at_last: bool) -> Option<bool> {
    if offset < 0.0 && at_first {
        Some(true)
    } else if offset > 0.0 && at_last {
        Some(false)
    } else {
        None
    }
}

/// Apply edge behavior to a live drag offset
///
/// `at_first`/`at_last` describe the active slide of a non-wrapping
/// carousel. Dragging toward *previous* at the first slide, or toward *next*
/// at the last, is overscroll.
pub fn edge_offset(offset: f32, at_first: bool, at_last: bool, behavior: EdgeBehavior, resistance: f32) -> f32 {
    if overscroll(offset, at_first, at_last).is_none() {
        return offset;
    }
    match behavior {
        EdgeBehavior::None => offset,
        EdgeBehavior::Resist => offset * resistance,
        EdgeBehavior::Stop => 0.0,
    }
}

/// Map a key press to an intent
///
/// Arrow keys only act along the navigation axis.
pub fn classify_key(key: Key, orientation: Orientation) -> Option<InputAction> {
    let target = match (key, orientation) {
        (Key::Left, Orientation::Horizontal) | (Key::Up, Orientation::Vertical) => NavTarget::Previous,
        (Key::Right, Orientation::Horizontal) | (Key::Down, Orientation::Vertical) => NavTarget::Next,
        (Key::Home, _) => NavTarget::First,
        (Key::End, _) => NavTarget::Last,
        (Key::Space, _) => return Some(InputAction::ToggleAutoPlay),
        _ => return None,
    };
    Some(InputAction::Navigate(target))
}
