//! Input event types for pointer, keyboard, wheel and host lifecycle

use std::time::Duration;

/// Host events a component consumes
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer (mouse button or touch point) event
    Pointer(PointerEvent),
    /// Key pressed
    Key(Key),
    /// Scroll/wheel event
    Wheel {
        /// Horizontal delta, in eighths of a degree (one notch = 120)
        delta_x: f32,
        /// Vertical delta, in eighths of a degree (one notch = 120)
        delta_y: f32,
    },
    /// Keyboard focus entered the component
    FocusIn,
    /// Keyboard focus left the component
    FocusOut,
    /// Pointer entered the component bounds
    HoverEnter,
    /// Pointer left the component bounds
    HoverLeave,
    /// Component enabled or disabled
    EnabledChanged(bool),
    /// Component shown or hidden
    VisibilityChanged(bool),
    /// Component viewport resized
    Resized {
        /// Viewport width in logical pixels
        width: f32,
        /// Viewport height in logical pixels
        height: f32,
    },
}

impl InputEvent {
    /// Whether this event comes from the user's hands rather than the host
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            InputEvent::Pointer(_) | InputEvent::Key(_) | InputEvent::Wheel { .. }
        )
    }
}

// ============================================================================
// Pointer Events
// ============================================================================

/// Position in component coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Identifies one pointer across a down/move/up sequence
///
/// Mice report a single id; touch screens report one id per finger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Mouse, pen, or the first touch point
    pub const PRIMARY: PointerId = PointerId(0);
}

/// Pointer lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed / finger touched
    Down,
    /// Pointer moved while pressed
    Move,
    /// Button released / finger lifted
    Up,
    /// Sequence aborted by the system
    Cancel,
}

/// One pointer sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    pub position: Point,
    /// Host monotonic timestamp; only differences are meaningful
    pub timestamp: Duration,
}

impl PointerEvent {
    pub fn new(id: PointerId, phase: PointerPhase, position: Point, timestamp: Duration) -> Self {
        Self {
            id,
            phase,
            position,
            timestamp,
        }
    }

    pub fn down(id: PointerId, position: Point, timestamp: Duration) -> Self {
        Self::new(id, PointerPhase::Down, position, timestamp)
    }

    pub fn moved(id: PointerId, position: Point, timestamp: Duration) -> Self {
        Self::new(id, PointerPhase::Move, position, timestamp)
    }

    pub fn up(id: PointerId, position: Point, timestamp: Duration) -> Self {
        Self::new(id, PointerPhase::Up, position, timestamp)
    }

    pub fn cancel(id: PointerId, timestamp: Duration) -> Self {
        Self::new(id, PointerPhase::Cancel, Point::default(), timestamp)
    }
}

// ============================================================================
// Keyboard Events
// ============================================================================

/// Key codes relevant to component navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
    Enter,
    Escape,
    Tab,
    // Character input
    Char(char),
    // Unknown key
    Unknown,
}
