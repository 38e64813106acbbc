//! Carousel configuration
//!
//! [`CarouselConfig`] is replaced as a whole through
//! [`Carousel::configure`](crate::Carousel::configure), which validates it
//! first and keeps the previous configuration on rejection.
//!
//! # Example
//!
//! ```rust
//! use slidekit_carousel::{AutoPlayMode, CarouselConfig, GestureSensitivity, Orientation};
//! use std::time::Duration;
//!
//! let config = CarouselConfig::default()
//!     .orientation(Orientation::Vertical)
//!     .auto_play(AutoPlayMode::PingPong, Duration::from_secs(5))
//!     .sensitivity(GestureSensitivity::High)
//!     .infinite(false);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use slidekit_animation::Easing;

use crate::error::{ConfigError, Result};

/// How the outgoing and incoming slides are animated
///
/// Only consumed by the renderer; the engine treats every style alike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionStyle {
    #[default]
    Slide,
    Fade,
    Scale,
    Stack,
    Parallax,
}

/// Which navigation affordances the renderer draws
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStyle {
    None,
    /// Previous/next arrow buttons
    Arrows,
    /// Indicator dots
    Dots,
    /// Numeric indicators
    Numbers,
    Thumbnails,
    /// Arrows plus dots
    #[default]
    Combined,
}

/// Navigation axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Automatic advancement direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoPlayMode {
    #[default]
    Off,
    Forward,
    Backward,
    /// Forward, reversing at either end of a non-wrapping carousel
    PingPong,
}

/// Drag feedback past the first or last slide of a non-wrapping carousel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeBehavior {
    /// Follow the pointer unchanged
    None,
    /// Scale the overscroll by `edge_resistance`
    #[default]
    Resist,
    /// Pin the offset at zero
    Stop,
}

/// Swipe threshold presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureSensitivity {
    /// Requires more movement to trigger
    Low,
    #[default]
    Medium,
    /// Triggers with minimal movement
    High,
    /// Explicit (distance fraction, pixels per second)
    Custom {
        swipe_threshold: f32,
        velocity_threshold: f32,
    },
}

impl GestureSensitivity {
    /// `(swipe_threshold, velocity_threshold)` for this preset
    pub fn thresholds(&self) -> (f32, f32) {
        match *self {
            GestureSensitivity::Low => (0.4, 800.0),
            GestureSensitivity::Medium => (0.3, 500.0),
            GestureSensitivity::High => (0.15, 250.0),
            GestureSensitivity::Custom {
                swipe_threshold,
                velocity_threshold,
            } => (swipe_threshold, velocity_threshold),
        }
    }
}

/// Complete carousel behavior configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub transition: TransitionStyle,
    pub navigation_style: NavigationStyle,
    pub orientation: Orientation,
    /// Length of one animated step
    #[serde(with = "duration_ms")]
    pub transition_duration: Duration,
    pub transition_easing: Easing,
    pub auto_play: AutoPlayMode,
    /// Time between automatic steps
    #[serde(with = "duration_ms")]
    pub auto_play_interval: Duration,
    pub pause_on_hover: bool,
    pub pause_on_focus: bool,
    /// Debounce before auto-play resumes once hover/focus/drag ends
    #[serde(with = "duration_ms")]
    pub resume_delay: Duration,
    /// Wrap from the last slide to the first and back
    pub infinite: bool,
    /// Minimum drag as a fraction of the track length
    pub swipe_threshold: f32,
    /// Minimum drag speed in pixels per second
    pub velocity_threshold: f32,
    pub enable_touch: bool,
    pub enable_keyboard: bool,
    pub enable_wheel: bool,
    pub edge_behavior: EdgeBehavior,
    /// Overscroll multiplier for [`EdgeBehavior::Resist`]
    pub edge_resistance: f32,
    /// Raise an accessibility announcement whenever the slide changes
    pub announce_changes: bool,
    /// Accessible name of the carousel
    pub aria_label: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let (swipe_threshold, velocity_threshold) = GestureSensitivity::Medium.thresholds();
        Self {
            transition: TransitionStyle::Slide,
            navigation_style: NavigationStyle::Combined,
            orientation: Orientation::Horizontal,
            transition_duration: Duration::from_millis(300),
            transition_easing: Easing::EaseOutCubic,
            auto_play: AutoPlayMode::Off,
            auto_play_interval: Duration::from_millis(3000),
            pause_on_hover: true,
            pause_on_focus: true,
            resume_delay: Duration::from_millis(500),
            infinite: true,
            swipe_threshold,
            velocity_threshold,
            enable_touch: true,
            enable_keyboard: true,
            enable_wheel: false,
            edge_behavior: EdgeBehavior::Resist,
            edge_resistance: 0.5,
            announce_changes: true,
            aria_label: "Carousel".to_string(),
        }
    }
}

impl CarouselConfig {
    /// Auto-playing forward carousel
    pub fn autoplay(interval: Duration) -> Self {
        Self::default().auto_play(AutoPlayMode::Forward, interval)
    }

    /// Touch-first carousel with sensitive swipes and wheel stepping
    pub fn touch() -> Self {
        Self {
            enable_wheel: true,
            ..Self::default()
        }
        .sensitivity(GestureSensitivity::High)
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn transition(mut self, style: TransitionStyle, duration: Duration, easing: Easing) -> Self {
        self.transition = style;
        self.transition_duration = duration;
        self.transition_easing = easing;
        self
    }

    pub fn navigation_style(mut self, style: NavigationStyle) -> Self {
        self.navigation_style = style;
        self
    }

    pub fn auto_play(mut self, mode: AutoPlayMode, interval: Duration) -> Self {
        self.auto_play = mode;
        self.auto_play_interval = interval;
        self
    }

    pub fn infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Set both swipe thresholds from a preset
    pub fn sensitivity(mut self, sensitivity: GestureSensitivity) -> Self {
        let (distance, velocity) = sensitivity.thresholds();
        self.swipe_threshold = distance;
        self.velocity_threshold = velocity;
        self
    }

    pub fn pause_on(mut self, hover: bool, focus: bool) -> Self {
        self.pause_on_hover = hover;
        self.pause_on_focus = focus;
        self
    }

    pub fn resume_delay(mut self, delay: Duration) -> Self {
        self.resume_delay = delay;
        self
    }

    pub fn edge(mut self, behavior: EdgeBehavior, resistance: f32) -> Self {
        self.edge_behavior = behavior;
        self.edge_resistance = resistance;
        self
    }

    /// Check every invariant `configure` relies on
    pub fn validate(&self) -> Result<()> {
        if self.auto_play_interval.is_zero() {
            return Err(ConfigError::NonPositiveInterval);
        }
        check_threshold("swipe_threshold", self.swipe_threshold)?;
        check_threshold("velocity_threshold", self.velocity_threshold)?;
        if !(0.0..=1.0).contains(&self.edge_resistance) {
            return Err(ConfigError::InvalidEdgeResistance(self.edge_resistance));
        }
        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

/// Serialize durations as whole milliseconds
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
