//! Auto-play scheduler
//!
//! Drives timed advancement through the carousel's [`TimerQueue`]. The
//! scheduler owns at most one armed timer; the carousel hands each fired id
//! back through [`AutoPlayScheduler::take_fire`], which ignores ids that were
//! cancelled or replaced in the meantime.
//!
//! ```text
//!            start                pause
//!  Stopped ────────▶ Running ◀──────────▶ Paused
//!     ▲                 │       resume      │
//!     └────── stop ─────┴───────────────────┘
//! ```

use std::time::Duration;

use slidekit_core::fsm::StateTransitions;
use slidekit_core::timer::{TimerId, TimerQueue};

use crate::config::AutoPlayMode;
use crate::navigation::NavTarget;

/// What a carousel timer is for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum TimerTag {
    AutoPlay,
    ResumeDebounce,
}

pub(crate) type CarouselTimers = TimerQueue<TimerTag>;

/// Auto-play FSM events
pub mod autoplay_events {
    pub const START: u32 = 1;
    pub const STOP: u32 = 2;
    pub const PAUSE: u32 = 3;
    pub const RESUME: u32 = 4;
}

/// Auto-play state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AutoPlayState {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl StateTransitions for AutoPlayState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use autoplay_events::*;

        match (self, event) {
            (AutoPlayState::Stopped | AutoPlayState::Paused, START) => Some(AutoPlayState::Running),
            (AutoPlayState::Running, PAUSE) => Some(AutoPlayState::Paused),
            (AutoPlayState::Paused, RESUME) => Some(AutoPlayState::Running),
            (AutoPlayState::Running | AutoPlayState::Paused, STOP) => Some(AutoPlayState::Stopped),
            _ => None,
        }
    }
}

/// Timed advancement state
#[derive(Debug, Clone)]
pub struct AutoPlayScheduler {
    state: AutoPlayState,
    mode: AutoPlayMode,
    interval: Duration,
    timer: Option<TimerId>,
    /// Time left on the interval, captured on pause
    remaining: Duration,
    /// Current ping-pong direction
    forward: bool,
}

impl AutoPlayScheduler {
    pub fn new(mode: AutoPlayMode, interval: Duration) -> Self {
        Self {
            state: AutoPlayState::Stopped,
            mode,
            interval,
            timer: None,
            remaining: Duration::ZERO,
            forward: true,
        }
    }

    pub fn state(&self) -> AutoPlayState {
        self.state
    }

    pub fn mode(&self) -> AutoPlayMode {
        self.mode
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the mode; `Off` does not stop a running scheduler by itself
    pub fn set_mode(&mut self, mode: AutoPlayMode) {
        if mode != self.mode {
            self.forward = true;
        }
        self.mode = mode;
    }

    /// Change the interval
    ///
    /// A running timer restarts with the new interval; a paused one keeps
    /// its remaining time, capped to the new interval.
    pub(crate) fn set_interval(&mut self, interval: Duration, timers: &mut CarouselTimers) {
        if interval == self.interval {
            return;
        }
        self.interval = interval;
        match self.state {
            AutoPlayState::Running => {
                self.reset(timers);
            }
            AutoPlayState::Paused => self.remaining = self.remaining.min(interval),
            AutoPlayState::Stopped => {}
        }
    }

    /// `Stopped|Paused → Running`
    ///
    /// No-op when the mode is `Off` or there is nothing to show.
    pub(crate) fn start(&mut self, timers: &mut CarouselTimers, has_items: bool) -> bool {
        if self.mode == AutoPlayMode::Off || !has_items {
            return false;
        }
        let delay = match self.state {
            AutoPlayState::Running => return false,
            AutoPlayState::Paused => self.remaining,
            AutoPlayState::Stopped => self.interval,
        };
        self.state.apply(autoplay_events::START);
        self.arm(timers, delay);
        tracing::debug!("AutoPlay: started, next step in {:?}", delay);
        true
    }

    /// Any state → `Stopped`
    pub(crate) fn stop(&mut self, timers: &mut CarouselTimers) -> bool {
        self.disarm(timers);
        self.remaining = Duration::ZERO;
        self.forward = true;
        let stopped = self.state.apply(autoplay_events::STOP);
        if stopped {
            tracing::debug!("AutoPlay: stopped");
        }
        stopped
    }

    /// `Running → Paused`, capturing the time left on the interval
    pub(crate) fn pause(&mut self, timers: &mut CarouselTimers) -> bool {
        if self.state != AutoPlayState::Running {
            return false;
        }
        self.remaining = self
            .timer
            .and_then(|id| timers.remaining(id))
            .unwrap_or(self.interval);
        self.disarm(timers);
        self.state.apply(autoplay_events::PAUSE);
        tracing::debug!("AutoPlay: paused with {:?} remaining", self.remaining);
        true
    }

    /// `Paused → Running`, arming the captured remaining time
    pub(crate) fn resume(&mut self, timers: &mut CarouselTimers) -> bool {
        if self.state != AutoPlayState::Paused {
            return false;
        }
        self.state.apply(autoplay_events::RESUME);
        let delay = self.remaining;
        self.arm(timers, delay);
        tracing::debug!("AutoPlay: resumed, next step in {:?}", delay);
        true
    }

    /// Restart the interval from zero
    ///
    /// A paused scheduler forgets its captured remaining time, so the next
    /// resume waits a full interval.
    pub(crate) fn reset(&mut self, timers: &mut CarouselTimers) -> bool {
        match self.state {
            AutoPlayState::Running => {
                let interval = self.interval;
                self.arm(timers, interval);
            }
            AutoPlayState::Paused => self.remaining = self.interval,
            AutoPlayState::Stopped => return false,
        }
        tracing::trace!("AutoPlay: interval reset");
        true
    }

    /// Claim a fired timer
    ///
    /// Returns `true` if `id` is this scheduler's live timer and it is
    /// running; the timer slot is then empty until [`rearm`](Self::rearm).
    pub(crate) fn take_fire(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        self.timer = None;
        self.state == AutoPlayState::Running
    }

    /// Arm a full interval after a fire, unless the fire's handling already
    /// stopped, paused or re-armed the scheduler
    pub(crate) fn rearm(&mut self, timers: &mut CarouselTimers) {
        if self.state == AutoPlayState::Running && self.timer.is_none() {
            let interval = self.interval;
            self.arm(timers, interval);
        }
    }

    /// Navigation intent for one fire
    ///
    /// `position` is the index the step starts from. Ping-pong reverses at
    /// either end of a non-wrapping carousel.
    pub fn next_target(&mut self, position: usize, count: usize, infinite: bool) -> NavTarget {
        match self.mode {
            AutoPlayMode::Backward => NavTarget::Previous,
            AutoPlayMode::PingPong => {
                if !infinite {
                    if self.forward && position + 1 >= count {
                        self.forward = false;
                    } else if !self.forward && position == 0 {
                        self.forward = true;
                    }
                }
                if self.forward {
                    NavTarget::Next
                } else {
                    NavTarget::Previous
                }
            }
            AutoPlayMode::Forward | AutoPlayMode::Off => NavTarget::Next,
        }
    }

    /// Fraction of the current interval already elapsed
    pub(crate) fn playback_progress(&self, timers: &CarouselTimers) -> f32 {
        if self.interval.is_zero() {
            return 0.0;
        }
        let remaining = match self.state {
            AutoPlayState::Stopped => return 0.0,
            AutoPlayState::Paused => self.remaining,
            AutoPlayState::Running => match self.timer.and_then(|id| timers.remaining(id)) {
                Some(remaining) => remaining,
                None => return 0.0,
            },
        };
        (1.0 - remaining.as_secs_f32() / self.interval.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn arm(&mut self, timers: &mut CarouselTimers, delay: Duration) {
        self.disarm(timers);
        self.timer = Some(timers.schedule(delay, TimerTag::AutoPlay));
    }

    fn disarm(&mut self, timers: &mut CarouselTimers) {
        if let Some(id) = self.timer.take() {
            timers.cancel(id);
        }
    }
}

impl Default for AutoPlayScheduler {
    fn default() -> Self {
        Self::new(AutoPlayMode::Off, Duration::from_millis(3000))
    }
}
