//! Index transition engine
//!
//! Animates a change from one slot index to another over a fixed duration.
//! The engine knows nothing about what the indices name; its owner commits
//! the target when the engine reports completion (or a snap).
//!
//! ```text
//!          start                 advance (elapsed >= duration)
//!   Idle ─────────▶ Animating ─────────────────────────────────▶ Idle
//!                    │   ▲                                      ▲
//!                    │   │ start (pre-empt: snap, then restart) │
//!                    │   └──────────┘                           │
//!                    └──────────── stop (snap) / cancel ────────┘
//! ```
//!
//! Progress is pushed through [`Transition::advance`] and never decreases
//! within one transition.

use std::time::Duration;

use slidekit_core::fsm::StateTransitions;

use crate::easing::Easing;

/// Transition FSM events
pub mod transition_events {
    /// A transition begins
    pub const START: u32 = 1;
    /// Elapsed time reached the duration
    pub const COMPLETE: u32 = 2;
    /// Snapped to the target by request
    pub const STOP: u32 = 3;
    /// Abandoned without reaching the target
    pub const CANCEL: u32 = 4;
}

/// Transition engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Animating,
}

impl StateTransitions for TransitionPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        use transition_events::*;

        match (self, event) {
            (TransitionPhase::Idle, START) => Some(TransitionPhase::Animating),
            (TransitionPhase::Animating, COMPLETE | STOP | CANCEL) => Some(TransitionPhase::Idle),
            _ => None,
        }
    }
}

/// Result of one [`Transition::advance`] call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStep {
    /// Eased progress after this step
    pub progress: f32,
    /// Target index, present on the step that completes the transition
    pub finished: Option<usize>,
}

/// Read-only view of the transition state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSnapshot {
    pub in_progress: bool,
    pub from: usize,
    pub to: usize,
    pub progress: f32,
}

/// Fixed-duration `from → to` animation
#[derive(Debug, Clone)]
pub struct Transition {
    phase: TransitionPhase,
    from: usize,
    to: usize,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
    /// Duration and curve captured by `start` for the running transition
    span: Duration,
    curve: Easing,
    progress: f32,
}

impl Transition {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            from: 0,
            to: 0,
            elapsed: Duration::ZERO,
            duration,
            easing,
            span: duration,
            curve: easing,
            progress: 0.0,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the duration used by the next transition
    ///
    /// A running transition keeps the duration it started with.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Change the curve used by the next transition
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == TransitionPhase::Animating
    }

    /// Target index while animating
    pub fn target(&self) -> Option<usize> {
        self.is_animating().then_some(self.to)
    }

    /// Source index while animating
    pub fn source(&self) -> Option<usize> {
        self.is_animating().then_some(self.from)
    }

    /// Eased progress, `0.0` while idle
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time left before completion, zero while idle
    pub fn remaining(&self) -> Duration {
        if self.is_animating() {
            self.span.saturating_sub(self.elapsed)
        } else {
            Duration::ZERO
        }
    }

    /// Snapshot with `current` standing in for both ends while idle
    pub fn snapshot(&self, current: usize) -> TransitionSnapshot {
        if self.is_animating() {
            TransitionSnapshot {
                in_progress: true,
                from: self.from,
                to: self.to,
                progress: self.progress,
            }
        } else {
            TransitionSnapshot {
                in_progress: false,
                from: current,
                to: current,
                progress: 0.0,
            }
        }
    }

    /// Begin animating `from → to`
    ///
    /// If a transition is already running it is pre-empted: its target is
    /// returned so the owner can commit it before the new one begins.
    pub fn start(&mut self, from: usize, to: usize) -> Option<usize> {
        let snapped = self.stop();

        self.phase.apply(transition_events::START);
        self.from = from;
        self.to = to;
        self.elapsed = Duration::ZERO;
        self.progress = 0.0;
        self.span = self.duration;
        self.curve = self.easing;

        tracing::debug!(
            "Transition: start {} -> {} over {:?}",
            from,
            to,
            self.duration
        );
        snapped
    }

    /// Advance by `dt`
    ///
    /// Returns `None` while idle. The step that reaches the duration reports
    /// progress `1.0` and the finished target; the engine is idle afterwards.
    pub fn advance(&mut self, dt: Duration) -> Option<TransitionStep> {
        if !self.is_animating() {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.span {
            let to = self.to;
            self.finish(transition_events::COMPLETE);
            tracing::debug!("Transition: finished at {}", to);
            return Some(TransitionStep {
                progress: 1.0,
                finished: Some(to),
            });
        }

        let t = self.elapsed.as_secs_f32() / self.span.as_secs_f32();
        // Overshooting curves must not move progress backwards
        let eased = self.curve.apply(t).clamp(0.0, 1.0);
        self.progress = self.progress.max(eased);
        tracing::trace!("Transition: progress {:.3}", self.progress);

        Some(TransitionStep {
            progress: self.progress,
            finished: None,
        })
    }

    /// Jump to the end, discarding partial progress
    ///
    /// Returns the target to commit, or `None` if idle.
    pub fn stop(&mut self) -> Option<usize> {
        if !self.is_animating() {
            return None;
        }
        let to = self.to;
        self.finish(transition_events::STOP);
        tracing::debug!("Transition: snapped to {}", to);
        Some(to)
    }

    /// Abandon the transition without reaching the target
    ///
    /// Returns the source index, or `None` if idle.
    pub fn cancel(&mut self) -> Option<usize> {
        if !self.is_animating() {
            return None;
        }
        let from = self.from;
        self.finish(transition_events::CANCEL);
        tracing::debug!("Transition: cancelled, staying at {}", from);
        Some(from)
    }

    fn finish(&mut self, event: u32) {
        self.phase.apply(event);
        self.from = self.to;
        self.elapsed = Duration::ZERO;
        self.progress = 0.0;
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Easing::default())
    }
}
