//! Interaction coordinator
//!
//! Decides whether auto-play may run. Hover, focus and an active drag are
//! *holds*: while any enabled hold is active a running scheduler is paused.
//! When the last hold clears, resumption waits for `resume_delay`; a new hold
//! during that window cancels the pending resume.
//!
//! An explicit pause is a hold too, but only an explicit resume (or a start
//! or stop) releases it, and that release resumes immediately.

use slidekit_core::timer::TimerId;

use crate::autoplay::{AutoPlayScheduler, AutoPlayState, CarouselTimers, TimerTag};
use crate::config::CarouselConfig;
use crate::events::CarouselEvent;

/// A reason to keep auto-play paused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hold {
    Hover,
    Focus,
    Gesture,
    Explicit,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionCoordinator {
    hover: bool,
    focus: bool,
    gesture: bool,
    explicit: bool,
    /// Result of the last evaluation
    held: bool,
    pending_resume: Option<TimerId>,
}

impl InteractionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any hold enabled by `config` is active
    pub fn is_held(&self, config: &CarouselConfig) -> bool {
        (self.hover && config.pause_on_hover)
            || (self.focus && config.pause_on_focus)
            || self.gesture
            || self.explicit
    }

    pub fn is_active(&self, hold: Hold) -> bool {
        match hold {
            Hold::Hover => self.hover,
            Hold::Focus => self.focus,
            Hold::Gesture => self.gesture,
            Hold::Explicit => self.explicit,
        }
    }

    pub fn has_pending_resume(&self) -> bool {
        self.pending_resume.is_some()
    }

    /// Raise or release a hold
    pub(crate) fn set_hold(
        &mut self,
        hold: Hold,
        active: bool,
        config: &CarouselConfig,
        scheduler: &mut AutoPlayScheduler,
        timers: &mut CarouselTimers,
    ) -> Option<CarouselEvent> {
        let flag = match hold {
            Hold::Hover => &mut self.hover,
            Hold::Focus => &mut self.focus,
            Hold::Gesture => &mut self.gesture,
            Hold::Explicit => &mut self.explicit,
        };
        if *flag == active {
            return None;
        }
        *flag = active;
        tracing::trace!("Coordinator: {:?} hold {}", hold, if active { "on" } else { "off" });
        self.reevaluate(config, scheduler, timers)
    }

    /// Re-apply the hold rules, e.g. after the pause flags changed
    pub(crate) fn reevaluate(
        &mut self,
        config: &CarouselConfig,
        scheduler: &mut AutoPlayScheduler,
        timers: &mut CarouselTimers,
    ) -> Option<CarouselEvent> {
        let was_held = self.held;
        self.held = self.is_held(config);

        if self.held {
            self.cancel_pending_resume(timers);
            return scheduler
                .pause(timers)
                .then_some(CarouselEvent::AutoPlayPaused);
        }

        if was_held && scheduler.state() == AutoPlayState::Paused {
            self.cancel_pending_resume(timers);
            self.pending_resume = Some(timers.schedule(config.resume_delay, TimerTag::ResumeDebounce));
            tracing::debug!("Coordinator: resume in {:?}", config.resume_delay);
        }
        None
    }

    /// Explicit pause; ignored while stopped
    pub(crate) fn pause(
        &mut self,
        config: &CarouselConfig,
        scheduler: &mut AutoPlayScheduler,
        timers: &mut CarouselTimers,
    ) -> Option<CarouselEvent> {
        if scheduler.state() == AutoPlayState::Stopped {
            return None;
        }
        self.set_hold(Hold::Explicit, true, config, scheduler, timers)
    }

    /// Explicit resume
    ///
    /// Releases the explicit hold. Resumes at once if nothing else holds the
    /// scheduler; otherwise it stays paused until the other holds clear.
    pub(crate) fn resume(
        &mut self,
        config: &CarouselConfig,
        scheduler: &mut AutoPlayScheduler,
        timers: &mut CarouselTimers,
    ) -> Option<CarouselEvent> {
        self.explicit = false;
        self.held = self.is_held(config);
        if self.held {
            tracing::debug!("Coordinator: resume deferred, interaction hold active");
            return None;
        }
        self.cancel_pending_resume(timers);
        scheduler
            .resume(timers)
            .then_some(CarouselEvent::AutoPlayResumed)
    }

    /// Start auto-play, pausing straight away if a hold is active
    pub(crate) fn start(
        &mut self,
        config: &CarouselConfig,
        scheduler: &mut AutoPlayScheduler,
        timers: &mut CarouselTimers,
        has_items: bool,
    ) -> Vec<CarouselEvent> {
        self.explicit = false;
        self.cancel_pending_resume(timers);

        let mut events = Vec::new();
        if !scheduler.start(timers, has_items) {
            return events;
        }
        events.push(CarouselEvent::AutoPlayStarted);

        self.held = self.is_held(config);
        if self.held && scheduler.pause(timers) {
            events.push(CarouselEvent::AutoPlayPaused);
        }
        events
    }

    pub(crate) fn stop(
        &mut self,
        scheduler: &mut AutoPlayScheduler,
        timers: &mut CarouselTimers,
    ) -> Option<CarouselEvent> {
        self.explicit = false;
        self.cancel_pending_resume(timers);
        scheduler.stop(timers).then_some(CarouselEvent::AutoPlayStopped)
    }

    /// Handle a fired debounce timer
    pub(crate) fn on_resume_timer(
        &mut self,
        id: TimerId,
        config: &CarouselConfig,
        scheduler: &mut AutoPlayScheduler,
        timers: &mut CarouselTimers,
    ) -> Option<CarouselEvent> {
        if self.pending_resume != Some(id) {
            return None;
        }
        self.pending_resume = None;
        if self.is_held(config) {
            return None;
        }
        scheduler
            .resume(timers)
            .then_some(CarouselEvent::AutoPlayResumed)
    }

    pub(crate) fn cancel_pending_resume(&mut self, timers: &mut CarouselTimers) {
        if let Some(id) = self.pending_resume.take() {
            timers.cancel(id);
        }
    }
}
