//! Carousel facade
//!
//! [`Carousel`] owns every piece of carousel state and is the only thing a
//! host talks to. The host forwards input through
//! [`handle_input`](Carousel::handle_input) and drives time with
//! [`tick`](Carousel::tick); renderers read the index, transition and drag
//! offset back, or subscribe to [`CarouselEvent`]s.
//!
//! Events raised during one call are delivered when that call returns.
//! Listeners receive `&CarouselEvent` only and cannot call back into the
//! carousel; hosts that want to react with further carousel calls should
//! collect the events and act on them afterwards.

use std::time::Duration;

use slidekit_animation::{Transition, TransitionSnapshot};
use slidekit_core::events::{EventEmitter, SubscriptionId};
use slidekit_core::timer::TimerId;
use slidekit_platform::input::{InputEvent, PointerEvent, PointerPhase};

use crate::accessibility;
use crate::autoplay::{AutoPlayScheduler, AutoPlayState, CarouselTimers, TimerTag};
use crate::config::{AutoPlayMode, CarouselConfig, Orientation};
use crate::coordinator::{Hold, InteractionCoordinator};
use crate::error::Result;
use crate::events::CarouselEvent;
use crate::gesture::{self, GestureRecognizer, InputAction};
use crate::navigation::{NavTarget, NavigationState};
use crate::registry::{ItemRegistry, Slide};

/// Viewport used until the host reports a size
const DEFAULT_VIEWPORT: (f32, f32) = (400.0, 300.0);

/// Single-active-slide carousel engine
pub struct Carousel<C> {
    config: CarouselConfig,
    registry: ItemRegistry<C>,
    nav: NavigationState,
    transition: Transition,
    autoplay: AutoPlayScheduler,
    gesture: GestureRecognizer,
    coordinator: InteractionCoordinator,
    timers: CarouselTimers,
    emitter: EventEmitter<CarouselEvent>,
    enabled: bool,
    visible: bool,
    viewport: (f32, f32),
    /// Live drag offset after edge behavior
    drag_offset: f32,
    /// Current drag is past an edge
    overscrolling: bool,
}

impl<C> Carousel<C> {
    /// Empty carousel with the default configuration
    pub fn new() -> Self {
        Self::build(CarouselConfig::default())
    }

    /// Empty carousel with `config`, which must validate
    ///
    /// Auto-play is not started here even when the config enables it, since
    /// there are no slides yet. Call [`start_auto_play`](Self::start_auto_play)
    /// once the slides are in.
    pub fn with_config(config: CarouselConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: CarouselConfig) -> Self {
        Self {
            transition: Transition::new(config.transition_duration, config.transition_easing),
            autoplay: AutoPlayScheduler::new(config.auto_play, config.auto_play_interval),
            config,
            registry: ItemRegistry::new(),
            nav: NavigationState::new(),
            gesture: GestureRecognizer::new(),
            coordinator: InteractionCoordinator::new(),
            timers: CarouselTimers::new(),
            emitter: EventEmitter::new(),
            enabled: true,
            visible: true,
            viewport: DEFAULT_VIEWPORT,
            drag_offset: 0.0,
            overscrolling: false,
        }
    }

    // ========================================================================
    // Observation
    // ========================================================================

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CarouselEvent) + 'static,
    {
        self.emitter.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.registry.count()
    }

    /// Active slide index, `None` when empty
    pub fn current_index(&self) -> Option<usize> {
        self.nav.current()
    }

    pub fn current_item(&self) -> Option<&Slide<C>> {
        self.nav.current().and_then(|index| self.registry.item_at(index))
    }

    pub fn item_at(&self, index: usize) -> Option<&Slide<C>> {
        self.registry.item_at(index)
    }

    pub fn items(&self) -> &ItemRegistry<C> {
        &self.registry
    }

    pub fn can_go_previous(&self) -> bool {
        self.nav.can_go_previous(self.config.infinite)
    }

    pub fn can_go_next(&self) -> bool {
        self.nav.can_go_next(self.config.infinite)
    }

    pub fn transition(&self) -> TransitionSnapshot {
        self.transition.snapshot(self.nav.current().unwrap_or(0))
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_animating()
    }

    pub fn auto_play_state(&self) -> AutoPlayState {
        self.autoplay.state()
    }

    /// Fraction of the current auto-play interval already elapsed
    pub fn playback_progress(&self) -> f32 {
        self.autoplay.playback_progress(&self.timers)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Live drag offset along the navigation axis
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Length of the navigation axis in pixels
    pub fn track_length(&self) -> f32 {
        match self.config.orientation {
            Orientation::Horizontal => self.viewport.0,
            Orientation::Vertical => self.viewport.1,
        }
    }

    pub fn accessible_description(&self) -> String {
        let title = self.current_item().and_then(|slide| slide.title.as_deref());
        accessibility::describe(self.nav.current(), self.registry.count(), title)
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Whether the host should keep ticking every frame
    pub fn needs_frame(&self) -> bool {
        self.transition.is_animating()
    }

    /// Time until the next timer fires, if any is armed
    ///
    /// Lets an idle host sleep instead of ticking every frame.
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.timers
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(self.timers.now()))
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Replace the whole configuration
    ///
    /// An invalid configuration is rejected: the previous one stays in force
    /// and [`CarouselEvent::ConfigurationRejected`] is raised.
    pub fn configure(&mut self, config: CarouselConfig) -> Result<()> {
        if let Err(err) = config.validate() {
            tracing::warn!("Carousel: rejected configuration: {}", err);
            self.emitter
                .queue(CarouselEvent::ConfigurationRejected(err.clone()));
            self.emitter.flush();
            return Err(err);
        }

        let old = std::mem::replace(&mut self.config, config);

        if old.orientation != self.config.orientation || !self.config.enable_touch {
            self.abort_gesture();
        }
        if !self.config.enable_wheel {
            self.gesture.reset_wheel();
        }

        self.transition.set_duration(self.config.transition_duration);
        self.transition.set_easing(self.config.transition_easing);

        self.autoplay.set_mode(self.config.auto_play);
        self.autoplay
            .set_interval(self.config.auto_play_interval, &mut self.timers);
        if self.config.auto_play == AutoPlayMode::Off {
            let event = self.coordinator.stop(&mut self.autoplay, &mut self.timers);
            self.emitter.queue_all(event);
        } else if old.auto_play == AutoPlayMode::Off {
            self.start_auto_play_inner();
        }

        let event = self
            .coordinator
            .reevaluate(&self.config, &mut self.autoplay, &mut self.timers);
        self.emitter.queue_all(event);

        tracing::debug!("Carousel: configuration updated");
        self.emitter.queue(CarouselEvent::ConfigurationChanged);
        self.emitter.flush();
        Ok(())
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Append a slide, returning its index
    pub fn add_item(&mut self, slide: impl Into<Slide<C>>) -> usize {
        let previous = self.nav.current();
        let index = self.registry.add(slide.into());
        self.nav.on_inserted(index);
        self.after_registry_change(previous);
        self.emitter.flush();
        index
    }

    /// Insert a slide, returning where it landed (positions past the end append)
    pub fn insert_item(&mut self, index: usize, slide: impl Into<Slide<C>>) -> usize {
        self.cancel_transition();
        let previous = self.nav.current();
        let index = self.registry.insert(index, slide.into());
        self.nav.on_inserted(index);
        self.after_registry_change(previous);
        self.emitter.flush();
        index
    }

    /// Remove the slide at `index`; out-of-range indices are ignored
    pub fn remove_item(&mut self, index: usize) -> Option<Slide<C>> {
        if index >= self.registry.count() {
            return None;
        }
        self.cancel_transition();
        let previous = self.nav.current();
        let removed = self.registry.remove(index);
        self.nav.on_removed(index);
        self.after_registry_change(previous);
        // Same number, different slide
        if previous == Some(index) && self.nav.current() == previous {
            self.announce(index);
        }
        self.emitter.flush();
        removed
    }

    pub fn clear_items(&mut self) {
        if self.registry.is_empty() {
            return;
        }
        self.cancel_transition();
        let previous = self.nav.current();
        self.registry.clear();
        self.nav.on_cleared();
        self.after_registry_change(previous);
        self.emitter.flush();
    }

    /// Replace a slide in place, returning the old one
    ///
    /// Replacing the active slide announces the new one.
    pub fn set_item(&mut self, index: usize, slide: impl Into<Slide<C>>) -> Option<Slide<C>> {
        let old = self.registry.set_item(index, slide.into())?;
        if self.nav.current() == Some(index) {
            self.announce(index);
            self.emitter.flush();
        }
        Some(old)
    }

    /// Index of the first slide matching `predicate`
    pub fn find_item<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Slide<C>) -> bool,
    {
        self.registry.position_of(predicate)
    }

    fn after_registry_change(&mut self, previous: Option<usize>) {
        self.emitter
            .queue(CarouselEvent::ItemCountChanged(self.registry.count()));
        let index = self.nav.current();
        if index != previous {
            self.emitter
                .queue(CarouselEvent::CurrentIndexChanged { index, previous });
            if let Some(index) = index {
                self.announce(index);
            }
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn go_previous(&mut self, animated: bool) -> bool {
        self.navigate_and_flush(NavTarget::Previous, animated)
    }

    pub fn go_next(&mut self, animated: bool) -> bool {
        self.navigate_and_flush(NavTarget::Next, animated)
    }

    pub fn go_first(&mut self, animated: bool) -> bool {
        self.navigate_and_flush(NavTarget::First, animated)
    }

    pub fn go_last(&mut self, animated: bool) -> bool {
        self.navigate_and_flush(NavTarget::Last, animated)
    }

    /// Navigate to `index`, wrapped or clamped per the `infinite` flag
    ///
    /// Returns `false` if nothing changed.
    pub fn go_to_index(&mut self, index: isize, animated: bool) -> bool {
        self.navigate_and_flush(NavTarget::Index(index), animated)
    }

    /// Snap a running transition to its target
    pub fn stop_transition(&mut self) -> bool {
        let snapped = self.snap_transition();
        self.emitter.flush();
        snapped
    }

    fn navigate_and_flush(&mut self, target: NavTarget, animated: bool) -> bool {
        let changed = self.navigate(target, animated, true);
        self.emitter.flush();
        changed
    }

    /// Resolve and apply one navigation intent
    ///
    /// User intents restart a running auto-play interval, even when they
    /// turn out to change nothing.
    fn navigate(&mut self, target: NavTarget, animated: bool, user: bool) -> bool {
        if user {
            self.autoplay.reset(&mut self.timers);
        }

        let baseline = self.transition.target();
        let Some(to) = self.nav.resolve(target, self.config.infinite, baseline) else {
            tracing::trace!("Carousel: {:?} changes nothing", target);
            return false;
        };

        self.snap_transition();
        let Some(from) = self.nav.current() else {
            return false;
        };

        if animated && !self.transition.duration().is_zero() {
            self.transition.start(from, to);
            self.emitter
                .queue(CarouselEvent::TransitionStarted { from, to });
        } else {
            self.commit(to);
        }
        true
    }

    fn commit(&mut self, index: usize) {
        let previous = self.nav.commit(index);
        let index = self.nav.current();
        if index == previous {
            return;
        }
        tracing::debug!("Carousel: current index {:?} -> {:?}", previous, index);
        self.emitter
            .queue(CarouselEvent::CurrentIndexChanged { index, previous });
        if let Some(index) = index {
            self.announce(index);
        }
    }

    /// Commit the in-flight target, if any
    fn snap_transition(&mut self) -> bool {
        let Some(to) = self.transition.stop() else {
            return false;
        };
        self.commit(to);
        self.emitter
            .queue(CarouselEvent::TransitionFinished { index: to });
        true
    }

    /// Abandon the in-flight transition without committing it
    fn cancel_transition(&mut self) {
        if self.transition.cancel().is_some() {
            self.emitter.queue(CarouselEvent::TransitionCancelled);
        }
    }

    fn announce(&mut self, index: usize) {
        if !self.config.announce_changes {
            return;
        }
        let title = self
            .registry
            .item_at(index)
            .and_then(|slide| slide.title.as_deref());
        let text = accessibility::announce(index, self.registry.count(), title);
        self.emitter.queue(CarouselEvent::Announcement(text));
    }

    // ========================================================================
    // Auto-play
    // ========================================================================

    /// Start auto-play; ignored while disabled or hidden
    pub fn start_auto_play(&mut self) {
        self.start_auto_play_inner();
        self.emitter.flush();
    }

    pub fn stop_auto_play(&mut self) {
        let event = self.coordinator.stop(&mut self.autoplay, &mut self.timers);
        self.emitter.queue_all(event);
        self.emitter.flush();
    }

    /// Pause until [`resume_auto_play`](Self::resume_auto_play)
    ///
    /// Hover, focus and drag ending do not lift an explicit pause.
    pub fn pause_auto_play(&mut self) {
        let event = self
            .coordinator
            .pause(&self.config, &mut self.autoplay, &mut self.timers);
        self.emitter.queue_all(event);
        self.emitter.flush();
    }

    /// Lift an explicit pause
    ///
    /// While hover, focus or a drag still holds auto-play, it resumes only
    /// after those clear.
    pub fn resume_auto_play(&mut self) {
        self.resume_auto_play_inner();
        self.emitter.flush();
    }

    /// Running → paused, paused → resumed, stopped → started
    pub fn toggle_auto_play(&mut self) {
        self.toggle_auto_play_inner();
        self.emitter.flush();
    }

    fn start_auto_play_inner(&mut self) {
        if !self.enabled || !self.visible {
            tracing::debug!("Carousel: auto-play start ignored while inactive");
            return;
        }
        let has_items = !self.registry.is_empty();
        let events = self.coordinator.start(
            &self.config,
            &mut self.autoplay,
            &mut self.timers,
            has_items,
        );
        self.emitter.queue_all(events);
    }

    fn resume_auto_play_inner(&mut self) {
        let event = self
            .coordinator
            .resume(&self.config, &mut self.autoplay, &mut self.timers);
        self.emitter.queue_all(event);
    }

    fn toggle_auto_play_inner(&mut self) {
        match self.autoplay.state() {
            AutoPlayState::Running => {
                let event = self
                    .coordinator
                    .pause(&self.config, &mut self.autoplay, &mut self.timers);
                self.emitter.queue_all(event);
            }
            AutoPlayState::Paused => self.resume_auto_play_inner(),
            AutoPlayState::Stopped => self.start_auto_play_inner(),
        }
    }

    // ========================================================================
    // Time
    // ========================================================================

    /// Advance the virtual clock by `dt`
    ///
    /// Timers fire in deadline order and the transition is advanced up to
    /// each deadline first, so one large `dt` behaves like many small ones.
    pub fn tick(&mut self, dt: Duration) {
        let target = self.timers.now() + dt;

        loop {
            let now = self.timers.now();
            let step_to = match self.timers.next_deadline() {
                Some(deadline) if deadline <= target => deadline.max(now),
                _ => target,
            };

            self.timers.advance_to(step_to);
            self.advance_transition(step_to - now);

            for (id, tag) in self.timers.take_due() {
                self.dispatch_timer(id, tag);
            }

            let more_due = self
                .timers
                .next_deadline()
                .is_some_and(|deadline| deadline <= target);
            if step_to >= target && !more_due {
                break;
            }
        }

        self.emitter.flush();
    }

    fn advance_transition(&mut self, dt: Duration) {
        if dt.is_zero() {
            return;
        }
        let Some(step) = self.transition.advance(dt) else {
            return;
        };
        self.emitter
            .queue(CarouselEvent::TransitionProgress(step.progress));
        if let Some(index) = step.finished {
            self.commit(index);
            self.emitter
                .queue(CarouselEvent::TransitionFinished { index });
        }
    }

    fn dispatch_timer(&mut self, id: TimerId, tag: TimerTag) {
        match tag {
            TimerTag::AutoPlay => {
                if self.autoplay.take_fire(id) {
                    self.on_auto_play_fire();
                    self.autoplay.rearm(&mut self.timers);
                }
            }
            TimerTag::ResumeDebounce => {
                let event = self.coordinator.on_resume_timer(
                    id,
                    &self.config,
                    &mut self.autoplay,
                    &mut self.timers,
                );
                self.emitter.queue_all(event);
            }
        }
    }

    fn on_auto_play_fire(&mut self) {
        if self.registry.is_empty() {
            tracing::debug!("Carousel: auto-play fired with no items");
            let event = self.coordinator.stop(&mut self.autoplay, &mut self.timers);
            self.emitter.queue_all(event);
            return;
        }

        let position = self
            .transition
            .target()
            .or(self.nav.current())
            .unwrap_or(0);
        let target = self
            .autoplay
            .next_target(position, self.registry.count(), self.config.infinite);
        self.navigate(target, true, false);
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Feed one host event
    ///
    /// Pointer, key and wheel input is ignored while disabled or hidden, or
    /// when its `enable_*` flag is off.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Pointer(pointer) if self.accepts_input() && self.config.enable_touch => {
                self.handle_pointer(pointer)
            }
            InputEvent::Key(key) if self.accepts_input() && self.config.enable_keyboard => {
                match gesture::classify_key(*key, self.config.orientation) {
                    Some(InputAction::Navigate(target)) => {
                        self.navigate(target, true, true);
                    }
                    Some(InputAction::ToggleAutoPlay) => self.toggle_auto_play_inner(),
                    None => {}
                }
            }
            InputEvent::Wheel { delta_x, delta_y }
                if self.accepts_input() && self.config.enable_wheel =>
            {
                let delta = if *delta_y != 0.0 { *delta_y } else { *delta_x };
                let notches = self.gesture.wheel(delta);
                let target = if notches > 0 {
                    NavTarget::Previous
                } else {
                    NavTarget::Next
                };
                for _ in 0..notches.unsigned_abs() {
                    self.navigate(target, true, true);
                }
            }
            InputEvent::Pointer(_) | InputEvent::Key(_) | InputEvent::Wheel { .. } => {}
            InputEvent::FocusIn => self.set_hold(Hold::Focus, true),
            InputEvent::FocusOut => self.set_hold(Hold::Focus, false),
            InputEvent::HoverEnter => self.set_hold(Hold::Hover, true),
            InputEvent::HoverLeave => self.set_hold(Hold::Hover, false),
            InputEvent::EnabledChanged(enabled) => self.set_enabled_inner(*enabled),
            InputEvent::VisibilityChanged(visible) => self.set_visible_inner(*visible),
            InputEvent::Resized { width, height } => self.set_viewport(*width, *height),
        }
        self.emitter.flush();
    }

    /// Enable or disable the carousel; disabling stops auto-play
    pub fn set_enabled(&mut self, enabled: bool) {
        self.set_enabled_inner(enabled);
        self.emitter.flush();
    }

    /// Show or hide the carousel; hiding stops auto-play
    pub fn set_visible(&mut self, visible: bool) {
        self.set_visible_inner(visible);
        self.emitter.flush();
    }

    /// Report the viewport size; the navigation axis sets the track length
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width.max(0.0), height.max(0.0));
    }

    fn accepts_input(&self) -> bool {
        self.enabled && self.visible
    }

    fn handle_pointer(&mut self, event: &PointerEvent) {
        let orientation = self.config.orientation;
        match event.phase {
            PointerPhase::Down => {
                if self.gesture.pointer_down(event) {
                    self.set_hold(Hold::Gesture, true);
                }
            }
            PointerPhase::Move => {
                if let Some(displacement) = self.gesture.pointer_move(event, orientation) {
                    self.update_drag_offset(displacement);
                }
            }
            PointerPhase::Up => {
                let Some(release) = self.gesture.pointer_up(event, orientation) else {
                    return;
                };
                self.reset_drag_offset();
                self.set_hold(Hold::Gesture, false);

                let swipe = gesture::classify_swipe(
                    release,
                    orientation,
                    self.track_length(),
                    self.config.swipe_threshold,
                    self.config.velocity_threshold,
                );
                if let Some(swipe) = swipe {
                    tracing::debug!(
                        "Carousel: swipe {:?} at {:.0}px/s",
                        swipe.direction,
                        swipe.velocity
                    );
                    self.emitter.queue(CarouselEvent::SwipeDetected {
                        direction: swipe.direction,
                        velocity: swipe.velocity,
                    });
                    self.navigate(swipe.target(), true, true);
                }
            }
            PointerPhase::Cancel => {
                if self.gesture.cancel(Some(event.id)) {
                    self.reset_drag_offset();
                    self.set_hold(Hold::Gesture, false);
                }
            }
        }
    }

    fn update_drag_offset(&mut self, displacement: f32) {
        let offset = if self.config.infinite {
            displacement
        } else {
            let current = self.nav.current();
            let count = self.registry.count();
            let at_first = current == Some(0);
            let at_last = current.is_some_and(|index| index + 1 >= count);

            let edge = gesture::overscroll(displacement, at_first, at_last);
            if let (Some(at_start), false) = (edge, self.overscrolling) {
                tracing::debug!(
                    "Carousel: drag reached the {} edge",
                    if at_start { "first" } else { "last" }
                );
                self.emitter.queue(CarouselEvent::EdgeReached {
                    at_start,
                    at_end: !at_start,
                });
            }
            self.overscrolling = edge.is_some();

            gesture::edge_offset(
                displacement,
                at_first,
                at_last,
                self.config.edge_behavior,
                self.config.edge_resistance,
            )
        };
        self.drag_offset = offset;
        self.emitter.queue(CarouselEvent::DragMoved { offset });
    }

    fn reset_drag_offset(&mut self) {
        self.overscrolling = false;
        if self.drag_offset != 0.0 {
            self.drag_offset = 0.0;
            self.emitter.queue(CarouselEvent::DragMoved { offset: 0.0 });
        }
    }

    /// Drop the drag in progress, releasing its auto-play hold
    fn abort_gesture(&mut self) {
        if self.gesture.cancel(None) {
            self.reset_drag_offset();
            self.set_hold(Hold::Gesture, false);
        }
    }

    fn set_hold(&mut self, hold: Hold, active: bool) {
        let event = self.coordinator.set_hold(
            hold,
            active,
            &self.config,
            &mut self.autoplay,
            &mut self.timers,
        );
        self.emitter.queue_all(event);
    }

    fn set_enabled_inner(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        tracing::debug!("Carousel: {}", if enabled { "enabled" } else { "disabled" });
        if !enabled {
            self.deactivate();
        }
    }

    fn set_visible_inner(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        tracing::debug!("Carousel: {}", if visible { "shown" } else { "hidden" });
        if !visible {
            self.deactivate();
        }
    }

    fn deactivate(&mut self) {
        self.abort_gesture();
        self.gesture.reset_wheel();
        let event = self.coordinator.stop(&mut self.autoplay, &mut self.timers);
        self.emitter.queue_all(event);
    }
}

impl<C> Default for Carousel<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for Carousel<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("items", &self.registry.count())
            .field("current", &self.nav.current())
            .field("transition", &self.transition.snapshot(self.nav.current().unwrap_or(0)))
            .field("auto_play", &self.autoplay.state())
            .field("now", &self.timers.now())
            .finish()
    }
}
