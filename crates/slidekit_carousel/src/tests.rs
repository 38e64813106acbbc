//! End-to-end carousel behavior

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::prelude::*;
use crate::{AutoPlayState, ConfigError, EdgeBehavior, SwipeDirection};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

type Log = Rc<RefCell<Vec<CarouselEvent>>>;

fn carousel_with(config: CarouselConfig, items: usize) -> (Carousel<usize>, Log) {
    let mut carousel = Carousel::with_config(config).unwrap();
    for i in 0..items {
        carousel.add_item(Slide::new(i).title(format!("Slide {}", i + 1)));
    }
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    carousel.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    (carousel, log)
}

fn take(log: &Log) -> Vec<CarouselEvent> {
    std::mem::take(&mut *log.borrow_mut())
}

fn index_changes(events: &[CarouselEvent]) -> Vec<Option<usize>> {
    events
        .iter()
        .filter_map(|event| match event {
            CarouselEvent::CurrentIndexChanged { index, .. } => Some(*index),
            _ => None,
        })
        .collect()
}

fn pointer(event: PointerEvent) -> InputEvent {
    InputEvent::Pointer(event)
}

#[test]
fn test_auto_play_cadence_wraps() {
    let config = CarouselConfig::autoplay(ms(500)).transition(
        crate::TransitionStyle::Slide,
        Duration::ZERO,
        crate::Easing::Linear,
    );
    let (mut carousel, _log) = carousel_with(config, 3);
    carousel.start_auto_play();

    let mut seen = vec![carousel.current_index()];
    for _ in 0..3 {
        carousel.tick(ms(499));
        assert_eq!(carousel.current_index(), *seen.last().unwrap());
        carousel.tick(ms(1));
        seen.push(carousel.current_index());
    }
    assert_eq!(seen, vec![Some(0), Some(1), Some(2), Some(0)]);
}

#[test]
fn test_ping_pong_reverses_at_bounded_ends() {
    let config = CarouselConfig::default()
        .auto_play(crate::AutoPlayMode::PingPong, ms(500))
        .infinite(false)
        .transition(crate::TransitionStyle::Slide, Duration::ZERO, crate::Easing::Linear);
    let (mut carousel, _log) = carousel_with(config, 3);
    carousel.start_auto_play();

    let mut seen = vec![carousel.current_index()];
    for _ in 0..5 {
        carousel.tick(ms(500));
        seen.push(carousel.current_index());
    }
    assert_eq!(seen, vec![Some(0), Some(1), Some(2), Some(1), Some(0), Some(1)]);
}

#[test]
fn test_backward_auto_play_wraps_to_last() {
    let config = CarouselConfig::default()
        .auto_play(crate::AutoPlayMode::Backward, ms(500))
        .transition(crate::TransitionStyle::Slide, Duration::ZERO, crate::Easing::Linear);
    let (mut carousel, _log) = carousel_with(config, 4);
    carousel.start_auto_play();

    carousel.tick(ms(500));
    assert_eq!(carousel.current_index(), Some(3));
    carousel.tick(ms(500));
    assert_eq!(carousel.current_index(), Some(2));
}

#[test]
fn test_large_tick_replays_every_fire() {
    let (mut carousel, log) = carousel_with(CarouselConfig::autoplay(ms(500)), 3);
    carousel.start_auto_play();
    take(&log);

    carousel.tick(ms(1800));
    assert_eq!(index_changes(&take(&log)), vec![Some(1), Some(2), Some(0)]);
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn test_pause_then_resume_fires_after_remaining_time() {
    let config = CarouselConfig::autoplay(ms(500)).transition(
        crate::TransitionStyle::Fade,
        Duration::ZERO,
        crate::Easing::Linear,
    );
    let (mut carousel, log) = carousel_with(config, 3);
    carousel.start_auto_play();

    carousel.tick(ms(200));
    carousel.pause_auto_play();
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Paused);

    carousel.tick(ms(10_000));
    assert_eq!(carousel.current_index(), Some(0));

    carousel.resume_auto_play();
    carousel.tick(ms(299));
    assert_eq!(carousel.current_index(), Some(0));
    carousel.tick(ms(1));
    assert_eq!(carousel.current_index(), Some(1));

    let events = take(&log);
    assert!(events.contains(&CarouselEvent::AutoPlayPaused));
    assert!(events.contains(&CarouselEvent::AutoPlayResumed));
}

#[test]
fn test_next_then_previous_restores_index() {
    for infinite in [true, false] {
        let (mut carousel, _log) = carousel_with(CarouselConfig::default().infinite(infinite), 4);
        carousel.go_to_index(2, false);
        assert!(carousel.go_next(false));
        assert!(carousel.go_previous(false));
        assert_eq!(carousel.current_index(), Some(2));
    }
}

#[test]
fn test_finite_next_at_end_is_silent() {
    let (mut carousel, log) = carousel_with(CarouselConfig::default().infinite(false), 3);
    carousel.go_last(false);
    take(&log);

    assert!(!carousel.go_next(true));
    assert_eq!(carousel.current_index(), Some(2));
    assert!(take(&log).is_empty());
    assert!(!carousel.is_transitioning());
}

#[test]
fn test_infinite_next_at_end_wraps() {
    let (mut carousel, _log) = carousel_with(CarouselConfig::default(), 3);
    carousel.go_last(false);
    assert!(carousel.go_next(false));
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn test_single_and_empty_navigation_are_noops() {
    let (mut empty, log) = carousel_with(CarouselConfig::default(), 0);
    assert!(!empty.go_next(true));
    assert!(!empty.go_to_index(3, false));
    assert_eq!(empty.current_index(), None);
    assert!(take(&log).is_empty());

    let (mut single, _log) = carousel_with(CarouselConfig::default(), 1);
    assert!(!single.go_previous(true));
    assert_eq!(single.current_index(), Some(0));
}

#[test]
fn test_animated_transition_commits_on_completion() {
    let config = CarouselConfig::default().transition(
        crate::TransitionStyle::Slide,
        ms(300),
        crate::Easing::Linear,
    );
    let (mut carousel, log) = carousel_with(config, 3);
    take(&log);

    assert!(carousel.go_next(true));
    assert_eq!(carousel.current_index(), Some(0));
    assert!(carousel.needs_frame());

    carousel.tick(ms(150));
    let snapshot = carousel.transition();
    assert!(snapshot.in_progress);
    assert_eq!((snapshot.from, snapshot.to), (0, 1));
    assert!((snapshot.progress - 0.5).abs() < 1e-4);

    carousel.tick(ms(150));
    assert_eq!(carousel.current_index(), Some(1));
    assert!(!carousel.transition().in_progress);

    let events = take(&log);
    assert_eq!(events.first(), Some(&CarouselEvent::TransitionStarted { from: 0, to: 1 }));
    assert_eq!(events.last(), Some(&CarouselEvent::TransitionFinished { index: 1 }));
    assert!(events.contains(&CarouselEvent::Announcement("Item 2 of 3: Slide 2".into())));
}

#[test]
fn test_preempted_transition_snaps_and_finishes_within_duration() {
    let config = CarouselConfig::default().transition(
        crate::TransitionStyle::Slide,
        ms(300),
        crate::Easing::EaseInOut,
    );
    let (mut carousel, log) = carousel_with(config, 5);
    take(&log);

    carousel.go_next(true);
    carousel.tick(ms(100));
    carousel.go_next(true);

    // In-flight target committed, next step starts from it
    assert_eq!(carousel.current_index(), Some(1));
    assert_eq!(carousel.transition().to, 2);

    carousel.tick(ms(300));
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.current_index(), Some(2));

    let finished: Vec<_> = take(&log)
        .into_iter()
        .filter(|e| matches!(e, CarouselEvent::TransitionFinished { .. }))
        .collect();
    assert_eq!(
        finished,
        vec![
            CarouselEvent::TransitionFinished { index: 1 },
            CarouselEvent::TransitionFinished { index: 2 }
        ]
    );
}

#[test]
fn test_stop_transition_snaps_to_target() {
    let (mut carousel, log) = carousel_with(CarouselConfig::default(), 3);
    carousel.go_next(true);
    carousel.tick(ms(100));
    take(&log);

    assert!(carousel.stop_transition());
    assert_eq!(carousel.current_index(), Some(1));
    assert!(!carousel.is_transitioning());
    assert!(take(&log).contains(&CarouselEvent::TransitionFinished { index: 1 }));

    assert!(!carousel.stop_transition());
    assert!(take(&log).is_empty());
}

#[test]
fn test_progress_events_are_monotonic() {
    let (mut carousel, log) = carousel_with(CarouselConfig::default(), 2);
    carousel.go_next(true);
    for _ in 0..30 {
        carousel.tick(ms(16));
    }
    let progress: Vec<f32> = take(&log)
        .into_iter()
        .filter_map(|e| match e {
            CarouselEvent::TransitionProgress(p) => Some(p),
            _ => None,
        })
        .collect();
    assert!(!progress.is_empty());
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(progress.last(), Some(&1.0));
}

#[test]
fn test_swipe_exactly_at_thresholds_navigates() {
    let config = CarouselConfig::default().sensitivity(crate::GestureSensitivity::Custom {
        swipe_threshold: 0.25,
        velocity_threshold: 500.0,
    });
    let (mut carousel, log) = carousel_with(config, 3);
    carousel.set_viewport(400.0, 300.0);
    take(&log);

    let id = PointerId::PRIMARY;
    carousel.handle_input(&pointer(PointerEvent::down(id, Point::new(100.0, 50.0), ms(1000))));
    carousel.handle_input(&pointer(PointerEvent::moved(id, Point::new(150.0, 50.0), ms(1100))));
    assert!(carousel.is_dragging());
    carousel.handle_input(&pointer(PointerEvent::up(id, Point::new(200.0, 50.0), ms(1200))));

    let events = take(&log);
    assert!(events.contains(&CarouselEvent::SwipeDetected {
        direction: SwipeDirection::Right,
        velocity: 500.0,
    }));
    assert!(events.contains(&CarouselEvent::TransitionStarted { from: 0, to: 1 }));
}

#[test]
fn test_swipe_below_threshold_has_no_effect() {
    let config = CarouselConfig::default().sensitivity(crate::GestureSensitivity::Custom {
        swipe_threshold: 0.25,
        velocity_threshold: 500.0,
    });
    let (mut carousel, log) = carousel_with(config, 3);
    take(&log);

    let id = PointerId(9);
    carousel.handle_input(&pointer(PointerEvent::down(id, Point::new(200.0, 0.0), ms(0))));
    carousel.handle_input(&pointer(PointerEvent::up(id, Point::new(100.5, 0.0), ms(200))));

    assert!(!carousel.is_transitioning());
    assert!(!take(&log)
        .iter()
        .any(|e| matches!(e, CarouselEvent::SwipeDetected { .. })));
}

#[test]
fn test_vertical_swipe_up_goes_previous() {
    let config = CarouselConfig::default().orientation(Orientation::Vertical);
    let (mut carousel, _log) = carousel_with(config, 3);
    carousel.set_viewport(200.0, 400.0);

    let id = PointerId::PRIMARY;
    carousel.handle_input(&pointer(PointerEvent::down(id, Point::new(50.0, 300.0), ms(0))));
    carousel.handle_input(&pointer(PointerEvent::up(id, Point::new(50.0, 100.0), ms(100))));
    assert_eq!(carousel.transition().to, 2);
}

#[test]
fn test_edge_resistance_at_first_slide() {
    let config = CarouselConfig::default()
        .infinite(false)
        .edge(EdgeBehavior::Resist, 0.5);
    let (mut carousel, log) = carousel_with(config, 3);
    take(&log);

    let id = PointerId::PRIMARY;
    carousel.handle_input(&pointer(PointerEvent::down(id, Point::new(200.0, 0.0), ms(0))));
    carousel.handle_input(&pointer(PointerEvent::moved(id, Point::new(160.0, 0.0), ms(50))));
    assert_eq!(carousel.drag_offset(), -20.0);
    carousel.handle_input(&pointer(PointerEvent::cancel(id, ms(60))));
    assert_eq!(carousel.drag_offset(), 0.0);
    assert!(!carousel.is_dragging());

    assert_eq!(
        take(&log),
        vec![
            CarouselEvent::EdgeReached {
                at_start: true,
                at_end: false,
            },
            CarouselEvent::DragMoved { offset: -20.0 },
            CarouselEvent::DragMoved { offset: 0.0 },
        ]
    );
}

#[test]
fn test_edge_reached_once_per_excursion() {
    let config = CarouselConfig::default()
        .infinite(false)
        .edge(EdgeBehavior::Stop, 0.5);
    let (mut carousel, log) = carousel_with(config, 2);
    carousel.go_last(false);
    take(&log);

    let id = PointerId::PRIMARY;
    let edges = |events: Vec<CarouselEvent>| {
        events
            .into_iter()
            .filter(|event| matches!(event, CarouselEvent::EdgeReached { .. }))
            .collect::<Vec<_>>()
    };

    carousel.handle_input(&pointer(PointerEvent::down(id, Point::new(100.0, 0.0), ms(0))));
    carousel.handle_input(&pointer(PointerEvent::moved(id, Point::new(130.0, 0.0), ms(20))));
    carousel.handle_input(&pointer(PointerEvent::moved(id, Point::new(160.0, 0.0), ms(40))));
    assert_eq!(carousel.drag_offset(), 0.0);
    assert_eq!(
        edges(take(&log)),
        vec![CarouselEvent::EdgeReached {
            at_start: false,
            at_end: true,
        }]
    );

    // Back inside, then past the edge again
    carousel.handle_input(&pointer(PointerEvent::moved(id, Point::new(90.0, 0.0), ms(60))));
    carousel.handle_input(&pointer(PointerEvent::moved(id, Point::new(120.0, 0.0), ms(80))));
    carousel.handle_input(&pointer(PointerEvent::cancel(id, ms(90))));
    assert_eq!(edges(take(&log)).len(), 1);

    // Wrapping carousels have no edge
    let (mut carousel, log) = carousel_with(CarouselConfig::default(), 2);
    take(&log);
    carousel.handle_input(&pointer(PointerEvent::down(id, Point::new(100.0, 0.0), ms(0))));
    carousel.handle_input(&pointer(PointerEvent::moved(id, Point::new(40.0, 0.0), ms(20))));
    assert!(edges(take(&log)).is_empty());
}

#[test]
fn test_drag_pauses_auto_play_and_resumes_after_delay() {
    let config = CarouselConfig::autoplay(ms(1000)).resume_delay(ms(500));
    let (mut carousel, _log) = carousel_with(config, 3);
    carousel.start_auto_play();

    let id = PointerId::PRIMARY;
    carousel.handle_input(&pointer(PointerEvent::down(id, Point::new(10.0, 10.0), ms(0))));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Paused);
    carousel.handle_input(&pointer(PointerEvent::up(id, Point::new(12.0, 10.0), ms(40))));

    carousel.tick(ms(499));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Paused);
    carousel.tick(ms(1));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Running);
}

#[test]
fn test_swipe_near_interval_end_resumes_with_full_interval() {
    let config = CarouselConfig::autoplay(ms(3000))
        .resume_delay(ms(500))
        .pause_on(false, false);
    let (mut carousel, _log) = carousel_with(config, 5);
    carousel.start_auto_play();
    carousel.tick(ms(2900));

    let id = PointerId::PRIMARY;
    let t0 = carousel.now();
    carousel.handle_input(&pointer(PointerEvent::down(id, Point::new(300.0, 10.0), t0)));
    carousel.handle_input(&pointer(PointerEvent::up(id, Point::new(100.0, 10.0), t0 + ms(50))));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Paused);

    carousel.tick(ms(500));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Running);
    assert_eq!(carousel.time_until_next_timer(), Some(ms(3000)));
}

#[test]
fn test_navigation_while_hovered_resumes_with_full_interval() {
    let config = CarouselConfig::autoplay(ms(3000)).resume_delay(ms(500));
    let (mut carousel, _log) = carousel_with(config, 5);
    carousel.start_auto_play();
    carousel.tick(ms(2900));

    carousel.handle_input(&InputEvent::HoverEnter);
    carousel.go_next(true);
    carousel.handle_input(&InputEvent::HoverLeave);

    carousel.tick(ms(500));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Running);
    assert_eq!(carousel.current_index(), Some(1));
    assert_eq!(carousel.time_until_next_timer(), Some(ms(3000)));
}

#[test]
fn test_hover_pauses_and_debounced_resume_is_cancelled() {
    let config = CarouselConfig::autoplay(ms(1000)).resume_delay(ms(500));
    let (mut carousel, _log) = carousel_with(config, 3);
    carousel.start_auto_play();

    carousel.handle_input(&InputEvent::HoverEnter);
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Paused);
    carousel.handle_input(&InputEvent::HoverLeave);
    carousel.tick(ms(300));
    carousel.handle_input(&InputEvent::FocusIn);
    carousel.tick(ms(5000));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Paused);
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn test_user_navigation_resets_interval() {
    let config = CarouselConfig::autoplay(ms(1000)).transition(
        crate::TransitionStyle::Slide,
        Duration::ZERO,
        crate::Easing::Linear,
    );
    let (mut carousel, _log) = carousel_with(config, 4);
    carousel.start_auto_play();

    carousel.tick(ms(800));
    carousel.go_next(false);
    assert_eq!(carousel.time_until_next_timer(), Some(ms(1000)));

    carousel.tick(ms(999));
    assert_eq!(carousel.current_index(), Some(1));
    carousel.tick(ms(1));
    assert_eq!(carousel.current_index(), Some(2));
}

#[test]
fn test_keyboard_navigation_and_toggle() {
    let (mut carousel, _log) = carousel_with(CarouselConfig::autoplay(ms(1000)), 4);

    carousel.handle_input(&InputEvent::Key(Key::End));
    carousel.tick(ms(300));
    assert_eq!(carousel.current_index(), Some(3));

    carousel.handle_input(&InputEvent::Key(Key::Up));
    assert!(!carousel.is_transitioning());

    carousel.handle_input(&InputEvent::Key(Key::Space));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Running);
    carousel.handle_input(&InputEvent::Key(Key::Space));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Paused);
    carousel.handle_input(&InputEvent::Key(Key::Space));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Running);
}

#[test]
fn test_wheel_is_gated_and_steps_per_notch() {
    let (mut carousel, _log) = carousel_with(CarouselConfig::default(), 5);
    let wheel = |delta_y| InputEvent::Wheel { delta_x: 0.0, delta_y };

    carousel.handle_input(&wheel(-120.0));
    assert!(!carousel.is_transitioning());

    let config = carousel.config().clone();
    carousel
        .configure(CarouselConfig {
            enable_wheel: true,
            ..config
        })
        .unwrap();
    carousel.handle_input(&wheel(-240.0));
    assert_eq!(carousel.transition().to, 2);
    carousel.handle_input(&wheel(60.0));
    carousel.handle_input(&wheel(60.0));
    assert_eq!(carousel.transition().to, 1);
}

#[test]
fn test_removing_active_slide_keeps_valid_index() {
    let (mut carousel, log) = carousel_with(CarouselConfig::default(), 3);
    carousel.go_to_index(1, false);
    take(&log);

    let removed = carousel.remove_item(1).unwrap();
    assert_eq!(removed.content, 1);
    assert_eq!(carousel.current_index(), Some(1));
    assert_eq!(carousel.current_item().map(|s| s.content), Some(2));

    carousel.remove_item(1);
    assert_eq!(carousel.current_index(), Some(0));
    carousel.remove_item(0);
    assert_eq!(carousel.current_index(), None);
    assert_eq!(carousel.item_count(), 0);

    assert_eq!(index_changes(&take(&log)), vec![Some(0), None]);
}

#[test]
fn test_removing_active_slide_announces_its_replacement() {
    let (mut carousel, log) = carousel_with(CarouselConfig::default(), 3);
    carousel.go_to_index(1, false);
    take(&log);

    carousel.remove_item(1);
    assert_eq!(
        take(&log),
        vec![
            CarouselEvent::ItemCountChanged(2),
            CarouselEvent::Announcement("Item 2 of 2: Slide 3".into()),
        ]
    );

    carousel.set_item(1, Slide::new(9).title("Replacement"));
    assert_eq!(
        take(&log),
        vec![CarouselEvent::Announcement("Item 2 of 2: Replacement".into())]
    );
    carousel.set_item(0, Slide::new(8));
    assert!(take(&log).is_empty());
}

#[test]
fn test_registry_mutation_cancels_transition() {
    let (mut carousel, log) = carousel_with(CarouselConfig::default(), 3);
    carousel.go_next(true);
    carousel.tick(ms(100));
    take(&log);

    carousel.insert_item(0, Slide::new(99));
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.current_index(), Some(1));
    assert_eq!(carousel.current_item().map(|s| s.content), Some(0));

    let events = take(&log);
    assert_eq!(events[0], CarouselEvent::TransitionCancelled);
    assert!(!events
        .iter()
        .any(|e| matches!(e, CarouselEvent::TransitionFinished { .. })));

    carousel.tick(ms(1000));
    assert_eq!(carousel.current_index(), Some(1));
}

#[test]
fn test_auto_play_on_emptied_registry_stops() {
    let (mut carousel, log) = carousel_with(CarouselConfig::autoplay(ms(500)), 2);
    carousel.start_auto_play();
    carousel.clear_items();
    take(&log);

    carousel.tick(ms(500));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Stopped);
    assert_eq!(take(&log), vec![CarouselEvent::AutoPlayStopped]);
}

#[test]
fn test_invalid_configuration_is_rejected_and_notified() {
    let (mut carousel, log) = carousel_with(CarouselConfig::autoplay(ms(500)), 2);
    let before = carousel.config().clone();

    let result = carousel.configure(CarouselConfig::autoplay(Duration::ZERO));
    assert_eq!(result, Err(ConfigError::NonPositiveInterval));
    assert_eq!(carousel.config(), &before);
    assert_eq!(
        take(&log),
        vec![CarouselEvent::ConfigurationRejected(ConfigError::NonPositiveInterval)]
    );
}

#[test]
fn test_configure_turning_auto_play_off_stops_it() {
    let (mut carousel, log) = carousel_with(CarouselConfig::autoplay(ms(500)), 2);
    carousel.start_auto_play();
    take(&log);

    carousel.configure(CarouselConfig::default()).unwrap();
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Stopped);
    assert_eq!(
        take(&log),
        vec![CarouselEvent::AutoPlayStopped, CarouselEvent::ConfigurationChanged]
    );
}

#[test]
fn test_auto_play_config_waits_for_explicit_start() {
    let (mut carousel, _log) = carousel_with(CarouselConfig::autoplay(ms(500)), 3);
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Stopped);
    carousel.tick(ms(2000));
    assert_eq!(carousel.current_index(), Some(0));

    // Turning auto-play on through configure starts it right away
    let (mut carousel, _log) = carousel_with(CarouselConfig::default(), 3);
    carousel.configure(CarouselConfig::autoplay(ms(500))).unwrap();
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Running);
}

#[test]
fn test_disable_stops_and_ignores_input() {
    let (mut carousel, _log) = carousel_with(CarouselConfig::autoplay(ms(500)), 3);
    carousel.start_auto_play();

    carousel.handle_input(&InputEvent::EnabledChanged(false));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Stopped);
    carousel.handle_input(&InputEvent::Key(Key::Right));
    assert!(!carousel.is_transitioning());

    // Re-enabling does not restart auto-play
    carousel.set_enabled(true);
    carousel.tick(ms(2000));
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Stopped);
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn test_hidden_carousel_stops_auto_play() {
    let (mut carousel, _log) = carousel_with(CarouselConfig::autoplay(ms(500)), 3);
    carousel.start_auto_play();
    carousel.set_visible(false);
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Stopped);
    carousel.start_auto_play();
    assert_eq!(carousel.auto_play_state(), AutoPlayState::Stopped);
}

#[test]
fn test_accessible_description() {
    let (mut carousel, _log) = carousel_with(CarouselConfig::default(), 0);
    assert_eq!(carousel.accessible_description(), "Carousel with 0 items");
    carousel.add_item(Slide::new(7).title("Lighthouse"));
    assert_eq!(carousel.accessible_description(), "Carousel item 1 of 1: Lighthouse");
}
