//! Headless Carousel Demo
//!
//! Drives a carousel from a simulated 60 fps event loop:
//! - auto-play advances every 1.5s
//! - hovering pauses it, leaving resumes after the debounce
//! - a fast drag swipes back one slide
//!
//! Run with: RUST_LOG=slidekit_carousel=debug cargo run -p slidekit_carousel --example headless

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use slidekit_carousel::prelude::*;
use slidekit_carousel::{AutoPlayMode, ConfigError};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = CarouselConfig::default()
        .auto_play(AutoPlayMode::Forward, Duration::from_millis(1500))
        .infinite(true);
    let mut carousel: Carousel<u32> = Carousel::with_config(config)?;
    carousel.set_viewport(640.0, 360.0);

    for (id, title) in ["Harbor", "Dunes", "Glacier", "Canyon"].iter().enumerate() {
        carousel.add_item(Slide::new(id as u32).title(*title));
    }

    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    carousel.subscribe(move |event| {
        if !matches!(event, CarouselEvent::TransitionProgress(_) | CarouselEvent::DragMoved { .. }) {
            sink.borrow_mut().push(event.clone());
        }
    });

    carousel.start_auto_play();
    run(&mut carousel, Duration::from_secs(4));

    tracing::info!("hovering for 3s");
    carousel.handle_input(&InputEvent::HoverEnter);
    run(&mut carousel, Duration::from_secs(3));
    carousel.handle_input(&InputEvent::HoverLeave);
    run(&mut carousel, Duration::from_secs(2));

    tracing::info!("swiping left");
    let t0 = carousel.now();
    let pointer = PointerId::PRIMARY;
    carousel.handle_input(&InputEvent::Pointer(PointerEvent::down(pointer, Point::new(500.0, 180.0), t0)));
    carousel.handle_input(&InputEvent::Pointer(PointerEvent::moved(
        pointer,
        Point::new(350.0, 182.0),
        t0 + Duration::from_millis(60),
    )));
    carousel.handle_input(&InputEvent::Pointer(PointerEvent::up(
        pointer,
        Point::new(200.0, 185.0),
        t0 + Duration::from_millis(120),
    )));
    run(&mut carousel, Duration::from_secs(1));

    for event in log.borrow().iter() {
        tracing::info!("{:?}", event);
    }
    tracing::info!("{}", carousel.accessible_description());
    Ok(())
}

fn run(carousel: &mut Carousel<u32>, span: Duration) {
    let end = carousel.now() + span;
    while carousel.now() < end {
        carousel.tick(FRAME);
    }
}
