// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_flap` crate.

use kurbo::{Point, Rect, Size};
use understory_flap::{
    Flap, FlapConfig, FlapEvent, FlapMeasurements, FlapPosition, FoldPolicy, SizeRequest,
    TransitionType,
};
use understory_swipe::{Swipeable, TextDirection};

const SIZE: Size = Size::new(400.0, 300.0);
const BOUNDS: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

fn sidebar() -> FlapMeasurements {
    FlapMeasurements {
        flap: Some(SizeRequest {
            min: 100.0,
            natural: 100.0,
            expand: false,
        }),
        content: Some(SizeRequest {
            min: 200.0,
            natural: 300.0,
            expand: true,
        }),
        separator: 0.0,
    }
}

fn folded_hidden() -> Flap {
    let config = FlapConfig::default()
        .with_fold_policy(FoldPolicy::Always)
        .with_reveal_flap(false);
    let mut flap = Flap::with_config(config).unwrap();
    flap.allocate(SIZE, &sidebar());
    flap
}

#[test]
fn drag_from_edge_opens_folded_flap() {
    let mut flap = folded_hidden();

    // Only the border strip of a hidden, folded flap accepts drags.
    assert!(!flap.press(BOUNDS, Point::new(50.0, 150.0), 0));
    assert!(flap.press(BOUNDS, Point::new(5.0, 150.0), 0));

    flap.motion(Point::new(65.0, 150.0), 50);
    assert!(flap.is_swiping());
    assert_eq!(flap.reveal_progress(), 0.6);

    flap.release(60);
    assert!(!flap.is_swiping());
    assert!(flap.reveal_flap());
    flap.tick(100);
    flap.tick(500);
    assert_eq!(flap.reveal_progress(), 1.0);

    let layout = flap.allocate(SIZE, &sidebar());
    assert_eq!((layout.flap.x0, layout.flap.x1), (0.0, 100.0));
    assert_eq!(layout.content.x0, 0.0);
}

#[test]
fn drag_towards_edge_closes_flap() {
    let mut flap = Flap::with_config(FlapConfig::default().with_fold_policy(FoldPolicy::Never))
        .unwrap();
    flap.allocate(SIZE, &sidebar());
    assert_eq!(Swipeable::distance(&flap), 100.0);

    assert!(flap.press(BOUNDS, Point::new(90.0, 10.0), 0));
    flap.motion(Point::new(40.0, 10.0), 40);
    assert_eq!(flap.reveal_progress(), 0.5);
    flap.release(50);
    assert!(!flap.reveal_flap());
    flap.tick(60);
    flap.tick(1_000);
    assert_eq!(flap.reveal_progress(), 0.0);
}

#[test]
fn new_press_settles_an_unfinished_swipe() {
    let mut flap = Flap::with_config(FlapConfig::default().with_fold_policy(FoldPolicy::Never))
        .unwrap();
    flap.allocate(SIZE, &sidebar());

    assert!(flap.press(BOUNDS, Point::new(90.0, 10.0), 0));
    flap.motion(Point::new(60.0, 10.0), 40);
    assert!((flap.reveal_progress() - 0.7).abs() < 1e-9);
    assert!(flap.is_swiping());

    flap.press(BOUNDS, Point::new(90.0, 10.0), 50);
    assert!(!flap.is_swiping());
    flap.tick(60);
    flap.tick(1_000);
    assert_eq!(flap.reveal_progress(), 1.0);

    // Programmatic reveal changes animate again once the swipe is gone.
    flap.set_reveal_flap(false);
    flap.tick(1_100);
    flap.tick(2_000);
    assert_eq!(flap.reveal_progress(), 0.0);
}

#[test]
fn press_is_refused_when_swipes_are_disabled() {
    let mut flap = folded_hidden();
    flap.set_swipe_to_open(false);
    flap.set_swipe_to_close(false);
    assert!(!flap.press(BOUNDS, Point::new(5.0, 150.0), 0));
}

#[test]
fn end_flap_in_rtl_sits_on_the_left() {
    let config = FlapConfig::default()
        .with_fold_policy(FoldPolicy::Never)
        .with_flap_position(FlapPosition::End)
        .with_text_direction(TextDirection::Rtl);
    let mut flap = Flap::with_config(config).unwrap();
    let layout = flap.allocate(SIZE, &sidebar());
    assert_eq!((layout.flap.x0, layout.flap.x1), (0.0, 100.0));
    assert_eq!((layout.content.x0, layout.content.x1), (100.0, 400.0));
}

#[test]
fn auto_policy_unfolds_and_reveals_when_space_returns() {
    let mut flap = Flap::new();
    flap.allocate(Size::new(250.0, 300.0), &sidebar());
    assert!(flap.is_folded());
    for now in [0, 250] {
        flap.tick(now);
    }
    assert_eq!(flap.fold_progress(), 1.0);
    flap.drain_events();

    flap.allocate(SIZE, &sidebar());
    assert!(!flap.is_folded());
    assert!(flap.reveal_flap());
    // The flap is hidden, so unfolding itself is instant.
    assert_eq!(flap.fold_progress(), 0.0);
    for now in [300, 550] {
        flap.tick(now);
    }
    assert_eq!(flap.reveal_progress(), 1.0);

    let events = flap.drain_events();
    assert_eq!(events[0], FlapEvent::FoldedChanged(false));
    assert!(events.contains(&FlapEvent::RevealFlapChanged(true)));
}

#[test]
fn slide_transition_moves_both_layers() {
    let config = FlapConfig::default()
        .with_fold_policy(FoldPolicy::Always)
        .with_reveal_flap(false)
        .with_transition_type(TransitionType::Slide);
    let mut flap = Flap::with_config(config).unwrap();
    let hidden = flap.allocate(SIZE, &sidebar());
    assert_eq!(hidden.flap.x0, -100.0);
    assert_eq!(hidden.content.x0, 0.0);

    flap.set_locked(true);
    flap.set_reveal_flap(true);
    flap.tick(0);
    flap.tick(250);
    let shown = flap.allocate(SIZE, &sidebar());
    assert_eq!(shown.flap.x0, 0.0);
    assert_eq!(shown.content.x0, 100.0);
    assert!(flap.drain_events().contains(&FlapEvent::LockedChanged(true)));
}

#[test]
fn measure_reflects_fold_policy() {
    let flap = Flap::with_config(FlapConfig::default().with_fold_policy(FoldPolicy::Never))
        .unwrap();
    let request = flap.measure(understory_swipe::Orientation::Horizontal, &sidebar());
    assert_eq!(request.min, 300.0);
    assert_eq!(request.natural, 400.0);
}
