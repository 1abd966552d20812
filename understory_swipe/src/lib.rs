// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: the contract between swipeable containers and gesture recognizers.
//!
//! A swipeable container exposes its state as a single scalar progress
//! (a carousel's position in pages, a flap's reveal fraction) together with
//! the snap points a gesture may settle on. This crate defines:
//!
//! - [`Swipeable`]: what a container reports to a recognizer (distance per
//!   unit of progress, snap points, current and cancel progress, the area that
//!   accepts swipes) plus [`Swipeable::switch_child`] for programmatic
//!   navigation.
//! - [`SwipeHandler`]: the begin/update/end hooks a recognizer invokes.
//! - [`SwipeTracker`]: a minimal recognizer that converts pointer drags into
//!   those hooks.
//!
//! Containers implement both traits; recognizers only ever talk to them through
//! these traits, so neither side knows the other's concrete type.
//!
//! ## Sign conventions
//!
//! Dragging towards the start of the main axis (left, or up) increases
//! progress. [`SwipeTracker::set_reversed`] flips this for right-to-left
//! layouts.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod swipeable;
mod tracker;

pub use swipeable::{
    InputSource, NavigationDirection, Orientation, SnapPoints, SwipeHandler, Swipeable,
    TextDirection,
};
pub use tracker::{
    DISTANCE_THRESHOLD, DRAG_THRESHOLD, MAX_ANIMATION_DURATION, MIN_ANIMATION_DURATION,
    SWIPE_BORDER, SwipeTracker, VELOCITY_THRESHOLD,
};
