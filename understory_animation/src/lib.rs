// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_animation --heading-base-level=0

//! Understory Animation: eased scalar animations for frame-driven UI runtimes.
//!
//! This crate provides two small pieces:
//!
//! - [`Easing`] and [`ease_out_cubic`]: pure curves mapping a normalized time
//!   fraction to a normalized progress fraction, plus [`lerp`].
//! - [`AnimationDriver`]: a keyed set of running animations. Each animation
//!   interpolates a single `f64` from a start to an end value over a duration
//!   in milliseconds. Hosts pump the driver once per display refresh with
//!   [`AnimationDriver::begin_frame`] and [`AnimationDriver::next_sample`].
//!
//! The driver never calls back into user code. Instead, each frame yields
//! [`Sample`]s that the owner applies to its own state. Because the set of
//! animations to sample is snapshotted at the start of the frame, applying a
//! sample may start or stop other animations (or restart the same key)
//! without disturbing the iteration: stopped ones are skipped, new ones wait
//! for the next frame.
//!
//! Cancellation is always "drop in place": [`AnimationDriver::stop`] returns
//! the last produced value and never emits a completion sample. Starting an
//! animation for a key that is already animating cancels the old one the same
//! way.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_animation::{AnimationDriver, AnimationSpec, Started};
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
//! enum Slot {
//!     Scroll,
//! }
//!
//! let mut driver = AnimationDriver::new();
//! let mut position = 0.0;
//!
//! match driver.start_at(Slot::Scroll, AnimationSpec::new(position, 2.0, 300), 0) {
//!     Started::Running(_) => {}
//!     Started::Finished(sample) => position = sample.value,
//! }
//!
//! for now in [16, 150, 300] {
//!     driver.begin_frame(now);
//!     while let Some(sample) = driver.next_sample() {
//!         position = sample.value;
//!     }
//! }
//! assert_eq!(position, 2.0);
//! assert!(driver.is_empty());
//! ```
//!
//! Timestamps are `u64` milliseconds on any monotonic clock the host likes.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when animations start, stop, complete,
//!   and (at trace level) for every sample.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod driver;
mod easing;

pub use driver::{AnimationDriver, AnimationId, AnimationSpec, Sample, Started};
pub use easing::{Easing, ease_out_cubic, lerp};
