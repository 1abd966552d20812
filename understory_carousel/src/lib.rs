// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: the position engine of a paginated, swipeable container.
//!
//! A [`Carousel`] keeps one authoritative scroll position, measured in pages,
//! and reconciles everything that wants to move it:
//!
//! - programmatic navigation ([`Carousel::scroll_to`], [`Carousel::step`],
//!   [`Carousel::scroll_step`] for mouse wheels) animated with a cubic
//!   ease-out,
//! - swipe gestures, through the [`Swipeable`](understory_swipe::Swipeable)
//!   and [`SwipeHandler`](understory_swipe::SwipeHandler) traits or the
//!   built-in pointer tracker ([`Carousel::press`], [`Carousel::motion`],
//!   [`Carousel::release`]),
//! - pages growing in and shrinking out as they are inserted, removed and
//!   reordered. While a page before the current one resizes, the position
//!   shifts with it so the page on screen stays put.
//!
//! Each page has a snap point: with every page fully revealed, page `n` snaps
//! at `n.0`. Pages are identified by a cheap `Copy` handle chosen by the host;
//! the carousel never owns them.
//!
//! ## Driving a carousel
//!
//! The carousel owns no clock. Hosts call [`Carousel::tick`] with the current
//! time (milliseconds on any monotonic clock) while
//! [`Carousel::next_wakeup`] asks for it, call [`Carousel::allocate`] to get
//! page rectangles, and read [`CarouselEvent`]s from
//! [`Carousel::drain_events`]. Because notifications are queued rather than
//! delivered through callbacks, reacting to one by inserting pages or
//! scrolling can never interfere with a frame in progress.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselEvent};
//!
//! let mut carousel = Carousel::new();
//! for page in ["a", "b", "c"] {
//!     carousel.append(page);
//! }
//! assert_eq!(carousel.snap_points().as_slice(), &[0.0, 1.0, 2.0]);
//!
//! carousel.scroll_to_full("c", 300);
//! for now in [0, 16, 150, 300] {
//!     carousel.tick(now);
//! }
//! assert_eq!(carousel.position(), 2.0);
//! assert!(carousel.drain_events().contains(&CarouselEvent::PageChanged(2)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` builds.
//! - `tracing`: emit `tracing` events for page insertion, removal and
//!   reordering, scroll and swipe transitions, and animation samples.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod coordinator;
mod event;
mod layout;
mod position;
mod registry;
mod snap;

pub use carousel::{Carousel, MIN_SCROLL_COOLDOWN};
pub use config::{CarouselConfig, ConfigError, DEFAULT_DURATION};
pub use coordinator::Phase;
pub use event::{CarouselEvent, Wakeup};
pub use layout::{ChildPlacement, Measure, SizeRequest};
pub use registry::{ChildRecord, RecordId};
