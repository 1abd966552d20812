// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_flap --heading-base-level=0

//! Understory Flap: reveal and fold state for an adaptive sidebar.
//!
//! A [`Flap`] manages the two progress values behind a sidebar that can sit
//! beside its content or, when space runs out, fold and float over it:
//!
//! - reveal progress, from hidden (0) to shown (1), animated by
//!   [`Flap::set_reveal_flap`] or dragged with a swipe through the
//!   [`Swipeable`](understory_swipe::Swipeable) and
//!   [`SwipeHandler`](understory_swipe::SwipeHandler) traits,
//! - fold progress, from side by side (0) to folded (1), driven by the
//!   [`FoldPolicy`]. Unless the flap is locked, folding hides it first and
//!   unfolding shows it again.
//!
//! [`Flap::allocate`] turns measured child sizes into rectangles for the flap,
//! the separator and the content, following the [`TransitionType`] and the
//! [`FlapPosition`] (mirrored for right-to-left layouts).
//!
//! Like the carousel, a flap owns no clock: call [`Flap::tick`] while
//! [`Flap::needs_frame`] is `true`, and read [`FlapEvent`]s from
//! [`Flap::drain_events`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_flap::{Flap, FlapEvent, FlapMeasurements, SizeRequest};
//! use kurbo::Size;
//!
//! let sidebar = FlapMeasurements {
//!     flap: Some(SizeRequest { min: 200.0, natural: 200.0, expand: false }),
//!     content: Some(SizeRequest { min: 300.0, natural: 300.0, expand: true }),
//!     separator: 1.0,
//! };
//!
//! let mut flap = Flap::new();
//! let wide = flap.allocate(Size::new(800.0, 600.0), &sidebar);
//! assert_eq!(wide.content.x0, 201.0);
//!
//! // Too narrow for both: the flap folds, hiding itself first.
//! flap.allocate(Size::new(400.0, 600.0), &sidebar);
//! assert!(flap.is_folded());
//! for now in [0, 100, 250] {
//!     flap.tick(now);
//! }
//! assert_eq!(flap.reveal_progress(), 0.0);
//! assert_eq!(flap.fold_progress(), 1.0);
//! assert!(flap.drain_events().contains(&FlapEvent::FoldedChanged(true)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` builds.
//! - `tracing`: emit `tracing` events for reveal, fold and swipe transitions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod event;
mod flap;
mod layout;

pub use config::{ConfigError, DEFAULT_DURATION, FlapConfig, FlapPosition, FoldPolicy, TransitionType};
pub use event::FlapEvent;
pub use flap::Flap;
pub use layout::{FlapLayout, FlapMeasurements, SizeRequest};
