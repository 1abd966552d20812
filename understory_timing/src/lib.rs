// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: one-shot timer queue for UI runtimes.
//!
//! [`TimerQueue`] stores delayed callbacks as plain keys ordered by deadline.
//! It does not own a clock or an event loop; hosts:
//!
//! - ask for [`TimerQueue::next_deadline`] to decide when to wake up,
//! - call [`TimerQueue::pop_expired`] with the current time in a loop and
//!   act on each returned key.
//!
//! Dropping the queue drops every pending timer, so a component that owns its
//! queue can never receive a callback after it is gone.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! #[derive(Debug, PartialEq)]
//! enum Timeout {
//!     ScrollCooldown,
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule_after(1_000, 250, Timeout::ScrollCooldown);
//! assert_eq!(timers.next_deadline(), Some(1_250));
//!
//! assert!(timers.pop_expired(1_100).is_none());
//! let (_, fired) = timers.pop_expired(1_300).unwrap();
//! assert_eq!(fired, Timeout::ScrollCooldown);
//! ```
//!
//! Times are `u64` milliseconds on a host-chosen monotonic clock.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{TimerId, TimerQueue};
