// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications queued by a flap for its host.

/// A change the host may want to react to.
///
/// Handed out, oldest first, by [`Flap::drain_events`](crate::Flap::drain_events).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlapEvent {
    /// Reveal progress moved to the given value.
    RevealProgressChanged(f64),
    /// The flap was asked to show (`true`) or hide.
    RevealFlapChanged(bool),
    /// The flap folded (`true`) or unfolded.
    FoldedChanged(bool),
    /// Fold progress moved to the given value.
    FoldProgressChanged(f64),
    /// The flap was locked or unlocked.
    LockedChanged(bool),
    /// A switch to snap point `index` (0 hidden, 1 revealed) was requested.
    ChildSwitched {
        /// Target snap point index.
        index: usize,
        /// Animation duration in milliseconds.
        duration: u64,
    },
}
