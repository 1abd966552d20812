// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications queued by a carousel for its host.

/// A change the host may want to react to.
///
/// Events are queued in the order they happen and handed out by
/// [`Carousel::drain_events`](crate::Carousel::drain_events).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CarouselEvent {
    /// The scroll position changed to the given value.
    PositionChanged(f64),
    /// The position was moved by the given delta to keep the current page in
    /// place while other pages resized or moved.
    PositionShifted(f64),
    /// A scroll animation finished on the page with this index.
    PageChanged(usize),
    /// A running scroll animation was stopped before finishing.
    AnimationStopped,
    /// The number of pages changed.
    NPagesChanged(usize),
    /// Spacing changed.
    SpacingChanged(f64),
    /// Reveal duration changed.
    RevealDurationChanged(u64),
    /// Animation duration changed.
    AnimationDurationChanged(u64),
    /// Interactivity changed.
    InteractiveChanged(bool),
    /// Navigation to page `index` was requested over `duration` milliseconds.
    ChildSwitched {
        /// Target page index.
        index: usize,
        /// Animation duration in milliseconds.
        duration: u64,
    },
}

/// When a carousel next needs [`Carousel::tick`](crate::Carousel::tick).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wakeup {
    /// Animations are running; tick on the next display refresh.
    NextFrame,
    /// Only timers are pending; tick at this time.
    At(u64),
}
