// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe tracker: turn pointer drags into progress updates on a [`Swipeable`].
//!
//! ## Usage
//!
//! 1) Call [`SwipeTracker::press`] when a pointer goes down inside the container.
//! 2) Feed every move to [`SwipeTracker::motion`]. The first movement past the
//!    drag threshold asks the target to [`begin_swipe`](SwipeHandler::begin_swipe);
//!    later ones call [`update_swipe`](SwipeHandler::update_swipe) with the new
//!    progress, clamped to the reachable snap range.
//! 3) Call [`SwipeTracker::release`] on pointer up. The tracker picks a snap
//!    point and calls [`end_swipe`](SwipeHandler::end_swipe) with a duration
//!    scaled to the remaining distance and release velocity.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_swipe::{
//!     NavigationDirection, Orientation, SnapPoints, SwipeHandler, SwipeTracker, Swipeable,
//! };
//!
//! struct Pages {
//!     progress: f64,
//!     settled: Option<f64>,
//! }
//!
//! impl Swipeable for Pages {
//!     fn distance(&self) -> f64 { 100.0 }
//!     fn snap_points(&self) -> SnapPoints { [0.0, 1.0, 2.0].into_iter().collect() }
//!     fn progress(&self) -> f64 { self.progress }
//!     fn cancel_progress(&self) -> f64 { 0.0 }
//!     fn switch_child(&mut self, _index: usize, _duration: u64) {}
//! }
//!
//! impl SwipeHandler for Pages {
//!     fn begin_swipe(&mut self, _: NavigationDirection, _: bool) -> bool { true }
//!     fn update_swipe(&mut self, progress: f64) { self.progress = progress; }
//!     fn end_swipe(&mut self, _duration: u64, to: f64) { self.settled = Some(to); }
//! }
//!
//! let mut pages = Pages { progress: 0.0, settled: None };
//! let mut tracker = SwipeTracker::new(Orientation::Horizontal);
//! let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
//!
//! assert!(tracker.press(&mut pages, bounds, Point::new(90.0, 10.0), 0));
//! tracker.motion(&mut pages, Point::new(30.0, 10.0), 50);
//! assert_eq!(pages.progress, 0.6);
//! tracker.release(&mut pages, 60);
//! assert_eq!(pages.settled, Some(1.0));
//! ```

use kurbo::{Point, Rect};

use crate::swipeable::{NavigationDirection, Orientation, SnapPoints, SwipeHandler, Swipeable};

/// Pixels a pointer must travel along the main axis before a swipe begins.
pub const DRAG_THRESHOLD: f64 = 8.0;

/// Pixels a swipe must cover to settle anywhere but the cancel progress.
pub const DISTANCE_THRESHOLD: f64 = 16.0;

/// Release speed, in pixels per millisecond, above which the swipe direction
/// decides the target snap point.
pub const VELOCITY_THRESHOLD: f64 = 0.4;

/// Shortest settle animation, in milliseconds.
pub const MIN_ANIMATION_DURATION: u64 = 100;

/// Longest settle animation, in milliseconds.
pub const MAX_ANIMATION_DURATION: u64 = 400;

/// Narrowest strip, in pixels, by which a mostly hidden layer can still be
/// dragged back.
pub const SWIPE_BORDER: f64 = 16.0;

// Motion older than this at release time no longer counts as a fling.
const VELOCITY_TIMEOUT: u64 = 100;

#[derive(Clone, Debug)]
struct Swipe {
    distance: f64,
    snap_points: SnapPoints,
    initial_progress: f64,
    progress: f64,
    lower: f64,
    upper: f64,
    // Progress units per millisecond.
    velocity: f64,
}

#[derive(Clone, Debug)]
struct Press {
    start_pos: Point,
    last_time: u64,
    swipe: Option<Swipe>,
}

/// Converts pointer motion into swipe progress for a [`Swipeable`].
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    orientation: Orientation,
    reversed: bool,
    allow_long_swipes: bool,
    press: Option<Press>,
}

impl SwipeTracker {
    /// Creates a tracker for a container laid out along `orientation`.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            reversed: false,
            allow_long_swipes: false,
            press: None,
        }
    }

    /// Main axis the tracker reads motion from.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Sets the main axis. Takes effect on the next press.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Whether pointer motion along the axis is inverted (right-to-left layouts).
    #[must_use]
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Inverts pointer motion along the axis.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Whether a single swipe may travel past the adjacent snap points.
    #[must_use]
    pub fn allow_long_swipes(&self) -> bool {
        self.allow_long_swipes
    }

    /// Allows or forbids swipes that travel past the adjacent snap points.
    pub fn set_allow_long_swipes(&mut self, allow: bool) {
        self.allow_long_swipes = allow;
    }

    /// Returns `true` between an accepted [`begin_swipe`](SwipeHandler::begin_swipe)
    /// and the matching [`end_swipe`](SwipeHandler::end_swipe).
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.press.as_ref().is_some_and(|p| p.swipe.is_some())
    }

    /// Starts tracking a pointer pressed at `pos`.
    ///
    /// A swipe still in progress from an earlier press is cancelled first, as
    /// by [`cancel`](Self::cancel).
    ///
    /// Returns `false` (and tracks nothing) when `pos` lies outside the
    /// target's swipe area for both directions.
    pub fn press<S: Swipeable + SwipeHandler + ?Sized>(
        &mut self,
        target: &mut S,
        bounds: Rect,
        pos: Point,
        now: u64,
    ) -> bool {
        self.cancel(target);
        let inside = [NavigationDirection::Back, NavigationDirection::Forward]
            .into_iter()
            .any(|dir| target.swipe_area(dir, true, bounds).contains(pos));
        if !inside {
            self.press = None;
            return false;
        }
        self.press = Some(Press {
            start_pos: pos,
            last_time: now,
            swipe: None,
        });
        true
    }

    /// Feeds pointer motion to the tracker.
    ///
    /// Does nothing unless a press is being tracked.
    pub fn motion<S: Swipeable + SwipeHandler + ?Sized>(
        &mut self,
        target: &mut S,
        pos: Point,
        now: u64,
    ) {
        let Some(press) = self.press.as_mut() else {
            return;
        };
        let offset = pos - press.start_pos;
        let mut delta = match self.orientation {
            Orientation::Horizontal => offset.x,
            Orientation::Vertical => offset.y,
        };
        if self.reversed {
            delta = -delta;
        }

        if press.swipe.is_none() {
            if delta.abs() < DRAG_THRESHOLD {
                return;
            }
            let direction = if delta < 0.0 {
                NavigationDirection::Forward
            } else {
                NavigationDirection::Back
            };
            if !target.begin_swipe(direction, true) {
                self.press = None;
                return;
            }
            let initial_progress = target.progress();
            let snap_points = target.snap_points();
            let (lower, upper) = bounds(&snap_points, initial_progress, self.allow_long_swipes);
            #[cfg(feature = "tracing")]
            tracing::debug!(?direction, initial_progress, lower, upper, "swipe begin");
            press.swipe = Some(Swipe {
                distance: target.distance(),
                snap_points,
                initial_progress,
                progress: initial_progress,
                lower,
                upper,
                velocity: 0.0,
            });
        }

        let Some(swipe) = press.swipe.as_mut() else {
            return;
        };
        let progress = if swipe.distance > 0.0 {
            (swipe.initial_progress - delta / swipe.distance).clamp(swipe.lower, swipe.upper)
        } else {
            swipe.initial_progress
        };
        let dt = now.saturating_sub(press.last_time);
        if dt > 0 {
            swipe.velocity = (progress - swipe.progress) / dt as f64;
        }
        swipe.progress = progress;
        press.last_time = now;
        target.update_swipe(progress);
    }

    /// Ends tracking at pointer release.
    ///
    /// If a swipe was in progress the target receives
    /// [`end_swipe`](SwipeHandler::end_swipe) with the chosen snap point.
    pub fn release<S: Swipeable + SwipeHandler + ?Sized>(&mut self, target: &mut S, now: u64) {
        let Some(press) = self.press.take() else {
            return;
        };
        let Some(mut swipe) = press.swipe else {
            return;
        };
        if now.saturating_sub(press.last_time) > VELOCITY_TIMEOUT {
            swipe.velocity = 0.0;
        }
        let to = end_progress(&swipe, target.cancel_progress());
        let duration = settle_duration(&swipe, to);
        #[cfg(feature = "tracing")]
        tracing::debug!(to, duration, "swipe end");
        target.end_swipe(duration, to);
    }

    /// Abandons the current press; an active swipe returns to the cancel progress.
    pub fn cancel<S: Swipeable + SwipeHandler + ?Sized>(&mut self, target: &mut S) {
        let Some(press) = self.press.take() else {
            return;
        };
        let Some(mut swipe) = press.swipe else {
            return;
        };
        swipe.velocity = 0.0;
        let to = target.cancel_progress();
        let duration = settle_duration(&swipe, to);
        target.end_swipe(duration, to);
    }

    /// Forgets the current press without notifying the target.
    ///
    /// For targets whose swipe was already superseded by something else
    /// taking over their progress.
    pub fn reset(&mut self) {
        self.press = None;
    }

    /// Moves the reference point of an active swipe by `delta` progress units.
    ///
    /// Containers call this when their progress jumps for reasons unrelated to
    /// the gesture (children inserted before the current one, for example), so
    /// the finger keeps tracking the same content.
    pub fn shift_position(&mut self, delta: f64) {
        let Some(swipe) = self.press.as_mut().and_then(|p| p.swipe.as_mut()) else {
            return;
        };
        swipe.initial_progress += delta;
        swipe.progress += delta;
        swipe.lower += delta;
        swipe.upper += delta;
        for point in &mut swipe.snap_points {
            *point += delta;
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(Orientation::Horizontal)
    }
}

// Range a swipe starting at `current` may reach.
fn bounds(points: &[f64], current: f64, allow_long_swipes: bool) -> (f64, f64) {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return (current, current);
    };
    if allow_long_swipes {
        return (first, last);
    }
    // One snap point either side of the closest one.
    let closest = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - current).abs().total_cmp(&(*b - current).abs()))
        .map_or(0, |(i, _)| i);
    let n = points.len();
    (points[closest.saturating_sub(1)], points[(closest + 1).min(n - 1)])
}

fn end_progress(swipe: &Swipe, cancel_progress: f64) -> f64 {
    let points = &swipe.snap_points;
    if points.is_empty() {
        return cancel_progress;
    }
    let moved = swipe.progress - swipe.initial_progress;
    let speed = swipe.velocity * swipe.distance;
    if speed.abs() < VELOCITY_THRESHOLD && moved.abs() * swipe.distance < DISTANCE_THRESHOLD {
        return cancel_progress;
    }
    let forward = if speed.abs() >= VELOCITY_THRESHOLD {
        speed > 0.0
    } else {
        moved > 0.0
    };
    let p = swipe.progress;
    let to = if forward {
        points.iter().copied().find(|&s| s >= p)
    } else {
        points.iter().rev().copied().find(|&s| s <= p)
    };
    to.unwrap_or(cancel_progress).clamp(swipe.lower, swipe.upper)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "clamped to MAX_ANIMATION_DURATION"
)]
fn settle_duration(swipe: &Swipe, to: f64) -> u64 {
    let remaining = (to - swipe.progress).abs() * swipe.distance;
    if remaining <= 0.0 {
        return 0;
    }
    let speed = (swipe.velocity * swipe.distance).abs();
    let max = MAX_ANIMATION_DURATION as f64;
    let ms = if speed >= VELOCITY_THRESHOLD {
        remaining / speed
    } else {
        max * (to - swipe.progress).abs()
    };
    ms.clamp(MIN_ANIMATION_DURATION as f64, max) as u64
}
