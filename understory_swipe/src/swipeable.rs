// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipeable capability and the gesture hooks that drive it.

use kurbo::Rect;
use smallvec::SmallVec;

/// Snap points of a swipeable, in ascending progress order.
pub type SnapPoints = SmallVec<[f64; 4]>;

/// Main axis of a container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children are laid out left to right (or right to left).
    #[default]
    Horizontal,
    /// Children are laid out top to bottom.
    Vertical,
}

/// Reading direction of the surrounding layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left; horizontal containers mirror their main axis.
    Rtl,
}

/// Kind of device that produced a pointer or scroll event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// A mouse or mouse wheel.
    #[default]
    Mouse,
    /// A touchpad; scrolls arrive as continuous swipe gestures.
    Touchpad,
    /// A touchscreen.
    Touchscreen,
    /// A stylus or other tablet tool.
    Pen,
}

/// Direction of a swipe relative to the logical order of children.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavigationDirection {
    /// Towards lower progress (previous child).
    Back,
    /// Towards higher progress (next child).
    Forward,
}

/// A container whose current state is a scalar progress that can be dragged
/// between snap points.
///
/// Progress is unitless; [`distance`](Self::distance) converts one unit of
/// progress into pixels along the main axis.
pub trait Swipeable {
    /// Pixels corresponding to one unit of progress.
    fn distance(&self) -> f64;

    /// Progress values a gesture may settle on, ascending.
    ///
    /// An empty list means the container cannot be swiped right now.
    fn snap_points(&self) -> SnapPoints;

    /// Current progress.
    fn progress(&self) -> f64;

    /// Progress to return to when a gesture is cancelled.
    fn cancel_progress(&self) -> f64;

    /// Area within `bounds` that accepts swipes in `direction`.
    ///
    /// `is_drag` distinguishes pointer drags from touchpad/scroll swipes.
    /// The default accepts the whole container.
    fn swipe_area(&self, direction: NavigationDirection, is_drag: bool, bounds: Rect) -> Rect {
        let _ = (direction, is_drag);
        bounds
    }

    /// Switches to the child at `index`, animating over `duration` milliseconds.
    fn switch_child(&mut self, index: usize, duration: u64);
}

/// Hooks invoked by a gesture recognizer while a swipe is in progress.
pub trait SwipeHandler {
    /// A swipe is starting.
    ///
    /// Returns `false` to refuse the swipe (for example when the container's
    /// policy forbids opening or closing from its current state); the
    /// recognizer then stops tracking and sends no further hooks.
    fn begin_swipe(&mut self, direction: NavigationDirection, is_direct: bool) -> bool;

    /// The gesture moved; `progress` is the new raw progress.
    fn update_swipe(&mut self, progress: f64);

    /// The gesture ended and should settle on `to` over `duration` milliseconds.
    fn end_swipe(&mut self, duration: u64, to: f64);
}
