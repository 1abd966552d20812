// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flap container: reveal and fold state, their animations and swipes.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use understory_animation::{AnimationDriver, AnimationSpec, Sample, Started};
use understory_swipe::{
    NavigationDirection, Orientation, SnapPoints, SwipeHandler, SwipeTracker, Swipeable,
    TextDirection,
};

use crate::config::{ConfigError, FlapConfig, FlapPosition, FoldPolicy, TransitionType};
use crate::event::FlapEvent;
use crate::layout::{self, FlapLayout, FlapMeasurements, LayoutState, SizeRequest};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Slot {
    Reveal,
    Fold,
}

#[derive(Clone, Debug)]
struct Allocation {
    size: Size,
    layout: FlapLayout,
    has_flap: bool,
}

/// An adaptive sidebar: a flap beside or above some content.
///
/// Two progress values describe it. Reveal progress goes from 0 (flap
/// hidden) to 1 (flap shown); fold progress goes from 0 (flap beside the
/// content) to 1 (flap floating over it). Each is animated by its own
/// cubic ease-out animation, and reveal progress can also be dragged with a
/// swipe.
///
/// Changes are reported as [`FlapEvent`]s queued until
/// [`drain_events`](Self::drain_events).
#[derive(Clone, Debug)]
pub struct Flap {
    config: FlapConfig,
    reveal_progress: f64,
    fold_progress: f64,
    folded: bool,
    schedule_fold: bool,
    swipe_active: bool,
    driver: AnimationDriver<Slot>,
    tracker: SwipeTracker,
    allocation: Option<Allocation>,
    events: Vec<FlapEvent>,
}

impl Default for Flap {
    fn default() -> Self {
        Self::new()
    }
}

impl Flap {
    /// Creates a revealed, auto-folding flap.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(FlapConfig::default())
    }

    /// Creates a flap with `config`.
    pub fn with_config(config: FlapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: FlapConfig) -> Self {
        let folded = config.fold_policy == FoldPolicy::Always;
        let mut flap = Self {
            reveal_progress: if config.reveal_flap { 1.0 } else { 0.0 },
            fold_progress: if folded { 1.0 } else { 0.0 },
            folded,
            schedule_fold: false,
            swipe_active: false,
            driver: AnimationDriver::new(),
            tracker: SwipeTracker::new(config.orientation),
            allocation: None,
            events: Vec::new(),
            config,
        };
        flap.sync_tracker();
        flap
    }

    // Dragging towards the flap's edge closes it.
    fn sync_tracker(&mut self) {
        let mut reversed = self.config.flap_position == FlapPosition::Start;
        if self.config.orientation == Orientation::Horizontal
            && self.config.text_direction == TextDirection::Rtl
        {
            reversed = !reversed;
        }
        self.tracker.set_orientation(self.config.orientation);
        self.tracker.set_reversed(reversed);
    }

    // --- state -----------------------------------------------------------

    /// Whether the flap is, or is animating towards being, shown.
    #[must_use]
    pub fn reveal_flap(&self) -> bool {
        self.config.reveal_flap
    }

    /// Shows or hides the flap over the reveal duration.
    pub fn set_reveal_flap(&mut self, reveal: bool) {
        self.set_reveal_flap_with(reveal, self.config.reveal_duration);
    }

    fn set_reveal_flap_with(&mut self, reveal: bool, duration: u64) {
        if self.config.reveal_flap == reveal {
            return;
        }
        self.config.reveal_flap = reveal;
        #[cfg(feature = "tracing")]
        tracing::debug!(reveal, duration, "flap reveal");
        self.events.push(FlapEvent::RevealFlapChanged(reveal));
        if !self.swipe_active {
            self.animate_reveal(if reveal { 1.0 } else { 0.0 }, duration);
        }
    }

    /// Current reveal progress: 0 hidden, 1 shown.
    #[must_use]
    pub fn reveal_progress(&self) -> f64 {
        self.reveal_progress
    }

    /// Current fold progress: 0 beside the content, 1 over it.
    #[must_use]
    pub fn fold_progress(&self) -> f64 {
        self.fold_progress
    }

    /// Whether the flap is folded.
    #[must_use]
    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Folds or unfolds the flap.
    ///
    /// Unless locked, folding also hides the flap and unfolding shows it. The
    /// fold then waits for the hide animation, so only one of the two is
    /// visible at a time.
    fn set_folded(&mut self, folded: bool) {
        if self.folded == folded {
            return;
        }
        self.folded = folded;
        #[cfg(feature = "tracing")]
        tracing::debug!(folded, "flap fold");
        self.events.push(FlapEvent::FoldedChanged(folded));

        let locked = self.config.locked;
        if !locked && folded {
            self.schedule_fold = true;
        } else {
            self.animate_fold();
        }
        if !locked {
            self.set_reveal_flap_with(!folded, self.config.fold_duration);
        }
        // Already hidden: nothing to wait for.
        if self.schedule_fold && !self.swipe_active && !self.driver.is_running(Slot::Reveal) {
            self.schedule_fold = false;
            self.animate_fold();
        }
    }

    /// Whether folding leaves the reveal state alone.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.config.locked
    }

    /// Locks or unlocks the reveal state against folding.
    pub fn set_locked(&mut self, locked: bool) {
        if self.config.locked == locked {
            return;
        }
        self.config.locked = locked;
        self.events.push(FlapEvent::LockedChanged(locked));
    }

    /// Folding policy.
    #[must_use]
    pub fn fold_policy(&self) -> FoldPolicy {
        self.config.fold_policy
    }

    /// Sets the folding policy. `Auto` takes effect on the next
    /// [`allocate`](Self::allocate).
    pub fn set_fold_policy(&mut self, policy: FoldPolicy) {
        if self.config.fold_policy == policy {
            return;
        }
        self.config.fold_policy = policy;
        match policy {
            FoldPolicy::Never => self.set_folded(false),
            FoldPolicy::Always => self.set_folded(true),
            FoldPolicy::Auto => {}
        }
    }

    /// Duration of [`set_reveal_flap`](Self::set_reveal_flap) animations.
    #[must_use]
    pub fn reveal_duration(&self) -> u64 {
        self.config.reveal_duration
    }

    /// Sets the reveal duration.
    pub fn set_reveal_duration(&mut self, duration: u64) {
        self.config.reveal_duration = duration;
    }

    /// Duration of fold animations.
    #[must_use]
    pub fn fold_duration(&self) -> u64 {
        self.config.fold_duration
    }

    /// Sets the fold duration.
    pub fn set_fold_duration(&mut self, duration: u64) {
        self.config.fold_duration = duration;
    }

    /// Transition type.
    #[must_use]
    pub fn transition_type(&self) -> TransitionType {
        self.config.transition_type
    }

    /// Sets the transition type.
    pub fn set_transition_type(&mut self, transition: TransitionType) {
        self.config.transition_type = transition;
    }

    /// Edge the flap is attached to.
    #[must_use]
    pub fn flap_position(&self) -> FlapPosition {
        self.config.flap_position
    }

    /// Moves the flap to the other edge.
    pub fn set_flap_position(&mut self, position: FlapPosition) {
        self.config.flap_position = position;
        self.sync_tracker();
    }

    /// Whether a swipe may open the flap.
    #[must_use]
    pub fn swipe_to_open(&self) -> bool {
        self.config.swipe_to_open
    }

    /// Allows or forbids opening by swipe.
    pub fn set_swipe_to_open(&mut self, allow: bool) {
        self.config.swipe_to_open = allow;
    }

    /// Whether a swipe may close the flap.
    #[must_use]
    pub fn swipe_to_close(&self) -> bool {
        self.config.swipe_to_close
    }

    /// Allows or forbids closing by swipe.
    pub fn set_swipe_to_close(&mut self, allow: bool) {
        self.config.swipe_to_close = allow;
    }

    /// Main axis.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Sets the main axis.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
        self.sync_tracker();
    }

    /// Reading direction.
    #[must_use]
    pub fn text_direction(&self) -> TextDirection {
        self.config.text_direction
    }

    /// Sets the reading direction.
    pub fn set_text_direction(&mut self, direction: TextDirection) {
        self.config.text_direction = direction;
        self.sync_tracker();
    }

    /// Whether a swipe currently drives the reveal progress.
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.swipe_active
    }

    // --- animation -------------------------------------------------------

    fn animate_reveal(&mut self, to: f64, duration: u64) {
        let spec = AnimationSpec::new(self.reveal_progress, to, duration);
        if let Started::Finished(sample) = self.driver.start(Slot::Reveal, spec) {
            self.apply_sample(sample);
        }
    }

    fn animate_fold(&mut self) {
        let to = if self.folded { 1.0 } else { 0.0 };
        // A hidden flap folds instantly.
        let duration = if self.reveal_progress > 0.0 {
            self.config.fold_duration
        } else {
            0
        };
        let spec = AnimationSpec::new(self.fold_progress, to, duration);
        if let Started::Finished(sample) = self.driver.start(Slot::Fold, spec) {
            self.apply_sample(sample);
        }
    }

    fn set_reveal_progress(&mut self, progress: f64) {
        if self.reveal_progress == progress {
            return;
        }
        self.reveal_progress = progress;
        self.events.push(FlapEvent::RevealProgressChanged(progress));
    }

    fn apply_sample(&mut self, sample: Sample<Slot>) {
        match sample.key {
            Slot::Reveal => {
                self.set_reveal_progress(sample.value);
                if sample.done && self.schedule_fold {
                    self.schedule_fold = false;
                    self.animate_fold();
                }
            }
            Slot::Fold => {
                if self.fold_progress != sample.value {
                    self.fold_progress = sample.value;
                    self.events.push(FlapEvent::FoldProgressChanged(sample.value));
                }
            }
        }
    }

    /// Advances the reveal and fold animations to `now` (milliseconds).
    pub fn tick(&mut self, now: u64) {
        self.driver.begin_frame(now);
        while let Some(sample) = self.driver.next_sample() {
            self.apply_sample(sample);
        }
    }

    /// Whether an animation is running and [`tick`](Self::tick) should be
    /// called on the next frame.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        !self.driver.is_empty()
    }

    /// Takes the queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<FlapEvent> {
        core::mem::take(&mut self.events)
    }

    // --- layout ----------------------------------------------------------

    fn layout_state(&self) -> LayoutState {
        LayoutState {
            reveal_progress: self.reveal_progress,
            fold_progress: self.fold_progress,
            transition: self.config.transition_type,
            position: self.config.flap_position,
            orientation: self.config.orientation,
            direction: self.config.text_direction,
        }
    }

    /// Combined size request along `orientation`, given the children's
    /// measurements along that same axis.
    #[must_use]
    pub fn measure(&self, orientation: Orientation, measurements: &FlapMeasurements) -> SizeRequest {
        layout::measure(
            measurements,
            orientation == self.config.orientation,
            self.config.fold_policy,
            self.config.locked,
            &self.layout_state(),
        )
    }

    /// Lays the children out in a container of `size`.
    ///
    /// `measurements` are along the main axis. Under [`FoldPolicy::Auto`] this
    /// first folds or unfolds depending on whether the children's minimum
    /// sizes fit.
    pub fn allocate(&mut self, size: Size, measurements: &FlapMeasurements) -> FlapLayout {
        if self.config.fold_policy == FoldPolicy::Auto {
            let (extent, _) = layout::main_axis(size, self.config.orientation);
            self.set_folded(extent < measurements.min_total());
        }
        let layout = layout::compute(measurements, size, &self.layout_state());
        self.allocation = Some(Allocation {
            size,
            layout,
            has_flap: measurements.flap.is_some(),
        });
        layout
    }

    // --- pointer input ---------------------------------------------------

    /// Starts tracking a pointer pressed at `pos` inside `bounds`.
    ///
    /// A swipe still in progress is cancelled first. Returns `false` if
    /// swiping is disabled in both directions or `pos` is outside the swipe
    /// area.
    pub fn press(&mut self, bounds: Rect, pos: Point, now: u64) -> bool {
        if !self.config.swipe_to_open && !self.config.swipe_to_close {
            self.cancel_swipe();
            return false;
        }
        self.with_tracker(|tracker, this| tracker.press(this, bounds, pos, now))
    }

    /// Feeds pointer motion to the swipe tracker.
    pub fn motion(&mut self, pos: Point, now: u64) {
        self.with_tracker(|tracker, this| tracker.motion(this, pos, now));
    }

    /// Ends a pointer swipe.
    pub fn release(&mut self, now: u64) {
        self.with_tracker(|tracker, this| tracker.release(this, now));
    }

    /// Abandons a pointer swipe.
    pub fn cancel_swipe(&mut self) {
        self.with_tracker(|tracker, this| tracker.cancel(this));
    }

    fn with_tracker<R>(&mut self, f: impl FnOnce(&mut SwipeTracker, &mut Self) -> R) -> R {
        let mut tracker = core::mem::take(&mut self.tracker);
        let result = f(&mut tracker, self);
        self.tracker = tracker;
        result
    }
}

impl Swipeable for Flap {
    fn distance(&self) -> f64 {
        let Some(alloc) = self.allocation.as_ref().filter(|a| a.has_flap) else {
            return 0.0;
        };
        let orientation = self.config.orientation;
        layout::swipe_distance(
            layout::main_extent(alloc.layout.flap, orientation),
            layout::main_extent(alloc.layout.separator, orientation),
            &self.layout_state(),
        )
    }

    fn snap_points(&self) -> SnapPoints {
        let can_open =
            self.reveal_progress > 0.0 || self.config.swipe_to_open || self.swipe_active;
        let can_close =
            self.reveal_progress < 1.0 || self.config.swipe_to_close || self.swipe_active;
        let mut points = SnapPoints::new();
        match (can_open, can_close) {
            (true, true) => points.extend([0.0, 1.0]),
            (true, false) => points.push(1.0),
            (false, true) => points.push(0.0),
            (false, false) => {}
        }
        points
    }

    fn progress(&self) -> f64 {
        self.reveal_progress
    }

    fn cancel_progress(&self) -> f64 {
        if self.reveal_progress >= 0.5 { 1.0 } else { 0.0 }
    }

    fn swipe_area(&self, _direction: NavigationDirection, is_drag: bool, bounds: Rect) -> Rect {
        let Some(alloc) = self.allocation.as_ref().filter(|a| a.has_flap) else {
            return Rect::ZERO;
        };
        layout::swipe_area(&alloc.layout, alloc.size, is_drag, &self.layout_state())
            + bounds.origin().to_vec2()
    }

    fn switch_child(&mut self, index: usize, duration: u64) {
        self.events.push(FlapEvent::ChildSwitched { index, duration });
        self.set_reveal_flap_with(index > 0, duration);
    }
}

impl SwipeHandler for Flap {
    fn begin_swipe(&mut self, direction: NavigationDirection, is_direct: bool) -> bool {
        if self.reveal_progress <= 0.0 && !self.config.swipe_to_open {
            return false;
        }
        if self.reveal_progress >= 1.0 && !self.config.swipe_to_close {
            return false;
        }
        self.driver.stop(Slot::Reveal);
        self.swipe_active = true;
        #[cfg(feature = "tracing")]
        tracing::debug!(?direction, is_direct, "flap swipe begin");
        #[cfg(not(feature = "tracing"))]
        let _ = (direction, is_direct);
        true
    }

    fn update_swipe(&mut self, progress: f64) {
        if self.swipe_active {
            self.set_reveal_progress(progress);
        }
    }

    fn end_swipe(&mut self, duration: u64, to: f64) {
        if !self.swipe_active {
            return;
        }
        self.swipe_active = false;
        let reveal = to > 0.0;
        if reveal == self.config.reveal_flap {
            self.animate_reveal(to, duration);
        } else {
            self.set_reveal_flap_with(reveal, duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FlapConfig {
        FlapConfig::default().with_fold_policy(FoldPolicy::Never)
    }

    fn drain_ticks(flap: &mut Flap, times: &[u64]) {
        for &now in times {
            flap.tick(now);
        }
    }

    #[test]
    fn starts_revealed_and_unfolded() {
        let flap = Flap::new();
        assert_eq!(flap.reveal_progress(), 1.0);
        assert_eq!(flap.fold_progress(), 0.0);
        assert!(!flap.is_folded());
        assert!(!flap.needs_frame());
    }

    #[test]
    fn hiding_animates_reveal_progress() {
        let mut flap = Flap::with_config(config()).unwrap();
        flap.set_reveal_flap(false);
        assert_eq!(flap.drain_events(), [FlapEvent::RevealFlapChanged(false)]);
        assert!(flap.needs_frame());

        flap.tick(0);
        assert_eq!(flap.reveal_progress(), 1.0);
        flap.tick(125);
        let mid = flap.reveal_progress();
        assert!(mid > 0.0 && mid < 1.0, "mid-animation progress {mid}");
        flap.tick(250);
        assert_eq!(flap.reveal_progress(), 0.0);
        assert!(!flap.needs_frame());
    }

    #[test]
    fn unlocked_fold_hides_then_folds() {
        let mut flap = Flap::with_config(config()).unwrap();
        flap.set_fold_policy(FoldPolicy::Always);
        assert!(flap.is_folded());
        assert!(!flap.reveal_flap());
        assert_eq!(flap.fold_progress(), 0.0);

        drain_ticks(&mut flap, &[0, 100]);
        assert_eq!(flap.fold_progress(), 0.0);
        flap.tick(250);
        assert_eq!(flap.reveal_progress(), 0.0);
        // The flap is hidden by now, so the fold completes at once.
        assert_eq!(flap.fold_progress(), 1.0);
        assert!(!flap.needs_frame());
    }

    #[test]
    fn locked_fold_keeps_reveal_state() {
        let mut flap = Flap::with_config(config().with_locked(true)).unwrap();
        flap.set_fold_policy(FoldPolicy::Always);
        assert!(flap.reveal_flap());
        drain_ticks(&mut flap, &[0, 250]);
        assert_eq!(flap.fold_progress(), 1.0);
        assert_eq!(flap.reveal_progress(), 1.0);
    }

    #[test]
    fn folding_a_hidden_flap_is_immediate() {
        let mut flap = Flap::with_config(config().with_reveal_flap(false)).unwrap();
        flap.set_fold_policy(FoldPolicy::Always);
        assert_eq!(flap.fold_progress(), 1.0);
        assert!(!flap.needs_frame());
    }

    #[test]
    fn unfolding_reveals_again() {
        let config = config()
            .with_fold_policy(FoldPolicy::Always)
            .with_reveal_flap(false);
        let mut flap = Flap::with_config(config).unwrap();
        flap.set_fold_policy(FoldPolicy::Never);
        assert!(flap.reveal_flap());
        drain_ticks(&mut flap, &[0, 250]);
        assert_eq!(flap.reveal_progress(), 1.0);
        assert_eq!(flap.fold_progress(), 0.0);
    }

    #[test]
    fn swipe_policy_gates_begin() {
        let mut flap = Flap::with_config(config().with_swipe_to_close(false)).unwrap();
        assert!(!flap.begin_swipe(NavigationDirection::Back, true));
        flap.set_swipe_to_close(true);
        assert!(flap.begin_swipe(NavigationDirection::Back, true));
        assert!(flap.is_swiping());
    }

    #[test]
    fn snap_points_follow_permissions() {
        let mut flap = Flap::with_config(config().with_reveal_flap(false)).unwrap();
        assert_eq!(flap.snap_points().as_slice(), &[0.0, 1.0]);
        flap.set_swipe_to_open(false);
        assert_eq!(flap.snap_points().as_slice(), &[0.0]);
    }

    #[test]
    fn cancel_progress_rounds() {
        let mut flap = Flap::with_config(config()).unwrap();
        assert!(flap.begin_swipe(NavigationDirection::Back, true));
        flap.update_swipe(0.5);
        assert_eq!(flap.cancel_progress(), 1.0);
        flap.update_swipe(0.49);
        assert_eq!(flap.cancel_progress(), 0.0);
    }

    #[test]
    fn swipe_past_half_flips_reveal_flap() {
        let mut flap = Flap::with_config(config()).unwrap();
        flap.begin_swipe(NavigationDirection::Back, true);
        flap.update_swipe(0.3);
        flap.drain_events();
        flap.end_swipe(0, 0.0);
        assert!(!flap.reveal_flap());
        assert_eq!(flap.reveal_progress(), 0.0);
        assert_eq!(
            flap.drain_events(),
            [
                FlapEvent::RevealFlapChanged(false),
                FlapEvent::RevealProgressChanged(0.0),
            ]
        );
    }

    #[test]
    fn cancelled_swipe_returns_without_flipping() {
        let mut flap = Flap::with_config(config()).unwrap();
        flap.begin_swipe(NavigationDirection::Back, true);
        flap.update_swipe(0.8);
        flap.end_swipe(100, 1.0);
        assert!(flap.reveal_flap());
        drain_ticks(&mut flap, &[0, 100]);
        assert_eq!(flap.reveal_progress(), 1.0);
    }

    #[test]
    fn update_without_begin_is_ignored() {
        let mut flap = Flap::with_config(config()).unwrap();
        flap.update_swipe(0.2);
        flap.end_swipe(0, 0.0);
        assert_eq!(flap.reveal_progress(), 1.0);
        assert!(flap.drain_events().is_empty());
    }

    #[test]
    fn switch_child_reports_and_moves() {
        let mut flap = Flap::with_config(config()).unwrap();
        flap.switch_child(0, 0);
        assert_eq!(flap.reveal_progress(), 0.0);
        assert_eq!(
            flap.drain_events()[0],
            FlapEvent::ChildSwitched {
                index: 0,
                duration: 0
            }
        );
    }

    #[test]
    fn distance_needs_an_allocated_flap() {
        let mut flap = Flap::with_config(config()).unwrap();
        assert_eq!(Swipeable::distance(&flap), 0.0);
        let m = FlapMeasurements {
            flap: Some(SizeRequest {
                min: 120.0,
                natural: 120.0,
                expand: false,
            }),
            content: Some(SizeRequest {
                min: 100.0,
                natural: 100.0,
                expand: true,
            }),
            separator: 2.0,
        };
        flap.allocate(Size::new(500.0, 100.0), &m);
        assert_eq!(Swipeable::distance(&flap), 122.0);
    }
}
