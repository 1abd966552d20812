// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel container: child bookkeeping, navigation and frame pumping.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect, Size};
use understory_animation::{AnimationDriver, AnimationSpec, Sample, Started};
use understory_swipe::{
    InputSource, NavigationDirection, Orientation, SnapPoints, SwipeHandler, SwipeTracker,
    Swipeable, TextDirection,
};
use understory_timing::TimerQueue;

use crate::config::{CarouselConfig, ConfigError, is_valid_spacing};
use crate::coordinator::{Coordinator, Phase};
use crate::event::{CarouselEvent, Wakeup};
use crate::layout::{self, ChildPlacement, Measure, SizeRequest};
use crate::position::{PositionEngine, update_shift_flag};
use crate::registry::{ChildRecord, ChildRegistry, RecordId};

/// Shortest pause between two wheel-driven page changes, in milliseconds.
pub const MIN_SCROLL_COOLDOWN: u64 = 250;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Slot {
    Scroll,
    Resize(RecordId),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Timeout {
    ScrollCooldown,
}

/// A paginated container whose pages scroll along one axis.
///
/// `H` is a cheap handle to a page (an id, an index into the host's widget
/// arena, ...). The carousel never owns pages; it tracks their order, reveal
/// state and snap points, and turns navigation requests, swipes and frame
/// ticks into a single scroll position.
///
/// Changes are reported as [`CarouselEvent`]s queued until
/// [`drain_events`](Self::drain_events).
#[derive(Clone, Debug)]
pub struct Carousel<H> {
    config: CarouselConfig,
    registry: ChildRegistry<H>,
    position: PositionEngine,
    coordinator: Coordinator,
    driver: AnimationDriver<Slot>,
    timers: TimerQueue<Timeout>,
    // Set while the wheel cooldown timer is pending.
    wheel_cooldown: bool,
    tracker: SwipeTracker,
    distance: f64,
    events: Vec<CarouselEvent>,
}

impl<H: Copy + PartialEq + Debug> Default for Carousel<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + PartialEq + Debug> Carousel<H> {
    /// Creates an empty carousel with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(CarouselConfig::default())
    }

    /// Creates an empty carousel with `config`.
    pub fn with_config(config: CarouselConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CarouselConfig) -> Self {
        let mut carousel = Self {
            tracker: SwipeTracker::new(config.orientation),
            config,
            registry: ChildRegistry::default(),
            position: PositionEngine::default(),
            coordinator: Coordinator::default(),
            driver: AnimationDriver::new(),
            timers: TimerQueue::new(),
            wheel_cooldown: false,
            distance: 0.0,
            events: Vec::new(),
        };
        carousel.sync_tracker();
        carousel
    }

    fn sync_tracker(&mut self) {
        let horizontal = self.config.orientation == Orientation::Horizontal;
        self.tracker.set_orientation(self.config.orientation);
        self.tracker
            .set_reversed(horizontal && self.config.text_direction == TextDirection::Rtl);
        self.tracker
            .set_allow_long_swipes(self.config.allow_long_swipes);
    }

    // --- configuration ---------------------------------------------------

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Gap between pages, in pixels.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.config.spacing
    }

    /// Sets the gap between pages.
    ///
    /// # Panics
    ///
    /// Panics if `spacing` is negative, infinite or NaN.
    pub fn set_spacing(&mut self, spacing: f64) {
        assert!(
            is_valid_spacing(spacing),
            "spacing must be finite and non-negative, got {spacing}"
        );
        if self.config.spacing == spacing {
            return;
        }
        self.config.spacing = spacing;
        self.events.push(CarouselEvent::SpacingChanged(spacing));
    }

    /// Duration of navigation animations, in milliseconds.
    #[must_use]
    pub fn animation_duration(&self) -> u64 {
        self.config.animation_duration
    }

    /// Sets the duration of navigation animations.
    pub fn set_animation_duration(&mut self, duration: u64) {
        if self.config.animation_duration == duration {
            return;
        }
        self.config.animation_duration = duration;
        self.events
            .push(CarouselEvent::AnimationDurationChanged(duration));
    }

    /// Duration of page insert/remove animations, in milliseconds.
    #[must_use]
    pub fn reveal_duration(&self) -> u64 {
        self.config.reveal_duration
    }

    /// Sets the duration of page insert/remove animations.
    ///
    /// Running reveal animations keep their duration.
    pub fn set_reveal_duration(&mut self, duration: u64) {
        if self.config.reveal_duration == duration {
            return;
        }
        self.config.reveal_duration = duration;
        self.events
            .push(CarouselEvent::RevealDurationChanged(duration));
    }

    /// Whether user input may navigate.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.config.interactive
    }

    /// Enables or disables user navigation. Programmatic scrolling is unaffected.
    pub fn set_interactive(&mut self, interactive: bool) {
        if self.config.interactive == interactive {
            return;
        }
        self.config.interactive = interactive;
        self.events
            .push(CarouselEvent::InteractiveChanged(interactive));
    }

    /// Whether one swipe may travel past the adjacent pages.
    #[must_use]
    pub fn allow_long_swipes(&self) -> bool {
        self.config.allow_long_swipes
    }

    /// Allows or forbids swipes past the adjacent pages.
    pub fn set_allow_long_swipes(&mut self, allow: bool) {
        self.config.allow_long_swipes = allow;
        self.sync_tracker();
    }

    /// Whether pages can be dragged with a mouse.
    #[must_use]
    pub fn allow_mouse_drag(&self) -> bool {
        self.config.allow_mouse_drag
    }

    /// Allows or forbids dragging with a mouse.
    pub fn set_allow_mouse_drag(&mut self, allow: bool) {
        self.config.allow_mouse_drag = allow;
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

    /// Sets the reading direction; right to left mirrors horizontal carousels.
    pub fn set_text_direction(&mut self, direction: TextDirection) {
        self.config.text_direction = direction;
        self.sync_tracker();
    }

    // --- pages -----------------------------------------------------------

    /// Inserts `handle` as page `position`, appending if `position` is past
    /// the end. The page grows in over the reveal duration.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is already a page of this carousel.
    pub fn insert(&mut self, handle: H, position: usize) {
        assert!(
            self.registry.find(&handle).is_none(),
            "{handle:?} is already a page of this carousel"
        );
        let id = self.registry.insert(handle, position);
        #[cfg(feature = "tracing")]
        tracing::debug!(?handle, position, "carousel insert");
        self.events
            .push(CarouselEvent::NPagesChanged(self.n_pages()));
        self.animate_child_resize(id, 1.0, self.config.reveal_duration);
        self.settle();
    }

    /// Inserts `handle` as the first page.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is already a page of this carousel.
    pub fn prepend(&mut self, handle: H) {
        self.insert(handle, 0);
    }

    /// Inserts `handle` as the last page.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is already a page of this carousel.
    pub fn append(&mut self, handle: H) {
        self.insert(handle, usize::MAX);
    }

    /// Removes `handle`.
    ///
    /// The page stops counting as a page immediately but keeps taking space
    /// while it shrinks over the reveal duration.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is not a page of this carousel.
    pub fn remove(&mut self, handle: H) {
        let Some(index) = self.registry.find(&handle) else {
            panic!("{handle:?} is not a page of this carousel");
        };
        let record = &mut self.registry.records_mut()[index];
        record.removing = true;
        let id = record.id();
        #[cfg(feature = "tracing")]
        tracing::debug!(?handle, "carousel remove");
        self.events
            .push(CarouselEvent::NPagesChanged(self.n_pages()));
        self.animate_child_resize(id, 0.0, self.config.reveal_duration);
        self.settle();
    }

    /// Moves `handle` to page `position`, or to the end if `position` is past
    /// it.
    ///
    /// The position is shifted so the page being shown stays in place.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is not a page of this carousel.
    pub fn reorder(&mut self, handle: H, position: usize) {
        let Some(from) = self.registry.find(&handle) else {
            panic!("{handle:?} is not a page of this carousel");
        };
        let target = position.min(self.n_pages() - 1);
        if self.registry.page_index_of(from) == target {
            return;
        }
        let Some(to) = self.registry.nth(target) else {
            return;
        };

        let closest_point = self.closest_snap_point();
        let records = self.registry.records();
        let old_point = records[from].snap_point;
        let size = records[from].size;
        let displaced = &records[to];
        let new_point = if to > from {
            displaced.snap_point
        } else {
            displaced.snap_point - displaced.size + size
        };

        self.registry.move_record(from, to);
        self.registry.recompute_snap_points();
        #[cfg(feature = "tracing")]
        tracing::debug!(?handle, position = target, "carousel reorder");

        if closest_point == old_point {
            self.shift_position(new_point - old_point);
        } else if old_point > closest_point && closest_point >= new_point {
            self.shift_position(size);
        } else if new_point >= closest_point && closest_point > old_point {
            self.shift_position(-size);
        }
    }

    /// Number of pages, not counting pages being removed.
    #[must_use]
    pub fn n_pages(&self) -> usize {
        self.registry.count(false)
    }

    /// Page at index `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= self.n_pages()`.
    #[must_use]
    pub fn nth_page(&self, n: usize) -> H {
        match self.get_nth_page(n) {
            Some(handle) => handle,
            None => panic!("page index {n} out of range for {} pages", self.n_pages()),
        }
    }

    /// Page at index `n`, if any.
    #[must_use]
    pub fn get_nth_page(&self, n: usize) -> Option<H> {
        let index = self.registry.nth(n)?;
        Some(*self.registry.records()[index].handle())
    }

    /// Index of `handle` among the pages.
    #[must_use]
    pub fn page_index(&self, handle: &H) -> Option<usize> {
        self.registry.index_of(handle, false)
    }

    /// All records in display order, including pages still shrinking away.
    #[must_use]
    pub fn records(&self) -> &[ChildRecord<H>] {
        self.registry.records()
    }

    // --- position --------------------------------------------------------

    /// Current scroll position; `1.0` is one page.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position.get()
    }

    /// Moves to `position`, clamped to [`range`](Self::range).
    pub fn set_position(&mut self, position: f64) {
        if self.position.set(position, &mut self.registry) {
            self.events
                .push(CarouselEvent::PositionChanged(self.position.get()));
        }
    }

    fn shift_position(&mut self, delta: f64) {
        self.set_position(self.position.get() + delta);
        self.tracker.shift_position(delta);
        self.events.push(CarouselEvent::PositionShifted(delta));
    }

    /// Valid position range.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.registry.range()
    }

    /// Pixels between the starts of two adjacent pages, as of the last
    /// [`allocate`](Self::allocate).
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Snap points of the pages.
    #[must_use]
    pub fn snap_points(&self) -> SnapPoints {
        self.registry.snap_points()
    }

    /// Snap point nearest the current position, counting pages being added
    /// or removed; `0.0` when empty.
    #[must_use]
    pub fn closest_snap_point(&self) -> f64 {
        self.registry
            .closest_at(self.position.get(), true, true)
            .map_or(0.0, |i| self.registry.records()[i].snap_point)
    }

    /// Page whose snap point is nearest `position`.
    #[must_use]
    pub fn closest_page_at(&self, position: f64) -> Option<H> {
        let index = self.registry.closest_at(position, true, false)?;
        Some(*self.registry.records()[index].handle())
    }

    /// Page at `position` after clamping it to the valid range.
    #[must_use]
    pub fn page_at_position(&self, position: f64) -> Option<H> {
        let index = self.page_record_at(position)?;
        Some(*self.registry.records()[index].handle())
    }

    fn page_record_at(&self, position: f64) -> Option<usize> {
        let (lower, upper) = self.registry.range();
        self.registry
            .closest_at(position.clamp(lower, upper), true, false)
    }

    /// Index of the page at the current position.
    #[must_use]
    pub fn current_page_index(&self) -> Option<usize> {
        let index = self.page_record_at(self.position.get())?;
        Some(self.registry.page_index_of(index))
    }

    // --- navigation ------------------------------------------------------

    /// Scrolls to `handle` over the configured animation duration.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is not a page of this carousel.
    pub fn scroll_to(&mut self, handle: H) {
        self.scroll_to_full(handle, self.config.animation_duration);
    }

    /// Scrolls to `handle` over `duration` milliseconds.
    ///
    /// A zero duration moves synchronously: the position and the
    /// [`PageChanged`](CarouselEvent::PageChanged) event are updated before
    /// this returns. A running scroll is replaced and continues from the
    /// current position.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is not a page of this carousel.
    pub fn scroll_to_full(&mut self, handle: H, duration: u64) {
        let Some(index) = self.registry.find(&handle) else {
            panic!("{handle:?} is not a page of this carousel");
        };
        let id = self.registry.records()[index].id();
        self.events.push(CarouselEvent::ChildSwitched {
            index: self.registry.page_index_of(index),
            duration,
        });
        self.scroll_to_record(id, duration);
    }

    /// Whether a scroll animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.coordinator.phase() == Phase::Animating
    }

    /// Who currently drives the position.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.coordinator.phase()
    }

    /// Stops a running scroll animation where it is.
    ///
    /// Does nothing (and reports nothing) if no scroll is running.
    pub fn stop_animation(&mut self) {
        if self.coordinator.finish_scroll() {
            self.driver.stop(Slot::Scroll);
            #[cfg(feature = "tracing")]
            tracing::debug!(position = self.position.get(), "carousel scroll stopped");
            self.events.push(CarouselEvent::AnimationStopped);
        }
    }

    /// Scrolls `delta` pages from the current one, clamped to the first and
    /// last page.
    ///
    /// Returns `false` if the carousel is not interactive or has no pages.
    pub fn step(&mut self, delta: isize) -> bool {
        self.config.interactive && self.navigate(delta)
    }

    /// Handles a discrete scroll (mouse wheel) event at time `now`.
    ///
    /// Moves one page in the direction of the delta and then ignores further
    /// wheel events for `max(animation_duration, MIN_SCROLL_COOLDOWN)`.
    /// Touchpad scrolls are left to the swipe tracker. Mice may scroll
    /// vertically whatever the orientation.
    ///
    /// Returns `true` if the event was consumed.
    pub fn scroll_step(&mut self, dx: f64, dy: f64, source: InputSource, now: u64) -> bool {
        if self.wheel_cooldown || !self.config.interactive || source == InputSource::Touchpad {
            return false;
        }
        let allow_vertical = source == InputSource::Mouse;
        let mut delta = 0;
        if self.config.orientation == Orientation::Vertical || allow_vertical {
            delta = step_sign(dy);
        }
        if self.config.orientation == Orientation::Horizontal && delta == 0 {
            delta = step_sign(dx);
        }
        if delta == 0 || !self.navigate(delta) {
            return false;
        }
        let cooldown = self.config.animation_duration.max(MIN_SCROLL_COOLDOWN);
        self.timers
            .schedule_after(now, cooldown, Timeout::ScrollCooldown);
        self.wheel_cooldown = true;
        true
    }

    fn navigate(&mut self, delta: isize) -> bool {
        let Some(current) = self.current_page_index() else {
            return false;
        };
        let target = current
            .saturating_add_signed(delta)
            .min(self.n_pages() - 1);
        let Some(index) = self.registry.nth(target) else {
            return false;
        };
        let id = self.registry.records()[index].id();
        self.scroll_to_record(id, self.config.animation_duration);
        true
    }

    fn scroll_to_record(&mut self, target: RecordId, duration: u64) {
        if self.coordinator.phase() == Phase::Swiping {
            // The pointer no longer drives the position.
            self.tracker.reset();
            #[cfg(feature = "tracing")]
            tracing::debug!("carousel swipe superseded by scroll");
        }
        let source = self.position.get();
        self.coordinator.begin_scroll(source, target);
        #[cfg(feature = "tracing")]
        tracing::debug!(source, ?target, duration, "carousel scroll");
        match self
            .driver
            .start(Slot::Scroll, AnimationSpec::new(0.0, 1.0, duration))
        {
            Started::Running(_) => {}
            Started::Finished(sample) => self.apply_sample(sample),
        }
    }

    fn animate_child_resize(&mut self, id: RecordId, to: f64, duration: u64) {
        let Some(index) = self.registry.position_of(id) else {
            return;
        };
        update_shift_flag(&mut self.registry, index, self.position.get());
        let from = self.registry.records()[index].size;
        match self
            .driver
            .start(Slot::Resize(id), AnimationSpec::new(from, to, duration))
        {
            Started::Running(_) => {}
            Started::Finished(sample) => self.apply_sample(sample),
        }
    }

    fn apply_sample(&mut self, sample: Sample<Slot>) {
        match sample.key {
            Slot::Scroll => {
                if let Some(position) = self
                    .coordinator
                    .scroll_position(sample.value, &self.registry)
                {
                    self.set_position(position);
                }
                if sample.done && self.coordinator.finish_scroll() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(position = self.position.get(), "carousel scroll done");
                    if let Some(page) = self.current_page_index() {
                        self.events.push(CarouselEvent::PageChanged(page));
                    }
                }
            }
            Slot::Resize(id) => {
                let Some(record) = self.registry.get_mut(id) else {
                    return;
                };
                let delta = sample.value - record.size;
                record.size = sample.value;
                let shift = record.shift_position;
                let removing = record.removing;
                if sample.done {
                    record.adding = false;
                    if removing {
                        self.registry.remove(id);
                    }
                }
                if shift {
                    self.position.accumulate(delta);
                }
            }
        }
    }

    // --- frame pumping ---------------------------------------------------

    /// Advances timers and animations to `now`, then settles the layout state.
    pub fn tick(&mut self, now: u64) {
        while let Some((_, timeout)) = self.timers.pop_expired(now) {
            match timeout {
                Timeout::ScrollCooldown => self.wheel_cooldown = false,
            }
        }
        self.driver.begin_frame(now);
        while let Some(sample) = self.driver.next_sample() {
            self.apply_sample(sample);
        }
        self.settle();
    }

    /// When [`tick`](Self::tick) should next be called, if at all.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Wakeup> {
        if !self.driver.is_empty() {
            return Some(Wakeup::NextFrame);
        }
        self.timers.next_deadline().map(Wakeup::At)
    }

    // Recomputes snap points, then applies the accumulated resize shift.
    fn settle(&mut self) {
        self.registry.recompute_snap_points();
        let shift = self.position.take_shift();
        if shift != 0.0 {
            self.shift_position(shift);
            return;
        }
        let position = self.position.get();
        let (lower, upper) = self.registry.range();
        if position < lower || position > upper {
            self.set_position(position);
        }
    }

    /// Takes the queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        core::mem::take(&mut self.events)
    }

    // --- layout ----------------------------------------------------------

    /// Combined size request of the pages along `orientation`.
    pub fn measure<M: Measure<H> + ?Sized>(
        &self,
        orientation: Orientation,
        for_size: f64,
        measure: &mut M,
    ) -> SizeRequest {
        layout::measure_pages(&self.registry, orientation, for_size, measure)
    }

    /// Lays the pages out in a carousel of `size`.
    ///
    /// Updates [`distance`](Self::distance) from the largest page and returns
    /// where each page (not those being removed) goes.
    pub fn allocate<M: Measure<H> + ?Sized>(
        &mut self,
        size: Size,
        measure: &mut M,
    ) -> Vec<ChildPlacement<H>> {
        self.settle();
        let page = layout::page_extent(&self.registry, self.config.orientation, size, measure);
        self.distance = page + self.config.spacing;
        layout::place(
            &self.registry,
            self.config.orientation,
            self.config.text_direction,
            size,
            page,
            self.distance,
            self.position.get(),
        )
    }

    // --- pointer input ---------------------------------------------------

    /// Starts tracking a pointer pressed at `pos` inside `bounds`.
    ///
    /// Returns `false` if the press cannot start a swipe (not interactive,
    /// touchpad, mouse with mouse dragging disabled, outside the swipe area).
    pub fn press(&mut self, bounds: Rect, pos: Point, source: InputSource, now: u64) -> bool {
        let mouse_blocked = source == InputSource::Mouse && !self.config.allow_mouse_drag;
        if !self.config.interactive || source == InputSource::Touchpad || mouse_blocked {
            self.cancel_swipe();
            return false;
        }
        self.with_tracker(|tracker, this| tracker.press(this, bounds, pos, now))
    }

    /// Feeds pointer motion to the swipe tracker.
    pub fn motion(&mut self, pos: Point, now: u64) {
        self.with_tracker(|tracker, this| tracker.motion(this, pos, now));
    }

    /// Ends a pointer swipe, settling on a page.
    pub fn release(&mut self, now: u64) {
        self.with_tracker(|tracker, this| tracker.release(this, now));
    }

    /// Abandons a pointer swipe, returning to the nearest page.
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

fn step_sign(delta: f64) -> isize {
    if delta > 0.0 {
        1
    } else if delta < 0.0 {
        -1
    } else {
        0
    }
}

impl<H: Copy + PartialEq + Debug> Swipeable for Carousel<H> {
    fn distance(&self) -> f64 {
        self.distance
    }

    fn snap_points(&self) -> SnapPoints {
        self.registry.snap_points()
    }

    fn progress(&self) -> f64 {
        self.position.get()
    }

    fn cancel_progress(&self) -> f64 {
        self.closest_snap_point()
    }

    fn switch_child(&mut self, index: usize, duration: u64) {
        let Some(record) = self.registry.nth(index) else {
            panic!("page index {index} out of range for {} pages", self.n_pages());
        };
        let id = self.registry.records()[record].id();
        self.events
            .push(CarouselEvent::ChildSwitched { index, duration });
        self.scroll_to_record(id, duration);
    }
}

impl<H: Copy + PartialEq + Debug> SwipeHandler for Carousel<H> {
    fn begin_swipe(&mut self, direction: NavigationDirection, is_direct: bool) -> bool {
        if !self.config.interactive {
            return false;
        }
        if self.coordinator.begin_swipe() {
            self.driver.stop(Slot::Scroll);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?direction, is_direct, "carousel swipe begin");
        #[cfg(not(feature = "tracing"))]
        let _ = (direction, is_direct);
        true
    }

    fn update_swipe(&mut self, progress: f64) {
        if self.coordinator.phase() == Phase::Swiping {
            self.set_position(progress);
        }
    }

    fn end_swipe(&mut self, duration: u64, to: f64) {
        if self.coordinator.phase() != Phase::Swiping {
            return;
        }
        self.coordinator.end_swipe();
        if let Some(index) = self.page_record_at(to) {
            let id = self.registry.records()[index].id();
            self.scroll_to_record(id, duration);
        }
    }
}
