// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed animation driver with deferred, snapshot-based frame pumping.
//!
//! ## Usage
//!
//! 1) Call [`AnimationDriver::start`] with a caller key and an [`AnimationSpec`].
//!    Zero-duration animations complete synchronously and are returned as a
//!    finished [`Sample`] without ever being scheduled.
//! 2) On every display refresh, call [`AnimationDriver::begin_frame`] with the
//!    frame timestamp and then drain [`AnimationDriver::next_sample`] until it
//!    returns `None`, applying each sample to your own state.
//! 3) While applying a sample you may freely [`start`](AnimationDriver::start)
//!    or [`stop`](AnimationDriver::stop) animations, including the one being
//!    applied. Stopped animations are skipped for the rest of the frame; new
//!    ones are first sampled on the next frame.
//!
//! ## Minimal example
//!
//! ```
//! use understory_animation::{AnimationDriver, AnimationSpec, Easing, Started};
//!
//! let mut driver = AnimationDriver::<u8>::new();
//! let spec = AnimationSpec::new(0.0, 10.0, 100).with_easing(Easing::Linear);
//! assert!(matches!(driver.start_at(7, spec, 1_000), Started::Running(_)));
//!
//! driver.begin_frame(1_050);
//! let sample = driver.next_sample().unwrap();
//! assert_eq!((sample.key, sample.value, sample.done), (7, 5.0, false));
//! assert!(driver.next_sample().is_none());
//!
//! driver.begin_frame(1_100);
//! let sample = driver.next_sample().unwrap();
//! assert_eq!((sample.value, sample.done), (10.0, true));
//! assert!(driver.is_empty());
//! ```

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::easing::{Easing, lerp};

/// Identifies one started animation.
///
/// Ids are never reused by a driver, so a stale id can be compared against
/// [`AnimationDriver::id_for`] to detect that an animation was superseded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(u64);

/// Parameters of a single scalar animation.
#[derive(Copy, Clone, Debug)]
pub struct AnimationSpec {
    /// Value produced at the start.
    pub from: f64,
    /// Value produced on completion.
    pub to: f64,
    /// Duration in milliseconds.
    pub duration: u64,
    /// Curve applied to the elapsed-time fraction.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Creates a spec with [`Easing::EaseOutCubic`].
    #[must_use]
    pub fn new(from: f64, to: f64, duration: u64) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::EaseOutCubic,
        }
    }

    /// Replaces the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Value at `elapsed` milliseconds after start, plus whether the end was reached.
    #[must_use]
    pub fn value_at(&self, elapsed: u64) -> (f64, bool) {
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed as f64 / self.duration as f64;
        (lerp(self.from, self.to, self.easing.apply(t)), false)
    }
}

/// One value produced by the driver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample<K> {
    /// Animation that produced the value.
    pub id: AnimationId,
    /// Caller key the animation was started under.
    pub key: K,
    /// Interpolated value.
    pub value: f64,
    /// `true` exactly once per animation, on its final sample.
    pub done: bool,
}

/// Result of [`AnimationDriver::start`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Started<K> {
    /// The animation is scheduled and will be sampled from the next frame on.
    Running(AnimationId),
    /// Zero duration: the animation already completed. The contained sample
    /// carries the end value with `done == true`; apply it right away.
    Finished(Sample<K>),
}

#[derive(Clone, Debug)]
struct Entry<K> {
    key: K,
    spec: AnimationSpec,
    // Resolved on the first frame for lazily started animations.
    start_time: Option<u64>,
    last_value: f64,
}

/// Drives any number of keyed scalar animations, at most one per key.
#[derive(Clone, Debug)]
pub struct AnimationDriver<K> {
    entries: HashMap<AnimationId, Entry<K>>,
    by_key: HashMap<K, AnimationId>,
    pending: VecDeque<AnimationId>,
    frame_time: u64,
    next_id: u64,
}

impl<K> Default for AnimationDriver<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            by_key: HashMap::new(),
            pending: VecDeque::new(),
            frame_time: 0,
            next_id: 0,
        }
    }
}

impl<K: Copy + Eq + Hash + core::fmt::Debug> AnimationDriver<K> {
    /// Creates an empty driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an animation for `key` whose clock starts at the next frame.
    ///
    /// The first sample, taken at the next [`begin_frame`](Self::begin_frame),
    /// produces `spec.from`. Use this when the caller has no timestamp at hand
    /// (for example when reacting to an API call between frames).
    ///
    /// Any animation already running for `key` is cancelled first: it does
    /// not produce a final sample and its value is left wherever it was.
    pub fn start(&mut self, key: K, spec: AnimationSpec) -> Started<K> {
        self.start_inner(key, spec, None)
    }

    /// Starts an animation for `key` whose clock starts at `now`.
    ///
    /// Cancels any animation already running for `key`, like [`start`](Self::start).
    pub fn start_at(&mut self, key: K, spec: AnimationSpec, now: u64) -> Started<K> {
        self.start_inner(key, spec, Some(now))
    }

    fn start_inner(&mut self, key: K, spec: AnimationSpec, now: Option<u64>) -> Started<K> {
        self.stop(key);

        let id = AnimationId(self.next_id);
        self.next_id += 1;

        if spec.duration == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(?key, to = spec.to, "animation completed synchronously");
            return Started::Finished(Sample {
                id,
                key,
                value: spec.to,
                done: true,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ?key,
            from = spec.from,
            to = spec.to,
            duration = spec.duration,
            "animation started"
        );
        self.entries.insert(
            id,
            Entry {
                key,
                spec,
                start_time: now,
                last_value: spec.from,
            },
        );
        self.by_key.insert(key, id);
        Started::Running(id)
    }

    /// Cancels the animation running for `key`, if any.
    ///
    /// Returns the last value it produced. No completion sample is emitted and
    /// the value does not jump to the end.
    pub fn stop(&mut self, key: K) -> Option<f64> {
        let id = self.by_key.remove(&key)?;
        let entry = self.entries.remove(&id)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(?key, value = entry.last_value, "animation stopped");
        Some(entry.last_value)
    }

    /// Returns `true` if an animation is running for `key`.
    #[must_use]
    pub fn is_running(&self, key: K) -> bool {
        self.by_key.contains_key(&key)
    }

    /// Returns the id of the animation running for `key`.
    #[must_use]
    pub fn id_for(&self, key: K) -> Option<AnimationId> {
        self.by_key.get(&key).copied()
    }

    /// Returns the last value produced for `key`.
    #[must_use]
    pub fn value(&self, key: K) -> Option<f64> {
        let id = self.by_key.get(&key)?;
        self.entries.get(id).map(|e| e.last_value)
    }

    /// Number of running animations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is running, meaning no frames are needed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots the running animations for a frame at time `now`.
    ///
    /// Animations are sampled in the order they were started.
    pub fn begin_frame(&mut self, now: u64) {
        self.frame_time = now;
        let mut ids: Vec<AnimationId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        self.pending.clear();
        self.pending.extend(ids);
    }

    /// Yields the next sample of the current frame.
    ///
    /// The final sample of an animation has `done == true`; the animation is
    /// retired before the sample is returned.
    pub fn next_sample(&mut self) -> Option<Sample<K>> {
        while let Some(id) = self.pending.pop_front() {
            let Some(entry) = self.entries.get_mut(&id) else {
                continue;
            };
            let start = *entry.start_time.get_or_insert(self.frame_time);
            let elapsed = self.frame_time.saturating_sub(start);
            let (value, done) = entry.spec.value_at(elapsed);
            entry.last_value = value;
            let key = entry.key;

            #[cfg(feature = "tracing")]
            tracing::trace!(?key, value, done, "animation sample");

            if done {
                self.entries.remove(&id);
                self.by_key.remove(&key);
            }
            return Some(Sample {
                id,
                key,
                value,
                done,
            });
        }
        None
    }

    /// Cancels every animation without completion samples.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_key.clear();
        self.pending.clear();
    }
}
