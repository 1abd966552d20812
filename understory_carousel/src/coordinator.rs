// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbitration between scroll animations and swipe gestures.
//!
//! At most one of them writes the position at a time. Resize animations are
//! not tracked here: they only feed the shift accumulator.

use understory_animation::lerp;

use crate::registry::{ChildRegistry, RecordId};

/// Who currently drives the carousel position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing; the position only moves to compensate for resizing pages.
    #[default]
    Idle,
    /// A scroll animation towards a page.
    Animating,
    /// A swipe gesture.
    Swiping,
}

#[derive(Copy, Clone, Debug)]
struct ScrollAnimation {
    source: f64,
    target: RecordId,
}

#[derive(Copy, Clone, Debug, Default)]
enum State {
    #[default]
    Idle,
    Animating(ScrollAnimation),
    Swiping,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Coordinator {
    state: State,
}

impl Coordinator {
    pub(crate) fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Animating(_) => Phase::Animating,
            State::Swiping => Phase::Swiping,
        }
    }

    /// Enters `Animating` from any phase, replacing a previous scroll.
    pub(crate) fn begin_scroll(&mut self, source: f64, target: RecordId) {
        self.state = State::Animating(ScrollAnimation { source, target });
    }

    /// Position for an animation progress `value` in `[0, 1]`.
    ///
    /// The target is followed by record, so the result tracks its snap point
    /// as it moves. Returns `None` when not animating or once the target
    /// record is gone.
    pub(crate) fn scroll_position<H>(&self, value: f64, registry: &ChildRegistry<H>) -> Option<f64> {
        let State::Animating(anim) = self.state else {
            return None;
        };
        let target = registry.get(anim.target)?;
        Some(lerp(anim.source, target.snap_point, value))
    }

    /// Leaves `Animating`; returns `false` if no scroll was running.
    pub(crate) fn finish_scroll(&mut self) -> bool {
        if matches!(self.state, State::Animating(_)) {
            self.state = State::Idle;
            true
        } else {
            false
        }
    }

    /// Enters `Swiping`; returns `true` if a scroll animation was superseded.
    pub(crate) fn begin_swipe(&mut self) -> bool {
        let superseded = matches!(self.state, State::Animating(_));
        self.state = State::Swiping;
        superseded
    }

    /// Leaves `Swiping`. The caller then starts the settle animation.
    pub(crate) fn end_swipe(&mut self) {
        if matches!(self.state, State::Swiping) {
            self.state = State::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_follows_live_snap_point() {
        let mut reg = ChildRegistry::default();
        reg.insert('a', usize::MAX);
        let target = reg.insert('b', usize::MAX);
        for record in reg.records_mut() {
            record.size = 1.0;
        }
        reg.recompute_snap_points();

        let mut coord = Coordinator::default();
        coord.begin_scroll(0.0, target);
        assert_eq!(coord.scroll_position(1.0, &reg), Some(1.0));

        reg.insert('z', 0);
        reg.records_mut()[0].size = 1.0;
        reg.recompute_snap_points();
        assert_eq!(coord.scroll_position(1.0, &reg), Some(2.0));
        assert_eq!(coord.scroll_position(0.5, &reg), Some(1.0));
    }

    #[test]
    fn phases() {
        let mut coord = Coordinator::default();
        assert_eq!(coord.phase(), Phase::Idle);
        assert!(!coord.finish_scroll());

        coord.begin_scroll(0.0, RecordId::for_test(0));
        assert_eq!(coord.phase(), Phase::Animating);
        assert!(coord.begin_swipe());
        assert_eq!(coord.phase(), Phase::Swiping);
        assert!(!coord.finish_scroll());
        coord.end_swipe();
        assert_eq!(coord.phase(), Phase::Idle);
    }

    #[test]
    fn missing_target_yields_nothing() {
        let reg: ChildRegistry<char> = ChildRegistry::default();
        let mut coord = Coordinator::default();
        coord.begin_scroll(0.5, RecordId::for_test(7));
        assert_eq!(coord.scroll_position(1.0, &reg), None);
    }
}
