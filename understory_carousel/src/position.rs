// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The authoritative scroll position and its resize-shift accumulator.

use crate::registry::ChildRegistry;

#[derive(Clone, Debug, Default)]
pub(crate) struct PositionEngine {
    position: f64,
    pending_shift: f64,
}

impl PositionEngine {
    pub(crate) fn get(&self) -> f64 {
        self.position
    }

    /// Clamps `raw` into the registry's range and stores it, then refreshes
    /// the shift flag of every resizing record.
    ///
    /// Returns `true` if the stored position changed.
    pub(crate) fn set<H>(&mut self, raw: f64, registry: &mut ChildRegistry<H>) -> bool {
        let (lower, upper) = registry.range();
        let position = raw.clamp(lower, upper);
        let changed = position != self.position;
        self.position = position;

        for index in 0..registry.records().len() {
            let record = &registry.records()[index];
            if record.adding || record.removing {
                update_shift_flag(registry, index, position);
            }
        }
        changed
    }

    /// Adds a resize delta to be applied by the next layout pass.
    pub(crate) fn accumulate(&mut self, delta: f64) {
        self.pending_shift += delta;
    }

    pub(crate) fn take_shift(&mut self) -> f64 {
        core::mem::take(&mut self.pending_shift)
    }
}

/// Decides whether the record at `index` moves the position as it resizes.
///
/// A record at or before the page closest to `position` does: its growth
/// would otherwise push that page off screen. The page being removed still
/// counts as closest, so removing the current page slides to its neighbour.
pub(crate) fn update_shift_flag<H>(registry: &mut ChildRegistry<H>, index: usize, position: f64) {
    let Some(closest) = registry.closest_at(position, false, true) else {
        return;
    };
    registry.records_mut()[index].shift_position = closest >= index;
}
