// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap points derived from cumulative reveal sizes.

use understory_swipe::SnapPoints;

use crate::registry::ChildRegistry;

impl<H> ChildRegistry<H> {
    /// Recomputes every record's snap point.
    ///
    /// With all reveal sizes at 1 the snap points are `0, 1, 2, ...`; a
    /// partially revealed record sits that fraction past its predecessor.
    pub(crate) fn recompute_snap_points(&mut self) {
        let mut cumulative = 0.0;
        for record in self.records_mut() {
            record.snap_point = cumulative + record.size - 1.0;
            cumulative += record.size;
        }
    }

    /// Vector index of the record whose snap point is nearest `position`.
    ///
    /// Ties go to the earlier record.
    pub(crate) fn closest_at(
        &self,
        position: f64,
        count_adding: bool,
        count_removing: bool,
    ) -> Option<usize> {
        let mut closest: Option<(usize, f64)> = None;
        for (i, record) in self.records().iter().enumerate() {
            if (record.adding && !count_adding) || (record.removing && !count_removing) {
                continue;
            }
            let dist = (record.snap_point - position).abs();
            if closest.is_none_or(|(_, best)| dist < best) {
                closest = Some((i, dist));
            }
        }
        closest.map(|(i, _)| i)
    }

    /// Valid position range.
    ///
    /// The upper bound follows the last record even while it is being removed,
    /// so a position resting on a shrinking last page slides down with it
    /// instead of jumping. It never drops below 0, which a lone page still
    /// growing in would otherwise cause.
    pub(crate) fn range(&self) -> (f64, f64) {
        let upper = self.records().last().map_or(0.0, |r| r.snap_point);
        (0.0, upper.max(0.0))
    }

    /// Snap points of the records that are not being removed.
    pub(crate) fn snap_points(&self) -> SnapPoints {
        self.records()
            .iter()
            .filter(|r| !r.removing)
            .map(|r| r.snap_point)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::ChildRegistry;

    fn settled(n: usize) -> ChildRegistry<usize> {
        let mut reg = ChildRegistry::default();
        for h in 0..n {
            reg.insert(h, usize::MAX);
        }
        for record in reg.records_mut() {
            record.size = 1.0;
            record.adding = false;
        }
        reg.recompute_snap_points();
        reg
    }

    #[test]
    fn full_children_snap_to_integers() {
        let reg = settled(3);
        assert_eq!(reg.snap_points().as_slice(), &[0.0, 1.0, 2.0]);
        assert_eq!(reg.range(), (0.0, 2.0));
    }

    #[test]
    fn closest_picks_nearest_snap_point() {
        let reg = settled(3);
        assert_eq!(reg.closest_at(0.6, true, true), Some(1));
        assert_eq!(reg.closest_at(-4.0, true, true), Some(0));
        assert_eq!(reg.closest_at(9.0, true, true), Some(2));
    }

    #[test]
    fn closest_tie_prefers_earlier_record() {
        let reg = settled(2);
        assert_eq!(reg.closest_at(0.5, true, true), Some(0));
    }

    #[test]
    fn closest_honours_inclusion_flags() {
        let mut reg = settled(3);
        reg.records_mut()[1].adding = true;
        reg.records_mut()[2].removing = true;
        assert_eq!(reg.closest_at(1.0, false, true), Some(0));
        assert_eq!(reg.closest_at(2.0, true, false), Some(1));
        assert_eq!(reg.closest_at(2.0, false, false), Some(0));
        assert_eq!(reg.closest_at(2.0, true, true), Some(2));
    }

    #[test]
    fn partially_revealed_child_shifts_later_points() {
        let mut reg = settled(3);
        reg.records_mut()[1].size = 0.5;
        reg.recompute_snap_points();
        assert_eq!(reg.snap_points().as_slice(), &[0.0, 0.5, 1.5]);
    }

    #[test]
    fn removing_records_leave_navigation_but_keep_range() {
        let mut reg = settled(3);
        reg.records_mut()[2].removing = true;
        reg.records_mut()[2].size = 0.25;
        reg.recompute_snap_points();
        assert_eq!(reg.snap_points().as_slice(), &[0.0, 1.0]);
        assert_eq!(reg.range(), (0.0, 1.25));
    }

    #[test]
    fn empty_registry_is_neutral() {
        let reg: ChildRegistry<usize> = ChildRegistry::default();
        assert_eq!(reg.range(), (0.0, 0.0));
        assert_eq!(reg.closest_at(3.0, true, true), None);
        assert!(reg.snap_points().is_empty());
    }
}
