// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered child records with deferred removal.
//!
//! Records are kept in a plain vector in display order. A removed child is
//! only flagged as `removing` and stays in the vector (still taking part in
//! layout) until its shrink animation finishes; lookups by handle and by page
//! index skip such records, so the same handle may be inserted again while
//! its old record is still fading out.

use alloc::vec::Vec;

/// Identifies one child record for its whole lifetime.
///
/// Unlike handles, ids are never shared between a removing record and a
/// re-inserted child.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

#[cfg(test)]
impl RecordId {
    pub(crate) const fn for_test(raw: u64) -> Self {
        Self(raw)
    }
}

/// Layout state tracked for one child.
#[derive(Clone, Debug)]
pub struct ChildRecord<H> {
    id: RecordId,
    handle: H,
    pub(crate) size: f64,
    pub(crate) snap_point: f64,
    pub(crate) adding: bool,
    pub(crate) removing: bool,
    pub(crate) shift_position: bool,
}

impl<H> ChildRecord<H> {
    /// Stable id of this record.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// The child this record tracks.
    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Reveal amount in `[0, 1]`.
    #[must_use]
    pub fn reveal_size(&self) -> f64 {
        self.size
    }

    /// Position at which this child is the current page.
    #[must_use]
    pub fn snap_point(&self) -> f64 {
        self.snap_point
    }

    /// Still growing after insertion.
    #[must_use]
    pub fn is_adding(&self) -> bool {
        self.adding
    }

    /// Shrinking after removal; gone once the shrink completes.
    #[must_use]
    pub fn is_removing(&self) -> bool {
        self.removing
    }

    /// Whether this record's resize moves the carousel position.
    #[must_use]
    pub fn shifts_position(&self) -> bool {
        self.shift_position
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ChildRegistry<H> {
    records: Vec<ChildRecord<H>>,
    next_id: u64,
}

impl<H> Default for ChildRegistry<H> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
        }
    }
}

impl<H: PartialEq> ChildRegistry<H> {
    /// Inserts `handle` before the `position`-th live record, or appends when
    /// `position` is past the end. The record starts hidden and `adding`.
    pub(crate) fn insert(&mut self, handle: H, position: usize) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        let at = self.nth(position).unwrap_or(self.records.len());
        self.records.insert(
            at,
            ChildRecord {
                id,
                handle,
                size: 0.0,
                snap_point: 0.0,
                adding: true,
                removing: false,
                shift_position: false,
            },
        );
        id
    }

    /// Vector index of the live record for `handle`.
    pub(crate) fn find(&self, handle: &H) -> Option<usize> {
        self.records
            .iter()
            .position(|r| !r.removing && r.handle == *handle)
    }

    /// Ordinal of the live record for `handle`, counting removing records
    /// before it only if `count_removing` is set.
    pub(crate) fn index_of(&self, handle: &H, count_removing: bool) -> Option<usize> {
        self.records
            .iter()
            .filter(|r| count_removing || !r.removing)
            .position(|r| !r.removing && r.handle == *handle)
    }
}

impl<H> ChildRegistry<H> {
    pub(crate) fn records(&self) -> &[ChildRecord<H>] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [ChildRecord<H>] {
        &mut self.records
    }

    /// Vector index of the `n`-th record that is not being removed.
    pub(crate) fn nth(&self, n: usize) -> Option<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.removing)
            .nth(n)
            .map(|(i, _)| i)
    }

    /// Page index of the record at vector index `index`.
    pub(crate) fn page_index_of(&self, index: usize) -> usize {
        self.records[..index].iter().filter(|r| !r.removing).count()
    }

    pub(crate) fn count(&self, include_removing: bool) -> usize {
        if include_removing {
            self.records.len()
        } else {
            self.records.iter().filter(|r| !r.removing).count()
        }
    }

    pub(crate) fn position_of(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub(crate) fn get(&self, id: RecordId) -> Option<&ChildRecord<H>> {
        self.records.iter().find(|r| r.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: RecordId) -> Option<&mut ChildRecord<H>> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// Physically drops a record.
    pub(crate) fn remove(&mut self, id: RecordId) -> Option<ChildRecord<H>> {
        let index = self.position_of(id)?;
        Some(self.records.remove(index))
    }

    /// Moves the record at vector index `from` so that it ends up at `to`.
    pub(crate) fn move_record(&mut self, from: usize, to: usize) {
        let record = self.records.remove(from);
        self.records.insert(to, record);
    }
}
