use alloc::vec::Vec;

use crate::{Distance, HeightEstimator, RowState};

#[derive(Clone, Debug)]
struct Row<H> {
    height: Option<u32>,
    distance: Distance,
    handle: Option<H>,
}

impl<H> Row<H> {
    fn unknown() -> Self {
        Self {
            height: None,
            distance: Distance::Unknown,
            handle: None,
        }
    }
}

/// Arena of per-row bookkeeping, addressed by row index.
///
/// Invariants maintained together with [`HeightEstimator`]:
/// - rows `[0, next_precise_at)` are measured and `Precise`, chained from 0,
/// - no row at or after `next_precise_at` is `Precise`.
#[derive(Clone, Debug)]
pub struct DistanceTable<H> {
    rows: Vec<Row<H>>,
}

impl<H> Default for DistanceTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> DistanceTable<H> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn height(&self, index: usize) -> Option<u32> {
        self.rows.get(index).and_then(|r| r.height)
    }

    pub fn distance(&self, index: usize) -> Distance {
        self.rows
            .get(index)
            .map(|r| r.distance)
            .unwrap_or(Distance::Unknown)
    }

    pub fn is_materialized(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(|r| r.handle.is_some())
    }

    pub fn row(&self, index: usize) -> Option<RowState> {
        let r = self.rows.get(index)?;
        Some(RowState {
            index,
            height: r.height,
            distance: r.distance,
            materialized: r.handle.is_some(),
        })
    }

    /// Distance where row `index` ends, when both its distance and height are known.
    pub fn end_of(&self, index: usize) -> Option<u64> {
        let r = self.rows.get(index)?;
        let start = r.distance.value()?;
        Some(start.saturating_add(r.height? as u64))
    }

    /// Height of a row that the caller knows to be measured.
    pub(crate) fn measured_height(&self, index: usize) -> u32 {
        match self.height(index) {
            Some(h) => h,
            None => panic!("row {index} read as measured but has no height"),
        }
    }

    /// Distance value of a row that the caller knows to be placed.
    pub(crate) fn placed_distance(&self, index: usize) -> u64 {
        match self.distance(index).value() {
            Some(v) => v,
            None => panic!("row {index} read as placed but its distance is unknown"),
        }
    }

    pub(crate) fn set_height(&mut self, index: usize, height: u32) {
        self.rows[index].height = Some(height);
    }

    pub(crate) fn set_distance(&mut self, index: usize, distance: Distance) {
        self.rows[index].distance = distance;
    }

    pub(crate) fn attach(&mut self, index: usize, handle: H) {
        let prev = self.rows[index].handle.replace(handle);
        debug_assert!(prev.is_none(), "row {index} materialized twice");
    }

    pub(crate) fn detach(&mut self, index: usize) -> Option<H> {
        self.rows.get_mut(index).and_then(|r| r.handle.take())
    }

    pub(crate) fn append(&mut self, count: usize) {
        let new_len = self.rows.len().saturating_add(count);
        self.rows.resize_with(new_len, Row::unknown);
    }

    /// Inserts `count` unknown rows before `at`; rows at or after `at` shift by `count`.
    pub(crate) fn insert(&mut self, at: usize, count: usize) {
        assert!(
            at <= self.rows.len(),
            "insert position {at} past the end ({})",
            self.rows.len()
        );
        self.rows
            .splice(at..at, core::iter::repeat_with(Row::unknown).take(count));
    }

    /// Removes rows `[at, at + count)` and returns the handles of those that were materialized.
    pub(crate) fn remove(&mut self, at: usize, count: usize) -> Vec<(usize, H)> {
        let end = at.saturating_add(count);
        assert!(
            end <= self.rows.len(),
            "remove range {at}..{end} past the end ({})",
            self.rows.len()
        );
        self.rows
            .drain(at..end)
            .enumerate()
            .filter_map(|(i, r)| r.handle.map(|h| (at + i, h)))
            .collect()
    }

    /// Forgets every height and distance. Handles must have been detached already.
    pub(crate) fn forget_all(&mut self) {
        for r in &mut self.rows {
            debug_assert!(r.handle.is_none(), "forget_all with a materialized row");
            r.height = None;
            r.distance = Distance::Unknown;
        }
    }

    /// Where the precise prefix `[0, next_precise_at)` ends.
    pub(crate) fn precise_end(&self, next_precise_at: usize) -> u64 {
        match next_precise_at.checked_sub(1) {
            None => 0,
            Some(last) => self.end_of(last).unwrap_or(0),
        }
    }

    /// Grows the precise prefix across every following row whose height is already known,
    /// rewriting those rows' distances as precise.
    ///
    /// Returns the number of rows promoted.
    pub(crate) fn extend_precise(&mut self, estimator: &mut HeightEstimator) -> usize {
        let start = estimator.next_precise_at();
        let mut next = start;
        let mut next_distance = estimator.precise_height();
        while let Some(height) = self.rows.get(next).and_then(|r| r.height) {
            self.rows[next].distance = Distance::Precise(next_distance);
            next_distance = next_distance.saturating_add(height as u64);
            next += 1;
        }
        if next != start {
            estimator.record_precise(next, next_distance);
        }
        next - start
    }
}
