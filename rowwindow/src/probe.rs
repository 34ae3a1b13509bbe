//! Distance → row lookups over already-known data.
//!
//! Nothing here measures rows. A lookup tries, in order:
//! 1. a binary search over the precise prefix (`O(log P)`),
//! 2. a linear scan over the current window and its immediate neighbours,
//! 3. an extrapolation from the average precise height.

use crate::{DistanceTable, HeightEstimator, Window};

/// A located row and the source that located it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Located {
    Precise(usize),
    Window(usize),
    Extrapolated(usize),
}

impl Located {
    pub fn index(self) -> usize {
        match self {
            Self::Precise(i) | Self::Window(i) | Self::Extrapolated(i) => i,
        }
    }
}

/// Finds the row containing `distance`. Returns `None` only for an empty list.
pub fn locate<H>(
    table: &DistanceTable<H>,
    estimator: &HeightEstimator,
    window: Option<Window>,
    distance: u64,
) -> Option<Located> {
    let rows = table.len();
    let last = rows.checked_sub(1)?;

    if let Some(index) = precise_row(table, estimator, distance) {
        return Some(Located::Precise(index.min(last)));
    }
    if let Some(index) = window.and_then(|w| window_row(table, estimator, w, distance)) {
        return Some(Located::Window(index));
    }
    Some(Located::Extrapolated(
        estimator.extrapolate_index(distance, rows),
    ))
}

/// Binary search over `[0, next_precise_at)`.
///
/// A distance exactly at the end of the prefix maps to `next_precise_at` (which may equal the
/// row count); a distance past it is not found.
pub fn precise_row<H>(
    table: &DistanceTable<H>,
    estimator: &HeightEstimator,
    distance: u64,
) -> Option<usize> {
    let next = estimator.next_precise_at();
    if next == 0 {
        return None;
    }
    let end = estimator.precise_height();
    if distance > end {
        return None;
    }
    if distance == end {
        return Some(next);
    }

    // Number of precise rows starting at or before `distance`.
    let (mut lo, mut hi) = (0usize, next);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if table.placed_distance(mid) <= distance {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    debug_assert!(lo > 0, "row 0 must start at distance 0");
    Some(lo.saturating_sub(1))
}

/// Scan over the window, plus the row just before and just after it when the distance falls
/// within one average row height of the window's edges.
pub fn window_row<H>(
    table: &DistanceTable<H>,
    estimator: &HeightEstimator,
    window: Window,
    distance: u64,
) -> Option<usize> {
    let average = estimator.average_height();

    let first_start = table.placed_distance(window.first);
    if window.first > 0 && distance < first_start && distance >= first_start.saturating_sub(average)
    {
        return Some(window.first - 1);
    }
    let last_end = table.end_of(window.last)?;
    if window.last + 1 < table.len()
        && distance >= last_end
        && distance < last_end.saturating_add(average)
    {
        return Some(window.last + 1);
    }

    window.indexes().find(|&i| {
        let start = table.placed_distance(i);
        let end = table.end_of(i).unwrap_or(start);
        start <= distance && distance < end
    })
}
