/// Running estimate of row heights, derived from the precise prefix.
///
/// The estimator only knows two numbers: how many rows form the precise prefix
/// (`next_precise_at`) and how tall that prefix is (`precise_height`). Every row after the
/// prefix is assumed to be `precise_height / next_precise_at` pixels tall. The ratio is kept
/// exact: spans of `k` unmeasured rows are computed as `k * sum / next`, not `k * (sum / next)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightEstimator {
    precise_height: u64,
    next_precise_at: usize,
}

impl HeightEstimator {
    pub const fn new() -> Self {
        Self {
            precise_height: 0,
            next_precise_at: 0,
        }
    }

    /// Records that rows `[0, rows)` are precise and `height` pixels tall in total.
    pub fn record_precise(&mut self, rows: usize, height: u64) {
        self.next_precise_at = rows;
        self.precise_height = height;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Index of the first row that is not part of the precise prefix.
    pub const fn next_precise_at(&self) -> usize {
        self.next_precise_at
    }

    /// Total height of the precise prefix (the distance where row `next_precise_at` begins).
    pub const fn precise_height(&self) -> u64 {
        self.precise_height
    }

    /// Average height of a precise row, rounded down (0 when nothing is precise yet).
    pub fn average_height(&self) -> u64 {
        if self.next_precise_at == 0 {
            return 0;
        }
        self.precise_height / self.next_precise_at as u64
    }

    /// Extrapolated height of `rows` unmeasured rows.
    pub fn estimate_span(&self, rows: usize) -> u64 {
        if self.next_precise_at == 0 || rows == 0 {
            return 0;
        }
        let span = rows as u128 * self.precise_height as u128 / self.next_precise_at as u128;
        u64::try_from(span).unwrap_or(u64::MAX)
    }

    /// Extrapolated distance of row `index`, which must not be inside the precise prefix.
    pub fn estimate_distance(&self, index: usize) -> u64 {
        debug_assert!(
            index >= self.next_precise_at,
            "estimate_distance on a precise row (index={index}, next_precise_at={})",
            self.next_precise_at
        );
        let beyond = index.saturating_sub(self.next_precise_at);
        self.precise_height.saturating_add(self.estimate_span(beyond))
    }

    /// Content height published to the scrollbar for a list of `row_count` rows.
    pub fn total_height(&self, row_count: usize) -> u64 {
        self.estimate_distance(row_count.max(self.next_precise_at))
    }

    /// Height implied by a window whose last row (`last`) ends at `last_end`: the window's own
    /// extent plus the extrapolated rows after it.
    pub fn tail_height(&self, last_end: u64, last: usize, row_count: usize) -> u64 {
        let after = row_count.saturating_sub(last.saturating_add(1));
        last_end.saturating_add(self.estimate_span(after))
    }

    /// Extrapolates which row contains `distance`, assuming it lies past the precise prefix.
    ///
    /// The result is clamped to `[0, row_count)`; `row_count` must be non-zero.
    pub fn extrapolate_index(&self, distance: u64, row_count: usize) -> usize {
        debug_assert!(row_count > 0, "extrapolate_index on an empty list");
        let last = row_count.saturating_sub(1);
        if self.precise_height == 0 {
            return self.next_precise_at.min(last);
        }
        let beyond = distance.saturating_sub(self.precise_height) as u128;
        let rows = beyond * self.next_precise_at as u128 / self.precise_height as u128;
        let rows = usize::try_from(rows).unwrap_or(usize::MAX);
        self.next_precise_at.saturating_add(rows).min(last)
    }
}
