use core::ops::RangeInclusive;

use crate::Distance;

/// A contiguous, closed interval `[first, last]` of materialized row indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub first: usize,
    pub last: usize, // inclusive
}

// A window is never empty; an absent window is `Option::None`.
#[allow(clippy::len_without_is_empty)]
impl Window {
    pub fn new(first: usize, last: usize) -> Self {
        assert!(first <= last, "window must not be inverted ({first} > {last})");
        Self { first, last }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }

    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn indexes(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }
}

/// Which branch of the windowing state machine a recompute took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No window existed; one was built around the requested offset.
    Empty,
    /// The window already covered the viewport.
    Steady,
    /// The viewport moved above the window; the window grew backward.
    GrowUp,
    /// The viewport reached the window's end; the window grew forward.
    GrowDown,
    /// A pending lock forced a row into the window.
    Locked,
}

impl Phase {
    /// Whether the window was rebuilt (rows may have been measured or evicted).
    pub fn is_structural(self) -> bool {
        !matches!(self, Self::Steady)
    }
}

/// Vertical placement of one row in content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRect {
    pub index: usize,
    /// Distance of the row's top edge from row 0's top edge.
    pub start: u64,
    pub size: u32,
}

impl RowRect {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}

/// Result of a [`crate::WindowManager::recompute`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recompute {
    /// Scroll offset to apply. Differs from the requested offset when the window was
    /// re-anchored, the height estimate changed, or a locked row was revealed.
    pub offset: u64,
    /// Content height to publish to the scrollbar.
    pub total_height: u64,
    pub phase: Phase,
    pub window: Option<Window>,
    /// Placement of the locked row, when this recompute consumed a lock.
    pub revealed: Option<RowRect>,
}

/// Public view of one row's bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowState {
    pub index: usize,
    pub height: Option<u32>,
    pub distance: Distance,
    pub materialized: bool,
}
