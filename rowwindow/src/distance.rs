/// Cumulative offset of a row's top edge from row 0's top edge.
///
/// - `Precise` offsets come from a contiguous run of measured rows starting at row 0 and
///   never change again (until the row list is edited or re-measured).
/// - `Estimated` offsets are good enough to place a window of rows, but must be recomputed
///   once the rows before them are revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    #[default]
    Unknown,
    Precise(u64),
    Estimated(u64),
}

impl Distance {
    pub const fn estimated(value: u64) -> Self {
        Self::Estimated(value)
    }

    pub const fn is_precise(self) -> bool {
        matches!(self, Self::Precise(_))
    }

    pub const fn is_estimated(self) -> bool {
        matches!(self, Self::Estimated(_))
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// The offset regardless of its confidence, or `None` when unknown.
    pub const fn value(self) -> Option<u64> {
        match self {
            Self::Unknown => None,
            Self::Precise(v) | Self::Estimated(v) => Some(v),
        }
    }

    /// Moves an estimated offset by `delta` pixels, saturating at zero.
    ///
    /// Precise and unknown offsets are returned unchanged.
    pub(crate) fn shifted(self, delta: i64) -> Self {
        match self {
            Self::Estimated(v) => Self::Estimated(apply_delta(v, delta)),
            other => other,
        }
    }
}

pub(crate) fn apply_delta(value: u64, delta: i64) -> u64 {
    if delta >= 0 {
        value.saturating_add(delta as u64)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

pub(crate) fn signed_diff(a: u64, b: u64) -> i64 {
    if a >= b {
        i64::try_from(a - b).unwrap_or(i64::MAX)
    } else {
        i64::try_from(b - a).map(|d| -d).unwrap_or(i64::MIN)
    }
}
