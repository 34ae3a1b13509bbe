/// A broken engine invariant, reported by [`crate::WindowManager::validate`].
///
/// These are programming errors: an engine that reports one cannot be reasoned about further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("precise prefix ends at {next_precise_at}, past the row count {row_count}")]
    PrefixOutOfRange {
        next_precise_at: usize,
        row_count: usize,
    },
    #[error("row {index} is inside the precise prefix but is not measured and precise")]
    PrefixRowNotPrecise { index: usize },
    #[error("precise row {index} starts at {actual}, expected {expected}")]
    PrefixNotChained {
        index: usize,
        expected: u64,
        actual: u64,
    },
    #[error("precise prefix is {actual} pixels tall but the estimator records {expected}")]
    EstimatorDrift { expected: u64, actual: u64 },
    #[error("row {index} is precise but lies past the precise prefix")]
    PreciseBeyondPrefix { index: usize },
    #[error("window [{first}, {last}] is invalid for {row_count} rows")]
    WindowOutOfRange {
        first: usize,
        last: usize,
        row_count: usize,
    },
    #[error("window row {index} is not measured or has no distance")]
    WindowRowUnplaced { index: usize },
    #[error("window row {index} starts at {actual}, expected {expected}")]
    WindowNotChained {
        index: usize,
        expected: u64,
        actual: u64,
    },
    #[error("window row {index} is not materialized")]
    WindowRowNotMaterialized { index: usize },
    #[error("row {index} is materialized outside the window")]
    StrayMaterializedRow { index: usize },
    #[error("lock on row {index} is out of range for {row_count} rows")]
    LockOutOfRange { index: usize, row_count: usize },
}
