/// One-shot request to force a row into the window on the next recompute.
///
/// Used for "scroll to selection" and for keeping an inserted row visible. A second request
/// before the next recompute replaces the first (last write wins).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockController {
    locked_at: Option<usize>,
}

impl LockController {
    pub const fn new() -> Self {
        Self { locked_at: None }
    }

    pub fn lock_to(&mut self, index: usize) {
        if let Some(prev) = self.locked_at {
            if prev != index {
                vtrace!(prev, next = index, "lock_to: replacing pending lock");
            }
        }
        self.locked_at = Some(index);
    }

    pub fn pending(&self) -> Option<usize> {
        self.locked_at
    }

    /// Consumes the pending lock.
    pub fn take(&mut self) -> Option<usize> {
        self.locked_at.take()
    }

    pub fn clear(&mut self) {
        self.locked_at = None;
    }
}
