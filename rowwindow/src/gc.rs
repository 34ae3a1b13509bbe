use alloc::vec::Vec;

use crate::{DistanceTable, RowProvider, Window};

/// Releases the live resources of rows that leave the window.
///
/// Collection touches handles only: a collected row keeps its height and distance, so it is
/// never measured again when it comes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GarbageCollector {
    evicted: u64,
}

impl GarbageCollector {
    pub const fn new() -> Self {
        Self { evicted: 0 }
    }

    /// Number of rows recycled since this collector was created.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Recycles row `index` if it is materialized. Returns whether it was.
    pub(crate) fn evict<P: RowProvider>(
        &mut self,
        table: &mut DistanceTable<P::Handle>,
        provider: &mut P,
        index: usize,
    ) -> bool {
        let Some(handle) = table.detach(index) else {
            return false;
        };
        provider.recycle(index, handle);
        self.evicted = self.evicted.saturating_add(1);
        true
    }

    /// Recycles every row of `old` that is not part of `new`, in ascending index order.
    pub(crate) fn collect<P: RowProvider>(
        &mut self,
        table: &mut DistanceTable<P::Handle>,
        provider: &mut P,
        old: Option<Window>,
        new: Option<Window>,
    ) -> usize {
        let Some(old) = old else {
            return 0;
        };
        let mut collected = 0;
        for index in old.indexes() {
            if new.is_some_and(|w| w.contains(index)) {
                continue;
            }
            if self.evict(table, provider, index) {
                collected += 1;
            }
        }
        if collected > 0 {
            vtrace!(
                collected,
                old_first = old.first,
                old_last = old.last,
                "collected rows leaving the window"
            );
        }
        collected
    }

    /// Recycles handles of rows that no longer exist in the table.
    pub(crate) fn release<P: RowProvider>(
        &mut self,
        provider: &mut P,
        removed: Vec<(usize, P::Handle)>,
    ) {
        for (index, handle) in removed {
            provider.recycle(index, handle);
            self.evicted = self.evicted.saturating_add(1);
        }
    }
}
