use crate::distance::{apply_delta, signed_diff};
use crate::probe::{self, Located};
use crate::{
    Distance, DistanceTable, GarbageCollector, HeightEstimator, InvariantViolation,
    LockController, Phase, Recompute, RowProvider, RowRect, RowState, Window, WindowOptions,
    WindowState,
};

/// Outcome of one structural branch, before distances are re-chained.
#[derive(Clone, Copy, Debug)]
struct Plan {
    phase: Phase,
    window: Window,
    /// Distance given to the first row when it has no distance of its own.
    first_hint: u64,
    /// A row present in both the old and the new window, with its old distance.
    anchor: Option<(usize, u64)>,
}

/// The windowing engine.
///
/// `WindowManager` owns all per-row bookkeeping (heights, distances, handles) and keeps a
/// contiguous window of materialized rows around the viewport. The host calls
/// [`WindowManager::recompute`] on every scroll, resize or row-count change and applies the
/// returned offset and content height to its scrollbar.
///
/// The engine is generic over the provider's handle type so that it can own handles of rows
/// in the window and hand them back on eviction.
#[derive(Clone, Debug)]
pub struct WindowManager<H> {
    table: DistanceTable<H>,
    estimator: HeightEstimator,
    lock: LockController,
    gc: GarbageCollector,
    window: Option<Window>,
    options: WindowOptions,
    content_width: u32,
    in_recompute: bool,
}

impl<H> Default for WindowManager<H> {
    fn default() -> Self {
        Self::new(WindowOptions::default())
    }
}

impl<H> WindowManager<H> {
    pub fn new(options: WindowOptions) -> Self {
        vdebug!(
            budget_screens = options.budget_screens,
            lead_divisor = options.lead_divisor,
            "WindowManager::new"
        );
        Self {
            table: DistanceTable::new(),
            estimator: HeightEstimator::new(),
            lock: LockController::new(),
            gc: GarbageCollector::new(),
            window: None,
            options,
            content_width: 0,
            in_recompute: false,
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the options. Takes effect on the next structural recompute.
    pub fn set_options(&mut self, options: WindowOptions) {
        self.options = options;
    }

    pub fn table(&self) -> &DistanceTable<H> {
        &self.table
    }

    pub fn estimator(&self) -> &HeightEstimator {
        &self.estimator
    }

    pub fn garbage_collector(&self) -> &GarbageCollector {
        &self.gc
    }

    pub fn window(&self) -> Option<Window> {
        self.window
    }

    pub fn row_count(&self) -> usize {
        self.table.len()
    }

    pub fn content_width(&self) -> u32 {
        self.content_width
    }

    pub fn next_precise_at(&self) -> usize {
        self.estimator.next_precise_at()
    }

    pub fn average_height(&self) -> u64 {
        self.estimator.average_height()
    }

    /// Content height for the rows known to the engine.
    pub fn total_height(&self) -> u64 {
        self.estimator.total_height(self.table.len())
    }

    pub fn row(&self, index: usize) -> Option<RowState> {
        self.table.row(index)
    }

    /// Placement of a row whose height and distance are both known.
    pub fn row_rect(&self, index: usize) -> Option<RowRect> {
        let start = self.table.distance(index).value()?;
        let size = self.table.height(index)?;
        Some(RowRect { index, start, size })
    }

    /// Which row contains `distance`, from already-known data only.
    pub fn locate(&self, distance: u64) -> Option<Located> {
        probe::locate(&self.table, &self.estimator, self.window, distance)
    }

    /// Requests that row `index` be part of the window after the next recompute.
    pub fn lock_to(&mut self, index: usize) {
        self.lock.lock_to(index);
    }

    pub fn pending_lock(&self) -> Option<usize> {
        self.lock.pending()
    }

    pub fn state(&self) -> WindowState {
        WindowState {
            row_count: self.table.len(),
            window: self.window,
            next_precise_at: self.estimator.next_precise_at(),
            precise_height: self.estimator.precise_height(),
            total_height: self.total_height(),
            content_width: self.content_width,
            locked_at: self.lock.pending(),
        }
    }

    /// Truncates the precise prefix to `from` after an edit at that index.
    ///
    /// The prefix is immediately re-extended across rows whose heights are still known. Window
    /// rows past the prefix keep their placement as estimated distances; every other row at or
    /// past the prefix end loses its distance.
    pub fn invalidate_range(&mut self, from: usize) {
        let from = from.min(self.table.len());
        if from < self.estimator.next_precise_at() {
            let end = self.table.precise_end(from);
            self.estimator.record_precise(from, end);
        }

        let window_start = self
            .window
            .and_then(|w| self.table.distance(w.first).value());
        for index in self.estimator.next_precise_at()..self.table.len() {
            self.table.set_distance(index, Distance::Unknown);
        }
        self.table.extend_precise(&mut self.estimator);

        let next = self.estimator.next_precise_at();
        if let Some(w) = self.window {
            if w.first > next {
                let start = match window_start {
                    Some(v) => v,
                    None => self.estimator.estimate_distance(w.first),
                };
                self.table.set_distance(w.first, Distance::Estimated(start));
                self.chain_estimated(w);
            }
        }
        vdebug!(
            from,
            next_precise_at = next,
            precise_height = self.estimator.precise_height(),
            "invalidate_range"
        );
    }

    /// Inserts `count` unmeasured rows before `at`.
    ///
    /// The provider must already report the new row count; any other rows it gained since the
    /// last call are appended first. An insertion strictly inside the window shrinks it to its
    /// larger side, recycling the other side.
    pub fn insert_rows<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        at: usize,
        count: usize,
    ) {
        assert!(!self.in_recompute, "insert_rows called during recompute");
        if count == 0 {
            return;
        }
        self.sync_row_count(provider.row_count().saturating_sub(count));
        let old = self.window;
        let mut kept = old;
        if let Some(w) = old {
            if w.first < at && at <= w.last {
                let above = at - w.first;
                let below = w.last + 1 - at;
                kept = if above >= below {
                    Some(Window::new(w.first, at - 1))
                } else {
                    Some(Window::new(at, w.last))
                };
                self.gc.collect(&mut self.table, provider, old, kept);
            }
        }

        self.table.insert(at, count);
        self.window = kept.map(|w| {
            if w.first >= at {
                Window::new(w.first + count, w.last + count)
            } else {
                w
            }
        });
        if let Some(locked) = self.lock.pending() {
            if locked >= at {
                self.lock.lock_to(locked + count);
            }
        }
        vdebug!(at, count, rows = self.table.len(), "insert_rows");
        self.invalidate_range(at);
    }

    /// Removes rows `[at, at + count)`, recycling those that were materialized.
    ///
    /// The provider must already report the new row count; rows it gained before the removal
    /// are appended first.
    pub fn remove_rows<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        at: usize,
        count: usize,
    ) {
        assert!(!self.in_recompute, "remove_rows called during recompute");
        if count == 0 {
            return;
        }
        self.sync_row_count(provider.row_count().saturating_add(count));
        let end = at + count;
        let removed = self.table.remove(at, count);
        self.gc.release(provider, removed);

        self.window = self.window.and_then(|w| {
            if end <= w.first {
                Some(Window::new(w.first - count, w.last - count))
            } else if at > w.last {
                Some(w)
            } else if w.first >= at && w.last < end {
                None
            } else {
                let first = if w.first < at { w.first } else { at };
                let last = if w.last >= end { w.last - count } else { at - 1 };
                Some(Window::new(first, last))
            }
        });
        if let Some(locked) = self.lock.pending() {
            if locked >= end {
                self.lock.lock_to(locked - count);
            } else if locked >= at {
                vtrace!(locked, "remove_rows: dropping lock on a removed row");
                self.lock.clear();
            }
        }
        vdebug!(at, count, rows = self.table.len(), "remove_rows");
        self.invalidate_range(at);
    }

    /// Recycles the window and forgets every height and distance.
    pub fn reset<P: RowProvider<Handle = H>>(&mut self, provider: &mut P) {
        assert!(!self.in_recompute, "reset called during recompute");
        self.gc.collect(&mut self.table, provider, self.window, None);
        self.window = None;
        self.table.forget_all();
        self.estimator.reset();
        vdebug!(rows = self.table.len(), "reset");
    }

    /// Sets the width rows are measured at. A change invalidates every measurement.
    pub fn set_content_width<P: RowProvider<Handle = H>>(&mut self, provider: &mut P, width: u32) {
        if width == self.content_width {
            return;
        }
        vdebug!(from = self.content_width, to = width, "set_content_width");
        self.content_width = width;
        self.reset(provider);
    }

    /// Measures rows in order from the end of the precise prefix until `limit` pixels are
    /// covered, and returns `min(prefix height, limit)`.
    ///
    /// Rows are measured but not materialized. Meant for sizing a container before its first
    /// layout: it panics while a window exists, since promoting estimated window rows to the
    /// prefix would move them without correcting the offset.
    pub fn preferred_height<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        limit: u64,
    ) -> u64 {
        assert!(!self.in_recompute, "preferred_height called during recompute");
        assert!(
            self.window.is_none(),
            "preferred_height called while a window is laid out"
        );
        let rows = provider.row_count();
        self.sync_row_count(rows);
        loop {
            self.table.extend_precise(&mut self.estimator);
            let next = self.estimator.next_precise_at();
            if self.estimator.precise_height() >= limit || next >= rows {
                break;
            }
            self.measure(provider, next);
        }
        self.estimator.precise_height().min(limit)
    }

    /// Recomputes the window for a viewport of `viewport_height` pixels scrolled to `offset`.
    ///
    /// Measures rows entering the window (each row at most once), recycles rows leaving it,
    /// and returns the corrected offset together with the content height to publish.
    pub fn recompute<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        offset: u64,
        viewport_height: u32,
    ) -> Recompute {
        assert!(!self.in_recompute, "recompute called during recompute");
        self.in_recompute = true;
        let outcome = self.recompute_inner(provider, offset, viewport_height);
        self.in_recompute = false;
        outcome
    }

    /// Checks every engine invariant and reports the first one that is broken.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let rows = self.table.len();
        let next = self.estimator.next_precise_at();
        if next > rows {
            return Err(InvariantViolation::PrefixOutOfRange {
                next_precise_at: next,
                row_count: rows,
            });
        }

        let mut expected = 0u64;
        for index in 0..next {
            let (Some(height), Distance::Precise(actual)) =
                (self.table.height(index), self.table.distance(index))
            else {
                return Err(InvariantViolation::PrefixRowNotPrecise { index });
            };
            if actual != expected {
                return Err(InvariantViolation::PrefixNotChained {
                    index,
                    expected,
                    actual,
                });
            }
            expected = expected.saturating_add(height as u64);
        }
        if expected != self.estimator.precise_height() {
            return Err(InvariantViolation::EstimatorDrift {
                expected: self.estimator.precise_height(),
                actual: expected,
            });
        }
        if let Some(index) = (next..rows).find(|&i| self.table.distance(i).is_precise()) {
            return Err(InvariantViolation::PreciseBeyondPrefix { index });
        }

        if let Some(w) = self.window {
            if w.first > w.last || w.last >= rows {
                return Err(InvariantViolation::WindowOutOfRange {
                    first: w.first,
                    last: w.last,
                    row_count: rows,
                });
            }
            for index in w.indexes() {
                if self.row_rect(index).is_none() {
                    return Err(InvariantViolation::WindowRowUnplaced { index });
                }
                if !self.table.is_materialized(index) {
                    return Err(InvariantViolation::WindowRowNotMaterialized { index });
                }
                if index > w.first {
                    let expected = self.table.end_of(index - 1).unwrap_or(0);
                    let actual = self.table.placed_distance(index);
                    if actual != expected {
                        return Err(InvariantViolation::WindowNotChained {
                            index,
                            expected,
                            actual,
                        });
                    }
                }
            }
        }
        let stray = (0..rows).find(|&i| {
            self.table.is_materialized(i) && !self.window.is_some_and(|w| w.contains(i))
        });
        if let Some(index) = stray {
            return Err(InvariantViolation::StrayMaterializedRow { index });
        }

        if let Some(index) = self.lock.pending() {
            if index >= rows {
                return Err(InvariantViolation::LockOutOfRange {
                    index,
                    row_count: rows,
                });
            }
        }
        Ok(())
    }

    fn recompute_inner<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        offset: u64,
        viewport_height: u32,
    ) -> Recompute {
        let rows = provider.row_count();
        self.sync_row_count(rows);
        vtrace!(offset, viewport_height, rows, "recompute");

        if rows == 0 || viewport_height == 0 {
            return self.outcome(offset, Phase::Steady, None);
        }

        let plan = if let Some(locked) = self.lock.pending() {
            assert!(
                locked < rows,
                "lock on row {locked} is out of range for {rows} rows"
            );
            Some(self.plan_locked(provider, locked, viewport_height))
        } else {
            let current = self.window;
            match current {
                None => Some(self.plan_empty(provider, offset, viewport_height)),
                Some(w) if offset < self.table.placed_distance(w.first) => {
                    if w.first == 0 {
                        None
                    } else {
                        Some(self.plan_grow_up(provider, w, offset, viewport_height))
                    }
                }
                Some(w) if offset.saturating_add(viewport_height as u64) >= self.end(w.last) => {
                    if w.last + 1 == rows {
                        None
                    } else {
                        Some(self.plan_grow_down(provider, w, offset, viewport_height))
                    }
                }
                Some(_) => None,
            }
        };
        let Some(plan) = plan else {
            return self.outcome(offset, Phase::Steady, None);
        };

        let old = self.window;
        vdebug!(
            phase = ?plan.phase,
            first = plan.window.first,
            last = plan.window.last,
            "recompute: window rebuilt"
        );
        self.gc
            .collect(&mut self.table, provider, old, Some(plan.window));
        self.place(old, plan.window, plan.first_hint);
        for index in plan.window.indexes() {
            if !self.table.is_materialized(index) {
                let handle = provider.materialize(index);
                self.table.attach(index, handle);
            }
        }
        self.window = Some(plan.window);

        let mut offset = offset;
        if let Some((row, old_distance)) = plan.anchor {
            let delta = signed_diff(self.table.placed_distance(row), old_distance);
            offset = apply_delta(offset, delta);
        }
        offset = self.settle(plan.window, offset, viewport_height);
        offset = self.apply_bonus(plan.window, offset);

        let mut revealed = None;
        if plan.phase == Phase::Locked {
            if let Some(locked) = self.lock.take() {
                let rect = self.reveal(provider, locked);
                offset = scroll_into_view(rect, offset, viewport_height);
                revealed = Some(rect);
            }
        }

        if self.options.check_invariants {
            if let Err(violation) = self.validate() {
                panic!("window invariant violated: {violation}");
            }
        }
        self.outcome(offset, plan.phase, revealed)
    }

    fn outcome(&self, offset: u64, phase: Phase, revealed: Option<RowRect>) -> Recompute {
        Recompute {
            offset,
            total_height: self.total_height(),
            phase,
            window: self.window,
            revealed,
        }
    }

    fn sync_row_count(&mut self, rows: usize) {
        let known = self.table.len();
        assert!(
            rows >= known,
            "row count shrank from {known} to {rows} without remove_rows"
        );
        if rows > known {
            self.table.append(rows - known);
            vtrace!(appended = rows - known, rows, "recompute: rows appended");
        }
    }

    fn measure<P: RowProvider<Handle = H>>(&mut self, provider: &mut P, index: usize) -> i64 {
        if let Some(height) = self.table.height(index) {
            return height as i64;
        }
        let height = provider.measure(index, self.content_width);
        self.table.set_height(index, height);
        height as i64
    }

    fn end(&self, index: usize) -> u64 {
        self.table.end_of(index).unwrap_or(0)
    }

    fn locate_row(&self, distance: u64) -> usize {
        self.locate(distance).map_or(0, Located::index)
    }

    /// Distance row `index` starts at if a new window begins there.
    fn seed_distance(&self, old: Option<Window>, index: usize, hint: u64) -> u64 {
        let next = self.estimator.next_precise_at();
        if index < next {
            self.table.placed_distance(index)
        } else if index == next {
            self.estimator.precise_height()
        } else if old.is_some_and(|w| w.contains(index)) {
            self.table.distance(index).value().unwrap_or(hint)
        } else {
            hint
        }
    }

    /// Hint for a row the engine has no placement for.
    fn estimate_for(&self, index: usize) -> u64 {
        if index >= self.estimator.next_precise_at() {
            self.estimator.estimate_distance(index)
        } else {
            self.table.placed_distance(index)
        }
    }

    /// Measures rows after `last` until `covered` reaches `budget` or the list ends.
    fn extend_forward<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        mut last: usize,
        covered: &mut i64,
        budget: i64,
    ) -> usize {
        let rows = self.table.len();
        while *covered < budget && last + 1 < rows {
            last += 1;
            *covered += self.measure(provider, last);
        }
        last
    }

    /// Measures rows before `first` until `covered` reaches `budget` or row 0 is reached.
    ///
    /// Returns the new first row and the height walked.
    fn extend_backward<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        mut first: usize,
        covered: &mut i64,
        budget: i64,
    ) -> (usize, u64) {
        let mut walked = 0u64;
        while *covered < budget && first > 0 {
            first -= 1;
            let height = self.measure(provider, first);
            *covered += height;
            walked = walked.saturating_add(height as u64);
        }
        (first, walked)
    }

    fn plan_empty<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        offset: u64,
        viewport_height: u32,
    ) -> Plan {
        let budget = self.options.budget(viewport_height) as i64;
        let start_distance = offset.saturating_sub(self.options.lead(viewport_height));
        let start = self.locate_row(start_distance);
        let start_at = self.seed_distance(None, start, self.estimate_for(start));

        let height = self.measure(provider, start);
        let mut covered = seed_coverage(start_at, height, start_distance);
        let last = self.extend_forward(provider, start, &mut covered, budget);
        let (first, walked) = self.extend_backward(provider, start, &mut covered, budget);
        Plan {
            phase: Phase::Empty,
            window: Window::new(first, last),
            first_hint: start_at.saturating_sub(walked),
            anchor: None,
        }
    }

    fn plan_grow_up<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        old: Window,
        offset: u64,
        viewport_height: u32,
    ) -> Plan {
        let budget = self.options.budget(viewport_height) as i64;
        let start_distance = offset.saturating_sub(self.options.lead(viewport_height));
        let mut first = self.locate_row(start_distance).min(old.first - 1);
        let start_at = self.seed_distance(Some(old), first, start_distance);

        let height = self.measure(provider, first);
        let mut covered = seed_coverage(start_at, height, start_distance);
        if first + 1 == old.first {
            let cap = budget - viewport_height as i64;
            covered = covered.min(cap);
        }
        let mut last = self.extend_forward(provider, first, &mut covered, budget);
        if last < old.first {
            return Plan {
                phase: Phase::GrowUp,
                window: Window::new(first, last),
                first_hint: start_at,
                anchor: None,
            };
        }

        // Lay the new rows out upward from the old first row, in the old window's frame, so
        // that the anchor correction moves the viewport and the rows together.
        let anchor_at = self.table.placed_distance(old.first);
        let mut top = anchor_at as i64 - self.span(first, old.first) as i64;
        while top > start_distance as i64 && first > 0 {
            first -= 1;
            top -= self.measure(provider, first);
        }
        let bottom = offset as i64 + viewport_height as i64;
        let mut end = top + self.span(first, last + 1) as i64;
        let rows = self.table.len();
        while end <= bottom && last + 1 < rows {
            last += 1;
            end += self.measure(provider, last);
        }
        Plan {
            phase: Phase::GrowUp,
            window: Window::new(first, last),
            first_hint: top.max(0) as u64,
            anchor: Some((old.first, anchor_at)),
        }
    }

    /// Total measured height of rows `[from, to)`.
    fn span(&self, from: usize, to: usize) -> u64 {
        (from..to)
            .map(|index| self.table.measured_height(index) as u64)
            .sum()
    }

    fn plan_grow_down<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        old: Window,
        offset: u64,
        viewport_height: u32,
    ) -> Plan {
        let budget = self.options.budget(viewport_height) as i64;
        let start_distance = offset.saturating_sub(self.options.lead(viewport_height));
        let start = self.locate_row(start_distance);
        let start_at = self.seed_distance(Some(old), start, start_distance);
        let anchor = old
            .contains(start)
            .then(|| (start, self.table.placed_distance(start)));

        let rows = self.table.len();
        let height = self.measure(provider, start);
        let mut covered = seed_coverage(start_at, height, start_distance);
        let mut last = start;
        // Rows of the old window do not count toward stopping: growth always passes `old.last`.
        while (covered < budget || last <= old.last) && last + 1 < rows {
            last += 1;
            covered += self.measure(provider, last);
        }

        let mut first = start;
        let mut walked = 0;
        if last + 1 == rows && covered < viewport_height as i64 {
            (first, walked) =
                self.extend_backward(provider, start, &mut covered, viewport_height as i64);
        }
        Plan {
            phase: Phase::GrowDown,
            window: Window::new(first, last),
            first_hint: start_at.saturating_sub(walked),
            anchor,
        }
    }

    fn plan_locked<P: RowProvider<Handle = H>>(
        &mut self,
        provider: &mut P,
        locked: usize,
        viewport_height: u32,
    ) -> Plan {
        let budget = self.options.budget(viewport_height) as i64;
        let old = self.window;

        if let Some(w) = old.filter(|w| w.contains(locked)) {
            let first_at = self.table.placed_distance(w.first);
            let mut covered = signed_diff(self.end(w.last), first_at);
            let last = self.extend_forward(provider, w.last, &mut covered, budget);
            let (first, walked) = self.extend_backward(provider, w.first, &mut covered, budget);
            return Plan {
                phase: Phase::Locked,
                window: Window::new(first, last),
                first_hint: first_at.saturating_sub(walked),
                anchor: Some((w.first, first_at)),
            };
        }

        let locked_at = self.seed_distance(old, locked, self.estimate_for(locked));
        let mut covered = self.measure(provider, locked);
        let last = self.extend_forward(provider, locked, &mut covered, budget);
        let (first, walked) = self.extend_backward(provider, locked, &mut covered, budget);
        Plan {
            phase: Phase::Locked,
            window: Window::new(first, last),
            first_hint: locked_at.saturating_sub(walked),
            anchor: None,
        }
    }

    /// Re-chains distances of the new window left to right.
    fn place(&mut self, old: Option<Window>, window: Window, first_hint: u64) {
        self.table.extend_precise(&mut self.estimator);
        if window.first < self.estimator.next_precise_at() {
            return;
        }
        let start = self.seed_distance(old, window.first, first_hint);
        self.table
            .set_distance(window.first, Distance::Estimated(start));
        self.chain_estimated(window);
    }

    fn chain_estimated(&mut self, window: Window) {
        for index in window.first + 1..=window.last {
            let start = self.end(index - 1);
            self.table.set_distance(index, Distance::Estimated(start));
        }
    }

    /// Clamps the offset into `[distance(first), end(last) - viewport]`; the lower bound wins.
    fn settle(&self, window: Window, offset: u64, viewport_height: u32) -> u64 {
        let lower = self.table.placed_distance(window.first);
        let upper = self.end(window.last).saturating_sub(viewport_height as u64);
        offset.min(upper).max(lower)
    }

    /// Moves an estimated window (and the offset with it) so that its tail agrees with the
    /// published content height. The window's first row never moves above the precise prefix.
    fn apply_bonus(&mut self, window: Window, offset: u64) -> u64 {
        if window.first <= self.estimator.next_precise_at() {
            return offset;
        }
        let rows = self.table.len();
        let published = self.estimator.total_height(rows);
        let tail = self
            .estimator
            .tail_height(self.end(window.last), window.last, rows);
        let mut bonus = signed_diff(tail, published);
        let room = signed_diff(
            self.table.placed_distance(window.first),
            self.estimator.precise_height(),
        );
        if bonus > room {
            vwarn!(bonus, room, "bonus correction clamped at the precise prefix");
            bonus = room;
        }
        if bonus == 0 {
            return offset;
        }
        vtrace!(bonus, published, tail, "bonus correction");
        for index in window.indexes() {
            let shifted = self.table.distance(index).shifted(-bonus);
            self.table.set_distance(index, shifted);
        }
        apply_delta(offset, -bonus)
    }

    fn reveal<P: RowProvider<Handle = H>>(&self, provider: &P, locked: usize) -> RowRect {
        let placed = RowRect {
            index: locked,
            start: self.table.placed_distance(locked),
            size: self.table.measured_height(locked),
        };
        provider.rect_of(locked, placed)
    }
}

/// Part of a row starting at `start_at` that lies past `start_distance`.
fn seed_coverage(start_at: u64, height: i64, start_distance: u64) -> i64 {
    (signed_diff(start_at, start_distance) + height).max(0)
}

/// Minimal scroll that makes `rect` visible; the top edge wins when it is taller than the
/// viewport.
fn scroll_into_view(rect: RowRect, offset: u64, viewport_height: u32) -> u64 {
    let mut offset = offset;
    let bottom = offset.saturating_add(viewport_height as u64);
    if rect.end() > bottom {
        offset = rect.end() - viewport_height as u64;
    }
    if rect.start < offset {
        offset = rect.start;
    }
    offset
}
