use rowwindow::{Recompute, RowProvider, WindowManager, WindowOptions};

use crate::FrameState;

/// A framework-neutral scroll container around a `rowwindow::WindowManager`.
///
/// The controller owns the row provider together with the geometry a real scroll container
/// would own: the scroll offset, the viewport height and the content width. Adapters drive it
/// by calling:
/// - `on_resize` when the container is laid out at a new size
/// - `on_scroll` when the user scrolls
/// - `insert_rows` / `remove_rows` after editing the provider's rows
///
/// Every call returns the engine's [`Recompute`]; its `offset` is already stored as the new
/// scroll offset, ready to be pushed to the real scrollbar.
pub struct Controller<P: RowProvider> {
    engine: WindowManager<P::Handle>,
    provider: P,
    scroll_offset: u64,
    viewport_height: u32,
    content_width: u32,
    total_height: u64,
}

impl<P: RowProvider> Controller<P> {
    pub fn new(provider: P, options: WindowOptions) -> Self {
        Self::from_parts(WindowManager::new(options), provider)
    }

    pub fn from_parts(engine: WindowManager<P::Handle>, provider: P) -> Self {
        let total_height = engine.total_height();
        let content_width = engine.content_width();
        Self {
            engine,
            provider,
            scroll_offset: 0,
            viewport_height: 0,
            content_width,
            total_height,
        }
    }

    pub fn engine(&self) -> &WindowManager<P::Handle> {
        &self.engine
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the rows. After adding or removing rows, report the edit through
    /// [`Controller::insert_rows`] or [`Controller::remove_rows`].
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn into_parts(self) -> (WindowManager<P::Handle>, P) {
        (self.engine, self.provider)
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn content_width(&self) -> u32 {
        self.content_width
    }

    pub fn total_height(&self) -> u64 {
        self.total_height
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height.saturating_sub(self.viewport_height as u64)
    }

    /// Recomputes the window for the current geometry.
    pub fn layout(&mut self) -> Recompute {
        let r = self
            .engine
            .recompute(&mut self.provider, self.scroll_offset, self.viewport_height);
        self.scroll_offset = r.offset;
        self.total_height = r.total_height;
        r
    }

    /// Call this when the container is laid out at a new size.
    ///
    /// A width change invalidates every row measurement.
    pub fn on_resize(&mut self, content_width: u32, viewport_height: u32) -> Recompute {
        if content_width != self.content_width {
            adebug!(from = self.content_width, to = content_width, "on_resize: width changed");
            self.content_width = content_width;
            self.engine.set_content_width(&mut self.provider, content_width);
        }
        self.viewport_height = viewport_height;
        self.layout()
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// The offset is clamped to `[0, max_scroll_offset()]` before the window is recomputed.
    pub fn on_scroll(&mut self, scroll_offset: u64) -> Recompute {
        let max = self.max_scroll_offset();
        if scroll_offset > max {
            adebug!(requested = scroll_offset, max, "on_scroll: clamped");
        }
        self.scroll_offset = scroll_offset.min(max);
        self.layout()
    }

    /// Brings row `index` into view with the minimal scroll.
    ///
    /// Out-of-range indexes are clamped to the last row; does nothing on an empty list.
    pub fn scroll_to_row(&mut self, index: usize) -> Recompute {
        let rows = self.provider.row_count();
        if let Some(last) = rows.checked_sub(1) {
            self.engine.lock_to(index.min(last));
        }
        self.layout()
    }

    /// Reports `count` rows inserted before `at` (already present in the provider).
    ///
    /// When the edit touches the window or the measured prefix, the inserted row stays in view.
    pub fn insert_rows(&mut self, at: usize, count: usize) -> Recompute {
        let touched = self.touches_layout(at);
        self.engine.insert_rows(&mut self.provider, at, count);
        if touched && count > 0 {
            adebug!(at, count, "insert_rows: keeping the inserted row in view");
            self.engine.lock_to(at);
        }
        self.layout()
    }

    /// Reports rows `[at, at + count)` removed (already gone from the provider).
    ///
    /// When the edit touches the window or the measured prefix, the row that slid into the
    /// removed position stays in view.
    pub fn remove_rows(&mut self, at: usize, count: usize) -> Recompute {
        let touched = self.touches_layout(at);
        self.engine.remove_rows(&mut self.provider, at, count);
        let rows = self.provider.row_count();
        if touched && count > 0 && rows > 0 {
            adebug!(at, count, "remove_rows: keeping the next row in view");
            self.engine.lock_to(at.min(rows - 1));
        }
        self.layout()
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            scroll_offset: self.scroll_offset,
            viewport_height: self.viewport_height,
            content_width: self.content_width,
            total_height: self.total_height,
            window: self.engine.window(),
        }
    }

    fn touches_layout(&self, at: usize) -> bool {
        at < self.engine.next_precise_at()
            || self
                .engine
                .window()
                .is_some_and(|w| w.first <= at && at <= w.last.saturating_add(1))
    }
}
