use crate::RowRect;

/// The capability interface through which the engine reaches the rows it windows.
///
/// The engine never owns row content. It asks the provider to measure a row (the only call
/// assumed to be expensive), to materialize a row that entered the window, and to recycle
/// the handle of a row that left it.
///
/// Contract:
/// - `measure` is idempotent for an unchanged width. The engine caches its result and calls
///   it at most once per row until the row list is edited or the width changes.
/// - `materialize` and `recycle` are paired: each handle returned by `materialize` is given
///   back to `recycle` exactly once.
/// - None of these methods may call back into the engine.
pub trait RowProvider {
    /// Live resources held by a materialized row (a widget, texture, cached layout...).
    type Handle;

    fn row_count(&self) -> usize;

    /// Returns the height of row `index` when laid out at `available_width`.
    fn measure(&mut self, index: usize, available_width: u32) -> u32;

    fn materialize(&mut self, index: usize) -> Self::Handle;

    /// Releases a row that left the window. Distances and heights are kept by the engine.
    fn recycle(&mut self, index: usize, handle: Self::Handle);

    /// Rectangle that must become visible when the engine reveals row `index`.
    ///
    /// `placed` is the row's own placement. Providers with decorations attached to rows
    /// (sticky headers, focus rings) may return a taller rectangle.
    fn rect_of(&self, index: usize, placed: RowRect) -> RowRect {
        let _ = index;
        placed
    }
}
