use crate::Window;

/// A lightweight, serializable snapshot of the engine's windowing state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is meant for
/// debugging overlays and test assertions; it cannot be used to restore an engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub row_count: usize,
    pub window: Option<Window>,
    pub next_precise_at: usize,
    pub precise_height: u64,
    pub total_height: u64,
    pub content_width: u32,
    pub locked_at: Option<usize>,
}
