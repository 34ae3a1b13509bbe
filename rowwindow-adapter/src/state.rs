use rowwindow::Window;

/// Snapshot of a [`crate::Controller`]'s geometry, for debugging overlays and host-side
/// persistence of the scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub scroll_offset: u64,
    pub viewport_height: u32,
    pub content_width: u32,
    pub total_height: u64,
    pub window: Option<Window>,
}
