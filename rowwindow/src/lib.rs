//! A headless windowing engine for long lists whose rows have variable, expensive-to-measure
//! heights.
//!
//! For host-level glue (scroll offset ownership, content width, row edits), see the
//! `rowwindow-adapter` crate.
//!
//! The engine keeps a bounded, contiguous window of materialized rows around the viewport.
//! Rows are measured the first time they enter the window and their heights are cached
//! forever (until the content width changes). Cumulative row offsets are either *precise*
//! (a contiguous measured prefix starting at row 0) or *estimated* (extrapolated from the
//! running average height), which makes "jump to row 750" possible without measuring rows
//! 0..750.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`RowProvider`] that measures, materializes and recycles rows
//! - the scroll offset and viewport height on every scroll/resize/row-count change
//! - the offset correction returned by [`WindowManager::recompute`] back to its scrollbar
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod distance;
mod engine;
mod error;
mod estimator;
mod gc;
mod lock;
mod options;
pub mod probe;
mod provider;
mod state;
mod table;
mod types;


pub use distance::Distance;
pub use engine::WindowManager;
pub use error::InvariantViolation;
pub use estimator::HeightEstimator;
pub use gc::GarbageCollector;
pub use lock::LockController;
pub use options::WindowOptions;
pub use probe::Located;
pub use provider::RowProvider;
pub use state::WindowState;
pub use table::DistanceTable;
pub use types::{Phase, Recompute, RowRect, RowState, Window};
