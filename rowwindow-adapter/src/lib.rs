//! Adapter utilities for the `rowwindow` crate.
//!
//! The `rowwindow` crate is UI-agnostic and only knows offsets and row indexes. This crate
//! provides a small, framework-neutral [`Controller`] that plays the part of the hosting scroll
//! container:
//!
//! - owns the scroll offset, viewport height and content width
//! - clamps scrolling to the published content height
//! - keeps an edited row in view after inserts and removals
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod state;


pub use controller::Controller;
pub use state::FrameState;
