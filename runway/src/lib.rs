//! A headless virtual scrolling engine for lists of dynamically sized items.
//!
//! For the viewport/view-repeater lifecycle (attach, detach, per-frame coalescing), see the
//! `runway-adapter` crate.
//!
//! The engine decides which contiguous range of items must be materialized and where each of
//! them goes, without ever summing the size of every item on a scroll tick:
//! - a [`SizeTable`] caches one size per item and the content size,
//! - an [`AnchorTracker`] converts scroll deltas into an (item, offset) anchor by walking only
//!   the items it skips,
//! - a [`RangeCalculator`] turns the anchor into a render range with asymmetric runway buffers,
//! - a [`PositionPass`] hands out absolute offsets to mounted items in `O(range length)`.
//!
//! [`Engine`] ties them together. It is UI-agnostic; the host provides:
//! - data snapshots and a sizing function,
//! - the container size,
//! - the scroll offset, at most once per rendering frame.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod engine;
mod options;
mod position;
mod range;
mod size_table;
mod state;
mod types;


pub use anchor::AnchorTracker;
pub use engine::Engine;
pub use options::{
    DEFAULT_ITEM_SIZE, DEFAULT_RUNWAY_ITEMS, DEFAULT_RUNWAY_ITEMS_OPPOSITE, ItemSizeFn,
    OnChangeCallback, RunwayOptions,
};
pub use position::PositionPass;
pub use range::{RangeCalculator, RangeComputation};
pub use size_table::{SizeSync, SizeTable};
pub use state::ViewportState;
pub use types::{Anchor, Change, PositionedItem, RenderRange, ScrollDirection};
