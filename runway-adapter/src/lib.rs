//! Viewport and view-repeater wiring for the `runway` crate.
//!
//! The `runway` crate is UI-agnostic and focuses on the core math and state. This crate provides
//! the lifecycle an adapter needs around it:
//!
//! - explicit `attach(viewport, repeater)` / `detach()`,
//! - per-frame coalescing of scroll, resize and recalculation requests,
//! - positioning of mounted views and the render callback.
//!
//! This crate is intentionally framework-agnostic: the host implements [`Viewport`] and
//! [`ViewRepeater`] for its own scroll container and view recycler.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod repeater;
mod viewport;


pub use controller::Controller;
pub use repeater::ViewRepeater;
pub use viewport::{ScrollBehavior, Viewport};
