// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slideout Ghost Click: suppress the duplicate click a touch browser fires after a handled tap.
//!
//! ## Overview
//!
//! Mobile browsers that synthesize a `click` roughly 300 ms after `touchend` will deliver that
//! click even when a custom tap handler already acted on the touch. The handler activates, and
//! whatever sits under the finger activates a second time.
//!
//! This crate provides [`GhostClickFilter`](crate::filter::GhostClickFilter):
//! - A tap handler that consumes a touch calls
//!   [`record_synthetic`](crate::filter::GhostClickFilter::record_synthetic) with the tap point.
//! - A capture-phase click listener calls [`on_click`](crate::filter::GhostClickFilter::on_click)
//!   and cancels the click when the verdict is [`ClickVerdict::Suppress`](crate::filter::ClickVerdict::Suppress).
//!
//! A click is suppressed when it lands inside a square box (`|dx| < radius && |dy| < radius`)
//! around any live record. Records live for a fixed window after they are recorded.
//!
//! ## Time
//!
//! The filter never reads a clock. Pass monotonic time (for example milliseconds since page
//! load, as a [`Duration`](core::time::Duration)) into every call that can expire records.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use slideout_ghostclick::{ClickVerdict, GhostClickFilter};
//!
//! let mut filter = GhostClickFilter::new();
//! filter.record_synthetic(Point::new(100.0, 100.0), Duration::ZERO);
//!
//! // The browser's ghost click lands a few pixels away half a second later.
//! let ghost = filter.on_click(Point::new(110.0, 105.0), Duration::from_millis(500));
//! assert_eq!(ghost, ClickVerdict::Suppress);
//!
//! // Once the window has passed, the same point is a real click again.
//! let real = filter.on_click(Point::new(110.0, 105.0), Duration::from_millis(1500));
//! assert_eq!(real, ClickVerdict::Allow);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod filter;

pub use config::FilterConfig;
pub use filter::{ClickVerdict, GhostClickFilter};
