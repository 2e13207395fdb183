// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Damage: damage-region accumulation, merging, and repaint planning.
//!
//! This crate is the bookkeeping half of Easel's incremental renderer. Frames
//! are expensive; most of the time only a small part of the surface actually
//! changed. Application code records what changed as device-pixel rectangles
//! (or as "everything"), and once per display tick the scheduler takes a
//! [`RepaintPlan`] describing the minimal work for that frame.
//!
//! It models damage as a combination of:
//!
//! - **Regions**: plain [`kurbo::Rect`] values in device-pixel space. The
//!   [`region`] module supplies the validity and overlap algebra over them.
//! - **Merging** ([`merge_damage`]): collapses overlapping regions into a
//!   non-overlapping covering set via repeated bounding-box unions.
//! - **Tracking** ([`DamageTracker`]): the per-frame mutable state (pending
//!   regions plus a full-redraw flag), consumed destructively once per tick.
//!
//! ## Quick start
//!
//! ```rust
//! use easel_damage::{DamageTracker, RepaintPlan};
//! use kurbo::Rect;
//!
//! let mut tracker = DamageTracker::new();
//!
//! // The first frame always repaints everything.
//! assert_eq!(tracker.take_plan(), RepaintPlan::Everything);
//!
//! // Record two overlapping mutations; they merge into one region.
//! tracker.mark_region(Rect::new(0.0, 0.0, 10.0, 10.0));
//! tracker.mark_region(Rect::new(5.0, 5.0, 15.0, 15.0));
//! let RepaintPlan::Regions(regions) = tracker.take_plan() else {
//!     unreachable!()
//! };
//! assert_eq!(regions, vec![Rect::new(0.0, 0.0, 15.0, 15.0)]);
//!
//! // Taking the plan resets the tracker.
//! assert!(tracker.is_clean());
//! ```
//!
//! ## Semantics
//!
//! - Marking is a best-effort hint, never a fallible transaction: rectangles
//!   with non-positive width or height (or non-finite coordinates) are
//!   silently dropped.
//! - A full-redraw request dominates any accumulated regions.
//! - Merging trades precision for simplicity: the output may cover more area
//!   than the input union (bounding boxes, not polygons), but never less.
//!   Over-clearing is safe; under-clearing is a correctness bug.
//!
//! ## `no_std` support
//!
//! This crate is `no_std` and uses `alloc`. Enable the `std` feature (default)
//! or `libm` to select Kurbo's float backend.

#![no_std]

extern crate alloc;

mod merge;
mod plan;
pub mod region;
mod tracker;

pub use merge::merge_damage;
pub use plan::RepaintPlan;
pub use region::{is_paintable, overlaps};
pub use tracker::DamageTracker;
