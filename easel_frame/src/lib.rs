// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Frame: the tick-driven scheduler that turns damage into paint.
//!
//! One [`FrameScheduler::tick`] runs per display refresh, driven by whatever
//! owns the tick source (`requestAnimationFrame`, a winit redraw loop, a
//! test harness). Each tick:
//!
//! 1. Takes the frame's [`RepaintPlan`](easel_damage::RepaintPlan) from the
//!    scheduler-owned [`DamageTracker`](easel_damage::DamageTracker).
//! 2. For a full redraw, clears the whole surface and paints every visible
//!    element in draw order.
//! 3. For a partial redraw, clears exactly the merged damage regions,
//!    snapped outward to whole pixels with a small seam buffer so that
//!    anti-aliased edges re-rasterize cleanly, and repaints only the
//!    elements overlapping them.
//! 4. For an empty plan, does nothing at all: no clear, no paint.
//!
//! A paint failure in one element never aborts the frame. It is caught at
//! the dispatch boundary, logged through the [`log`] facade, and counted in
//! the returned [`FrameOutcome`]; the remaining elements still paint. There
//! is no retry; when the element's underlying resource recovers, a later
//! mark repaints it normally.
//!
//! Everything here is single-threaded and cooperative: marks made from
//! event handlers or load callbacks before a tick are included in that
//! tick's plan; marks made during or after painting land in the next one.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod overlay;
mod scheduler;

pub use overlay::OverlayPainter;
pub use scheduler::{FrameOutcome, FrameScheduler};
