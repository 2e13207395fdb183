// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame damage accumulation.

use core::mem;

use kurbo::Rect;
use smallvec::SmallVec;

use crate::merge::merge_damage;
use crate::plan::RepaintPlan;
use crate::region::is_paintable;

/// Typical number of discrete mutations per frame; marks beyond this spill
/// to the heap.
const INLINE_REGIONS: usize = 8;

/// Accumulates damage between ticks and hands the scheduler a repaint plan.
///
/// The tracker owns two pieces of per-frame state: the list of pending damage
/// regions, and a full-redraw flag that dominates them. Application code
/// calls [`mark_region`](Self::mark_region) or
/// [`mark_everything`](Self::mark_everything) synchronously from event
/// handlers or load-completion callbacks; the effect is only observed at the
/// next tick's [`take_plan`](Self::take_plan).
///
/// A new tracker starts with a full redraw pending: the first frame has no
/// prior content to diff against.
///
/// Taking the plan is destructive (take, don't peek), so no region is ever
/// consumed twice. All marks that happen before a given `take_plan` call are
/// included in that plan; marks during or after painting land in the next
/// one.
///
/// A generation counter increments on every state change, letting embedders
/// detect whether damage arrived since a previous observation.
///
/// # Example
///
/// ```
/// use easel_damage::{DamageTracker, RepaintPlan};
/// use kurbo::Rect;
///
/// let mut tracker = DamageTracker::new();
/// let _ = tracker.take_plan(); // first frame: everything
///
/// tracker.mark_region(Rect::new(10.0, 10.0, 20.0, 20.0));
/// tracker.mark_everything();
/// // Full redraw dominates the marked region.
/// assert_eq!(tracker.take_plan(), RepaintPlan::Everything);
/// ```
#[derive(Clone, Debug)]
pub struct DamageTracker {
    pending: SmallVec<[Rect; INLINE_REGIONS]>,
    full: bool,
    generation: u64,
}

impl Default for DamageTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DamageTracker {
    /// Creates a tracker with a full redraw pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: SmallVec::new(),
            full: true,
            generation: 0,
        }
    }

    /// Records that `region` (device pixels) needs repainting.
    ///
    /// Unpaintable rects (non-positive width or height, or non-finite
    /// coordinates) are dropped silently. Damage marking is a best-effort
    /// hint, not a transaction: the worst consequence of a dropped mark is a
    /// stale area until the next full redraw, so a caller bug here is not
    /// worth a panic or an error path. Negative origins are kept; they are
    /// valid positions partially off the top-left of the surface.
    pub fn mark_region(&mut self, region: Rect) {
        if !is_paintable(region) {
            return;
        }
        self.generation = self.generation.wrapping_add(1);
        self.pending.push(region);
    }

    /// Requests a full redraw of the surface.
    ///
    /// Pending regions are discarded; the flag dominates them at plan time
    /// anyway, and dropping them keeps the list from growing during
    /// full-redraw bursts such as a window drag-resize.
    pub fn mark_everything(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.full = true;
        self.pending.clear();
    }

    /// Takes and resets the current frame's repaint plan.
    ///
    /// Returns [`RepaintPlan::Everything`] if a full redraw was requested,
    /// otherwise the merged pending regions (possibly empty, meaning skip
    /// the frame). The tracker is left clean: a second call without an
    /// intervening mark returns an empty partial plan.
    #[must_use]
    pub fn take_plan(&mut self) -> RepaintPlan {
        self.generation = self.generation.wrapping_add(1);
        let full = mem::take(&mut self.full);
        let pending = mem::take(&mut self.pending);
        if full {
            RepaintPlan::Everything
        } else {
            RepaintPlan::Regions(merge_damage(pending.into_vec()))
        }
    }

    /// Returns `true` if no damage is pending at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.full && self.pending.is_empty()
    }

    /// Returns `true` if a full redraw is pending.
    #[must_use]
    pub fn is_full_pending(&self) -> bool {
        self.full
    }

    /// Returns the number of pending regions (zero while a full redraw is
    /// pending).
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns the current generation.
    ///
    /// Incremented on every mark and on every taken plan.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
