// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-tick clear/filter/paint driver.

use alloc::vec::Vec;

use easel_damage::{DamageTracker, RepaintPlan, is_paintable};
use easel_imaging::Surface;
use easel_scene::{ElementId, Scene};
use easel_view2d::CanvasViewport;
use kurbo::{Rect, Size};
use log::warn;

use crate::overlay::OverlayPainter;

/// What a tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing was dirty; the surface was not touched.
    Skipped,
    /// The frame painted.
    Painted {
        /// Whether the whole surface was cleared and repainted.
        full: bool,
        /// Number of regions cleared (`0` for a full redraw's single
        /// whole-surface clear).
        cleared: usize,
        /// Number of elements (plus overlay, if any) painted successfully.
        painted: usize,
        /// Number of paint failures contained this frame.
        failed: usize,
    },
}

/// Drives one paint per display tick from the accumulated damage.
///
/// The scheduler exclusively owns the [`DamageTracker`]: application code
/// marks damage through the scheduler's methods and never reaches into the
/// pending set directly. That ownership boundary is what keeps the
/// mark/consume contract sound without any locking: marking happens
/// synchronously between ticks, consumption happens exactly once inside
/// [`tick`](Self::tick).
///
/// The scheduler also exclusively owns surface writes for the duration of a
/// tick. It holds no reference to the scene, viewport, or surface between
/// ticks; they are passed in explicitly each time.
#[derive(Debug)]
pub struct FrameScheduler {
    damage: DamageTracker,
    surface_size: Option<Size>,
    seam_pad: f64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    /// Pixels of extra clearing around each damage region, so anti-aliased
    /// edges straddling a region boundary re-rasterize without seams.
    pub const DEFAULT_SEAM_PAD: f64 = 1.0;

    /// Creates a scheduler with a full first frame pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            damage: DamageTracker::new(),
            surface_size: None,
            seam_pad: Self::DEFAULT_SEAM_PAD,
        }
    }

    /// Overrides the seam padding applied around cleared regions.
    #[must_use]
    pub fn with_seam_pad(mut self, seam_pad: f64) -> Self {
        self.seam_pad = seam_pad.max(0.0);
        self
    }

    /// Records that a device-space region needs repainting.
    ///
    /// See [`DamageTracker::mark_region`] for the validity rules.
    pub fn mark_region(&mut self, region: Rect) {
        self.damage.mark_region(region);
    }

    /// Requests a full redraw on the next tick.
    pub fn mark_everything(&mut self) {
        self.damage.mark_everything();
    }

    /// Records the surface's physical size, forcing a full redraw when it
    /// actually changed.
    ///
    /// Partial plans accumulated before a resize describe coordinates in a
    /// space that no longer exists; they must not survive it.
    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        let size = Size::new(width, height);
        if self.surface_size != Some(size) {
            self.surface_size = Some(size);
            self.damage.mark_everything();
        }
    }

    /// Read-only view of the damage state, for diagnostics.
    #[must_use]
    pub fn damage(&self) -> &DamageTracker {
        &self.damage
    }

    /// Runs one frame.
    ///
    /// Takes the plan, clears, paints, and reports what happened. With no
    /// pending damage and no active overlay this is a true no-op: the
    /// surface is never touched, which is what keeps an idle canvas free.
    pub fn tick(
        &mut self,
        scene: &Scene,
        viewport: &CanvasViewport,
        surface: &mut dyn Surface,
        overlay: Option<&dyn OverlayPainter>,
    ) -> FrameOutcome {
        // An active overlay's visuals follow the pointer and change every
        // tick; its frame is always a repaint.
        let overlay = overlay.filter(|o| o.wants_frame());
        if overlay.is_some() {
            self.damage.mark_everything();
        }

        match self.damage.take_plan() {
            RepaintPlan::Everything => {
                surface.clear_all();
                let (painted, failed) =
                    self.paint_elements(scene, &scene.paint_candidates(), viewport, surface, None);
                let (painted, failed) =
                    paint_overlay(overlay, viewport, surface, painted, failed);
                FrameOutcome::Painted {
                    full: true,
                    cleared: 0,
                    painted,
                    failed,
                }
            }
            RepaintPlan::Regions(regions) if regions.is_empty() => FrameOutcome::Skipped,
            RepaintPlan::Regions(regions) => {
                // Clear slightly more than the damage: snapped outward to
                // whole pixels plus the seam pad, clipped to the surface
                // when its size is known. Element filtering must use the
                // *cleared* rects, not the raw damage; an element whose
                // pixels sit only in the seam was still erased and must
                // repaint.
                let bound = self
                    .surface_size
                    .map(|size| Rect::new(0.0, 0.0, size.width, size.height));
                let cleared: Vec<Rect> = regions
                    .iter()
                    .map(|r| r.inflate(self.seam_pad, self.seam_pad).expand())
                    .map(|r| bound.map_or(r, |b| r.intersect(b)))
                    .filter(|r| is_paintable(*r))
                    .collect();
                if cleared.is_empty() {
                    // All damage fell outside the surface; no pixel changed.
                    return FrameOutcome::Skipped;
                }
                for region in &cleared {
                    surface.clear_region(*region);
                }
                let candidates = scene.intersecting(viewport, &cleared);
                let (painted, failed) =
                    self.paint_elements(scene, &candidates, viewport, surface, Some(&cleared));
                FrameOutcome::Painted {
                    full: false,
                    cleared: cleared.len(),
                    painted,
                    failed,
                }
            }
        }
    }

    fn paint_elements(
        &self,
        scene: &Scene,
        ids: &[ElementId],
        viewport: &CanvasViewport,
        surface: &mut dyn Surface,
        damage: Option<&[Rect]>,
    ) -> (usize, usize) {
        let mut painted = 0;
        let mut failed = 0;
        for &id in ids {
            let Some(element) = scene.get(id) else {
                continue;
            };
            match element.paint(surface, viewport, damage) {
                Ok(()) => painted += 1,
                Err(err) => {
                    failed += 1;
                    warn!("skipping element {id:?} this frame: {err}");
                }
            }
        }
        (painted, failed)
    }
}

fn paint_overlay(
    overlay: Option<&dyn OverlayPainter>,
    viewport: &CanvasViewport,
    surface: &mut dyn Surface,
    mut painted: usize,
    mut failed: usize,
) -> (usize, usize) {
    if let Some(overlay) = overlay {
        match overlay.paint(surface, viewport) {
            Ok(()) => painted += 1,
            Err(err) => {
                failed += 1;
                warn!("skipping overlay this frame: {err}");
            }
        }
    }
    (painted, failed)
}
