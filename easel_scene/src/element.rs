// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawable-element capability trait and per-element flags.

use core::fmt::Debug;

use easel_imaging::{PaintError, Surface};
use easel_view2d::CanvasViewport;
use kurbo::Rect;

/// A drawable scene element.
///
/// Implementations keep their geometry in world space (center-origin, Y-up)
/// and derive device-space coordinates through the viewport at query and
/// paint time. The renderer treats elements uniformly through this trait;
/// there is no type tag to switch on.
pub trait Element: Debug {
    /// Returns the element's current bounding rectangle in device pixels,
    /// or `None` if the bounds cannot be computed yet (unmeasured text, an
    /// image without a known size).
    ///
    /// Must be stable within a tick: repeated calls without an intervening
    /// mutation return the same value.
    fn screen_bounds(&self, viewport: &CanvasViewport) -> Option<Rect>;

    /// Paints the element onto `surface`.
    ///
    /// `damage` is `Some` during a partial repaint, listing the cleared
    /// regions; elements may use it to skip work outside those regions.
    /// `None` means a full redraw: paint unconditionally.
    ///
    /// A returned error is contained by the scheduler: the element is
    /// skipped for this frame and the rest of the scene still paints.
    fn paint(
        &self,
        surface: &mut dyn Surface,
        viewport: &CanvasViewport,
        damage: Option<&[Rect]>,
    ) -> Result<(), PaintError>;
}

bitflags::bitflags! {
    /// Element flags controlling participation in rendering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is visible (participates in painting and damage
        /// filtering). Toggling visibility is a scene mutation; the caller
        /// must mark the element's bounds damaged alongside it.
        const VISIBLE = 0b0000_0001;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}
