// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient tool overlays painted on top of the scene.

use core::fmt::Debug;

use easel_imaging::{PaintError, Surface};
use easel_view2d::CanvasViewport;

/// A producer of transient, input-driven visuals such as an in-progress
/// curve preview or a rubber-band selection box.
///
/// The scheduler knows nothing about the overlay's semantics. It asks two
/// things: whether the overlay wants this frame painted at all, and, after
/// the scene has painted, to paint itself on top. While
/// [`wants_frame`](Self::wants_frame) returns `true`, every tick repaints:
/// the overlay's inputs are mouse-driven and change continuously, so there
/// is no damage to track more precisely.
pub trait OverlayPainter: Debug {
    /// Returns `true` while the interactive mode is active and its visuals
    /// change with input, forcing a repaint this tick.
    fn wants_frame(&self) -> bool;

    /// Paints the overlay above all scene elements.
    ///
    /// Failures are contained exactly like element paint failures.
    fn paint(
        &self,
        surface: &mut dyn Surface,
        viewport: &CanvasViewport,
    ) -> Result<(), PaintError>;
}
