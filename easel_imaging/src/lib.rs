// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Imaging: the backend-agnostic paint surface.
//!
//! This crate defines the narrow seam between Easel's frame scheduler /
//! element kinds and a concrete render surface (an HTML canvas context, a
//! CPU rasterizer, a test recorder). The [`Surface`] trait carries exactly
//! two families of operations:
//!
//! - **Clearing**: [`Surface::clear_all`] and [`Surface::clear_region`],
//!   the primitives the incremental renderer needs to erase stale pixels
//!   before repainting.
//! - **Drawing**: the small set of operations the built-in element kinds
//!   emit: rectangles, paths, images, and single text lines. How these
//!   become pixels is entirely the backend's concern; this crate never
//!   rasterizes anything.
//!
//! All coordinates given to a surface are in device pixels. Text layout and
//! measurement happen upstream; a surface only ever receives already
//! positioned lines.
//!
//! Images follow the resource-handle model: a backend hands out opaque
//! [`ImageId`]s from [`Surface::register_image`], and those ids are bound to
//! that surface's resource environment; using an id on a different surface
//! is a caller bug that backends may surface as [`PaintError::Backend`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;

/// Identifier for an image resource registered with a [`Surface`].
///
/// A small, opaque handle that is stable for the lifetime of the resource
/// and meaningless outside the surface that issued it.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Stroke description for outlined shapes and curves.
///
/// Width is in the coordinate space of the operation it accompanies, so
/// callers painting in device pixels must pre-scale world-space widths.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width, centered on the path.
    pub width: f64,
}

impl StrokeStyle {
    /// Creates a stroke style with the given width.
    #[must_use]
    pub const fn new(width: f64) -> Self {
        Self { width }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { width: 1.0 }
    }
}

/// A failure while painting one element.
///
/// Paint failures are contained at the frame scheduler's dispatch boundary:
/// one bad element is logged and skipped, never allowed to blank the frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintError {
    /// An image resource failed to decode or is otherwise unusable.
    ImageUnavailable,
    /// The backend rejected an operation.
    Backend {
        /// Backend-specific description of the rejection.
        reason: String,
    },
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageUnavailable => write!(f, "image resource unavailable"),
            Self::Backend { reason } => write!(f, "backend rejected paint operation: {reason}"),
        }
    }
}

impl core::error::Error for PaintError {}

/// A render surface that can be cleared and drawn onto.
///
/// Implementations own the pixels (or a recording of the operations). The
/// frame scheduler holds exclusive write access to the surface for the
/// duration of a tick; nothing else touches it.
///
/// Drawing operations are infallible at this layer: a backend that cannot
/// honor an operation should render nothing for it, and callers that detect
/// unusable inputs beforehand (for example an image that failed to decode)
/// report that as a [`PaintError`] instead of calling in.
pub trait Surface {
    /// Registers an image resource of the given pixel dimensions and
    /// returns its handle.
    fn register_image(&mut self, width: u32, height: u32) -> ImageId;

    /// Clears the entire surface.
    fn clear_all(&mut self);

    /// Clears exactly `region` (device pixels).
    fn clear_region(&mut self, region: Rect);

    /// Fills a rectangle with a brush.
    fn fill_rect(&mut self, rect: Rect, brush: &Brush);

    /// Strokes a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, style: StrokeStyle, brush: &Brush);

    /// Fills a path.
    fn fill_path(&mut self, path: &BezPath, brush: &Brush);

    /// Strokes a path.
    fn stroke_path(&mut self, path: &BezPath, style: StrokeStyle, brush: &Brush);

    /// Draws a registered image into `dest`.
    fn draw_image(&mut self, image: ImageId, dest: Rect);

    /// Fills a single line of already laid-out text.
    ///
    /// `origin` is the baseline start; `font_size` is in device pixels.
    fn fill_text_line(&mut self, text: &str, origin: Point, font_size: f64, brush: &Brush);
}
