// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Imaging Reference Surface.
//!
//! This crate provides a small, stateful implementation of
//! [`Surface`] for **operation recording**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It does **not** establish "golden" rendering behavior across backends.
//! - It is intended primarily for tests and debugging that want to assert on
//!   the operations a frame emitted, and in what order: which regions were
//!   cleared, which elements painted, what was skipped.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use easel_imaging::{ImageId, StrokeStyle, Surface};
use kurbo::{BezPath, Point, Rect};
use peniko::Brush;

/// One recorded surface operation.
#[derive(Clone, Debug)]
pub enum SurfaceEvent {
    /// An image resource was registered.
    RegisterImage {
        /// The handle that was issued.
        image: ImageId,
        /// Pixel width of the resource.
        width: u32,
        /// Pixel height of the resource.
        height: u32,
    },
    /// The whole surface was cleared.
    ClearAll,
    /// A region was cleared.
    ClearRegion(Rect),
    /// A rectangle was filled.
    FillRect {
        /// Device-space rectangle.
        rect: Rect,
        /// Fill brush.
        brush: Brush,
    },
    /// A rectangle outline was stroked.
    StrokeRect {
        /// Device-space rectangle.
        rect: Rect,
        /// Stroke description.
        style: StrokeStyle,
        /// Stroke brush.
        brush: Brush,
    },
    /// A path was filled.
    FillPath {
        /// Device-space path.
        path: BezPath,
        /// Fill brush.
        brush: Brush,
    },
    /// A path was stroked.
    StrokePath {
        /// Device-space path.
        path: BezPath,
        /// Stroke description.
        style: StrokeStyle,
        /// Stroke brush.
        brush: Brush,
    },
    /// An image was drawn.
    DrawImage {
        /// The image resource.
        image: ImageId,
        /// Device-space destination rectangle.
        dest: Rect,
    },
    /// A text line was filled.
    FillTextLine {
        /// The line's text.
        text: String,
        /// Baseline start in device pixels.
        origin: Point,
        /// Font size in device pixels.
        font_size: f64,
    },
}

/// Recording implementation of [`Surface`].
///
/// Stores registered image dimensions in a vector keyed by handle and logs
/// every call as a [`SurfaceEvent`] in application order.
#[derive(Default, Debug)]
pub struct RefSurface {
    images: Vec<(u32, u32)>,
    events: Vec<SurfaceEvent>,
}

impl RefSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in application order.
    #[must_use]
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Clears the event log but keeps registered resources.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Returns the dimensions of a registered image, if the handle is known.
    #[must_use]
    pub fn image_size(&self, image: ImageId) -> Option<(u32, u32)> {
        self.images.get(image.0 as usize).copied()
    }

    /// Returns every cleared region, in order. A full clear is not a region.
    #[must_use]
    pub fn cleared_regions(&self) -> Vec<Rect> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::ClearRegion(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    /// Returns how many times the whole surface was cleared.
    #[must_use]
    pub fn clear_all_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::ClearAll))
            .count()
    }

    /// Returns how many draw operations (fills, strokes, images, text) were
    /// recorded.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    SurfaceEvent::FillRect { .. }
                        | SurfaceEvent::StrokeRect { .. }
                        | SurfaceEvent::FillPath { .. }
                        | SurfaceEvent::StrokePath { .. }
                        | SurfaceEvent::DrawImage { .. }
                        | SurfaceEvent::FillTextLine { .. }
                )
            })
            .count()
    }
}

impl Surface for RefSurface {
    fn register_image(&mut self, width: u32, height: u32) -> ImageId {
        let image = ImageId(u32::try_from(self.images.len()).expect("image id space exhausted"));
        self.images.push((width, height));
        self.events.push(SurfaceEvent::RegisterImage {
            image,
            width,
            height,
        });
        image
    }

    fn clear_all(&mut self) {
        self.events.push(SurfaceEvent::ClearAll);
    }

    fn clear_region(&mut self, region: Rect) {
        self.events.push(SurfaceEvent::ClearRegion(region));
    }

    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        self.events.push(SurfaceEvent::FillRect {
            rect,
            brush: brush.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, style: StrokeStyle, brush: &Brush) {
        self.events.push(SurfaceEvent::StrokeRect {
            rect,
            style,
            brush: brush.clone(),
        });
    }

    fn fill_path(&mut self, path: &BezPath, brush: &Brush) {
        self.events.push(SurfaceEvent::FillPath {
            path: path.clone(),
            brush: brush.clone(),
        });
    }

    fn stroke_path(&mut self, path: &BezPath, style: StrokeStyle, brush: &Brush) {
        self.events.push(SurfaceEvent::StrokePath {
            path: path.clone(),
            style,
            brush: brush.clone(),
        });
    }

    fn draw_image(&mut self, image: ImageId, dest: Rect) {
        self.events.push(SurfaceEvent::DrawImage { image, dest });
    }

    fn fill_text_line(&mut self, text: &str, origin: Point, font_size: f64, _brush: &Brush) {
        self.events.push(SurfaceEvent::FillTextLine {
            text: String::from(text),
            origin,
            font_size,
        });
    }
}
