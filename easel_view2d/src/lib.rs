// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel View 2D: the center-origin, Y-up canvas viewport.
//!
//! Easel's drawing surface uses a logical world space whose origin sits at
//! the center of the canvas with Y pointing up, while the render surface uses
//! device pixels with the origin at the top-left and Y pointing down. This
//! crate provides [`CanvasViewport`], the pure, stateless-per-tick linear
//! transform between the two, including the DPI scale factor applied when
//! mapping logical units onto physical pixels.
//!
//! The viewport owns no scene and no surface. Callers are expected to:
//! - Keep element geometry in world space.
//! - Derive device-space bounds and paint coordinates through the viewport.
//! - Treat a device-size or scale change as a full-redraw event (the setters
//!   report whether anything actually changed).
//!
//! ```rust
//! use easel_view2d::CanvasViewport;
//! use kurbo::Point;
//!
//! let viewport = CanvasViewport::new(800.0, 600.0);
//!
//! // World origin maps to the center of the surface.
//! assert_eq!(viewport.world_to_device_point(Point::ZERO), Point::new(400.0, 300.0));
//! // +Y in world space is up on the screen.
//! assert_eq!(viewport.world_to_device_point(Point::new(0.0, 100.0)), Point::new(400.0, 200.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Affine, Point, Rect, Size};

/// Maps the logical center-origin, Y-up world plane onto a device-pixel
/// surface.
///
/// The mapping is linear: a uniform DPI scale, a Y flip, and a translation
/// putting the world origin at the surface center. Forward and inverse
/// affines are cached and rebuilt on mutation, so conversions are a single
/// matrix application and the transform is trivially stable within a tick
/// (plain value type, no interior mutability).
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasViewport {
    device_width: f64,
    device_height: f64,
    scale: f64,
    world_to_device: Affine,
    device_to_world: Affine,
}

impl CanvasViewport {
    /// Creates a viewport over a surface of the given physical pixel size,
    /// with a DPI scale of `1.0`.
    #[must_use]
    pub fn new(device_width: f64, device_height: f64) -> Self {
        Self::with_scale(device_width, device_height, 1.0)
    }

    /// Creates a viewport with an explicit DPI scale factor (logical world
    /// units to physical pixels).
    ///
    /// A non-finite or non-positive scale falls back to `1.0`.
    #[must_use]
    pub fn with_scale(device_width: f64, device_height: f64, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        let mut viewport = Self {
            device_width: device_width.max(0.0),
            device_height: device_height.max(0.0),
            scale,
            world_to_device: Affine::IDENTITY,
            device_to_world: Affine::IDENTITY,
        };
        viewport.rebuild_transforms();
        viewport
    }

    /// Returns the surface size in physical pixels.
    #[must_use]
    pub fn device_size(&self) -> Size {
        Size::new(self.device_width, self.device_height)
    }

    /// Returns the full surface rectangle in device pixels.
    #[must_use]
    pub fn device_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.device_width, self.device_height)
    }

    /// Returns the current DPI scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the surface's physical pixel size.
    ///
    /// Returns `true` if the size actually changed. Any change invalidates
    /// every previously derived device coordinate, so callers must follow a
    /// `true` return with a full-redraw mark.
    pub fn set_device_size(&mut self, device_width: f64, device_height: f64) -> bool {
        let device_width = device_width.max(0.0);
        let device_height = device_height.max(0.0);
        if self.device_width == device_width && self.device_height == device_height {
            return false;
        }
        self.device_width = device_width;
        self.device_height = device_height;
        self.rebuild_transforms();
        true
    }

    /// Sets the DPI scale factor.
    ///
    /// Non-finite or non-positive values are ignored. Returns `true` if the
    /// scale actually changed; as with a resize, a change requires a full
    /// redraw.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        if !(scale.is_finite() && scale > 0.0) || self.scale == scale {
            return false;
        }
        self.scale = scale;
        self.rebuild_transforms();
        true
    }

    /// Returns the world→device affine.
    ///
    /// Useful for transforming whole paths in one application.
    #[must_use]
    pub fn world_to_device(&self) -> Affine {
        self.world_to_device
    }

    /// Returns the device→world affine.
    #[must_use]
    pub fn device_to_world(&self) -> Affine {
        self.device_to_world
    }

    /// Converts a world-space point to device pixels.
    #[must_use]
    pub fn world_to_device_point(&self, point: Point) -> Point {
        self.world_to_device * point
    }

    /// Converts a device-pixel point to world space.
    #[must_use]
    pub fn device_to_world_point(&self, point: Point) -> Point {
        self.device_to_world * point
    }

    /// Converts a world-space rectangle to device pixels.
    ///
    /// The Y flip swaps which corners are minimal, so the result is rebuilt
    /// from the transformed corners rather than transformed edge-by-edge.
    #[must_use]
    pub fn world_to_device_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.world_to_device * Point::new(rect.x0, rect.y0),
            self.world_to_device * Point::new(rect.x1, rect.y1),
        )
    }

    /// Converts a device-pixel rectangle to world space.
    #[must_use]
    pub fn device_to_world_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.device_to_world * Point::new(rect.x0, rect.y0),
            self.device_to_world * Point::new(rect.x1, rect.y1),
        )
    }

    fn rebuild_transforms(&mut self) {
        // Scale, flip Y, then translate the world origin to the surface
        // center. Column-major coefficients [a, b, c, d, e, f] for
        // [x' = a*x + c*y + e, y' = b*x + d*y + f].
        self.world_to_device = Affine::new([
            self.scale,
            0.0,
            0.0,
            -self.scale,
            self.device_width / 2.0,
            self.device_height / 2.0,
        ]);
        self.device_to_world = self.world_to_device.inverse();
    }
}
