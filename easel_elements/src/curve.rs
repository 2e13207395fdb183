// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-segment cubic Bezier curves.

use easel_imaging::{PaintError, StrokeStyle, Surface};
use easel_scene::Element;
use easel_view2d::CanvasViewport;
use kurbo::{BezPath, CubicBez, Rect, Shape};
use peniko::Brush;

/// A stroked chain of cubic Bezier segments.
///
/// Segments are stored as one world-space [`BezPath`]; authoring tools
/// append segments one at a time as the user places control points.
#[derive(Clone, Debug)]
pub struct CurvePath {
    path: BezPath,
    /// End point of the last appended segment, for subpath continuation.
    last_end: Option<kurbo::Point>,
    style: StrokeStyle,
    brush: Brush,
}

impl CurvePath {
    /// Creates an empty curve.
    #[must_use]
    pub fn new(style: StrokeStyle, brush: Brush) -> Self {
        Self {
            path: BezPath::new(),
            last_end: None,
            style,
            brush,
        }
    }

    /// Creates a curve from a sequence of cubic segments.
    ///
    /// Disconnected segments each start their own subpath.
    #[must_use]
    pub fn from_cubics(
        cubics: impl IntoIterator<Item = CubicBez>,
        style: StrokeStyle,
        brush: Brush,
    ) -> Self {
        let mut curve = Self::new(style, brush);
        for cubic in cubics {
            curve.push_segment(cubic);
        }
        curve
    }

    /// Appends one cubic segment.
    ///
    /// Continues the current subpath when the segment starts where the
    /// previous one ended; otherwise starts a new subpath. The caller owns
    /// damage marking for the grown bounds.
    pub fn push_segment(&mut self, cubic: CubicBez) {
        if self.last_end != Some(cubic.p0) {
            self.path.move_to(cubic.p0);
        }
        self.path.curve_to(cubic.p1, cubic.p2, cubic.p3);
        self.last_end = Some(cubic.p3);
    }

    /// Returns the number of path segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.path.segments().count()
    }

    /// Returns the world-space path.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Returns the world-space bounds: the path's bounding box inflated by
    /// half the stroke width on every side (the stroke is centered, and the
    /// half-width also covers round caps and joins).
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        if self.path.elements().is_empty() {
            return None;
        }
        let half = self.style.width / 2.0;
        Some(self.path.bounding_box().inflate(half, half))
    }
}

impl Element for CurvePath {
    fn screen_bounds(&self, viewport: &CanvasViewport) -> Option<Rect> {
        self.world_bounds()
            .map(|world| viewport.world_to_device_rect(world))
    }

    fn paint(
        &self,
        surface: &mut dyn Surface,
        viewport: &CanvasViewport,
        _damage: Option<&[Rect]>,
    ) -> Result<(), PaintError> {
        if self.path.elements().is_empty() {
            return Ok(());
        }
        let mut device_path = self.path.clone();
        device_path.apply_affine(viewport.world_to_device());
        let device_style = StrokeStyle::new(self.style.width * viewport.scale());
        surface.stroke_path(&device_path, device_style, &self.brush);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_imaging_ref::{RefSurface, SurfaceEvent};
    use kurbo::Point;
    use peniko::Color;

    fn viewport() -> CanvasViewport {
        CanvasViewport::new(200.0, 200.0)
    }

    fn segment(x0: f64, x1: f64) -> CubicBez {
        CubicBez::new(
            Point::new(x0, 0.0),
            Point::new(x0 + 2.0, 4.0),
            Point::new(x1 - 2.0, -4.0),
            Point::new(x1, 0.0),
        )
    }

    #[test]
    fn empty_curve_has_no_bounds_and_paints_nothing() {
        let curve = CurvePath::new(StrokeStyle::new(2.0), Brush::Solid(Color::WHITE));
        assert_eq!(curve.screen_bounds(&viewport()), None);

        let mut surface = RefSurface::new();
        curve
            .paint(&mut surface, &viewport(), None)
            .expect("empty curve is a no-op");
        assert!(surface.events().is_empty());
    }

    #[test]
    fn connected_segments_share_one_subpath() {
        let curve = CurvePath::from_cubics(
            [segment(0.0, 10.0), segment(10.0, 20.0)],
            StrokeStyle::new(2.0),
            Brush::Solid(Color::WHITE),
        );
        assert_eq!(curve.segment_count(), 2);
        // One MoveTo plus two CurveTos.
        assert_eq!(curve.path().elements().len(), 3);
    }

    #[test]
    fn disconnected_segments_start_new_subpaths() {
        let curve = CurvePath::from_cubics(
            [segment(0.0, 10.0), segment(30.0, 40.0)],
            StrokeStyle::new(2.0),
            Brush::Solid(Color::WHITE),
        );
        assert_eq!(curve.segment_count(), 2);
        // Two MoveTos, one per subpath.
        assert_eq!(curve.path().elements().len(), 4);
    }

    #[test]
    fn bounds_include_stroke_width() {
        let curve = CurvePath::from_cubics(
            [segment(0.0, 10.0)],
            StrokeStyle::new(4.0),
            Brush::Solid(Color::WHITE),
        );
        let bounds = curve.world_bounds().expect("non-empty curve has bounds");
        // The path bounding box is inflated by half the stroke on each side.
        assert_eq!(bounds.x0, -2.0);
        assert_eq!(bounds.x1, 12.0);
    }

    #[test]
    fn paint_emits_one_stroked_path_in_device_space() {
        let curve = CurvePath::from_cubics(
            [segment(0.0, 10.0)],
            StrokeStyle::new(2.0),
            Brush::Solid(Color::WHITE),
        );
        let mut surface = RefSurface::new();
        curve
            .paint(&mut surface, &viewport(), None)
            .expect("curve paint cannot fail");

        let events = surface.events();
        assert_eq!(events.len(), 1);
        let SurfaceEvent::StrokePath { path, style, .. } = &events[0] else {
            panic!("expected a stroked path, got {events:?}");
        };
        assert_eq!(style.width, 2.0);
        // World (0,0) lands at the device center.
        let kurbo::PathEl::MoveTo(start) = path.elements()[0] else {
            panic!("path must start with a move-to");
        };
        assert_eq!(start, Point::new(100.0, 100.0));
    }
}
