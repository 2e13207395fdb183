// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled and stroked rectangles.

use easel_imaging::{PaintError, StrokeStyle, Surface};
use easel_scene::Element;
use easel_view2d::CanvasViewport;
use kurbo::Rect;
use peniko::Brush;

/// A rectangle with a fill and an optional centered stroke.
#[derive(Clone, Debug)]
pub struct RectShape {
    /// World-space rectangle.
    world: Rect,
    fill: Brush,
    stroke: Option<(StrokeStyle, Brush)>,
}

impl RectShape {
    /// Creates a filled rectangle.
    #[must_use]
    pub fn new(world: Rect, fill: Brush) -> Self {
        Self {
            world,
            fill,
            stroke: None,
        }
    }

    /// Adds a stroked outline.
    #[must_use]
    pub fn with_stroke(mut self, style: StrokeStyle, brush: Brush) -> Self {
        self.stroke = Some((style, brush));
        self
    }

    /// Returns the world-space rectangle.
    #[must_use]
    pub fn world_rect(&self) -> Rect {
        self.world
    }

    /// Moves and resizes the rectangle. The caller owns damage marking for
    /// both the old and new bounds.
    pub fn set_world_rect(&mut self, world: Rect) {
        self.world = world;
    }
}

impl Element for RectShape {
    fn screen_bounds(&self, viewport: &CanvasViewport) -> Option<Rect> {
        let device = viewport.world_to_device_rect(self.world);
        // A centered stroke extends half its width past the geometry.
        let half = self
            .stroke
            .as_ref()
            .map_or(0.0, |(style, _)| style.width * viewport.scale() / 2.0);
        Some(device.inflate(half, half))
    }

    fn paint(
        &self,
        surface: &mut dyn Surface,
        viewport: &CanvasViewport,
        _damage: Option<&[Rect]>,
    ) -> Result<(), PaintError> {
        let device = viewport.world_to_device_rect(self.world);
        surface.fill_rect(device, &self.fill);
        if let Some((style, brush)) = &self.stroke {
            let device_style = StrokeStyle::new(style.width * viewport.scale());
            surface.stroke_rect(device, device_style, brush);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_imaging_ref::{RefSurface, SurfaceEvent};
    use peniko::Color;

    fn viewport() -> CanvasViewport {
        CanvasViewport::new(200.0, 200.0)
    }

    #[test]
    fn bounds_map_through_viewport() {
        let shape = RectShape::new(
            Rect::new(-10.0, -10.0, 10.0, 10.0),
            Brush::Solid(Color::WHITE),
        );
        assert_eq!(
            shape.screen_bounds(&viewport()),
            Some(Rect::new(90.0, 90.0, 110.0, 110.0))
        );
    }

    #[test]
    fn stroke_inflates_bounds() {
        let shape = RectShape::new(
            Rect::new(-10.0, -10.0, 10.0, 10.0),
            Brush::Solid(Color::WHITE),
        )
        .with_stroke(StrokeStyle::new(4.0), Brush::Solid(Color::BLACK));
        assert_eq!(
            shape.screen_bounds(&viewport()),
            Some(Rect::new(88.0, 88.0, 112.0, 112.0))
        );
    }

    #[test]
    fn paint_emits_fill_then_stroke() {
        let shape = RectShape::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Brush::Solid(Color::WHITE),
        )
        .with_stroke(StrokeStyle::new(2.0), Brush::Solid(Color::BLACK));

        let mut surface = RefSurface::new();
        shape
            .paint(&mut surface, &viewport(), None)
            .expect("rect paint cannot fail");

        let events = surface.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SurfaceEvent::FillRect { .. }));
        assert!(matches!(
            events[1],
            SurfaceEvent::StrokeRect { style, .. } if style.width == 2.0
        ));
    }
}
