// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-line text blocks positioned by externally computed layouts.

use alloc::string::String;
use alloc::vec::Vec;

use easel_imaging::{PaintError, Surface};
use easel_scene::Element;
use easel_view2d::CanvasViewport;
use kurbo::{Point, Rect};
use peniko::Brush;

/// One laid-out line of a [`TextBlock`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    /// The line's text.
    pub text: String,
    /// Measured advance width in world units.
    pub advance: f64,
}

/// The measured shape of a [`TextBlock`], produced by an external text
/// measurement collaborator.
///
/// All values are world units. Easel performs no text measurement itself; a
/// block without a layout has no bounds and is conservatively repainted
/// until measurement completes.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    /// Lines in top-to-bottom reading order.
    pub lines: Vec<TextLine>,
    /// Vertical distance between successive baselines.
    pub line_height: f64,
    /// Distance from a line's top to its baseline.
    pub ascent: f64,
    /// Font size, in world units.
    pub font_size: f64,
}

impl TextLayout {
    /// Returns the widest line's advance.
    #[must_use]
    pub fn max_advance(&self) -> f64 {
        self.lines.iter().fold(0.0, |acc, line| acc.max(line.advance))
    }

    /// Returns the block height: one line height per line.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.line_height * self.lines.len() as f64
    }
}

/// A styled multi-line text block.
///
/// The anchor is the world-space position of the block's top-left corner.
/// Since world space is Y-up, successive lines extend toward smaller Y.
#[derive(Clone, Debug)]
pub struct TextBlock {
    anchor: Point,
    layout: Option<TextLayout>,
    brush: Brush,
}

impl TextBlock {
    /// Creates an unmeasured text block.
    ///
    /// The block has no bounds until [`set_layout`](Self::set_layout)
    /// supplies measurements, and paints nothing.
    #[must_use]
    pub fn new(anchor: Point, brush: Brush) -> Self {
        Self {
            anchor,
            layout: None,
            brush,
        }
    }

    /// Creates a text block with a known layout.
    #[must_use]
    pub fn with_layout(anchor: Point, layout: TextLayout, brush: Brush) -> Self {
        Self {
            anchor,
            layout: Some(layout),
            brush,
        }
    }

    /// Installs or replaces the measured layout, returning the block's new
    /// world-space bounds so the caller can mark them damaged.
    pub fn set_layout(&mut self, layout: TextLayout) -> Rect {
        let bounds = Rect::new(
            self.anchor.x,
            self.anchor.y - layout.height(),
            self.anchor.x + layout.max_advance(),
            self.anchor.y,
        );
        self.layout = Some(layout);
        bounds
    }

    /// Moves the block's anchor. The caller owns damage marking.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Returns the block's world-space bounds, if measured.
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        let layout = self.layout.as_ref()?;
        Some(Rect::new(
            self.anchor.x,
            self.anchor.y - layout.height(),
            self.anchor.x + layout.max_advance(),
            self.anchor.y,
        ))
    }
}

impl Element for TextBlock {
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
        let Some(layout) = &self.layout else {
            // Not measured yet; nothing to draw.
            return Ok(());
        };
        for (i, line) in layout.lines.iter().enumerate() {
            let baseline_y = self.anchor.y - layout.line_height * i as f64 - layout.ascent;
            let origin = viewport.world_to_device_point(Point::new(self.anchor.x, baseline_y));
            surface.fill_text_line(
                &line.text,
                origin,
                layout.font_size * viewport.scale(),
                &self.brush,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use easel_imaging_ref::{RefSurface, SurfaceEvent};
    use peniko::Color;

    fn layout() -> TextLayout {
        TextLayout {
            lines: vec![
                TextLine {
                    text: "hello".to_string(),
                    advance: 40.0,
                },
                TextLine {
                    text: "wider line".to_string(),
                    advance: 70.0,
                },
            ],
            line_height: 14.0,
            ascent: 10.0,
            font_size: 12.0,
        }
    }

    fn viewport() -> CanvasViewport {
        CanvasViewport::new(200.0, 200.0)
    }

    #[test]
    fn unmeasured_block_has_no_bounds() {
        let block = TextBlock::new(Point::new(0.0, 0.0), Brush::Solid(Color::WHITE));
        assert_eq!(block.screen_bounds(&viewport()), None);
    }

    #[test]
    fn unmeasured_block_paints_nothing() {
        let block = TextBlock::new(Point::new(0.0, 0.0), Brush::Solid(Color::WHITE));
        let mut surface = RefSurface::new();
        block
            .paint(&mut surface, &viewport(), None)
            .expect("text paint cannot fail");
        assert!(surface.events().is_empty());
    }

    #[test]
    fn bounds_cover_widest_line_and_all_lines() {
        let block =
            TextBlock::with_layout(Point::new(0.0, 0.0), layout(), Brush::Solid(Color::WHITE));
        // World: anchor (0,0), width 70, height 28 downward.
        assert_eq!(block.world_bounds(), Some(Rect::new(0.0, -28.0, 70.0, 0.0)));
        // Device: Y-down, anchored at surface center.
        assert_eq!(
            block.screen_bounds(&viewport()),
            Some(Rect::new(100.0, 100.0, 170.0, 128.0))
        );
    }

    #[test]
    fn lines_advance_downward_on_screen() {
        let block =
            TextBlock::with_layout(Point::new(0.0, 0.0), layout(), Brush::Solid(Color::WHITE));
        let mut surface = RefSurface::new();
        block
            .paint(&mut surface, &viewport(), None)
            .expect("text paint cannot fail");

        let origins: Vec<Point> = surface
            .events()
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::FillTextLine { origin, .. } => Some(*origin),
                _ => None,
            })
            .collect();
        assert_eq!(origins.len(), 2);
        // First baseline sits one ascent below the anchor.
        assert_eq!(origins[0], Point::new(100.0, 110.0));
        // Second line is one line height further down.
        assert_eq!(origins[1], Point::new(100.0, 124.0));
    }

    #[test]
    fn set_layout_reports_new_bounds() {
        let mut block = TextBlock::new(Point::new(10.0, 20.0), Brush::Solid(Color::WHITE));
        let bounds = block.set_layout(layout());
        assert_eq!(bounds, Rect::new(10.0, -8.0, 80.0, 20.0));
    }
}
