// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asynchronously loaded images.

use alloc::string::String;
use core::fmt;

use easel_imaging::{ImageId, PaintError, Surface};
use easel_scene::Element;
use easel_view2d::CanvasViewport;
use kurbo::{Point, Rect, Size};

/// Why an image failed to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLoadError {
    /// Loader-specific description (network failure, decode error, ...).
    pub reason: String,
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image failed to load: {}", self.reason)
    }
}

impl core::error::Error for ImageLoadError {}

/// Load state of an [`ImageShape`].
#[derive(Clone, Debug, PartialEq)]
pub enum ImageState {
    /// The resource has not arrived yet.
    Pending,
    /// The resource is registered with the surface and ready to draw.
    Ready {
        /// Surface resource handle.
        image: ImageId,
        /// Natural size in world units.
        natural_size: Size,
    },
    /// Loading or decoding failed. Painting reports
    /// [`PaintError::ImageUnavailable`], which the scheduler contains.
    Failed,
}

/// An image placed on the canvas.
///
/// The image's pixels arrive asynchronously. Construction takes only the
/// world-space origin (top-left, Y-up) and optionally an explicit display
/// size; the rest arrives through [`resolve`](Self::resolve), the one
/// completion signal the loading collaborator calls.
///
/// Sizing rules:
/// - With an explicit size, bounds are known immediately, even while
///   pending.
/// - Without one, bounds are unknown until the natural size arrives, and
///   the element relies on the scene's conservative inclusion to appear
///   once it resolves.
#[derive(Clone, Debug)]
pub struct ImageShape {
    origin: Point,
    explicit_size: Option<Size>,
    state: ImageState,
}

impl ImageShape {
    /// Creates a pending image that will adopt its natural size on load.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            explicit_size: None,
            state: ImageState::Pending,
        }
    }

    /// Creates a pending image with an explicit display size.
    #[must_use]
    pub fn with_size(origin: Point, size: Size) -> Self {
        Self {
            origin,
            explicit_size: Some(size),
            state: ImageState::Pending,
        }
    }

    /// Returns the current load state.
    #[must_use]
    pub fn state(&self) -> &ImageState {
        &self.state
    }

    /// Completes loading, successfully or not.
    ///
    /// On success, returns the world-space bounds the image now occupies so
    /// the caller can mark them damaged (this is what makes a late-arriving
    /// image appear). On failure, returns `None`; the element keeps its
    /// explicit bounds if it has any, and painting reports a contained
    /// error.
    pub fn resolve(&mut self, outcome: Result<(ImageId, Size), ImageLoadError>) -> Option<Rect> {
        match outcome {
            Ok((image, natural_size)) => {
                self.state = ImageState::Ready {
                    image,
                    natural_size,
                };
                self.world_rect()
            }
            Err(_) => {
                self.state = ImageState::Failed;
                None
            }
        }
    }

    /// Returns the world-space rectangle the image occupies, if its size is
    /// known.
    #[must_use]
    pub fn world_rect(&self) -> Option<Rect> {
        let size = match (&self.explicit_size, &self.state) {
            (Some(size), _) => *size,
            (None, ImageState::Ready { natural_size, .. }) => *natural_size,
            (None, _) => return None,
        };
        Some(self.rect_of(size))
    }

    /// Origin is the top-left corner; the image extends down in Y-up world
    /// space.
    fn rect_of(&self, size: Size) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y - size.height,
            self.origin.x + size.width,
            self.origin.y,
        )
    }
}

impl Element for ImageShape {
    fn screen_bounds(&self, viewport: &CanvasViewport) -> Option<Rect> {
        self.world_rect()
            .map(|world| viewport.world_to_device_rect(world))
    }

    fn paint(
        &self,
        surface: &mut dyn Surface,
        viewport: &CanvasViewport,
        _damage: Option<&[Rect]>,
    ) -> Result<(), PaintError> {
        match &self.state {
            ImageState::Pending => Ok(()),
            ImageState::Failed => Err(PaintError::ImageUnavailable),
            ImageState::Ready {
                image,
                natural_size,
            } => {
                let world = self.rect_of(self.explicit_size.unwrap_or(*natural_size));
                surface.draw_image(*image, viewport.world_to_device_rect(world));
                Ok(())
            }
        }
    }
}
