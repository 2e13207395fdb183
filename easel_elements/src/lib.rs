// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Elements: the built-in drawable kinds.
//!
//! A closed set of element kinds behind the uniform
//! [`Element`](easel_scene::Element) capability:
//!
//! - [`RectShape`]: a filled (and optionally stroked) rectangle.
//! - [`TextBlock`]: multi-line text positioned by an externally computed
//!   [`TextLayout`]. Measurement is not this crate's job; an unmeasured
//!   block simply has no bounds yet.
//! - [`ImageShape`]: an image whose pixels arrive asynchronously. Loading
//!   completes through one explicit signal, [`ImageShape::resolve`], which
//!   reports the world-space bounds the caller must mark damaged.
//! - [`CurvePath`]: a chain of cubic Bezier segments with a stroke.
//!
//! All geometry is world space (center-origin, Y-up); device coordinates
//! are derived through the viewport at bounds and paint time. Dispatch is
//! through the trait; there is no type tag anywhere.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod curve;
mod image;
mod rect;
mod text;

pub use curve::CurvePath;
pub use image::{ImageLoadError, ImageShape, ImageState};
pub use rect::RectShape;
pub use text::{TextBlock, TextLayout, TextLine};
