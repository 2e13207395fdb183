// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Scene: the drawable-element capability and the ordered scene.
//!
//! A scene is a back-to-front list of drawables. The core renderer never
//! inspects what an element *is*; it only needs two capabilities, expressed
//! by the [`Element`] trait:
//!
//! - A derivable device-space bounding rectangle
//!   ([`Element::screen_bounds`]), which may be absent while the element is
//!   not yet sized (text awaiting measurement, an image still loading).
//! - A paint operation ([`Element::paint`]) targeting a
//!   [`Surface`](easel_imaging::Surface).
//!
//! [`Scene`] stores boxed elements behind generational [`ElementId`]s in
//! explicit draw order, with z-order editing and per-element visibility
//! flags. [`Scene::intersecting`] answers the renderer's one question:
//! *which elements must repaint, given these damage regions?* Draw order is
//! a correctness requirement of the answer, not a nicety: later elements
//! must paint over earlier ones wherever they overlap.
//!
//! Elements whose bounds cannot be computed yet are always included in a
//! partial repaint. Excluding an unsized element would risk leaving it
//! invisible forever once it acquires a size, if no later mark happens to
//! cover it. Never under-draw.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;
mod scene;

pub use element::{Element, ElementFlags};
pub use scene::{ElementId, Scene};
