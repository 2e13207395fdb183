// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-point merging of overlapping damage regions.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::region::{is_paintable, overlaps};

/// Collapses a set of possibly-overlapping regions into a non-overlapping
/// covering set.
///
/// Each merge step replaces two overlapping (or touching) rects with their
/// axis-aligned bounding union: a *bounding-box* union, not a polygon
/// union. The result may therefore cover area outside the inputs' strict
/// footprint; repainting slightly more than necessary is safe, while a
/// precise rectangulation would cost far more than it saves here.
///
/// The merge runs full passes until a pass performs no merges. A single pass
/// is not enough: combining two rects can produce a bounding box that newly
/// overlaps a third rect that overlapped neither original. On return, no two
/// output rects satisfy [`overlaps`], and their union covers at least the
/// union of the paintable inputs.
///
/// Unpaintable inputs (zero area, inverted, non-finite) are dropped first.
/// Inputs of zero or one region are returned unchanged.
///
/// Worst case is O(n³) in the number of input regions (up to n passes of n²
/// comparisons). That is a known scaling limit, accepted because n is
/// bounded by the number of discrete mutations per frame, which is small in
/// practice.
#[must_use]
pub fn merge_damage(regions: Vec<Rect>) -> Vec<Rect> {
    let mut regions: Vec<Rect> = regions.into_iter().filter(|r| is_paintable(*r)).collect();
    if regions.len() <= 1 {
        return regions;
    }

    loop {
        let mut merged_any = false;
        let mut consumed = vec![false; regions.len()];
        let mut out = Vec::with_capacity(regions.len());

        for i in 0..regions.len() {
            if consumed[i] {
                continue;
            }
            let mut acc = regions[i];
            for j in (i + 1)..regions.len() {
                if consumed[j] {
                    continue;
                }
                if overlaps(acc, regions[j]) {
                    acc = acc.union(regions[j]);
                    consumed[j] = true;
                    merged_any = true;
                }
            }
            out.push(acc);
        }

        regions = out;
        if !merged_any {
            return regions;
        }
    }
}
