// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered scene container and its generational element handles.

use alloc::boxed::Box;
use alloc::vec::Vec;

use easel_damage::overlaps;
use easel_view2d::CanvasViewport;
use kurbo::Rect;

use crate::element::{Element, ElementFlags};

/// Identifier for an element in a [`Scene`].
///
/// A small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused. It consists of a slot index
/// and a generation counter.
///
/// - On insert, a slot is allocated with generation `1` (or a freed slot is
///   reused with its generation incremented).
/// - On remove, the slot is freed; any existing `ElementId` pointing at it
///   is now stale.
/// - Stale ids never alias a different live element, because the generation
///   must match.
///
/// Use [`Scene::is_alive`] to check whether an id still refers to a live
/// element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(u32, u32);

impl ElementId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

#[derive(Debug)]
struct Entry {
    element: Box<dyn Element>,
    flags: ElementFlags,
}

/// A back-to-front ordered collection of drawable elements.
///
/// The scene owns its elements and their draw order. Index `0` of the order
/// paints first (bottom); the last index paints last (top). Geometry and
/// content mutations happen through [`get_mut`](Self::get_mut) on the
/// element itself; the scene only manages identity, ordering, and
/// visibility flags.
///
/// The scene does not track damage. Every mutation that changes what is on
/// screen (insert, remove, reorder, flag changes, element edits) must be
/// accompanied by marks on the owning tracker; the scene has no way of
/// knowing which pixels an edit touched.
#[derive(Default, Debug)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    /// Slot indices in draw order, back to front.
    order: Vec<u32>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the scene has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts an element on top of the draw order and returns its id.
    pub fn insert(&mut self, element: Box<dyn Element>) -> ElementId {
        let entry = Entry {
            element,
            flags: ElementFlags::default(),
        };
        let idx = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.entry = Some(entry);
            idx
        } else {
            let idx = u32::try_from(self.slots.len()).expect("scene slot space exhausted");
            self.slots.push(Slot {
                generation: 1,
                entry: Some(entry),
            });
            idx
        };
        self.order.push(idx);
        ElementId::new(idx, self.slots[idx as usize].generation)
    }

    /// Removes an element, returning it if `id` was live.
    pub fn remove(&mut self, id: ElementId) -> Option<Box<dyn Element>> {
        if !self.is_alive(id) {
            return None;
        }
        let slot = &mut self.slots[id.idx()];
        let entry = slot.entry.take()?;
        self.free.push(id.0);
        self.order.retain(|&idx| idx != id.0);
        Some(entry.element)
    }

    /// Returns `true` if `id` refers to a live element.
    #[must_use]
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.slots
            .get(id.idx())
            .is_some_and(|slot| slot.generation == id.1 && slot.entry.is_some())
    }

    /// Returns a shared reference to a live element.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&dyn Element> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()]
            .entry
            .as_ref()
            .map(|entry| entry.element.as_ref())
    }

    /// Returns an exclusive reference to a live element.
    #[must_use]
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut (dyn Element + 'static)> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()]
            .entry
            .as_mut()
            .map(move |entry| entry.element.as_mut())
    }

    /// Returns an element's flags.
    #[must_use]
    pub fn flags(&self, id: ElementId) -> Option<ElementFlags> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].entry.as_ref().map(|entry| entry.flags)
    }

    /// Sets an element's flags. Returns `false` if `id` is stale.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if let Some(entry) = self.slots[id.idx()].entry.as_mut() {
            entry.flags = flags;
            true
        } else {
            false
        }
    }

    /// Moves an element to the top of the draw order. Returns `false` if
    /// `id` is stale.
    pub fn bring_to_front(&mut self, id: ElementId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.order.retain(|&idx| idx != id.0);
        self.order.push(id.0);
        true
    }

    /// Moves an element to the bottom of the draw order. Returns `false` if
    /// `id` is stale.
    pub fn send_to_back(&mut self, id: ElementId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.order.retain(|&idx| idx != id.0);
        self.order.insert(0, id.0);
        true
    }

    /// Iterates live elements in draw order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &dyn Element)> {
        self.order.iter().filter_map(|&idx| {
            let slot = &self.slots[idx as usize];
            let entry = slot.entry.as_ref()?;
            Some((
                ElementId::new(idx, slot.generation),
                entry.element.as_ref(),
            ))
        })
    }

    /// Returns the ids of all visible elements, in draw order.
    ///
    /// This is the candidate list for a full redraw: no damage filtering,
    /// everything visible paints.
    #[must_use]
    pub fn paint_candidates(&self) -> Vec<ElementId> {
        self.visible_entries().map(|(id, _)| id).collect()
    }

    /// Returns the ids of visible elements whose screen bounds overlap any
    /// of the given damage regions, preserving draw order.
    ///
    /// An element with no computable bounds is always included; excluding
    /// it could leave it permanently missing from the surface once it does
    /// acquire a size. Touching edges count as overlap, consistent with the
    /// damage merge.
    #[must_use]
    pub fn intersecting(&self, viewport: &CanvasViewport, damage: &[Rect]) -> Vec<ElementId> {
        self.visible_entries()
            .filter(|(_, element)| match element.screen_bounds(viewport) {
                None => true,
                Some(bounds) => damage.iter().any(|region| overlaps(bounds, *region)),
            })
            .map(|(id, _)| id)
            .collect()
    }

    fn visible_entries(&self) -> impl Iterator<Item = (ElementId, &dyn Element)> {
        self.order.iter().filter_map(|&idx| {
            let slot = &self.slots[idx as usize];
            let entry = slot.entry.as_ref()?;
            entry.flags.contains(ElementFlags::VISIBLE).then(|| {
                (
                    ElementId::new(idx, slot.generation),
                    entry.element.as_ref(),
                )
            })
        })
    }
}
