// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Mask: occlusion masks for content scrolling beneath headers.
//!
//! Sticky headers in a scrolling list are typically semi-transparent, so
//! content scrolling underneath them must be clipped to a sub-rectangle or it
//! bleeds through above the header's bottom edge. This crate computes those
//! sub-rectangles.
//!
//! - [`cell_mask`]: mask for a content cell occluded by its section header.
//! - [`header_mask`]: mask for a section header occluded by the main header.
//! - [`Maskable`] and [`MaskSlot`]: a small interface and field type for
//!   renderable elements that can carry an optional mask rectangle.
//!
//! Mask rectangles are expressed in the occluded element's local coordinate
//! space (origin at the element's top-left), ready to hand to a clip layer.
//! Both computations are pure: identical inputs yield identical masks, and a
//! `None` result means the element is fully visible and any previously applied
//! mask should be removed.
//!
//! This is the per-scroll-tick hot path. Each call is O(1); callers run one
//! call per visible element per tick.
//!
//! # Example
//!
//! ```rust
//! use canopy_mask::{cell_mask, MaskSlot, Maskable};
//! use kurbo::Rect;
//!
//! // A cell partially scrolled beneath its docked section header.
//! let cell = Rect::new(0.0, 500.0, 320.0, 544.0);
//! let header = Rect::new(0.0, 450.0, 320.0, 510.0);
//!
//! let mask = cell_mask(cell, header).unwrap();
//! assert_eq!(mask.y0, 10.0, "top 10pt of the cell are hidden");
//!
//! // Attach it to the cell's mask slot; a later tick with no occlusion clears it.
//! let mut slot = MaskSlot::new();
//! slot.apply(Some(mask));
//! assert!(slot.is_enabled());
//! slot.apply(None);
//! assert!(slot.frame().is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Rect;

/// Mask for a content cell occluded by its section header.
///
/// Returns the visible sub-rectangle of `cell`, in the cell's local
/// coordinates, when the cell intersects `header` or sits entirely above the
/// header's bottom edge (`cell.y1 < header.y1`, the fully-scrolled-under
/// case). Returns `None` when the cell is fully visible.
pub fn cell_mask(cell: Rect, header: Rect) -> Option<Rect> {
    if !intersects(cell, header) && cell.y1 >= header.y1 {
        return None;
    }
    let origin_y = abs(cell.y0 - header.y1);
    let visible_height = cell.y1 - (cell.y0 - header.y1);
    Some(Rect::new(
        0.0,
        origin_y,
        cell.width(),
        origin_y + visible_height,
    ))
}

/// Mask for a section header occluded by the main header.
///
/// Same construction as [`cell_mask`] with the main header as the occluder,
/// except that only a frame intersection triggers masking and the visible
/// height is floored at zero (a header fully behind the main header gets an
/// empty mask rather than an inverted one).
pub fn header_mask(header: Rect, main_header: Rect) -> Option<Rect> {
    if !intersects(header, main_header) {
        return None;
    }
    let origin_y = abs(header.y0 - main_header.y1);
    let visible_height = (header.y1 - main_header.y1).max(0.0);
    Some(Rect::new(
        0.0,
        origin_y,
        header.width(),
        origin_y + visible_height,
    ))
}

/// A renderable element that exposes a mask region.
///
/// Implemented by anything that can clip itself to a sub-rectangle: a view
/// wrapper, a render-list entry, or plain layout state via [`MaskSlot`].
pub trait Maskable {
    /// Clip the element to `frame`, in the element's local coordinates.
    fn enable_mask(&mut self, frame: Rect);
    /// Remove any mask, restoring full visibility.
    fn disable_mask(&mut self);
}

/// An explicit optional-mask field for a renderable element.
///
/// Elements own one of these directly rather than keeping masks in an
/// out-of-band side table. Recycled elements call [`MaskSlot::clear`] before
/// reuse so a stale mask never survives across identities.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaskSlot {
    frame: Option<Rect>,
}

impl MaskSlot {
    /// Create an empty slot (no mask applied).
    pub const fn new() -> Self {
        Self { frame: None }
    }

    /// The currently applied mask rectangle, if any.
    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    /// Whether a mask is currently applied.
    pub fn is_enabled(&self) -> bool {
        self.frame.is_some()
    }

    /// Reset the slot for element reuse.
    pub fn clear(&mut self) {
        self.frame = None;
    }

    /// Apply the outcome of a mask computation: enable on `Some`, disable on `None`.
    pub fn apply(&mut self, mask: Option<Rect>) {
        match mask {
            Some(frame) => self.enable_mask(frame),
            None => self.disable_mask(),
        }
    }
}

impl Maskable for MaskSlot {
    fn enable_mask(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }

    fn disable_mask(&mut self) {
        self.frame = None;
    }
}

/// Strict intersection: touching edges do not count as overlap.
fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

// Core-only |x|; kurbo's float helpers need std or libm.
fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}
