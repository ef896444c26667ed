// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: element identities, raw and adjusted frames, and config.

use bitflags::bitflags;
use kurbo::{Rect, Size};

use canopy_mask::{MaskSlot, Maskable};

/// Z-order assigned to the main header. Renders above everything else.
pub const MAIN_HEADER_Z: i32 = 100;

/// Z-order assigned to section headers. Below the main header, above content.
pub const SECTION_HEADER_Z: i32 = 50;

/// Identity of the main header element: the single cell of section 0.
pub const MAIN_HEADER: ElementId = ElementId::new(0, 0);

/// Identity of a laid-out element within its kind.
///
/// By convention section 0 holds exactly one cell (the main header) and no
/// section header; content sections start at 1. The ordering is by section,
/// then item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId {
    /// Section index.
    pub section: u32,
    /// Item index within the section. Always 0 for section headers.
    pub item: u32,
}

impl ElementId {
    /// Create an identity from section and item indices.
    pub const fn new(section: u32, item: u32) -> Self {
        Self { section, item }
    }
}

/// What an element is: a content cell or a section header.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Content cell (the main header is the cell at [`MAIN_HEADER`]).
    Cell,
    /// Sticky header for a section.
    SectionHeader,
}

bitflags! {
    /// How a section header arrived at its docked position.
    ///
    /// Purely informational: renderers and tests can distinguish a header
    /// resting on the docking line from one displaced by a neighbor, but the
    /// flags never feed back into geometry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DockFlags: u8 {
        /// The header's clamped origin sits exactly on the docking line.
        const PINNED = 0b0000_0001;
        /// The header's clamped origin fell inside the previous header's
        /// frame, so it participates in stacking (the "push" case).
        const PUSHED = 0b0000_0010;
    }
}

/// An element as reported by the base flow layout: identity plus raw frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawElement {
    /// Element identity.
    pub id: ElementId,
    /// Cell or section header.
    pub kind: ElementKind,
    /// Unmodified frame from the flow layout, in content coordinates.
    pub frame: Rect,
}

impl RawElement {
    /// A content cell.
    pub const fn cell(section: u32, item: u32, frame: Rect) -> Self {
        Self {
            id: ElementId::new(section, item),
            kind: ElementKind::Cell,
            frame,
        }
    }

    /// A section header. Headers are item 0 of their section.
    pub const fn section_header(section: u32, frame: Rect) -> Self {
        Self {
            id: ElementId::new(section, 0),
            kind: ElementKind::SectionHeader,
            frame,
        }
    }
}

/// An element after the docking and masking passes.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementLayout {
    /// Element identity.
    pub id: ElementId,
    /// Cell or section header.
    pub kind: ElementKind,
    /// Adjusted frame in content coordinates.
    pub frame: Rect,
    /// Render order. Higher draws on top.
    pub z_index: i32,
    /// Docking diagnostics for section headers; empty for cells.
    pub flags: DockFlags,
    /// Occlusion mask in the element's local coordinates, if any.
    pub mask: MaskSlot,
}

impl ElementLayout {
    /// Start from a raw element: frame unchanged, default z, no mask.
    pub fn from_raw(raw: RawElement) -> Self {
        Self {
            id: raw.id,
            kind: raw.kind,
            frame: raw.frame,
            z_index: 0,
            flags: DockFlags::empty(),
            mask: MaskSlot::new(),
        }
    }
}

impl Maskable for ElementLayout {
    fn enable_mask(&mut self, frame: Rect) {
        self.mask.enable_mask(frame);
    }

    fn disable_mask(&mut self) {
        self.mask.disable_mask();
    }
}

/// One scroll observation: vertical content offset plus viewport size.
///
/// Mutated externally on every scroll tick; the engine only reads it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Vertical content offset (the content y-coordinate at the viewport top).
    pub offset_y: f64,
    /// Viewport size.
    pub viewport: Size,
}

impl ScrollState {
    /// The viewport rectangle in content coordinates.
    pub fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size((0.0, self.offset_y), self.viewport)
    }
}

/// Docking configuration.
///
/// The docked height is the portion of the main header that stays visible at
/// the viewport top when fully docked. It must be non-negative; a negative
/// value is a contract violation that asserts in debug builds and clamps to
/// zero in release builds. A docked height at or above the main header's
/// natural height degrades to an always-fully-visible header, which is a
/// visual anomaly but not a harmful state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DockConfig {
    docked_height: f64,
}

impl DockConfig {
    /// Create a config with the given docked height.
    pub fn new(docked_height: f64) -> Self {
        debug_assert!(
            docked_height >= 0.0,
            "docked height must be non-negative, got {docked_height}"
        );
        Self {
            docked_height: docked_height.max(0.0),
        }
    }

    /// The configured docked height.
    pub const fn docked_height(self) -> f64 {
        self.docked_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_order_by_section_then_item() {
        let mut ids = [
            ElementId::new(2, 0),
            ElementId::new(1, 1),
            ElementId::new(1, 0),
            MAIN_HEADER,
        ];
        ids.sort();
        assert_eq!(
            ids,
            [
                MAIN_HEADER,
                ElementId::new(1, 0),
                ElementId::new(1, 1),
                ElementId::new(2, 0),
            ]
        );
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn negative_docked_height_clamps_in_release() {
        assert_eq!(DockConfig::new(-10.0).docked_height(), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "docked height must be non-negative")]
    fn negative_docked_height_asserts_in_debug() {
        let _ = DockConfig::new(-10.0);
    }

    #[test]
    fn layout_starts_unmasked_at_default_z() {
        let raw = RawElement::cell(1, 0, Rect::new(0.0, 100.0, 320.0, 144.0));
        let layout = ElementLayout::from_raw(raw);
        assert_eq!(layout.z_index, 0);
        assert_eq!(layout.flags, DockFlags::empty());
        assert!(layout.mask.frame().is_none());
    }
}
