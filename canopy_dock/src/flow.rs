// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The base-layout collaborator: raw frames by identity and viewport queries.
//!
//! The docking engine never lays out content itself. It consumes the output
//! of a standard flow layout through [`FlowSource`] and adjusts it.
//! [`ColumnFlow`] is a minimal single-column implementation, enough for lists
//! where every element spans the full width; swap in your own source for
//! anything richer.

use alloc::vec::Vec;
use kurbo::{Rect, Size};

use crate::types::{ElementId, ElementKind, RawElement};
use crate::util::intersects;

/// Supplies raw (unmodified) element frames from a base flow layout.
///
/// Implementations report frames in content coordinates. `elements_in` must
/// return elements in ascending section order, each section's header before
/// its cells; the docking pass relies on that ordering for stacking.
pub trait FlowSource {
    /// Raw frame for an element, or `None` if it is not currently laid out.
    fn raw_frame(&self, id: ElementId, kind: ElementKind) -> Option<Rect>;

    /// Natural content size of the full list.
    fn content_size(&self) -> Size;

    /// Raw elements whose frames intersect `rect`.
    fn elements_in(&self, rect: Rect) -> Vec<RawElement>;
}

/// Geometry of one section in a [`ColumnFlow`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionSpec {
    /// Height of the section header; 0 means the section has no header.
    pub header_height: f64,
    /// Height of each cell in the section.
    pub item_height: f64,
    /// Number of cells currently present (0 while collapsed).
    pub item_count: usize,
}

/// A minimal single-column flow layout.
///
/// Sections are stacked top to bottom: header first (when its height is
/// nonzero), then the section's cells. Every frame spans the full width.
/// Rebuild with [`ColumnFlow::update_sections`] when item counts change, for
/// example after a collapse toggle.
#[derive(Clone, Debug)]
pub struct ColumnFlow {
    width: f64,
    elements: Vec<RawElement>,
    content_height: f64,
}

impl ColumnFlow {
    /// Lay out `sections` in order at the given width.
    pub fn new(width: f64, sections: &[SectionSpec]) -> Self {
        let mut flow = Self {
            width,
            elements: Vec::new(),
            content_height: 0.0,
        };
        flow.relayout(sections);
        flow
    }

    /// Re-run layout for a new section list, keeping the width.
    pub fn update_sections(&mut self, sections: &[SectionSpec]) {
        self.relayout(sections);
    }

    fn relayout(&mut self, sections: &[SectionSpec]) {
        self.elements.clear();
        let mut y = 0.0;
        for (section, spec) in sections.iter().enumerate() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Element ids use 32-bit indices by design."
            )]
            let section = section as u32;
            if spec.header_height > 0.0 {
                let frame = Rect::new(0.0, y, self.width, y + spec.header_height);
                self.elements.push(RawElement::section_header(section, frame));
                y += spec.header_height;
            }
            for item in 0..spec.item_count {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "Element ids use 32-bit indices by design."
                )]
                let item = item as u32;
                let frame = Rect::new(0.0, y, self.width, y + spec.item_height);
                self.elements.push(RawElement::cell(section, item, frame));
                y += spec.item_height;
            }
        }
        self.content_height = y;
    }
}

impl FlowSource for ColumnFlow {
    fn raw_frame(&self, id: ElementId, kind: ElementKind) -> Option<Rect> {
        self.elements
            .iter()
            .find(|e| e.id == id && e.kind == kind)
            .map(|e| e.frame)
    }

    fn content_size(&self) -> Size {
        Size::new(self.width, self.content_height)
    }

    fn elements_in(&self, rect: Rect) -> Vec<RawElement> {
        self.elements
            .iter()
            .filter(|e| intersects(e.frame, rect))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAIN_HEADER;

    fn sample_flow() -> ColumnFlow {
        // Main-header section (no section header), then two content sections.
        ColumnFlow::new(
            320.0,
            &[
                SectionSpec {
                    header_height: 0.0,
                    item_height: 300.0,
                    item_count: 1,
                },
                SectionSpec {
                    header_height: 60.0,
                    item_height: 44.0,
                    item_count: 3,
                },
                SectionSpec {
                    header_height: 60.0,
                    item_height: 44.0,
                    item_count: 2,
                },
            ],
        )
    }

    #[test]
    fn frames_stack_top_to_bottom() {
        let flow = sample_flow();
        assert_eq!(
            flow.raw_frame(MAIN_HEADER, ElementKind::Cell),
            Some(Rect::new(0.0, 0.0, 320.0, 300.0))
        );
        assert_eq!(
            flow.raw_frame(ElementId::new(1, 0), ElementKind::SectionHeader),
            Some(Rect::new(0.0, 300.0, 320.0, 360.0))
        );
        assert_eq!(
            flow.raw_frame(ElementId::new(1, 2), ElementKind::Cell),
            Some(Rect::new(0.0, 448.0, 320.0, 492.0))
        );
        assert_eq!(
            flow.raw_frame(ElementId::new(2, 0), ElementKind::SectionHeader),
            Some(Rect::new(0.0, 492.0, 320.0, 552.0))
        );
        assert_eq!(flow.content_size(), Size::new(320.0, 640.0));
    }

    #[test]
    fn missing_elements_report_none() {
        let flow = sample_flow();
        assert_eq!(flow.raw_frame(ElementId::new(1, 5), ElementKind::Cell), None);
        assert_eq!(
            flow.raw_frame(ElementId::new(0, 0), ElementKind::SectionHeader),
            None,
            "the main-header section has no section header"
        );
    }

    #[test]
    fn viewport_query_returns_ordered_window() {
        let flow = sample_flow();
        let visible = flow.elements_in(Rect::new(0.0, 320.0, 320.0, 480.0));
        let ids: Vec<_> = visible.iter().map(|e| (e.id.section, e.id.item, e.kind)).collect();
        assert_eq!(
            ids,
            [
                (1, 0, ElementKind::SectionHeader),
                (1, 0, ElementKind::Cell),
                (1, 1, ElementKind::Cell),
                (1, 2, ElementKind::Cell),
            ]
        );
    }

    #[test]
    fn collapse_rebuild_shifts_later_sections() {
        let mut flow = sample_flow();
        flow.update_sections(&[
            SectionSpec {
                header_height: 0.0,
                item_height: 300.0,
                item_count: 1,
            },
            SectionSpec {
                header_height: 60.0,
                item_height: 44.0,
                item_count: 0,
            },
            SectionSpec {
                header_height: 60.0,
                item_height: 44.0,
                item_count: 2,
            },
        ]);
        // Section 1's cells are gone; section 2 moves up by 3 * 44.
        assert_eq!(flow.raw_frame(ElementId::new(1, 0), ElementKind::Cell), None);
        assert_eq!(
            flow.raw_frame(ElementId::new(2, 0), ElementKind::SectionHeader),
            Some(Rect::new(0.0, 360.0, 320.0, 420.0))
        );
    }
}
