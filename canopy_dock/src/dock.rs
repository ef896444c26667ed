// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Docking engine: clamped main header, stacking section headers, masks.

use alloc::vec::Vec;
use kurbo::{Rect, Size};

use canopy_mask::{cell_mask, header_mask};

use crate::flow::FlowSource;
use crate::types::{
    DockConfig, DockFlags, ElementKind, ElementLayout, MAIN_HEADER, MAIN_HEADER_Z, RawElement,
    SECTION_HEADER_Z, ScrollState,
};

/// A section header's frame after docking, with diagnostics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DockedHeader {
    /// Clamped (and possibly re-stacked) frame.
    pub frame: Rect,
    /// Whether the header was pinned to the docking line or pushed.
    pub flags: DockFlags,
}

/// The layout engine.
///
/// All methods are pure functions of their inputs; the engine holds only its
/// [`DockConfig`]. Per tick, run [`DockLayout::layout_for_scroll`], or the
/// individual passes in order: main header, then section headers, then
/// masks. Section headers dock relative to the docked main header's
/// remainder, and masks depend on final docked frames.
#[derive(Copy, Clone, Debug, Default)]
pub struct DockLayout {
    config: DockConfig,
}

impl DockLayout {
    /// Create an engine with the given config.
    pub const fn new(config: DockConfig) -> Self {
        Self { config }
    }

    /// The engine's config.
    pub const fn config(&self) -> DockConfig {
        self.config
    }

    /// Cap the main header's position so the docked height is always visible.
    ///
    /// The new y-origin is `max(raw_y, offset_y - height + docked_height)`:
    /// never above the point where exactly `docked_height` remains visible,
    /// never below the natural position when scrolled to the top.
    pub fn dock_main_header(&self, raw: Rect, offset_y: f64) -> Rect {
        let y = raw
            .y0
            .max(offset_y - raw.height() + self.config.docked_height());
        raw.with_origin((raw.x0, y))
    }

    /// Clamp section headers to the docking line and stack the docked ones.
    ///
    /// `frames` must be ordered by ascending section index and span only the
    /// headers currently intersecting the viewport. The result has the same
    /// length and order.
    ///
    /// Each header is first independently raised to at least the docking line
    /// (`offset_y + docked_height`, directly below the docked main-header
    /// remainder). A header then qualifies for stacking if it rests exactly on
    /// the docking line, or if its clamped origin falls inside the frame of
    /// the header immediately preceding it (the about-to-appear header that
    /// pushes a docked one upward before it scrolls off). Qualifying headers
    /// are re-stacked bottom-up from the last qualifier's `maxY`, producing a
    /// gap-free pile regardless of gaps in section indices.
    pub fn dock_section_headers(&self, frames: &[Rect], offset_y: f64) -> Vec<DockedHeader> {
        let docking_line = offset_y + self.config.docked_height();

        let mut out = Vec::with_capacity(frames.len());
        let mut stacked = Vec::new();
        let mut prev: Option<Rect> = None;
        for (i, &raw) in frames.iter().enumerate() {
            let frame = raw.with_origin((raw.x0, raw.y0.max(docking_line)));

            let mut flags = DockFlags::empty();
            if frame.y0 == docking_line {
                flags |= DockFlags::PINNED;
            }
            // Strict half-open containment, matching the clamp order above:
            // an origin exactly on the previous header's bottom edge does not
            // count as pushed.
            if prev.is_some_and(|p| p.contains(frame.origin())) {
                flags |= DockFlags::PUSHED;
            }
            if !flags.is_empty() {
                stacked.push(i);
            }

            prev = Some(frame);
            out.push(DockedHeader { frame, flags });
        }

        // `frames` is ordered by section, so `stacked` is already sorted the
        // way the stacking walk needs it. Place each qualifying header
        // immediately above the next, starting from the bottom of the pile.
        let mut running = stacked.last().map_or(0.0, |&i| out[i].frame.y1);
        for &i in stacked.iter().rev() {
            let h = out[i].frame.height();
            running -= h;
            let f = out[i].frame;
            out[i].frame = f.with_origin((f.x0, running));
        }

        out
    }

    /// Adjust a set of raw elements for the given scroll offset.
    ///
    /// Applies the main-header dock to section 0, then docks and stacks the
    /// section headers. Cells outside section 0 pass through unmodified at
    /// the default z-order. Masks are not computed here; follow with
    /// [`DockLayout::apply_masks`].
    pub fn layout_elements(&self, raw: Vec<RawElement>, offset_y: f64) -> Vec<ElementLayout> {
        let mut out: Vec<ElementLayout> = raw.into_iter().map(ElementLayout::from_raw).collect();

        // Main header first: section headers dock against its post-docking
        // remainder, not its raw frame.
        for el in &mut out {
            if el.id.section == 0 && el.kind == ElementKind::Cell {
                el.frame = self.dock_main_header(el.frame, offset_y);
                el.z_index = MAIN_HEADER_Z;
            }
        }

        let mut header_slots: Vec<usize> = out
            .iter()
            .enumerate()
            .filter(|(_, el)| el.kind == ElementKind::SectionHeader)
            .map(|(i, _)| i)
            .collect();
        header_slots.sort_by_key(|&i| out[i].id.section);

        let frames: Vec<Rect> = header_slots.iter().map(|&i| out[i].frame).collect();
        let docked = self.dock_section_headers(&frames, offset_y);
        for (&slot, header) in header_slots.iter().zip(docked) {
            out[slot].frame = header.frame;
            out[slot].flags = header.flags;
            out[slot].z_index = SECTION_HEADER_Z;
        }

        out
    }

    /// Compute occlusion masks against the final docked frames.
    ///
    /// Cells are masked by their own section's header; section headers are
    /// masked by the main header. Elements with no occluder present have
    /// their mask cleared.
    pub fn apply_masks(&self, elements: &mut [ElementLayout]) {
        let main_header = elements
            .iter()
            .find(|el| el.id == MAIN_HEADER && el.kind == ElementKind::Cell)
            .map(|el| el.frame);
        // Ascending by section; binary-searchable for the cell pass.
        let mut headers: Vec<(u32, Rect)> = elements
            .iter()
            .filter(|el| el.kind == ElementKind::SectionHeader)
            .map(|el| (el.id.section, el.frame))
            .collect();
        headers.sort_by_key(|&(section, _)| section);

        for el in elements.iter_mut() {
            let mask = match el.kind {
                ElementKind::Cell if el.id.section > 0 => headers
                    .binary_search_by_key(&el.id.section, |&(section, _)| section)
                    .ok()
                    .and_then(|i| cell_mask(el.frame, headers[i].1)),
                // The main header itself is never occluded.
                ElementKind::Cell => None,
                ElementKind::SectionHeader => {
                    main_header.and_then(|main| header_mask(el.frame, main))
                }
            };
            el.mask.apply(mask);
        }
    }

    /// The full per-tick pipeline: query, dock, stack, mask.
    pub fn layout_for_scroll<S: FlowSource>(
        &self,
        source: &S,
        scroll: ScrollState,
    ) -> Vec<ElementLayout> {
        let raw = source.elements_in(scroll.viewport_rect());
        let mut out = self.layout_elements(raw, scroll.offset_y);
        self.apply_masks(&mut out);
        out
    }

    /// Content size with the collapse-safe minimum height applied.
    ///
    /// The reported height never drops below the viewport height plus the
    /// main header's undockable portion, so removing a section's cells cannot
    /// shrink the scroll range out from under a docked header mid-animation.
    pub fn content_size<S: FlowSource>(&self, source: &S, viewport_height: f64) -> Size {
        let natural = source.content_size();
        let mut min_height = viewport_height;
        if let Some(main) = source.raw_frame(MAIN_HEADER, ElementKind::Cell) {
            min_height += (main.height() - self.config.docked_height()).max(0.0);
        }
        Size::new(natural.width, natural.height.max(min_height))
    }
}
