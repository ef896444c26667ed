// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Sections: collapse/expand state for sectioned scrolling lists.
//!
//! Each content section is either expanded or collapsed. A collapsed
//! section reports zero visible items; an expanded one reports its full item
//! count. Toggling is the only transition and is an involution: toggling a
//! section twice restores the original visible count.
//!
//! This is the single piece of mutable state in a collapsible-list layout;
//! everything else (docking, stacking, masking) is derived per tick from
//! scroll position and raw frames. The owning controller applies each
//! [`SectionToggle`] by inserting or removing exactly that section's item
//! identities and re-querying layout from the toggled section downward, since
//! every later section shifts.
//!
//! # Example
//!
//! ```rust
//! use canopy_sections::SectionStates;
//!
//! let mut sections = SectionStates::new([3, 3, 3, 3]);
//! assert_eq!(sections.visible_items(1), 3);
//!
//! let toggle = sections.toggle(1).unwrap();
//! assert!(toggle.collapsed);
//! assert_eq!(toggle.item_count, 3, "identities to remove");
//! assert_eq!(sections.visible_items(1), 0);
//!
//! // Involution: a second toggle restores the full count.
//! let toggle = sections.toggle(1).unwrap();
//! assert!(!toggle.collapsed);
//! assert_eq!(sections.visible_items(1), 3);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Collapse state and full item count for one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Section {
    item_count: usize,
    collapsed: bool,
}

/// Ordered collapse/expand state, one entry per content section.
///
/// Sections default to expanded. Indices are content-section indices; how
/// they map onto layout element sections (for example an offset past a main
/// header section) is the caller's convention.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionStates {
    sections: Vec<Section>,
}

/// Outcome of a [`SectionStates::toggle`].
///
/// `item_count` is the number of item identities the collaborator must insert
/// (`collapsed == false`) or remove (`collapsed == true`) for `section`. An
/// identity is either fully present or fully absent; identities are never
/// reused across the transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionToggle {
    /// The toggled content section.
    pub section: usize,
    /// New state: `true` if the section is now collapsed.
    pub collapsed: bool,
    /// The section's full item count.
    pub item_count: usize,
}

impl SectionStates {
    /// Create state for sections with the given full item counts, all expanded.
    pub fn new(counts: impl IntoIterator<Item = usize>) -> Self {
        Self {
            sections: counts
                .into_iter()
                .map(|item_count| Section {
                    item_count,
                    collapsed: false,
                })
                .collect(),
        }
    }

    /// Number of sections tracked.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True if no sections are tracked.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether `section` is collapsed. Out-of-range sections read as expanded.
    pub fn is_collapsed(&self, section: usize) -> bool {
        self.sections.get(section).is_some_and(|s| s.collapsed)
    }

    /// The section's full item count, ignoring collapse state.
    pub fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.item_count)
    }

    /// Visible item count: zero while collapsed, the full count otherwise.
    pub fn visible_items(&self, section: usize) -> usize {
        match self.sections.get(section) {
            Some(s) if !s.collapsed => s.item_count,
            _ => 0,
        }
    }

    /// Total visible items across all sections.
    pub fn total_visible(&self) -> usize {
        (0..self.len()).map(|i| self.visible_items(i)).sum()
    }

    /// Flip `section` between expanded and collapsed.
    ///
    /// Returns `None` for an out-of-range index; state is unchanged in that
    /// case.
    pub fn toggle(&mut self, section: usize) -> Option<SectionToggle> {
        let s = self.sections.get_mut(section)?;
        s.collapsed = !s.collapsed;
        Some(SectionToggle {
            section,
            collapsed: s.collapsed,
            item_count: s.item_count,
        })
    }
}
