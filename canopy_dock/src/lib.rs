// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Dock: a sticky-header docking engine for scrolling lists.
//!
//! A collapsible list has one tall "main header" that docks at the viewport
//! top as content scrolls beneath it, and per-section headers that pin below
//! it, stack, and push one another out of the way as sections collapse and
//! expand. This crate is the layout half of that behavior: pure geometry over
//! a sequence of positioned elements.
//!
//! - The engine never lays out content. A base flow layout (anything
//!   implementing [`FlowSource`]; [`ColumnFlow`] is a minimal single-column
//!   one) supplies raw frames and viewport queries.
//! - [`DockLayout`] adjusts those frames per scroll tick: the main header is
//!   clamped so its configured docked height stays visible, section headers
//!   clamp to the docking line and re-stack gap-free, and occlusion masks
//!   (via [`canopy_mask`]) clip content scrolling beneath the
//!   semi-transparent headers.
//! - [`snap_offset`] turns a fling's proposed offset into a binary
//!   expanded/docked decision while the main header is partially docked.
//!
//! Every computation is a pure function of the raw frames, the scroll
//! offset, and the [`DockConfig`]; nothing here holds scroll state. Per-tick
//! cost is O(visible elements).
//!
//! ## Ordering
//!
//! Section headers dock against the main header's *post-docking* remainder
//! (the docking line is `offset + docked_height`), and masks are computed
//! from final docked frames, so the passes must run in order: main header,
//! section headers, masks. [`DockLayout::layout_for_scroll`] runs all three.
//!
//! # Example
//!
//! ```rust
//! use canopy_dock::{ColumnFlow, DockConfig, DockLayout, SectionSpec};
//! use kurbo::Rect;
//!
//! // A 300pt main header docking down to 50pt.
//! let dock = DockLayout::new(DockConfig::new(50.0));
//! let raw = Rect::new(0.0, 0.0, 320.0, 300.0);
//!
//! assert_eq!(dock.dock_main_header(raw, 100.0).y0, 0.0);
//! assert_eq!(dock.dock_main_header(raw, 300.0).y0, 50.0);
//! assert_eq!(dock.dock_main_header(raw, 500.0).y0, 250.0);
//!
//! // A fling released with the header half-docked snaps to an extreme.
//! let flow = ColumnFlow::new(
//!     320.0,
//!     &[SectionSpec { header_height: 0.0, item_height: 300.0, item_count: 1 }],
//! );
//! assert_eq!(dock.target_offset(&flow, 100.0, 0.9), 250.0);
//! assert_eq!(dock.target_offset(&flow, 100.0, -0.9), 0.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dock;
mod flow;
mod snap;
mod types;
mod util;

pub use dock::{DockLayout, DockedHeader};
pub use flow::{ColumnFlow, FlowSource, SectionSpec};
pub use snap::{VELOCITY_PROJECTION, snap_offset};
pub use types::{
    DockConfig, DockFlags, ElementId, ElementKind, ElementLayout, MAIN_HEADER, MAIN_HEADER_Z,
    RawElement, SECTION_HEADER_Z, ScrollState,
};
pub use util::pin;
