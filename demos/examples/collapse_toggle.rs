// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire collapse state to the flow layout: toggle a section, rebuild the
//! flow with the new visible counts, and show how later sections shift.
//!
//! Run:
//! - `cargo run -p canopy_demos --example collapse_toggle`

use canopy_dock::{ColumnFlow, ElementId, ElementKind, FlowSource, SectionSpec};
use canopy_sections::SectionStates;

const WIDTH: f64 = 320.0;

/// Element section 0 is the main header; content section `i` lives at
/// element section `i + 1`.
fn specs(sections: &SectionStates) -> Vec<SectionSpec> {
    let mut out = vec![SectionSpec {
        header_height: 0.0,
        item_height: 300.0,
        item_count: 1,
    }];
    out.extend((0..sections.len()).map(|i| SectionSpec {
        header_height: 60.0,
        item_height: 44.0,
        item_count: sections.visible_items(i),
    }));
    out
}

fn header_y(flow: &ColumnFlow, element_section: u32) -> Option<f64> {
    flow.raw_frame(
        ElementId::new(element_section, 0),
        ElementKind::SectionHeader,
    )
    .map(|f| f.y0)
}

fn main() {
    let mut sections = SectionStates::new([3, 3, 3, 3]);
    let mut flow = ColumnFlow::new(WIDTH, &specs(&sections));
    println!(
        "expanded: header 3 at y {:?}, {} visible items",
        header_y(&flow, 3),
        sections.total_visible(),
    );

    // Collapse content section 1: its three cells disappear and every later
    // section shifts up by 3 * 44.
    let toggle = sections.toggle(1).expect("section 1 exists");
    println!(
        "toggled section {}: collapsed={}, {} identities removed",
        toggle.section, toggle.collapsed, toggle.item_count,
    );
    flow.update_sections(&specs(&sections));
    println!(
        "collapsed: header 3 at y {:?}, {} visible items",
        header_y(&flow, 3),
        sections.total_visible(),
    );

    // Toggle back: an involution, the original geometry returns.
    sections.toggle(1).expect("section 1 exists");
    flow.update_sections(&specs(&sections));
    println!(
        "restored: header 3 at y {:?}, {} visible items",
        header_y(&flow, 3),
        sections.total_visible(),
    );
}
