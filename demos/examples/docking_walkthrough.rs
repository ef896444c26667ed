// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk a collapsible list through a few scroll offsets and print the
//! adjusted frames, z-orders, and masks the docking engine produces.
//!
//! Run:
//! - `cargo run -p canopy_demos --example docking_walkthrough`

use canopy_dock::{
    ColumnFlow, DockConfig, DockLayout, ElementKind, FlowSource, ScrollState, SectionSpec,
};
use kurbo::Size;

const WIDTH: f64 = 320.0;
const VIEWPORT_H: f64 = 568.0;

fn main() {
    // A 300pt main header docking down to 50pt, then four content sections.
    let dock = DockLayout::new(DockConfig::new(50.0));
    let mut sections = vec![SectionSpec {
        header_height: 0.0,
        item_height: 300.0,
        item_count: 1,
    }];
    sections.extend((0..4).map(|_| SectionSpec {
        header_height: 60.0,
        item_height: 44.0,
        item_count: 3,
    }));
    let flow = ColumnFlow::new(WIDTH, &sections);

    println!(
        "content height: natural {:.0}, floored {:.0}",
        flow.content_size().height,
        dock.content_size(&flow, VIEWPORT_H).height,
    );

    for offset in [0.0, 100.0, 300.0, 500.0, 700.0] {
        let scroll = ScrollState {
            offset_y: offset,
            viewport: Size::new(WIDTH, VIEWPORT_H),
        };
        println!("\n-- offset {offset:.0} --");
        for el in dock.layout_for_scroll(&flow, scroll) {
            let kind = match el.kind {
                ElementKind::Cell => "cell  ",
                ElementKind::SectionHeader => "header",
            };
            let mask = match el.mask.frame() {
                Some(m) => format!(" mask y {:.0}..{:.0}", m.y0, m.y1),
                None => String::new(),
            };
            println!(
                "{kind} ({},{}) y {:>4.0}..{:<4.0} z {:>3} {:?}{mask}",
                el.id.section, el.id.item, el.frame.y0, el.frame.y1, el.z_index, el.flags,
            );
        }
    }
}
