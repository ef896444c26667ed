// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_dock::{
    ColumnFlow, DockConfig, DockLayout, FlowSource, ScrollState, SectionSpec,
};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};

const WIDTH: f64 = 320.0;
const VIEWPORT_H: f64 = 568.0;

fn build_flow(sections: usize, items: usize) -> ColumnFlow {
    let mut specs = vec![SectionSpec {
        header_height: 0.0,
        item_height: 300.0,
        item_count: 1,
    }];
    specs.extend((0..sections).map(|_| SectionSpec {
        header_height: 60.0,
        item_height: 44.0,
        item_count: items,
    }));
    ColumnFlow::new(WIDTH, &specs)
}

fn scroll_offsets(flow: &ColumnFlow, ticks: usize) -> Vec<f64> {
    let max = flow.content_size().height - VIEWPORT_H;
    (0..ticks).map(|i| max * i as f64 / ticks as f64).collect()
}

fn bench_full_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_for_scroll");
    for (sections, items) in [(4, 3), (50, 20), (500, 20)] {
        let flow = build_flow(sections, items);
        let offsets = scroll_offsets(&flow, 64);
        let dock = DockLayout::new(DockConfig::new(50.0));
        group.throughput(Throughput::Elements(offsets.len() as u64));
        group.bench_function(format!("sections_{sections}x{items}"), |b| {
            b.iter(|| {
                for &offset_y in &offsets {
                    let scroll = ScrollState {
                        offset_y,
                        viewport: Size::new(WIDTH, VIEWPORT_H),
                    };
                    black_box(dock.layout_for_scroll(&flow, scroll));
                }
            });
        });
    }
    group.finish();
}

fn bench_header_stacking(c: &mut Criterion) {
    let dock = DockLayout::new(DockConfig::new(50.0));
    // A worst-case pile: every visible header qualifies for stacking.
    let frames: Vec<Rect> = (0..64)
        .map(|i| Rect::new(0.0, 200.0 + i as f64 * 10.0, WIDTH, 260.0 + i as f64 * 10.0))
        .collect();
    c.bench_function("dock_section_headers_64", |b| {
        b.iter(|| black_box(dock.dock_section_headers(black_box(&frames), 900.0)));
    });
}

fn bench_mask_pass(c: &mut Criterion) {
    let flow = build_flow(50, 20);
    let dock = DockLayout::new(DockConfig::new(50.0));
    let scroll = ScrollState {
        offset_y: 2000.0,
        viewport: Size::new(WIDTH, VIEWPORT_H),
    };
    let raw = flow.elements_in(scroll.viewport_rect());
    let laid_out = dock.layout_elements(raw, scroll.offset_y);
    c.bench_function("apply_masks_visible_set", |b| {
        b.iter(|| {
            let mut elements = laid_out.clone();
            dock.apply_masks(&mut elements);
            black_box(elements);
        });
    });
}

criterion_group!(
    benches,
    bench_full_tick,
    bench_header_stacking,
    bench_mask_pass
);
criterion_main!(benches);
