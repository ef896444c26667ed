// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocity-aware scroll snapping for the main header.
//!
//! While the main header is partially docked there is no stable resting
//! state: a fling should settle either fully expanded (offset 0) or fully
//! docked. The decision is binary. Velocity provides the hysteresis: the
//! proposed offset is projected forward and compared against the midpoint of
//! the partially-docked range, so a decisive flick wins over the raw release
//! position. No value strictly inside the range is ever produced.

use crate::dock::DockLayout;
use crate::flow::FlowSource;
use crate::types::{ElementKind, MAIN_HEADER};

/// Projection constant converting fling velocity to points.
///
/// Velocity arrives in points per millisecond (the usual scroll-view
/// convention), so this projects one decisecond ahead. Tuned so typical
/// flick velocities cross the midpoint decisively.
pub const VELOCITY_PROJECTION: f64 = 100.0;

/// Snap a proposed scroll offset against the main header's docking range.
///
/// Returns exactly `0.0`, exactly `main_header_height - docked_height`, or
/// the unmodified `proposed_y` when it already lies outside the
/// partially-docked range.
pub fn snap_offset(
    proposed_y: f64,
    velocity_y: f64,
    main_header_height: f64,
    docked_height: f64,
) -> f64 {
    let undockable = main_header_height - docked_height;
    if proposed_y <= 0.0 || proposed_y >= undockable {
        return proposed_y;
    }
    let midpoint = undockable / 2.0;
    let projected = proposed_y + velocity_y * VELOCITY_PROJECTION;
    if projected > midpoint { undockable } else { 0.0 }
}

impl DockLayout {
    /// Adjust a fling's proposed target offset for header snapping.
    ///
    /// Looks up the main header's raw frame in `source`; when the header is
    /// not laid out the proposed offset passes through unmodified.
    pub fn target_offset<S: FlowSource>(
        &self,
        source: &S,
        proposed_y: f64,
        velocity_y: f64,
    ) -> f64 {
        match source.raw_frame(MAIN_HEADER, ElementKind::Cell) {
            Some(frame) => snap_offset(
                proposed_y,
                velocity_y,
                frame.height(),
                self.config().docked_height(),
            ),
            None => proposed_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{ColumnFlow, SectionSpec};
    use crate::types::DockConfig;

    // Header 300 docked at 50: the undecided range is (0, 250).

    #[test]
    fn zero_velocity_snaps_around_the_midpoint() {
        assert_eq!(snap_offset(100.0, 0.0, 300.0, 50.0), 0.0);
        assert_eq!(snap_offset(126.0, 0.0, 300.0, 50.0), 250.0);
    }

    #[test]
    fn velocity_overrides_position() {
        // Released just below the midpoint, but flung downward.
        assert_eq!(snap_offset(100.0, 0.5, 300.0, 50.0), 250.0);
        // Released past the midpoint, flung back up.
        assert_eq!(snap_offset(200.0, -1.2, 300.0, 50.0), 0.0);
    }

    #[test]
    fn outside_the_range_passes_through() {
        assert_eq!(snap_offset(0.0, 3.0, 300.0, 50.0), 0.0);
        assert_eq!(snap_offset(-40.0, 3.0, 300.0, 50.0), -40.0);
        assert_eq!(snap_offset(250.0, -3.0, 300.0, 50.0), 250.0);
        assert_eq!(snap_offset(800.0, -3.0, 300.0, 50.0), 800.0);
    }

    #[test]
    fn never_settles_strictly_inside_the_range() {
        for proposed in [1.0, 60.0, 124.9, 125.1, 249.0] {
            for velocity in [-2.0, -0.3, 0.0, 0.3, 2.0] {
                let snapped = snap_offset(proposed, velocity, 300.0, 50.0);
                assert!(
                    snapped == 0.0 || snapped == 250.0,
                    "proposed {proposed} velocity {velocity} gave {snapped}"
                );
            }
        }
    }

    #[test]
    fn degenerate_docked_height_collapses_the_range() {
        // docked_height == header height: no partially-docked range at all.
        assert_eq!(snap_offset(10.0, 0.0, 300.0, 300.0), 10.0);
    }

    #[test]
    fn missing_main_header_passes_through() {
        let dock = DockLayout::new(DockConfig::new(50.0));
        // A flow with no cell at the main-header identity.
        let flow = ColumnFlow::new(
            320.0,
            &[SectionSpec {
                header_height: 60.0,
                item_height: 44.0,
                item_count: 0,
            }],
        );
        assert_eq!(dock.target_offset(&flow, 100.0, 0.8), 100.0);
    }

    #[test]
    fn target_offset_reads_header_height_from_the_flow() {
        let dock = DockLayout::new(DockConfig::new(50.0));
        let flow = ColumnFlow::new(
            320.0,
            &[SectionSpec {
                header_height: 0.0,
                item_height: 300.0,
                item_count: 1,
            }],
        );
        assert_eq!(dock.target_offset(&flow, 200.0, 0.0), 250.0);
        assert_eq!(dock.target_offset(&flow, 20.0, 0.0), 0.0);
    }
}
