// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Show the binary snap decision for a range of fling release points and
//! velocities.
//!
//! Run:
//! - `cargo run -p canopy_demos --example scroll_snap`

use canopy_dock::snap_offset;

fn main() {
    // Header 300pt, docked height 50pt: the undecided range is (0, 250).
    let header = 300.0;
    let docked = 50.0;

    println!("proposed  velocity  ->  target");
    for proposed in [40.0, 120.0, 125.0, 130.0, 240.0, 400.0] {
        for velocity in [-1.5, 0.0, 1.5] {
            let target = snap_offset(proposed, velocity, header, docked);
            println!("{proposed:>8.0}  {velocity:>8.1}  ->  {target:>6.0}");
        }
    }
}
