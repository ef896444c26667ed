// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometry helpers.

use kurbo::Rect;

/// Clamp `value` into `[a_min, a_max]`.
///
/// Assumes `a_min <= a_max`; comparisons treat NaN as out of range on either
/// side.
pub fn pin<T: PartialOrd>(a_min: T, value: T, a_max: T) -> T {
    if value < a_min {
        a_min
    } else if value > a_max {
        a_max
    } else {
        value
    }
}

/// Strict intersection: touching edges do not count as overlap.
pub(crate) fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}
