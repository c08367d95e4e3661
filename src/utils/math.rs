// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Math utilities

/// Round a length up to whole millimeters, as read off a tape
pub fn ceil_mm(value: f64) -> i64 {
    value.ceil() as i64
}

/// Format a number for SVG attributes without trailing zeros
pub fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0"
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}
