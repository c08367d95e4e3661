// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Plan-view outlines of layer segments

use super::measurements::{Layer, Segment};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Four corners of one segment, counter-clockwise from the inner start corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentOutline {
    pub corners: [Point2<f64>; 4],
}

impl SegmentOutline {
    /// Corners of a segment spanning the angles `a0..a1`
    pub fn new(segment: &Segment, a0: f64, a1: f64) -> Self {
        let (sin0, cos0) = a0.sin_cos();
        let (sin1, cos1) = a1.sin_cos();

        Self {
            corners: [
                Point2::new(segment.r0 * cos0, segment.r0 * sin0),
                Point2::new(segment.r0 * cos1, segment.r0 * sin1),
                Point2::new(segment.r1 * cos1, segment.r1 * sin1),
                Point2::new(segment.r1 * cos0, segment.r1 * sin0),
            ],
        }
    }

    /// Length of the outer edge
    pub fn outer_edge(&self) -> f64 {
        nalgebra::distance(&self.corners[2], &self.corners[3])
    }
}

/// Angular offset of a layer; odd layers are turned by half a segment so
/// the joints are bricked.
pub fn stagger_offset(layer_index: usize, phi: f64) -> f64 {
    (layer_index % 2) as f64 * phi / 2.0
}

/// Outline of every segment of a layer
pub fn layer_outline(layer: &Layer, layer_index: usize, num_segments: u32) -> Vec<SegmentOutline> {
    let segment = &layer.segment;
    let offset = stagger_offset(layer_index, segment.phi);

    (0..num_segments)
        .map(|j| {
            let a0 = segment.phi * j as f64 + offset;
            let a1 = segment.phi * (j + 1) as f64 + offset;
            SegmentOutline::new(segment, a0, a1)
        })
        .collect()
}
