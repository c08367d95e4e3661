// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Geometry module - torus parameters, layer measurements and outlines

mod measurements;
mod outline;
mod params;

pub use measurements::{compute, measure, Layer, Measurements, Segment};
pub use outline::{layer_outline, stagger_offset, SegmentOutline};
pub use params::{TorusParameters, DEFAULT_KERF, MAX_LAYERS, MIN_SEGMENTS};
