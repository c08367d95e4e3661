// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Layer and segment measurements of a stacked, segmented torus
//!
//! The torus is built from flat layers stacked from the tube's equator up
//! to its pole; the lower half is a mirrored copy glued underneath, so only
//! one half is computed. Each layer is a ring of trapezoidal segments whose
//! inner corners lie on the tube circle and whose outer edge is a chord
//! tangent to it.

use super::params::TorusParameters;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Plan-view polar description of one segment. The start angle is left
/// implicit since every segment of a layer has the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Inner radius, on the tube circle
    pub r0: f64,
    /// Outer radius at the segment corners, outside the tube circle
    pub r1: f64,
    /// Angular width in radians
    pub phi: f64,
}

/// One slab of material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Radial width of the trapezoid, perpendicular to its centerline
    pub width: f64,
    /// Stock length needed to cut every segment of the layer from one strip
    pub length: f64,
    /// Slab thickness, clipped at the pole
    pub height: f64,
    /// Long (outer) edge of a segment
    pub segment_length: f64,
    pub segment: Segment,
}

/// Measurements of a whole half torus, layers ordered from equator to pole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub ring_center_radius: f64,
    pub layers: Vec<Layer>,
}

impl Measurements {
    /// The result for zero material thickness
    pub fn empty() -> Self {
        Self {
            ring_center_radius: 0.0,
            layers: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Sum of layer heights; equals the tube radius for a non-empty result
    pub fn total_height(&self) -> f64 {
        self.layers.iter().map(|layer| layer.height).sum()
    }

    /// Stock length summed over all layers of one half
    pub fn total_length(&self) -> f64 {
        self.layers.iter().map(|layer| layer.length).sum()
    }
}

/// Compute the measurements for a set of parameters.
///
/// Zero material thickness returns [`Measurements::empty`] without further
/// checks. Anything else is validated first so no partial result is ever
/// produced.
pub fn measure(params: &TorusParameters) -> Result<Measurements> {
    if params.is_empty() {
        return Ok(Measurements::empty());
    }
    params.validate()?;

    let torus_radius = params.torus_radius();
    let ring_center_radius = params.ring_center_radius();
    let thickness = params.material_thickness;
    let n = params.num_segments as f64;

    let half_phi = params.segment_phi() / 2.0;
    let (sin_half, cos_half) = half_phi.sin_cos();
    let tan_half = half_phi.tan();

    // Bounded by MAX_LAYERS once validated
    let mut layers = Vec::with_capacity(params.layer_count() as usize);

    let mut index = 0usize;
    loop {
        // Multiplying instead of accumulating keeps the offset free of drift
        let h = index as f64 * thickness;
        if h >= torus_radius {
            break;
        }

        let layer_radius = (torus_radius * torus_radius - h * h).max(0.0).sqrt();

        let r0 = ring_center_radius - layer_radius;
        let r1 = (ring_center_radius + layer_radius) / cos_half;

        let width = (r1 - r0) * cos_half;
        let segment_length = 2.0 * r1 * sin_half;
        let segment_overlap = width * tan_half;
        let length =
            segment_length + (n - 1.0) * (segment_length - segment_overlap) + n * params.kerf;
        let height = thickness.min(torus_radius - h);

        trace!(index, h, layer_radius, r0, r1, width, length, "layer");

        layers.push(Layer {
            width,
            length,
            height,
            segment_length,
            segment: Segment {
                r0,
                r1,
                phi: params.segment_phi(),
            },
        });

        index += 1;
    }

    debug!(
        layers = layers.len(),
        ring_center_radius, torus_radius, "computed torus measurements"
    );

    Ok(Measurements {
        ring_center_radius,
        layers,
    })
}

/// Compute measurements from loose arguments, kerf defaulting to 2.2 mm.
pub fn compute(
    ring_diameter: f64,
    torus_diameter: f64,
    num_segments: u32,
    material_thickness: f64,
    kerf: Option<f64>,
) -> Result<Measurements> {
    let mut params =
        TorusParameters::new(ring_diameter, torus_diameter, num_segments, material_thickness);
    if let Some(kerf) = kerf {
        params.kerf = kerf;
    }
    measure(&params)
}
