// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Input parameters for a segmented torus

use crate::error::{MeasurementError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Material lost per saw cut when none is given, in millimeters
pub const DEFAULT_KERF: f64 = 2.2;

/// Fewest segments that still close into a polygon with finite outer radius
pub const MIN_SEGMENTS: u32 = 3;

/// Most layers a half torus may be cut into
pub const MAX_LAYERS: usize = 100_000;

/// The five inputs of a torus measurement, all lengths in millimeters.
///
/// Equality is by value: two parameter sets that compare equal always
/// produce identical measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusParameters {
    /// Outer diameter of the assembled ring
    pub ring_diameter: f64,
    /// Diameter of the tube cross-section
    pub torus_diameter: f64,
    /// Segments per layer
    pub num_segments: u32,
    /// Thickness of the flat stock
    pub material_thickness: f64,
    /// Width lost per cut
    #[serde(default = "default_kerf")]
    pub kerf: f64,
}

fn default_kerf() -> f64 {
    DEFAULT_KERF
}

impl Default for TorusParameters {
    fn default() -> Self {
        Self::from_diameters(100.0, 400.0, 8, 18.0)
    }
}

impl TorusParameters {
    pub fn new(
        ring_diameter: f64,
        torus_diameter: f64,
        num_segments: u32,
        material_thickness: f64,
    ) -> Self {
        Self {
            ring_diameter,
            torus_diameter,
            num_segments,
            material_thickness,
            kerf: DEFAULT_KERF,
        }
    }

    /// Build parameters from the inner and outer diameters of the finished ring.
    ///
    /// The tube diameter is half the difference of the two, the ring
    /// diameter is the outer one.
    pub fn from_diameters(
        inner_diameter: f64,
        outer_diameter: f64,
        num_segments: u32,
        material_thickness: f64,
    ) -> Self {
        Self::new(
            outer_diameter,
            (outer_diameter - inner_diameter) / 2.0,
            num_segments,
            material_thickness,
        )
    }

    /// Like [`TorusParameters::from_diameters`], but reports inconsistent
    /// diameters in terms of the inner and outer values the user entered.
    ///
    /// Zero thickness is still accepted as is, since it measures empty.
    pub fn try_from_diameters(
        inner_diameter: f64,
        outer_diameter: f64,
        num_segments: u32,
        material_thickness: f64,
    ) -> Result<Self> {
        let params = Self::from_diameters(
            inner_diameter,
            outer_diameter,
            num_segments,
            material_thickness,
        );
        if params.is_empty() {
            return Ok(params);
        }

        if inner_diameter < 0.0 {
            return Err(MeasurementError::invalid(
                "inner_diameter",
                format!("must not be negative, got {}", inner_diameter),
            ));
        }
        if inner_diameter >= outer_diameter {
            return Err(MeasurementError::invalid(
                "inner_diameter",
                format!(
                    "must be smaller than the outer diameter {}, got {}",
                    outer_diameter, inner_diameter
                ),
            ));
        }

        Ok(params)
    }

    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    pub fn ring_radius(&self) -> f64 {
        self.ring_diameter / 2.0
    }

    pub fn torus_radius(&self) -> f64 {
        self.torus_diameter / 2.0
    }

    /// Radius of the circle traced by the tube center
    pub fn ring_center_radius(&self) -> f64 {
        self.ring_radius() - self.torus_radius()
    }

    /// Angular width of one segment, in radians
    pub fn segment_phi(&self) -> f64 {
        PI * 2.0 / self.num_segments as f64
    }

    /// Bevel angle for joining adjacent segments, in degrees
    pub fn mitre_angle_degrees(&self) -> f64 {
        180.0 / self.num_segments as f64
    }

    /// Zero thickness yields an empty measurement rather than an error
    pub fn is_empty(&self) -> bool {
        self.material_thickness == 0.0
    }

    /// Layers needed to stack up to the pole, `ceil(torus_radius / thickness)`.
    /// Infinite for zero thickness.
    pub fn layer_count(&self) -> f64 {
        (self.torus_radius() / self.material_thickness).ceil()
    }

    /// Reject parameters that would produce NaN or self-intersecting geometry.
    pub fn validate(&self) -> Result<()> {
        check_finite("ring_diameter", self.ring_diameter)?;
        check_finite("torus_diameter", self.torus_diameter)?;
        check_finite("material_thickness", self.material_thickness)?;
        check_finite("kerf", self.kerf)?;

        if self.num_segments < MIN_SEGMENTS {
            return Err(MeasurementError::invalid(
                "num_segments",
                format!(
                    "must be at least {}, got {}",
                    MIN_SEGMENTS, self.num_segments
                ),
            ));
        }
        if self.ring_diameter <= 0.0 {
            return Err(MeasurementError::invalid(
                "ring_diameter",
                format!("must be positive, got {}", self.ring_diameter),
            ));
        }
        if self.torus_diameter <= 0.0 {
            return Err(MeasurementError::invalid(
                "torus_diameter",
                format!("must be positive, got {}", self.torus_diameter),
            ));
        }
        if self.torus_diameter >= self.ring_diameter {
            return Err(MeasurementError::DegenerateTorus {
                ring_diameter: self.ring_diameter,
                torus_diameter: self.torus_diameter,
            });
        }
        if self.material_thickness < 0.0 {
            return Err(MeasurementError::invalid(
                "material_thickness",
                format!("must not be negative, got {}", self.material_thickness),
            ));
        }
        if self.material_thickness > 0.0 {
            let layers = self.layer_count();
            if !layers.is_finite() || layers > MAX_LAYERS as f64 {
                return Err(MeasurementError::invalid(
                    "material_thickness",
                    format!(
                        "{} is too thin, the torus would need more than {} layers",
                        self.material_thickness, MAX_LAYERS
                    ),
                ));
            }
        }
        if self.kerf < 0.0 {
            return Err(MeasurementError::invalid(
                "kerf",
                format!("must not be negative, got {}", self.kerf),
            ));
        }

        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MeasurementError::invalid(
            name,
            format!("must be a finite number, got {}", value),
        ))
    }
}
