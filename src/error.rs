// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Error types for torus measurement.

use thiserror::Error;

/// Errors raised before any layer is computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    /// An input parameter is outside its valid domain.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The tube is as wide as (or wider than) the ring itself.
    #[error(
        "Degenerate torus: torus diameter {torus_diameter} must be smaller than ring diameter {ring_diameter}"
    )]
    DegenerateTorus {
        ring_diameter: f64,
        torus_diameter: f64,
    },
}

impl MeasurementError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name, .. } => name,
            Self::DegenerateTorus { .. } => "torus_diameter",
        }
    }
}

/// Result type alias for measurement operations.
pub type Result<T> = std::result::Result<T, MeasurementError>;
