// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Segtorus
//!
//! Layer and segment measurements for a torus built from stacked rings of
//! flat stock, each ring cut into trapezoidal segments. Given the ring
//! diameter, tube diameter, segment count, stock thickness and saw kerf it
//! derives the cut list for one half of the torus and can draw a plan-view
//! schematic of it.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod report;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod ffi;

pub use config::CalculatorConfig;
pub use error::{MeasurementError, Result};
pub use geometry::{compute, measure, Layer, Measurements, Segment, TorusParameters};
pub use io::render_schematic;
pub use kernel::{CacheStats, Calculator};
pub use report::Report;
