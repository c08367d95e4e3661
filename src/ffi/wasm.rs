// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! WASM bindings using wasm-bindgen

use crate::geometry::{Measurements, TorusParameters, DEFAULT_KERF};
use crate::{io, Calculator, Report};
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// Calculator handle for a web form; recomputes only when an input changes
#[wasm_bindgen]
pub struct WasmCalculator {
    inner: Calculator,
    kerf: f64,
}

#[wasm_bindgen]
impl WasmCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Calculator::new(),
            kerf: DEFAULT_KERF,
        }
    }

    /// Saw kerf used by subsequent calls
    pub fn set_kerf(&mut self, kerf: f64) {
        self.kerf = kerf;
    }

    pub fn kerf(&self) -> f64 {
        self.kerf
    }

    /// Measurements as JSON
    pub fn measure(
        &mut self,
        inner_diameter: f64,
        outer_diameter: f64,
        num_segments: u32,
        material_thickness: f64,
    ) -> Result<String, JsValue> {
        let (_, measurements) = self.compute(
            inner_diameter,
            outer_diameter,
            num_segments,
            material_thickness,
        )?;

        io::to_json(&*measurements).map_err(|e| JsValue::from_str(&format!("JSON error: {}", e)))
    }

    /// Cut list report as JSON
    pub fn report(
        &mut self,
        inner_diameter: f64,
        outer_diameter: f64,
        num_segments: u32,
        material_thickness: f64,
    ) -> Result<String, JsValue> {
        let (params, measurements) = self.compute(
            inner_diameter,
            outer_diameter,
            num_segments,
            material_thickness,
        )?;

        io::to_json(&Report::new(&params, &measurements))
            .map_err(|e| JsValue::from_str(&format!("JSON error: {}", e)))
    }

    /// SVG schematic
    pub fn schematic(
        &mut self,
        inner_diameter: f64,
        outer_diameter: f64,
        num_segments: u32,
        material_thickness: f64,
    ) -> Result<String, JsValue> {
        let (params, measurements) = self.compute(
            inner_diameter,
            outer_diameter,
            num_segments,
            material_thickness,
        )?;

        io::render_schematic(&params, &measurements)
            .map_err(|e| JsValue::from_str(&format!("Render error: {}", e)))
    }
}

impl WasmCalculator {
    fn compute(
        &mut self,
        inner_diameter: f64,
        outer_diameter: f64,
        num_segments: u32,
        material_thickness: f64,
    ) -> Result<(TorusParameters, Arc<Measurements>), JsValue> {
        let params = TorusParameters::try_from_diameters(
            inner_diameter,
            outer_diameter,
            num_segments,
            material_thickness,
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .with_kerf(self.kerf);

        let measurements = self
            .inner
            .measure(&params)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok((params, measurements))
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
