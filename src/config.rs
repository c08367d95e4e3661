// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Calculator configuration system

use crate::error::Result as MeasurementResult;
use crate::geometry::{TorusParameters, DEFAULT_KERF};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File looked up in the working directory by [`CalculatorConfig::load`]
pub const CONFIG_FILE: &str = "segtorus.toml";

/// Default inputs, as entered on a workshop form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Inner diameter of the finished ring
    pub inner_diameter: f64,
    /// Outer diameter of the finished ring
    pub outer_diameter: f64,
    /// Segments per layer
    pub num_segments: u32,
    /// Stock thickness
    pub material_thickness: f64,
    /// Saw kerf
    pub kerf: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            inner_diameter: 100.0,
            outer_diameter: 400.0,
            num_segments: 8,
            material_thickness: 18.0,
            kerf: DEFAULT_KERF,
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: CalculatorConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            debug!(path = CONFIG_FILE, "loading config file");
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `SEGTORUS_*` environment variables on top of the current values
    pub fn apply_env_overrides(&mut self) {
        override_from_env("SEGTORUS_INNER_DIAMETER", &mut self.inner_diameter);
        override_from_env("SEGTORUS_OUTER_DIAMETER", &mut self.outer_diameter);
        override_from_env("SEGTORUS_SEGMENTS", &mut self.num_segments);
        override_from_env("SEGTORUS_THICKNESS", &mut self.material_thickness);
        override_from_env("SEGTORUS_KERF", &mut self.kerf);
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Calculator inputs for these settings
    pub fn to_parameters(&self) -> MeasurementResult<TorusParameters> {
        let params = TorusParameters::try_from_diameters(
            self.inner_diameter,
            self.outer_diameter,
            self.num_segments,
            self.material_thickness,
        )?;
        Ok(params.with_kerf(self.kerf))
    }
}

fn override_from_env<T: std::str::FromStr>(key: &str, target: &mut T) {
    if let Ok(raw) = std::env::var(key) {
        match raw.trim().parse() {
            Ok(value) => *target = value,
            Err(_) => warn!(key, value = %raw, "ignoring unparsable environment override"),
        }
    }
}
