// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Configuration loading tests

use anyhow::Result;
use segtorus::{measure, CalculatorConfig, TorusParameters};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

#[test]
fn test_config_file_drives_parameters() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "inner_diameter = 200.0")?;
    writeln!(file, "outer_diameter = 400.0")?;
    writeln!(file, "num_segments = 16")?;
    writeln!(file, "material_thickness = 20.0")?;
    writeln!(file, "kerf = 3.0")?;

    let config = CalculatorConfig::from_file(file.path())?;
    let params = config.to_parameters()?;

    assert_eq!(params.ring_diameter, 400.0);
    assert_eq!(params.torus_diameter, 100.0);
    assert_eq!(params.num_segments, 16);
    assert_eq!(params.kerf, 3.0);

    let m = measure(&params)?;
    assert_eq!(m.ring_center_radius, 150.0);
    assert_eq!(m.layer_count(), 3);

    Ok(())
}

#[test]
fn test_save_and_reload() -> Result<()> {
    let file = NamedTempFile::new()?;
    let config = CalculatorConfig {
        num_segments: 24,
        ..CalculatorConfig::default()
    };

    config.save(file.path())?;
    let reloaded = CalculatorConfig::from_file(file.path())?;
    assert_eq!(reloaded, config);

    Ok(())
}

#[test]
fn test_invalid_config_reports_path() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "num_segments = \"many\"")?;

    let err = CalculatorConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    Ok(())
}

/// Serializes tests that touch the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    std::env::set_var("SEGTORUS_SEGMENTS", "10");
    std::env::set_var("SEGTORUS_KERF", "not-a-number");

    let mut config = CalculatorConfig::default();
    config.apply_env_overrides();

    std::env::remove_var("SEGTORUS_SEGMENTS");
    std::env::remove_var("SEGTORUS_KERF");

    assert_eq!(config.num_segments, 10);
    assert_eq!(config.kerf, TorusParameters::default().kerf);
}

#[test]
fn test_load_without_file_uses_environment() -> Result<()> {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    std::env::set_var("SEGTORUS_THICKNESS", "25");
    let loaded = CalculatorConfig::load();
    std::env::remove_var("SEGTORUS_THICKNESS");

    let config = loaded?;
    assert_eq!(config.material_thickness, 25.0);
    assert_eq!(config.num_segments, CalculatorConfig::default().num_segments);

    Ok(())
}
