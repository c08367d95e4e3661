// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! JSON rendering of measurements and reports

use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-printed JSON of any measurement value
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize measurements")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{measure, Measurements, TorusParameters};

    #[test]
    fn test_measurements_json_shape() {
        let m = measure(&TorusParameters::default()).unwrap();
        let json = to_json(&m).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["ring_center_radius"], 125.0);
        assert_eq!(value["layers"].as_array().unwrap().len(), 5);
        assert_eq!(value["layers"][0]["segment"]["r0"], 50.0);
    }

    #[test]
    fn test_empty_measurements_json() {
        let json = to_json(&Measurements::empty()).unwrap();
        let back: Measurements = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Measurements::empty());
    }
}
