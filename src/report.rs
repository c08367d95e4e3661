// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Cut list report (summary and per-layer table)
//!
//! Values are rounded up to whole millimeters here and nowhere else, so a
//! cut list never asks for less material than the geometry needs.

use crate::geometry::{Measurements, TorusParameters};
use crate::utils::ceil_mm;
use serde::{Deserialize, Serialize};

/// Whole-torus figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub layer_count: usize,
    pub ring_center_radius: f64,
    pub torus_radius: f64,
    pub torus_diameter: f64,
    /// Degrees
    pub mitre_angle: f64,
}

/// One row of the cut list, lengths in whole millimeters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRow {
    /// 1-based layer number
    pub index: usize,
    pub width: i64,
    pub height: i64,
    pub segment_length: i64,
    pub length: i64,
    pub max_radius: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub rows: Vec<LayerRow>,
}

impl Report {
    pub fn new(params: &TorusParameters, measurements: &Measurements) -> Self {
        let torus_radius = params.torus_radius();

        let summary = Summary {
            layer_count: measurements.layer_count(),
            ring_center_radius: measurements.ring_center_radius,
            torus_radius,
            torus_diameter: torus_radius * 2.0,
            mitre_angle: params.mitre_angle_degrees(),
        };

        let rows = measurements
            .layers
            .iter()
            .enumerate()
            .map(|(i, layer)| LayerRow {
                index: i + 1,
                width: ceil_mm(layer.width),
                height: ceil_mm(layer.height),
                segment_length: ceil_mm(layer.segment_length),
                length: ceil_mm(layer.length),
                max_radius: ceil_mm(layer.segment.r1),
            })
            .collect();

        Self { summary, rows }
    }

    /// Total stock length over all rows, in whole millimeters
    pub fn total_length(&self) -> i64 {
        self.rows.iter().map(|row| row.length).sum()
    }

    pub fn to_markdown(&self) -> String {
        let s = &self.summary;
        let mut md = String::new();

        md.push_str("## Summary\n\n");
        md.push_str("| No. layers | Center radius | Torus radius | Torus diameter | Mitre angle |\n");
        md.push_str("|------------|---------------|--------------|----------------|-------------|\n");
        md.push_str(&format!(
            "| {} | {}mm | {}mm | {}mm | {}° |\n\n",
            s.layer_count, s.ring_center_radius, s.torus_radius, s.torus_diameter, s.mitre_angle
        ));

        md.push_str("## Layers\n\n");
        md.push_str("| Layer | Width [mm] | Height [mm] | Segment length (long side) [mm] | Total length [mm] | Max radius [mm] |\n");
        md.push_str("|-------|------------|-------------|---------------------------------|-------------------|-----------------|\n");

        for row in &self.rows {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                row.index, row.width, row.height, row.segment_length, row.length, row.max_radius
            ));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::measure;

    #[test]
    fn test_report_rounds_up() {
        let params = TorusParameters::default();
        let m = measure(&params).unwrap();
        let report = Report::new(&params, &m);

        assert_eq!(report.summary.layer_count, 5);
        assert_eq!(report.summary.ring_center_radius, 125.0);
        assert_eq!(report.summary.torus_diameter, 150.0);
        assert_eq!(report.summary.mitre_angle, 22.5);

        let first = &report.rows[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.max_radius, 217);
        assert_eq!(first.height, 18);
        assert_eq!(report.rows[4].height, 3);
    }

    #[test]
    fn test_markdown_has_row_per_layer() {
        let params = TorusParameters::default();
        let m = measure(&params).unwrap();
        let md = Report::new(&params, &m).to_markdown();

        assert!(md.contains("| 5 | 125mm | 75mm | 150mm | 22.5° |"));
        let layer_rows = md
            .lines()
            .skip_while(|line| !line.starts_with("## Layers"))
            .filter(|line| line.starts_with("| ") && !line.starts_with("| Layer"))
            .count();
        assert_eq!(layer_rows, 5);
    }

    #[test]
    fn test_empty_report() {
        let params = TorusParameters::new(400.0, 150.0, 8, 0.0);
        let m = measure(&params).unwrap();
        let report = Report::new(&params, &m);
        assert_eq!(report.summary.layer_count, 0);
        assert!(report.rows.is_empty());
        assert_eq!(report.total_length(), 0);
    }
}
