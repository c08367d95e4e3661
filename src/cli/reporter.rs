// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! CLI output reporter with colored formatting

use crate::geometry::TorusParameters;
use crate::report::Report;
use colored::*;
use std::time::Duration;

/// Column headers of the per-layer table
const LAYER_HEADERS: [&str; 6] = [
    "Layer",
    "Width",
    "Height",
    "Segment",
    "Total length",
    "Max radius",
];

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Print the summary and the per-layer cut list
    pub fn report_measurements(params: &TorusParameters, report: &Report, duration: Duration) {
        let summary = &report.summary;

        println!("\n{}", "━".repeat(80).bright_black());
        println!("{}", "Segmented torus".bold());
        println!("{}", "━".repeat(80).bright_black());

        println!(
            "  {} {}",
            "Ring diameter:".bright_black(),
            format!("{}mm", params.ring_diameter).cyan()
        );
        println!(
            "  {} {}",
            "Segments:".bright_black(),
            params.num_segments.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Material:".bright_black(),
            format!("{}mm (kerf {}mm)", params.material_thickness, params.kerf).cyan()
        );

        println!("\n{}", "Summary:".bold());
        println!(
            "  {} {}",
            "No. layers:".bright_black(),
            summary.layer_count.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Center radius:".bright_black(),
            format!("{}mm", summary.ring_center_radius).cyan()
        );
        println!(
            "  {} {}",
            "Torus radius:".bright_black(),
            format!("{}mm", summary.torus_radius).cyan()
        );
        println!(
            "  {} {}",
            "Torus diameter:".bright_black(),
            format!("{}mm", summary.torus_diameter).cyan()
        );
        println!(
            "  {} {}",
            "Mitre angle:".bright_black(),
            format!("{}°", summary.mitre_angle).yellow()
        );

        if report.rows.is_empty() {
            Self::report_warning("Material thickness is zero, no layers to cut");
        } else {
            println!("\n{}", "Layers [mm]:".bold());
            println!("{}", Self::table_header().bright_black());
            for row in &report.rows {
                println!(
                    "  {:>5}  {:>8}  {:>8}  {:>8}  {:>12}  {:>10}",
                    row.index.to_string().bold(),
                    row.width,
                    row.height,
                    row.segment_length,
                    row.length.to_string().cyan(),
                    row.max_radius
                );
            }
            println!(
                "\n  {} {}",
                "Stock for one half:".bright_black(),
                format!("{}mm", report.total_length()).yellow()
            );
        }

        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    fn table_header() -> String {
        format!(
            "  {:>5}  {:>8}  {:>8}  {:>8}  {:>12}  {:>10}",
            LAYER_HEADERS[0],
            LAYER_HEADERS[1],
            LAYER_HEADERS[2],
            LAYER_HEADERS[3],
            LAYER_HEADERS[4],
            LAYER_HEADERS[5]
        )
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
