// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Segtorus CLI

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use segtorus::cli::{init_logging, Reporter};
use segtorus::{io, CalculatorConfig, Report, TorusParameters};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "segtorus")]
#[command(about = "Segtorus - cut lists for segmented torus rings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ./segtorus.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    dimensions: Dimensions,
}

/// Inputs overriding the configured values
#[derive(Args, Clone, Default)]
struct Dimensions {
    /// Inner diameter of the ring [mm]
    #[arg(long, global = true)]
    inner: Option<f64>,

    /// Outer diameter of the ring [mm]
    #[arg(long, global = true)]
    outer: Option<f64>,

    /// Segments per layer
    #[arg(short = 'n', long, global = true)]
    segments: Option<u32>,

    /// Material thickness [mm]
    #[arg(short, long, global = true)]
    thickness: Option<f64>,

    /// Saw kerf [mm]
    #[arg(short, long, global = true)]
    kerf: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary and per-layer cut list
    Measure {
        /// Print Markdown tables instead of colored output
        #[arg(long)]
        markdown: bool,
    },

    /// Write an SVG schematic of all layers to stdout
    Schematic,

    /// Print the measurements as JSON
    Json {
        /// Print the rounded cut list instead of raw measurements
        #[arg(long)]
        report: bool,
    },

    /// Print the effective configuration as TOML
    Config,

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = effective_config(&cli)?;
    debug!(?config, "effective configuration");

    match &cli.command {
        Some(Commands::Measure { markdown }) => measure_command(&config, *markdown)?,
        None => measure_command(&config, false)?,
        Some(Commands::Schematic) => schematic_command(&config)?,
        Some(Commands::Json { report }) => json_command(&config, *report)?,
        Some(Commands::Config) => print!("{}", config.to_toml()?),
        Some(Commands::Version) => {
            println!("Segtorus v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Config file (or defaults and environment), then command line flags
fn effective_config(cli: &Cli) -> Result<CalculatorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = CalculatorConfig::from_file(path)?;
            config.apply_env_overrides();
            config
        }
        None => CalculatorConfig::load()?,
    };

    let dims = &cli.dimensions;
    if let Some(inner) = dims.inner {
        config.inner_diameter = inner;
    }
    if let Some(outer) = dims.outer {
        config.outer_diameter = outer;
    }
    if let Some(segments) = dims.segments {
        config.num_segments = segments;
    }
    if let Some(thickness) = dims.thickness {
        config.material_thickness = thickness;
    }
    if let Some(kerf) = dims.kerf {
        config.kerf = kerf;
    }

    Ok(config)
}

/// Calculator inputs or exit naming the offending setting
fn parameters_or_exit(config: &CalculatorConfig) -> TorusParameters {
    match config.to_parameters() {
        Ok(params) => params,
        Err(e) => {
            Reporter::report_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Measure or exit with a user-facing message
fn measure_or_exit(params: &TorusParameters) -> segtorus::Measurements {
    match segtorus::measure(params) {
        Ok(measurements) => measurements,
        Err(e) => {
            Reporter::report_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn measure_command(config: &CalculatorConfig, markdown: bool) -> Result<()> {
    let params = parameters_or_exit(config);

    let start = std::time::Instant::now();
    let measurements = measure_or_exit(&params);
    let duration = start.elapsed();

    let report = Report::new(&params, &measurements);
    if markdown {
        print!("{}", report.to_markdown());
    } else {
        Reporter::report_measurements(&params, &report, duration);
    }

    Ok(())
}

fn schematic_command(config: &CalculatorConfig) -> Result<()> {
    let params = parameters_or_exit(config);
    let measurements = measure_or_exit(&params);

    println!("{}", io::render_schematic(&params, &measurements)?);
    Ok(())
}

fn json_command(config: &CalculatorConfig, report: bool) -> Result<()> {
    let params = parameters_or_exit(config);
    let measurements = measure_or_exit(&params);

    let json = if report {
        io::to_json(&Report::new(&params, &measurements))?
    } else {
        io::to_json(&measurements)?
    };
    println!("{}", json);

    Ok(())
}
