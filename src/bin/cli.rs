// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Yuhe CLI

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use nalgebra::Point3;
use std::path::{Path, PathBuf};
use yuhe::geometry::decompose_matrix;
use yuhe::grid::{evaluate_grid, GridReport, MAX_POINTS_PER_AXIS};
use yuhe::{generate_function, logging, AxisAlignedBox, Language, OrientedBox, YuheConfig};

#[derive(Parser)]
#[command(name = "yuhe")]
#[command(about = "Oriented bounding boxes and point inclusion functions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to $YUHE_CONFIG, then ./yuhe.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Test whether a point lies inside the configured box
    Check {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },

    /// Generate an is_point_in_box function for the configured box
    Generate {
        /// Target language (cpp, python, rust)
        #[arg(short, long, default_value = "cpp")]
        lang: String,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Classify a regular grid of points against the configured box
    Grid {
        /// Lower grid bound on every axis
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,

        /// Upper grid bound on every axis
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,

        /// Points per axis
        #[arg(
            short,
            long,
            default_value = "10",
            value_parser = clap::value_parser!(u32).range(0..=MAX_POINTS_PER_AXIS as i64)
        )]
        points: u32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init {
        /// Output file
        #[arg(short, long, default_value = "yuhe.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the box transform, its decomposition and world bounds
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = YuheConfig::load(cli.config.as_deref())?;

    let level = match (&cli.log_level, cli.verbose) {
        (Some(level), _) => level.as_str(),
        (None, true) => "debug",
        (None, false) => config.log_level_or("warn"),
    };
    logging::init_logging(level)?;
    match &config.source {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file, using defaults"),
    }

    match &cli.command {
        Commands::Check { x, y, z } => {
            check_command(&config, Point3::new(*x, *y, *z), cli.verbose)?;
        }
        Commands::Generate { lang, output } => {
            generate_command(&config, lang, output.as_deref())?;
        }
        Commands::Grid {
            min,
            max,
            points,
            json,
        } => {
            grid_command(&config, *min, *max, *points as usize, *json)?;
        }
        Commands::Init { output, force } => {
            init_command(output, *force)?;
        }
        Commands::Inspect => {
            inspect_command(&config)?;
        }
    }

    Ok(())
}

fn check_command(config: &YuheConfig, point: Point3<f64>, verbose: bool) -> Result<()> {
    let obb = config.oriented_box()?;
    let inside = obb.contains(&point);

    let verdict = if inside {
        "inside".green().bold()
    } else {
        "outside".red().bold()
    };
    println!("({}, {}, {}) is {}", point.x, point.y, point.z, verdict);

    if verbose {
        let local = obb.to_local(&point);
        let half = obb.half_extents();
        println!(
            "  {} ({:.6}, {:.6}, {:.6})",
            "Local:".bright_black(),
            local.x,
            local.y,
            local.z
        );
        println!(
            "  {} ({:.6}, {:.6}, {:.6})",
            "Half extents:".bright_black(),
            half.x,
            half.y,
            half.z
        );
    }

    Ok(())
}

fn generate_command(config: &YuheConfig, lang: &str, output: Option<&Path>) -> Result<()> {
    let language: Language = lang.parse()?;
    let obb = config.oriented_box()?;
    let source = generate_function(&obb, language);

    match output {
        Some(path) => {
            std::fs::write(path, &source)?;
            tracing::info!(path = %path.display(), language = %language, "wrote generated function");
            println!("{} Generated {} function: {}", "Success:".green(), language, path.display());
        }
        None => print!("{}", source),
    }

    Ok(())
}

fn grid_command(
    config: &YuheConfig,
    min: Option<f64>,
    max: Option<f64>,
    points: usize,
    json: bool,
) -> Result<()> {
    let obb = config.oriented_box()?;
    let bounds = grid_bounds(&obb, min, max)?;
    let report = evaluate_grid(&obb, &bounds, points)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_grid_summary(&report);
    }

    Ok(())
}

/// Explicit bounds win per side; otherwise the box's world bounds grown by a
/// quarter of their largest dimension so the grid straddles every face.
fn grid_bounds(obb: &OrientedBox, min: Option<f64>, max: Option<f64>) -> Result<AxisAlignedBox> {
    let world = obb.bounds();
    let margin = world.size().max() * 0.25;
    let around = world.expanded(margin);

    let lower = min.map_or(around.min, |v| Point3::new(v, v, v));
    let upper = max.map_or(around.max, |v| Point3::new(v, v, v));
    let bounds = AxisAlignedBox::new(lower, upper);
    if bounds.is_empty() {
        bail!("Grid bounds are empty: min must not exceed max");
    }
    Ok(bounds)
}

fn print_grid_summary(report: &GridReport) {
    println!("{}", "═".repeat(60).bright_black());
    println!("{}", "Grid Summary".bold());
    println!("{}", "═".repeat(60).bright_black());
    println!(
        "  {} [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
        "Bounds:".bright_black(),
        report.bounds.min.x,
        report.bounds.min.y,
        report.bounds.min.z,
        report.bounds.max.x,
        report.bounds.max.y,
        report.bounds.max.z
    );
    println!(
        "  {} {}",
        "Points:".bright_black(),
        report.total.to_string().cyan()
    );
    println!(
        "  {} {} ({:.1}%)",
        "Inside:".bright_black(),
        report.inside.to_string().green(),
        report.inside_ratio() * 100.0
    );
    println!(
        "  {} {}",
        "Outside:".bright_black(),
        report.outside.to_string().red()
    );
    println!("{}", "═".repeat(60).bright_black());
}

fn init_command(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    YuheConfig::default().save(output)?;
    println!("{} Wrote default config: {}", "Success:".green(), output.display());
    Ok(())
}

fn inspect_command(config: &YuheConfig) -> Result<()> {
    let obb = config.oriented_box()?;
    let matrix = config.bbox.to_matrix();
    let parts = decompose_matrix(&matrix);
    let bounds = obb.bounds();

    println!("{}", "Transform (T * R * S):".bold());
    print!("{}", matrix);
    println!("{}", "Decomposition:".bold());
    println!(
        "  {} ({:.6}, {:.6}, {:.6})",
        "Translation:".bright_black(),
        parts.translation.x,
        parts.translation.y,
        parts.translation.z
    );
    println!(
        "  {} ({:.6}, {:.6}, {:.6})",
        "Rotation (deg):".bright_black(),
        parts.rotation.x,
        parts.rotation.y,
        parts.rotation.z
    );
    println!(
        "  {} ({:.6}, {:.6}, {:.6})",
        "Scale:".bright_black(),
        parts.scale.x,
        parts.scale.y,
        parts.scale.z
    );
    println!(
        "  {} {:.6}",
        "Padding:".bright_black(),
        config.bbox.padding
    );
    println!("{}", "World bounds:".bold());
    println!(
        "  {} ({:.6}, {:.6}, {:.6})",
        "Min:".bright_black(),
        bounds.min.x,
        bounds.min.y,
        bounds.min.z
    );
    println!(
        "  {} ({:.6}, {:.6}, {:.6})",
        "Max:".bright_black(),
        bounds.max.x,
        bounds.max.y,
        bounds.max.z
    );

    Ok(())
}
