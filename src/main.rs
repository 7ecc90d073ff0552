//! fourier-params: CLI for coordinate grids and Fourier bandwidth estimates

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fourier_params::report::{BandwidthReport, GridReport};
use fourier_params::{coordinate_grid_with, estimate_bandwidth, params, GridParameters, LengthUnit, OpticalParameters, Precision};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fourier-params")]
#[command(about = "Coordinate grids and Fourier bandwidth estimates for metasurface simulations")]
#[command(version)]
struct Args {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the spatial coordinate grid
    Grid {
        /// Input JSON file with pixel_number and pixel_size_m
        #[arg(short, long)]
        input: PathBuf,

        /// Override the precision from the input file
        #[arg(long, value_enum)]
        precision: Option<Precision>,

        /// Force radially symmetric layout
        #[arg(long)]
        radial: bool,

        /// Include both full matrices (JSON only)
        #[arg(long)]
        full: bool,

        /// Length unit for text output (m, mm, um, nm)
        #[arg(long, default_value = "um")]
        unit: String,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Estimate the Fourier bandwidth from the lens parameters
    Bandwidth {
        /// Input JSON file with wavelength_um, sensor_distance_um and ms_length_um
        #[arg(short, long)]
        input: PathBuf,

        /// Report bandwidths in cycles per this unit (m, mm, um, nm)
        #[arg(long, default_value = "um")]
        unit: String,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            info!("Wrote report: {:?}", path);
        }
        None => println!("{}", contents),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Grid {
            input,
            precision,
            radial,
            full,
            unit,
            format,
            output,
        } => {
            let mut grid_params: GridParameters = params::load(&input)
                .with_context(|| format!("Failed to load grid parameters: {:?}", input))?;
            if let Some(precision) = precision {
                grid_params.precision = precision;
            }
            grid_params.radial_symmetry |= radial;
            let unit: LengthUnit = unit.parse()?;

            let grid = coordinate_grid_with(&grid_params).context("Grid construction failed")?;
            let (rows, cols) = grid.shape();
            info!(rows, cols, precision = %grid.precision(), "Built coordinate grid");

            let report = GridReport::new(&grid, grid_params.radial_symmetry, full);
            let contents = match format {
                Format::Json => serde_json::to_string_pretty(&report)?,
                Format::Text => report.to_text(unit)?,
            };
            write_output(output.as_deref(), &contents)
        }
        Command::Bandwidth {
            input,
            unit,
            format,
            output,
        } => {
            let optical: OpticalParameters = params::load(&input)
                .with_context(|| format!("Failed to load optical parameters: {:?}", input))?;
            let unit: LengthUnit = unit.parse()?;

            let bandwidth = estimate_bandwidth(&optical).context("Bandwidth estimation failed")?;
            let (bx, by) = bandwidth.xy();
            info!(x = bx, y = by, "Estimated bandwidth (cycles/µm)");

            let report = BandwidthReport::new(&optical, &bandwidth, unit);
            let contents = match format {
                Format::Json => serde_json::to_string_pretty(&report)?,
                Format::Text => report.to_text()?,
            };
            write_output(output.as_deref(), &contents)
        }
    }
}
