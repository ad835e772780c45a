//! linint - interpolate a gridded NetCDF field at scattered points
//!
//! Loads a 2-D slice of a NetCDF variable, evaluates it at query points read
//! from a JSON file or drawn at random inside the grid, and writes the
//! results as JSON.

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;
use tracing::{error, info};

use linint::data_loader::load_field;
use linint::interpolation::{linint2pts, linint2pts_par, InterpOptions};
use linint::{
    init_tracing, log_error, log_operation_end, log_operation_start, log_timed_operation,
    Config, InterpolationReport, QueryPoints,
};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, netcdf_path) = Config::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.log_level);
    info!("Starting linint v{}", env!("CARGO_PKG_VERSION"));

    if let Some(workers) = config.interp.workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()
            .with_context(|| format!("Failed to start thread pool with {} workers", workers))?;
        info!("Using {} worker threads", workers);
    }

    info!("Loading NetCDF file: {:?}", netcdf_path);
    let field = log_timed_operation("load_field", || load_field(&netcdf_path, &config.data))
        .map_err(|e| {
            log_error(&e, "load_field");
            e
        })
        .with_context(|| format!("Failed to load {}", netcdf_path.display()))?;

    let grid = if config.interp.add_cyclic {
        field
            .grid
            .with_cyclic_longitude()
            .context("Failed to add cyclic longitude")?
    } else {
        field.grid
    };

    let points = match (&config.query.points_file, config.query.random_count) {
        (Some(path), _) => QueryPoints::from_json_file(path)
            .with_context(|| format!("Failed to read query points from {}", path.display()))?,
        (None, Some(n)) => {
            QueryPoints::uniform_random(n, grid.lon_range(), grid.lat_range(), config.query.seed)
        }
        (None, None) => anyhow::bail!("No query points configured"),
    };

    let options = InterpOptions::default()
        .with_cyclic(config.interp.cyclic)
        .with_missing(field.missing);

    let details = format!("{} points", points.len());
    log_operation_start("interpolate", Some(&details));
    let start = Instant::now();
    let result = if points.len() >= config.interp.parallel_threshold {
        linint2pts_par(&grid, &points, &options)
    } else {
        linint2pts(&grid, &points, &options)
    };
    let values = result.map_err(|e| {
        error!("Interpolation failed: {}", e);
        e
    })?;

    let report = InterpolationReport::new(
        &field.variable,
        field.units.as_deref(),
        config.interp.cyclic,
        &points,
        &values,
        field.missing,
    )?;
    log_operation_end("interpolate", start, report.count, report.missing_count);

    match &config.query.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            report.write_json(&mut writer)?;
            writer.flush()?;
            info!("Wrote results to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            report.write_json(&mut writer)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}
