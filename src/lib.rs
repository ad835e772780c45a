//! # linint
//!
//! Bilinear interpolation from a rectilinear latitude/longitude grid onto
//! arbitrary scattered points.
//!
//! Given a 2-D field sampled on a (possibly non-uniform) lat/lon grid, this
//! library evaluates the field at a list of `(lon, lat)` locations. Points
//! outside the grid, or in cells touching missing data, get a missing-value
//! marker instead of an extrapolated or smeared value. Longitude can be
//! treated as periodic so that queries across the seam wrap around.
//!
//! ## Key Features
//!
//! - **Scattered-point interpolation**: [`linint2pts`] and its rayon-parallel
//!   twin [`linint2pts_par`], over real or complex fields
//! - **Cyclic longitude**: wraparound interpolation between the last and
//!   first columns, or an explicit cyclic column via [`geoutil`]
//! - **NetCDF loading**: 2-D slices of CF-style variables with fill values
//! - **Colormaps**: continuous and boundary-normalized palettes, used to
//!   color streamline arrows by interpolated wind speed

pub mod colormaps;
pub mod config;
#[cfg(feature = "netcdf")]
pub mod data_loader;
pub mod error;
pub mod geoutil;
pub mod grid;
pub mod interpolation;
pub mod logging;
pub mod report;
pub mod streamline;

pub use config::Config;
pub use error::{LinintError, Result};
pub use grid::{GridView, Order, QueryPoints, SourceGrid};
pub use interpolation::{interpolate, linint2pts, linint2pts_par, InterpOptions, Missing};
pub use logging::{
    generate_run_id, init_tracing, log_error, log_field_load_stats, log_operation_end,
    log_operation_start, log_timed_operation,
};
pub use report::{InterpolationReport, PointValue};
