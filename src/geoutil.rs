//! Geographic utility functions for longitude handling.
//!
//! This module provides utilities for working with periodic longitudes,
//! including the cyclic-column preprocessing step used before plotting or
//! interpolating global fields across the dateline.

use ndarray::{concatenate, s, Array2, ArrayView2, Axis};

use crate::error::{LinintError, Result};

/// Degrees in one full turn of longitude
pub const FULL_CIRCLE: f64 = 360.0;

/// Normalize a longitude value to the range [-180, 180)
pub fn normalize_longitude(lon: f64) -> f64 {
    wrap_longitude(lon, -180.0)
}

/// Wrap a longitude into the half-open turn `[origin, origin + 360)`
pub fn wrap_longitude(lon: f64, origin: f64) -> f64 {
    let wrapped = origin + (lon - origin).rem_euclid(FULL_CIRCLE);

    // rem_euclid can round up to a full turn for tiny negative offsets
    if wrapped >= origin + FULL_CIRCLE {
        origin
    } else {
        wrapped
    }
}

/// Append a copy of the first longitude column at `lon[0] + 360`.
///
/// This closes the seam of a global field so that ordinary, non-periodic
/// interpolation covers the whole circle.
pub fn add_cyclic_longitude<T: Clone>(
    field: ArrayView2<'_, T>,
    lon: &[f64],
) -> Result<(Array2<T>, Vec<f64>)> {
    let first = *lon
        .first()
        .ok_or_else(|| LinintError::invalid_input("lon must not be empty"))?;
    let last = lon[lon.len() - 1];

    if field.ncols() != lon.len() {
        return Err(LinintError::invalid_input(format!(
            "field has {} columns but lon has {} values",
            field.ncols(),
            lon.len()
        )));
    }

    if last - first >= FULL_CIRCLE {
        return Err(LinintError::invalid_input(format!(
            "lon already spans a full circle ({} to {})",
            first, last
        )));
    }

    let extended = concatenate(Axis(1), &[field.view(), field.slice(s![.., ..1])])?;

    let mut extended_lon = Vec::with_capacity(lon.len() + 1);
    extended_lon.extend_from_slice(lon);
    extended_lon.push(first + FULL_CIRCLE);

    Ok((extended, extended_lon))
}
