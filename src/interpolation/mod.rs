//! Interpolation from a rectilinear grid onto scattered points.
//!
//! [`linint2pts`] evaluates a 2-D field, sampled on a latitude/longitude
//! grid, at an arbitrary list of `(lon, lat)` locations using bilinear
//! interpolation. Longitude may optionally be treated as periodic.
//!
//! ```rust
//! use linint::interpolation::{linint2pts, InterpOptions};
//! use linint::{QueryPoints, SourceGrid};
//!
//! let grid = SourceGrid::from_shape_vec(
//!     vec![-10.0, 0.0, 10.0],
//!     vec![0.0, 10.0, 20.0],
//!     vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
//! )
//! .unwrap();
//! let points = QueryPoints::new(vec![5.0], vec![0.0]).unwrap();
//!
//! let values = linint2pts(&grid, &points, &InterpOptions::default()).unwrap();
//! assert_eq!(values, vec![4.5]);
//! ```

pub mod bilinear;
pub mod common;
pub mod value;

use ndarray::ArrayView2;
use tracing::debug;

pub use bilinear::BilinearInterpolator;
pub use value::{FieldValue, Missing};

use crate::error::{LinintError, Result};
use crate::grid::{GridView, QueryPoints, SourceGrid};

/// Options controlling scattered-point interpolation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpOptions<T> {
    /// Treat longitude as periodic with a 360 degree period
    pub cyclic: bool,
    /// Marker for holes in the field and for missing results
    pub missing: Missing<T>,
}

impl<T> Default for InterpOptions<T> {
    fn default() -> Self {
        Self {
            cyclic: false,
            missing: Missing::Nan,
        }
    }
}

impl<T> InterpOptions<T> {
    pub fn with_cyclic(mut self, cyclic: bool) -> Self {
        self.cyclic = cyclic;
        self
    }

    pub fn with_missing(mut self, missing: Missing<T>) -> Self {
        self.missing = missing;
        self
    }
}

/// Interpolate a field given as raw arrays.
///
/// `field` is shaped `(lat.len(), lon.len())`. Inputs are validated once,
/// up front; a malformed input fails the whole call. Query points outside
/// the grid, or in cells touching a missing value, get `missing.value()`.
pub fn interpolate<'a, T: FieldValue>(
    lat: &'a [f64],
    lon: &'a [f64],
    field: ArrayView2<'a, T>,
    qlon: &[f64],
    qlat: &[f64],
    cyclic: bool,
    missing: Missing<T>,
) -> Result<Vec<T>> {
    let grid = GridView::new(lat, lon, field)?;
    check_query_lengths(qlon, qlat)?;
    let interp = BilinearInterpolator::new(grid, cyclic, missing)?;
    Ok(interp.evaluate(qlon, qlat))
}

/// Interpolate `grid` at every query point, in order
pub fn linint2pts<T: FieldValue>(
    grid: &SourceGrid<T>,
    points: &QueryPoints,
    options: &InterpOptions<T>,
) -> Result<Vec<T>> {
    let interp = BilinearInterpolator::new(grid.view(), options.cyclic, options.missing)?;
    let values = interp.evaluate(points.lon(), points.lat());
    log_result_summary(&values, options);
    Ok(values)
}

/// Parallel [`linint2pts`]; results are identical and in the same order
pub fn linint2pts_par<T: FieldValue>(
    grid: &SourceGrid<T>,
    points: &QueryPoints,
    options: &InterpOptions<T>,
) -> Result<Vec<T>> {
    let interp = BilinearInterpolator::new(grid.view(), options.cyclic, options.missing)?;
    let values = interp.evaluate_par(points.lon(), points.lat());
    log_result_summary(&values, options);
    Ok(values)
}

fn check_query_lengths(qlon: &[f64], qlat: &[f64]) -> Result<()> {
    if qlon.len() != qlat.len() {
        return Err(LinintError::invalid_input(format!(
            "qlon has {} values but qlat has {}",
            qlon.len(),
            qlat.len()
        )));
    }
    Ok(())
}

fn log_result_summary<T: FieldValue>(values: &[T], options: &InterpOptions<T>) {
    let missing = values
        .iter()
        .filter(|&&v| options.missing.is_missing(v))
        .count();
    debug!(
        points = values.len(),
        missing = missing,
        cyclic = options.cyclic,
        "Interpolated scattered points"
    );
}
