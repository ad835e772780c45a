//! Bilinear interpolation.
//!
//! This method performs linear interpolation in two dimensions using
//! the four grid points surrounding each query location. Each query point
//! is evaluated independently of every other.

use rayon::prelude::*;

use super::common::{bracket_ascending, bracket_cyclic, bracket_descending, Bracket};
use super::value::{FieldValue, Missing};
use crate::error::{LinintError, Result};
use crate::geoutil::FULL_CIRCLE;
use crate::grid::{GridView, Order};

/// Bilinear evaluator over one source grid
#[derive(Debug, Clone)]
pub struct BilinearInterpolator<'a, T> {
    grid: GridView<'a, T>,
    cyclic: bool,
    missing: Missing<T>,
}

impl<'a, T: FieldValue> BilinearInterpolator<'a, T> {
    /// Create an evaluator.
    ///
    /// A cyclic longitude axis may not span more than one full turn.
    pub fn new(grid: GridView<'a, T>, cyclic: bool, missing: Missing<T>) -> Result<Self> {
        if cyclic && grid.lon_span() > FULL_CIRCLE {
            return Err(LinintError::invalid_input(format!(
                "cyclic lon spans {} degrees, more than a full circle",
                grid.lon_span()
            )));
        }

        Ok(Self {
            grid,
            cyclic,
            missing,
        })
    }

    fn row_bracket(&self, y: f64) -> Option<Bracket> {
        match self.grid.lat_order() {
            Order::Ascending => bracket_ascending(self.grid.lat(), y),
            Order::Descending => bracket_descending(self.grid.lat(), y),
        }
    }

    fn column_bracket(&self, x: f64) -> Option<Bracket> {
        if self.cyclic {
            bracket_cyclic(self.grid.lon(), x)
        } else {
            bracket_ascending(self.grid.lon(), x)
        }
    }

    /// Interpolate the field at longitude `x`, latitude `y`.
    ///
    /// Out-of-range locations and cells touching a missing value yield the
    /// missing-value marker.
    pub fn at(&self, x: f64, y: f64) -> T {
        let (Some(row), Some(col)) = (self.row_bracket(y), self.column_bracket(x)) else {
            return self.missing.value();
        };

        let mut acc = T::zero();
        for (j, wy) in row.taps() {
            for (i, wx) in col.taps() {
                let corner = self.grid.value(j, i);
                if self.missing.is_missing(corner) {
                    return self.missing.value();
                }
                acc = acc + corner.scale(wx * wy);
            }
        }
        acc
    }

    /// Evaluate every `(qlon[k], qlat[k])` in order
    pub fn evaluate(&self, qlon: &[f64], qlat: &[f64]) -> Vec<T> {
        qlon.iter()
            .zip(qlat)
            .map(|(&x, &y)| self.at(x, y))
            .collect()
    }

    /// Like [`evaluate`](Self::evaluate), spread across the rayon pool
    pub fn evaluate_par(&self, qlon: &[f64], qlat: &[f64]) -> Vec<T> {
        qlon.par_iter()
            .zip(qlat.par_iter())
            .map(|(&x, &y)| self.at(x, y))
            .collect()
    }
}
