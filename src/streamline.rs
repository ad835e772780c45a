//! Coloring arrows placed along streamlines.
//!
//! Streamlines are drawn as many short polyline segments. Every `period`-th
//! segment gets a direction arrow, and each arrow is colored by the flow
//! speed at its anchor: the speed field `sqrt(u² + v²)` is interpolated at
//! the anchor and passed straight through a colormap.

use serde::{Deserialize, Serialize};

use crate::colormaps::Colormap;
use crate::error::{LinintError, Result};
use crate::grid::{QueryPoints, SourceGrid};
use crate::interpolation::{linint2pts, InterpOptions, Missing};

/// A direction arrow anchored at `(x, y)` pointing along `(dx, dy)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

/// Place an arrow on every `period`-th streamline segment.
///
/// Each segment is a polyline of `[lon, lat]` vertices. The arrow sits on
/// the first vertex and points toward the second. Segments with fewer than
/// two vertices still count toward the stride but produce no arrow.
pub fn arrow_anchors(segments: &[Vec<[f64; 2]>], period: usize) -> Result<Vec<Arrow>> {
    if period == 0 {
        return Err(LinintError::invalid_parameter(
            "period",
            "arrow period must be at least 1",
        ));
    }

    Ok(segments
        .iter()
        .step_by(period)
        .filter_map(|segment| match segment.as_slice() {
            [start, next, ..] => Some(Arrow {
                x: start[0],
                y: start[1],
                dx: next[0] - start[0],
                dy: next[1] - start[1],
            }),
            _ => None,
        })
        .collect())
}

/// Speed `sqrt(u² + v²)` at every node of two component grids.
///
/// Both grids must share coordinates. A NaN in either component gives a
/// NaN speed.
pub fn speed(u: &SourceGrid<f64>, v: &SourceGrid<f64>) -> Result<SourceGrid<f64>> {
    if !u.same_coordinates(v) {
        return Err(LinintError::invalid_input(
            "u and v must share the same lat/lon coordinates",
        ));
    }

    let magnitude = ndarray::Zip::from(u.field())
        .and(v.field())
        .map_collect(|&a, &b| a.hypot(b));

    SourceGrid::new(u.lat().to_vec(), u.lon().to_vec(), magnitude)
}

/// Color each arrow by the interpolated flow speed at its anchor.
///
/// `range` is the `(min, max)` passed to the colormap; by default it is the
/// range of the sampled speeds. Anchors outside the grid, or next to missing
/// wind data, get `None`.
pub fn color_arrows(
    u: &SourceGrid<f64>,
    v: &SourceGrid<f64>,
    arrows: &[Arrow],
    cyclic: bool,
    colormap: &dyn Colormap,
    range: Option<(f64, f64)>,
) -> Result<Vec<Option<[u8; 4]>>> {
    let speed = speed(u, v)?;
    let points = QueryPoints::new(
        arrows.iter().map(|a| a.x).collect(),
        arrows.iter().map(|a| a.y).collect(),
    )?;

    let options = InterpOptions::default()
        .with_cyclic(cyclic)
        .with_missing(Missing::Nan);
    let magnitudes = linint2pts(&speed, &points, &options)?;

    let (min, max) = range.unwrap_or_else(|| finite_range(&magnitudes));

    Ok(magnitudes
        .into_iter()
        .map(|m| (!m.is_nan()).then(|| colormap.map(m, min, max)))
        .collect())
}

fn finite_range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
