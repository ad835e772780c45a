//! Common utilities for interpolation algorithms.
//!
//! Coordinate bracketing: locating the pair of adjacent grid coordinates
//! that surround a query coordinate, plus the fractional offset between them.

use crate::geoutil::{wrap_longitude, FULL_CIRCLE};

/// The grid interval surrounding one query coordinate.
///
/// When the coordinate sits exactly on a grid value the bracket collapses
/// to that single index (`lo == hi`, `t == 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Index of the first bracketing coordinate
    pub lo: usize,
    /// Index of the second bracketing coordinate
    pub hi: usize,
    /// Fractional offset from `lo` towards `hi`, in `[0, 1)`
    pub t: f64,
}

impl Bracket {
    /// A bracket collapsed onto a single grid index
    pub fn node(index: usize) -> Self {
        Self {
            lo: index,
            hi: index,
            t: 0.0,
        }
    }

    /// Whether the bracket collapsed onto a single grid index
    pub fn is_node(&self) -> bool {
        self.lo == self.hi
    }

    /// The indices that contribute to the interpolation, with their weights
    pub fn taps(&self) -> impl Iterator<Item = (usize, f64)> {
        let upper = (!self.is_node()).then_some((self.hi, self.t));
        std::iter::once((self.lo, 1.0 - self.t)).chain(upper)
    }
}

/// Bracket `x` in strictly ascending coordinates.
///
/// Returns `None` when `x` is outside `[coords[0], coords[n-1]]` or is NaN.
pub fn bracket_ascending(coords: &[f64], x: f64) -> Option<Bracket> {
    let last = *coords.last()?;
    if !(x >= coords[0] && x <= last) {
        return None;
    }

    // First index whose coordinate exceeds x; at least 1 since coords[0] <= x
    let lo = coords.partition_point(|&c| c <= x) - 1;
    if coords[lo] == x {
        return Some(Bracket::node(lo));
    }

    let hi = lo + 1;
    Some(Bracket {
        lo,
        hi,
        t: (x - coords[lo]) / (coords[hi] - coords[lo]),
    })
}

/// Bracket `x` in strictly descending coordinates.
pub fn bracket_descending(coords: &[f64], x: f64) -> Option<Bracket> {
    let last = *coords.last()?;
    if !(x <= coords[0] && x >= last) {
        return None;
    }

    let lo = coords.partition_point(|&c| c >= x) - 1;
    if coords[lo] == x {
        return Some(Bracket::node(lo));
    }

    let hi = lo + 1;
    Some(Bracket {
        lo,
        hi,
        t: (x - coords[lo]) / (coords[hi] - coords[lo]),
    })
}

/// Bracket a longitude on a periodic axis.
///
/// A longitude already inside `[lon[0], lon[N-1]]` is bracketed as is, so
/// node queries stay exact. Anything else is wrapped into
/// `[lon[0], lon[0] + 360)`; past the last column it falls in the seam cell
/// joining the last column back to the first, whose upper edge is
/// `lon[0] + 360`.
pub fn bracket_cyclic(lon: &[f64], x: f64) -> Option<Bracket> {
    if !x.is_finite() {
        return None;
    }
    let first = *lon.first()?;
    let last = *lon.last()?;
    if x >= first && x <= last {
        return bracket_ascending(lon, x);
    }

    let wrapped = wrap_longitude(x, first);
    if wrapped <= last {
        return bracket_ascending(lon, wrapped);
    }

    Some(Bracket {
        lo: lon.len() - 1,
        hi: 0,
        t: (wrapped - last) / (first + FULL_CIRCLE - last),
    })
}
