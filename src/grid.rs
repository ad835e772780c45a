//! Source grid and query point containers.
//!
//! A source grid is the `(lat, lon, field)` triple sampled on a rectilinear
//! latitude/longitude grid. All shape and ordering invariants are checked
//! once, at construction, so interpolation never has to re-validate them.

use ndarray::{Array2, ArrayView2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LinintError, Result};
use crate::geoutil::add_cyclic_longitude;

/// Direction of a strictly monotonic coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Ascending,
    Descending,
}

/// Check that a coordinate axis is finite, has at least two values and is
/// strictly monotonic. Returns its direction.
pub fn check_coordinate(name: &str, coords: &[f64]) -> Result<Order> {
    if coords.len() < 2 {
        return Err(LinintError::invalid_input(format!(
            "{} must have at least 2 values, got {}",
            name,
            coords.len()
        )));
    }

    if let Some(bad) = coords.iter().position(|c| !c.is_finite()) {
        return Err(LinintError::invalid_input(format!(
            "{}[{}] is not finite",
            name, bad
        )));
    }

    let order = if coords[1] > coords[0] {
        Order::Ascending
    } else {
        Order::Descending
    };

    for (i, pair) in coords.windows(2).enumerate() {
        let ok = match order {
            Order::Ascending => pair[1] > pair[0],
            Order::Descending => pair[1] < pair[0],
        };
        if !ok {
            return Err(LinintError::invalid_input(format!(
                "{} is not strictly monotonic at index {} ({} then {})",
                name,
                i + 1,
                pair[0],
                pair[1]
            )));
        }
    }

    Ok(order)
}

/// A validated, borrowed view of a source grid
#[derive(Debug, Clone)]
pub struct GridView<'a, T> {
    lat: &'a [f64],
    lon: &'a [f64],
    field: ArrayView2<'a, T>,
    lat_order: Order,
}

impl<'a, T> GridView<'a, T> {
    /// Validate and wrap borrowed grid data.
    ///
    /// `lat` may run in either direction; `lon` must be ascending; `field`
    /// must be shaped `(lat.len(), lon.len())`.
    pub fn new(lat: &'a [f64], lon: &'a [f64], field: ArrayView2<'a, T>) -> Result<Self> {
        let lat_order = check_coordinate("lat", lat)?;
        if check_coordinate("lon", lon)? != Order::Ascending {
            return Err(LinintError::invalid_input(
                "lon must be strictly ascending",
            ));
        }

        if field.dim() != (lat.len(), lon.len()) {
            return Err(LinintError::invalid_input(format!(
                "field shape {:?} does not match (lat, lon) = ({}, {})",
                field.dim(),
                lat.len(),
                lon.len()
            )));
        }

        Ok(Self {
            lat,
            lon,
            field,
            lat_order,
        })
    }

    pub fn lat(&self) -> &'a [f64] {
        self.lat
    }

    pub fn lon(&self) -> &'a [f64] {
        self.lon
    }

    pub fn lat_order(&self) -> Order {
        self.lat_order
    }

    /// Longitude distance from the first to the last column
    pub fn lon_span(&self) -> f64 {
        self.lon[self.lon.len() - 1] - self.lon[0]
    }

    /// Field value at row `j` (latitude) and column `i` (longitude)
    pub fn value(&self, j: usize, i: usize) -> T
    where
        T: Copy,
    {
        self.field[[j, i]]
    }
}

/// An owned, validated source grid
#[derive(Debug, Clone, PartialEq)]
pub struct SourceGrid<T> {
    lat: Vec<f64>,
    lon: Vec<f64>,
    field: Array2<T>,
    lat_order: Order,
}

impl<T> SourceGrid<T> {
    /// Create a grid, validating coordinates and field shape
    pub fn new(lat: Vec<f64>, lon: Vec<f64>, field: Array2<T>) -> Result<Self> {
        let lat_order = GridView::new(&lat, &lon, field.view())?.lat_order;
        Ok(Self {
            lat,
            lon,
            field,
            lat_order,
        })
    }

    /// Create a grid from row-major values, `values[j * lon.len() + i]`
    pub fn from_shape_vec(lat: Vec<f64>, lon: Vec<f64>, values: Vec<T>) -> Result<Self> {
        let expected = lat.len() * lon.len();
        if values.len() != expected {
            return Err(LinintError::invalid_input(format!(
                "field has {} values but (lat, lon) = ({}, {}) needs {}",
                values.len(),
                lat.len(),
                lon.len(),
                expected
            )));
        }
        let field = Array2::from_shape_vec((lat.len(), lon.len()), values)?;
        Self::new(lat, lon, field)
    }

    /// Borrow the grid without re-validating it
    pub fn view(&self) -> GridView<'_, T> {
        GridView {
            lat: &self.lat,
            lon: &self.lon,
            field: self.field.view(),
            lat_order: self.lat_order,
        }
    }

    pub fn lat(&self) -> &[f64] {
        &self.lat
    }

    pub fn lon(&self) -> &[f64] {
        &self.lon
    }

    pub fn field(&self) -> &Array2<T> {
        &self.field
    }

    pub fn lat_order(&self) -> Order {
        self.lat_order
    }

    /// `(rows, columns)` = `(lat.len(), lon.len())`
    pub fn shape(&self) -> (usize, usize) {
        self.field.dim()
    }

    /// `(min, max)` latitude
    pub fn lat_range(&self) -> (f64, f64) {
        let (a, b) = (self.lat[0], self.lat[self.lat.len() - 1]);
        (a.min(b), a.max(b))
    }

    /// `(min, max)` longitude
    pub fn lon_range(&self) -> (f64, f64) {
        (self.lon[0], self.lon[self.lon.len() - 1])
    }

    /// Whether two grids share exactly the same coordinates
    pub fn same_coordinates<U>(&self, other: &SourceGrid<U>) -> bool {
        self.lat == other.lat && self.lon == other.lon
    }

    /// Apply `f` to every field value, keeping the coordinates
    pub fn map<U, F>(&self, f: F) -> SourceGrid<U>
    where
        F: FnMut(&T) -> U,
    {
        SourceGrid {
            lat: self.lat.clone(),
            lon: self.lon.clone(),
            field: self.field.map(f),
            lat_order: self.lat_order,
        }
    }

    /// Copy of this grid with the first column repeated at `lon[0] + 360`
    pub fn with_cyclic_longitude(&self) -> Result<Self>
    where
        T: Clone,
    {
        let (field, lon) = add_cyclic_longitude(self.field.view(), &self.lon)?;
        Self::new(self.lat.clone(), lon, field)
    }

    /// Split the grid back into `(lat, lon, field)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Array2<T>) {
        (self.lat, self.lon, self.field)
    }
}

/// Scattered (lon, lat) locations to evaluate a field at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPoints {
    lon: Vec<f64>,
    lat: Vec<f64>,
}

/// On-disk layout of a query point file: `{"lon": [...], "lat": [...]}`
#[derive(Debug, Deserialize)]
struct QueryPointsFile {
    lon: Vec<f64>,
    lat: Vec<f64>,
}

impl QueryPoints {
    /// Pair up longitudes and latitudes, which must have equal length
    pub fn new(lon: Vec<f64>, lat: Vec<f64>) -> Result<Self> {
        if lon.len() != lat.len() {
            return Err(LinintError::invalid_input(format!(
                "qlon has {} values but qlat has {}",
                lon.len(),
                lat.len()
            )));
        }
        Ok(Self { lon, lat })
    }

    /// Draw `n` points uniformly inside the given longitude and latitude
    /// ranges. A seed makes the draw reproducible.
    pub fn uniform_random(
        n: usize,
        lon_range: (f64, f64),
        lat_range: (f64, f64),
        seed: Option<u64>,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut lon = Vec::with_capacity(n);
        let mut lat = Vec::with_capacity(n);
        for _ in 0..n {
            lat.push(rng.gen_range(lat_range.0..=lat_range.1));
            lon.push(rng.gen_range(lon_range.0..=lon_range.1));
        }

        Self { lon, lat }
    }

    /// Parse query points from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: QueryPointsFile = serde_json::from_str(json)?;
        Self::new(raw.lon, raw.lat)
    }

    /// Load query points from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn lon(&self) -> &[f64] {
        &self.lon
    }

    pub fn lat(&self) -> &[f64] {
        &self.lat
    }

    pub fn len(&self) -> usize {
        self.lon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lon.is_empty()
    }

    /// Iterate over `(lon, lat)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lon.iter().copied().zip(self.lat.iter().copied())
    }
}
