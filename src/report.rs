//! JSON output for interpolated query points.

use serde::Serialize;
use std::io::Write;

use crate::error::{LinintError, Result};
use crate::grid::QueryPoints;
use crate::interpolation::Missing;

/// One interpolated location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointValue {
    pub lon: f64,
    pub lat: f64,
    /// `None` where the result is missing
    pub value: Option<f64>,
}

/// Results for a whole batch of query points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationReport {
    pub variable: String,
    pub units: Option<String>,
    pub cyclic: bool,
    pub count: usize,
    pub missing_count: usize,
    /// The sentinel used for missing data, `None` when it is NaN
    pub missing_value: Option<f64>,
    pub points: Vec<PointValue>,
}

impl InterpolationReport {
    /// Pair each query point with its result
    pub fn new(
        variable: &str,
        units: Option<&str>,
        cyclic: bool,
        points: &QueryPoints,
        values: &[f64],
        missing: Missing<f64>,
    ) -> Result<Self> {
        if values.len() != points.len() {
            return Err(LinintError::invalid_input(format!(
                "{} results for {} query points",
                values.len(),
                points.len()
            )));
        }

        let points: Vec<PointValue> = points
            .iter()
            .zip(values)
            .map(|((lon, lat), &v)| PointValue {
                lon,
                lat,
                value: (!missing.is_missing(v)).then_some(v),
            })
            .collect();

        let missing_value = match missing {
            Missing::Nan => None,
            Missing::Sentinel(s) => Some(s),
        };

        Ok(Self {
            variable: variable.to_string(),
            units: units.map(str::to_string),
            cyclic,
            count: points.len(),
            missing_count: points.iter().filter(|p| p.value.is_none()).count(),
            missing_value,
            points,
        })
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
