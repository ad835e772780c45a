//! NetCDF data loading functionality.
//!
//! This module reads one data variable and its latitude/longitude coordinate
//! variables from a NetCDF file, fixes any leading dimensions (time, depth,
//! ...) to single indices, and returns the resulting 2-D source grid.

use ndarray::{Array, Ix2};
use netcdf::{AttributeValue as NcAttributeValue, Extent, Variable as NetCDFVariable};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::DataConfig;
use crate::error::{LinintError, Result};
use crate::grid::SourceGrid;
use crate::interpolation::Missing;
use crate::logging::log_field_load_stats;

/// A 2-D field loaded from a NetCDF file
#[derive(Debug, Clone)]
pub struct FieldData {
    /// Data variable name
    pub variable: String,
    /// Latitude coordinate name
    pub lat_name: String,
    /// Longitude coordinate name
    pub lon_name: String,
    /// The field on its lat/lon grid
    pub grid: SourceGrid<f64>,
    /// Missing marker from `_FillValue` / `missing_value`, NaN otherwise
    pub missing: Missing<f64>,
    /// `units` attribute, if any
    pub units: Option<String>,
    /// `long_name` attribute, if any
    pub long_name: Option<String>,
}

/// Load a 2-D slice of a NetCDF variable as a source grid
pub fn load_field(path: &Path, config: &DataConfig) -> Result<FieldData> {
    // Check if the file exists
    if !path.exists() {
        return Err(LinintError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let file = netcdf::open(path)?;
    info!("Opened NetCDF file: {}", path.display());
    debug!("File has {} variables", file.variables().count());

    let var_name = config
        .variable
        .as_deref()
        .ok_or_else(|| LinintError::Config {
            message: "No data variable configured".to_string(),
        })?;
    let var = file
        .variable(var_name)
        .ok_or_else(|| LinintError::DataNotFound {
            message: format!("Variable not found: {}", var_name),
        })?;

    let dims: Vec<(String, usize)> = var
        .dimensions()
        .iter()
        .map(|dim| (dim.name().to_string(), dim.len()))
        .collect();
    if dims.len() < 2 {
        return Err(LinintError::InvalidParameter {
            param: "variable".to_string(),
            message: format!(
                "Variable {} has {} dimensions, need at least (lat, lon)",
                var_name,
                dims.len()
            ),
        });
    }

    let lat_name = config
        .lat_name
        .clone()
        .unwrap_or_else(|| dims[dims.len() - 2].0.clone());
    let lon_name = config
        .lon_name
        .clone()
        .unwrap_or_else(|| dims[dims.len() - 1].0.clone());

    let lat = read_coordinate(&file, &lat_name)?;
    let lon = read_coordinate(&file, &lon_name)?;

    let missing = fill_value(&var);
    let values = read_slice(&var, &dims, &config.leading_indices)?;

    // CF packing: unpack after holes have been identified on the raw values
    let scale = numeric_attribute(&var, "scale_factor").unwrap_or(1.0);
    let offset = numeric_attribute(&var, "add_offset").unwrap_or(0.0);
    let values = if scale != 1.0 || offset != 0.0 {
        let fill = missing.value();
        values.mapv(|v| {
            if missing.is_missing(v) {
                fill
            } else {
                v * scale + offset
            }
        })
    } else {
        values
    };

    let missing_count = values.iter().filter(|&&v| missing.is_missing(v)).count();
    let grid = SourceGrid::new(lat, lon, values)?;

    log_field_load_stats(
        &path.display().to_string(),
        var_name,
        grid.shape(),
        grid.lat_range(),
        grid.lon_range(),
        missing_count,
    );

    Ok(FieldData {
        variable: var_name.to_string(),
        lat_name,
        lon_name,
        grid,
        missing,
        units: text_attribute(&var, "units"),
        long_name: text_attribute(&var, "long_name"),
    })
}

/// Read a 1-D coordinate variable as f64
fn read_coordinate(file: &netcdf::File, name: &str) -> Result<Vec<f64>> {
    let var = file
        .variable(name)
        .ok_or_else(|| LinintError::DataNotFound {
            message: format!("Coordinate not found: {}", name),
        })?;

    if var.dimensions().len() != 1 {
        return Err(LinintError::InvalidParameter {
            param: name.to_string(),
            message: format!(
                "Coordinate {} must be 1-D, has {} dimensions",
                name,
                var.dimensions().len()
            ),
        });
    }

    Ok(var.get_values::<f64, _>(..)?)
}

/// Read the 2-D `(lat, lon)` slice at one index per leading dimension.
///
/// Only the slice itself is read from disk.
fn read_slice(
    var: &NetCDFVariable,
    dims: &[(String, usize)],
    leading_indices: &[usize],
) -> Result<Array<f64, Ix2>> {
    let leading = dims.len() - 2;
    if leading_indices.len() > leading {
        return Err(LinintError::InvalidParameter {
            param: "index".to_string(),
            message: format!(
                "Got {} leading indices but {} has only {} leading dimensions",
                leading_indices.len(),
                var.name(),
                leading
            ),
        });
    }

    let mut extents: Vec<Extent> = Vec::with_capacity(dims.len());
    for (axis, (dim_name, len)) in dims[..leading].iter().enumerate() {
        let index = leading_indices.get(axis).copied().unwrap_or(0);
        if index >= *len {
            return Err(LinintError::InvalidParameter {
                param: "index".to_string(),
                message: format!(
                    "Index {} out of bounds for dimension {} of size {}",
                    index, dim_name, len
                ),
            });
        }
        if axis >= leading_indices.len() && *len > 1 {
            warn!(
                "No index given for dimension {}, using 0 of {}",
                dim_name, len
            );
        }
        extents.push(Extent::from(index));
    }
    extents.push(Extent::from(..));
    extents.push(Extent::from(..));

    let rows = dims[leading].1;
    let cols = dims[leading + 1].1;
    let data: Vec<f64> = var.get_values::<f64, _>(extents.as_slice())?;
    debug!("Read {} values for a {}x{} slice", data.len(), rows, cols);

    Ok(Array::from_shape_vec((rows, cols), data)?)
}

/// Missing marker from `_FillValue`, falling back to `missing_value`
fn fill_value(var: &NetCDFVariable) -> Missing<f64> {
    match numeric_attribute(var, "_FillValue").or_else(|| numeric_attribute(var, "missing_value"))
    {
        Some(v) if !v.is_nan() => Missing::Sentinel(v),
        _ => Missing::Nan,
    }
}

/// A scalar numeric attribute as f64
fn numeric_attribute(var: &NetCDFVariable, name: &str) -> Option<f64> {
    let value = var.attribute(name)?.value().ok()?;
    match value {
        NcAttributeValue::Uchar(v) => Some(v as f64),
        NcAttributeValue::Schar(v) => Some(v as f64),
        NcAttributeValue::Ushort(v) => Some(v as f64),
        NcAttributeValue::Short(v) => Some(v as f64),
        NcAttributeValue::Uint(v) => Some(v as f64),
        NcAttributeValue::Int(v) => Some(v as f64),
        NcAttributeValue::Float(v) => Some(v as f64),
        NcAttributeValue::Double(v) => Some(v),
        NcAttributeValue::Floats(v) => v.first().map(|&x| x as f64),
        NcAttributeValue::Doubles(v) => v.first().copied(),
        _ => None,
    }
}

/// A text attribute
fn text_attribute(var: &NetCDFVariable, name: &str) -> Option<String> {
    match var.attribute(name)?.value().ok()? {
        NcAttributeValue::Str(s) => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Write a (time, lat, lon) file with a fill value at one node
    fn create_test_netcdf_file(path: &Path) -> Result<()> {
        let mut file = netcdf::create(path)?;

        file.add_dimension("time", 2)?;
        file.add_dimension("lat", 3)?;
        file.add_dimension("lon", 4)?;

        let mut lat_var = file.add_variable::<f64>("lat", &["lat"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_values(&[-10.0, 0.0, 10.0], ..)?;

        let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_values(&[0.0, 90.0, 180.0, 270.0], ..)?;

        let mut temp_var = file.add_variable::<f32>("temperature", &["time", "lat", "lon"])?;
        temp_var.put_attribute("units", "K")?;
        temp_var.put_attribute("long_name", "Temperature")?;
        temp_var.put_attribute("_FillValue", -999.0_f32)?;

        // time 0 holds 0..12, time 1 holds 100..112; one hole at time 1
        let mut data: Vec<f32> = (0..24)
            .map(|i| if i < 12 { i as f32 } else { 88.0 + i as f32 })
            .collect();
        data[12 + 5] = -999.0;
        temp_var.put_values(&data, ..)?;

        Ok(())
    }

    fn config_for(var: &str) -> DataConfig {
        DataConfig {
            variable: Some(var.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_file_not_found() {
        let result = load_field(Path::new("/nonexistent/file.nc"), &config_for("t"));
        match result.unwrap_err() {
            LinintError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("Expected IO error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_field_defaults_to_first_slice() -> Result<()> {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.nc");
        create_test_netcdf_file(&file_path)?;

        let field = load_field(&file_path, &config_for("temperature"))?;

        assert_eq!(field.lat_name, "lat");
        assert_eq!(field.lon_name, "lon");
        assert_eq!(field.grid.shape(), (3, 4));
        assert_eq!(field.grid.lon(), &[0.0, 90.0, 180.0, 270.0]);
        assert_eq!(field.grid.field()[[0, 0]], 0.0);
        assert_eq!(field.grid.field()[[2, 3]], 11.0);
        assert_eq!(field.missing, Missing::Sentinel(-999.0));
        assert_eq!(field.units.as_deref(), Some("K"));
        assert_eq!(field.long_name.as_deref(), Some("Temperature"));

        Ok(())
    }

    #[test]
    fn test_load_field_with_leading_index() -> Result<()> {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.nc");
        create_test_netcdf_file(&file_path)?;

        let config = DataConfig {
            leading_indices: vec![1],
            ..config_for("temperature")
        };
        let field = load_field(&file_path, &config)?;

        assert_eq!(field.grid.field()[[0, 0]], 100.0);
        assert_eq!(field.grid.field()[[1, 1]], -999.0);

        Ok(())
    }

    #[test]
    fn test_load_field_reads_one_slice_of_4d_variable() -> Result<()> {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("ocean.nc");
        {
            let mut file = netcdf::create(&file_path)?;
            file.add_dimension("time", 3)?;
            file.add_dimension("depth", 2)?;
            file.add_dimension("lat", 2)?;
            file.add_dimension("lon", 3)?;

            let mut lat_var = file.add_variable::<f64>("lat", &["lat"])?;
            lat_var.put_values(&[0.0, 1.0], ..)?;
            let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
            lon_var.put_values(&[0.0, 1.0, 2.0], ..)?;

            // value = 100 * time + 10 * depth + node
            let data: Vec<f64> = (0..3)
                .flat_map(|t| {
                    (0..2).flat_map(move |d| (0..6).map(move |k| (100 * t + 10 * d + k) as f64))
                })
                .collect();
            let mut temp_var =
                file.add_variable::<f64>("TEMP", &["time", "depth", "lat", "lon"])?;
            temp_var.put_values(&data, ..)?;
        }

        let config = DataConfig {
            leading_indices: vec![2, 1],
            ..config_for("TEMP")
        };
        let field = load_field(&file_path, &config)?;

        assert_eq!(field.grid.shape(), (2, 3));
        let values: Vec<f64> = field.grid.field().iter().copied().collect();
        assert_eq!(values, vec![210.0, 211.0, 212.0, 213.0, 214.0, 215.0]);

        Ok(())
    }

    #[test]
    fn test_load_field_errors() -> Result<()> {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.nc");
        create_test_netcdf_file(&file_path)?;

        // Unknown variable
        let result = load_field(&file_path, &config_for("salinity"));
        assert!(matches!(result, Err(LinintError::DataNotFound { .. })));

        // Index out of bounds
        let config = DataConfig {
            leading_indices: vec![2],
            ..config_for("temperature")
        };
        let result = load_field(&file_path, &config);
        assert!(matches!(result, Err(LinintError::InvalidParameter { .. })));

        // Too many indices
        let config = DataConfig {
            leading_indices: vec![0, 0],
            ..config_for("temperature")
        };
        let result = load_field(&file_path, &config);
        assert!(matches!(result, Err(LinintError::InvalidParameter { .. })));

        // 1-D variable
        let result = load_field(&file_path, &config_for("lat"));
        assert!(matches!(result, Err(LinintError::InvalidParameter { .. })));

        // Unknown coordinate override
        let config = DataConfig {
            lat_name: Some("latitude".to_string()),
            ..config_for("temperature")
        };
        let result = load_field(&file_path, &config);
        assert!(matches!(result, Err(LinintError::DataNotFound { .. })));

        Ok(())
    }
}
