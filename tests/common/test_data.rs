//! Test data generation utilities.
//!
//! This module provides functions to generate NetCDF test files with known
//! data patterns, so interpolated values can be checked against closed forms.

use std::path::Path;

// Use the netcdf crate's error type directly
use netcdf::Error;
type Result<T> = std::result::Result<T, Error>;

/// Fill value written over the land box of [`create_sst_nc`]
pub const SST_FILL: f32 = -1.0e34;

/// Longitude spacing of the sst-like grid, in degrees
pub const SST_DLON: f64 = 2.0;

/// Latitude spacing of the sst-like grid, in degrees
pub const SST_DLAT: f64 = 4.0;

/// Closed form of the sst-like `TEMP` field
///
/// Linear in lon and lat, so bilinear interpolation reproduces it exactly
/// inside any cell that does not touch the seam or the land box.
pub fn sst_value(time: usize, depth: usize, lon: f64, lat: f64) -> f64 {
    10.0 + 0.1 * lat + 0.01 * lon + time as f64 + 0.5 * depth as f64
}

/// Whether a node lies in the land box of [`create_sst_nc`]
pub fn is_land(lon: f64, lat: f64) -> bool {
    (100.0..=120.0).contains(&lon) && (-8.0..=8.0).contains(&lat)
}

/// Creates an ocean-model-like file with `TEMP(time, depth, lat, lon)`.
///
/// The grid is global: lon = 0, 2, ..., 358 and lat = -88, -84, ..., 88.
/// Nodes inside a land box hold `_FillValue`.
pub fn create_sst_nc(path: &Path) -> Result<()> {
    let mut file = netcdf::create(path)?;

    let lon_values: Vec<f64> = (0..180).map(|i| i as f64 * SST_DLON).collect();
    let lat_values: Vec<f64> = (0..45).map(|j| -88.0 + j as f64 * SST_DLAT).collect();
    let (ntime, ndepth) = (2, 2);

    file.add_dimension("time", ntime)?;
    file.add_dimension("depth", ndepth)?;
    file.add_dimension("lat", lat_values.len())?;
    file.add_dimension("lon", lon_values.len())?;

    file.add_attribute("title", "SST-like Test Data")?;
    file.add_attribute("institution", "linint test suite")?;

    let mut data_values = Vec::with_capacity(ntime * ndepth * lat_values.len() * lon_values.len());
    for t in 0..ntime {
        for d in 0..ndepth {
            for &lat in &lat_values {
                for &lon in &lon_values {
                    if is_land(lon, lat) {
                        data_values.push(SST_FILL);
                    } else {
                        data_values.push(sst_value(t, d, lon, lat) as f32);
                    }
                }
            }
        }
    }

    {
        let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_values(&lon_values, &[..])?;
    }

    {
        let mut lat_var = file.add_variable::<f64>("lat", &["lat"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_values(&lat_values, &[..])?;
    }

    {
        let mut temp_var = file.add_variable::<f32>("TEMP", &["time", "depth", "lat", "lon"])?;
        temp_var.put_attribute("units", "degC")?;
        temp_var.put_attribute("long_name", "Sea Temperature")?;
        temp_var.put_attribute("_FillValue", SST_FILL)?;
        temp_var.put_values(&data_values, &[.., .., .., ..])?;
    }

    Ok(())
}

/// Creates a file with `z(latitude, longitude)` stored north to south.
///
/// latitude = 60, 30, 0, -30, -60 and longitude = 0, 90, 180, 270, with
/// `z = latitude + longitude / 10`. The coordinate names differ from their
/// dimension names' usual spelling to exercise name overrides.
pub fn create_descending_lat_nc(path: &Path) -> Result<()> {
    let mut file = netcdf::create(path)?;

    let lat_values = [60.0_f64, 30.0, 0.0, -30.0, -60.0];
    let lon_values = [0.0_f64, 90.0, 180.0, 270.0];

    file.add_dimension("latitude", lat_values.len())?;
    file.add_dimension("longitude", lon_values.len())?;

    let data_values: Vec<f64> = lat_values
        .iter()
        .flat_map(|&lat| lon_values.iter().map(move |&lon| lat + lon / 10.0))
        .collect();

    {
        let mut lat_var = file.add_variable::<f64>("latitude", &["latitude"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_values(&lat_values, &[..])?;
    }

    {
        let mut lon_var = file.add_variable::<f64>("longitude", &["longitude"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_values(&lon_values, &[..])?;
    }

    {
        let mut z_var = file.add_variable::<f64>("z", &["latitude", "longitude"])?;
        z_var.put_attribute("units", "m")?;
        z_var.put_values(&data_values, &[.., ..])?;
    }

    Ok(())
}
