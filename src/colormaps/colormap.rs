//! Colormap trait and utilities.
//!
//! This module defines the common interface for all colormaps.

use crate::error::{LinintError, Result};

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f64) -> [u8; 4];

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f64, min: f64, max: f64) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Get a colormap by name
pub fn get_colormap(name: &str) -> Result<Box<dyn Colormap>> {
    use super::{discrete::BoundaryColormap, gradient::GradientColormap};

    match name.to_lowercase().as_str() {
        "viridis" => Ok(Box::new(GradientColormap::viridis())),
        "plasma" => Ok(Box::new(GradientColormap::plasma())),
        "inferno" => Ok(Box::new(GradientColormap::inferno())),
        "magma" => Ok(Box::new(GradientColormap::magma())),
        "cividis" => Ok(Box::new(GradientColormap::cividis())),
        "turbo" => Ok(Box::new(GradientColormap::turbo())),
        "rdbu" => Ok(Box::new(GradientColormap::rd_bu())),
        "coolwarm" => Ok(Box::new(GradientColormap::coolwarm()?)),
        "seismic" => Ok(Box::new(GradientColormap::seismic()?)),
        "stream_speed" => Ok(Box::new(BoundaryColormap::stream_speed())),
        _ => Err(LinintError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!("Unknown colormap: {}", name),
        }),
    }
}
