//! Continuous colormaps sampled from `colorgrad` gradients.
//!
//! Each gradient is sampled once into a lookup table so that mapping a
//! value is a table read, and the colormap stays `Send + Sync`. Presets
//! come straight from `colorgrad`; the diverging maps it lacks are built
//! from their anchor colors.

use super::colormap::Colormap;
use crate::error::{LinintError, Result};

/// Number of entries in each sampled lookup table
const LUT_SIZE: usize = 256;

/// A colormap backed by a sampled `colorgrad` gradient
pub struct GradientColormap {
    name: &'static str,
    lut: Vec<[u8; 4]>,
}

impl GradientColormap {
    /// Sample `gradient` into a lookup table
    pub fn from_gradient(name: &'static str, gradient: &colorgrad::Gradient) -> Self {
        let (start, end) = gradient.domain();
        let lut = (0..LUT_SIZE)
            .map(|i| {
                let t = i as f64 / (LUT_SIZE - 1) as f64;
                gradient.at(start + t * (end - start)).to_rgba8()
            })
            .collect();
        Self { name, lut }
    }

    /// Linear gradient through evenly spaced hex color stops
    fn from_stops(name: &'static str, stops: &[&str]) -> Result<Self> {
        let gradient = colorgrad::CustomGradient::new()
            .html_colors(stops)
            .build()
            .map_err(|e| LinintError::invalid_parameter("colormap", format!("{name}: {e}")))?;
        Ok(Self::from_gradient(name, &gradient))
    }

    /// Viridis - perceptually uniform, colorblind-friendly
    pub fn viridis() -> Self {
        Self::from_gradient("viridis", &colorgrad::viridis())
    }

    pub fn plasma() -> Self {
        Self::from_gradient("plasma", &colorgrad::plasma())
    }

    pub fn inferno() -> Self {
        Self::from_gradient("inferno", &colorgrad::inferno())
    }

    pub fn magma() -> Self {
        Self::from_gradient("magma", &colorgrad::magma())
    }

    /// Cividis - colorblind-friendly alternative to viridis
    pub fn cividis() -> Self {
        Self::from_gradient("cividis", &colorgrad::cividis())
    }

    /// Turbo - a smooth rainbow, the usual replacement for jet
    pub fn turbo() -> Self {
        Self::from_gradient("turbo", &colorgrad::turbo())
    }

    /// Red to white to blue
    pub fn rd_bu() -> Self {
        Self::from_gradient("rdbu", &colorgrad::rd_bu())
    }

    /// Blue to red through light gray, for anomalies
    pub fn coolwarm() -> Result<Self> {
        Self::from_stops("coolwarm", &["#3b4cc0", "#dddddd", "#b40426"])
    }

    /// Dark blue to dark red with a pure white center
    pub fn seismic() -> Result<Self> {
        Self::from_stops(
            "seismic",
            &["#00004c", "#0000ff", "#ffffff", "#ff0000", "#7f0000"],
        )
    }
}

impl Colormap for GradientColormap {
    fn map_normalized(&self, value: f64) -> [u8; 4] {
        let position = value.clamp(0.0, 1.0) * (LUT_SIZE - 1) as f64;
        self.lut[position.round() as usize]
    }

    fn name(&self) -> &str {
        self.name
    }
}
