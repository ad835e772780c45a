//! Discrete colormaps: a list of colors with explicit bin boundaries.

use super::colormap::Colormap;
use crate::error::{LinintError, Result};

/// Listed colors, one per bin between consecutive boundaries.
///
/// Bin `i` covers `[bounds[i], bounds[i + 1])`. Values below the first
/// boundary take the first color and values at or above the last boundary
/// take the last color.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryColormap {
    name: String,
    colors: Vec<[u8; 4]>,
    bounds: Vec<f64>,
}

impl BoundaryColormap {
    /// Create a boundary colormap; needs `bounds.len() == colors.len() + 1`
    /// and strictly increasing bounds.
    pub fn new(name: impl Into<String>, colors: Vec<[u8; 4]>, bounds: Vec<f64>) -> Result<Self> {
        if colors.is_empty() {
            return Err(LinintError::invalid_parameter(
                "colors",
                "at least one color is required",
            ));
        }
        if bounds.len() != colors.len() + 1 {
            return Err(LinintError::invalid_parameter(
                "bounds",
                format!(
                    "{} colors need {} bounds, got {}",
                    colors.len(),
                    colors.len() + 1,
                    bounds.len()
                ),
            ));
        }
        if bounds.windows(2).any(|pair| !(pair[1] > pair[0])) {
            return Err(LinintError::invalid_parameter(
                "bounds",
                "bounds must be strictly increasing",
            ));
        }

        Ok(Self {
            name: name.into(),
            colors,
            bounds,
        })
    }

    /// Wind speed palette with 4-unit bins from 0 to 52, dark blue to maroon
    pub fn stream_speed() -> Self {
        const PALETTE: [[u8; 3]; 13] = [
            [0, 0, 139],     // darkblue
            [0, 0, 205],     // mediumblue
            [0, 0, 255],     // blue
            [100, 149, 237], // cornflowerblue
            [135, 206, 235], // skyblue
            [127, 255, 212], // aquamarine
            [0, 255, 0],     // lime
            [173, 255, 47],  // greenyellow
            [255, 215, 0],   // gold
            [255, 165, 0],   // orange
            [255, 69, 0],    // orangered
            [255, 0, 0],     // red
            [128, 0, 0],     // maroon
        ];

        Self {
            name: "stream_speed".to_string(),
            colors: PALETTE.iter().map(|c| [c[0], c[1], c[2], 255]).collect(),
            bounds: (0..=13).map(|i| (i * 4) as f64).collect(),
        }
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    pub fn colors(&self) -> &[[u8; 4]] {
        &self.colors
    }

    /// Index of the bin containing `value`
    pub fn bin(&self, value: f64) -> usize {
        let upper = self.bounds.partition_point(|&b| b <= value);
        upper.saturating_sub(1).min(self.colors.len() - 1)
    }

    /// Color of the bin containing `value`
    pub fn map_value(&self, value: f64) -> [u8; 4] {
        self.colors[self.bin(value)]
    }
}

impl Colormap for BoundaryColormap {
    fn map_normalized(&self, value: f64) -> [u8; 4] {
        let n = self.colors.len();
        let index = (value.clamp(0.0, 1.0) * n as f64).floor() as usize;
        self.colors[index.min(n - 1)]
    }

    /// Bins by the colormap's own boundaries; `min` and `max` are ignored.
    fn map(&self, value: f64, _min: f64, _max: f64) -> [u8; 4] {
        self.map_value(value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_speed_bins() {
        let colormap = BoundaryColormap::stream_speed();
        assert_eq!(colormap.colors().len(), 13);
        assert_eq!(colormap.bounds().first(), Some(&0.0));
        assert_eq!(colormap.bounds().last(), Some(&52.0));

        assert_eq!(colormap.bin(0.0), 0);
        assert_eq!(colormap.bin(3.99), 0);
        assert_eq!(colormap.bin(4.0), 1);
        assert_eq!(colormap.bin(25.0), 6);
        assert_eq!(colormap.bin(51.9), 12);

        // Clipping on both ends
        assert_eq!(colormap.bin(-5.0), 0);
        assert_eq!(colormap.bin(52.0), 12);
        assert_eq!(colormap.bin(300.0), 12);

        assert_eq!(colormap.map_value(25.0), [0, 255, 0, 255]);
        assert_eq!(colormap.map(60.0, 0.0, 1.0), [128, 0, 0, 255]);
    }

    #[test]
    fn test_map_normalized_uses_uniform_bins() {
        let colormap = BoundaryColormap::new(
            "pair",
            vec![[0, 0, 0, 255], [255, 255, 255, 255]],
            vec![0.0, 1.0, 100.0],
        )
        .unwrap();

        assert_eq!(colormap.map_normalized(0.49), [0, 0, 0, 255]);
        assert_eq!(colormap.map_normalized(0.5), [255, 255, 255, 255]);
        assert_eq!(colormap.map_normalized(1.0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_invalid_boundaries() {
        let colors = vec![[0, 0, 0, 255], [255, 255, 255, 255]];
        assert!(BoundaryColormap::new("x", colors.clone(), vec![0.0, 1.0]).is_err());
        assert!(BoundaryColormap::new("x", colors, vec![0.0, 2.0, 1.0]).is_err());
        assert!(BoundaryColormap::new("x", vec![], vec![0.0]).is_err());
    }
}
