//! Colormap implementations for turning field values into colors.
//!
//! This module provides matplotlib-inspired continuous colormaps and
//! boundary-normalized discrete palettes.

pub mod colormap;
pub mod discrete;
pub mod gradient;

pub use colormap::{get_colormap, Colormap};

// Re-export commonly used colormaps
pub use discrete::BoundaryColormap;
pub use gradient::GradientColormap;
