//! Error types for linint.
//!
//! Input-shape problems are reported once, up front, as [`LinintError::InvalidInput`].
//! Per-point problems (out of range, missing neighbours) are not errors and
//! never surface here.

use thiserror::Error;

/// The main error type for linint operations.
#[derive(Error, Debug)]
pub enum LinintError {
    /// Malformed grid or query inputs
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// NetCDF file operation errors
    #[cfg(feature = "netcdf")]
    #[error("NetCDF error: {0}")]
    NetCdf(#[from] netcdf::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// Array shape errors
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LinintError {
    /// Shorthand for an [`LinintError::InvalidInput`] error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        LinintError::InvalidInput {
            message: message.into(),
        }
    }

    /// Shorthand for an [`LinintError::InvalidParameter`] error
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        LinintError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable name of the variant, for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            LinintError::InvalidInput { .. } => "invalid_input",
            #[cfg(feature = "netcdf")]
            LinintError::NetCdf(_) => "netcdf",
            LinintError::Io(_) => "io",
            LinintError::Config { .. } => "config",
            LinintError::InvalidParameter { .. } => "invalid_parameter",
            LinintError::DataNotFound { .. } => "data_not_found",
            LinintError::Shape(_) => "shape",
            LinintError::Json(_) => "json",
        }
    }
}

/// Convenience type alias for Results with LinintError
pub type Result<T> = std::result::Result<T, LinintError>;
