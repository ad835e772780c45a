//! Configuration management for linint.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LinintError, Result};

/// Command-line arguments for linint
#[derive(Parser, Debug)]
#[command(name = "linint")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the NetCDF file holding the source field
    pub netcdf_file: PathBuf,

    /// Name of the data variable to interpolate
    #[arg(short = 'v', long = "var", env = "LININT_VAR")]
    pub variable: Option<String>,

    /// Name of the latitude coordinate variable
    #[arg(long, env = "LININT_LAT_NAME")]
    pub lat_name: Option<String>,

    /// Name of the longitude coordinate variable
    #[arg(long, env = "LININT_LON_NAME")]
    pub lon_name: Option<String>,

    /// Indices fixing the leading (non lat/lon) dimensions, e.g. `0,0`
    #[arg(short, long = "index", value_delimiter = ',')]
    pub leading_indices: Option<Vec<usize>>,

    /// JSON file of query points: {"lon": [...], "lat": [...]}
    #[arg(short, long, conflicts_with = "random")]
    pub points: Option<PathBuf>,

    /// Number of uniformly random query points inside the grid bounds
    #[arg(short = 'n', long)]
    pub random: Option<usize>,

    /// Seed for the random query points
    #[arg(long, env = "LININT_SEED")]
    pub seed: Option<u64>,

    /// Treat longitude as periodic (`--cyclic` or `--cyclic=false`)
    #[arg(
        long,
        env = "LININT_CYCLIC",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub cyclic: Option<bool>,

    /// Append a copy of the first longitude column before interpolating
    #[arg(
        long,
        env = "LININT_ADD_CYCLIC",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub add_cyclic: Option<bool>,

    /// Write results here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of worker threads
    #[arg(short, long, env = "LININT_WORKERS")]
    pub workers: Option<usize>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "LININT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LININT_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Where the source field comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Data variable name
    #[serde(default)]
    pub variable: Option<String>,

    /// Latitude coordinate name (defaults to the variable's second-to-last dimension)
    #[serde(default)]
    pub lat_name: Option<String>,

    /// Longitude coordinate name (defaults to the variable's last dimension)
    #[serde(default)]
    pub lon_name: Option<String>,

    /// Indices for leading dimensions; missing entries default to 0
    #[serde(default)]
    pub leading_indices: Vec<usize>,
}

/// How interpolation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpConfig {
    /// Treat longitude as periodic
    #[serde(default)]
    pub cyclic: bool,

    /// Append a cyclic longitude column to the loaded field
    #[serde(default)]
    pub add_cyclic: bool,

    /// Number of worker threads (None = number of CPU cores)
    #[serde(default)]
    pub workers: Option<usize>,

    /// Query count from which evaluation switches to the thread pool
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

/// Where query points come from and where results go
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// JSON file of query points
    #[serde(default)]
    pub points_file: Option<PathBuf>,

    /// Number of random query points
    #[serde(default)]
    pub random_count: Option<usize>,

    /// Seed for random query points
    #[serde(default)]
    pub seed: Option<u64>,

    /// Output path (None = stdout)
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Data configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Interpolation configuration
    #[serde(default)]
    pub interp: InterpConfig,

    /// Query configuration
    #[serde(default)]
    pub query: QueryConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if args.variable.is_some() {
            config.data.variable = args.variable;
        }
        if args.lat_name.is_some() {
            config.data.lat_name = args.lat_name;
        }
        if args.lon_name.is_some() {
            config.data.lon_name = args.lon_name;
        }
        if let Some(indices) = args.leading_indices {
            config.data.leading_indices = indices;
        }
        if args.points.is_some() {
            config.query.points_file = args.points;
            config.query.random_count = None;
        }
        if args.random.is_some() {
            config.query.random_count = args.random;
            config.query.points_file = None;
        }
        if args.seed.is_some() {
            config.query.seed = args.seed;
        }
        if args.output.is_some() {
            config.query.output = args.output;
        }
        if let Some(cyclic) = args.cyclic {
            config.interp.cyclic = cyclic;
        }
        if let Some(add_cyclic) = args.add_cyclic {
            config.interp.add_cyclic = add_cyclic;
        }
        if args.workers.is_some() {
            config.interp.workers = args.workers;
        }
        if let Some(level) = args.log_level {
            config.log_level = level;
        }

        Ok((config, args.netcdf_file))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.data = other.data;
        self.interp.cyclic = other.interp.cyclic;
        self.interp.add_cyclic = other.interp.add_cyclic;
        if other.interp.workers.is_some() {
            self.interp.workers = other.interp.workers;
        }
        self.interp.parallel_threshold = other.interp.parallel_threshold;
        self.query = other.query;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.data.variable.as_deref() {
            Some(name) if !name.is_empty() => {}
            _ => {
                return Err(LinintError::Config {
                    message: "A data variable must be given (--var)".to_string(),
                });
            }
        }

        match (&self.query.points_file, self.query.random_count) {
            (Some(_), None) => {}
            (None, Some(0)) => {
                return Err(LinintError::Config {
                    message: "Random point count must be at least 1".to_string(),
                });
            }
            (None, Some(_)) => {}
            (Some(_), Some(_)) => {
                return Err(LinintError::Config {
                    message: "Give either a points file or a random point count, not both"
                        .to_string(),
                });
            }
            (None, None) => {
                return Err(LinintError::Config {
                    message: "No query points: give --points or --random".to_string(),
                });
            }
        }

        if self.interp.workers == Some(0) {
            return Err(LinintError::Config {
                message: "Worker count cannot be 0".to_string(),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(LinintError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            interp: InterpConfig::default(),
            query: QueryConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for InterpConfig {
    fn default() -> Self {
        Self {
            cyclic: false,
            add_cyclic: false,
            workers: None,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

// Default value functions for serde
fn default_parallel_threshold() -> usize {
    10_000
}

fn default_log_level() -> String {
    "info".to_string()
}
