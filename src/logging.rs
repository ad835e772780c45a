//! Logging utilities for linint.
//!
//! Logs go to stderr so that results written to stdout stay clean JSON.
//! Every significant step logs its name and duration as structured fields;
//! timed steps also carry a per-run identifier.

use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::error::LinintError;

/// Initialize the tracing subscriber at `log_level`.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    match details {
        Some(details) => info!(operation, details, "Starting operation"),
        None => info!(operation, "Starting operation"),
    }
}

/// Log how an interpolation batch went.
///
/// A batch where every point came back missing usually means the query
/// points and the grid do not overlap, so it is logged as a warning.
pub fn log_operation_end(operation: &str, start_time: Instant, points: usize, missing: usize) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if points > 0 && missing == points {
        warn!(
            operation,
            duration_ms, points, missing, "Every query point is missing"
        );
    } else {
        info!(
            operation,
            duration_ms, points, missing, "Operation completed"
        );
    }
}

/// Run `f`, logging its duration under a fresh run id
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let run_id = Uuid::new_v4();
    debug!(operation, run_id = %run_id, "Starting operation");

    let result = f();

    info!(
        operation,
        run_id = %run_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );
    result
}

/// Log the extent and hole count of a freshly loaded field
pub fn log_field_load_stats(
    file_path: &str,
    variable: &str,
    shape: (usize, usize),
    lat_range: (f64, f64),
    lon_range: (f64, f64),
    missing_count: usize,
) {
    info!(
        operation = "field_load",
        file_path,
        variable,
        rows = shape.0,
        cols = shape.1,
        lat_min = lat_range.0,
        lat_max = lat_range.1,
        lon_min = lon_range.0,
        lon_max = lon_range.1,
        missing = missing_count,
        "Field loaded"
    );
}

/// Log an error with context
pub fn log_error(error: &LinintError, context: &str) {
    error!(
        error = %error,
        context,
        kind = error.kind(),
        "Error occurred"
    );
}

/// Generate a unique run ID
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}
