//! Store metrics collection.
//!
//! Counts every repository call by operation and table so that read and
//! write volume can be watched next to the HTTP metrics.

use metrics::counter;

/// Metric name constants for consistency.
pub mod names {
    /// Total store operations by operation and table.
    pub const OPERATIONS_TOTAL: &str = "hiring_store_operations_total";
}

/// Table labels.
pub mod tables {
    pub const DEPARTMENTS: &str = "departments";
    pub const RECRUITERS: &str = "recruiters";
    pub const POSITIONS: &str = "positions";
}

/// Record a completed store operation.
pub fn record_operation(operation: &'static str, table: &'static str) {
    counter!(
        names::OPERATIONS_TOTAL,
        "operation" => operation,
        "table" => table
    )
    .increment(1);
}
