//! Tracing and logging setup shared by the service binaries.

/// Initialize process-wide tracing/logging.
///
/// `default_level` is used unless `RUST_LOG` is set. Safe to call multiple
/// times; subsequent calls become no-ops.
pub fn init(default_level: &str) {
    tracing::init(default_level);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
