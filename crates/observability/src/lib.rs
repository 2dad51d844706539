//! Tracing/logging setup shared by the binaries.

pub mod logging;

pub use logging::{LogConfig, LogFormat, ParseLogFormatError};

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LogConfig) {
    logging::init(config);
}
