//! # addrsym Utilities
//!
//! Shared utilities for addrsym.
//!
//! Currently this is the logging setup, built on `tracing`, used by the
//! `addrsym` binary.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{init_logging, init_logging_with_level, LogFormat, LogLevel, LoggingError};
pub use tracing::{debug, error, info, trace, warn};
