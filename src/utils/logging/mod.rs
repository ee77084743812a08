//! Logging utilities for intake output
//!
//! This module provides logger initialisation and shared log formats.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{init_logging, log_rejection, log_triage_outcome};
